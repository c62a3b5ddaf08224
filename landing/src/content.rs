//! Literal page content: categories, featured stays, the how-it-works steps.

use crate::routes;

/// One property type shown in the "Find by Property Type" grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub label: &'static str,
    pub blurb: &'static str,
}

pub const CATEGORIES: [Category; 3] = [
    Category {
        label: "Hostels",
        blurb: "Student accommodations with shared facilities.",
    },
    Category {
        label: "Hotels & Motels",
        blurb: "Short-term stays with premium amenities.",
    },
    Category {
        label: "Homes for Lease",
        blurb: "Long-term residential properties for leasing.",
    },
];

impl Category {
    pub fn browse_href(&self) -> String {
        routes::properties_by_type(self.label)
    }

    pub fn browse_label(&self) -> String {
        format!("Browse {} →", self.label)
    }

    pub fn image_caption(&self) -> String {
        format!("{} Image", self.label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    Hostel,
    Hotel,
    Home,
}

impl PropertyKind {
    pub fn label(self) -> &'static str {
        match self {
            PropertyKind::Hostel => "Hostel",
            PropertyKind::Hotel => "Hotel",
            PropertyKind::Home => "Home",
        }
    }
}

/// Placeholder listing on the landing page. Everything is derived from `item`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeaturedProperty {
    pub item: u32,
}

pub const FEATURED: [FeaturedProperty; 3] = [
    FeaturedProperty { item: 1 },
    FeaturedProperty { item: 2 },
    FeaturedProperty { item: 3 },
];

pub const FEATURED_DESCRIPTION: &str =
    "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Duis at velit maximus.";

impl FeaturedProperty {
    pub fn name(self) -> String {
        format!("Property Name {}", self.item)
    }

    /// Item 1 is a hostel, 2 a hotel, anything else a home.
    pub fn kind(self) -> PropertyKind {
        match self.item {
            1 => PropertyKind::Hostel,
            2 => PropertyKind::Hotel,
            _ => PropertyKind::Home,
        }
    }

    pub fn nightly_price(self) -> u32 {
        self.item * 50 + 50
    }

    pub fn price_label(self) -> String {
        format!("${}/night", self.nightly_price())
    }

    pub fn detail_href(self) -> String {
        routes::property_detail(self.item)
    }

    pub fn image_caption(self) -> String {
        format!("Property {} Image", self.item)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const STEPS: [Step; 3] = [
    Step {
        icon: "🔍",
        title: "Search",
        description: "Browse our extensive catalog of properties based on your preferences.",
    },
    Step {
        icon: "📅",
        title: "Book",
        description: "Reserve your stay with our secure booking system and payment options.",
    },
    Step {
        icon: "🏠",
        title: "Stay",
        description: "Enjoy your comfortable stay with our customer support available 24/7.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn featured_prices() {
        let prices: Vec<u32> = FEATURED.iter().map(|f| f.nightly_price()).collect();
        assert_eq!(prices, [100, 150, 200]);
        assert_eq!(FEATURED[0].price_label(), "$100/night");
    }

    #[test]
    fn featured_kinds_follow_item_number() {
        let kinds: Vec<_> = FEATURED.iter().map(|f| f.kind().label()).collect();
        assert_eq!(kinds, ["Hostel", "Hotel", "Home"]);
        assert_eq!(FeaturedProperty { item: 7 }.kind(), PropertyKind::Home);
    }

    #[test]
    fn featured_links_and_captions() {
        let second = FEATURED[1];
        assert_eq!(second.name(), "Property Name 2");
        assert_eq!(second.detail_href(), "/properties/2");
        assert_eq!(second.image_caption(), "Property 2 Image");
    }

    #[test]
    fn category_browse_links() {
        let hrefs: Vec<String> = CATEGORIES.iter().map(Category::browse_href).collect();
        assert_eq!(
            hrefs,
            [
                "/properties?type=hostels",
                "/properties?type=hotels & motels",
                "/properties?type=homes for lease",
            ]
        );
        assert_eq!(CATEGORIES[0].browse_label(), "Browse Hostels →");
        assert_eq!(CATEGORIES[2].image_caption(), "Homes for Lease Image");
    }

    #[test]
    fn step_titles() {
        let titles: Vec<_> = STEPS.iter().map(|s| s.title).collect();
        assert_eq!(titles, ["Search", "Book", "Stay"]);
    }
}
