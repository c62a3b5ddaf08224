use leptos::prelude::*;

use crate::content::{CATEGORIES, Category};

/// "Find by Property Type" grid, one card per category.
#[component]
pub fn Categories() -> impl IntoView {
    view! {
        <section class="py-16 bg-gray-50">
            <div class="container mx-auto px-6">
                <h2 class="text-3xl font-bold text-center mb-12">"Find by Property Type"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    {CATEGORIES
                        .into_iter()
                        .map(|category| view! { <CategoryCard category=category /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn CategoryCard(category: Category) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-md overflow-hidden hover:shadow-lg transition duration-300">
            <div class="h-48 bg-gray-200 relative">
                <div class="absolute inset-0 flex items-center justify-center">
                    <span class="text-gray-600">{category.image_caption()}</span>
                </div>
            </div>
            <div class="p-6">
                <h3 class="text-xl font-semibold mb-2">{category.label}</h3>
                <p class="text-gray-600 mb-4">{category.blurb}</p>
                <a href=category.browse_href() class="text-indigo-600 font-medium hover:text-indigo-800">
                    {category.browse_label()}
                </a>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn renders_one_card_per_category() {
        let html = view! { <Categories /> }.to_html();
        for category in CATEGORIES {
            assert!(html.contains(category.blurb), "missing {}", category.label);
        }
        assert!(html.contains("href=\"/properties?type=hostels\""));
        assert!(html.contains("Homes for Lease Image"));
    }

    #[test]
    fn ampersand_label_link_is_lowercased_verbatim() {
        // The raw href keeps the space and ampersand; only HTML escaping applies.
        let html = view! { <CategoryCard category=CATEGORIES[1] /> }.to_html();
        assert!(html.contains("href=\"/properties?type=hotels &amp; motels\""));
        assert!(html.contains("Browse Hotels &amp; Motels →"));
    }
}
