// Home page - hero, categories, featured stays, steps, CTA
use crate::sections::{CallToAction, Categories, FeaturedProperties, Hero, HowItWorks};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen">
            <Hero />
            <Categories />
            <FeaturedProperties />
            <HowItWorks />
            <CallToAction />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn sections_render_in_order() {
        let html = view! { <HomePage /> }.to_html();
        let order = [
            "Find Your Perfect Stay",
            "Find by Property Type",
            "Featured Properties",
            "How It Works",
            "Ready to Find Your Perfect Stay?",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|heading| html.find(heading).unwrap_or_else(|| panic!("missing {heading}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }
}
