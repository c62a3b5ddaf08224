use leptos::prelude::*;

use crate::content::{FEATURED, FEATURED_DESCRIPTION, FeaturedProperty};
use crate::routes;

#[component]
pub fn FeaturedProperties() -> impl IntoView {
    view! {
        <section class="py-16">
            <div class="container mx-auto px-6">
                <h2 class="text-3xl font-bold text-center mb-12">"Featured Properties"</h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {FEATURED
                        .into_iter()
                        .map(|property| view! { <PropertyCard property=property /> })
                        .collect_view()}
                </div>
                <div class="text-center mt-10">
                    <a
                        href=routes::PROPERTIES
                        class="inline-block bg-indigo-600 text-white px-6 py-3 rounded-lg font-semibold hover:bg-indigo-700 transition duration-300"
                    >
                        "View All Properties"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn PropertyCard(property: FeaturedProperty) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow-md overflow-hidden hover:shadow-lg transition duration-300">
            <div class="h-48 bg-gray-200 relative">
                <div class="absolute inset-0 flex items-center justify-center">
                    <span class="text-gray-600">{property.image_caption()}</span>
                </div>
            </div>
            <div class="p-6">
                <div class="flex justify-between items-start mb-2">
                    <h3 class="text-xl font-semibold">{property.name()}</h3>
                    <span class="bg-indigo-100 text-indigo-800 text-xs px-2 py-1 rounded-full">
                        {property.kind().label()}
                    </span>
                </div>
                <p class="text-gray-600 mb-4">{FEATURED_DESCRIPTION}</p>
                <div class="flex justify-between items-center">
                    <span class="text-lg font-bold text-indigo-600">{property.price_label()}</span>
                    <a
                        href=property.detail_href()
                        class="bg-indigo-600 text-white px-4 py-2 rounded hover:bg-indigo-700 transition duration-300"
                    >
                        "View Details"
                    </a>
                </div>
            </div>
        </div>
    }
}
