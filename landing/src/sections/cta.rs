use leptos::prelude::*;

use crate::routes;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="bg-indigo-700 text-white py-16">
            <div class="container mx-auto px-6 text-center">
                <h2 class="text-3xl font-bold mb-6">"Ready to Find Your Perfect Stay?"</h2>
                <p class="text-xl mb-8 max-w-2xl mx-auto">
                    "Join thousands of satisfied customers who have found their ideal accommodations through our platform."
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a
                        href=routes::PROPERTIES
                        class="bg-white text-indigo-700 px-6 py-3 rounded-lg font-semibold hover:bg-gray-100 transition duration-300"
                    >
                        "Browse Properties"
                    </a>
                    <a
                        href=routes::CONTACT
                        class="bg-transparent border-2 border-white px-6 py-3 rounded-lg font-semibold hover:bg-white hover:text-indigo-700 transition duration-300"
                    >
                        "Contact Us"
                    </a>
                </div>
            </div>
        </section>
    }
}
