use leptos::prelude::*;

use crate::routes;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="bg-gradient-to-r from-blue-600 to-indigo-700 text-white py-20">
            <div class="container mx-auto px-6">
                <div class="flex flex-col md:flex-row items-center">
                    <div class="md:w-1/2 mb-10 md:mb-0">
                        <h1 class="text-4xl md:text-5xl font-bold mb-6">"Find Your Perfect Stay"</h1>
                        <p class="text-xl mb-8">
                            "Discover and book hostels, hotels, and homes for short-term stays or long-term leasing."
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4">
                            <a
                                href=routes::PROPERTIES
                                class="bg-white text-indigo-700 px-6 py-3 rounded-lg font-semibold hover:bg-gray-100 transition duration-300"
                            >
                                "Browse Properties"
                            </a>
                            <a
                                href=routes::REGISTER
                                class="bg-transparent border-2 border-white px-6 py-3 rounded-lg font-semibold hover:bg-white hover:text-indigo-700 transition duration-300"
                            >
                                "Sign Up"
                            </a>
                        </div>
                    </div>
                    <div class="md:w-1/2">
                        <div class="relative h-64 md:h-96 w-full rounded-lg overflow-hidden shadow-xl">
                            // Image slot, no asset pipeline yet
                            <div class="absolute inset-0 bg-gray-300 flex items-center justify-center">
                                <span class="text-gray-600">"Property Image"</span>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
