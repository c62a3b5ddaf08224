use crate::routes;
use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="py-24">
            <div class="container mx-auto px-6 text-center">
                <h1 class="text-4xl font-bold mb-4">"Page not found"</h1>
                <p class="text-gray-600 mb-8">"The page you are looking for does not exist or has moved."</p>
                <a
                    href=routes::HOME
                    class="inline-block bg-indigo-600 text-white px-6 py-3 rounded-lg font-semibold hover:bg-indigo-700 transition duration-300"
                >
                    "Back to home"
                </a>
            </div>
        </section>
    }
}
