use leptos::prelude::*;

use crate::content::STEPS;

#[component]
pub fn HowItWorks() -> impl IntoView {
    view! {
        <section class="py-16 bg-gray-50">
            <div class="container mx-auto px-6">
                <h2 class="text-3xl font-bold text-center mb-12">"How It Works"</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 text-center">
                    {STEPS
                        .into_iter()
                        .map(|step| {
                            view! {
                                <div class="bg-white p-8 rounded-lg shadow-md">
                                    <div class="text-4xl mb-4">{step.icon}</div>
                                    <h3 class="text-xl font-semibold mb-3">{step.title}</h3>
                                    <p class="text-gray-600">{step.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
