use leptos::prelude::*;

use crate::config::use_site_config;
use crate::routes::{self, LOGIN_LINK, NavLink, SIGN_UP_LINK};

static EXPLORE: [NavLink; 4] = [
    NavLink::new("Properties", routes::PROPERTIES),
    NavLink::new("Hostels", routes::HOSTELS),
    NavLink::new("Hotels", routes::HOTELS),
    NavLink::new("Homes", routes::HOMES),
];

static COMPANY: [NavLink; 2] = [
    NavLink::new("About", routes::ABOUT),
    NavLink::new("Contact", routes::CONTACT),
];

static ACCOUNT: [NavLink; 2] = [LOGIN_LINK, SIGN_UP_LINK];

#[component]
pub fn Footer() -> impl IntoView {
    let config = use_site_config();
    let copyright = format!(
        "© {} {}. All rights reserved.",
        config.copyright_year, config.brand_name
    );

    view! {
        <footer class="bg-gray-900 text-gray-300">
            <div class="container mx-auto px-6 py-12">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8">
                    <div>
                        <div class="flex items-center space-x-2 mb-4">
                            <div class="w-8 h-8 bg-indigo-600 rounded-md flex items-center justify-center">
                                <span class="text-white font-bold">{config.brand_mark.to_string()}</span>
                            </div>
                            <span class="text-lg font-bold text-white">{config.brand_name}</span>
                        </div>
                        <p class="text-sm text-gray-400">{config.tagline}</p>
                    </div>
                    <LinkColumn title="Explore" links=&EXPLORE />
                    <LinkColumn title="Company" links=&COMPANY />
                    <LinkColumn title="Account" links=&ACCOUNT />
                </div>
                <p class="border-t border-gray-800 mt-10 pt-6 text-sm text-center text-gray-500">
                    {copyright}
                </p>
            </div>
        </footer>
    }
}

#[component]
fn LinkColumn(title: &'static str, links: &'static [NavLink]) -> impl IntoView {
    view! {
        <div>
            <h4 class="text-white font-semibold mb-4">{title}</h4>
            <ul class="space-y-2">
                {links
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a href=link.href class="hover:text-white transition duration-300">
                                    {link.label}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SiteConfig;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn footer_lists_every_column() {
        let owner = Owner::new();
        owner.with(|| {
            let html = view! { <Footer /> }.to_html();
            for title in ["Explore", "Company", "Account"] {
                assert!(html.contains(title), "missing column {title}");
            }
            for link in EXPLORE.iter().chain(&COMPANY).chain(&ACCOUNT) {
                assert!(html.contains(&format!("href=\"{}\"", link.href)));
            }
        });
    }

    #[test]
    fn copyright_uses_config() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(SiteConfig::default().with_copyright_year(2030));
            let html = view! { <Footer /> }.to_html();
            assert!(html.contains("© 2030 HostelHome. All rights reserved."));
        });
    }
}
