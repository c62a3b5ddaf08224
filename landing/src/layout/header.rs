//! Top navigation bar with the mobile hamburger menu.

use leptos::prelude::*;
use tracing::debug;

use crate::config::use_site_config;
use crate::routes::{self, LOGIN_LINK, NavLink, PRIMARY_NAV, SIGN_UP_LINK};
use crate::state::MenuState;

const LINK_CLASS: &str = "text-gray-600 hover:text-indigo-600 transition duration-300";
const SIGN_UP_CLASS: &str =
    "bg-indigo-600 text-white px-4 py-2 rounded-lg hover:bg-indigo-700 transition duration-300";

/// Sticky site header. Owns the mobile menu flag.
#[component]
pub fn Header() -> impl IntoView {
    let config = use_site_config();
    let menu = RwSignal::new(MenuState::default());

    view! {
        <header class="bg-white shadow-sm sticky top-0 z-50">
            <div class="container mx-auto px-6 py-4">
                <div class="flex justify-between items-center">
                    <Brand name=config.brand_name mark=config.brand_mark />

                    <nav class="hidden md:flex items-center space-x-8">
                        {PRIMARY_NAV
                            .into_iter()
                            .map(|link| view! { <a href=link.href class=LINK_CLASS>{link.label}</a> })
                            .collect_view()}
                    </nav>

                    <div class="hidden md:flex items-center space-x-4">
                        <a href=LOGIN_LINK.href class=LINK_CLASS>{LOGIN_LINK.label}</a>
                        <a href=SIGN_UP_LINK.href class=SIGN_UP_CLASS>{SIGN_UP_LINK.label}</a>
                    </div>

                    <MenuToggle menu=menu />
                </div>

                <MobilePanel menu=menu />
            </div>
        </header>
    }
}

/// Square logo letter plus the brand name, linking home.
#[component]
pub fn Brand(name: String, mark: char) -> impl IntoView {
    view! {
        <a href=routes::HOME class="flex items-center space-x-2">
            <div class="w-10 h-10 bg-indigo-600 rounded-md flex items-center justify-center">
                <span class="text-white font-bold text-xl">{mark.to_string()}</span>
            </div>
            <span class="text-xl font-bold text-gray-800">{name}</span>
        </a>
    }
}

/// Hamburger button, visible below the `md` breakpoint.
#[component]
pub fn MenuToggle(menu: RwSignal<MenuState>) -> impl IntoView {
    let toggle_menu = move |_| {
        menu.update(MenuState::toggle);
        debug!(open = menu.get_untracked().is_open(), "mobile menu toggled");
    };

    view! {
        <button
            type="button"
            class="md:hidden text-gray-600 focus:outline-none"
            aria-controls="mobile-menu"
            aria-expanded=move || menu.get().is_open().to_string()
            aria-label=move || menu.get().toggle_label()
            on:click=toggle_menu
        >
            <svg
                class="w-6 h-6"
                fill="none"
                stroke="currentColor"
                viewBox="0 0 24 24"
                xmlns="http://www.w3.org/2000/svg"
            >
                <path
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    stroke-width="2"
                    d=move || menu.get().icon_path()
                ></path>
            </svg>
        </button>
    }
}

/// Collapsible link list. Rendered only while the menu is open; every link
/// closes it before the browser navigates.
#[component]
pub fn MobilePanel(menu: RwSignal<MenuState>) -> impl IntoView {
    let close_menu = move || {
        menu.update(MenuState::close);
        debug!("mobile menu closed by navigation");
    };

    let mobile_link = move |link: NavLink, class: &'static str| {
        view! {
            <a href=link.href class=class on:click=move |_| close_menu()>
                {link.label}
            </a>
        }
    };

    view! {
        <Show when=move || menu.get().is_open()>
            <div id="mobile-menu" class="md:hidden mt-4 pb-4">
                <nav class="flex flex-col space-y-4">
                    {PRIMARY_NAV
                        .into_iter()
                        .map(|link| mobile_link(link, LINK_CLASS))
                        .collect_view()}
                    <div class="pt-4 border-t border-gray-200 flex flex-col space-y-4">
                        {mobile_link(LOGIN_LINK, LINK_CLASS)}
                        {mobile_link(
                            SIGN_UP_LINK,
                            "bg-indigo-600 text-white px-4 py-2 rounded-lg hover:bg-indigo-700 transition duration-300 text-center",
                        )}
                    </div>
                </nav>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render_panel(menu: RwSignal<MenuState>) -> String {
        view! { <MobilePanel menu=menu /> }.to_html()
    }

    #[test]
    fn header_renders_brand_and_desktop_links() {
        let owner = Owner::new();
        owner.with(|| {
            let html = view! { <Header /> }.to_html();
            assert!(html.contains("HostelHome"));
            for link in PRIMARY_NAV {
                assert!(html.contains(&format!("href=\"{}\"", link.href)));
            }
            assert!(html.contains("href=\"/auth/login\""));
            assert!(html.contains("href=\"/auth/register\""));
            // Menu starts closed.
            assert!(!html.contains("id=\"mobile-menu\""));
            assert!(html.contains("aria-expanded=\"false\""));
        });
    }

    #[test]
    fn panel_visible_only_while_open() {
        let owner = Owner::new();
        owner.with(|| {
            let menu = RwSignal::new(MenuState::default());
            assert!(!render_panel(menu).contains("mobile-menu"));

            menu.update(MenuState::toggle);
            let html = render_panel(menu);
            assert!(html.contains("id=\"mobile-menu\""));
            assert!(html.contains("Sign Up"));
            assert_eq!(html.matches("<a ").count(), PRIMARY_NAV.len() + 2);

            menu.update(MenuState::close);
            assert!(!render_panel(menu).contains("mobile-menu"));
        });
    }

    #[test]
    fn toggle_icon_follows_state() {
        let owner = Owner::new();
        owner.with(|| {
            let menu = RwSignal::new(MenuState::default());
            let closed = view! { <MenuToggle menu=menu /> }.to_html();
            assert!(closed.contains("M4 6h16M4 12h16M4 18h16"));
            assert!(closed.contains("Open menu"));

            menu.update(MenuState::toggle);
            let open = view! { <MenuToggle menu=menu /> }.to_html();
            assert!(open.contains("M6 18L18 6M6 6l12 12"));
            assert!(open.contains("aria-expanded=\"true\""));
        });
    }

    #[test]
    fn brand_uses_configured_name() {
        let owner = Owner::new();
        owner.with(|| {
            provide_context(crate::SiteConfig::default().with_brand("StayLocal", 'S'));
            let html = view! { <Header /> }.to_html();
            assert!(html.contains("StayLocal"));
            assert!(!html.contains("HostelHome"));
        });
    }
}
