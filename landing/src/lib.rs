//! # hostelhome-landing
//!
//! Landing page for the HostelHome property-booking site, built with
//! [Leptos](https://leptos.dev/) 0.8.
//!
//! The same components serve two builds:
//!
//! - **Browser** (`--no-default-features --features csr`, through trunk):
//!   the interactive page, mounted by the `hostelhome` binary.
//! - **String rendering** (default `ssr` feature): [`render_home_page`]
//!   produces a static HTML document.
//!
//! ## Architecture
//!
//! - [`layout`] - header, footer and the loading frame around every page
//! - [`sections`] - the home page blocks (hero, categories, featured, steps, CTA)
//! - [`pages`] - routed pages
//! - [`content`] - literal card data
//! - [`routes`] - hrefs the page links to
//! - [`state`] - menu and loading state transitions
//!
//! ```rust
//! use hostelhome_landing::{render_home_page, SiteConfig};
//!
//! let config = SiteConfig::default().without_loading_placeholder();
//! let html = render_home_page(&config);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! assert!(html.contains("Find Your Perfect Stay"));
//! ```

#![recursion_limit = "256"]

pub mod config;
pub mod content;
mod document;
pub mod error;
pub mod layout;
pub mod logging;
pub mod mount;
pub mod pages;
pub mod routes;
pub mod sections;
pub mod state;

pub use config::SiteConfig;
pub use error::LandingError;

use document::PageDocument;
use layout::Layout;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::{HomePage, NotFoundPage};

/// Application root: provides `config` to every component and routes `/` to
/// the home page inside the shared layout.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_context(config);

    view! {
        <Router>
            <Layout>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </Layout>
        </Router>
    }
}

/// Render the home page, inside the layout, as a complete HTML document.
///
/// Effects do not run during string rendering, so with
/// `show_loading_placeholder` set the body is only the `Loading...`
/// placeholder. Static export should turn it off.
pub fn render_home_page(config: &SiteConfig) -> String {
    let owner = Owner::new();
    let html = owner.with(|| {
        provide_context(config.clone());
        view! {
            <PageDocument>
                <Layout>
                    <HomePage />
                </Layout>
            </PageDocument>
        }
        .to_html()
    });

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{html}")
}
