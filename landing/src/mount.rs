//! Attaching the app to the browser document.

use leptos::prelude::*;
use tracing::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::App;
use crate::config::SiteConfig;
use crate::error::{LandingError, Result};

/// Mount [`App`] into `#mount_id`, or into `<body>` when that element is
/// missing. The app stays mounted for the lifetime of the page.
pub fn mount(config: SiteConfig) -> Result<()> {
    let target = mount_target(&config.mount_id)?;
    info!(target_id = %config.mount_id, "mounting landing page");
    leptos::mount::mount_to(target, move || view! { <App config=config /> }).forget();
    Ok(())
}

fn mount_target(id: &str) -> Result<HtmlElement> {
    let window = web_sys::window().ok_or(LandingError::NoWindow)?;
    let document = window.document().ok_or(LandingError::NoDocument)?;

    match document.get_element_by_id(id) {
        Some(element) => element
            .dyn_into::<HtmlElement>()
            .map_err(|_| LandingError::NotAnHtmlElement(id.to_string())),
        None => {
            warn!(target_id = %id, "mount element not found, falling back to <body>");
            document.body().ok_or(LandingError::NoBody)
        }
    }
}
