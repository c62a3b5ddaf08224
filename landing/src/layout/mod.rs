//! Page frame: header, content region, footer.
//!
//! # Component Hierarchy
//!
//! ```text
//! Layout
//! └── LoadingGate ("Loading..." until the mount effect has run)
//!     ├── Header
//!     │   ├── Brand
//!     │   ├── MenuToggle
//!     │   └── MobilePanel
//!     ├── <main> children
//!     └── Footer
//! ```

mod footer;
mod header;

pub use footer::Footer;
pub use header::{Brand, Header, MenuToggle, MobilePanel};

use leptos::prelude::*;
use tracing::debug;

use crate::config::use_site_config;
use crate::state::LoadPhase;

/// Wraps page content in the persistent header/footer frame.
///
/// The frame is hidden behind a placeholder for the first render and shown
/// once the mount effect has cleared the loading flag. With
/// `SiteConfig::show_loading_placeholder` off the frame renders directly.
#[component]
pub fn Layout(children: ChildrenFn) -> impl IntoView {
    let config = use_site_config();
    let initial = if config.show_loading_placeholder {
        LoadPhase::Loading
    } else {
        LoadPhase::Ready
    };
    let phase = RwSignal::new(initial);

    // Runs once after the first render; nothing is tracked.
    Effect::new(move || {
        if phase.get_untracked().is_loading() {
            phase.update(LoadPhase::finish);
            debug!("layout mounted, placeholder cleared");
        }
    });

    let loading = Signal::derive(move || phase.get().is_loading());

    view! {
        <LoadingGate loading=loading>
            <div class="flex flex-col min-h-screen">
                <Header />
                <main class="flex-grow">{children()}</main>
                <Footer />
            </div>
        </LoadingGate>
    }
}

/// Shows `Loading...` while `loading` holds, the children otherwise.
#[component]
pub fn LoadingGate(#[prop(into)] loading: Signal<bool>, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show when=move || !loading.get() fallback=|| view! { <div>"Loading..."</div> }>
            {children()}
        </Show>
    }
}
