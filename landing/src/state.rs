//! The two pieces of UI state on the page.
//!
//! Both are owned by a single component and held in a signal; the types here
//! carry the transitions so they can be exercised without a reactive runtime.

/// Open/closed flag of the mobile navigation panel. Owned by the header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

const BARS_ICON: &str = "M4 6h16M4 12h16M4 18h16";
const CLOSE_ICON: &str = "M6 18L18 6M6 6l12 12";

impl MenuState {
    pub fn is_open(self) -> bool {
        self.open
    }

    /// Hamburger click.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Any mobile link click. Always ends closed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// SVG path for the toggle button: bars when closed, an X when open.
    pub fn icon_path(self) -> &'static str {
        if self.open { CLOSE_ICON } else { BARS_ICON }
    }

    pub fn toggle_label(self) -> &'static str {
        if self.open { "Close menu" } else { "Open menu" }
    }
}

/// Whether the layout still shows its placeholder.
///
/// Starts in `Loading` and moves to `Ready` once, after the first mount. There
/// is no way back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Loading,
    Ready,
}

impl LoadPhase {
    pub fn is_loading(self) -> bool {
        matches!(self, LoadPhase::Loading)
    }

    pub fn finish(&mut self) {
        *self = LoadPhase::Ready;
    }
}
