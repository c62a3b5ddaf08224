//! Navigable addresses referenced by the landing page.
//!
//! None of these pages live in this crate; they are plain hrefs the browser
//! follows. Only `/` is routed here.

pub const HOME: &str = "/";
pub const PROPERTIES: &str = "/properties";
pub const HOSTELS: &str = "/hostels";
pub const HOTELS: &str = "/hotels";
pub const HOMES: &str = "/homes";
pub const ABOUT: &str = "/about";
pub const CONTACT: &str = "/contact";
pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";

/// A labelled link in one of the navigation lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

impl NavLink {
    pub(crate) const fn new(label: &'static str, href: &'static str) -> Self {
        Self { label, href }
    }
}

/// Main navigation, shared by the desktop bar and the mobile panel.
pub const PRIMARY_NAV: [NavLink; 5] = [
    NavLink::new("Properties", PROPERTIES),
    NavLink::new("Hostels", HOSTELS),
    NavLink::new("Hotels", HOTELS),
    NavLink::new("Homes", HOMES),
    NavLink::new("About", ABOUT),
];

pub const LOGIN_LINK: NavLink = NavLink::new("Login", LOGIN);
pub const SIGN_UP_LINK: NavLink = NavLink::new("Sign Up", REGISTER);

/// Detail page of a single listing.
pub fn property_detail(id: u32) -> String {
    format!("{PROPERTIES}/{id}")
}

/// Listing filtered by property type.
///
/// The category label is only lower-cased. Spaces and `&` go into the query
/// verbatim, so `"Hotels & Motels"` yields `/properties?type=hotels & motels`.
pub fn properties_by_type(category: &str) -> String {
    format!("{PROPERTIES}?type={}", category.to_lowercase())
}
