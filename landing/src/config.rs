//! Site-wide settings, handed to the app root and read back through context.

use leptos::prelude::*;

/// Brand and runtime settings for the landing page.
///
/// The `Default` impl holds the production values; the `with_*` setters exist
/// for tests and embedders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub brand_name: String,
    /// Single letter shown in the square logo.
    pub brand_mark: char,
    pub tagline: String,
    pub copyright_year: u16,
    /// Id of the element the browser app mounts into. Falls back to `<body>`.
    pub mount_id: String,
    /// `EnvFilter` directive for browser console logging.
    pub log_filter: String,
    /// Show `Loading...` until the layout's mount effect has run.
    pub show_loading_placeholder: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            brand_name: "HostelHome".into(),
            brand_mark: 'H',
            tagline: "Hostels, hotels, and homes for every kind of stay.".into(),
            copyright_year: 2025,
            mount_id: "app".into(),
            log_filter: "info".into(),
            show_loading_placeholder: true,
        }
    }
}

impl SiteConfig {
    pub fn with_brand(mut self, name: impl Into<String>, mark: char) -> Self {
        self.brand_name = name.into();
        self.brand_mark = mark;
        self
    }

    pub fn with_copyright_year(mut self, year: u16) -> Self {
        self.copyright_year = year;
        self
    }

    pub fn with_mount_id(mut self, id: impl Into<String>) -> Self {
        self.mount_id = id.into();
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Render the layout frame straight away instead of the placeholder.
    pub fn without_loading_placeholder(mut self) -> Self {
        self.show_loading_placeholder = false;
        self
    }
}

/// Current config from context, or the defaults when none was provided.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_brand() {
        let config = SiteConfig::default();
        assert_eq!(config.brand_name, "HostelHome");
        assert_eq!(config.brand_mark, 'H');
        assert_eq!(config.mount_id, "app");
        assert!(config.show_loading_placeholder);
    }

    #[test]
    fn builders_override_fields() {
        let config = SiteConfig::default()
            .with_brand("StayLocal", 'S')
            .with_copyright_year(2031)
            .with_mount_id("root")
            .with_log_filter("debug")
            .without_loading_placeholder();
        assert_eq!(config.brand_name, "StayLocal");
        assert_eq!(config.brand_mark, 'S');
        assert_eq!(config.copyright_year, 2031);
        assert_eq!(config.mount_id, "root");
        assert_eq!(config.log_filter, "debug");
        assert!(!config.show_loading_placeholder);
    }

    #[test]
    fn context_lookup_falls_back_to_default() {
        let owner = Owner::new();
        owner.with(|| {
            assert_eq!(use_site_config(), SiteConfig::default());
            provide_context(SiteConfig::default().with_brand("Elsewhere", 'E'));
            assert_eq!(use_site_config().brand_name, "Elsewhere");
        });
    }
}
