// HostelHome landing page, Leptos 0.8 edition
// Developed by The HostelHome Team (c)2025

use hostelhome_landing::{SiteConfig, logging, mount};
use tracing::error;

fn main() {
    console_error_panic_hook::set_once();

    let config = SiteConfig::default();
    logging::init(&config.log_filter);

    if let Err(err) = mount::mount(config) {
        error!(%err, "failed to mount landing page");
    }
}
