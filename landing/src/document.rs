//! Full HTML document used for static export.

use leptos::prelude::*;

use crate::config::use_site_config;

const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

/// `<html>` shell with the head the browser build gets from `index.html`.
#[component]
pub fn PageDocument(children: Children) -> impl IntoView {
    let config = use_site_config();
    let title = format!("{} - Find Your Perfect Stay", config.brand_name);

    view! {
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <script src=TAILWIND_CDN></script>
            </head>
            <body>
                <div id=config.mount_id>{children()}</div>
            </body>
        </html>
    }
}
