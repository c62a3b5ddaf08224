use thiserror::Error;

/// Failures while attaching the app to the browser document.
#[derive(Debug, Error)]
pub enum LandingError {
    #[error("no global `window` (not running in a browser?)")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("document has no <body>")]
    NoBody,
    #[error("mount target `#{0}` is not an HTML element")]
    NotAnHtmlElement(String),
}

pub type Result<T> = std::result::Result<T, LandingError>;
