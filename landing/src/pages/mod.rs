// Landing page routes
// Developed by The HostelHome Team (c)2025

mod home;
mod not_found;

pub use home::HomePage;
pub use not_found::NotFoundPage;
