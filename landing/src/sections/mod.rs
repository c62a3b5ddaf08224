// Landing page sections, top to bottom
// Developed by The HostelHome Team (c)2025

mod categories;
mod cta;
mod featured;
mod hero;
mod how_it_works;

pub use categories::{Categories, CategoryCard};
pub use cta::CallToAction;
pub use featured::{FeaturedProperties, PropertyCard};
pub use hero::Hero;
pub use how_it_works::HowItWorks;
