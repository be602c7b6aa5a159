//! Normalized entities handed to the views

mod filters;
mod park;
mod search;

pub use filters::Filters;
pub use park::Park;
pub use search::{FeaturedPark, HeroImage, NamedOption, SearchOptions};
