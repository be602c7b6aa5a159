//! Concrete view variants

mod detail;
mod footer;
mod header;
mod results;
mod search;
mod static_content;

pub use detail::DetailView;
pub use footer::FooterView;
pub use header::HeaderView;
pub use results::ResultsView;
pub use search::SearchView;
pub use static_content::{StaticContentView, StaticPage};
