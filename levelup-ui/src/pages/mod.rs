//! Pages
//!
//! Top-level page components for each route.

pub mod coming_soon;
pub mod dashboard;

pub use coming_soon::{ComingSoon, NotFound};
pub use dashboard::Dashboard;
