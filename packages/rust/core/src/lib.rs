//! Content generation core for the curriculum pages.
//!
//! Static tables ([`catalog`]) feed the content matrix builder ([`content`])
//! and the related-level picker ([`related`]). [`routes`] validates URL
//! segments before anything is built; [`export`] writes the whole matrix,
//! structured data and previews to disk.

pub mod catalog;
pub mod content;
pub mod export;
pub mod jsonld;
pub mod matrix;
pub mod related;
pub mod render;
pub mod routes;

pub use content::build_content;
pub use matrix::ContentMatrix;
pub use related::{pick_related_levels, related_courses};
pub use routes::resolve_route;
