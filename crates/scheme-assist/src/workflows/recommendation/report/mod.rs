//! Report aggregation and export formats.

mod markdown;
mod summary;

pub use markdown::{format_rupees, render_markdown, MARKDOWN_RECOMMENDATION_LIMIT};
pub use summary::summarize;
