//! Feed module
//!
//! Section views and their LLM-readable rendering.

pub mod renderer;
pub mod section;

pub use renderer::{render_activity, render_blog};
pub use section::{BlogSection, SectionView};
