//! Leptos UI components for rendering the insight page.
//!
//! Each component is a Leptos `#[component]` function; together they build
//! the complete static page.
//!
//! # Component Hierarchy
//!
//! ```text
//! InsightDocument
//! ├── InsightList (heading + one block per insight)
//! │   └── InsightBlock
//! └── ChartViewport (shared chart container + embedded chart specs)
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be used
//! directly for custom layouts:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use page_leptos::components::{InsightList, ChartViewport};
//!
//! view! {
//!     <InsightList source=my_source.clone() />
//!     <ChartViewport source=Some(my_source) />
//! }
//! ```

mod document;
mod insights;
mod viewport;

pub use document::InsightDocument;
pub use insights::{InsightBlock, InsightList};
pub use viewport::ChartViewport;
