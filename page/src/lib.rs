//! # page-leptos
//!
//! Leptos SSR renderer for insight pages.
//!
//! This crate renders a payload of "insight" records (title, description,
//! optional chart payload) into a complete static HTML page using
//! [Leptos](https://leptos.dev/) server-side rendering. Each chart-eligible
//! insight gets a "Visualize" button, and a single shared viewport shows one
//! insight's chart at a time; the toggling logic ships as a small inline
//! script embedded in the page.
//!
//! ## Features
//!
//! - **Zero JavaScript Runtime** - Pure SSR, no hydration needed
//! - **Component-Based** - Modular, reusable UI components
//! - **Type-Safe** - Full Rust type safety from payload to HTML
//! - **Chart Viewport** - Highcharts integration via embedded chart specs
//!
//! ## Quick Start
//!
//! ```rust
//! use page_leptos::{render_page, ChartAssets, types::InsightSource};
//!
//! // Decode the upstream payload
//! let source = InsightSource::from_json_str(r#"{
//!     "a": {"title": "T1", "description": "D1", "requireChart": "true", "details": {"spec": 1}}
//! }"#).unwrap();
//!
//! // Configure the chart library asset (optional, for chart rendering)
//! let assets = ChartAssets::default();
//!
//! // Render to HTML string
//! let html = render_page(Some(&source), &assets);
//!
//! // Write to file
//! std::fs::write("insights.html", html).unwrap();
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//!
//! - [`types`] - Data structures for the insight payload
//! - [`components`] - Leptos UI components
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! This library uses Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```
//!
//! No reactive runtime or hydration is needed - pure static HTML generation.

#![doc(html_root_url = "https://docs.rs/page-leptos/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::InsightDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::InsightSource;

/// Render the complete insight page from a decoded payload.
///
/// This is the main entry point. Both collaborators are explicit parameters:
/// the insight collection and the chart-render capability (as asset
/// configuration), so the renderer carries no ambient state.
///
/// # Arguments
///
/// * `source` - The insight payload, or `None` when nothing was produced
///   upstream. `None` leaves the output region in its initial markup state
///   (no heading, no blocks); no error is raised.
/// * `assets` - Path to the chart library script for the viewport.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use page_leptos::{render_page, ChartAssets, types::InsightSource};
///
/// let source: InsightSource = InsightSource::default();
/// let html = render_page(Some(&source), &ChartAssets::default());
/// assert!(html.starts_with("<!DOCTYPE html>"));
/// ```
pub fn render_page(source: Option<&InsightSource>, assets: &ChartAssets) -> String {
    let doc = view! {
        <InsightDocument source=source.cloned() assets=assets.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Chart library asset path for the viewport.
///
/// The page uses [Highcharts](https://www.highcharts.com/) to draw chart
/// specs into the shared viewport. You can provide:
///
/// - A local bundled file (for offline use, satisfies the page CSP)
/// - A CDN URL
/// - An empty string (no script tag; Visualize clicks become no-ops)
///
/// # Example
///
/// ```rust
/// use page_leptos::ChartAssets;
///
/// let assets = ChartAssets {
///     highcharts_path: "assets/highcharts.js".into(),
/// };
///
/// // Or use the default (empty path - charts are not drawn)
/// let assets = ChartAssets::default();
/// ```
#[derive(Clone, Default, Debug)]
pub struct ChartAssets {
    /// Path to highcharts.js
    pub highcharts_path: String,
}
