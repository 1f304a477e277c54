//! Basic page generation example.
//!
//! Run with: `cargo run --example basic_page`

use page_leptos::types::{Insight, InsightSource};
use page_leptos::{render_page, ChartAssets};

fn main() {
    // Two insights, no charts
    let source: InsightSource = [
        (
            "orders".to_string(),
            Insight {
                title: "Order volume".into(),
                description: "Orders grew 12% quarter over quarter.".into(),
                ..Default::default()
            },
        ),
        (
            "returns".to_string(),
            Insight {
                title: "Return rate".into(),
                description: "Returns held steady at 3.1%.".into(),
                ..Default::default()
            },
        ),
    ]
    .into_iter()
    .collect();

    // Use default (empty) chart assets - the viewport won't draw
    let assets = ChartAssets::default();

    // Render to HTML
    let html = render_page(Some(&source), &assets);

    // Write to file
    let output_path = "basic_page.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
