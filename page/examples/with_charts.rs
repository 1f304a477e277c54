//! Page generation from a raw JSON payload, with chart specs.
//!
//! Run with: `cargo run --example with_charts`
//!
//! The payload below mirrors what the upstream generator produces: an object
//! keyed by insight id, with `requireChart` in both of its observed
//! encodings and Highcharts specs under `details`.

use page_leptos::types::InsightSource;
use page_leptos::{render_page, ChartAssets};

const PAYLOAD: &str = r#"{
    "sales_by_region": {
        "title": "Sales by region",
        "description": "EMEA leads with 42% of total revenue, APAC is the fastest growing.",
        "requireChart": "true",
        "details": {
            "chart": {"type": "bar"},
            "title": {"text": "Sales by region"},
            "xAxis": {"categories": ["EMEA", "AMER", "APAC"]},
            "series": [{"name": "Revenue", "data": [42, 35, 23]}]
        }
    },
    "top_products": {
        "title": "Top products",
        "description": "Three SKUs account for half of all orders.",
        "requireChart": true,
        "details": {
            "chart": {"type": "pie"},
            "title": {"text": "Order share"},
            "series": [{"name": "Share", "data": [
                {"name": "SKU-1", "y": 24},
                {"name": "SKU-2", "y": 16},
                {"name": "SKU-3", "y": 10},
                {"name": "Other", "y": 50}
            ]}]
        }
    },
    "data_quality": {
        "title": "Data quality note",
        "description": "118 rows were dropped for missing order dates.",
        "requireChart": "false"
    }
}"#;

fn main() {
    let source = InsightSource::from_json_str(PAYLOAD).expect("valid payload");

    let assets = ChartAssets {
        // Local copy keeps the page CSP happy; a CDN URL also works if the
        // CSP is relaxed.
        highcharts_path: "assets/highcharts.js".into(),
    };

    let html = render_page(Some(&source), &assets);

    let output_path = "insights.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!(
        "Insights: {} ({} chart-eligible)",
        source.len(),
        source.iter().filter(|(_, i)| i.require_chart).count()
    );
}
