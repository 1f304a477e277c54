//! Shared chart viewport component
//!
//! One named container that the charting library redraws in place; only one
//! insight's chart is visible at a time.

use crate::types::InsightSource;
use leptos::prelude::*;

/// DOM id of the chart viewport. The interaction script and the charting
/// library both address the container through this id.
pub const CHART_VIEWPORT_ID: &str = "chart-viewport";

/// The chart viewport plus the embedded chart specs.
///
/// Every chart-eligible insight's spec is pushed onto
/// `window.__INSIGHT_CHARTS` in iteration order, so the interaction script
/// can draw the first one on load and redraw on Visualize clicks. A
/// chart-eligible insight without details contributes an empty spec.
#[component]
pub fn ChartViewport(source: Option<InsightSource>) -> impl IntoView {
    let entries: Vec<(String, serde_json::Value)> = source
        .iter()
        .flat_map(|source| source.iter())
        .filter(|(_, insight)| insight.require_chart)
        .map(|(key, insight)| {
            let spec = insight.details.clone().unwrap_or_else(|| serde_json::json!({}));
            (key.to_string(), spec)
        })
        .collect();

    let data_script = (!entries.is_empty()).then(|| {
        let mut script =
            String::from("window.__INSIGHT_CHARTS = window.__INSIGHT_CHARTS || [];\n");
        for (key, spec) in &entries {
            let key_json = serde_json::to_string(key).unwrap_or("\"\"".into());
            let spec_json = serde_json::to_string(spec).unwrap_or("{}".into());
            script.push_str(&format!(
                "window.__INSIGHT_CHARTS.push({{ key: {key_json}, spec: {spec_json} }});\n"
            ));
        }
        script
    });

    view! {
        <div class="chart-viewport" id=CHART_VIEWPORT_ID></div>
        {data_script.map(|script| view! { <script>{script}</script> })}
    }
}
