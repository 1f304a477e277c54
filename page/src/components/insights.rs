//! Insight list and block components

use crate::types::{Insight, InsightSource};
use leptos::prelude::*;

/// The insight list: heading plus one block per insight, in payload order.
#[component]
pub fn InsightList(source: InsightSource) -> impl IntoView {
    view! {
        <h3>"Insights:"</h3>
        {source.iter().map(|(key, insight)| {
            view! {
                <InsightBlock insight_key=key.to_string() insight=insight.clone() />
            }
        }).collect::<Vec<_>>()}
    }
}

/// A single insight block: title, description, and - only when the insight
/// is chart-eligible - a Visualize button carrying the insight key.
#[component]
pub fn InsightBlock(insight_key: String, insight: Insight) -> impl IntoView {
    let chart_eligible = insight.require_chart;

    view! {
        <div class="insight-item">
            <br />
            <h3>{insight.title}</h3>
            <p>{insight.description}</p>
            {chart_eligible.then(|| view! {
                <button class="visualize-btn" data-insight-key=insight_key.clone()>
                    "Visualize"
                </button>
                <br />
            })}
        </div>
    }
}
