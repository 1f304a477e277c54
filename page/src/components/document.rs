//! Root document component - the complete HTML page
//!
//! Renders the output region, the shared chart viewport, and the inline
//! interaction script.

use super::{ChartViewport, InsightList};
use crate::styles::{CSP, PAGE_CSS};
use crate::types::InsightSource;
use crate::ChartAssets;
use leptos::prelude::*;

/// The complete HTML document for the insight page.
///
/// When `source` is `None` (no payload was produced upstream) the output
/// region is emitted in its initial markup state: no heading, no blocks, no
/// error. An empty source renders the heading and zero blocks.
#[component]
pub fn InsightDocument(source: Option<InsightSource>, assets: ChartAssets) -> impl IntoView {
    view! {
        <html>
            <head>
                <meta charset="UTF-8" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>"Insights"</title>
                <style>{PAGE_CSS}</style>
            </head>
            <body>
                <div class="page-shell">
                    <div class="output" id="output">
                        {source.clone().map(|source| view! { <InsightList source=source /> })}
                    </div>
                    <ChartViewport source=source />
                </div>

                <ChartScripts assets=assets />
            </body>
        </html>
    }
}

/// Chart library script tag (when configured) plus the interaction script.
#[component]
fn ChartScripts(assets: ChartAssets) -> impl IntoView {
    let has_chart_assets = !assets.highcharts_path.is_empty();

    view! {
        // Chart library must load before the interaction script draws the
        // first chart. An empty path skips the tag and the draw degrades to
        // a no-op.
        {has_chart_assets.then(|| view! {
            <script src=assets.highcharts_path.clone()></script>
        })}
        <script>{APP_SCRIPT}</script>
    }
}

/// Page logic (Visualize toggling, first-chart render)
const APP_SCRIPT: &str = r#"
(() => {
  const charts = window.__INSIGHT_CHARTS || [];
  const specByKey = new Map(charts.map(entry => [entry.key, entry.spec]));

  const drawChart = (spec) => {
      if (typeof Highcharts === 'undefined') { return; }
      Highcharts.chart('chart-viewport', spec || {});
  };

  // Exclusive highlight: the most recently clicked button is the only
  // active one. Clicking the active button again redraws the same chart.
  let activeButton = null;
  document.querySelectorAll('.visualize-btn[data-insight-key]').forEach(btn => {
      btn.addEventListener('click', () => {
          if (activeButton) {
              activeButton.classList.remove('active');
          }
          btn.classList.add('active');
          activeButton = btn;

          drawChart(specByKey.get(btn.dataset.insightKey));
      });
  });

  // Charts are embedded in payload order, so entry 0 is the first
  // chart-eligible insight. It renders once on load, before any click.
  if (charts.length > 0) {
      drawChart(charts[0].spec);
  }
})();
"#;
