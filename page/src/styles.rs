//! CSS styles for the insight page.
//!
//! This module contains the complete CSS for rendering the page, including
//! the scrollable insight list, the Visualize button states, and the shared
//! chart viewport.
//!
//! # Customization
//!
//! To extend or override styles:
//!
//! ```rust
//! use page_leptos::styles::PAGE_CSS;
//!
//! let my_css = ".custom-class { color: red; }";
//! let combined = format!("{}\n{}", PAGE_CSS, my_css);
//! ```

/// Content-Security-Policy for the generated page.
///
/// Inline scripts and styles are required (interaction script and chart data
/// are embedded), and the chart library must be served from the same origin
/// as the page for `script-src 'self'` to hold.
pub const CSP: &str = "default-src 'self'; img-src 'self' data: blob:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:;";

/// Complete CSS for the insight page.
///
/// This CSS provides:
/// - Base typography and spacing (monospace)
/// - Scrollable vertical insight list
/// - Visualize button styling with an exclusive `.active` state
/// - Chart viewport sizing
pub const PAGE_CSS: &str = r#"
:root {
    --bg-black: #000000;
    --bg-dark: #0a0a0a;
    --bg-mid: #141414;
    --text-bright: #a8a8a8;
    --text-dim: #707070;
    --border-subtle: rgba(168, 168, 168, 0.1);
    --border-visible: rgba(168, 168, 168, 0.2);
    --font-mono: 'JetBrains Mono', 'Fira Code', monospace;
    --accent-blue: #4f81e1;
    --accent-green: #059669;
}

*, *::before, *::after {
    box-sizing: border-box;
}

body {
    font-family: var(--font-mono);
    background: var(--bg-black);
    color: var(--text-bright);
    line-height: 1.6;
    margin: 0;
    min-height: 100vh;
}

::-webkit-scrollbar {
    width: 6px;
    height: 6px;
}

::-webkit-scrollbar-thumb {
    background: var(--border-visible);
    border-radius: 3px;
}

.page-shell {
    display: flex;
    flex-direction: column;
    gap: 16px;
    max-width: 1000px;
    margin: 0 auto;
    padding: 24px 16px;
    height: 100vh;
}

.output {
    background: var(--bg-dark);
    border: 1px solid var(--border-subtle);
    border-radius: 6px;
    padding: 0 16px 16px;
    overflow-y: auto;
    flex: 0 1 45vh;
}

.output h3 {
    color: var(--accent-blue);
    margin: 16px 0 4px;
}

.insight-item {
    border-bottom: 1px solid var(--border-subtle);
}

.insight-item p {
    color: var(--text-dim);
    margin: 4px 0 12px;
}

.visualize-btn {
    font-family: var(--font-mono);
    font-size: 13px;
    color: var(--text-bright);
    background: var(--bg-mid);
    border: 1px solid var(--border-visible);
    border-radius: 4px;
    padding: 4px 14px;
    margin-bottom: 12px;
    cursor: pointer;
}

.visualize-btn:hover {
    border-color: var(--accent-blue);
}

.visualize-btn.active {
    color: var(--bg-black);
    background: var(--accent-green);
    border-color: var(--accent-green);
}

.chart-viewport {
    background: var(--bg-dark);
    border: 1px solid var(--border-subtle);
    border-radius: 6px;
    flex: 1 1 auto;
    min-height: 360px;
}
"#;
