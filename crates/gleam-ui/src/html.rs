//! Standalone HTML page for a render bundle.

use askama::Template;

use crate::render::RenderBundle;
use crate::theme::Theme;

/// Page template; provider text is HTML-escaped on output.
#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardPage<'a> {
    bundle: &'a RenderBundle,
    /// Failed renders keep the default background.
    theme: Theme,
}

/// Render the bundle as a complete HTML document.
pub fn render_page(bundle: &RenderBundle) -> Result<String, askama::Error> {
    let theme = bundle
        .weather
        .as_ref()
        .map(|w| w.theme)
        .unwrap_or_default();

    DashboardPage { bundle, theme }.render()
}
