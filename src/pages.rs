//! HTML page rendering.
//!
//! Two templates are embedded at compile time. Rendering substitutes three
//! placeholders: the public verification key, the Turnstile site key, and the
//! serving origin.

const INDEX_HTML: &str = include_str!("../pages/index.html");
const TEST_HTML: &str = include_str!("../pages/test.html");

/// Render the page for `path`. `/test` selects the test harness page; every
/// other path falls back to the default page.
pub fn render(path: &str, public_signing_key: &str, site_key: &str, origin: &str) -> String {
    let template = match path {
        "/test" => TEST_HTML,
        _ => INDEX_HTML,
    };

    template
        .replace("{{PUBLIC_SIGNING_KEY}}", public_signing_key)
        .replace("{{CF_TURNSTILE_SITE_KEY}}", site_key)
        .replace("{{ORIGIN}}", origin)
}
