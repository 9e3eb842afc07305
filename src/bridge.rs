//! Webview bridge.
//!
//! The webview is the only place scroll offsets, viewport intersections and
//! body styles exist. Each function here either pushes a small script into
//! the page or opens a channel the page reports through; the Rust side never
//! reads the DOM directly.

use dioxus::prelude::*;
use serde::Deserialize;

/// Reports `window.scrollY` on every scroll event, starting with the current
/// offset. Coalescing happens on the Rust side.
const SCROLL_LISTENER_JS: &str = r#"
    dioxus.send(window.pageYOffset || document.documentElement.scrollTop);
    window.addEventListener('scroll', () => {
        dioxus.send(window.pageYOffset || document.documentElement.scrollTop);
    }, { passive: true });
    await new Promise(() => {});
"#;

/// One intersection report from the observer
#[derive(Debug, Clone, Deserialize)]
pub struct IntersectionReport {
    pub id: String,
    pub ratio: f64,
}

/// Open a channel of raw scroll offsets.
pub fn scroll_offsets() -> document::Eval {
    document::eval(SCROLL_LISTENER_JS)
}

/// Open a channel of intersection reports for every `[data-reveal]` element.
///
/// Elements without an id are skipped; the animator only knows ids.
pub fn intersections(threshold: f64) -> document::Eval {
    let js = format!(
        r#"
        const observer = new IntersectionObserver((entries) => {{
            entries.forEach(entry => {{
                if (entry.isIntersecting && entry.target.id) {{
                    dioxus.send({{ id: entry.target.id, ratio: entry.intersectionRatio }});
                }}
            }});
        }}, {{ root: null, rootMargin: '0px', threshold: {threshold} }});
        document.querySelectorAll('[data-reveal]').forEach(el => observer.observe(el));
        await new Promise(() => {{}});
        "#
    );
    document::eval(&js)
}

/// Suppress or restore background scrolling.
pub fn set_scroll_lock(locked: bool) {
    let js = if locked {
        "document.body.style.overflow = 'hidden';"
    } else {
        "document.body.style.overflow = 'auto';"
    };
    let _ = document::eval(js);
}

/// Smooth-scroll to a section, leaving room for the fixed header.
pub fn scroll_to_section(id: &str) {
    let js = format!(
        r#"
        const target = document.getElementById({id:?});
        if (target) {{
            window.scrollTo({{ top: target.offsetTop - 80, behavior: 'smooth' }});
        }}
        "#
    );
    let _ = document::eval(&js);
}

pub fn scroll_to_top() {
    let _ = document::eval("window.scrollTo({ top: 0, behavior: 'smooth' });");
}

/// Open an external URL in the system browser.
pub fn open_external(url: &str) {
    if let Err(e) = open::that(url) {
        tracing::warn!(url, error = %e, "Failed to open external link");
    }
}
