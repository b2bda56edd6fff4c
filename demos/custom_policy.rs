//! Writing custom policies and layering them over the blacklist.
//!
//! Policies are plain closures over a `Tag`. Starting from `blacklist()`
//! fails closed: anything the allow rules below do not address stays
//! blocked.
//!
//! Run with: `cargo run --example custom_policy`

use sanitize_core::policies::{allow_attrs, allow_tags, blacklist};
use sanitize_core::{sanitize_html, Tag};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let input = r#"<body>
<h1 class="title">Report</h1>
<a href="https://example.com" onclick="steal()">source</a>
<iframe src="https://evil.example"></iframe>
</body>"#;

    // Custom rule: every surviving link must open in a new tab.
    let force_blank_target = |tag: &mut Tag| {
        if tag.name() == "a" && tag.has_attr("href") {
            tag.upsert_attr("", "target", "_blank");
        }
    };

    let out = sanitize_html(
        input,
        &[
            &blacklist(),
            &allow_tags(&["html", "head", "body", "h1", "a"]),
            &allow_attrs(&["href"]),
            &force_blank_target,
        ],
    )
    .expect("render sanitized output");

    println!("--- sanitized ---");
    println!("{out}");
}
