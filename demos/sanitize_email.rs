//! Sanitizing an HTML email body with the predefined email-safe chain.
//!
//! The chain whitelists common email markup, strips everything else, blocks
//! external resources (only `cid:` attachment references survive), and tags
//! links with `rel="noreferrer nofollow"`.
//!
//! Run with: `cargo run --example sanitize_email`

use sanitize_core::policies::{secure_email_policies, translate_url};
use sanitize_core::sanitize_html;

const EMAIL: &str = r#"<html><head>
<title>My Email</title>
</head>
<body>
<script>
    alert('not allowed');
</script>
<img onload="alert('not allowed')" src="cid:attachment1">
<a href="http://visit.me">click here</a></body></html>
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let policies = secure_email_policies();

    // Rewrite surviving attachment references so the mail client can
    // resolve them against its own store.
    let translator = translate_url(|url| format!("attachment://{url}"));

    match sanitize_html(EMAIL, &[&policies, &translator]) {
        Ok(out) => {
            println!("--- sanitized ---");
            println!("{out}");
        }
        Err(err) => eprintln!("sanitization failed: {err}"),
    }
}
