use sanitize_core::policies::{
    allow_attrs, allow_tags, blacklist, blacklist_external_sources, block_attrs, block_tags,
    secure_email_policies, translate_url,
};
use sanitize_core::{sanitize_html, Policy, PolicyExt, Tag};

#[test]
fn default_allow_is_identity() {
    let input = r#"<html><head></head><body class="x"><p>hello <b>world</b></p></body></html>"#;

    let out = sanitize_html(input, &[]).unwrap();

    assert_eq!(out, input);
}

#[test]
fn blacklist_alone_empties_any_document() {
    for input in [
        "<p>hello</p>",
        r#"<html><body onload="x"><div><span>deep</span></div></body></html>"#,
        "<table><tr><td>cell</td></tr></table>",
    ] {
        let out = sanitize_html(input, &[&blacklist()]).unwrap();
        assert_eq!(out, "", "input: {input}");
    }
}

#[test]
fn blocking_a_tag_removes_its_descendants() {
    // The script's text content must go with it, even though no policy
    // addresses text nodes.
    let out = sanitize_html(
        "<body><script>alert(1)</script><p>kept</p></body>",
        &[&block_tags(&["script"])],
    )
    .unwrap();

    assert!(!out.contains("alert"));
    assert!(out.contains("<p>kept</p>"));
}

#[test]
fn normalization_defeats_case_and_charset_tricks() {
    // An uppercase STYLE and a plain style must both match a policy keyed
    // on "style".
    let out = sanitize_html(
        r#"<html><head></head><body Style="color:red"></body></html>"#,
        &[&block_attrs(&["style"])],
    )
    .unwrap();
    assert_eq!(out, "<html><head></head><body></body></html>");

    // An element named with an uppercase Unicode look-alike must NOT match
    // an allow rule for "script": it stays escaped during normalization
    // instead of case-folding into the allowed name.
    let out = sanitize_html(
        "<body><scr\u{0130}pt>x</scr\u{0130}pt></body>",
        &[
            &blacklist(),
            &allow_tags(&["html", "head", "body", "script"]),
        ],
    )
    .unwrap();
    assert!(!out.contains("scr"));
    assert_eq!(out, "<html><head></head><body></body></html>");
}

#[test]
fn composition_order_determines_outcome() {
    let mut tag = Tag::new("a");
    tag.upsert_attr("", "href", "http://example.com");
    block_attrs(&["href"])
        .extend(allow_attrs(&["href"]))
        .apply(&mut tag);
    assert!(!tag.attrs()[0].is_blocked());

    let mut tag = Tag::new("a");
    tag.upsert_attr("", "href", "http://example.com");
    allow_attrs(&["href"])
        .extend(block_attrs(&["href"]))
        .apply(&mut tag);
    assert!(tag.attrs()[0].is_blocked());
}

#[test]
fn email_scenario_end_to_end() {
    let input = r#"<body onerror="hacked"><a>test</a><img src="cid:attachment1"/><script>alert(1)</script></body>"#;

    let out = sanitize_html(
        input,
        &[
            &blacklist(),
            &allow_tags(&["html", "head", "body", "a", "img"]),
            &allow_attrs(&["src"]),
            &blacklist_external_sources(),
        ],
    )
    .unwrap();

    assert_eq!(
        out,
        r#"<html><head></head><body><a>test</a><img src="cid:attachment1"></body></html>"#
    );
}

#[test]
fn secure_email_policies_full_pass() {
    let input = concat!(
        "<html><head><title>My Email</title></head><body>",
        "<script>alert('not allowed');</script>",
        r#"<img onload="alert('not allowed')" src="a">"#,
        r#"<a href="http://visit.me">click here</a>"#,
        "</body></html>",
    );

    let out = sanitize_html(input, &[&secure_email_policies()]).unwrap();

    // Script and its payload are gone entirely.
    assert!(!out.contains("script"));
    assert!(!out.contains("not allowed"));
    // The img survives but loses both the handler and the external src.
    assert!(out.contains("<img>"));
    // The link keeps its text, loses the external href, gains rel.
    assert!(!out.contains("visit.me"));
    assert!(out.contains(r#"<a rel="noreferrer nofollow">click here</a>"#));
    assert!(out.contains("<title>My Email</title>"));
}

#[test]
fn cid_sources_survive_and_can_be_translated() {
    let input = r#"<body><img src="cid:attachment1"></body>"#;

    let out = sanitize_html(
        input,
        &[
            &secure_email_policies(),
            &translate_url(|url| format!("translated://{url}")),
        ],
    )
    .unwrap();

    assert!(out.contains(r#"<img src="translated://cid:attachment1">"#));
}

#[test]
fn sanitizing_twice_is_idempotent() {
    let input = concat!(
        r#"<html><head><title>t</title></head><body onload="x">"#,
        r#"<a href="cid:doc">link</a><img src="http://external"><p>text</p>"#,
        "</body></html>",
    );
    let chain = secure_email_policies();

    let once = sanitize_html(input, &[&chain]).unwrap();
    let twice = sanitize_html(&once, &[&chain]).unwrap();

    assert_eq!(once, twice);
}

#[test]
fn escaped_markup_stays_escaped() {
    let out = sanitize_html("&lt;img/&gt;", &[]).unwrap();

    assert_eq!(out, "<html><head></head><body>&lt;img/&gt;</body></html>");
}

#[test]
fn unicode_lookalike_element_roundtrips_when_allowed() {
    // With no policies the look-alike element is untouched: normalization
    // affects comparisons only, never the emitted bytes.
    let out = sanitize_html("<body><scr\u{0130}pt>x</scr\u{0130}pt></body>", &[]).unwrap();

    assert!(out.contains("<scr\u{0130}pt>x</scr\u{0130}pt>"));
}
