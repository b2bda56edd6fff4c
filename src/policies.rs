//! Predefined policies.
//!
//! Ordinary consumers of the [`Policy`](crate::Policy) contract: a
//! fail-closed [`blacklist`], name- and key-scoped allow/block rules, and
//! the email-safe set behind [`secure_email_policies`]. Whitelist tables are
//! immutable configuration data closed over at construction time, never
//! global mutable state.

use std::collections::HashSet;

use crate::normalize::normalize;
use crate::policy::{Policies, Policy};
use crate::tag::Tag;

/// Element names commonly used in HTML email bodies.
const EMAIL_TAGS: &[&str] = &[
    "a", "b", "body", "br", "div", "font", "h1", "h2", "h3", "h4", "h5", "h6", "head", "html",
    "hr", "img", "label", "li", "ol", "p", "span", "strong", "table", "tbody", "td", "th",
    "title", "tr", "u", "ul",
];

/// Attribute keys commonly used in HTML email bodies.
///
/// `style` is deliberately absent: its CSS content is not sanitized here.
const EMAIL_ATTRS: &[&str] = &[
    "background",
    "background-color",
    "border",
    "border-bottom",
    "border-bottom-color",
    "border-bottom-style",
    "border-bottom-width",
    "border-color",
    "border-left",
    "border-left-color",
    "border-left-style",
    "border-left-width",
    "border-right",
    "border-right-color",
    "border-right-style",
    "border-right-width",
    "border-style",
    "border-top",
    "border-top-color",
    "border-width",
    "color",
    "display",
    "font",
    "font-family",
    "font-size",
    "font-style",
    "font-variant",
    "font-weight",
    "height",
    "href",
    "letter-spacing",
    "line-height",
    "list-style-type",
    "padding",
    "padding-bottom",
    "padding-left",
    "padding-right",
    "padding-top",
    "src",
    "table-layout",
    "text-align",
    "text-decoration",
    "text-indent",
    "text-transform",
    "vertical-align",
    "width",
];

fn normalized_set(names: &[&str]) -> HashSet<String> {
    names.iter().map(|name| normalize(name)).collect()
}

/// Blocks the tag and every one of its attributes unconditionally.
///
/// This is the fail-closed starting point: layer `allow_*` policies after it
/// and anything the caller forgot to address stays blocked instead of
/// leaking through by omission.
///
/// # Examples
///
/// ```
/// use sanitize_core::policies::blacklist;
/// use sanitize_core::sanitize_html;
///
/// let out = sanitize_html("<p>hello</p>", &[&blacklist()]).unwrap();
/// assert_eq!(out, "");
/// ```
pub fn blacklist() -> impl Policy {
    |tag: &mut Tag| {
        tag.block();
        tag.attr_policy(|attr| attr.block());
    }
}

/// Allows tags whose normalized name is in `names`.
///
/// Leaves every other tag untouched; combine with [`blacklist`] for
/// whitelist semantics.
pub fn allow_tags(names: &[&str]) -> impl Policy {
    let allowed = normalized_set(names);
    move |tag: &mut Tag| {
        if allowed.contains(tag.name()) {
            tag.allow();
        }
    }
}

/// Blocks tags whose normalized name is in `names`.
pub fn block_tags(names: &[&str]) -> impl Policy {
    let denied = normalized_set(names);
    move |tag: &mut Tag| {
        if denied.contains(tag.name()) {
            tag.block();
        }
    }
}

/// Allows attributes whose normalized key is in `keys`, on any tag.
pub fn allow_attrs(keys: &[&str]) -> impl Policy {
    let allowed = normalized_set(keys);
    move |tag: &mut Tag| {
        tag.attr_policy(|attr| {
            if allowed.contains(attr.key()) {
                attr.allow();
            }
        });
    }
}

/// Blocks attributes whose normalized key is in `keys`, on any tag.
pub fn block_attrs(keys: &[&str]) -> impl Policy {
    let denied = normalized_set(keys);
    move |tag: &mut Tag| {
        tag.attr_policy(|attr| {
            if denied.contains(attr.key()) {
                attr.block();
            }
        });
    }
}

/// Allows the common email element set and blocks every other tag.
pub fn whitelist_email_tags() -> impl Policy {
    let allowed = normalized_set(EMAIL_TAGS);
    move |tag: &mut Tag| {
        if allowed.contains(tag.name()) {
            tag.allow();
        } else {
            tag.block();
        }
    }
}

/// Allows the common email attribute set, plus `extra` keys, and blocks
/// every other attribute.
///
/// The extra keys are normalized before matching, so `"Key"` and `"key"`
/// whitelist the same attribute. The built-in set still excludes `style`,
/// as its CSS content is not sanitized.
pub fn whitelist_email_attrs(extra: &[&str]) -> impl Policy {
    let mut allowed = normalized_set(EMAIL_ATTRS);
    allowed.extend(extra.iter().map(|key| normalize(key)));
    move |tag: &mut Tag| {
        tag.attr_policy(|attr| {
            if allowed.contains(attr.key()) {
                attr.allow();
            } else {
                attr.block();
            }
        });
    }
}

/// Blocks `src` and `href` attributes that reference anything other than a
/// `cid:` (attachment) source.
///
/// The prefix check runs on the normalized value, so surrounding whitespace
/// and case tricks do not smuggle an external reference through.
pub fn blacklist_external_sources() -> impl Policy {
    |tag: &mut Tag| {
        tag.attr_policy(|attr| {
            if (attr.key() == "src" || attr.key() == "href") && !attr.value().starts_with("cid:") {
                attr.block();
            }
        });
    }
}

/// Upserts `rel="noreferrer nofollow"` onto every tag carrying an `href`.
///
/// This keeps the destination from learning the referrer and search engines
/// from following the link, improving reader privacy when a link is opened.
pub fn no_referrer_no_follow() -> impl Policy {
    |tag: &mut Tag| {
        if tag.has_attr("href") {
            tag.upsert_attr("", "rel", "noreferrer nofollow");
        }
    }
}

/// Rewrites the raw value of every `src` and `href` through `translator`.
///
/// The translator receives the value exactly as the parser supplied it, not
/// the normalized form, since normalization escapes non-ASCII and is not
/// meant for re-emission.
///
/// # Examples
///
/// ```
/// use sanitize_core::policies::translate_url;
/// use sanitize_core::{Policy, Tag};
///
/// let proxy = translate_url(|url| format!("proxy://{url}"));
///
/// let mut tag = Tag::new("img");
/// tag.upsert_attr("", "src", "cid:logo");
/// proxy.apply(&mut tag);
///
/// assert_eq!(tag.attrs()[0].raw_value(), "proxy://cid:logo");
/// ```
pub fn translate_url<F>(translator: F) -> impl Policy
where
    F: Fn(&str) -> String,
{
    move |tag: &mut Tag| {
        tag.attr_policy(|attr| {
            if attr.key() == "src" || attr.key() == "href" {
                let translated = translator(attr.raw_value());
                attr.set_value(&translated);
            }
        });
    }
}

/// The email-safe policy chain.
///
/// In order: whitelist email tags, whitelist email attributes, block
/// non-`cid:` sources, inject `rel="noreferrer nofollow"` on links. The
/// source filter runs after the attribute whitelist so its block decision on
/// an external `src`/`href` is final. Together these
/// block tracking attempts, external resources, and the basic XSS vectors
/// (event-handler attributes, scripts, iframes). CSS content is not
/// sanitized.
///
/// Extend it with custom rules:
///
/// ```
/// use sanitize_core::policies::{secure_email_policies, block_attrs};
///
/// let chain = secure_email_policies().extend(block_attrs(&["width"]));
/// ```
pub fn secure_email_policies() -> Policies {
    Policies::new()
        .with(whitelist_email_tags())
        .with(whitelist_email_attrs(&[]))
        .with(blacklist_external_sources())
        .with(no_referrer_no_follow())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blacklist_blocks_tag_and_attrs() {
        let mut tag = Tag::new("a");
        tag.upsert_attr("", "href", "http://example.com");

        blacklist().apply(&mut tag);

        assert!(tag.is_blocked());
        assert!(tag.attrs()[0].is_blocked());
    }

    #[test]
    fn allow_tags_overrides_blacklist() {
        let mut tag = Tag::new("A");

        blacklist().apply(&mut tag);
        allow_tags(&["a"]).apply(&mut tag);

        assert!(!tag.is_blocked());
    }

    #[test]
    fn block_tags_matches_normalized_name() {
        let mut tag = Tag::new("A");
        block_tags(&["a"]).apply(&mut tag);
        assert!(tag.is_blocked());

        let mut other = Tag::new("b");
        block_tags(&["a"]).apply(&mut other);
        assert!(!other.is_blocked());
    }

    #[test]
    fn whitelist_email_attrs_normalizes_extra_keys() {
        let policy = whitelist_email_attrs(&["Key"]);

        let mut tag = Tag::new("body");
        tag.upsert_attr("", "key", "value");

        blacklist().apply(&mut tag);
        policy.apply(&mut tag);

        assert!(!tag.attrs()[0].is_blocked());
    }

    #[test]
    fn whitelist_email_attrs_blocks_unlisted() {
        let mut tag = Tag::new("body");
        tag.upsert_attr("", "onerror", "hacked");
        tag.upsert_attr("", "href", "cid:1");

        whitelist_email_attrs(&[]).apply(&mut tag);

        assert!(tag.attrs()[0].is_blocked());
        assert!(!tag.attrs()[1].is_blocked());
    }

    #[test]
    fn external_sources_check_normalized_value() {
        let mut tag = Tag::new("img");
        tag.upsert_attr("", "src", " cid:id");

        blacklist_external_sources().apply(&mut tag);

        assert!(!tag.attrs()[0].is_blocked());
    }

    #[test]
    fn external_sources_block_non_cid() {
        let mut tag = Tag::new("img");
        tag.upsert_attr("", "src", "http://tracker.example");
        tag.upsert_attr("", "href", "javascript:alert(1)");
        tag.upsert_attr("", "alt", "logo");

        blacklist_external_sources().apply(&mut tag);

        assert!(tag.attrs()[0].is_blocked());
        assert!(tag.attrs()[1].is_blocked());
        assert!(!tag.attrs()[2].is_blocked());
    }

    #[test]
    fn no_referrer_no_follow_only_touches_links() {
        let mut link = Tag::new("a");
        link.upsert_attr("", "href", "http://example.com");
        no_referrer_no_follow().apply(&mut link);
        assert!(link.has_attr("rel"));

        let mut plain = Tag::new("p");
        no_referrer_no_follow().apply(&mut plain);
        assert!(!plain.has_attr("rel"));
    }

    #[test]
    fn translate_url_rewrites_raw_value() {
        let mut tag = Tag::new("a");
        tag.upsert_attr("", "href", "HTTP://Example.com");

        translate_url(|url| format!("translated://{url}")).apply(&mut tag);

        assert_eq!(tag.attrs()[0].raw_value(), "translated://HTTP://Example.com");
    }

    #[test]
    fn secure_email_chain_order() {
        // rel injection runs after the attribute whitelist, so the upserted
        // rel attribute survives even though "rel" is not whitelisted.
        let mut tag = Tag::new("a");
        tag.upsert_attr("", "href", "cid:doc");

        secure_email_policies().apply(&mut tag);

        assert!(!tag.is_blocked());
        assert!(tag.has_attr("rel"));
        let rel = tag
            .attrs()
            .iter()
            .find(|attr| attr.key() == "rel")
            .expect("rel attribute upserted");
        assert!(!rel.is_blocked());
        assert_eq!(rel.raw_value(), "noreferrer nofollow");
    }
}
