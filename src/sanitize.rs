use html5ever::driver::ParseOpts;
use html5ever::parse_document;
use html5ever::serialize::{serialize, SerializeOpts};
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};

use crate::error::Error;
use crate::policy::Policy;
use crate::tag::Tag;

/// Maximum element nesting depth the walker will descend into.
///
/// The HTML5 parser imposes no nesting bound of its own, so pathologically
/// deep input is a stack-exhaustion risk. Anything nested deeper than this
/// is removed from the output.
const MAX_DEPTH: usize = 512;

/// Sanitizes a parsed tree in place.
///
/// Walks the tree depth-first in pre-order. Non-element nodes (text,
/// comments, doctypes) pass through untouched. For each element the walker
/// builds a [`Tag`] view through the normalizer, applies `policies` in slice
/// order in a single pass, then commits: a blocked element is excised along
/// with its entire subtree (no further descent), an allowed element gets its
/// surviving attributes written back in original relative order and its
/// children sanitized independently.
///
/// Elements nested deeper than an internal bound are removed rather than
/// passed through unsanitized.
///
/// With an empty policy slice this is the identity transform.
///
/// # Examples
///
/// ```
/// use html5ever::driver::ParseOpts;
/// use html5ever::parse_document;
/// use html5ever::tendril::TendrilSink;
/// use markup5ever_rcdom::RcDom;
/// use sanitize_core::policies::block_tags;
/// use sanitize_core::sanitize;
///
/// let dom = parse_document(RcDom::default(), ParseOpts::default())
///     .one("<body><script>alert(1)</script><p>kept</p></body>");
///
/// sanitize(&dom.document, &[&block_tags(&["script"])]);
/// ```
pub fn sanitize(document: &Handle, policies: &[&dyn Policy]) {
    walk_children(document, policies, 0);
}

/// Sanitizes an HTML string and returns the serialized result.
///
/// Convenience wrapper: parses `input` with `html5ever`, runs [`sanitize`]
/// over the resulting tree, and serializes it back. HTML5 parsing is
/// error-recovering and always produces a tree, so the only failures are on
/// the render side; see [`Error`]. Note the HTML5 tree builder wraps
/// fragments in `<html><head></head><body>…</body></html>`, so whitelist
/// policies usually need to allow `html`, `head`, and `body`.
///
/// One serializer caveat: `markup5ever_rcdom` renders only a node's child
/// list, and the HTML5 parser stores `<template>` content out of band, so a
/// surviving `<template>` always renders empty here even though its contents
/// were sanitized in the tree. Callers that need template content to
/// round-trip should run [`sanitize`] on their own parsed tree and serialize
/// it with a template-aware serializer.
///
/// # Errors
///
/// Returns [`Error::Render`] if serialization fails and [`Error::Utf8`] if
/// the serialized bytes are not valid UTF-8.
///
/// # Examples
///
/// ```
/// use sanitize_core::policies::block_attrs;
/// use sanitize_core::sanitize_html;
///
/// let out = sanitize_html(
///     r#"<html><head></head><body Style="color:red"></body></html>"#,
///     &[&block_attrs(&["style"])],
/// ).unwrap();
///
/// assert_eq!(out, "<html><head></head><body></body></html>");
/// ```
pub fn sanitize_html(input: &str, policies: &[&dyn Policy]) -> Result<String, Error> {
    let dom = parse_document(RcDom::default(), ParseOpts::default()).one(input);

    sanitize(&dom.document, policies);

    let mut buf = Vec::new();
    let document: SerializableHandle = dom.document.clone().into();
    serialize(&mut buf, &document, SerializeOpts::default())?;

    Ok(String::from_utf8(buf)?)
}

/// Sanitizes each child of `node`, removing blocked subtrees from the child
/// list.
fn walk_children(node: &Handle, policies: &[&dyn Policy], depth: usize) {
    let children: Vec<Handle> = node.children.borrow().clone();
    let mut kept = Vec::with_capacity(children.len());

    for child in children {
        if visit(&child, policies, depth) {
            kept.push(child);
        } else {
            child.parent.set(None);
        }
    }

    *node.children.borrow_mut() = kept;
}

/// Visits one node. Returns `false` if the node (and its subtree) must be
/// removed from its parent.
fn visit(node: &Handle, policies: &[&dyn Policy], depth: usize) -> bool {
    if depth >= MAX_DEPTH {
        tracing::warn!(depth, "nesting depth limit reached, removing subtree");
        return false;
    }

    if let NodeData::Element {
        ref name,
        ref attrs,
        ref template_contents,
        ..
    } = node.data
    {
        let mut tag = Tag::from_element(name, &attrs.borrow());

        for policy in policies {
            policy.apply(&mut tag);
        }

        if tag.is_blocked() {
            tracing::debug!(element = %tag.name(), "removing blocked element");
            return false;
        }

        let before = attrs.borrow().len();
        let surviving = tag.into_surviving_attrs();
        if surviving.len() < before {
            tracing::trace!(
                element = %name.local,
                dropped = before - surviving.len(),
                "dropped blocked attributes"
            );
        }
        *attrs.borrow_mut() = surviving;

        if let Some(contents) = template_contents.borrow().as_ref() {
            walk_children(contents, policies, depth + 1);
        }
    }

    walk_children(node, policies, depth + 1);
    true
}
