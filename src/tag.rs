use html5ever::tendril::StrTendril;
use html5ever::{Attribute as HtmlAttribute, LocalName, Namespace, QualName};

use crate::attribute::Attribute;
use crate::normalize::normalize;

/// A sanitizer's mutable view of one element node.
///
/// A `Tag` is built per element visited by the tree walker, mutated in place
/// by each policy in the chain, and consumed when the walker commits the
/// element: either the whole subtree is removed (blocked) or the surviving
/// attributes are written back onto the node.
///
/// Tags and their attributes are **allowed by default**. Blocking everything
/// up front requires an explicit policy such as
/// [`blacklist`](crate::policies::blacklist); that is the fail-closed pattern
/// to start from when layering whitelists.
///
/// The element name is exposed only in normalized form (see
/// [`normalize`](crate::normalize())); it is never written back, so there is no
/// raw counterpart.
///
/// # Examples
///
/// ```
/// use sanitize_core::Tag;
///
/// let mut tag = Tag::new("A");
/// assert_eq!(tag.name(), "a");
///
/// tag.upsert_attr("", "HREF", "http://example.com");
/// assert!(tag.has_attr("href"));
///
/// tag.block();
/// assert!(tag.is_blocked());
/// ```
#[derive(Debug, Clone)]
pub struct Tag {
    name: String,
    attrs: Vec<Attribute>,
    blocked: bool,
}

impl Tag {
    /// Creates an empty tag with the given element name.
    ///
    /// Mainly useful for unit-testing policies without parsing a document;
    /// the tree walker builds tags via the parser's node data.
    pub fn new(name: &str) -> Self {
        Self {
            name: normalize(name),
            attrs: Vec::new(),
            blocked: false,
        }
    }

    /// Builds the tag view for an element node's identity and raw attributes.
    pub(crate) fn from_element(name: &QualName, attrs: &[HtmlAttribute]) -> Self {
        Self {
            name: normalize(&name.local),
            attrs: attrs
                .iter()
                .map(|attr| Attribute::new(&attr.name.ns, &attr.name.local, &attr.value))
                .collect(),
            blocked: false,
        }
    }

    /// Returns the normalized element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Marks the element, and by the walker's contract its entire subtree,
    /// for removal from the sanitized output.
    ///
    /// A blocked tag can still be re-allowed by a subsequent policy in the
    /// same chain; the decision is only final when the walker commits.
    pub fn block(&mut self) {
        self.blocked = true;
    }

    /// Marks the element as allowed in the sanitized output.
    ///
    /// Inner content is still sanitized independently. Tags are allowed by
    /// default, so this is only needed to override an earlier
    /// [`block`](Tag::block).
    pub fn allow(&mut self) {
        self.blocked = false;
    }

    /// Reports whether the element is currently marked for removal.
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Invokes `handler` once per attribute, in parser order.
    ///
    /// Every current attribute is offered, including ones already blocked by
    /// an earlier policy in the chain; blocked attributes are only filtered
    /// out when the walker commits the element. Handlers may block, allow,
    /// or mutate each attribute.
    pub fn attr_policy<F>(&mut self, mut handler: F)
    where
        F: FnMut(&mut Attribute),
    {
        for attr in &mut self.attrs {
            handler(attr);
        }
    }

    /// Reports whether the tag carries an attribute with the given key.
    ///
    /// The comparison uses normalized keys, so `has_attr("HREF")` and
    /// `has_attr("href")` are equivalent.
    pub fn has_attr(&self, key: &str) -> bool {
        let key = normalize(key);
        self.attrs.iter().any(|attr| attr.key() == key)
    }

    /// Updates an existing attribute or appends a new one.
    ///
    /// Attribute identity is the normalized (namespace, key) pair. On a
    /// match the attribute is replaced wholesale, which also clears any
    /// blocked flag a previous policy set on it. This is how a policy
    /// enforces invariants like "every link carries `rel="noreferrer
    /// nofollow"`" without duplicating attributes.
    pub fn upsert_attr(&mut self, namespace: &str, key: &str, value: &str) {
        let attr = Attribute::new(namespace, key, value);

        for cur in &mut self.attrs {
            if cur.namespace() != attr.namespace() || cur.key() != attr.key() {
                continue;
            }
            *cur = attr;
            return;
        }

        self.attrs.push(attr);
    }

    /// Returns the tag's attributes, in parser order, blocked ones included.
    pub fn attrs(&self) -> &[Attribute] {
        &self.attrs
    }

    /// Consumes the tag and produces the surviving attribute list for the
    /// parser's node, in original relative order minus blocked entries.
    pub(crate) fn into_surviving_attrs(self) -> Vec<HtmlAttribute> {
        self.attrs
            .into_iter()
            .filter(|attr| !attr.is_blocked())
            .map(|attr| HtmlAttribute {
                name: QualName::new(
                    None,
                    Namespace::from(attr.raw_namespace()),
                    LocalName::from(attr.raw_key()),
                ),
                value: StrTendril::from(attr.raw_value()),
            })
            .collect()
    }
}
