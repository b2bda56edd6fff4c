use crate::normalize::normalize;

/// A sanitizer's mutable view of one tag attribute.
///
/// An `Attribute` keeps two forms of its namespace, key, and value: the raw
/// form exactly as the parser supplied it, and a normalized form computed
/// once at construction (see [`normalize`](crate::normalize())). Policies must
/// match on the normalized accessors ([`namespace`](Attribute::namespace),
/// [`key`](Attribute::key), [`value`](Attribute::value)); matching on the
/// raw form reopens the charset-spoofing bypass the normalization exists to
/// close. The raw accessors are for callers that need the original bytes,
/// e.g. a URL translator rewriting [`raw_value`](Attribute::raw_value).
///
/// Attributes are allowed by default; a blocked attribute is dropped when
/// the tree walker commits the element.
///
/// # Examples
///
/// ```
/// use sanitize_core::Attribute;
///
/// let mut attr = Attribute::new("", "HREF", " http://Example.com ");
/// assert_eq!(attr.key(), "href");
/// assert_eq!(attr.value(), "http://example.com");
/// assert_eq!(attr.raw_key(), "HREF");
/// assert_eq!(attr.raw_value(), " http://Example.com ");
///
/// attr.block();
/// assert!(attr.is_blocked());
/// ```
#[derive(Debug, Clone)]
pub struct Attribute {
    namespace: String,
    key: String,
    value: String,
    safe_namespace: String,
    safe_key: String,
    safe_value: String,
    blocked: bool,
}

impl Attribute {
    /// Creates an attribute from raw parser-supplied parts.
    ///
    /// The normalized forms are computed here, once; the raw forms are kept
    /// verbatim for re-emission.
    pub fn new(namespace: &str, key: &str, value: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            key: key.to_string(),
            value: value.to_string(),
            safe_namespace: normalize(namespace),
            safe_key: normalize(key),
            safe_value: normalize(value),
            blocked: false,
        }
    }

    /// Returns the normalized namespace, for policy matching.
    pub fn namespace(&self) -> &str {
        &self.safe_namespace
    }

    /// Returns the normalized key, for policy matching.
    pub fn key(&self) -> &str {
        &self.safe_key
    }

    /// Returns the normalized value, for policy matching.
    ///
    /// Normalization is lossy for rendering (non-ASCII is escaped), so use
    /// [`raw_value`](Attribute::raw_value) when transforming the value that
    /// will be emitted.
    pub fn value(&self) -> &str {
        &self.safe_value
    }

    /// Returns the namespace exactly as the parser supplied it.
    pub fn raw_namespace(&self) -> &str {
        &self.namespace
    }

    /// Returns the key exactly as the parser supplied it.
    pub fn raw_key(&self) -> &str {
        &self.key
    }

    /// Returns the value exactly as the parser supplied it.
    pub fn raw_value(&self) -> &str {
        &self.value
    }

    /// Replaces the namespace, updating raw and normalized forms together.
    pub fn set_namespace(&mut self, namespace: &str) {
        self.namespace = namespace.to_string();
        self.safe_namespace = normalize(namespace);
    }

    /// Replaces the key, updating raw and normalized forms together.
    pub fn set_key(&mut self, key: &str) {
        self.key = key.to_string();
        self.safe_key = normalize(key);
    }

    /// Replaces the value, updating raw and normalized forms together.
    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.safe_value = normalize(value);
    }

    /// Marks the attribute for removal from the sanitized output.
    ///
    /// Idempotent; a later policy may still [`allow`](Attribute::allow) it.
    pub fn block(&mut self) {
        self.blocked = true;
    }

    /// Marks the attribute as allowed in the sanitized output.
    ///
    /// Idempotent; attributes are allowed by default, so this is only needed
    /// to override an earlier [`block`](Attribute::block).
    pub fn allow(&mut self) {
        self.blocked = false;
    }

    /// Reports whether the attribute is currently marked for removal.
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }
}
