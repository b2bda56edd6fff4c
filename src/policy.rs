use crate::tag::Tag;

/// A composable decision function applied to a [`Tag`].
///
/// A policy may block or allow the tag, iterate its attributes via
/// [`Tag::attr_policy`], or mutate them. Policies hold no mutable state
/// between tags; any configuration (whitelist sets, translators) is closed
/// over at construction time. All operations on the tag are total, so
/// `apply` has no error path.
///
/// The trait is blanket-implemented for `Fn(&mut Tag)` closures, which is
/// how most policies are written:
///
/// ```
/// use sanitize_core::{Policy, Tag};
///
/// let drop_style = |tag: &mut Tag| {
///     tag.attr_policy(|attr| {
///         if attr.key() == "style" {
///             attr.block();
///         }
///     });
/// };
///
/// let mut tag = Tag::new("p");
/// tag.upsert_attr("", "STYLE", "color:red");
/// drop_style.apply(&mut tag);
///
/// assert!(tag.attrs()[0].is_blocked());
/// ```
pub trait Policy {
    /// Applies this policy's decisions to the tag.
    fn apply(&self, tag: &mut Tag);
}

impl<F> Policy for F
where
    F: Fn(&mut Tag),
{
    fn apply(&self, tag: &mut Tag) {
        self(tag)
    }
}

/// An ordered collection of policies that is itself a [`Policy`].
///
/// Applying a `Policies` applies each member in insertion order to the same
/// tag instance, so later members can override earlier allow/block decisions
/// on the tag or any of its attributes. Given a fixed order and a fixed
/// input tag, the final state is fully deterministic; reordering members is
/// a semantic change, not an implementation detail.
///
/// # Examples
///
/// ```
/// use sanitize_core::{Policies, Policy, Tag};
/// use sanitize_core::policies::{allow_tags, blacklist};
///
/// let chain = Policies::new()
///     .with(blacklist())
///     .with(allow_tags(&["a", "p"]));
///
/// let mut tag = Tag::new("a");
/// chain.apply(&mut tag);
/// assert!(!tag.is_blocked());
///
/// let mut tag = Tag::new("script");
/// chain.apply(&mut tag);
/// assert!(tag.is_blocked());
/// ```
#[derive(Default)]
pub struct Policies {
    chain: Vec<Box<dyn Policy>>,
}

impl Policies {
    /// Creates an empty collection. Applying it is the identity transform.
    pub fn new() -> Self {
        Self { chain: Vec::new() }
    }

    /// Appends a policy, returning the collection for chaining.
    pub fn with(mut self, policy: impl Policy + 'static) -> Self {
        self.chain.push(Box::new(policy));
        self
    }

    /// Appends a policy in place.
    pub fn push(&mut self, policy: impl Policy + 'static) {
        self.chain.push(Box::new(policy));
    }

    /// Appends a policy, keeping the chain flat.
    ///
    /// Shadows [`PolicyExt::extend`] for `Policies` so extending an existing
    /// chain does not nest collections; the applied order is identical
    /// either way.
    pub fn extend(self, policy: impl Policy + 'static) -> Self {
        self.with(policy)
    }

    /// Returns the number of policies in the chain.
    pub fn len(&self) -> usize {
        self.chain.len()
    }

    /// Reports whether the chain is empty.
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }
}

impl Policy for Policies {
    fn apply(&self, tag: &mut Tag) {
        for policy in &self.chain {
            policy.apply(tag);
        }
    }
}

/// Sequential chaining for any two policies.
///
/// `base.extend(next)` produces a [`Policies`] that applies `base` first,
/// then `next`, to the same tag instance. Extension is associative and
/// order-preserving; it is how predefined policy sets are layered with
/// custom rules.
///
/// # Examples
///
/// ```
/// use sanitize_core::{Policy, PolicyExt, Tag};
/// use sanitize_core::policies::{allow_attrs, block_attrs};
///
/// // Order, not presence, determines the outcome.
/// let allowed_last = block_attrs(&["href"]).extend(allow_attrs(&["href"]));
/// let blocked_last = allow_attrs(&["href"]).extend(block_attrs(&["href"]));
///
/// let mut tag = Tag::new("a");
/// tag.upsert_attr("", "href", "http://example.com");
/// allowed_last.apply(&mut tag);
/// assert!(!tag.attrs()[0].is_blocked());
///
/// blocked_last.apply(&mut tag);
/// assert!(tag.attrs()[0].is_blocked());
/// ```
pub trait PolicyExt: Policy + Sized + 'static {
    /// Chains `next` after this policy.
    fn extend(self, next: impl Policy + 'static) -> Policies {
        Policies::new().with(self).with(next)
    }
}

impl<P: Policy + Sized + 'static> PolicyExt for P {}
