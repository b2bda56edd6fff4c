//! Policy-driven sanitization of untrusted HTML.
//!
//! This crate walks a parsed document tree and applies a chain of composable
//! policies that decide, per element and per attribute, what survives into
//! the rendered output. Parsing and serialization are delegated to
//! [`html5ever`] and [`markup5ever_rcdom`]; the engine here is the policy
//! abstraction, the normalization defense, and the tree-rewrite walker.
//!
//! # Core Types
//!
//! - [`Tag`]: mutable view of one element node, handed to policies
//! - [`Attribute`]: mutable view of one tag attribute, with raw and
//!   normalized forms
//! - [`Policy`]: a decision function over a `Tag`; closures work directly
//! - [`Policies`]: an ordered policy chain that is itself a `Policy`
//! - [`normalize`]: canonicalization applied to every identifier before any
//!   policy decision, defeating charset/homoglyph filter bypass
//!
//! Tags and attributes are **allowed by default**; start from
//! [`policies::blacklist`] to fail closed and layer `allow_*` rules on top.
//!
//! # Examples
//!
//! ```
//! use sanitize_core::policies::{allow_attrs, allow_tags, blacklist};
//! use sanitize_core::sanitize_html;
//!
//! let input = r#"<body onerror="hacked"><a>test</a><script>alert(1)</script></body>"#;
//!
//! let out = sanitize_html(
//!     input,
//!     &[
//!         &blacklist(),
//!         &allow_tags(&["html", "head", "body", "a"]),
//!         &allow_attrs(&["href"]),
//!     ],
//! )
//! .unwrap();
//!
//! assert_eq!(out, "<html><head></head><body><a>test</a></body></html>");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod attribute;
mod error;
mod normalize;
pub mod policies;
mod policy;
mod sanitize;
mod tag;

pub use attribute::Attribute;
pub use error::Error;
pub use normalize::{ascii, normalize};
pub use policy::{Policies, Policy, PolicyExt};
pub use sanitize::{sanitize, sanitize_html};
pub use tag::Tag;
