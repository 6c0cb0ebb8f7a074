//! HTML vocabulary for the weft rendering engine.
//!
//! Provides the tag and attribute names the template builder speaks
//! ([`Tag`], [`Attr`]) and the escaping helpers used at every text and
//! attribute emission site ([`write_text`], [`write_attribute_value`]).
//!
//! Escaping delegates to the `html-escape` crate; the exact replacement
//! rules are that crate's contract and are applied uniformly by every
//! construction surface built on this vocabulary.

mod attr;
mod escape;
mod tag;

pub use attr::Attr;
pub use escape::{write_attribute_value, write_text};
pub use tag::Tag;
