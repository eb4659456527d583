//! Item path handling.
//!
//! Request paths reach the resolver as raw URL text. This module provides
//! the pieces that turn them into something the tree understands:
//!
//! - [`normalize`]: joining (`make_path`) and segmentation of `/`-separated
//!   item paths, plus root-segment splitting.
//! - [`codec`]: percent-decoding and name-replacement decoding
//!   ([`NameCodec`]).
//! - [`resolver`]: segment-by-segment walking from a root node
//!   ([`PathResolver`]).
//!
//! # Examples
//!
//! ```
//! use itemres::path::normalize::{make_path, segments};
//! use itemres::path::NameCodec;
//!
//! let codec = NameCodec::default();
//! let joined = make_path("/sitecore/content/", &codec.decode_name("/Caf%C3%A9"), '/');
//! assert_eq!(joined, "/sitecore/content/Café");
//! assert_eq!(segments(&joined).count(), 3);
//! ```

pub mod codec;
pub mod normalize;
pub mod resolver;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use codec::NameCodec;
pub use resolver::PathResolver;
