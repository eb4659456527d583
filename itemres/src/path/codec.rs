//! Decoding of item names as they appear in request URLs.
//!
//! URLs carry item names in two layers of encoding: percent-encoding, and a
//! configurable set of character replacements (for example a space written
//! as `-`). [`NameCodec::decode_name`] undoes both.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;

use crate::config::NameReplacement;

/// Decodes URL path text back into item names.
///
/// # Examples
///
/// ```
/// use itemres::config::NameReplacement;
/// use itemres::path::NameCodec;
///
/// let codec = NameCodec::new(vec![NameReplacement::new(" ", "-")]);
/// assert_eq!(codec.decode_name("/about-us/caf%C3%A9"), "/about us/café");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameCodec {
    replacements: Vec<NameReplacement>,
}

impl NameCodec {
    /// Create a codec with the given name replacements.
    ///
    /// Replacements are applied in list order in both directions, so
    /// multi-character encodings that contain another replacement's output
    /// must be listed first.
    #[must_use]
    pub fn new(replacements: Vec<NameReplacement>) -> Self {
        Self { replacements }
    }

    /// The configured replacements.
    #[must_use]
    pub fn replacements(&self) -> &[NameReplacement] {
        &self.replacements
    }

    /// Decode a raw path or path component.
    ///
    /// Percent-decoding that yields invalid UTF-8 keeps the raw text.
    #[must_use]
    pub fn decode_name(&self, raw: &str) -> String {
        let decoded = percent_decode_str(raw)
            .decode_utf8()
            .unwrap_or(Cow::Borrowed(raw));

        self.replacements
            .iter()
            .fold(decoded.into_owned(), |name, replacement| {
                name.replace(replacement.replace_with.as_str(), replacement.find.as_str())
            })
    }

    /// Encode an item name the way it would appear in a URL.
    ///
    /// Only the replacement layer is applied; percent-encoding is left to
    /// the link generator.
    #[must_use]
    pub fn encode_name(&self, name: &str) -> String {
        self.replacements
            .iter()
            .fold(name.to_string(), |name, replacement| {
                name.replace(replacement.find.as_str(), replacement.replace_with.as_str())
            })
    }
}
