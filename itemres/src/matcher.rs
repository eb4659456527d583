//! Child lookup by name or display name.
//!
//! A [`NameMatcher`] picks the child of a node that a single path segment
//! refers to. Two strategies exist:
//!
//! - [`ExactMatcher`]: case-insensitive equality, display name first.
//! - [`MixedMatcher`]: exact matching, then a fuzzy fallback chosen once at
//!   construction ([`FuzzyStrategy`]).
//!
//! [`matcher_for`] selects the strategy from configuration.
//!
//! # Examples
//!
//! ```
//! use itemres::matcher::{ExactMatcher, NameMatcher};
//! use itemres::trace::NullTracer;
//! use itemres::tree::{ItemAccessor, LookupOptions, MemoryTree, NodeFixture, TreeFixture};
//!
//! let tree = MemoryTree::from_fixture(TreeFixture::new(
//!     "master",
//!     NodeFixture::new("home")
//!         .with_child(NodeFixture::new("news").with_display_name("Noticias")),
//! ))
//! .unwrap();
//! let accessor = ItemAccessor::new(&tree, &NullTracer, LookupOptions::new("master"));
//! let home = accessor.get_item("/home").into_node().unwrap();
//!
//! let child = ExactMatcher.find_child(&accessor, &home, "noticias").unwrap();
//! assert_eq!(child.name(), "news");
//! ```

use deunicode::deunicode;
use serde::{Deserialize, Serialize};

use crate::tree::{ItemAccessor, Node};

/// Finds the child of `parent` that `name` refers to.
pub trait NameMatcher: Send + Sync {
    /// The matching child, or `None` when no child matches.
    fn find_child(&self, accessor: &ItemAccessor<'_>, parent: &Node, name: &str) -> Option<Node>;
}

/// Case-insensitive equality on display name, then on canonical name.
///
/// All children are checked by display name before any is checked by name,
/// so a display name wins over an earlier sibling's canonical name.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactMatcher;

impl ExactMatcher {
    /// Match within an already-fetched list of children.
    #[must_use]
    pub fn select<'n>(children: &'n [Node], name: &str) -> Option<&'n Node> {
        let wanted = name.to_lowercase();
        children
            .iter()
            .find(|child| child.display_name().to_lowercase() == wanted)
            .or_else(|| {
                children
                    .iter()
                    .find(|child| child.name().to_lowercase() == wanted)
            })
    }
}

impl NameMatcher for ExactMatcher {
    fn find_child(&self, accessor: &ItemAccessor<'_>, parent: &Node, name: &str) -> Option<Node> {
        let children = accessor.children(parent);
        Self::select(&children, name).cloned()
    }
}

/// Secondary strategy used by [`MixedMatcher`] when exact matching fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FuzzyStrategy {
    /// Compare transliterated, lowercased text with `-`, `_` and whitespace
    /// runs folded to a single space.
    #[default]
    Transliterate,
    /// Accept the only child whose normalized display name or name starts
    /// with the normalized query.
    Prefix,
}

impl FuzzyStrategy {
    /// Match within an already-fetched list of children.
    #[must_use]
    pub fn select<'n>(self, children: &'n [Node], name: &str) -> Option<&'n Node> {
        let wanted = fold(name);
        if wanted.is_empty() {
            return None;
        }

        match self {
            Self::Transliterate => children
                .iter()
                .find(|child| fold(child.display_name()) == wanted)
                .or_else(|| children.iter().find(|child| fold(child.name()) == wanted)),
            Self::Prefix => {
                let mut hits = children.iter().filter(|child| {
                    fold(child.display_name()).starts_with(&wanted)
                        || fold(child.name()).starts_with(&wanted)
                });
                let first = hits.next()?;
                match hits.next() {
                    None => Some(first),
                    Some(_) => None,
                }
            }
        }
    }
}

/// Normalize text for fuzzy comparison.
///
/// # Examples
///
/// ```
/// use itemres::matcher::fold;
///
/// assert_eq!(fold("Café  Crème"), "cafe creme");
/// assert_eq!(fold("about-us_page"), "about us page");
/// ```
#[must_use]
pub fn fold(text: &str) -> String {
    let ascii = deunicode(text).to_lowercase();
    ascii
        .split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Exact matching with a fuzzy fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct MixedMatcher {
    fuzzy: FuzzyStrategy,
}

impl MixedMatcher {
    /// Create a mixed matcher using `fuzzy` as the fallback.
    #[must_use]
    pub const fn new(fuzzy: FuzzyStrategy) -> Self {
        Self { fuzzy }
    }

    /// The fallback strategy.
    #[must_use]
    pub const fn fuzzy(&self) -> FuzzyStrategy {
        self.fuzzy
    }
}

impl NameMatcher for MixedMatcher {
    fn find_child(&self, accessor: &ItemAccessor<'_>, parent: &Node, name: &str) -> Option<Node> {
        let children = accessor.children(parent);
        ExactMatcher::select(&children, name)
            .or_else(|| self.fuzzy.select(&children, name))
            .cloned()
    }
}

/// How path segments are matched against children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// [`ExactMatcher`].
    #[default]
    Exact,
    /// [`MixedMatcher`].
    Mixed,
}

impl MatchMode {
    /// Parse a mode name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message for unknown names.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(Self::Exact),
            "mixed" => Ok(Self::Mixed),
            _ => Err(format!("invalid match mode: {s} (expected exact or mixed)")),
        }
    }
}

impl FuzzyStrategy {
    /// Parse a strategy name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error message for unknown names.
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "transliterate" => Ok(Self::Transliterate),
            "prefix" => Ok(Self::Prefix),
            _ => Err(format!(
                "invalid fuzzy strategy: {s} (expected transliterate or prefix)"
            )),
        }
    }
}

/// Build the matcher for a mode.
#[must_use]
pub fn matcher_for(mode: MatchMode, fuzzy: FuzzyStrategy) -> Box<dyn NameMatcher> {
    match mode {
        MatchMode::Exact => Box::new(ExactMatcher),
        MatchMode::Mixed => Box::new(MixedMatcher::new(fuzzy)),
    }
}
