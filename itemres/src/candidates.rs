//! Direct-lookup candidate generation.
//!
//! A request path can name a node in several ways: as a full tree path, as
//! a path relative to the site root, or relative to the site's start item,
//! each possibly URL-encoded. [`CandidateGenerator`] turns one request into
//! the ordered list of absolute paths to hand to the tree store:
//!
//! 1. URL item path, decoded
//! 2. URL item path, raw
//! 3. local path, raw
//! 4. local path, decoded
//! 5. site root + local path, raw
//! 6. site root + local path, decoded
//! 7. {root, decoded root} × {start item, decoded start item} ×
//!    {local, decoded local}
//!
//! The list never contains an empty string or the same string twice; the
//! first occurrence of a string keeps its position.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::context::{RequestContext, SiteContext};
use crate::path::normalize::{is_root_path, make_path, SEPARATOR};
use crate::path::NameCodec;

/// The rule that produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CandidateSource {
    /// URL item path after decoding.
    ItemPathDecoded,
    /// URL item path as received.
    ItemPathRaw,
    /// Local path as received.
    LocalPathRaw,
    /// Local path after decoding.
    LocalPathDecoded,
    /// Site root joined with the raw local path.
    SitePathRaw,
    /// Site root joined with the local path, decoded.
    SitePathDecoded,
    /// One combination of root, start item and local path.
    CrossProduct,
}

impl fmt::Display for CandidateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ItemPathDecoded => "item-path-decoded",
            Self::ItemPathRaw => "item-path-raw",
            Self::LocalPathRaw => "local-path-raw",
            Self::LocalPathDecoded => "local-path-decoded",
            Self::SitePathRaw => "site-path-raw",
            Self::SitePathDecoded => "site-path-decoded",
            Self::CrossProduct => "cross-product",
        };
        f.write_str(name)
    }
}

/// A path to try with a direct lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Absolute item path.
    pub path: String,
    /// Rule that produced the path.
    pub source: CandidateSource,
}

/// Ordered, deduplicated list under construction.
#[derive(Default)]
struct CandidateList {
    seen: HashSet<String>,
    items: Vec<Candidate>,
}

impl CandidateList {
    fn push(&mut self, path: String, source: CandidateSource) {
        if path.is_empty() || self.seen.contains(&path) {
            return;
        }
        self.seen.insert(path.clone());
        self.items.push(Candidate { path, source });
    }
}

/// Builds direct-lookup candidates for a request.
///
/// # Examples
///
/// ```
/// use itemres::candidates::{CandidateGenerator, CandidateSource};
/// use itemres::context::{RequestContext, SiteContext};
/// use itemres::path::NameCodec;
///
/// let codec = NameCodec::default();
/// let generator = CandidateGenerator::new(&codec);
/// let ctx = RequestContext::new("/News%20Room").with_local_path("/News%20Room");
/// let site = SiteContext::new("website", "/sitecore/content", "/home");
///
/// let candidates = generator.generate(&ctx, Some(&site));
/// assert_eq!(candidates[0].path, "/News Room");
/// assert_eq!(candidates[0].source, CandidateSource::ItemPathDecoded);
/// assert_eq!(candidates[1].path, "/News%20Room");
/// assert_eq!(candidates[2].path, "/sitecore/content/News%20Room");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CandidateGenerator<'c> {
    codec: &'c NameCodec,
    cross_product_for_root_local_path: bool,
}

impl<'c> CandidateGenerator<'c> {
    /// Create a generator decoding with `codec`.
    ///
    /// Cross-product candidates are generated for every local path,
    /// including `/`.
    #[must_use]
    pub fn new(codec: &'c NameCodec) -> Self {
        Self {
            codec,
            cross_product_for_root_local_path: true,
        }
    }

    /// Whether cross-product candidates are generated when the local path
    /// is `/`.
    #[must_use]
    pub fn with_cross_product_for_root_local_path(mut self, enabled: bool) -> Self {
        self.cross_product_for_root_local_path = enabled;
        self
    }

    /// Every candidate for the request, in lookup order.
    ///
    /// Local-path candidates (steps 3 to 7) need a non-empty local path;
    /// site candidates (steps 5 to 7) also need a site.
    #[must_use]
    pub fn generate(&self, ctx: &RequestContext, site: Option<&SiteContext>) -> Vec<Candidate> {
        let mut list = CandidateList::default();

        let item_path = ctx.item_path();
        list.push(self.codec.decode_name(item_path), CandidateSource::ItemPathDecoded);
        list.push(item_path.to_string(), CandidateSource::ItemPathRaw);

        let local_path = ctx.local_path();
        if local_path.is_empty() {
            return list.items;
        }

        list.push(local_path.to_string(), CandidateSource::LocalPathRaw);
        list.push(self.codec.decode_name(local_path), CandidateSource::LocalPathDecoded);

        let Some(site) = site else {
            return list.items;
        };

        let site_path = make_path(site.root_path(), local_path, SEPARATOR);
        let decoded_site_path = self.codec.decode_name(&site_path);
        list.push(site_path, CandidateSource::SitePathRaw);
        list.push(decoded_site_path, CandidateSource::SitePathDecoded);

        if self.cross_product_for_root_local_path || !is_root_path(local_path) {
            for path in self.cross_product(site.root_path(), site.start_item(), local_path) {
                list.push(path, CandidateSource::CrossProduct);
            }
        }

        list.items
    }

    /// `{root, decoded root} × {start item, decoded start item} × {local,
    /// decoded local}`, each joined as `root/startItem/local`.
    ///
    /// The result is deduplicated, keeps generation order and contains no
    /// empty strings.
    ///
    /// # Examples
    ///
    /// ```
    /// use itemres::candidates::CandidateGenerator;
    /// use itemres::path::NameCodec;
    ///
    /// let codec = NameCodec::default();
    /// let paths = CandidateGenerator::new(&codec).cross_product("/content", "/home", "/a%20b");
    /// assert_eq!(paths, ["/content/home/a%20b", "/content/home/a b"]);
    /// ```
    #[must_use]
    pub fn cross_product(&self, root_path: &str, start_item: &str, local_path: &str) -> Vec<String> {
        let roots = [root_path.to_string(), self.codec.decode_name(root_path)];
        let starts = [start_item.to_string(), self.codec.decode_name(start_item)];
        let locals = [local_path.to_string(), self.codec.decode_name(local_path)];

        let mut list = CandidateList::default();
        for root in &roots {
            for start in &starts {
                let base = make_path(root, start, SEPARATOR);
                for local in &locals {
                    list.push(make_path(&base, local, SEPARATOR), CandidateSource::CrossProduct);
                }
            }
        }
        list.items.into_iter().map(|c| c.path).collect()
    }
}
