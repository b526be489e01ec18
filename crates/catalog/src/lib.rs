//! Phone catalog built from a CMS entry export.
//!
//! The catalog is an explicit value: build it once (from JSON, a file, or a
//! list of products) and pass it by reference to whatever needs to resolve
//! slugs. There's no global client or cache behind it.

mod entry;
pub mod error;
mod field;

use crate::entry::{Document, EditTags};
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use phonecmp_compare::{Product, SlotSet, Slug, lookup};
use std::collections::HashMap;
use std::path::Path;
use tracing::instrument;

pub use crate::field::{EditTag, Field, Scalar};

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<String, usize>,
    /// Product ID -> field path -> edit location
    tags: HashMap<String, EditTags>,
}
impl Catalog {
    /// Builds a catalog from already-ingested products, keeping their order.
    ///
    /// Titles that collide on the same slug are logged; only the first of
    /// each group can be reached by slug.
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut by_id = HashMap::with_capacity(products.len());
        for (index, product) in products.iter().enumerate() {
            by_id.entry(product.id.clone()).or_insert(index);
        }
        for (slug, group) in lookup::collisions(&products) {
            let ids: Vec<&str> = group.iter().map(|p| p.id.as_str()).collect();
            tracing::warn!(slug = %slug, ids = ?ids, "Phones share a slug; only the first can be compared");
        }
        Self {
            products,
            by_id,
            tags: HashMap::new(),
        }
    }

    /// Parses a CMS export: `{"entries": [...]}` or a bare array of
    /// `mobile_phone` entries.
    ///
    /// With `live_preview` set, edit tags are kept and available through
    /// [`edit_tag`](Self::edit_tag); otherwise they're discarded.
    #[instrument(skip(json), fields(json_size = json.len()))]
    pub fn from_json(json: &str, live_preview: bool) -> Result<Self> {
        let document: Document = serde_json::from_str(json).or_raise(|| ErrorKind::InvalidJson)?;
        let mut products = Vec::new();
        let mut tags = HashMap::new();
        for (index, entry) in document.into_entries().into_iter().enumerate() {
            let mut entry_tags = EditTags::new();
            let product = entry.into_product(index, live_preview, &mut entry_tags)?;
            if !entry_tags.is_empty() {
                tags.insert(product.id.clone(), entry_tags);
            }
            products.push(product);
        }
        tracing::debug!(products = products.len(), live_preview, "Loaded catalog");
        Ok(Self {
            tags,
            ..Self::from_products(products)
        })
    }

    /// Reads and parses a CMS export from disk.
    pub fn from_path(path: impl AsRef<Path>, live_preview: bool) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).or_raise(|| ErrorKind::Io(path.to_path_buf()))?;
        Self::from_json(&json, live_preview)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn by_id(&self, id: &str) -> Option<&Product> {
        self.by_id.get(id).map(|&index| &self.products[index])
    }

    /// First phone whose slug matches exactly.
    pub fn find(&self, slug: impl AsRef<str>) -> Option<&Product> {
        lookup::find(&self.products, slug)
    }

    /// Resolves every slug, or fails with
    /// [`NotFound`](phonecmp_compare::error::ErrorKind::NotFound).
    pub fn resolve<S: AsRef<str>>(&self, slugs: &[S]) -> phonecmp_compare::error::Result<Vec<&Product>> {
        lookup::find_all(&self.products, slugs)
    }

    /// Decodes a comparison path and fills a slot set from this catalog.
    pub fn compare(&self, path: &str) -> phonecmp_compare::error::Result<SlotSet<'_>> {
        SlotSet::from_path(&self.products, path)
    }

    /// Related phones that exist in this catalog; dangling references are skipped.
    pub fn related(&self, product: &Product) -> Vec<&Product> {
        product.related.iter().filter_map(|id| self.by_id(id)).collect()
    }

    /// Groups of phones sharing a slug.
    pub fn collisions(&self) -> Vec<(Slug, Vec<&Product>)> {
        lookup::collisions(&self.products)
    }

    /// Live-preview source location for a product field, e.g. `"title"` or
    /// `"specifications.ram"`.
    pub fn edit_tag(&self, id: &str, field: &str) -> Option<&str> {
        self.tags.get(id)?.get(field).map(String::as_str)
    }

    /// Every edit tag recorded for a product, ordered by field path.
    pub fn edit_tags(&self, id: &str) -> impl Iterator<Item = (&str, &str)> {
        self.tags.get(id).into_iter().flatten().map(|(field, tag)| (field.as_str(), tag.as_str()))
    }
}
