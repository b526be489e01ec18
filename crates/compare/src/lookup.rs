//! Resolving slugs back into phones.
//!
//! Slugs are never stored, so every lookup regenerates the slug for each
//! known product and compares exactly. No fuzzy matching or case folding is
//! done beyond what [`slugify`](crate::slugify) already does.

use crate::error::{ErrorKind, Result};
use crate::models::Product;
use crate::slug::Slug;
use std::collections::BTreeMap;
use tracing::instrument;

/// Finds the first product (in list order) whose slug equals `slug`.
///
/// If two products share a slug, the later one can never be found; use
/// [`collisions`] to detect that.
pub fn find<'a, P: AsRef<Product>>(products: &'a [P], slug: impl AsRef<str>) -> Option<&'a Product> {
    let slug = slug.as_ref();
    products.iter().map(|p| p.as_ref()).find(|product| product.slug() == slug)
}

/// Resolves every slug, or none of them.
///
/// Fails with [`NotFound`](ErrorKind::NotFound) listing each slug that had no
/// match, even when the others resolve fine.
#[instrument(level = "debug", skip_all, fields(products = products.len(), slugs = slugs.len()))]
pub fn find_all<'a, P: AsRef<Product>, S: AsRef<str>>(products: &'a [P], slugs: &[S]) -> Result<Vec<&'a Product>> {
    let mut found = Vec::with_capacity(slugs.len());
    let mut missing = Vec::new();
    for slug in slugs {
        match find(products, slug) {
            Some(product) => found.push(product),
            None => missing.push(slug.as_ref().to_string()),
        }
    }
    if !missing.is_empty() {
        tracing::debug!(missing = ?missing, "Unresolved comparison slugs");
        exn::bail!(ErrorKind::NotFound(missing));
    }
    Ok(found)
}

/// Groups of products whose titles normalize to the same slug, ordered by
/// slug. Products within a group keep their list order, so the first entry
/// is the one [`find`] returns.
pub fn collisions<P: AsRef<Product>>(products: &[P]) -> Vec<(Slug, Vec<&Product>)> {
    let mut by_slug: BTreeMap<Slug, Vec<&Product>> = BTreeMap::new();
    for product in products.iter().map(|p| p.as_ref()) {
        by_slug.entry(product.slug()).or_default().push(product);
    }
    by_slug.into_iter().filter(|(_, group)| group.len() > 1).collect()
}
