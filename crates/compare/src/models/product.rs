use super::{Image, PurchaseLink, Variant};
use crate::slug::Slug;
use std::collections::BTreeMap;

/// Raw specification values keyed by specification key, e.g. `"ram" => "8GB"`.
pub type Specifications = BTreeMap<String, String>;

/// A mobile phone, as read from a CMS snapshot.
///
/// Nothing here is ever written back; within a page load (or a CLI run) a
/// product is treated as immutable.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Product {
    /// Opaque CMS unique ID
    pub id: String,
    /// Display title; the slug is always derived from this
    pub title: String,
    /// Short, possibly unit-suffixed values (`"4000mAh"`, `"200g"`)
    pub specifications: Specifications,
    /// Purchasable configurations, each with its own price
    pub variants: Vec<Variant>,
    /// External retailer links
    pub links: Vec<PurchaseLink>,
    pub image: Option<Image>,
    pub gallery: Vec<Image>,
    /// IDs of related phones
    pub related: Vec<String>,
}
impl AsRef<Product> for Product {
    fn as_ref(&self) -> &Product {
        self
    }
}
impl Product {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_spec(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.specifications.insert(key.into(), value.into());
        self
    }

    pub fn with_variant(mut self, variant: impl Into<Variant>) -> Self {
        self.variants.push(variant.into());
        self
    }

    /// The canonical slug for this phone. Derived, never stored.
    pub fn slug(&self) -> Slug {
        Slug::from_title(&self.title)
    }

    /// Raw value for a specification key, if the CMS supplied one.
    pub fn spec(&self, key: impl AsRef<str>) -> Option<&str> {
        self.specifications.get(key.as_ref()).map(String::as_str)
    }

    /// Lowest price across all priced variants.
    pub fn starting_price(&self) -> Option<f64> {
        self.variants.iter().filter_map(|v| v.price).reduce(f64::min)
    }
}
