//! CMS `mobile_phone` entry shapes, and their conversion into [`Product`].

use crate::error::{ErrorKind, Result};
use crate::field::{EditTag, Field, Scalar};
use exn::OptionExt;
use phonecmp_compare::models::{Image, Product, PurchaseLink, Variant};
use serde::Deserialize;
use std::collections::BTreeMap;

/// Live-preview edit tags collected during ingestion, keyed by field path
/// (`"title"`, `"specifications.ram"`, ...).
pub(crate) type EditTags = BTreeMap<String, String>;

/// Either `{"entries": [...]}` as the delivery API returns it, or a bare array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum Document {
    Entries { entries: Vec<PhoneEntry> },
    Bare(Vec<PhoneEntry>),
}
impl Document {
    pub(crate) fn into_entries(self) -> Vec<PhoneEntry> {
        match self {
            Document::Entries { entries } | Document::Bare(entries) => entries,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct PhoneEntry {
    uid: Option<String>,
    title: Option<Field<String>>,
    #[serde(default)]
    specifications: BTreeMap<String, Field<Option<Scalar>>>,
    #[serde(default)]
    variants: Vec<VariantEntry>,
    #[serde(default)]
    purchase_links: Vec<LinkEntry>,
    lead_image: Option<Field<ImageEntry>>,
    #[serde(default)]
    gallery: Vec<ImageEntry>,
    #[serde(default)]
    related_phones: Vec<Reference>,
    /// Entry-level edit tags, as the CMS SDK attaches them.
    #[serde(rename = "$", default)]
    tags: BTreeMap<String, EditTag>,
}

#[derive(Debug, Deserialize)]
struct VariantEntry {
    #[serde(alias = "name")]
    variant_name: Field<String>,
    #[serde(default)]
    price: Option<Field<Option<Scalar>>>,
}

#[derive(Debug, Deserialize)]
struct LinkEntry {
    #[serde(alias = "store", alias = "title")]
    retailer: Field<String>,
    #[serde(alias = "href")]
    url: Field<String>,
}

#[derive(Debug, Deserialize)]
struct ImageEntry {
    url: String,
    #[serde(default)]
    title: Option<String>,
}
impl From<ImageEntry> for Image {
    fn from(image: ImageEntry) -> Self {
        Self {
            url: image.url,
            title: image.title.filter(|t| !t.trim().is_empty()),
        }
    }
}

#[derive(Debug, Deserialize)]
struct Reference {
    uid: String,
}

impl PhoneEntry {
    /// Converts the entry into a [`Product`], recording edit tags into `tags`
    /// when `keep_tags` is set.
    ///
    /// Specification values that are null or empty are dropped, so they
    /// show up as "not available" rather than as an empty string.
    pub(crate) fn into_product(self, index: usize, keep_tags: bool, tags: &mut EditTags) -> Result<Product> {
        let id = self
            .uid
            .filter(|uid| !uid.trim().is_empty())
            .ok_or_raise(|| ErrorKind::InvalidEntry { index, field: "uid" })?;
        let Some(title) = self.title else {
            exn::bail!(ErrorKind::InvalidEntry { index, field: "title" });
        };
        let mut record = |path: String, tag: Option<EditTag>| {
            if keep_tags && let Some(tag) = tag {
                tags.insert(path, tag.location);
            }
        };
        for (field, tag) in self.tags {
            record(field, Some(tag));
        }

        let (title, tag) = title.into_parts();
        if title.trim().is_empty() {
            exn::bail!(ErrorKind::InvalidEntry { index, field: "title" });
        }
        record("title".to_string(), tag);

        let mut specifications = BTreeMap::new();
        for (key, field) in self.specifications {
            let (value, tag) = field.into_parts();
            record(format!("specifications.{key}"), tag);
            if let Some(value) = value.map(|v| v.to_string()).filter(|v| !v.trim().is_empty()) {
                specifications.insert(key, value);
            }
        }

        let variants = self
            .variants
            .into_iter()
            .map(|variant| {
                let price = variant.price.and_then(|p| p.into_value()).and_then(|p| p.as_price());
                Variant::new(variant.variant_name.into_value(), price)
            })
            .collect();
        let links = self
            .purchase_links
            .into_iter()
            .map(|link| PurchaseLink::from((link.retailer.into_value(), link.url.into_value())))
            .collect();
        let image = self.lead_image.map(|field| {
            let (image, tag) = field.into_parts();
            record("lead_image".to_string(), tag);
            Image::from(image)
        });

        Ok(Product {
            id,
            title,
            specifications,
            variants,
            links,
            image,
            gallery: self.gallery.into_iter().map(Image::from).collect(),
            related: self.related_phones.into_iter().map(|r| r.uid).collect(),
        })
    }
}
