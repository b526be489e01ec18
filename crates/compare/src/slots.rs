//! Comparison Slot Set
//!
//! A comparison page has four fixed positions. Phones are added into the
//! first free position, and can be removed or swapped out at a specific
//! position without moving the others.

use crate::error::{ErrorKind, Result};
use crate::lookup;
use crate::models::Product;
use crate::path::ComparisonPath;
use crate::slug::Slug;
use exn::OptionExt;
use tracing::instrument;

/// Slot capacity of a comparison.
pub const MAX_SLOTS: usize = 4;
/// Phones needed before a comparison can be shown.
pub const MIN_SLOTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SlotSet<'a> {
    slots: [Option<&'a Product>; MAX_SLOTS],
}
impl<'a> SlotSet<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fills slots in order from the given phones.
    ///
    /// Fails with [`TooManyProducts`](ErrorKind::TooManyProducts) beyond four
    /// phones, or [`DuplicateProduct`](ErrorKind::DuplicateProduct) if a
    /// phone appears twice.
    pub fn from_products(products: impl IntoIterator<Item = &'a Product>) -> Result<Self> {
        let products: Vec<&'a Product> = products.into_iter().collect();
        if products.len() > MAX_SLOTS {
            exn::bail!(ErrorKind::TooManyProducts(products.len()));
        }
        let mut set = Self::new();
        for product in products {
            set.add(product)?;
        }
        Ok(set)
    }

    /// Decodes a comparison path and resolves every slug against `catalog`.
    ///
    /// Keeps the two failure modes apart: a malformed path is
    /// [`InvalidFormat`](ErrorKind::InvalidFormat), while unknown phones are
    /// [`NotFound`](ErrorKind::NotFound).
    #[instrument(level = "debug", skip(catalog), fields(catalog = catalog.len()))]
    pub fn from_path<P: AsRef<Product>>(catalog: &'a [P], path: &str) -> Result<Self> {
        let path: ComparisonPath = path.parse()?;
        if path.len() > MAX_SLOTS {
            exn::bail!(ErrorKind::TooManyProducts(path.len()));
        }
        Self::from_products(lookup::find_all(catalog, path.slugs())?)
    }

    /// Puts a phone in the first empty slot, returning its position.
    pub fn add(&mut self, product: &'a Product) -> Result<usize> {
        if self.contains(&product.id) {
            exn::bail!(ErrorKind::DuplicateProduct(product.id.clone()));
        }
        let Some(position) = self.slots.iter().position(Option::is_none) else {
            exn::bail!(ErrorKind::SlotsFull);
        };
        self.slots[position] = Some(product);
        Ok(position)
    }

    /// Empties a slot, returning whichever phone was in it.
    pub fn remove(&mut self, position: usize) -> Result<Option<&'a Product>> {
        let slot = self.slots.get_mut(position).ok_or_raise(|| ErrorKind::SlotOutOfRange(position))?;
        Ok(slot.take())
    }

    /// Puts a phone at a specific position, returning the phone it replaced.
    ///
    /// Re-placing a phone into the slot it already occupies is a no-op; placing
    /// it while it occupies a *different* slot is a duplicate.
    pub fn replace(&mut self, position: usize, product: &'a Product) -> Result<Option<&'a Product>> {
        if position >= MAX_SLOTS {
            exn::bail!(ErrorKind::SlotOutOfRange(position));
        }
        let elsewhere = self
            .slots
            .iter()
            .enumerate()
            .any(|(i, slot)| i != position && slot.is_some_and(|p| p.id == product.id));
        if elsewhere {
            exn::bail!(ErrorKind::DuplicateProduct(product.id.clone()));
        }
        Ok(self.slots[position].replace(product))
    }

    pub fn get(&self, position: usize) -> Option<&'a Product> {
        self.slots.get(position).copied().flatten()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.products().any(|p| p.id == id)
    }

    /// Occupied slots, in position order.
    pub fn products(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.slots.iter().flatten().copied()
    }

    /// All four slots, including empty ones.
    pub fn slots(&self) -> &[Option<&'a Product>; MAX_SLOTS] {
        &self.slots
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.products().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == MAX_SLOTS
    }

    /// Returns `true` when there are enough phones to render a comparison.
    pub fn can_compare(&self) -> bool {
        self.len() >= MIN_SLOTS
    }

    /// The path to navigate to for the current selection.
    pub fn path(&self) -> Result<ComparisonPath> {
        ComparisonPath::from_slugs(self.products().map(Product::slug))
    }

    /// Slugs of the occupied slots, in position order.
    pub fn slugs(&self) -> Vec<Slug> {
        self.products().map(Product::slug).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn phones() -> Vec<Product> {
        vec![
            Product::new("blt01", "iPhone 16 Pro"),
            Product::new("blt02", "Pixel 9"),
            Product::new("blt03", "Galaxy S24"),
            Product::new("blt04", "OnePlus 13"),
            Product::new("blt05", "Xperia 1 VI"),
        ]
    }

    fn ids(set: &SlotSet<'_>) -> Vec<Option<String>> {
        set.slots().iter().map(|s| s.map(|p| p.id.clone())).collect()
    }

    #[rstest]
    fn test_add_fills_first_free_slot(phones: Vec<Product>) {
        let mut set = SlotSet::new();
        assert_eq!(set.add(&phones[0]).unwrap(), 0);
        assert_eq!(set.add(&phones[1]).unwrap(), 1);
        set.remove(0).unwrap();
        assert_eq!(set.add(&phones[2]).unwrap(), 0);
        assert_eq!(ids(&set), [Some("blt03".to_string()), Some("blt02".to_string()), None, None]);
    }

    #[rstest]
    fn test_add_when_full(phones: Vec<Product>) {
        let mut set = SlotSet::from_products(&phones[..4]).unwrap();
        assert!(set.is_full());
        let err = set.add(&phones[4]).unwrap_err();
        assert_eq!(*err, ErrorKind::SlotsFull);
    }

    #[rstest]
    fn test_add_duplicate(phones: Vec<Product>) {
        let mut set = SlotSet::new();
        set.add(&phones[0]).unwrap();
        let err = set.add(&phones[0]).unwrap_err();
        assert_eq!(*err, ErrorKind::DuplicateProduct("blt01".to_string()));
    }

    #[rstest]
    fn test_from_products_too_many(phones: Vec<Product>) {
        let err = SlotSet::from_products(&phones).unwrap_err();
        assert_eq!(*err, ErrorKind::TooManyProducts(5));
    }

    #[rstest]
    fn test_remove(phones: Vec<Product>) {
        let mut set = SlotSet::from_products(&phones[..2]).unwrap();
        assert_eq!(set.remove(1).unwrap().map(|p| p.id.as_str()), Some("blt02"));
        assert_eq!(set.remove(1).unwrap(), None);
        assert_eq!(*set.remove(4).unwrap_err(), ErrorKind::SlotOutOfRange(4));
        assert!(!set.can_compare());
    }

    #[rstest]
    fn test_replace(phones: Vec<Product>) {
        let mut set = SlotSet::from_products(&phones[..2]).unwrap();
        let old = set.replace(0, &phones[2]).unwrap();
        assert_eq!(old.map(|p| p.id.as_str()), Some("blt01"));
        // Into an empty slot
        assert_eq!(set.replace(3, &phones[0]).unwrap(), None);
        // Same slot again is fine
        assert!(set.replace(3, &phones[0]).is_ok());
        assert_eq!(*set.replace(1, &phones[0]).unwrap_err(), ErrorKind::DuplicateProduct("blt01".to_string()));
        assert_eq!(*set.replace(7, &phones[4]).unwrap_err(), ErrorKind::SlotOutOfRange(7));
        assert_eq!(
            ids(&set),
            [Some("blt03".to_string()), Some("blt02".to_string()), None, Some("blt01".to_string())]
        );
    }

    #[rstest]
    fn test_path_skips_empty_slots(phones: Vec<Product>) {
        let mut set = SlotSet::new();
        set.replace(1, &phones[3]).unwrap();
        assert!(set.path().is_err());
        set.replace(3, &phones[1]).unwrap();
        assert_eq!(set.path().unwrap().to_string(), "/compare/oneplus-13-vs-pixel-9");
    }

    #[rstest]
    #[case("iphone-16-pro-vs-pixel-9", &["blt01", "blt02"])]
    #[case("/compare/oneplus-13-vs-pixel-9-vs-galaxy-s24", &["blt04", "blt02", "blt03"])]
    fn test_from_path(phones: Vec<Product>, #[case] path: &str, #[case] expected: &[&str]) {
        let set = SlotSet::from_path(&phones, path).unwrap();
        assert_eq!(set.products().map(|p| p.id.as_str()).collect::<Vec<_>>(), expected);
        assert!(set.can_compare());
    }

    #[rstest]
    #[case("iphone-16-pro", ErrorKind::InvalidFormat("iphone-16-pro".to_string()))]
    #[case("iphone-16-pro-vs-nokia-3310", ErrorKind::NotFound(vec!["nokia-3310".to_string()]))]
    #[case("a-vs-b-vs-c-vs-d-vs-e", ErrorKind::TooManyProducts(5))]
    #[case("pixel-9-vs-pixel-9", ErrorKind::DuplicateProduct("blt02".to_string()))]
    fn test_from_path_errors(phones: Vec<Product>, #[case] path: &str, #[case] expected: ErrorKind) {
        let err = SlotSet::from_path(&phones, path).unwrap_err();
        assert_eq!(*err, expected);
    }
}
