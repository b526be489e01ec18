//! Side-by-side specification table for a comparison page.

use crate::error::{ErrorKind, Result};
use crate::models::{Product, SPECIFICATIONS, Specification};
use crate::rank::{Ranked, rank_with};
use crate::slots::{MAX_SLOTS, MIN_SLOTS, SlotSet};
use tracing::instrument;

/// One specification, ranked across every compared phone.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub specification: &'static Specification,
    /// One cell per phone, in slot order
    pub cells: Vec<Ranked>,
}
impl Row {
    /// Positions of the winning phones in this row.
    pub fn winners(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells.iter().enumerate().filter(|(_, cell)| cell.winner).map(|(i, _)| i)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonTable<'a> {
    pub products: Vec<&'a Product>,
    pub rows: Vec<Row>,
}
impl<'a> ComparisonTable<'a> {
    /// Ranks every descriptor in `specifications` across 2 to 4 phones.
    #[instrument(level = "debug", skip_all, fields(products = products.len(), rows = specifications.len()))]
    pub fn build(products: Vec<&'a Product>, specifications: &'static [Specification]) -> Result<Self> {
        match products.len() {
            n if n < MIN_SLOTS => exn::bail!(ErrorKind::TooFewProducts(n)),
            n if n > MAX_SLOTS => exn::bail!(ErrorKind::TooManyProducts(n)),
            _ => {},
        }
        let rows = specifications
            .iter()
            .map(|specification| Row {
                specification,
                cells: rank_with(specification.polarity, products.iter().map(|p| p.spec(specification.key))),
            })
            .collect();
        Ok(Self { products, rows })
    }

    /// Number of rows each phone wins, in slot order.
    pub fn wins(&self) -> Vec<usize> {
        let mut wins = vec![0; self.products.len()];
        for row in &self.rows {
            for position in row.winners() {
                wins[position] += 1;
            }
        }
        wins
    }
}

impl<'a> SlotSet<'a> {
    /// Builds the comparison table for the occupied slots using the standard
    /// [`SPECIFICATIONS`] table.
    pub fn table(&self) -> Result<ComparisonTable<'a>> {
        ComparisonTable::build(self.products().collect(), SPECIFICATIONS)
    }
}
