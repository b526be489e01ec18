//! Phone comparison core: slugs, comparison paths, lookup and ranking.
//!
//! Everything in this crate is a pure function over caller-supplied data. The
//! phone list comes from elsewhere (see `phonecmp-catalog`); nothing here
//! fetches, caches or mutates it.

mod consts;
pub mod error;
pub mod lookup;
pub mod models;
mod path;
mod rank;
mod slots;
mod slug;
mod table;

pub use crate::consts::{PATH_PREFIX, SEPARATOR};
pub use crate::models::{Polarity, Product, SPECIFICATIONS, Specification};
pub use crate::path::{ComparisonPath, decode, encode};
pub use crate::rank::{Cell, NOT_AVAILABLE, Ranked, magnitude, rank, rank_with};
pub use crate::slots::{MAX_SLOTS, MIN_SLOTS, SlotSet};
pub use crate::slug::{Slug, slugify};
pub use crate::table::{ComparisonTable, Row};
