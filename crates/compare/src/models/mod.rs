mod link;
mod product;
mod spec;
mod variant;

pub use self::link::{Image, PurchaseLink};
pub use self::product::{Product, Specifications};
pub use self::spec::{Polarity, SPECIFICATIONS, Specification};
pub use self::variant::Variant;
