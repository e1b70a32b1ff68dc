//! Exact-duplicate removal for ordered 2D coordinate lists.
//!
//! ## Equality
//! Duplicate detection uses exact floating-point equality on both
//! components, not tolerance-based matching. `-0.0` and `0.0` compare
//! equal and fold onto one key; a NaN component never equals anything,
//! including itself, so such points are never removed.
//!
//! ## Scan Order
//! Deduplication is a single forward pass over the list. The first
//! occurrence of each value stays in place; every later occurrence is
//! removed and reported in input order. The surviving list preserves
//! first-occurrence order and a second pass removes nothing.

mod dedup;
mod error;
mod geom;
mod load;

pub use dedup::{Removal, dedup_in_place};
pub use error::Error;
pub use geom::Point2d;
pub use load::{load_csv_path, read_csv};
