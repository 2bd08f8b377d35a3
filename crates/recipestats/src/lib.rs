//! # recipestats
//!
//! In-memory indexes over a collection of recipe deliveries.
//!
//! ## Keepers
//! - **RecipeKeeper**: distinct recipes with occurrence counts
//! - **SliceKeeper**: inverted index from name fragments to recipes
//! - **DeliveryKeeper**: per-postcode 24x24 hour matrix plus the busiest postcode
//!
//! Keepers are built once by [`build_indexes`] and are read-only afterwards,
//! so any number of queries may run against the same [`Indexes`] concurrently.

#![warn(missing_docs)]

mod deliveries;
mod error;
mod loader;
mod model;
mod parser;
mod recipes;
mod session;
mod slices;

pub use deliveries::{BusiestPostcode, DeliveryKeeper, PostcodeBucket};
pub use error::{Error, Result};
pub use loader::{build_indexes, read_records, Indexes};
pub use model::{Delivery, Hour, RawRecord, Recipe, Record, HOURS_PER_DAY};
pub use parser::{parse_clock, parse_window, ParseError};
pub use recipes::{RecipeKeeper, RecipeMap};
pub use session::Session;
pub use slices::SliceKeeper;
