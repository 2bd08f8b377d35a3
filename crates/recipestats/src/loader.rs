//! Input loading and keeper construction
//!
//! Loading happens in two phases:
//! 1. Read and parse the whole input file sequentially
//! 2. Build the keepers on scoped threads:
//!    - recipes, then name fragments (the index reads the finished recipe map)
//!    - deliveries, independently
//!
//! Both threads are joined before [`Indexes`] is handed out, so queries never
//! see a partially built keeper.

use std::fs;
use std::path::Path;
use std::thread;
use std::time::Instant;

use tracing::debug;

use crate::deliveries::DeliveryKeeper;
use crate::error::{Error, Result};
use crate::model::{Delivery, RawRecord, Record};
use crate::recipes::RecipeKeeper;
use crate::slices::SliceKeeper;

/// The three keepers built from one dataset, read-only once loaded
#[derive(Debug, Default)]
pub struct Indexes {
    recipes: RecipeKeeper,
    slices: SliceKeeper,
    deliveries: DeliveryKeeper,
}

impl Indexes {
    /// Read, parse and index a JSON input file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let records = read_records(path)?;
        build_indexes(records)
    }

    /// Distinct recipes
    pub fn recipes(&self) -> &RecipeKeeper {
        &self.recipes
    }

    /// Name fragment index
    pub fn slices(&self) -> &SliceKeeper {
        &self.slices
    }

    /// Deliveries by postcode and hour window
    pub fn deliveries(&self) -> &DeliveryKeeper {
        &self.deliveries
    }
}

/// Read a JSON array of delivery records and parse every delivery window
///
/// The first malformed window aborts the read with [`Error::Record`].
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let start = Instant::now();

    let bytes = fs::read(path)?;
    if bytes.is_empty() {
        return Err(Error::EmptyInput(path.to_path_buf()));
    }

    let raw: Vec<RawRecord> = serde_json::from_slice(&bytes)?;

    let records = raw
        .into_iter()
        .enumerate()
        .map(|(index, row)| row.parse().map_err(|source| Error::Record { index, source }))
        .collect::<Result<Vec<_>>>()?;

    debug!(
        path = %path.display(),
        records = records.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "input file read"
    );

    Ok(records)
}

/// Build all keepers from parsed records
///
/// The recipe and delivery passes run on separate threads, each writing only
/// its own keepers.
pub fn build_indexes(records: Vec<Record>) -> Result<Indexes> {
    let start = Instant::now();
    let (names, deliveries): (Vec<String>, Vec<Delivery>) = records
        .into_iter()
        .map(|record| (record.recipe, record.delivery))
        .unzip();

    let (recipe_pass, delivery_pass) = thread::scope(|scope| {
        let recipe_task = scope.spawn(|| build_recipes(&names));
        let delivery_task = scope.spawn(move || build_deliveries(deliveries));

        (recipe_task.join(), delivery_task.join())
    });

    let (recipes, slices) = joined("recipes", recipe_pass)?;
    let deliveries = joined("deliveries", delivery_pass)?;

    debug!(
        recipes = recipes.count(),
        fragments = slices.len(),
        postcodes = deliveries.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "indexes built"
    );

    Ok(Indexes {
        recipes,
        slices,
        deliveries,
    })
}

/// Turn a panicked load task into [`Error::LoadTask`]
fn joined<T>(task: &'static str, outcome: thread::Result<T>) -> Result<T> {
    outcome.map_err(|_| Error::LoadTask(task))
}

fn build_recipes(names: &[String]) -> (RecipeKeeper, SliceKeeper) {
    let start = Instant::now();
    let mut recipes = RecipeKeeper::new();
    for name in names {
        recipes.add(name);
    }
    debug!(
        recipes = recipes.count(),
        elapsed_ms = start.elapsed().as_millis(),
        "recipes loaded"
    );

    let start = Instant::now();
    let mut slices = SliceKeeper::new();
    slices.load(recipes.snapshot().values());
    debug!(
        fragments = slices.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "name fragments indexed"
    );

    (recipes, slices)
}

fn build_deliveries(deliveries: Vec<Delivery>) -> DeliveryKeeper {
    let start = Instant::now();
    let mut keeper = DeliveryKeeper::new();
    for delivery in deliveries {
        keeper.add(delivery);
    }
    debug!(
        postcodes = keeper.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "deliveries mapped"
    );

    keeper
}
