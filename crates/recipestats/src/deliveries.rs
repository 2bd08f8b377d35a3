//! Per-postcode delivery matrix and busiest postcode tracking
//!
//! Each postcode owns a 24x24 grid of delivery lists indexed by
//! `[from][to]` hour, so a window query is a direct sub-matrix sum with no
//! sorting or scanning of individual deliveries.

use std::collections::HashMap;

use ahash::RandomState;

use crate::error::Result;
use crate::model::{Delivery, Hour, HOURS_PER_DAY};
use crate::parser::parse_clock;

/// All deliveries to one postcode, bucketed by hour window
#[derive(Debug, Clone)]
pub struct PostcodeBucket {
    code: String,
    /// Row-major `[from][to]` cells
    cells: Vec<Vec<Delivery>>,
    count: usize,
}

impl PostcodeBucket {
    fn new(code: String) -> Self {
        Self {
            code,
            cells: vec![Vec::new(); HOURS_PER_DAY * HOURS_PER_DAY],
            count: 0,
        }
    }

    fn push(&mut self, delivery: Delivery) {
        let cell = Self::cell_index(delivery.from, delivery.to);
        self.cells[cell].push(delivery);
        self.count += 1;
    }

    fn cell_index(from: Hour, to: Hour) -> usize {
        from.index() * HOURS_PER_DAY + to.index()
    }

    /// The postcode
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Total deliveries to this postcode
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if the bucket holds no deliveries
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Deliveries whose window is exactly `from`..`to`
    pub fn deliveries(&self, from: Hour, to: Hour) -> &[Delivery] {
        &self.cells[Self::cell_index(from, to)]
    }

    /// Deliveries starting and ending inside `start..=end`
    ///
    /// Empty when `start > end`; windows are never wrapped around midnight.
    pub fn count_within(&self, start: Hour, end: Hour) -> usize {
        if start > end {
            return 0;
        }

        (start.index()..=end.index())
            .map(|from| {
                let row = from * HOURS_PER_DAY;
                self.cells[row + start.index()..=row + end.index()]
                    .iter()
                    .map(Vec::len)
                    .sum::<usize>()
            })
            .sum()
    }
}

/// Running leader among postcodes by delivery count
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusiestPostcode {
    /// The postcode
    pub code: String,
    /// Its delivery count
    pub count: usize,
}

/// Indexes deliveries by postcode and hour window
#[derive(Debug, Default)]
pub struct DeliveryKeeper {
    postcodes: HashMap<String, PostcodeBucket, RandomState>,
    busiest: Option<BusiestPostcode>,
}

impl DeliveryKeeper {
    /// Create an empty keeper
    pub fn new() -> Self {
        Self::default()
    }

    /// File a delivery under its postcode and window, updating the leader
    ///
    /// A postcode only takes the lead by strictly exceeding the current
    /// leader's count; ties keep the first postcode to reach it.
    pub fn add(&mut self, delivery: Delivery) {
        let bucket = self
            .postcodes
            .entry(delivery.postcode.clone())
            .or_insert_with_key(|code| PostcodeBucket::new(code.clone()));
        bucket.push(delivery);

        let count = bucket.count;
        match &mut self.busiest {
            Some(leader) if count <= leader.count => {}
            Some(leader) if leader.code == bucket.code => leader.count = count,
            leader => {
                *leader = Some(BusiestPostcode {
                    code: bucket.code.clone(),
                    count,
                })
            }
        }
    }

    /// Postcode with the most deliveries, `None` before the first delivery
    pub fn busiest_postcode(&self) -> Option<&BusiestPostcode> {
        self.busiest.as_ref()
    }

    /// The bucket for a postcode, if it received any delivery
    pub fn postcode(&self, code: &str) -> Option<&PostcodeBucket> {
        self.postcodes.get(code)
    }

    /// Number of distinct postcodes
    pub fn len(&self) -> usize {
        self.postcodes.len()
    }

    /// Check if no delivery was added
    pub fn is_empty(&self) -> bool {
        self.postcodes.is_empty()
    }

    /// Count deliveries to `postcode` whose window lies within `from..=to`
    ///
    /// `from` and `to` are 12h times such as `9AM`. Any empty argument means
    /// no query was requested and yields 0. Unknown postcodes yield 0.
    pub fn count_by_window(&self, postcode: &str, from: &str, to: &str) -> Result<usize> {
        if postcode.is_empty() || from.is_empty() || to.is_empty() {
            return Ok(0);
        }

        let start = parse_clock(from)?;
        let end = parse_clock(to)?;

        Ok(self.count_within(postcode, start, end))
    }

    /// Count deliveries to `postcode` starting and ending inside `start..=end`
    pub fn count_within(&self, postcode: &str, start: Hour, end: Hour) -> usize {
        self.postcodes
            .get(postcode)
            .map_or(0, |bucket| bucket.count_within(start, end))
    }
}
