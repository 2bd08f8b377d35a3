//! JSON report printed for each run
//!
//! Every section is optional and left out of the output when it was not
//! requested or found nothing.

use serde::Serialize;

/// Occurrences of one matched recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountPerRecipe {
    pub recipe: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusiestPostcode {
    pub postcode: String,
    pub delivery_count: usize,
}

/// Result of a postcode and hour window query, echoing the query bounds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountPerPostcodeAndTime {
    pub postcode: String,
    pub from: String,
    pub to: String,
    pub delivery_count: usize,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique_recipe_count: Option<usize>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub count_per_recipe: Vec<CountPerRecipe>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub busiest_postcode: Option<BusiestPostcode>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count_per_postcode_and_time: Option<CountPerPostcodeAndTime>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub match_by_name: Vec<String>,
}

impl Report {
    /// Pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
