//! Runs the requested queries against a loaded dataset

use recipestats::Indexes;
use tracing::{debug, warn};

use crate::report::{BusiestPostcode, CountPerPostcodeAndTime, CountPerRecipe, Report};

/// What a single run asks for
#[derive(Debug, Default, Clone)]
pub struct Query {
    pub count_recipes: bool,
    pub fragments: Vec<String>,
    pub postcode: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
}

impl Query {
    /// Trim fragments and drop blank ones, so `Cheese, Pork` matches both
    pub fn with_fragments<I, S>(mut self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.fragments = fragments
            .into_iter()
            .map(|f| f.as_ref().trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
        self
    }
}

pub fn calculate(indexes: &Indexes, query: &Query) -> Report {
    let mut report = Report::default();

    if query.count_recipes {
        report.unique_recipe_count = Some(indexes.recipes().count());
    }

    for recipe in indexes.slices().get_many(&query.fragments) {
        report.match_by_name.push(recipe.name.clone());
        report.count_per_recipe.push(CountPerRecipe {
            recipe: recipe.name.clone(),
            count: recipe.count,
        });
    }

    report.busiest_postcode = indexes
        .deliveries()
        .busiest_postcode()
        .map(|busiest| BusiestPostcode {
            postcode: busiest.code.clone(),
            delivery_count: busiest.count,
        });

    let postcode = query.postcode.as_deref().unwrap_or_default();
    let from = query.from.as_deref().unwrap_or_default();
    let to = query.to.as_deref().unwrap_or_default();
    match indexes.deliveries().count_by_window(postcode, from, to) {
        Ok(0) => debug!(postcode, from, to, "no deliveries in window"),
        Ok(delivery_count) => {
            report.count_per_postcode_and_time = Some(CountPerPostcodeAndTime {
                postcode: postcode.to_string(),
                from: from.to_string(),
                to: to.to_string(),
                delivery_count,
            });
        }
        Err(e) => warn!(postcode, error = %e, "window query skipped"),
    }

    report
}
