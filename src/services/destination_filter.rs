use thiserror::Error;

use crate::models::destination::Destination;

/// Headroom above the stated budget ceiling: destinations a bit over
/// budget still qualify as candidates.
pub const BUDGET_TOLERANCE: f64 = 1.2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("budget must be a positive amount")]
    InvalidBudget,
}

pub struct DestinationFilter;

impl DestinationFilter {
    /// Keep every destination whose average cost fits within the tolerance
    /// band of `budget`, preserving catalog order. An empty result is valid
    /// and means no destination fits.
    pub fn by_budget(
        catalog: &[Destination],
        budget: f64,
    ) -> Result<Vec<&Destination>, FilterError> {
        if !budget.is_finite() || budget <= 0.0 {
            return Err(FilterError::InvalidBudget);
        }

        let ceiling = budget * BUDGET_TOLERANCE;
        Ok(catalog
            .iter()
            .filter(|dest| dest.average_cost <= ceiling)
            .collect())
    }

    /// Case-insensitive substring match on name or country, applied after
    /// budget filtering. A blank query narrows nothing.
    pub fn by_query<'a>(matches: Vec<&'a Destination>, query: &str) -> Vec<&'a Destination> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return matches;
        }

        matches
            .into_iter()
            .filter(|dest| {
                dest.name.to_lowercase().contains(&query)
                    || dest.country.to_lowercase().contains(&query)
            })
            .collect()
    }
}
