use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::destination::Destination;

/// Itemized cost breakdown for one trip. Every field is a whole currency
/// amount, already rounded; `total` is always the exact sum of the other
/// seven and is only ever set by the estimator.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct TripCost {
    pub flights: i64,
    pub accommodation: i64,
    pub food: i64,
    pub activities: i64,
    pub transport: i64,
    pub insurance: i64,
    pub visa: i64,
    pub total: i64,
}

impl TripCost {
    /// Sum of the seven line items, independent of the stored `total`.
    pub fn line_item_sum(&self) -> i64 {
        self.flights
            + self.accommodation
            + self.food
            + self.activities
            + self.transport
            + self.insurance
            + self.visa
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    Planning,
    Booked,
    Completed,
}

/// A planning record. Status is user-driven data with no enforced
/// transitions.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Trip {
    pub id: String,
    pub destination: Destination,
    pub budget: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub travelers: u32,
    pub costs: TripCost,
    pub status: TripStatus,
    pub created_at: NaiveDate,
}

/// How an estimated total stacks up against the caller's budget ceiling.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct BudgetComparison {
    pub budget: f64,
    pub total: i64,
    /// Absolute distance between total and budget.
    pub difference: f64,
    pub within_budget: bool,
}
