use thiserror::Error;

use crate::models::trip::{BudgetComparison, TripCost};

// Fixed shares of the destination's base cost. Flights and insurance scale
// with traveler count (per-trip costs), accommodation/activities/transport
// with duration (nightly costs), food with both.
pub const FLIGHTS_SHARE: f64 = 0.40;
pub const ACCOMMODATION_SHARE: f64 = 0.30;
pub const FOOD_SHARE: f64 = 0.20;
pub const ACTIVITIES_SHARE: f64 = 0.15;
pub const TRANSPORT_SHARE: f64 = 0.10;
pub const INSURANCE_SHARE: f64 = 0.05;

/// Flat visa processing fee charged per traveler when the destination
/// requires one.
pub const VISA_FEE_PER_TRAVELER: i64 = 30;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EstimateError {
    #[error("base cost must be a positive amount")]
    InvalidBaseCost,
    #[error("trip duration must be at least one day")]
    InvalidDays,
    #[error("traveler count must be at least one")]
    InvalidTravelers,
    #[error("budget must be a positive amount")]
    InvalidBudget,
}

pub struct CostEstimator;

impl CostEstimator {
    /// Compute the itemized breakdown for a trip. Pure function of its four
    /// inputs: identical arguments always produce the identical breakdown.
    ///
    /// Each line item is rounded to a whole currency unit on its own
    /// (`f64::round`, ties away from zero — round-half-up for the
    /// non-negative values admitted here). The total is never rounded; it is
    /// the exact sum of the rounded items.
    pub fn estimate(
        base_cost: f64,
        days: u32,
        travelers: u32,
        visa_required: bool,
    ) -> Result<TripCost, EstimateError> {
        if !base_cost.is_finite() || base_cost <= 0.0 {
            return Err(EstimateError::InvalidBaseCost);
        }
        if days == 0 {
            return Err(EstimateError::InvalidDays);
        }
        if travelers == 0 {
            return Err(EstimateError::InvalidTravelers);
        }

        let days_f = f64::from(days);
        let travelers_f = f64::from(travelers);

        let flights = (base_cost * FLIGHTS_SHARE * travelers_f).round() as i64;
        let accommodation = (base_cost * ACCOMMODATION_SHARE * days_f).round() as i64;
        let food = (base_cost * FOOD_SHARE * days_f * travelers_f).round() as i64;
        let activities = (base_cost * ACTIVITIES_SHARE * days_f).round() as i64;
        let transport = (base_cost * TRANSPORT_SHARE * days_f).round() as i64;
        let insurance = (base_cost * INSURANCE_SHARE * travelers_f).round() as i64;
        let visa = if visa_required {
            VISA_FEE_PER_TRAVELER * i64::from(travelers)
        } else {
            0
        };

        let total = flights + accommodation + food + activities + transport + insurance + visa;

        Ok(TripCost {
            flights,
            accommodation,
            food,
            activities,
            transport,
            insurance,
            visa,
            total,
        })
    }

    /// Compare an estimated total against the caller's budget ceiling. The
    /// ceiling gets the same gate as everywhere else: positive and finite.
    pub fn compare_budget(
        costs: &TripCost,
        budget: f64,
    ) -> Result<BudgetComparison, EstimateError> {
        if !budget.is_finite() || budget <= 0.0 {
            return Err(EstimateError::InvalidBudget);
        }

        let total = costs.total;
        let within_budget = (total as f64) <= budget;
        Ok(BudgetComparison {
            budget,
            total,
            difference: (total as f64 - budget).abs(),
            within_budget,
        })
    }
}
