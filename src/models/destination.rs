use serde::{Deserialize, Serialize};

/// A catalog entry. Loaded once at startup and never mutated.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Destination {
    pub id: String,
    pub name: String,
    pub country: String,
    pub description: String,
    pub image_url: String,
    /// Nominal average per-person cost, the scaling factor for all estimates.
    pub average_cost: f64,
    pub rating: f32,
    pub tags: Vec<String>,
    pub visa_required: bool,
    pub best_time_to_visit: String,
}
