use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RewardKind {
    Percentage,
    Fixed,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RewardCategory {
    Flight,
    Hotel,
    Activity,
    General,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Reward {
    pub id: String,
    pub title: String,
    pub description: String,
    pub discount: f64,
    #[serde(rename = "type")]
    pub kind: RewardKind,
    pub category: RewardCategory,
    pub expiry_date: NaiveDate,
    pub points_required: u32,
}

impl Reward {
    /// Whether a member with the given loyalty balance can redeem this.
    pub fn redeemable_with(&self, points: u32) -> bool {
        points >= self.points_required
    }
}
