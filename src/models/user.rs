use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct BudgetRange {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TravelStyle {
    Budget,
    MidRange,
    Luxury,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccommodationType {
    Hostel,
    Hotel,
    Apartment,
    Resort,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransportPreference {
    Flight,
    Train,
    Bus,
    Car,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct UserPreferences {
    pub budget: BudgetRange,
    pub travel_style: TravelStyle,
    pub interests: Vec<String>,
    pub accommodation_type: AccommodationType,
    pub transport_preference: TransportPreference,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub preferences: UserPreferences,
    pub loyalty_points: u32,
}
