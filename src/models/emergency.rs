use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactType {
    Hospital,
    Embassy,
    Police,
    Fire,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EmergencyContact {
    pub id: String,
    #[serde(rename = "type")]
    pub contact_type: ContactType,
    pub name: String,
    pub phone: String,
    pub address: String,
    /// Distance from the traveler in kilometers.
    pub distance: f64,
}
