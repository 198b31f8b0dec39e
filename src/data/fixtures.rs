use chrono::NaiveDate;

use crate::data::catalog::Catalog;
use crate::models::emergency::{ContactType, EmergencyContact};
use crate::models::reward::{Reward, RewardCategory, RewardKind};
use crate::models::trip::{Trip, TripCost, TripStatus};
use crate::models::user::{
    AccommodationType, BudgetRange, TransportPreference, TravelStyle, User, UserPreferences,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("fixture date is valid")
}

/// The demo trip history. Costs are recorded figures from past planning
/// sessions, not re-runs of the estimator.
pub fn sample_trips(catalog: &Catalog) -> Vec<Trip> {
    let mut trips = Vec::new();

    if let Some(bali) = catalog.find("1") {
        trips.push(Trip {
            id: "1".to_string(),
            destination: bali.clone(),
            budget: 1000.0,
            start_date: date(2024, 6, 15),
            end_date: date(2024, 6, 22),
            travelers: 2,
            costs: TripCost {
                flights: 400,
                accommodation: 280,
                food: 200,
                activities: 150,
                transport: 80,
                insurance: 40,
                visa: 0,
                total: 1150,
            },
            status: TripStatus::Completed,
            created_at: date(2024, 5, 1),
        });
    }

    if let Some(tokyo) = catalog.find("2") {
        trips.push(Trip {
            id: "2".to_string(),
            destination: tokyo.clone(),
            budget: 2000.0,
            start_date: date(2024, 9, 10),
            end_date: date(2024, 9, 17),
            travelers: 1,
            costs: TripCost {
                flights: 800,
                accommodation: 600,
                food: 350,
                activities: 200,
                transport: 100,
                insurance: 50,
                visa: 30,
                total: 2130,
            },
            status: TripStatus::Planning,
            created_at: date(2024, 7, 15),
        });
    }

    trips
}

pub fn sample_rewards() -> Vec<Reward> {
    vec![
        Reward {
            id: "1".to_string(),
            title: "20% Off Hotels".to_string(),
            description: "Get 20% discount on hotel bookings worldwide".to_string(),
            discount: 20.0,
            kind: RewardKind::Percentage,
            category: RewardCategory::Hotel,
            expiry_date: date(2024, 12, 31),
            points_required: 500,
        },
        Reward {
            id: "2".to_string(),
            title: "$100 Flight Credit".to_string(),
            description: "Save $100 on your next flight booking".to_string(),
            discount: 100.0,
            kind: RewardKind::Fixed,
            category: RewardCategory::Flight,
            expiry_date: date(2024, 11, 30),
            points_required: 1000,
        },
        Reward {
            id: "3".to_string(),
            title: "Free Activity Pass".to_string(),
            description: "Get one free activity booking in any destination".to_string(),
            discount: 50.0,
            kind: RewardKind::Fixed,
            category: RewardCategory::Activity,
            expiry_date: date(2024, 10, 31),
            points_required: 750,
        },
    ]
}

pub fn sample_emergency_contacts() -> Vec<EmergencyContact> {
    vec![
        EmergencyContact {
            id: "1".to_string(),
            contact_type: ContactType::Hospital,
            name: "General Hospital".to_string(),
            phone: "+1-555-0123".to_string(),
            address: "123 Medical Center Dr".to_string(),
            distance: 2.5,
        },
        EmergencyContact {
            id: "2".to_string(),
            contact_type: ContactType::Embassy,
            name: "US Embassy".to_string(),
            phone: "+1-555-0456".to_string(),
            address: "456 Embassy Row".to_string(),
            distance: 5.2,
        },
        EmergencyContact {
            id: "3".to_string(),
            contact_type: ContactType::Police,
            name: "Local Police Station".to_string(),
            phone: "+1-555-0789".to_string(),
            address: "789 Safety St".to_string(),
            distance: 1.8,
        },
    ]
}

pub fn sample_user() -> User {
    User {
        id: "1".to_string(),
        name: "John Doe".to_string(),
        email: "john.doe@example.com".to_string(),
        avatar: Some(
            "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100".to_string(),
        ),
        preferences: UserPreferences {
            budget: BudgetRange {
                min: 500.0,
                max: 2000.0,
            },
            travel_style: TravelStyle::MidRange,
            interests: vec![
                "Culture".to_string(),
                "Food".to_string(),
                "Nature".to_string(),
                "Adventure".to_string(),
            ],
            accommodation_type: AccommodationType::Hotel,
            transport_preference: TransportPreference::Flight,
        },
        loyalty_points: 1250,
    }
}
