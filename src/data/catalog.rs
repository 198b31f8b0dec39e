use crate::models::destination::Destination;

/// The static destination catalog. Seeded once at startup and shared
/// read-only across handlers; nothing mutates it after process start.
pub struct Catalog {
    destinations: Vec<Destination>,
}

impl Catalog {
    pub fn seed() -> Self {
        let destinations = vec![
            Destination {
                id: "1".to_string(),
                name: "Bali".to_string(),
                country: "Indonesia".to_string(),
                description: "Tropical paradise with beautiful beaches, temples, and rice terraces."
                    .to_string(),
                image_url: "https://images.unsplash.com/photo-1537953773345-d172ccf13cf1?w=400"
                    .to_string(),
                average_cost: 800.0,
                rating: 4.8,
                tags: vec![
                    "Beach".to_string(),
                    "Culture".to_string(),
                    "Nature".to_string(),
                    "Relaxation".to_string(),
                ],
                visa_required: false,
                best_time_to_visit: "April - October".to_string(),
            },
            Destination {
                id: "2".to_string(),
                name: "Tokyo".to_string(),
                country: "Japan".to_string(),
                description:
                    "Modern metropolis blending traditional culture with cutting-edge technology."
                        .to_string(),
                image_url: "https://images.unsplash.com/photo-1540959733332-eab4deabeeaf?w=400"
                    .to_string(),
                average_cost: 1500.0,
                rating: 4.9,
                tags: vec![
                    "City".to_string(),
                    "Culture".to_string(),
                    "Food".to_string(),
                    "Technology".to_string(),
                ],
                visa_required: true,
                best_time_to_visit: "March - May, September - November".to_string(),
            },
            Destination {
                id: "3".to_string(),
                name: "Santorini".to_string(),
                country: "Greece".to_string(),
                description:
                    "Stunning Greek island with white-washed buildings and breathtaking sunsets."
                        .to_string(),
                image_url: "https://images.unsplash.com/photo-1570077188670-e3a8d69ac5ff?w=400"
                    .to_string(),
                average_cost: 1200.0,
                rating: 4.7,
                tags: vec![
                    "Beach".to_string(),
                    "Romance".to_string(),
                    "History".to_string(),
                    "Relaxation".to_string(),
                ],
                visa_required: false,
                best_time_to_visit: "April - October".to_string(),
            },
            Destination {
                id: "4".to_string(),
                name: "Machu Picchu".to_string(),
                country: "Peru".to_string(),
                description: "Ancient Incan citadel set high in the Andes Mountains.".to_string(),
                image_url: "https://images.unsplash.com/photo-1587595431973-160d0d94add1?w=400"
                    .to_string(),
                average_cost: 900.0,
                rating: 4.9,
                tags: vec![
                    "Adventure".to_string(),
                    "History".to_string(),
                    "Nature".to_string(),
                    "Culture".to_string(),
                ],
                visa_required: false,
                best_time_to_visit: "May - September".to_string(),
            },
            Destination {
                id: "5".to_string(),
                name: "Dubai".to_string(),
                country: "UAE".to_string(),
                description:
                    "Luxury destination with modern architecture, shopping, and desert adventures."
                        .to_string(),
                image_url: "https://images.unsplash.com/photo-1512453979798-5ea266f8880c?w=400"
                    .to_string(),
                average_cost: 2000.0,
                rating: 4.6,
                tags: vec![
                    "Luxury".to_string(),
                    "Shopping".to_string(),
                    "City".to_string(),
                    "Adventure".to_string(),
                ],
                visa_required: true,
                best_time_to_visit: "November - March".to_string(),
            },
            Destination {
                id: "6".to_string(),
                name: "Iceland".to_string(),
                country: "Iceland".to_string(),
                description: "Land of fire and ice with glaciers, geysers, and northern lights."
                    .to_string(),
                image_url: "https://images.unsplash.com/photo-1539066834-3fa5463eeaaa?w=400"
                    .to_string(),
                average_cost: 1800.0,
                rating: 4.8,
                tags: vec![
                    "Nature".to_string(),
                    "Adventure".to_string(),
                    "Photography".to_string(),
                    "Wildlife".to_string(),
                ],
                visa_required: false,
                best_time_to_visit: "June - August, September - March (Northern Lights)"
                    .to_string(),
            },
        ];

        Self { destinations }
    }

    pub fn destinations(&self) -> &[Destination] {
        &self.destinations
    }

    pub fn find(&self, id: &str) -> Option<&Destination> {
        self.destinations.iter().find(|d| d.id == id)
    }
}
