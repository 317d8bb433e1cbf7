use serde::{Deserialize, Serialize};

/// The closed set of accommodation types a listing can have.
///
/// The lowercase name doubles as the serialized form, both in the bundled
/// dataset and in shareable URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingType {
    House,
    Apartment,
    Villa,
    Studio,
    Loft,
}

impl ListingType {
    pub const ALL: [ListingType; 5] = [
        ListingType::House,
        ListingType::Apartment,
        ListingType::Villa,
        ListingType::Studio,
        ListingType::Loft,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ListingType::House => "house",
            ListingType::Apartment => "apartment",
            ListingType::Villa => "villa",
            ListingType::Studio => "studio",
            ListingType::Loft => "loft",
        }
    }

    /// Display label for UI copy and suggestion chips.
    pub fn label(&self) -> &'static str {
        match self {
            ListingType::House => "House",
            ListingType::Apartment => "Apartment",
            ListingType::Villa => "Villa",
            ListingType::Studio => "Studio",
            ListingType::Loft => "Loft",
        }
    }
}

impl std::str::FromStr for ListingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "house" => Ok(ListingType::House),
            "apartment" => Ok(ListingType::Apartment),
            "villa" => Ok(ListingType::Villa),
            "studio" => Ok(ListingType::Studio),
            "loft" => Ok(ListingType::Loft),
            _ => Err(format!("Unknown listing type: {}", s)),
        }
    }
}

impl std::fmt::Display for ListingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A place to stay. Loaded once from the bundled dataset and never mutated
/// at runtime; all derived views are computed copies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    /// Unique across the whole dataset.
    pub id: String,
    pub title: String,
    pub city: String,
    pub country: String,
    #[serde(rename = "type")]
    pub kind: ListingType,
    /// Per night, in euros.
    pub price: f64,
    /// In [0, 5].
    pub rating: f64,
    pub reviews: u32,
    pub rooms: u32,
    pub lat: f64,
    pub lng: f64,
    /// Key into the static image asset lookup.
    pub cover: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// An activity or tour from the experiences catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub title: String,
    pub location: String,
    pub duration: String,
    pub group_size: String,
    pub price: f64,
    pub rating: f64,
    pub reviews: u32,
    pub image: String,
    pub category: String,
}

/// A bookable stay add-on from the services catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub duration: String,
    pub rating: f64,
    pub reviews: u32,
    pub image: String,
    pub category: String,
    pub features: Vec<String>,
    #[serde(default)]
    pub popular: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn listing_type_tokens_round_trip() {
        for kind in ListingType::ALL {
            assert_eq!(ListingType::from_str(kind.as_str()), Ok(kind));
        }
    }

    #[test]
    fn listing_type_rejects_unknown_tokens() {
        assert!(ListingType::from_str("castle").is_err());
        assert!(ListingType::from_str("House").is_err());
        assert!(ListingType::from_str("").is_err());
    }

    #[test]
    fn listing_deserializes_dataset_shape() {
        let json = r#"{
            "id": "l-1",
            "title": "Loft with a view",
            "city": "Lyon",
            "country": "France",
            "type": "loft",
            "price": 120.0,
            "rating": 4.7,
            "reviews": 85,
            "rooms": 2,
            "lat": 45.76,
            "lng": 4.83,
            "cover": "lyon-loft"
        }"#;
        let listing: Listing = serde_json::from_str(json).unwrap();
        assert_eq!(listing.kind, ListingType::Loft);
        assert_eq!(listing.description, None);
    }
}
