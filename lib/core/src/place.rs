use serde::{Deserialize, Serialize};

/// Numeric dataset columns fed through the scaler, in feature order.
pub const NUMERIC_COLUMNS: [&str; 2] = ["Price", "Rating"];

/// One tourism place, as loaded from the dataset CSV.
///
/// Serde renames keep the original dataset column names on the wire, so API
/// responses carry the same record shape as the source table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(rename = "Place_Id")]
    pub id: u64,
    #[serde(rename = "Place_Name")]
    pub name: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Price")]
    pub price: f32,
    #[serde(rename = "Rating")]
    pub rating: f32,
}

impl Place {
    /// The concatenated text field the vectorizer runs over. Computed from
    /// the textual columns in a fixed order; never stored.
    #[must_use]
    pub fn content_string(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name, self.description, self.category, self.city
        )
    }

    /// Raw numeric features in [`NUMERIC_COLUMNS`] order.
    #[inline]
    #[must_use]
    pub fn numeric_features(&self) -> [f32; 2] {
        [self.price, self.rating]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_place() -> Place {
        Place {
            id: 1,
            name: "Candi Borobudur".to_string(),
            description: "Candi Buddha terbesar di dunia".to_string(),
            category: "Budaya".to_string(),
            city: "Magelang".to_string(),
            price: 50000.0,
            rating: 4.5,
        }
    }

    #[test]
    fn test_content_string_order() {
        let place = sample_place();
        assert_eq!(
            place.content_string(),
            "Candi Borobudur Candi Buddha terbesar di dunia Budaya Magelang"
        );
    }

    #[test]
    fn test_numeric_features() {
        let place = sample_place();
        assert_eq!(place.numeric_features(), [50000.0, 4.5]);
    }

    #[test]
    fn test_serializes_with_dataset_column_names() {
        let json = serde_json::to_value(sample_place()).unwrap();
        assert_eq!(json["Place_Name"], "Candi Borobudur");
        assert_eq!(json["Rating"], 4.5);
        assert!(json.get("name").is_none());
    }
}
