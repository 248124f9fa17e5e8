use crate::{Error, Place, Result};
use std::io::Read;
use std::path::Path;

/// The in-memory place table.
///
/// Loaded once at startup and read-only afterwards. Row order is load order
/// and is the alignment key for the feature and embedding matrices.
#[derive(Debug, Clone)]
pub struct PlaceCatalog {
    places: Vec<Place>,
}

impl PlaceCatalog {
    /// Wrap an already-loaded place table. Fails on an empty table.
    pub fn new(places: Vec<Place>) -> Result<Self> {
        if places.is_empty() {
            return Err(Error::Dataset("catalog must contain at least one place".to_string()));
        }
        Ok(Self { places })
    }

    /// Load the catalog from a CSV file with the original dataset headers.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::from_reader(file)
    }

    /// Load the catalog from any CSV reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut places = Vec::new();
        for record in csv_reader.deserialize() {
            let place: Place = record?;
            places.push(place);
        }
        Self::new(places)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Place> {
        self.places.get(index)
    }

    #[inline]
    #[must_use]
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Row index of the first place whose name matches case-insensitively.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<usize> {
        let needle = name.to_lowercase();
        self.places
            .iter()
            .position(|place| place.name.to_lowercase() == needle)
    }
}
