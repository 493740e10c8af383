//! Place model: a validated name plus coordinates

use serde::Serialize;
use thiserror::Error;

/// Reasons a set of coordinates cannot become a [`Place`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateError {
    #[error("place name is blank")]
    BlankName,

    #[error("latitude or longitude is missing")]
    Missing,

    #[error("coordinates are not finite numbers ({latitude}, {longitude})")]
    NonFinite { latitude: f64, longitude: f64 },

    #[error("coordinates out of range ({latitude}, {longitude})")]
    OutOfRange { latitude: f64, longitude: f64 },
}

/// Geographic identity of a location. Immutable once constructed.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Place {
    name: String,
    latitude: f64,
    longitude: f64,
}

impl Place {
    /// Create a place, checking that the name is non-blank and the coordinates
    /// are finite and within [-90, 90] / [-180, 180].
    pub fn new(
        name: impl Into<String>,
        latitude: f64,
        longitude: f64,
    ) -> Result<Self, CoordinateError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(CoordinateError::BlankName);
        }
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NonFinite {
                latitude,
                longitude,
            });
        }
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::OutOfRange {
                latitude,
                longitude,
            });
        }
        Ok(Self {
            name,
            latitude,
            longitude,
        })
    }

    /// Create a place from coordinates that may be absent
    pub fn from_optional(
        name: impl Into<String>,
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Self, CoordinateError> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) => Self::new(name, lat, lon),
            _ => Err(CoordinateError::Missing),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Format place as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_place_new_trims_name() {
        let place = Place::new("  Seoul ", 37.5665, 126.978).unwrap();
        assert_eq!(place.name(), "Seoul");
        assert_eq!(place.format_coordinates(), "37.5665, 126.9780");
    }

    #[rstest]
    #[case(90.0, 180.0)]
    #[case(-90.0, -180.0)]
    #[case(0.0, 0.0)]
    fn test_place_accepts_range_edges(#[case] lat: f64, #[case] lon: f64) {
        assert!(Place::new("Edge", lat, lon).is_ok());
    }

    #[rstest]
    #[case(91.0, 0.0)]
    #[case(-90.5, 0.0)]
    #[case(0.0, 180.1)]
    #[case(0.0, -181.0)]
    fn test_place_rejects_out_of_range(#[case] lat: f64, #[case] lon: f64) {
        assert!(matches!(
            Place::new("Nowhere", lat, lon),
            Err(CoordinateError::OutOfRange { .. })
        ));
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(0.0, f64::INFINITY)]
    #[case(f64::NEG_INFINITY, 1.0)]
    fn test_place_rejects_non_finite(#[case] lat: f64, #[case] lon: f64) {
        assert!(matches!(
            Place::new("Nowhere", lat, lon),
            Err(CoordinateError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_place_rejects_blank_name() {
        assert_eq!(Place::new("   ", 1.0, 1.0), Err(CoordinateError::BlankName));
    }

    #[test]
    fn test_place_from_optional_requires_both() {
        assert_eq!(
            Place::from_optional("Seoul", None, Some(126.9)),
            Err(CoordinateError::Missing)
        );
        assert_eq!(
            Place::from_optional("Seoul", Some(37.5), None),
            Err(CoordinateError::Missing)
        );
        assert!(Place::from_optional("Seoul", Some(37.5), Some(126.9)).is_ok());
    }
}
