//! Positions and bounding boxes in WGS84 degrees.
//!
//! Both types convert into `geo` primitives using the `x = longitude`,
//! `y = latitude` convention so downstream spatial code can consume them
//! directly.

use geo::{Coord, Rect};

/// A latitude/longitude pair.
///
/// # Examples
///
/// ```
/// use geo::Coord;
/// use osmxml_core::LatLon;
///
/// let position = LatLon::new(51.7463194, 0.2428181);
/// let coord: Coord = position.into();
/// assert_eq!(coord.x, 0.2428181);
/// assert_eq!(coord.y, 51.7463194);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LatLon {
    /// Latitude in degrees.
    pub latitude: f64,
    /// Longitude in degrees.
    pub longitude: f64,
}

impl LatLon {
    /// Construct a position from latitude and longitude.
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<LatLon> for Coord<f64> {
    fn from(value: LatLon) -> Self {
        Self {
            x: value.longitude,
            y: value.latitude,
        }
    }
}

impl From<Coord<f64>> for LatLon {
    fn from(value: Coord<f64>) -> Self {
        Self::new(value.y, value.x)
    }
}

/// The area covered by a map data response.
///
/// The decoder trusts its source, so `min <= max` is not enforced here.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    min_latitude: f64,
    min_longitude: f64,
    max_latitude: f64,
    max_longitude: f64,
}

impl BoundingBox {
    /// Construct a bounding box from its four edges.
    #[must_use]
    pub const fn new(
        min_latitude: f64,
        min_longitude: f64,
        max_latitude: f64,
        max_longitude: f64,
    ) -> Self {
        Self {
            min_latitude,
            min_longitude,
            max_latitude,
            max_longitude,
        }
    }

    /// Southern edge.
    #[must_use]
    pub const fn min_latitude(&self) -> f64 {
        self.min_latitude
    }

    /// Western edge.
    #[must_use]
    pub const fn min_longitude(&self) -> f64 {
        self.min_longitude
    }

    /// Northern edge.
    #[must_use]
    pub const fn max_latitude(&self) -> f64 {
        self.max_latitude
    }

    /// Eastern edge.
    #[must_use]
    pub const fn max_longitude(&self) -> f64 {
        self.max_longitude
    }

    /// South-west corner.
    #[must_use]
    pub const fn min(&self) -> LatLon {
        LatLon::new(self.min_latitude, self.min_longitude)
    }

    /// North-east corner.
    #[must_use]
    pub const fn max(&self) -> LatLon {
        LatLon::new(self.max_latitude, self.max_longitude)
    }

    /// Report whether `position` lies inside the box, edges included.
    ///
    /// # Examples
    ///
    /// ```
    /// use osmxml_core::{BoundingBox, LatLon};
    ///
    /// let bounds = BoundingBox::new(51.74, 0.24, 51.75, 0.25);
    /// assert!(bounds.contains(LatLon::new(51.7463194, 0.2428181)));
    /// assert!(!bounds.contains(LatLon::new(52.0, 0.2428181)));
    /// ```
    #[must_use]
    pub fn contains(&self, position: LatLon) -> bool {
        (self.min_latitude..=self.max_latitude).contains(&position.latitude)
            && (self.min_longitude..=self.max_longitude).contains(&position.longitude)
    }

    /// Convert into a `geo` rectangle (`x = longitude`, `y = latitude`).
    #[must_use]
    pub fn to_rect(&self) -> Rect<f64> {
        Rect::new(Coord::from(self.min()), Coord::from(self.max()))
    }
}
