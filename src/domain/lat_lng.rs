use std::fmt;

#[derive(Copy, Clone, Default, PartialEq, Debug)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        LatLng { lat, lng }
    }

    /// Linear interpolation in coordinate space, `ratio` is clamped to `[0, 1]`.
    pub fn lerp(&self, other: &LatLng, ratio: f64) -> LatLng {
        let ratio = ratio.clamp(0.0, 1.0);
        if ratio == 1.0 {
            return *other;
        }

        LatLng {
            lat: self.lat + (other.lat - self.lat) * ratio,
            lng: self.lng + (other.lng - self.lng) * ratio,
        }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6}, {:.6}", self.lat, self.lng)
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Bounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl Bounds {
    pub fn around(coords: &[LatLng]) -> Option<Bounds> {
        let (first, rest) = coords.split_first()?;

        let bounds = rest.iter().fold(
            Bounds {
                south_west: *first,
                north_east: *first,
            },
            |bounds, coord| Bounds {
                south_west: LatLng::new(bounds.south_west.lat.min(coord.lat), bounds.south_west.lng.min(coord.lng)),
                north_east: LatLng::new(bounds.north_east.lat.max(coord.lat), bounds.north_east.lng.max(coord.lng)),
            },
        );
        Some(bounds)
    }

    pub fn center(&self) -> LatLng {
        self.south_west.lerp(&self.north_east, 0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const A: LatLng = LatLng { lat: 51.92, lng: 4.47 };
    const B: LatLng = LatLng { lat: 51.93, lng: 4.49 };

    #[rstest]
    #[case(0.0, A)]
    #[case(1.0, B)]
    #[case(-0.5, A)]
    #[case(1.5, B)]
    fn lerp_returns_the_endpoints_at_the_boundaries(#[case] ratio: f64, #[case] expected: LatLng) {
        assert_eq!(A.lerp(&B, ratio), expected);
    }

    #[rstest]
    #[case(0.1)]
    #[case(0.25)]
    #[case(0.5)]
    #[case(0.9)]
    fn lerp_stays_on_the_segment(#[case] ratio: f64) {
        let point = A.lerp(&B, ratio);

        // Collinear with A and B, and between them
        let cross = (point.lat - A.lat) * (B.lng - A.lng) - (point.lng - A.lng) * (B.lat - A.lat);
        assert!(cross.abs() < 1e-12, "expected {:?} to be on the segment", point);
        assert!(point.lat >= A.lat && point.lat <= B.lat);
        assert!(point.lng >= A.lng && point.lng <= B.lng);
    }

    #[test]
    fn lerp_halfway() {
        let point = LatLng::new(0.0, 0.0).lerp(&LatLng::new(1.0, -2.0), 0.5);
        assert_eq!(point, LatLng::new(0.5, -1.0));
    }

    #[test]
    fn bounds_around_no_coords_is_none() {
        assert_eq!(Bounds::around(&[]), None);
    }

    #[test]
    fn bounds_around_returns_the_extremes() {
        let coords = [LatLng::new(1.0, 5.0), LatLng::new(-2.0, 7.0), LatLng::new(0.5, 4.0)];

        let bounds = Bounds::around(&coords).unwrap();

        assert_eq!(bounds.south_west, LatLng::new(-2.0, 4.0));
        assert_eq!(bounds.north_east, LatLng::new(1.0, 7.0));
        assert_eq!(bounds.center(), LatLng::new(-0.5, 5.5));
    }

    #[test]
    fn display_uses_six_decimals() {
        assert_eq!(LatLng::new(51.9225, 4.47917).to_string(), "51.922500, 4.479170");
    }
}
