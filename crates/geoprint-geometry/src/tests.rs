//! Unit tests for geoprint-geometry.
//!
//! Expected figures were computed once with the same formulas at full
//! precision and pinned here.

#[cfg(test)]
mod sphere {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    use crate::sphere::{destination, haversine, initial_bearing, EARTH_RADIUS_M};

    #[test]
    fn zero_distance() {
        let p = (0.5, -1.2);
        assert_eq!(haversine(p, p), 0.0);
    }

    #[test]
    fn one_degree_of_latitude() {
        let d = haversine((0.0, 0.0), (1f64.to_radians(), 0.0)) * EARTH_RADIUS_M;
        assert!((d - 111_319.5).abs() < 1.0, "got {d}");
    }

    #[test]
    fn pole_to_pole() {
        let d = haversine((FRAC_PI_2, 0.0), (-FRAC_PI_2, 0.0));
        assert!((d - PI).abs() < 1e-12);
    }

    #[test]
    fn bearings_cardinal() {
        let o = (0.0, 0.0);
        assert!(initial_bearing(o, (0.01, 0.0)).abs() < 1e-12);
        assert!((initial_bearing(o, (0.0, 0.01)) - FRAC_PI_2).abs() < 1e-12);
        assert!((initial_bearing(o, (0.0, -0.01)) + FRAC_PI_2).abs() < 1e-12);
        assert!((initial_bearing(o, (-0.01, 0.0)) - PI).abs() < 1e-12);
    }

    #[test]
    fn destination_round_trip() {
        let o = (0.3, -1.1);
        for k in 0..8 {
            let theta = k as f64 * FRAC_PI_4;
            let p = destination(o, theta, 0.01);
            assert!((haversine(o, p) - 0.01).abs() < 1e-12);
        }
    }

    #[test]
    fn destination_wraps_longitude() {
        let (_, lon) = destination((0.0, PI - 0.001), FRAC_PI_2, 0.01);
        assert!((-PI..PI).contains(&lon));
        assert!(lon < 0.0, "crossing the antimeridian eastwards lands west, got {lon}");
    }
}

#[cfg(test)]
mod measure {
    use geoprint_core::{encode, AngleUnit, DistanceUnit};

    use crate::{bearing, distance, EARTH_RADIUS_M};

    fn gp(lat: f64, lon: f64) -> String {
        encode(lat, lon, 22, AngleUnit::Degrees).unwrap().into_string()
    }

    #[test]
    fn distance_equator_one_degree() {
        let d = distance(&gp(0.0, 0.0), &gp(0.0, 1.0), DistanceUnit::Meters).unwrap();
        assert!((d - 111_310.776_715).abs() < 0.01, "got {d}");
    }

    #[test]
    fn distance_london_paris() {
        let d = distance(&gp(51.5, -0.12), &gp(48.85, 2.35), DistanceUnit::Meters).unwrap();
        assert!((d - 343_513.736_236).abs() < 0.01, "got {d}");
    }

    #[test]
    fn distance_radians_scale() {
        let (a, b) = (gp(10.0, 10.0), gp(-20.0, 40.0));
        let rad = distance(&a, &b, DistanceUnit::Radians).unwrap();
        let m = distance(&a, &b, DistanceUnit::Meters).unwrap();
        assert!((rad * EARTH_RADIUS_M - m).abs() < 1e-6);
        assert_eq!(distance(&a, &a, DistanceUnit::Radians).unwrap(), 0.0);
    }

    #[test]
    fn bearing_not_normalized() {
        let origin = gp(0.0, 0.0);
        let north = bearing(&origin, &gp(1.0, 0.0), AngleUnit::Degrees).unwrap();
        let east = bearing(&origin, &gp(0.0, 1.0), AngleUnit::Degrees).unwrap();
        let west = bearing(&origin, &gp(0.0, -1.0), AngleUnit::Degrees).unwrap();
        assert!(north.abs() < 1e-9);
        assert!((east - 90.0).abs() < 1e-5, "got {east}");
        // West stays negative rather than becoming 270.
        assert!((west + 90.0).abs() < 1e-5, "got {west}");
    }

    #[test]
    fn bearing_between_hemisphere_cells() {
        assert_eq!(bearing("wg", "wa", AngleUnit::Degrees).unwrap(), 0.0);
        assert_eq!(bearing("wa", "wg", AngleUnit::Degrees).unwrap(), 180.0);
        let r = bearing("wa", "wg", AngleUnit::Radians).unwrap();
        assert_eq!(r, std::f64::consts::PI);
    }

    #[test]
    fn invalid_input_propagates() {
        assert!(distance("wg", "xg", DistanceUnit::Meters).unwrap_err().is_format());
        assert!(bearing("", "wg", AngleUnit::Degrees).unwrap_err().is_format());
    }
}

#[cfg(test)]
mod format {
    use geoprint_core::{DomainError, GeoprintError};

    use crate::format::{decimal_places, format_fixed};
    use crate::format;

    #[test]
    fn coarse_cells_have_no_decimals() {
        assert_eq!(format("w").unwrap(), ("0".to_owned(), "-90".to_owned()));
        assert_eq!(format("e").unwrap(), ("0".to_owned(), "90".to_owned()));
        assert_eq!(format("wg").unwrap(), ("-45".to_owned(), "-135".to_owned()));
    }

    #[test]
    fn bare_trailing_point_is_kept() {
        let g = format!("w{}", "g".repeat(12));
        assert_eq!(format(&g).unwrap(), ("-90.".to_owned(), "-180.".to_owned()));
    }

    #[test]
    fn places_follow_precision() {
        let cases = [
            ("watttatctt", "7", "-96"),
            ("watttatcttttg", "7.1", "-95.7"),
            ("watttatcttttgcta", "7.06", "-95.68"),
            ("watttatcttttgctacgaagt", "7.063", "-95.677"),
        ];
        for (g, lat, lon) in cases {
            assert_eq!(format(g).unwrap(), (lat.to_owned(), lon.to_owned()), "{g}");
        }
    }

    #[test]
    fn decimal_places_from_error() {
        assert_eq!(decimal_places(90.0), Some(0));
        assert_eq!(decimal_places(0.17578125), Some(0));
        assert_eq!(decimal_places(90.0 / 4096.0), Some(1));
        assert_eq!(decimal_places(90.0 / 32768.0), Some(2));
        assert_eq!(decimal_places(0.0), None);
        assert_eq!(decimal_places(-1.0), None);
        assert_eq!(decimal_places(f64::INFINITY), None);
    }

    #[test]
    fn very_long_geoprint_still_formats() {
        let g = format!("w{}", "g".repeat(999));
        let (lat, lon) = format(&g).unwrap();
        assert!(lat.starts_with("-90."), "{lat}");
        assert!(lon.starts_with("-180."), "{lon}");
    }

    #[test]
    fn underflowing_error_rejected() {
        let g = format!("w{}", "g".repeat(1100));
        assert_eq!(
            format(&g).unwrap_err(),
            GeoprintError::Domain(DomainError::Unresolvable { len: 1101 })
        );
    }

    #[test]
    fn fixed_formatting() {
        assert_eq!(format_fixed(7.5, 1), "7.5");
        assert_eq!(format_fixed(7.5, 2), "7.5");
        assert_eq!(format_fixed(-95.0, 1), "-95.");
        assert_eq!(format_fixed(7.0, 0), "7");
        assert_eq!(format_fixed(100.0, 0), "100");
    }

    #[test]
    fn invalid_input() {
        assert!(format("wgq").unwrap_err().is_format());
    }
}
