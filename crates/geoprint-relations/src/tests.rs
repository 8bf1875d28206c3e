//! Unit tests for geoprint-relations.

#[cfg(test)]
mod compass {
    use std::f64::consts::PI;

    use crate::Compass;

    #[test]
    fn clockwise_quarter_steps() {
        for (i, dir) in Compass::ALL.iter().enumerate() {
            assert!((dir.radians() - i as f64 * PI / 4.0).abs() < 1e-15, "{dir}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(Compass::NE.to_string(), "NE");
        assert_eq!(Compass::W.as_str(), "W");
    }
}

#[cfg(test)]
mod neighbors {
    use geoprint_core::{encode, AngleUnit, Geoprint};

    use crate::{neighbor_prints, neighbors, Compass};

    /// Precision-10 cell around (7.0625, -95.677068).
    const CELL: &str = "watttatctt";

    #[test]
    fn mid_latitude_ring() {
        let got = neighbors(CELL).unwrap();
        let expected = [
            (Compass::N,  "watttatctc"),
            (Compass::NE, "watttcgaga"),
            (Compass::E,  "watttcgagg"),
            (Compass::SE, "watttcggaa"),
            (Compass::S,  "watttattcc"),
            (Compass::SW, "watttattca"),
            (Compass::W,  "watttatctg"),
            (Compass::NW, "watttatcta"),
        ];
        assert_eq!(got.len(), 8);
        for (dir, cell) in expected {
            let cell: Geoprint = cell.parse().unwrap();
            assert!(got.contains(&(dir, cell.clone())), "missing {dir} {cell}");
        }
    }

    #[test]
    fn same_precision_and_excludes_self() {
        let cell = encode(-33.86, 151.21, 14, AngleUnit::Degrees).unwrap();
        let ring = neighbor_prints(cell.as_str()).unwrap();
        assert_eq!(ring.len(), 8);
        for n in &ring {
            assert_eq!(n.precision(), 14);
            assert_ne!(*n, cell);
        }
    }

    #[test]
    fn bearings_drawn_from_compass() {
        for (dir, _) in neighbors("ecatgcat").unwrap() {
            assert!(Compass::ALL.contains(&dir));
        }
    }

    #[test]
    fn coarse_cells_collapse() {
        let tagged = neighbors("wg").unwrap();
        let plain = neighbor_prints("wg").unwrap();
        assert!(tagged.len() <= 8);
        assert!(plain.len() < tagged.len(), "bearings should share cells at hemisphere scale");
        for (_, cell) in &tagged {
            assert!(plain.contains(cell));
            assert_eq!(cell.precision(), 2);
        }
    }

    #[test]
    fn crosses_antimeridian() {
        // Last cell before 180°; the east neighbor lives in the western hemisphere.
        let cell = encode(0.5, 180.0, 16, AngleUnit::Degrees).unwrap();
        assert_eq!(cell, "ectttttttctcctcc");
        let east = neighbors(cell.as_str())
            .unwrap()
            .into_iter()
            .find(|(dir, _)| *dir == Compass::E)
            .map(|(_, c)| c)
            .unwrap();
        assert_eq!(east, "wagggggggagaagaa");
    }

    #[test]
    fn invalid_input() {
        assert!(neighbors("").unwrap_err().is_format());
        assert!(neighbor_prints("ex").unwrap_err().is_format());
    }
}

#[cfg(test)]
mod adjacent {
    use geoprint_core::{encode, AngleUnit, DomainError, GeoprintError};

    use crate::{adjacent, neighbor_prints};

    const CELL: &str = "watttatctt";

    #[test]
    fn same_cell() {
        assert!(adjacent(CELL, CELL).unwrap());
    }

    #[test]
    fn finer_cell_near_center() {
        let (lat, lon) = geoprint_core::decode(CELL, AngleUnit::Degrees).unwrap();
        let fine = encode(lat, lon, 22, AngleUnit::Degrees).unwrap();
        assert!(adjacent(CELL, fine.as_str()).unwrap());
        assert!(adjacent(fine.as_str(), CELL).unwrap());
    }

    #[test]
    fn far_apart() {
        let other = encode(-40.0, 120.0, 10, AngleUnit::Degrees).unwrap();
        assert!(!adjacent(CELL, other.as_str()).unwrap());
    }

    #[test]
    fn grid_neighbors_exceed_center_budget() {
        // Neighbor centers are a full cell apart, beyond the half-error
        // diagonal, so the heuristic reports them as not adjacent.
        for n in neighbor_prints(CELL).unwrap() {
            assert!(!adjacent(CELL, n.as_str()).unwrap(), "{n}");
        }
    }

    #[test]
    fn short_input_rejected() {
        for (a, b) in [("wg", CELL), (CELL, "e"), ("wa", "ec"), ("", CELL)] {
            let err = adjacent(a, b).unwrap_err();
            assert!(err.is_domain(), "{a:?}/{b:?}");
        }
        assert_eq!(
            adjacent("wg", CELL).unwrap_err(),
            GeoprintError::Domain(DomainError::Adjacency { len: 2 })
        );
    }

    #[test]
    fn length_checked_before_content() {
        assert!(adjacent("xx", "zzzz").unwrap_err().is_domain());
        assert!(adjacent("xxx", "zzzz").unwrap_err().is_format());
    }
}
