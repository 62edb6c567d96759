//! Unit tests for bx-core primitives.

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            let a: f64 = r1.random();
            let b: f64 = r2.random();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut r0 = SimRng::new(1);
        let mut r1 = SimRng::new(2);
        let a: u64 = r0.random();
        let b: u64 = r1.random();
        assert_ne!(a, b);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            assert!(!rng.gen_bool(0.0));
            assert!(rng.gen_bool(1.0));
        }
        // Out-of-range probabilities are clamped, not rejected.
        assert!(rng.gen_bool(1.2));
    }

    #[test]
    fn exp1_is_non_negative() {
        let mut rng = SimRng::new(7);
        for _ in 0..1000 {
            assert!(rng.exp1() >= 0.0);
        }
    }

    #[test]
    fn distinct_indices_are_distinct_and_clamped() {
        let mut rng = SimRng::new(3);
        let mut idx = rng.distinct_indices(10, 50);
        assert_eq!(idx.len(), 10);
        idx.sort_unstable();
        assert_eq!(idx, (0..10).collect::<Vec<_>>());

        let few = rng.distinct_indices(1000, 5);
        assert_eq!(few.len(), 5);
        assert!(few.iter().all(|&i| i < 1000));
    }
}

#[cfg(test)]
mod dist {
    use crate::{CoreError, Discrete, SimRng};

    #[test]
    fn normalises_weights() {
        let d = Discrete::new([("a", 2.0), ("b", 6.0)]).unwrap();
        assert!((d.probability(0) - 0.25).abs() < 1e-12);
        assert!((d.probability(1) - 0.75).abs() < 1e-12);
    }

    #[test]
    fn zero_weight_never_drawn() {
        let d = Discrete::new([("never", 0.0), ("always", 1.0), ("also_never", 0.0)]).unwrap();
        let mut rng = SimRng::new(9);
        for _ in 0..10_000 {
            assert_eq!(d.draw(&mut rng), "always");
        }
    }

    #[test]
    fn rejects_bad_tables() {
        let empty: Vec<(u8, f64)> = vec![];
        assert!(matches!(Discrete::new(empty), Err(CoreError::Weights(_))));
        assert!(matches!(Discrete::new([(1u8, -0.5)]), Err(CoreError::Weights(_))));
        assert!(matches!(Discrete::new([(1u8, f64::NAN)]), Err(CoreError::Weights(_))));
        assert!(matches!(Discrete::new([(1u8, 0.0), (2, 0.0)]), Err(CoreError::Weights(_))));
    }

    #[test]
    fn frequencies_track_weights() {
        let d = Discrete::new([(0usize, 0.7), (1, 0.2), (2, 0.1)]).unwrap();
        let mut rng = SimRng::new(42);
        let mut counts = [0usize; 3];
        for _ in 0..100_000 {
            counts[d.draw(&mut rng)] += 1;
        }
        assert!((counts[0] as f64 / 100_000.0 - 0.7).abs() < 0.01, "{counts:?}");
        assert!((counts[1] as f64 / 100_000.0 - 0.2).abs() < 0.01, "{counts:?}");
        assert!((counts[2] as f64 / 100_000.0 - 0.1).abs() < 0.01, "{counts:?}");
    }
}

#[cfg(test)]
mod tables {
    use crate::country::{ALL_CROSSINGS, CROSSINGS, NEAR, corridor, to_iso1};
    use crate::vehicle::{PLATE_LETTERS, VEHICLE_TYPE_WEIGHTS};
    use crate::{Colour, VehicleType};

    #[test]
    fn vehicle_weights_sum_to_one() {
        let total: f64 = VEHICLE_TYPE_WEIGHTS.iter().map(|(_, w)| w).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn brand_tables_non_empty() {
        for (vt, _) in VEHICLE_TYPE_WEIGHTS {
            assert!(!vt.brands().is_empty(), "{vt} has no brands");
        }
        assert_eq!(VehicleType::Other.brands(), &["Generic"]);
    }

    #[test]
    fn labels() {
        assert_eq!(VehicleType::PassengerCar.to_string(), "passenger_car");
        assert_eq!(VehicleType::DeliveryVan.as_str(), "delivery_van");
        assert_eq!(Colour::Grey.to_string(), "grey");
        assert_eq!(Colour::ALL.len(), 9);
    }

    #[test]
    fn plate_letters_exclude_ambiguous() {
        assert_eq!(PLATE_LETTERS.len(), 24);
        assert!(!PLATE_LETTERS.contains(&'I'));
        assert!(!PLATE_LETTERS.contains(&'O'));
    }

    #[test]
    fn corridors_match_crossing_table() {
        for cc in NEAR {
            let expected: Vec<&str> = CROSSINGS
                .iter()
                .filter(|(_, c)| *c == cc)
                .map(|(loc, _)| *loc)
                .collect();
            assert_eq!(corridor(cc).unwrap(), expected.as_slice(), "corridor {cc}");
        }
        assert!(corridor("ES").is_none());
        let all: Vec<&str> = CROSSINGS.iter().map(|(loc, _)| *loc).collect();
        assert_eq!(all, ALL_CROSSINGS);
    }

    #[test]
    fn iso1_mapping() {
        assert_eq!(to_iso1("DE"), "D");
        assert_eq!(to_iso1("GB"), "G");
        assert_eq!(to_iso1("UA"), "U");
        assert_eq!(to_iso1("D"), "D");
        assert_eq!(to_iso1(""), "");
        // Unmapped codes fall back to the first character.
        assert_eq!(to_iso1("XK"), "X");
    }
}

#[cfg(test)]
mod time {
    use chrono::{NaiveDate, TimeZone, Utc};

    use crate::time::{at_offset, day_start, is_weekday, nth_day, second_of_day, LAST_SECOND};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn day_start_is_midnight_utc() {
        let start = day_start(date(2025, 1, 6));
        assert_eq!(start, Utc.with_ymd_and_hms(2025, 1, 6, 0, 0, 0).unwrap());
        assert_eq!(second_of_day(at_offset(start, LAST_SECOND)), 86_399);
        assert_eq!(at_offset(start, 3_600), Utc.with_ymd_and_hms(2025, 1, 6, 1, 0, 0).unwrap());
    }

    #[test]
    fn weekday_detection() {
        assert!(is_weekday(date(2025, 1, 6)));  // Monday
        assert!(is_weekday(date(2025, 1, 10))); // Friday
        assert!(!is_weekday(date(2025, 1, 4))); // Saturday
        assert!(!is_weekday(date(2025, 1, 5))); // Sunday
    }

    #[test]
    fn nth_day_crosses_month() {
        assert_eq!(nth_day(date(2025, 1, 31), 1), Some(date(2025, 2, 1)));
        assert_eq!(nth_day(date(2025, 1, 1), 0), Some(date(2025, 1, 1)));
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, SimConfig};

    #[test]
    fn defaults_are_valid() {
        let cfg = SimConfig::default();
        cfg.validate().unwrap();
        assert_eq!(cfg.total_days(), 365);
    }

    #[test]
    fn large_misplace_offset_accepted() {
        let cfg = SimConfig { misplace_max_offset: i64::MAX as usize, ..SimConfig::default() };
        cfg.validate().unwrap();
    }

    #[test]
    fn days_override_years() {
        let cfg = SimConfig { years: 3, days: Some(10), ..SimConfig::default() };
        assert_eq!(cfg.total_days(), 10);
    }

    #[test]
    fn rejects_invalid() {
        let bad = [
            SimConfig { days: Some(0), ..SimConfig::default() },
            SimConfig { years: 0, ..SimConfig::default() },
            SimConfig { missing_prob: 1.5, ..SimConfig::default() },
            SimConfig { day_jitter: -0.1, ..SimConfig::default() },
            SimConfig { day_jitter: 1.0, ..SimConfig::default() },
            SimConfig { chunk_rows: 0, ..SimConfig::default() },
            SimConfig { misplace_max_offset: usize::MAX, ..SimConfig::default() },
        ];
        for cfg in bad {
            assert!(matches!(cfg.validate(), Err(CoreError::Config(_))), "{cfg:?}");
        }
    }
}
