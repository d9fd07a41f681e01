//! Unit tests for dd-core primitives.

#[cfg(test)]
mod ids {
    use crate::OrderId;

    #[test]
    fn display_is_verbatim() {
        assert_eq!(OrderId::from("MW001").to_string(), "MW001");
    }

    #[test]
    fn from_string_and_str_agree() {
        assert_eq!(OrderId::from("MW7"), OrderId::from(String::from("MW7")));
        assert_eq!(OrderId::from("MW7").as_str(), "MW7");
    }
}

#[cfg(test)]
mod geo {
    use crate::{CoreError, Coordinate};

    #[test]
    fn south_west_is_negative() {
        assert_eq!(Coordinate::decode("S1W2").unwrap(), Coordinate::new(-2, -1));
    }

    #[test]
    fn north_east_is_positive() {
        assert_eq!(Coordinate::decode("N11E02").unwrap(), Coordinate::new(2, 11));
    }

    #[test]
    fn lowercase_and_axis_order_do_not_matter() {
        assert_eq!(Coordinate::decode("e2s1").unwrap(), Coordinate::new(2, -1));
    }

    #[test]
    fn missing_axis_stays_zero() {
        assert_eq!(Coordinate::decode("W15").unwrap(), Coordinate::new(-15, 0));
        assert_eq!(Coordinate::decode("N4").unwrap(), Coordinate::new(0, 4));
    }

    #[test]
    fn zero_magnitudes() {
        assert_eq!(Coordinate::decode("S0E0").unwrap(), Coordinate::ORIGIN);
    }

    #[test]
    fn rejects_malformed_codes() {
        for code in ["", "X1", "N", "NE1", "N1N2", "N1S2", "S1E2W3", "N1 E2", "N99999999999"] {
            let result = Coordinate::decode(code);
            assert!(
                matches!(result, Err(CoreError::Destination { .. })),
                "{code:?} should be rejected, got {result:?}"
            );
        }
    }

    #[test]
    fn manhattan_distance() {
        let origin = Coordinate::ORIGIN;
        assert_eq!(origin.manhattan(Coordinate::new(2, -1)), 3);
        assert_eq!(Coordinate::new(-3, 4).manhattan(Coordinate::new(1, 1)), 7);
        assert_eq!(origin.manhattan(origin), 0);
    }

    #[test]
    fn manhattan_does_not_overflow_at_extremes() {
        let a = Coordinate::new(i32::MIN, i32::MIN);
        let b = Coordinate::new(i32::MAX, i32::MAX);
        assert_eq!(a.manhattan(b), 2 * (u32::MAX as u64));
    }
}

#[cfg(test)]
mod time {
    use crate::{CoreError, SimTime};

    #[test]
    fn parse_and_display() {
        let t: SimTime = "05:05:11".parse().unwrap();
        assert_eq!(t, SimTime::from_hms(5, 5, 11));
        assert_eq!(t.to_string(), "05:05:11");
    }

    #[test]
    fn parse_accepts_single_digit_fields() {
        assert_eq!("6:0:9".parse::<SimTime>().unwrap(), SimTime::from_hms(6, 0, 9));
    }

    #[test]
    fn parse_rejects_bad_input() {
        for s in ["", "12:00", "24:00:00", "12:60:00", "12:00:60", "aa:bb:cc", "1:2:3:4", "-1:00:00"] {
            assert!(
                matches!(s.parse::<SimTime>(), Err(CoreError::Time { .. })),
                "{s:?} should be rejected"
            );
        }
    }

    #[test]
    fn fractional_minutes_round_to_millis() {
        let t = SimTime::from_hms(6, 0, 0).checked_add_minutes(1.5).unwrap();
        assert_eq!(t, SimTime::from_hms(6, 1, 30));
    }

    #[test]
    fn checked_add_rejects_negative_and_non_finite() {
        let t = SimTime::from_hms(6, 0, 0);
        assert_eq!(t.checked_add_minutes(-1.0), None);
        assert_eq!(t.checked_add_minutes(f64::NAN), None);
        assert_eq!(t.checked_add_minutes(f64::INFINITY), None);
        assert_eq!(t.checked_add_minutes(0.0), Some(t));
    }

    #[test]
    fn saturating_add_caps_at_max() {
        assert_eq!(SimTime::MAX.saturating_add_minutes(1.0), SimTime::MAX);
    }

    #[test]
    fn since_saturates_at_zero() {
        let a = SimTime::from_hms(6, 0, 0);
        let b = SimTime::from_hms(8, 30, 0);
        assert_eq!(b.since(a), 150 * 60 * 1_000);
        assert_eq!(a.since(b), 0);
    }

    #[test]
    fn display_does_not_wrap_hours() {
        assert_eq!(SimTime::from_hms(25, 1, 2).to_string(), "25:01:02");
    }
}

#[cfg(test)]
mod order {
    use crate::{CoreError, Coordinate, DeliveredOrder, Order, OrderId, Rating, SimTime};

    #[test]
    fn properties_set_on_construction() {
        let created = SimTime::from_hms(6, 0, 0);
        let order = Order::new("MW001", created, "S1W2").unwrap();
        assert_eq!(order.id(), &OrderId::from("MW001"));
        assert_eq!(order.created(), created);
        assert_eq!(order.destination_encoded(), "S1W2");
        assert_eq!(order.destination(), Coordinate::new(-2, -1));
    }

    #[test]
    fn bad_destination_fails_construction() {
        let result = Order::new("MW001", SimTime::MIDNIGHT, "Q9");
        assert!(matches!(result, Err(CoreError::Destination { .. })));
    }

    #[test]
    fn display_is_order_line() {
        let order = Order::new("MW002", SimTime::from_hms(9, 5, 11), "s1e1").unwrap();
        assert_eq!(order.to_string(), "MW002 S1E1 09:05:11");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialized_destination_is_decoded_from_code() {
        let order: Order = serde_json::from_str(
            r#"{ "id": "MW001", "created": "06:00:00", "destination": { "x": 99, "y": 99 }, "destination_encoded": "S1W2" }"#,
        )
        .unwrap();
        assert_eq!(order.destination(), Coordinate::new(-2, -1));

        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(serde_json::from_str::<Order>(&json).unwrap(), order);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializing_a_bad_code_fails() {
        let result = serde_json::from_str::<Order>(
            r#"{ "id": "MW001", "created": "06:00:00", "destination_encoded": "Q9" }"#,
        );
        assert!(result.is_err());
    }

    fn delivered(wait_secs: u64) -> DeliveredOrder {
        let placed = SimTime::from_hms(6, 0, 0);
        DeliveredOrder {
            id:             OrderId::from("x"),
            order_placed:   placed,
            departure_time: placed,
            delivered_time: SimTime(placed.0 + wait_secs * 1_000),
        }
    }

    #[test]
    fn rating_thresholds() {
        assert_eq!(delivered(0).rating(), Rating::Promoter);
        assert_eq!(delivered(2 * 3600 - 60).rating(), Rating::Promoter);
        assert_eq!(delivered(2 * 3600).rating(), Rating::Neutral);
        assert_eq!(delivered(4 * 3600 - 60).rating(), Rating::Neutral);
        assert_eq!(delivered(4 * 3600).rating(), Rating::Detractor);
        assert_eq!(delivered(10 * 3600).rating(), Rating::Detractor);
    }

    #[test]
    fn rating_rounds_to_hundredths_of_an_hour() {
        // 1 h 59 min 59 s = 1.99972 h → rounds to 2.00 h → neutral.
        assert_eq!(delivered(2 * 3600 - 1).rating(), Rating::Neutral);
        // 1 h 59 min 30 s = 1.99167 h → rounds to 1.99 h → promoter.
        assert_eq!(delivered(2 * 3600 - 30).rating(), Rating::Promoter);
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, DepotConfig, SimTime};

    #[test]
    fn default_is_six_to_ten() {
        let cfg = DepotConfig::default();
        assert_eq!(cfg.opens_at, SimTime::from_hms(6, 0, 0));
        assert_eq!(cfg.closes_at, SimTime::from_hms(22, 0, 0));
        assert_eq!(cfg.return_ratio, 0.5);
        cfg.validate().unwrap();
    }

    #[test]
    fn validate_rejects_inverted_day() {
        let cfg = DepotConfig {
            opens_at:  SimTime::from_hms(22, 0, 0),
            closes_at: SimTime::from_hms(6, 0, 0),
            ..DepotConfig::default()
        };
        assert!(matches!(cfg.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn validate_rejects_non_positive_rates() {
        for (step, ratio) in [(0.0, 0.5), (-1.0, 0.5), (f64::NAN, 0.5), (1.0, 0.0), (1.0, f64::INFINITY)] {
            let cfg = DepotConfig {
                minutes_per_step: step,
                return_ratio:     ratio,
                ..DepotConfig::default()
            };
            assert!(cfg.validate().is_err(), "step={step} ratio={ratio} should be rejected");
        }
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_json_uses_defaults() {
        let cfg: DepotConfig =
            serde_json::from_str(r#"{ "closes_at": "20:30:00", "position": { "x": 2, "y": -1 } }"#)
                .unwrap();
        assert_eq!(cfg.closes_at, SimTime::from_hms(20, 30, 0));
        assert_eq!(cfg.opens_at, SimTime::from_hms(6, 0, 0));
        assert_eq!(cfg.position.x, 2);
        assert_eq!(cfg.minutes_per_step, 1.0);
    }
}

#[cfg(test)]
mod properties {
    use proptest::prelude::*;

    use crate::{Coordinate, SimTime};

    proptest! {
        #[test]
        fn decode_matches_components(
            ns in prop::bool::ANY,
            ew in prop::bool::ANY,
            dy in 0i32..10_000,
            dx in 0i32..10_000,
        ) {
            let code = format!(
                "{}{}{}{}",
                if ns { 'N' } else { 'S' }, dy,
                if ew { 'E' } else { 'W' }, dx,
            );
            let c = Coordinate::decode(&code).unwrap();
            prop_assert_eq!(c.y, if ns { dy } else { -dy });
            prop_assert_eq!(c.x, if ew { dx } else { -dx });
        }

        #[test]
        fn display_parse_agree_on_whole_seconds(h in 0u64..24, m in 0u64..60, s in 0u64..60) {
            let t = SimTime::from_hms(h, m, s);
            prop_assert_eq!(t.to_string().parse::<SimTime>().unwrap(), t);
        }
    }
}
