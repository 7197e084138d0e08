//! Property tests for overtime classification and period aggregation.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use proptest::prelude::*;
use rust_decimal::Decimal;

use attendance_pay::calculation::{
    DOUBLE_OT_THRESHOLD, HourlyRate, NORMAL_OT_THRESHOLD, RateBasis, aggregate_period,
    classify_overtime, round_money,
};
use attendance_pay::models::{AttendanceInterval, HolidayKind};

fn flat_rate() -> HourlyRate {
    HourlyRate {
        regular: Decimal::from(100),
        double: Decimal::from(200),
    }
}

/// Worked hours in quarter-hour steps up to 16 hours.
fn quarter_hours(max_quarters: u32) -> impl Strategy<Value = Decimal> {
    (0..=max_quarters).prop_map(|q| Decimal::from(q) / Decimal::from(4))
}

fn base_time() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(6, 0, 0)
        .unwrap()
}

/// Intervals of 1 to 16 hours on consecutive days.
fn intervals_strategy() -> impl Strategy<Value = Vec<AttendanceInterval>> {
    prop::collection::vec((1i64..=64, any::<bool>()), 0..20).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (quarters, double))| {
                let clock_in = base_time() + Duration::days(i as i64);
                AttendanceInterval {
                    id: format!("in_out_{:03}", i + 1),
                    clock_in,
                    clock_out: clock_in + Duration::minutes(quarters * 15),
                    holiday: if double {
                        HolidayKind::Double
                    } else {
                        HolidayKind::None
                    },
                    description: None,
                }
            })
            .collect()
    })
}

proptest! {
    #[test]
    fn no_overtime_up_to_eight_hours(hours in quarter_hours(32)) {
        let result = classify_overtime(hours, HolidayKind::None, &flat_rate(), 1).unwrap();

        prop_assert_eq!(result.ot_hours, Decimal::ZERO);
        prop_assert_eq!(result.ot_amount, Decimal::ZERO);
        prop_assert!(result.reason_fragment.is_none());
    }

    #[test]
    fn regular_overtime_between_eight_and_ten(quarters in 33u32..=40) {
        let hours = Decimal::from(quarters) / Decimal::from(4);
        let result = classify_overtime(hours, HolidayKind::None, &flat_rate(), 1).unwrap();

        prop_assert_eq!(result.normal_ot_hours, hours - NORMAL_OT_THRESHOLD);
        prop_assert_eq!(result.double_ot_hours, Decimal::ZERO);
        prop_assert!(result.reason_fragment.is_none());
    }

    #[test]
    fn regular_overtime_capped_beyond_ten(quarters in 41u32..=64) {
        let hours = Decimal::from(quarters) / Decimal::from(4);
        let result = classify_overtime(hours, HolidayKind::None, &flat_rate(), 1).unwrap();

        prop_assert_eq!(result.normal_ot_hours, Decimal::TWO);
        prop_assert_eq!(result.double_ot_hours, hours - DOUBLE_OT_THRESHOLD);
        prop_assert_eq!(result.ot_hours, hours - NORMAL_OT_THRESHOLD);
        prop_assert!(result.reason_fragment.is_some());
    }

    #[test]
    fn double_holiday_pays_every_hour_double(hours in quarter_hours(64)) {
        let result = classify_overtime(hours, HolidayKind::Double, &flat_rate(), 1).unwrap();

        prop_assert_eq!(result.normal_ot_hours, Decimal::ZERO);
        prop_assert_eq!(result.double_ot_hours, hours);
        prop_assert_eq!(result.ot_amount, hours * Decimal::from(200));
    }

    #[test]
    fn aggregation_is_idempotent(intervals in intervals_strategy()) {
        let basis = RateBasis::proportional(Decimal::from(16000), None);

        let first = aggregate_period(&intervals, &basis).unwrap();
        let second = aggregate_period(&intervals, &basis).unwrap();

        prop_assert_eq!(first, second);
    }

    #[test]
    fn aggregate_is_rounded_sum_of_intervals(intervals in intervals_strategy()) {
        let basis = RateBasis::proportional(Decimal::from(16000), None);
        let result = aggregate_period(&intervals, &basis).unwrap();

        let total: Decimal = result.intervals.iter().map(|i| i.ot_amount).sum();
        prop_assert_eq!(result.aggregate.overtime_amount, round_money(total));
        prop_assert_eq!(result.intervals.len(), intervals.len());
        prop_assert_eq!(result.aggregate.overtime_reason.trim_end(), result.aggregate.overtime_reason.as_str());
    }
}
