//! Property tests for date parsing.

use chrono::NaiveDate;
use litlake_core::parse_date_dayfirst;
use proptest::prelude::*;

proptest! {
    #[test]
    fn iso_rendering_reparses_to_the_same_date(
        year in 1900i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
        let rendered = date.format("%Y-%m-%d").to_string();
        prop_assert_eq!(parse_date_dayfirst(&rendered), Some(date));
    }

    #[test]
    fn day_first_rendering_reparses_to_the_same_date(
        year in 1900i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
        let rendered = date.format("%d/%m/%Y").to_string();
        prop_assert_eq!(parse_date_dayfirst(&rendered), Some(date));
    }
}
