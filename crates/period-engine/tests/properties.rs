use chrono::{DateTime, Datelike, Duration, FixedOffset, NaiveDate, TimeZone, Timelike, Utc};
use period_engine::{resolve, resolve_period, PeriodKey, ResolveOptions, WeekStartDay};
use proptest::prelude::*;

fn bounded_keys() -> Vec<PeriodKey> {
    PeriodKey::ALL.into_iter().filter(|k| k.is_bounded()).collect()
}

/// Anchors between 1970 and 2100 in a fixed offset between -12h and +14h.
fn anchor() -> impl Strategy<Value = DateTime<FixedOffset>> {
    (0i64..4_102_444_800, -48i32..=56).prop_map(|(secs, quarter_hours)| {
        let offset = FixedOffset::east_opt(quarter_hours * 900).unwrap();
        Utc.timestamp_opt(secs, 0).unwrap().with_timezone(&offset)
    })
}

fn week_start() -> impl Strategy<Value = WeekStartDay> {
    prop_oneof![Just(WeekStartDay::Monday), Just(WeekStartDay::Sunday)]
}

proptest! {
    #[test]
    fn bounded_periods_are_ordered(now in anchor(), ws in week_start()) {
        let options = ResolveOptions::with_week_start(ws);
        for key in bounded_keys() {
            let interval = resolve(key, &now, &options);
            let from = interval.from_date.unwrap();
            let to = interval.to_date.unwrap();
            prop_assert!(from <= to, "{key}: {from} > {to}");
        }
    }

    #[test]
    fn bounds_are_day_aligned(now in anchor(), ws in week_start()) {
        let options = ResolveOptions::with_week_start(ws);
        for key in bounded_keys() {
            let interval = resolve(key, &now, &options);
            let from = interval.from_date.unwrap();
            let to = interval.to_date.unwrap();
            prop_assert_eq!((from.hour(), from.minute(), from.second(), from.nanosecond()), (0, 0, 0, 0));
            prop_assert_eq!((to.hour(), to.minute(), to.second(), to.nanosecond()), (23, 59, 59, 999_000_000));
        }
    }

    #[test]
    fn resolution_is_idempotent(now in anchor(), ws in week_start()) {
        let options = ResolveOptions::with_week_start(ws);
        for key in PeriodKey::ALL {
            prop_assert_eq!(resolve(key, &now, &options), resolve(key, &now, &options));
        }
    }

    #[test]
    fn today_preserves_local_calendar_fields(now in anchor()) {
        let from = resolve_period("today", &now, &ResolveOptions::default())
            .from_date
            .unwrap();
        let local = now.naive_local();
        prop_assert_eq!((from.year(), from.month(), from.day()), (local.year(), local.month(), local.day()));
    }

    #[test]
    fn current_periods_contain_the_local_day(now in anchor(), ws in week_start()) {
        let options = ResolveOptions::with_week_start(ws);
        let today = now.naive_local().date();
        let noon = Utc.from_utc_datetime(&today.and_hms_opt(12, 0, 0).unwrap());
        for key in [
            PeriodKey::Today,
            PeriodKey::ThisWeek,
            PeriodKey::ThisMonth,
            PeriodKey::ThisQuarter,
            PeriodKey::ThisYear,
        ] {
            prop_assert!(resolve(key, &now, &options).contains(&noon), "{key}");
        }
    }

    #[test]
    fn previous_periods_end_the_day_before_current_ones(now in anchor(), ws in week_start()) {
        let options = ResolveOptions::with_week_start(ws);
        let pairs = [
            (PeriodKey::LastWeek, PeriodKey::ThisWeek),
            (PeriodKey::LastMonth, PeriodKey::ThisMonth),
            (PeriodKey::LastQuarter, PeriodKey::ThisQuarter),
            (PeriodKey::LastYear, PeriodKey::ThisYear),
        ];
        for (previous, current) in pairs {
            let prev_end = resolve(previous, &now, &options).to_date.unwrap();
            let cur_start = resolve(current, &now, &options).from_date.unwrap();
            prop_assert_eq!(cur_start - prev_end, Duration::milliseconds(1), "{}", previous);
        }
    }

    #[test]
    fn weeks_span_seven_days_from_the_configured_start(now in anchor(), ws in week_start()) {
        let options = ResolveOptions::with_week_start(ws);
        let interval = resolve(PeriodKey::ThisWeek, &now, &options);
        let first = interval.from_date.unwrap().date_naive();
        let last = interval.to_date.unwrap().date_naive();
        prop_assert_eq!(last - first, Duration::days(6));
        let expected = match ws {
            WeekStartDay::Monday => chrono::Weekday::Mon,
            WeekStartDay::Sunday => chrono::Weekday::Sun,
        };
        prop_assert_eq!(first.weekday(), expected);
    }

    #[test]
    fn unknown_keys_are_unbounded(now in anchor(), key in "[a-z]{1,12}") {
        prop_assume!(key.parse::<PeriodKey>().is_err());
        prop_assert!(resolve_period(&key, &now, &ResolveOptions::default()).is_unbounded());
    }
}

#[test]
fn last_month_in_january_is_previous_december_for_every_year() {
    for year in 1971..2100 {
        let now = Utc.with_ymd_and_hms(year, 1, 15, 12, 0, 0).unwrap();
        let interval = resolve(PeriodKey::LastMonth, &now, &ResolveOptions::default());
        assert_eq!(
            interval.from_date.unwrap().date_naive(),
            NaiveDate::from_ymd_opt(year - 1, 12, 1).unwrap()
        );
        assert_eq!(
            interval.to_date.unwrap().date_naive(),
            NaiveDate::from_ymd_opt(year - 1, 12, 31).unwrap()
        );
    }
}
