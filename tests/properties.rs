//! Property tests for range expansion, set semantics and the raw parser

use chrono::{Datelike, Days, NaiveDate};
use proptest::prelude::*;
use timeoff_calendar::domain::{
    extract_records, occupied_days, Bucket, Calendar, RawParser, RawRecord,
};

const HEADER: &str = "Date and Time\tType\tHours\tSubmitted\tApprover\tStatus";

fn mdyy(date: NaiveDate) -> String {
    format!("{}/{}/{:02}", date.month(), date.day(), date.year() % 100)
}

fn any_date() -> impl Strategy<Value = NaiveDate> {
    // 2000-01-01 plus up to ~60 years keeps two-digit years unambiguous
    (0u64..22_000).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2000, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(offset))
            .unwrap()
    })
}

fn name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{1,8} [A-Z][a-z]{1,8}"
}

proptest! {
    #[test]
    fn through_range_covers_start_until_end(start in any_date(), len in 0u64..60) {
        let end = start.checked_add_days(Days::new(len)).unwrap();
        let text = format!("{} Through {}", mdyy(start), mdyy(end));

        let days = occupied_days(&text).unwrap();

        prop_assert_eq!(days.len() as u64, len);
        prop_assert!(!days.contains(&end));
        if len > 0 {
            prop_assert_eq!(days[0], start);
            prop_assert_eq!(*days.last().unwrap(), end.pred_opt().unwrap());
        }
    }

    #[test]
    fn repeated_records_do_not_change_the_calendar(
        names in prop::collection::vec(name(), 1..6),
        date in any_date(),
        repeats in 1usize..4,
    ) {
        let records: Vec<RawRecord> = names
            .iter()
            .map(|n| RawRecord::new(n.clone(), mdyy(date), "Approved"))
            .collect();

        let mut once = Calendar::new();
        extract_records(&records, Bucket::Foh, &mut once);

        let mut many = Calendar::new();
        for _ in 0..repeats {
            extract_records(&records, Bucket::Foh, &mut many);
        }

        prop_assert_eq!(once.aggregate(), many.aggregate());
    }

    #[test]
    fn all_count_never_exceeds_department_sum(
        foh in prop::collection::vec(name(), 0..6),
        boh in prop::collection::vec(name(), 0..6),
        date in any_date(),
    ) {
        let mut cal = Calendar::new();
        let to_records = |names: &[String]| -> Vec<RawRecord> {
            names.iter().map(|n| RawRecord::new(n.clone(), mdyy(date), "Pending")).collect()
        };
        extract_records(&to_records(foh.as_slice()), Bucket::Foh, &mut cal);
        extract_records(&to_records(boh.as_slice()), Bucket::Boh, &mut cal);

        for view in cal.aggregate().values() {
            prop_assert!(view.all.count <= view.foh.count + view.boh.count);
            prop_assert!(view.all.count >= view.foh.count.max(view.boh.count));
        }
    }

    #[test]
    fn every_record_carries_the_latest_name(
        people in prop::collection::vec((name(), prop::collection::vec(any_date(), 1..4)), 1..5),
    ) {
        let mut text = format!("{}\n", HEADER);
        let mut expected = Vec::new();
        for (person, dates) in &people {
            text.push_str(person);
            text.push('\n');
            for date in dates {
                text.push_str(&format!("{}\tVacation\t8.00\t\t\tApproved\n", mdyy(*date)));
                expected.push(person.clone());
            }
        }

        let records = RawParser::default().parse(&text).unwrap();
        let names: Vec<String> = records.into_iter().map(|r| r.name).collect();
        prop_assert_eq!(names, expected);
    }
}
