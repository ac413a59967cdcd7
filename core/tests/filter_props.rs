//! Property tests for list filter construction.

use chrono::NaiveDate;
use proptest::prelude::*;
use users_core::{FilterParams, ListUsers, SortDir};

const ORDER: [&str; 7] = [
    "first_name",
    "last_name",
    "gender",
    "birthdate_from",
    "birthdate_to",
    "sort_by",
    "sort_dir",
];

fn text() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![Just(String::new()), "[a-zA-Z ]{1,12}"])
}

fn date() -> impl Strategy<Value = Option<NaiveDate>> {
    prop::option::of((1800i32..2020, 1u32..=12, 1u32..=28))
        .prop_map(|ymd| ymd.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)))
}

fn list_users() -> impl Strategy<Value = ListUsers> {
    (
        text(),
        text(),
        text(),
        date(),
        date(),
        text(),
        prop::option::of(prop_oneof![Just(SortDir::Asc), Just(SortDir::Desc)]),
    )
        .prop_map(
            |(first_name, last_name, gender, birthdate_from, birthdate_to, sort_by, sort_dir)| {
                ListUsers {
                    first_name,
                    last_name,
                    gender,
                    birthdate_from,
                    birthdate_to,
                    sort_by,
                    sort_dir,
                }
            },
        )
}

fn present(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}

proptest! {
    #[test]
    fn key_present_iff_field_present_and_non_empty(query in list_users()) {
        let params = FilterParams::from_request(&query);

        prop_assert_eq!(params.get("first_name").is_some(), present(&query.first_name));
        prop_assert_eq!(params.get("last_name").is_some(), present(&query.last_name));
        prop_assert_eq!(params.get("gender").is_some(), present(&query.gender));
        prop_assert_eq!(params.get("birthdate_from").is_some(), query.birthdate_from.is_some());
        prop_assert_eq!(params.get("birthdate_to").is_some(), query.birthdate_to.is_some());
        prop_assert_eq!(params.get("sort_by").is_some(), present(&query.sort_by));
        prop_assert_eq!(params.get("sort_dir").is_some(), query.sort_dir.is_some());
    }

    #[test]
    fn keys_follow_fixed_order(query in list_users()) {
        let params = FilterParams::from_request(&query);
        let names: Vec<&str> = params.names().collect();
        let expected: Vec<&str> = ORDER.iter().copied().filter(|n| names.contains(n)).collect();

        prop_assert_eq!(names, expected);
    }

    #[test]
    fn values_are_passed_through_verbatim(query in list_users()) {
        let params = FilterParams::from_request(&query);

        if present(&query.last_name) {
            prop_assert_eq!(params.get("last_name"), query.last_name.as_deref());
        }
        if let Some(from) = query.birthdate_from {
            let expected = from.format("%Y-%m-%d").to_string();
            prop_assert_eq!(params.get("birthdate_from"), Some(expected.as_str()));
        }
    }
}
