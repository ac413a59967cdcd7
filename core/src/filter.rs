//! Query parameters for listing users.

use crate::request::ListUsers;

/// Ordered, non-empty list filters keyed by their wire name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterParams {
    params: Vec<(&'static str, String)>,
}

impl FilterParams {
    /// Build the parameter set from a list request.
    ///
    /// Fields appear in a fixed order regardless of how the request was
    /// built: first_name, last_name, gender, birthdate_from, birthdate_to,
    /// sort_by, sort_dir. Absent and empty values are skipped.
    pub fn from_request(query: &ListUsers) -> Self {
        let mut params = Self::default();
        params.push("first_name", query.first_name.as_deref());
        params.push("last_name", query.last_name.as_deref());
        params.push("gender", query.gender.as_deref());
        params.push(
            "birthdate_from",
            query.birthdate_from.map(|d| d.format("%Y-%m-%d").to_string()).as_deref(),
        );
        params.push(
            "birthdate_to",
            query.birthdate_to.map(|d| d.format("%Y-%m-%d").to_string()).as_deref(),
        );
        params.push("sort_by", query.sort_by.as_deref());
        params.push("sort_dir", query.sort_dir.map(|d| d.as_str()));
        params
    }

    fn push(&mut self, name: &'static str, value: Option<&str>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.params.push((name, value.to_string()));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().map(|(key, _)| *key)
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub(crate) fn to_pairs(&self) -> Vec<(String, String)> {
        self.params
            .iter()
            .map(|(key, value)| (key.to_string(), value.clone()))
            .collect()
    }
}

impl From<&ListUsers> for FilterParams {
    fn from(query: &ListUsers) -> Self {
        Self::from_request(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::SortDir;
    use chrono::NaiveDate;

    #[test]
    fn empty_request_yields_no_params() {
        assert!(FilterParams::from_request(&ListUsers::default()).is_empty());
    }

    #[test]
    fn empty_strings_are_skipped() {
        let query = ListUsers {
            first_name: Some(String::new()),
            last_name: Some("Lovelace".to_string()),
            sort_by: Some(String::new()),
            ..ListUsers::default()
        };
        let params = FilterParams::from_request(&query);
        assert_eq!(params.names().collect::<Vec<_>>(), vec!["last_name"]);
        assert_eq!(params.get("last_name"), Some("Lovelace"));
    }

    #[test]
    fn full_request_keeps_fixed_order() {
        let query = ListUsers {
            sort_dir: Some(SortDir::Desc),
            sort_by: Some("birthdate".to_string()),
            birthdate_to: NaiveDate::from_ymd_opt(1900, 1, 1),
            birthdate_from: NaiveDate::from_ymd_opt(1800, 6, 5),
            gender: Some("F".to_string()),
            last_name: Some("Lovelace".to_string()),
            first_name: Some("Ada".to_string()),
        };
        let params = FilterParams::from_request(&query);
        assert_eq!(
            params.names().collect::<Vec<_>>(),
            vec![
                "first_name",
                "last_name",
                "gender",
                "birthdate_from",
                "birthdate_to",
                "sort_by",
                "sort_dir"
            ]
        );
        assert_eq!(params.get("birthdate_from"), Some("1800-06-05"));
        assert_eq!(params.get("sort_dir"), Some("desc"));
    }
}
