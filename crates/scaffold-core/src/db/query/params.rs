use derive_more::{Deref, IntoIterator};
use std::collections::HashSet;
use url::form_urlencoded;

///
/// QueryParams
///
/// Ordered query-string parameters as decoded from the request URL.
/// Repeated names are kept; lookups return the last occurrence.
///

#[derive(Clone, Debug, Default, Deref, Eq, IntoIterator, PartialEq)]
#[into_iterator(owned, ref)]
pub struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    /// Decode a raw `application/x-www-form-urlencoded` query string.
    ///
    /// A leading `?` is ignored; `+` decodes to a space.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let raw = raw.strip_prefix('?').unwrap_or(raw);

        Self(form_urlencoded::parse(raw.as_bytes()).into_owned().collect())
    }

    #[must_use]
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Value of the last parameter named `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .rev()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// One `(name, value)` per distinct name, in first-seen order, carrying
    /// that name's last value.
    pub fn last_values(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut seen = HashSet::new();

        self.0
            .iter()
            .map(|(key, _)| key.as_str())
            .filter(move |key| seen.insert(*key))
            .filter_map(move |key| self.get(key).map(|value| (key, value)))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|(key, _)| key == name)
    }

    /// Append one parameter, keeping earlier ones.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.push((name.into(), value.into()));
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_decodes_pairs_in_order() {
        let params =
            QueryParams::parse("?status=draft&_complex_query=price%3D10%7C%7Cprice%3D20&q=a+b");

        let names: Vec<&str> = params.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(names, vec!["status", "_complex_query", "q"]);
        assert_eq!(params.get("_complex_query"), Some("price=10||price=20"));
        assert_eq!(params.get("q"), Some("a b"));
    }

    #[test]
    fn repeated_names_resolve_to_last_value() {
        let params = QueryParams::from_pairs([("page", "1"), ("page", "3")]);

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("page"), Some("3"));
        assert!(!params.contains("ordering"));
    }

    #[test]
    fn last_values_keep_first_position_and_last_value() {
        let params = QueryParams::from_pairs([
            ("title", "a"),
            ("page", "1"),
            ("title", "b"),
            ("page", "3"),
        ]);

        let pairs: Vec<(&str, &str)> = params.last_values().collect();
        assert_eq!(pairs, vec![("title", "b"), ("page", "3")]);
    }

    #[test]
    fn empty_query_string_has_no_params() {
        assert!(QueryParams::parse("").is_empty());
        assert!(QueryParams::parse("?").is_empty());
    }
}
