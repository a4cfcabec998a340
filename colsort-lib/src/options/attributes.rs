//! Declarative per-table attributes.

/// Reserved attribute namespace.
///
/// The bare attribute carries the table-level spec string; attributes with a
/// suffix (`data-colsort-initialsort`, `data-colsort-markers-asc`, ...) carry
/// options.
pub const NAMESPACE: &str = "data-colsort";

/// Attributes read from the table element, in document order.
///
/// Names are matched case-insensitively with hyphens stripped, so
/// `data-colsort-initial-sort` and `DATA-COLSORT-INITIALSORT` are the same
/// option.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeclarativeAttributes {
    entries: Vec<(String, String)>,
}

impl DeclarativeAttributes {
    /// Create an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Add an attribute.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Check if no attributes were given.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The table-level spec string (the bare namespace attribute).
    ///
    /// If the attribute appears more than once the last one wins.
    pub fn table_spec(&self) -> Option<&str> {
        let namespace = normalize(NAMESPACE);
        self.entries
            .iter()
            .rev()
            .find(|(name, _)| normalize(name) == namespace)
            .map(|(_, value)| value.as_str())
    }

    /// Option entries as `(key, value)` with the namespace stripped from the
    /// normalised key, in document order.
    pub fn options(&self) -> impl Iterator<Item = (String, &str)> + '_ {
        let namespace = normalize(NAMESPACE);
        self.entries.iter().filter_map(move |(name, value)| {
            let key = normalize(name);
            let suffix = key.strip_prefix(namespace.as_str())?;
            if suffix.is_empty() {
                return None;
            }
            Some((suffix.to_string(), value.as_str()))
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DeclarativeAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_spec() {
        let attrs = DeclarativeAttributes::new()
            .with("id", "people")
            .with("DATA-COLSORT", "a|i");
        assert_eq!(attrs.table_spec(), Some("a|i"));
        assert_eq!(attrs.options().count(), 0);
    }

    #[test]
    fn test_option_keys_are_normalised() {
        let attrs: DeclarativeAttributes = [
            ("data-colsort-initial-sort", "2D"),
            ("data-colsort-Markers-Asc", "^"),
            ("data-other", "x"),
        ]
        .into_iter()
        .collect();

        let options: Vec<_> = attrs.options().collect();
        assert_eq!(
            options,
            vec![
                ("initialsort".to_string(), "2D"),
                ("markersasc".to_string(), "^")
            ]
        );
        assert_eq!(attrs.table_spec(), None);
    }
}
