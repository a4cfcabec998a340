//! Comparator registry.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::model::Cell;

use super::builtins;

/// A registered comparison rule: two cells plus the spec's arguments.
pub type Comparator = Arc<dyn Fn(&dyn Cell, &dyn Cell, &[String]) -> Ordering + Send + Sync>;

/// Builds a comparator for one column from the spec's arguments.
///
/// Rules with expensive setup (such as compiling a date pattern) register one
/// of these so the work happens once per column instead of once per
/// comparison.
pub type Prepare = Arc<dyn Fn(&[String]) -> Comparator + Send + Sync>;

/// Comparator that considers every pair of cells equal.
///
/// Sorting with it leaves the current (stable) order untouched.
pub fn neutral() -> Comparator {
    Arc::new(|_: &dyn Cell, _: &dyn Cell, _: &[String]| Ordering::Equal)
}

/// One or more opcodes to register a comparator under.
pub trait IntoCodes {
    /// Convert into the list of codes.
    fn into_codes(self) -> Vec<String>;
}

impl IntoCodes for &str {
    fn into_codes(self) -> Vec<String> {
        vec![self.to_string()]
    }
}

impl IntoCodes for String {
    fn into_codes(self) -> Vec<String> {
        vec![self]
    }
}

impl IntoCodes for &[&str] {
    fn into_codes(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl<const N: usize> IntoCodes for [&str; N] {
    fn into_codes(self) -> Vec<String> {
        self.iter().map(|s| s.to_string()).collect()
    }
}

impl IntoCodes for Vec<String> {
    fn into_codes(self) -> Vec<String> {
        self
    }
}

/// Mapping from opcode to comparator.
///
/// Build one at startup, register any custom rules, then share it between
/// sessions with [`into_shared`](Self::into_shared). Registering a code that
/// already exists replaces the old comparator.
///
/// # Example
///
/// ```
/// use std::cmp::Ordering;
/// use colsort_lib::compare::ComparatorRegistry;
///
/// let mut registry = ComparatorRegistry::new();
/// registry.register(["len", "l"], |a, b, _args| {
///     a.text().chars().count().cmp(&b.text().chars().count())
/// });
///
/// assert!(registry.contains("l"));
/// assert!(registry.contains("alpha"));
/// ```
#[derive(Clone)]
pub struct ComparatorRegistry {
    entries: HashMap<String, Prepare>,
}

impl ComparatorRegistry {
    /// Create a registry with the built-in comparators registered.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        builtins::register_builtins(&mut registry);
        registry
    }

    /// Create a registry with nothing registered.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register `compare` under every code in `codes`.
    pub fn register<F>(&mut self, codes: impl IntoCodes, compare: F)
    where
        F: Fn(&dyn Cell, &dyn Cell, &[String]) -> Ordering + Send + Sync + 'static,
    {
        self.register_shared(codes, Arc::new(compare));
    }

    /// Register an already shared comparator under every code in `codes`.
    pub fn register_shared(&mut self, codes: impl IntoCodes, compare: Comparator) {
        self.insert(codes, Arc::new(move |_: &[String]| Arc::clone(&compare)));
    }

    /// Register a rule that builds its comparator once per column.
    ///
    /// `prepare` receives the column spec's arguments when a session is built;
    /// the comparator it returns is cached for that column.
    pub fn register_prepared<F>(&mut self, codes: impl IntoCodes, prepare: F)
    where
        F: Fn(&[String]) -> Comparator + Send + Sync + 'static,
    {
        self.insert(codes, Arc::new(prepare));
    }

    fn insert(&mut self, codes: impl IntoCodes, prepare: Prepare) {
        for code in codes.into_codes() {
            if self.entries.insert(code.clone(), Arc::clone(&prepare)).is_some() {
                log::debug!("comparator \"{}\" replaced", code);
            }
        }
    }

    /// Build the comparator for `code` with the given spec arguments.
    pub fn prepare(&self, code: &str, args: &[String]) -> Option<Comparator> {
        self.entries.get(code).map(|prepare| prepare(args))
    }

    /// Look up the comparator for `code`.
    ///
    /// The result takes the spec arguments on every call; prepared rules are
    /// rebuilt each time. Prefer [`prepare`](Self::prepare) when the
    /// arguments are known up front.
    pub fn resolve(&self, code: &str) -> Option<Comparator> {
        let prepare = Arc::clone(self.entries.get(code)?);
        Some(Arc::new(
            move |a: &dyn Cell, b: &dyn Cell, args: &[String]| prepare(args)(a, b, args),
        ))
    }

    /// Check if `code` is registered.
    pub fn contains(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// All registered codes (sorted for deterministic ordering).
    pub fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<_> = self.entries.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }

    /// Freeze the registry for sharing between sessions.
    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for ComparatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ComparatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ComparatorRegistry")
            .field("codes", &self.codes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtins_registered() {
        let registry = ComparatorRegistry::new();
        assert_eq!(
            registry.codes(),
            vec!["a", "alpha", "d", "date", "i", "int", "v", "value"]
        );
        assert!(ComparatorRegistry::empty().codes().is_empty());
    }

    #[test]
    fn test_last_registration_wins() {
        let mut registry = ComparatorRegistry::empty();
        registry.register("x", |_, _, _| Ordering::Less);
        registry.register("x", |_, _, _| Ordering::Greater);

        let compare = registry.resolve("x").unwrap();
        assert_eq!(compare(&"a", &"b", &[]), Ordering::Greater);
    }

    #[test]
    fn test_register_many_codes() {
        let mut registry = ComparatorRegistry::empty();
        registry.register(vec!["one".to_string(), "1".to_string()], |_, _, _| {
            Ordering::Less
        });
        assert!(registry.contains("one"));
        assert!(registry.contains("1"));
    }

    #[test]
    fn test_prepared_rule_binds_args() {
        let mut registry = ComparatorRegistry::empty();
        registry.register_prepared("len-over", |args: &[String]| -> Comparator {
            let limit: usize = args.first().and_then(|a| a.parse().ok()).unwrap_or(0);
            Arc::new(move |a: &dyn Cell, b: &dyn Cell, _: &[String]| {
                (a.text().len() > limit).cmp(&(b.text().len() > limit))
            })
        });

        let compare = registry.prepare("len-over", &["2".to_string()]).unwrap();
        assert_eq!(compare(&"abc", &"ab", &[]), Ordering::Greater);
        assert_eq!(compare(&"a", &"ab", &[]), Ordering::Equal);

        let compare = registry.resolve("len-over").unwrap();
        assert_eq!(compare(&"a", &"ab", &["1".to_string()]), Ordering::Less);
        assert!(registry.prepare("missing", &[]).is_none());
    }

    #[test]
    fn test_resolve_missing() {
        assert!(ComparatorRegistry::new().resolve("zzz").is_none());
    }

    #[test]
    fn test_neutral_is_equal() {
        assert_eq!(neutral()(&"b", &"a", &[]), Ordering::Equal);
    }
}
