//! Diagnostic sinks for configuration errors.

use std::sync::Mutex;

use super::ConfigError;

/// Receives configuration errors found during session setup.
pub trait DiagnosticSink {
    /// Report a single configuration error.
    fn report(&self, error: &ConfigError);
}

impl<F: Fn(&ConfigError)> DiagnosticSink for F {
    fn report(&self, error: &ConfigError) {
        self(error)
    }
}

/// Sink that writes every error to the `log` facade.
///
/// This is the default sink of a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, error: &ConfigError) {
        log::error!("colsort config error: {}", error);
    }
}

/// Sink that keeps every reported error for later inspection.
#[derive(Debug, Default)]
pub struct CollectSink {
    errors: Mutex<Vec<ConfigError>>,
}

impl CollectSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Errors reported so far, in report order.
    pub fn errors(&self) -> Vec<ConfigError> {
        self.errors
            .lock()
            .map(|errors| errors.clone())
            .unwrap_or_default()
    }

    /// Number of errors reported so far.
    pub fn len(&self) -> usize {
        self.errors.lock().map(|errors| errors.len()).unwrap_or(0)
    }

    /// Check if nothing was reported.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return everything reported so far.
    pub fn take(&self) -> Vec<ConfigError> {
        self.errors
            .lock()
            .map(|mut errors| std::mem::take(&mut *errors))
            .unwrap_or_default()
    }
}

impl DiagnosticSink for CollectSink {
    fn report(&self, error: &ConfigError) {
        log::debug!("collecting config error: {}", error);
        if let Ok(mut errors) = self.errors.lock() {
            errors.push(error.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;

    #[test]
    fn test_collect_sink_keeps_order() {
        let sink = CollectSink::new();
        sink.report(&ConfigError::InvalidInitialSort("x".into()));
        sink.report(&ConfigError::unknown_comparator(2, "zzz"));

        let errors = sink.errors();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1].column(), Some(2));

        assert_eq!(sink.take().len(), 2);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_closure_sink() {
        let seen = RefCell::new(Vec::new());
        let sink = |error: &ConfigError| seen.borrow_mut().push(error.to_string());
        sink.report(&ConfigError::TooManySpecs { specs: 3, columns: 2 });
        assert_eq!(
            seen.into_inner(),
            vec!["too many sort columns specified: 3 specs for 2 columns".to_string()]
        );
    }
}
