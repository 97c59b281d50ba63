//! Precondition checks run on mount and on every input change.
//!
//! Validation never aborts the fit path. Each fault is logged, recorded in
//! the returned [`ValidationReport`], and the fitter carries on with a safe
//! default.

use std::fmt;

use toolbar_overflow_core::logging::targets;

use crate::cache::OffsetCache;
use crate::config::FitterConfig;
use crate::option::OptionSet;

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    /// Degraded but expected to recover (e.g. surfaces not bound yet).
    Warning,
    /// The toolbar cannot show meaningful output until fixed.
    Error,
}

/// A single precondition fault.
#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// The offset cache held non-finite values and was reset.
    MalformedOffsetCache,
    /// The visible-count limit is zero or negative.
    NonPositiveMaxVisible(i32),
    /// No options were supplied.
    MissingOptions,
    /// No wrapper surface is bound; width falls back to the viewport and no
    /// resize listener is installed.
    WrapperUnbound,
    /// No items surface is bound; geometry capture is skipped.
    ItemsSurfaceUnbound,
}

impl Diagnostic {
    /// Severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        match self {
            Self::MalformedOffsetCache | Self::MissingOptions => Severity::Error,
            Self::NonPositiveMaxVisible(_) | Self::WrapperUnbound | Self::ItemsSurfaceUnbound => {
                Severity::Warning
            }
        }
    }

    /// Emit this diagnostic through `tracing` at its severity.
    pub fn log(&self) {
        match self.severity() {
            Severity::Error => tracing::error!(target: targets::VALIDATE, "{}", self),
            Severity::Warning => tracing::warn!(target: targets::VALIDATE, "{}", self),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedOffsetCache => {
                write!(f, "offset cache contained non-finite values; reset to empty")
            }
            Self::NonPositiveMaxVisible(max) => {
                write!(f, "max_visible must be positive, got {max}")
            }
            Self::MissingOptions => write!(f, "toolbar has no options"),
            Self::WrapperUnbound => write!(f, "wrapper surface is not bound"),
            Self::ItemsSurfaceUnbound => write!(f, "items surface is not bound"),
        }
    }
}

/// Everything one validation pass found.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationReport {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationReport {
    /// Diagnostics in the order they were found.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Whether nothing was found.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Whether any error-severity diagnostic was found.
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity() == Severity::Error)
    }

    /// Whether `diagnostic` was found.
    pub fn contains(&self, diagnostic: &Diagnostic) -> bool {
        self.diagnostics.contains(diagnostic)
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        diagnostic.log();
        self.diagnostics.push(diagnostic);
    }
}

/// Reset `cache` if it is malformed. Returns the diagnostic when it was.
pub fn repair_cache(cache: &mut OffsetCache) -> Option<Diagnostic> {
    if cache.is_well_formed() {
        return None;
    }
    cache.reset();
    Some(Diagnostic::MalformedOffsetCache)
}

/// Inputs to a validation pass.
pub struct ValidationInput<'a> {
    pub cache: &'a mut OffsetCache,
    pub config: &'a FitterConfig,
    pub options: &'a OptionSet,
    pub wrapper_bound: bool,
    pub items_bound: bool,
}

/// Run every check, logging and repairing as it goes.
pub fn validate(input: ValidationInput<'_>) -> ValidationReport {
    let mut report = ValidationReport::default();

    if let Some(diagnostic) = repair_cache(input.cache) {
        report.push(diagnostic);
    }
    if input.config.max_visible <= 0 {
        report.push(Diagnostic::NonPositiveMaxVisible(input.config.max_visible));
    }
    if input.options.is_empty() {
        report.push(Diagnostic::MissingOptions);
    }
    if !input.wrapper_bound {
        report.push(Diagnostic::WrapperUnbound);
    }
    if !input.items_bound {
        report.push(Diagnostic::ItemsSurfaceUnbound);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::option::ToolOption;

    fn options() -> OptionSet {
        OptionSet::new(0, vec![ToolOption::new("a", "A")])
    }

    #[test]
    fn test_clean_report() {
        let mut cache = OffsetCache::new();
        let report = validate(ValidationInput {
            cache: &mut cache,
            config: &FitterConfig::default(),
            options: &options(),
            wrapper_bound: true,
            items_bound: true,
        });
        assert!(report.is_clean());
        assert!(!report.has_errors());
    }

    #[test]
    fn test_all_faults_reported_in_order() {
        let mut cache = OffsetCache::new();
        cache.populate(vec![f32::INFINITY]);

        let report = validate(ValidationInput {
            cache: &mut cache,
            config: &FitterConfig::new(0, 10.0),
            options: &OptionSet::default(),
            wrapper_bound: false,
            items_bound: false,
        });

        assert_eq!(
            report.diagnostics(),
            &[
                Diagnostic::MalformedOffsetCache,
                Diagnostic::NonPositiveMaxVisible(0),
                Diagnostic::MissingOptions,
                Diagnostic::WrapperUnbound,
                Diagnostic::ItemsSurfaceUnbound,
            ]
        );
        assert!(report.has_errors());
        assert!(cache.is_empty());
    }

    #[test]
    fn test_repair_cache_leaves_good_cache() {
        let mut cache = OffsetCache::new();
        cache.populate(vec![10.0, 20.0]);
        assert_eq!(repair_cache(&mut cache), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_severity() {
        assert_eq!(Diagnostic::MissingOptions.severity(), Severity::Error);
        assert_eq!(Diagnostic::NonPositiveMaxVisible(-1).severity(), Severity::Warning);
        assert!(Diagnostic::NonPositiveMaxVisible(-1).to_string().contains("-1"));
    }
}
