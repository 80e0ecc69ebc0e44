//! Configuration for TEI conversion.

/// Default tolerance for size comparisons between styles.
pub const DEFAULT_SIZE_TOLERANCE: f64 = 0.01;

/// Default distance from the line base beyond which a character counts as
/// raised or lowered.
pub const DEFAULT_BASELINE_TOLERANCE: f64 = 2.0;

/// Conversion configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionConfig {
    /// Font size assumed for every line instead of the measured one.
    pub default_font_size: Option<f64>,

    /// Replace soft hyphens with visible hyphens.
    pub replace_soft_hyphen: bool,

    /// Stop after this many pages; `None` or 0 converts everything.
    pub stop_after: Option<usize>,

    /// Size tolerance for style equality. Fixed for a whole document.
    pub size_tolerance: f64,

    /// Baseline offset that makes a character super- or subscript.
    pub baseline_tolerance: f64,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversionConfig {
    /// Create new configuration with defaults.
    pub fn new() -> Self {
        Self {
            default_font_size: None,
            replace_soft_hyphen: true,
            stop_after: None,
            size_tolerance: DEFAULT_SIZE_TOLERANCE,
            baseline_tolerance: DEFAULT_BASELINE_TOLERANCE,
        }
    }

    /// Assume a base font size for every line. Non-positive sizes clear it.
    pub fn with_default_font_size(mut self, size: Option<f64>) -> Self {
        self.default_font_size = size.filter(|s| *s > 0.0);
        self
    }

    /// Enable or disable soft hyphen replacement.
    pub fn with_replace_soft_hyphen(mut self, enable: bool) -> Self {
        self.replace_soft_hyphen = enable;
        self
    }

    /// Stop after `pages` pages.
    pub fn with_stop_after(mut self, pages: Option<usize>) -> Self {
        self.stop_after = pages;
        self
    }

    /// Set the style size tolerance.
    pub fn with_size_tolerance(mut self, tolerance: f64) -> Self {
        self.size_tolerance = tolerance;
        self
    }

    /// Set the super/subscript baseline tolerance.
    pub fn with_baseline_tolerance(mut self, tolerance: f64) -> Self {
        self.baseline_tolerance = tolerance;
        self
    }

    /// Whether page number `page` (1-based) is past the stop limit.
    pub fn stops_before(&self, page: usize) -> bool {
        matches!(self.stop_after, Some(limit) if limit > 0 && page > limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ConversionConfig::default();
        assert!(config.replace_soft_hyphen);
        assert_eq!(config.default_font_size, None);
        assert_eq!(config.size_tolerance, 0.01);
        assert_eq!(config.baseline_tolerance, 2.0);
    }

    #[test]
    fn test_zero_font_size_means_none() {
        let config = ConversionConfig::new().with_default_font_size(Some(0.0));
        assert_eq!(config.default_font_size, None);
        let config = ConversionConfig::new().with_default_font_size(Some(9.5));
        assert_eq!(config.default_font_size, Some(9.5));
    }

    #[test]
    fn test_stops_before() {
        let config = ConversionConfig::new().with_stop_after(Some(2));
        assert!(!config.stops_before(2));
        assert!(config.stops_before(3));
        assert!(!ConversionConfig::new().with_stop_after(Some(0)).stops_before(100));
        assert!(!ConversionConfig::new().stops_before(100));
    }
}
