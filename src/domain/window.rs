//! Query time window

use super::errors::ExporterError;
use super::result::Result;

/// Inclusive time window handed to the monitoring API
///
/// Both bounds are kept as the strings the API expects; the only rule
/// enforced here is that neither is blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeWindow {
    start: String,
    end: String,
}

impl TimeWindow {
    /// Creates a new time window
    ///
    /// # Errors
    ///
    /// Returns a configuration error if either bound is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use svcdeps::domain::TimeWindow;
    ///
    /// let window = TimeWindow::new("2024-06-01T00:00:00Z", "2024-06-02T00:00:00Z").unwrap();
    /// assert_eq!(window.start(), "2024-06-01T00:00:00Z");
    /// assert!(TimeWindow::new("", "2024-06-02T00:00:00Z").is_err());
    /// ```
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Result<Self> {
        let start = start.into();
        let end = end.into();

        if start.trim().is_empty() {
            return Err(ExporterError::Configuration(
                "start_time cannot be empty".to_string(),
            ));
        }
        if end.trim().is_empty() {
            return Err(ExporterError::Configuration(
                "end_time cannot be empty".to_string(),
            ));
        }

        Ok(Self { start, end })
    }

    /// Start of the window
    pub fn start(&self) -> &str {
        &self.start
    }

    /// End of the window
    pub fn end(&self) -> &str {
        &self.end
    }
}

impl std::fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
