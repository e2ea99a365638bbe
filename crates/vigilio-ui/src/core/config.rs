//! Timing and threshold knobs shared by the screens.

/// Runtime configuration with the production defaults.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UiConfig {
    /// Torrent status poll period, in milliseconds.
    pub poll_interval_ms: u32,
    /// Consecutive poll failures before polling stops.
    pub max_poll_failures: u32,
    /// Delay before settings are fetched again after a save.
    pub refetch_delay_ms: u32,
    /// Delay before redirecting after a completed flow.
    pub redirect_delay_ms: u32,
    /// Idle time before a search query is sent.
    pub search_debounce_ms: u32,
    /// Minimum query length before searching.
    pub search_min_chars: usize,
    /// How long the add-to-list check mark stays visible.
    pub success_hide_ms: u32,
    /// Error strings at or above this length are logged instead of shown.
    pub error_display_limit: usize,
}

impl UiConfig {
    /// Production defaults.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            poll_interval_ms: 5_000,
            max_poll_failures: 3,
            refetch_delay_ms: 2_000,
            redirect_delay_ms: 2_000,
            search_debounce_ms: 500,
            search_min_chars: 3,
            success_hide_ms: 2_000,
            error_display_limit: crate::core::errors::DISPLAY_LIMIT,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared defaults used by components that do not receive a config.
pub const CONFIG: UiConfig = UiConfig::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_production_values() {
        let config = UiConfig::default();
        assert_eq!(config.poll_interval_ms, 5_000);
        assert_eq!(config.max_poll_failures, 3);
        assert_eq!(config.search_min_chars, 3);
        assert_eq!(config.error_display_limit, 200);
        assert_eq!(config, CONFIG);
    }
}
