use std::num::NonZeroU32;
use std::time::Duration;
use typed_builder::TypedBuilder;

/// Seconds the user watches the countdown before automatic navigation.
pub const DEFAULT_COUNTDOWN_SECONDS: NonZeroU32 = NonZeroU32::new(5).unwrap();

/// Wall-clock interval between countdown ticks.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(1);

/// Configuration for a redirect controller instance.
///
/// `tick_interval` is one second for real use; tests and demos may
/// compress it.
#[derive(Debug, Clone, TypedBuilder)]
pub struct RedirectConfig {
    /// Initial countdown value. Must be positive, hence `NonZeroU32`.
    #[builder(default = DEFAULT_COUNTDOWN_SECONDS)]
    pub countdown_seconds: NonZeroU32,
    /// Time between consecutive countdown ticks.
    #[builder(default = DEFAULT_TICK_INTERVAL)]
    pub tick_interval: Duration,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RedirectConfig::default();
        assert_eq!(config.countdown_seconds.get(), 5);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
    }

    #[test]
    fn builder_overrides() {
        let config = RedirectConfig::builder()
            .countdown_seconds(NonZeroU32::new(3).unwrap())
            .tick_interval(Duration::from_millis(10))
            .build();
        assert_eq!(config.countdown_seconds.get(), 3);
        assert_eq!(config.tick_interval, Duration::from_millis(10));
    }
}
