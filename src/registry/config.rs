//! Registry configuration

/// Configuration options for a track registry
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Capacity of the selection-event broadcast channel
    ///
    /// A slow subscriber that falls more than this many events behind
    /// starts seeing `Lagged` on its receiver.
    pub event_capacity: usize,

    /// Maximum number of tracks (0 = unlimited)
    pub max_tracks: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            event_capacity: 64,
            max_tracks: 0, // Unlimited
        }
    }
}

impl RegistryConfig {
    /// Set the selection-event channel capacity
    pub fn event_capacity(mut self, capacity: usize) -> Self {
        self.event_capacity = capacity.max(1);
        self
    }

    /// Set the maximum number of tracks
    pub fn max_tracks(mut self, max: usize) -> Self {
        self.max_tracks = max;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RegistryConfig::default();

        assert_eq!(config.event_capacity, 64);
        assert_eq!(config.max_tracks, 0);
    }

    #[test]
    fn test_builder_chaining() {
        let config = RegistryConfig::default().event_capacity(16).max_tracks(8);

        assert_eq!(config.event_capacity, 16);
        assert_eq!(config.max_tracks, 8);
    }

    #[test]
    fn test_event_capacity_floor() {
        // Zero capacity would make the broadcast channel unconstructible.
        let config = RegistryConfig::default().event_capacity(0);
        assert_eq!(config.event_capacity, 1);
    }
}
