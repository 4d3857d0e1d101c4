use std::time::Duration;

use crate::geometry::Bounds;

/// Pit stop duration used by [Navigator::fly_square_path()](crate::Navigator::fly_square_path)
pub const DEFAULT_PIT_STOP_DURATION: Duration = Duration::from_secs(3);

/// Navigator configuration
///
/// Defaults to a 100×100 grid, 3 seconds pit stops and explicit takeoff.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigatorConfig {
    /// Legal waypoint area
    pub bounds: Bounds,
    /// How long the vehicle stays on the ground during a pit stop of the square path
    pub pit_stop_duration: Duration,
    /// Take off automatically when asked to fly somewhere while grounded
    ///
    /// When false, [Navigator::fly_to_location()](crate::Navigator::fly_to_location) fails with
    /// [Error::InvalidState](crate::Error::InvalidState) until
    /// [Navigator::initiate_flight()](crate::Navigator::initiate_flight) is called.
    pub auto_takeoff: bool,
}

impl Default for NavigatorConfig {
    fn default() -> Self {
        Self {
            bounds: Bounds::default(),
            pit_stop_duration: DEFAULT_PIT_STOP_DURATION,
            auto_takeoff: false,
        }
    }
}

impl NavigatorConfig {
    /// Set the legal waypoint area
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Set the pit stop duration of the square path
    pub fn with_pit_stop_duration(mut self, duration: Duration) -> Self {
        self.pit_stop_duration = duration;
        self
    }

    /// Enable or disable automatic takeoff
    pub fn with_auto_takeoff(mut self, auto_takeoff: bool) -> Self {
        self.auto_takeoff = auto_takeoff;
        self
    }
}
