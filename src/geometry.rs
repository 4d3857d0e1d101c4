//! # Flight grid geometry
//!
//! The vehicle flies on a flat grid whose origin is the takeoff point. Positions are in centimeters and headings in
//! degrees, measured counter-clockwise from the positive x axis. Nothing here talks to the vehicle: these types only
//! turn a pose and a target into the heading, distance and rotation the [Navigator](crate::Navigator) needs.

use std::fmt;

use crate::vehicle::Command;
use crate::{Error, Result};

/// Default grid width (cm)
pub const DEFAULT_MAX_X: f64 = 100.0;
/// Default grid depth (cm)
pub const DEFAULT_MAX_Y: f64 = 100.0;

/// Estimated position and facing of the vehicle
///
/// This is a pure dead-reckoning estimate: it is only ever updated from the commands sent to the vehicle, never from
/// sensor readings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pose {
    /// Position along the x axis (cm)
    pub x: f64,
    /// Position along the y axis (cm)
    pub y: f64,
    /// Facing (degrees)
    pub heading: f64,
}

impl Pose {
    /// Create a pose
    pub fn new(x: f64, y: f64, heading: f64) -> Self {
        Self { x, y, heading }
    }

    /// Returns true if the pose is exactly at `(x, y)`
    pub fn is_at(&self, x: f64, y: f64) -> bool {
        self.x == x && self.y == y
    }

    /// Heading and straight-line distance from this pose to `(x, y)`
    ///
    /// The heading is `atan(dy / dx)` without quadrant correction, so targets with a smaller x than the current
    /// position get the heading of the mirrored target. A target straight along the y axis gets 90 degrees when it
    /// is ahead and 270 degrees otherwise.
    pub fn course_to(&self, x: f64, y: f64) -> Course {
        let delta_x = x - self.x;
        let delta_y = y - self.y;

        let heading = if delta_x == 0.0 {
            if delta_y > 0.0 {
                90.0
            } else {
                270.0
            }
        } else {
            (delta_y / delta_x).atan().to_degrees()
        };

        Course {
            heading,
            distance: delta_x.hypot(delta_y),
        }
    }

    /// Rotation needed to go from the current heading to `heading`
    ///
    /// The angle is rounded to whole degrees. The direction is picked from the unrounded headings, so a turn of less
    /// than half a degree still yields a (zero degree) rotation.
    pub fn turn_towards(&self, heading: f64) -> Turn {
        let delta = (self.heading - heading).round();

        if heading < self.heading {
            Turn::Clockwise(delta)
        } else if heading > self.heading {
            Turn::CounterClockwise(-delta)
        } else {
            Turn::None
        }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}] facing {} degrees", self.x, self.y, self.heading)
    }
}

/// Heading and distance to a waypoint
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Course {
    /// Heading to face (degrees)
    pub heading: f64,
    /// Distance to fly forward (cm)
    pub distance: f64,
}

/// Rotation to apply before moving forward
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Turn {
    /// Already facing the right way
    None,
    /// Rotate clockwise by the given degrees
    Clockwise(f64),
    /// Rotate counter-clockwise by the given degrees
    CounterClockwise(f64),
}

impl Turn {
    /// Vehicle command implementing this turn, if any
    pub fn command(&self) -> Option<Command> {
        match *self {
            Turn::None => None,
            Turn::Clockwise(degrees) => Some(Command::RotateClockwise(degrees)),
            Turn::CounterClockwise(degrees) => Some(Command::RotateCounterClockwise(degrees)),
        }
    }
}

/// Inclusive rectangle `[0, max_x] × [0, max_y]` of legal waypoints
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    /// Create bounds
    ///
    /// Both limits must be finite and non-negative, otherwise [Error::InvalidConfig] is returned.
    pub fn new(max_x: f64, max_y: f64) -> Result<Self> {
        if !(max_x.is_finite() && max_y.is_finite()) || max_x < 0.0 || max_y < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "bounds must be finite and non-negative, got [{}, {}]",
                max_x, max_y
            )));
        }

        Ok(Self { max_x, max_y })
    }

    /// Largest legal x coordinate
    pub fn max_x(&self) -> f64 {
        self.max_x
    }

    /// Largest legal y coordinate
    pub fn max_y(&self) -> f64 {
        self.max_y
    }

    /// Returns true if `(x, y)` lies inside the bounds, edges included
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.max_x).contains(&x) && (0.0..=self.max_y).contains(&y)
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            max_x: DEFAULT_MAX_X,
            max_y: DEFAULT_MAX_Y,
        }
    }
}

impl fmt::Display for Bounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.max_x, self.max_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn bounds_include_edges() {
        let bounds = Bounds::new(100.0, 50.0).unwrap();

        assert!(bounds.contains(0.0, 0.0));
        assert!(bounds.contains(100.0, 50.0));
        assert!(!bounds.contains(100.5, 0.0));
        assert!(!bounds.contains(0.0, -0.1));
        assert!(!bounds.contains(f64::NAN, 1.0));
    }

    #[test]
    fn bounds_reject_negative_or_infinite_limits() {
        assert!(matches!(Bounds::new(-1.0, 10.0), Err(Error::InvalidConfig(_))));
        assert!(matches!(Bounds::new(10.0, f64::INFINITY), Err(Error::InvalidConfig(_))));
        assert!(matches!(Bounds::new(f64::NAN, 10.0), Err(Error::InvalidConfig(_))));
        assert!(Bounds::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn course_along_y_axis() {
        let pose = Pose::new(10.0, 10.0, 0.0);

        assert_eq!(pose.course_to(10.0, 60.0), Course { heading: 90.0, distance: 50.0 });
        assert_eq!(pose.course_to(10.0, 0.0), Course { heading: 270.0, distance: 10.0 });
    }

    #[test]
    fn course_diagonal() {
        let course = Pose::default().course_to(100.0, 100.0);

        assert_relative_eq!(course.heading, 45.0, epsilon = 1e-9);
        assert_relative_eq!(course.distance, 20000f64.sqrt(), epsilon = 1e-9);
    }

    #[test]
    fn course_behind_has_no_quadrant_correction() {
        // (-10, -10) relative: a corrected heading would be 225 degrees
        let course = Pose::new(50.0, 50.0, 0.0).course_to(40.0, 40.0);

        assert_relative_eq!(course.heading, 45.0, epsilon = 1e-9);
    }

    #[test]
    fn turn_direction_and_rounding() {
        let pose = Pose::new(0.0, 0.0, 90.0);

        assert_eq!(pose.turn_towards(90.0), Turn::None);
        assert_eq!(pose.turn_towards(0.0), Turn::Clockwise(90.0));
        assert_eq!(pose.turn_towards(270.0), Turn::CounterClockwise(180.0));
        assert_eq!(pose.turn_towards(44.6), Turn::Clockwise(45.0));
        assert_eq!(pose.turn_towards(89.8), Turn::Clockwise(0.0));
    }
}
