use std::sync::Arc;
use std::time::Duration;

use async_executors::Timer;

use crate::config::NavigatorConfig;
use crate::flight_log::{FlightLog, LogFacade};
use crate::geometry::{Bounds, Pose, Turn};
use crate::vehicle::{Command, Vehicle};
use crate::{Error, Result};

/// Whether the vehicle is in the air
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightState {
    /// On the ground, motors stopped
    Grounded,
    /// Airborne
    Flying,
}

/// # The Navigator
///
/// Wraps a [Vehicle] and keeps a dead-reckoning estimate of its [Pose] on a bounded grid. Waypoints are turned into a
/// rotation followed by a forward move.
///
/// All operations take `&mut self`: one caller drives one navigator, one command at a time. Precondition failures are
/// reported before anything is sent to the vehicle, and vehicle failures are returned as they are, without retry.
///
/// See the [crate root documentation](crate) for an example.
pub struct Navigator<V, T> {
    vehicle: V,
    timer: T,
    config: NavigatorConfig,
    pose: Pose,
    state: FlightState,
    flight_log: Arc<dyn FlightLog>,
}

impl<V: Vehicle, T: Timer> Navigator<V, T> {
    /// Create a navigator with the default configuration
    ///
    /// The timer argument should be a timer from the crate `async_executors`, it is used to wait during pit stops.
    pub fn new(vehicle: V, timer: T) -> Self {
        Self::with_config(vehicle, timer, NavigatorConfig::default())
    }

    /// Create a navigator with a custom configuration
    ///
    /// The navigator starts grounded at the origin, facing 0 degrees.
    pub fn with_config(vehicle: V, timer: T, config: NavigatorConfig) -> Self {
        Self {
            vehicle,
            timer,
            config,
            pose: Pose::default(),
            state: FlightState::Grounded,
            flight_log: Arc::new(LogFacade),
        }
    }

    /// Replace the default [LogFacade] flight log
    pub fn with_flight_log(mut self, flight_log: impl FlightLog + 'static) -> Self {
        self.flight_log = Arc::new(flight_log);
        self
    }

    /// Current pose estimate
    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Current flight state
    pub fn flight_state(&self) -> FlightState {
        self.state
    }

    /// Returns true if the vehicle is airborne
    pub fn is_flying(&self) -> bool {
        self.state == FlightState::Flying
    }

    /// Legal waypoint area
    pub fn bounds(&self) -> Bounds {
        self.config.bounds
    }

    /// Navigator configuration
    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    /// Access the wrapped vehicle
    pub fn vehicle(&self) -> &V {
        &self.vehicle
    }

    /// Give back the wrapped vehicle
    pub fn into_vehicle(self) -> V {
        self.vehicle
    }

    /// Returns true if `(x, y)` is inside the bounds, edges included
    pub fn validate_location(&self, x: f64, y: f64) -> bool {
        self.info(&format!(
            "Validating target location is within bounds {}",
            self.config.bounds
        ));

        self.config.bounds.contains(x, y)
    }

    /// Open the control session with the vehicle
    ///
    /// Call once before any flight operation.
    pub async fn connect(&mut self) -> Result<()> {
        self.info("Connecting to vehicle...");
        self.command(Command::Connect).await?;
        self.info("Connected");

        Ok(())
    }

    /// Take off
    ///
    /// Fails with [Error::InvalidState] if the vehicle is already flying.
    pub async fn initiate_flight(&mut self) -> Result<()> {
        if self.is_flying() {
            return Err(self.bad_command(Error::InvalidState(
                "cannot take off, vehicle is already flying".to_owned(),
            )));
        }

        self.take_off().await
    }

    /// Land
    ///
    /// Fails with [Error::InvalidState] if the vehicle is already on the ground.
    pub async fn finish_flight(&mut self) -> Result<()> {
        if !self.is_flying() {
            return Err(self.bad_command(Error::InvalidState(
                "cannot land, vehicle is already grounded".to_owned(),
            )));
        }

        self.touch_down().await
    }

    /// Fly in a straight line to `(x, y)`
    ///
    /// The vehicle first rotates to face the target, then flies forward. The pose estimate is updated once both
    /// commands went through; if the vehicle fails a command the error is returned and the pose is left untouched.
    ///
    /// Fails with [Error::InvalidTarget] if the target is out of bounds or is the current position, and with
    /// [Error::InvalidState] if the vehicle is grounded and automatic takeoff is disabled.
    pub async fn fly_to_location(&mut self, x: f64, y: f64) -> Result<()> {
        if !self.validate_location(x, y) {
            return Err(self.bad_command(Error::InvalidTarget(format!(
                "[{}, {}] is outside bounds {}",
                x, y, self.config.bounds
            ))));
        }
        if self.pose.is_at(x, y) {
            return Err(self.bad_command(Error::InvalidTarget(format!(
                "vehicle is already at [{}, {}]",
                x, y
            ))));
        }

        if !self.is_flying() {
            if !self.config.auto_takeoff {
                return Err(self.bad_command(Error::InvalidState(
                    "cannot move while grounded, initiate flight first".to_owned(),
                )));
            }
            self.info("Vehicle not in flight, commencing takeoff...");
            self.take_off().await?;
        }

        let course = self.pose.course_to(x, y);
        self.info(&format!("Current location {}", self.pose));
        self.info(&format!(
            "Need to face {} degrees and fly {} cm",
            course.heading, course.distance
        ));

        let turn = self.pose.turn_towards(course.heading);
        match turn {
            Turn::Clockwise(degrees) => {
                self.info(&format!("Rotating clockwise {} degrees...", degrees))
            }
            Turn::CounterClockwise(degrees) => {
                self.info(&format!("Rotating counter-clockwise {} degrees...", degrees))
            }
            Turn::None => (),
        }
        if let Some(rotation) = turn.command() {
            self.command(rotation).await?;
        }

        self.info(&format!("Moving forward {} cm...", course.distance));
        self.command(Command::MoveForward(course.distance)).await?;

        self.pose = Pose::new(x, y, course.heading);
        self.info(&format!("Location updated to {}", self.pose));

        Ok(())
    }

    /// Land, wait for `duration`, and take off again
    ///
    /// Fails with [Error::InvalidState], without waiting, if the vehicle is grounded. Dropping the returned future
    /// during the wait cancels it and leaves the vehicle on the ground.
    pub async fn pit_stop(&mut self, duration: Duration) -> Result<()> {
        if !self.is_flying() {
            return Err(self.bad_command(Error::InvalidState(
                "cannot make a pit stop, vehicle is grounded".to_owned(),
            )));
        }

        self.info(&format!("Pit stop for {:?}...", duration));
        self.touch_down().await?;
        self.timer.sleep(duration).await;
        self.take_off().await?;
        self.info("Pit stop done");

        Ok(())
    }

    /// Fly the edges of the bounds, with two pit stops
    ///
    /// Starting from the origin: take off, fly to `(0, max_y)`, pit stop, fly to `(max_x, max_y)`, pit stop, fly to
    /// `(max_x, 0)` and back to the origin, then land. Must start grounded at the origin.
    pub async fn fly_square_path(&mut self) -> Result<()> {
        let (max_x, max_y) = (self.config.bounds.max_x(), self.config.bounds.max_y());
        let pause = self.config.pit_stop_duration;

        self.info("Flying square path");
        self.initiate_flight().await?;
        self.fly_to_location(0.0, max_y).await?;
        self.pit_stop(pause).await?;
        self.fly_to_location(max_x, max_y).await?;
        self.pit_stop(pause).await?;
        self.fly_to_location(max_x, 0.0).await?;
        self.fly_to_location(0.0, 0.0).await?;
        self.finish_flight().await?;
        self.info("Square path done");

        Ok(())
    }

    async fn take_off(&mut self) -> Result<()> {
        self.info("Taking off...");
        self.command(Command::Takeoff).await?;
        self.state = FlightState::Flying;
        self.info("Vehicle is flying");

        Ok(())
    }

    async fn touch_down(&mut self) -> Result<()> {
        self.info("Landing...");
        self.command(Command::Land).await?;
        self.state = FlightState::Grounded;
        self.info("Vehicle is grounded");

        Ok(())
    }

    async fn command(&self, command: Command) -> Result<()> {
        let result = self.vehicle.execute(command).await;
        if let Err(e) = &result {
            self.flight_log
                .error(&format!("Vehicle command '{}' failed: {}", command, e));
        }

        result
    }

    fn bad_command(&self, error: Error) -> Error {
        self.flight_log
            .error(&format!("ERROR - BAD_COMMAND: {}", error));
        error
    }

    fn info(&self, message: &str) {
        self.flight_log.info(message);
    }
}
