//! # Vehicle control interface
//!
//! The [Navigator](crate::Navigator) never talks to a radio or a socket itself. It drives any type implementing the
//! [Vehicle] trait: six blocking-until-done actions that either succeed or fail.
//!
//! Two implementations are provided:
//!  - [ChannelVehicle] forwards each [Command] over a channel to whatever task owns the real link, and waits for its
//!    reply. This is the way to put a command queue in front of a link shared by several parts of a program.
//!  - [Tello] (feature `async-std`) speaks the Tello SDK text protocol over UDP.

use std::fmt;

use async_trait::async_trait;

use crate::Result;

mod channel;
pub use channel::{ChannelVehicle, CommandRequest};

#[cfg(feature = "async-std")]
mod tello;
#[cfg(feature = "async-std")]
pub use tello::{Tello, TelloConfig};

/// One vehicle-facing action
///
/// The [Display] implementation gives the Tello SDK text form of the command, with angles and distances rounded to
/// whole units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Open the control session
    Connect,
    /// Take off and hover
    Takeoff,
    /// Land and stop the motors
    Land,
    /// Rotate clockwise (degrees)
    RotateClockwise(f64),
    /// Rotate counter-clockwise (degrees)
    RotateCounterClockwise(f64),
    /// Fly forward (cm)
    MoveForward(f64),
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Command::Connect => write!(f, "command"),
            Command::Takeoff => write!(f, "takeoff"),
            Command::Land => write!(f, "land"),
            Command::RotateClockwise(degrees) => write!(f, "cw {}", degrees.round() as i64),
            Command::RotateCounterClockwise(degrees) => write!(f, "ccw {}", degrees.round() as i64),
            Command::MoveForward(centimeters) => {
                write!(f, "forward {}", centimeters.round() as i64)
            }
        }
    }
}

/// Vehicle Control Interface
///
/// Every call completes once the vehicle has carried out the action, or fails. Implementations must not retry on
/// their own: retry policy belongs to the caller.
#[async_trait]
pub trait Vehicle: Send + Sync {
    /// Open the control session with the vehicle
    async fn connect(&self) -> Result<()>;

    /// Take off and hover
    async fn takeoff(&self) -> Result<()>;

    /// Land
    async fn land(&self) -> Result<()>;

    /// Rotate clockwise in place
    ///
    /// * `degrees` - Rotation angle (degrees)
    async fn rotate_clockwise(&self, degrees: f64) -> Result<()>;

    /// Rotate counter-clockwise in place
    ///
    /// * `degrees` - Rotation angle (degrees)
    async fn rotate_counter_clockwise(&self, degrees: f64) -> Result<()>;

    /// Fly forward along the current heading
    ///
    /// * `centimeters` - Distance to fly (cm), fractional values are rounded by the vehicle as needed
    async fn move_forward(&self, centimeters: f64) -> Result<()>;

    /// Carry out a [Command] by calling the matching method
    async fn execute(&self, command: Command) -> Result<()> {
        match command {
            Command::Connect => self.connect().await,
            Command::Takeoff => self.takeoff().await,
            Command::Land => self.land().await,
            Command::RotateClockwise(degrees) => self.rotate_clockwise(degrees).await,
            Command::RotateCounterClockwise(degrees) => {
                self.rotate_counter_clockwise(degrees).await
            }
            Command::MoveForward(centimeters) => self.move_forward(centimeters).await,
        }
    }
}
