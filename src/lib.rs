//! # Quadcopter waypoint navigator
//!
//! This crate flies a quadcopter from waypoint to waypoint on a bounded 2D grid using dead reckoning: it keeps an
//! estimate of the vehicle position and heading, and turns each requested `(x, y)` target into a rotation followed by
//! a forward move. There is no sensing, no obstacle avoidance and no path planning: waypoints are flown in the order
//! they are given.
//!
//! ## Components
//!
//! | Module | Role |
//! |--------|------|
//! | [Navigator] | Flight state machine, waypoint moves, pit stops |
//! | [geometry] | Pose, bounds, heading and distance computation |
//! | [vehicle] | Vehicle control interface and its implementations |
//! | [flight_log] | Where the navigator reports what it does |
//!
//! ## Usage
//!
//! The basic procedure to use the lib is:
//!  - Open a [Vehicle](vehicle::Vehicle), for example a [Tello](vehicle::Tello) or a
//!    [ChannelVehicle](vehicle::ChannelVehicle) feeding your own link task
//!  - Create a [Navigator] from the vehicle and a timer, optionally with a [NavigatorConfig]
//!  - Call [Navigator::connect()] once
//!  - Call [Navigator::initiate_flight()], then any sequence of [Navigator::fly_to_location()] and
//!    [Navigator::pit_stop()], and finally [Navigator::finish_flight()]
//!
//! The navigator logs every step through the [`log`] crate by default, see [flight_log] to capture messages instead.
//!
//! For example:
//! ``` no_run
//! # async fn test() -> Result<(), Box<dyn std::error::Error>> {
//! use quad_navigator::vehicle::{Tello, TelloConfig};
//! use quad_navigator::Navigator;
//!
//! let tello = Tello::open(async_executors::AsyncStd, TelloConfig::default()).await?;
//! let mut navigator = Navigator::new(tello, async_executors::AsyncStd);
//!
//! navigator.connect().await?;
//! navigator.initiate_flight().await?;
//! navigator.fly_to_location(100.0, 100.0).await?;
//! navigator.pit_stop(std::time::Duration::from_secs(3)).await?;
//! navigator.fly_to_location(100.0, 0.0).await?;
//! navigator.finish_flight().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Known limitations
//!
//! Headings are computed as `atan(dy / dx)` with no quadrant correction: for targets with a smaller x than the current
//! position the vehicle faces the mirrored direction. See [Pose::course_to()].

#![warn(missing_docs)]

mod config;
mod error;
mod navigator;

pub mod flight_log;
pub mod geometry;
pub mod vehicle;

pub use crate::config::{NavigatorConfig, DEFAULT_PIT_STOP_DURATION};
pub use crate::error::{Error, Result};
pub use crate::geometry::{Bounds, Pose};
pub use crate::navigator::{FlightState, Navigator};
