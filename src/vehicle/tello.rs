//! Tello SDK driver
//!
//! The Tello listens for plain text commands on UDP port 8889 and answers each of them with `ok` or `error` once the
//! action is done. The first command of a session must be `command`, which puts the drone in SDK mode.
//!
//! Replies carry no command identifier. A reply arriving after its command timed out is still queued on the socket
//! when the next command is sent, so pending datagrams are discarded before every command. A reply later than that is
//! indistinguishable from the answer to the new command.
//!
//! Rotations are only accepted between 1 and 360 degrees. A rotation rounding to 0 degrees is a no-op and is not sent.

use std::net::SocketAddr;
use std::time::Duration;

use async_executors::{Timer, TimerExt};
use async_std::net::UdpSocket;
use async_trait::async_trait;

use super::{Command, Vehicle};
use crate::{Error, Result};

const REPLY_OK: &str = "ok";
const MAX_REPLY_SIZE: usize = 1024;

/// The drone rejects `cw 0` and `ccw 0` as out of range
fn is_null_rotation(degrees: f64) -> bool {
    let null = degrees.round() == 0.0;
    if null {
        log::debug!("Skipping {} degrees rotation", degrees);
    }
    null
}

/// Tello link configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TelloConfig {
    /// Command address of the drone
    pub address: SocketAddr,
    /// Local address to bind the socket to
    pub local_address: SocketAddr,
    /// How long to wait for the reply to a command
    pub response_timeout: Duration,
}

impl Default for TelloConfig {
    fn default() -> Self {
        Self {
            address: SocketAddr::from(([192, 168, 10, 1], 8889)),
            local_address: SocketAddr::from(([0, 0, 0, 0], 8889)),
            response_timeout: Duration::from_secs(7),
        }
    }
}

/// [Vehicle] driving a Tello over its UDP SDK
///
/// The timer argument should be a timer from the crate `async_executors`, it is used to time out commands the drone
/// never answers.
pub struct Tello<T> {
    socket: UdpSocket,
    timer: T,
    config: TelloConfig,
}

impl<T: Timer + Send + Sync> Tello<T> {
    /// Open the UDP link to the drone
    ///
    /// This only binds and connects the socket, call [Vehicle::connect()] to start the SDK session.
    pub async fn open(timer: T, config: TelloConfig) -> Result<Self> {
        let socket = UdpSocket::bind(config.local_address).await?;
        socket.connect(config.address).await?;

        Ok(Self {
            socket,
            timer,
            config,
        })
    }

    /// Address of the drone
    pub fn address(&self) -> SocketAddr {
        self.config.address
    }

    /// Discard replies that arrived after their command timed out
    async fn drain_stale_replies(&self) {
        let mut buffer = [0u8; MAX_REPLY_SIZE];
        while let Ok(Ok(len)) =
            async_std::future::timeout(Duration::from_secs(0), self.socket.recv(&mut buffer)).await
        {
            log::debug!(
                "Discarding stale Tello reply: {}",
                String::from_utf8_lossy(&buffer[..len]).trim()
            );
        }
    }

    async fn send_command(&self, command: Command) -> Result<()> {
        self.drain_stale_replies().await;

        let text = command.to_string();
        self.socket.send(text.as_bytes()).await?;

        let mut buffer = [0u8; MAX_REPLY_SIZE];
        let len = match self
            .timer
            .timeout(self.config.response_timeout, self.socket.recv(&mut buffer))
            .await
        {
            Ok(received) => received?,
            Err(async_executors::TimeoutError) => return Err(Error::Timeout),
        };

        let reply = String::from_utf8_lossy(&buffer[..len]);
        let reply = reply.trim();
        if reply == REPLY_OK {
            Ok(())
        } else {
            Err(Error::CommandRejected(reply.to_owned()))
        }
    }
}

#[async_trait]
impl<T: Timer + Send + Sync> Vehicle for Tello<T> {
    async fn connect(&self) -> Result<()> {
        self.send_command(Command::Connect).await
    }

    async fn takeoff(&self) -> Result<()> {
        self.send_command(Command::Takeoff).await
    }

    async fn land(&self) -> Result<()> {
        self.send_command(Command::Land).await
    }

    async fn rotate_clockwise(&self, degrees: f64) -> Result<()> {
        if is_null_rotation(degrees) {
            return Ok(());
        }
        self.send_command(Command::RotateClockwise(degrees)).await
    }

    async fn rotate_counter_clockwise(&self, degrees: f64) -> Result<()> {
        if is_null_rotation(degrees) {
            return Ok(());
        }
        self.send_command(Command::RotateCounterClockwise(degrees)).await
    }

    async fn move_forward(&self, centimeters: f64) -> Result<()> {
        self.send_command(Command::MoveForward(centimeters)).await
    }
}
