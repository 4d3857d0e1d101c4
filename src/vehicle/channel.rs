use async_trait::async_trait;
use flume::{Receiver, Sender};

use super::{Command, Vehicle};
use crate::Result;

/// A [Command] waiting to be carried out by the task owning the link
///
/// The owner must answer every request with [CommandRequest::respond()]. Dropping a request without answering makes
/// the waiting caller fail with [Error::Disconnected](crate::Error::Disconnected).
#[derive(Debug)]
pub struct CommandRequest {
    /// Command to carry out
    pub command: Command,
    reply: Sender<Result<()>>,
}

impl CommandRequest {
    /// Send the outcome of the command back to the caller
    ///
    /// A caller that stopped waiting is ignored.
    pub fn respond(self, result: Result<()>) {
        let _ = self.reply.send(result);
    }
}

/// [Vehicle] sending its commands over a channel
///
/// Commands are queued in order on the uplink. Each call waits for the reply to its own request before returning, so
/// a single caller never has more than one command in flight.
#[derive(Debug, Clone)]
pub struct ChannelVehicle {
    uplink: Sender<CommandRequest>,
}

impl ChannelVehicle {
    /// Create a vehicle from an existing uplink
    pub fn new(uplink: Sender<CommandRequest>) -> Self {
        Self { uplink }
    }

    /// Create a vehicle and the receiving end of its (unbounded) command queue
    pub fn unbounded() -> (Self, Receiver<CommandRequest>) {
        let (uplink, downlink) = flume::unbounded();
        (Self::new(uplink), downlink)
    }

    async fn send(&self, command: Command) -> Result<()> {
        let (reply, response) = flume::bounded(1);

        self.uplink.send_async(CommandRequest { command, reply }).await?;

        response.recv_async().await?
    }
}

#[async_trait]
impl Vehicle for ChannelVehicle {
    async fn connect(&self) -> Result<()> {
        self.send(Command::Connect).await
    }

    async fn takeoff(&self) -> Result<()> {
        self.send(Command::Takeoff).await
    }

    async fn land(&self) -> Result<()> {
        self.send(Command::Land).await
    }

    async fn rotate_clockwise(&self, degrees: f64) -> Result<()> {
        self.send(Command::RotateClockwise(degrees)).await
    }

    async fn rotate_counter_clockwise(&self, degrees: f64) -> Result<()> {
        self.send(Command::RotateCounterClockwise(degrees)).await
    }

    async fn move_forward(&self, centimeters: f64) -> Result<()> {
        self.send(Command::MoveForward(centimeters)).await
    }
}
