/// [Result] alias for return types of the crate API
pub type Result<T> = std::result::Result<T, Error>;

/// Error enum type
#[derive(Debug)]
pub enum Error {
    /// The requested waypoint cannot be flown to. The String contains the reason.
    ///
    /// Raised before any command reaches the vehicle.
    InvalidTarget(String),
    /// The operation is not allowed in the current flight state. The String contains the reason.
    ///
    /// Raised before any command reaches the vehicle.
    InvalidState(String),
    /// Navigator or driver configuration error. The String contains the reason.
    InvalidConfig(String),
    /// The vehicle answered a command with something else than `ok`. The String contains the reply.
    CommandRejected(String),
    /// Operation timed out waiting for the vehicle to reply.
    Timeout,
    /// The link to the vehicle is gone.
    Disconnected,
    /// Socket level error. Returns the [error from std](std::io::Error).
    IoError(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidTarget(reason) => write!(f, "invalid target: {}", reason),
            Error::InvalidState(reason) => write!(f, "invalid state: {}", reason),
            Error::InvalidConfig(reason) => write!(f, "invalid configuration: {}", reason),
            Error::CommandRejected(reply) => write!(f, "command rejected by vehicle: {}", reply),
            Error::Timeout => write!(f, "timed out waiting for the vehicle"),
            Error::Disconnected => write!(f, "vehicle disconnected"),
            Error::IoError(e) => write!(f, "i/o error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::IoError(error)
    }
}

impl From<flume::RecvError> for Error {
    fn from(_: flume::RecvError) -> Self {
        self::Error::Disconnected
    }
}

impl<T> From<flume::SendError<T>> for Error {
    fn from(_: flume::SendError<T>) -> Self {
        self::Error::Disconnected
    }
}
