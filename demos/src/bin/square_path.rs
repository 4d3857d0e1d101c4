// Demo that flies a Tello around the edges of a square, landing twice on the way
//
// Usage: square_path [TELLO_ADDRESS [MAX_X MAX_Y]]
//
// The laptop must be connected to the Tello access point. Everything the navigator does is logged to the console
// and to a new file in the logs/ directory.

use std::fs::{self, File};
use std::io::{self, Stdout, Write};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use env_logger::{Env, Target};
use quad_navigator::vehicle::{Tello, TelloConfig};
use quad_navigator::{Bounds, Navigator, NavigatorConfig};

const LOG_DIR: &str = "logs";

/// Writes everything to both the console and a file
struct Tee {
    file: File,
    console: Stdout,
}

impl Write for Tee {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write_all(buf)?;
        self.console.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()?;
        self.console.flush()
    }
}

/// Next free log file: logs/log-<number of files already there>.log
fn logfile_path() -> io::Result<PathBuf> {
    fs::create_dir_all(LOG_DIR)?;
    let count = fs::read_dir(LOG_DIR)?.count();

    Ok(Path::new(LOG_DIR).join(format!("log-{}.log", count)))
}

fn logger_setup() -> io::Result<PathBuf> {
    let path = logfile_path()?;
    let tee = Tee {
        file: File::create(&path)?,
        console: io::stdout(),
    };

    env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{:<5}]  {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            )
        })
        .target(Target::Pipe(Box::new(tee)))
        .init();

    Ok(path)
}

fn parse_args() -> Result<(TelloConfig, NavigatorConfig), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut tello = TelloConfig::default();
    if let Some(address) = args.get(0) {
        tello.address = address.parse::<SocketAddr>()?;
    }

    let mut navigator = NavigatorConfig::default();
    if let (Some(max_x), Some(max_y)) = (args.get(1), args.get(2)) {
        navigator = navigator.with_bounds(Bounds::new(max_x.parse()?, max_y.parse()?)?);
    }

    Ok((tello, navigator))
}

#[async_std::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logfile = logger_setup()?;
    let (tello_config, navigator_config) = parse_args()?;

    log::info!("Logging to {}", logfile.display());
    log::info!("Opening link to Tello at {} ...", tello_config.address);
    let tello = Tello::open(async_executors::AsyncStd, tello_config).await?;

    let mut navigator = Navigator::with_config(tello, async_executors::AsyncStd, navigator_config);
    navigator.connect().await?;

    log::info!("Commencing test flight...");
    if let Err(e) = navigator.fly_square_path().await {
        log::error!("Test flight aborted: {}", e);
        if navigator.is_flying() {
            log::error!("Vehicle is still airborne, land it manually");
        }
        return Err(e.into());
    }
    log::info!("Test flight ended.");

    Ok(())
}
