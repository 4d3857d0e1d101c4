// Test doubles shared by the integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_executors::Timer;
use async_trait::async_trait;
use futures::future::BoxFuture;

use quad_navigator::flight_log::MemoryLog;
use quad_navigator::vehicle::{Command, Vehicle};
use quad_navigator::{Error, Navigator, NavigatorConfig, Result};

/// What the vehicle and the timer were asked to do, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Command(Command),
    Wait(Duration),
}

#[derive(Debug, Default, Clone)]
pub struct Recorder {
    events: Arc<Mutex<Vec<Event>>>,
}

impl Recorder {
    pub fn events(&self) -> Vec<Event> {
        self.events.lock().unwrap().clone()
    }

    pub fn commands(&self) -> Vec<Command> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Command(c) => Some(c),
                Event::Wait(_) => None,
            })
            .collect()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    fn push(&self, event: Event) {
        self.events.lock().unwrap().push(event);
    }
}

type FailWhen = Arc<dyn Fn(&Command) -> bool + Send + Sync>;

/// Vehicle recording every command, optionally rejecting some
#[derive(Clone)]
pub struct RecordingVehicle {
    recorder: Recorder,
    fail_when: Option<FailWhen>,
}

impl RecordingVehicle {
    pub fn new(recorder: Recorder) -> Self {
        Self {
            recorder,
            fail_when: None,
        }
    }

    pub fn failing_when(
        recorder: Recorder,
        fail_when: impl Fn(&Command) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            recorder,
            fail_when: Some(Arc::new(fail_when)),
        }
    }

    fn record(&self, command: Command) -> Result<()> {
        if let Some(fail_when) = &self.fail_when {
            if fail_when(&command) {
                return Err(Error::CommandRejected("error".to_owned()));
            }
        }
        self.recorder.push(Event::Command(command));
        Ok(())
    }
}

#[async_trait]
impl Vehicle for RecordingVehicle {
    async fn connect(&self) -> Result<()> {
        self.record(Command::Connect)
    }

    async fn takeoff(&self) -> Result<()> {
        self.record(Command::Takeoff)
    }

    async fn land(&self) -> Result<()> {
        self.record(Command::Land)
    }

    async fn rotate_clockwise(&self, degrees: f64) -> Result<()> {
        self.record(Command::RotateClockwise(degrees))
    }

    async fn rotate_counter_clockwise(&self, degrees: f64) -> Result<()> {
        self.record(Command::RotateCounterClockwise(degrees))
    }

    async fn move_forward(&self, centimeters: f64) -> Result<()> {
        self.record(Command::MoveForward(centimeters))
    }
}

/// Timer that records the requested wait and returns at once
#[derive(Debug, Clone)]
pub struct InstantTimer {
    recorder: Recorder,
}

impl InstantTimer {
    pub fn new(recorder: Recorder) -> Self {
        Self { recorder }
    }
}

impl Timer for InstantTimer {
    fn sleep(&self, dur: Duration) -> BoxFuture<'static, ()> {
        self.recorder.push(Event::Wait(dur));
        Box::pin(futures::future::ready(()))
    }
}

/// Timer that records the requested wait and never fires
#[derive(Debug, Clone)]
pub struct StalledTimer {
    recorder: Recorder,
}

impl StalledTimer {
    pub fn new(recorder: Recorder) -> Self {
        Self { recorder }
    }
}

impl Timer for StalledTimer {
    fn sleep(&self, dur: Duration) -> BoxFuture<'static, ()> {
        self.recorder.push(Event::Wait(dur));
        Box::pin(futures::future::pending())
    }
}

pub type TestNavigator = Navigator<RecordingVehicle, InstantTimer>;

/// Navigator on a recording vehicle, with its recorder and captured log
pub fn navigator(config: NavigatorConfig) -> (TestNavigator, Recorder, MemoryLog) {
    let _ = env_logger::builder().is_test(true).try_init();

    let recorder = Recorder::default();
    let flight_log = MemoryLog::new();
    let navigator = Navigator::with_config(
        RecordingVehicle::new(recorder.clone()),
        InstantTimer::new(recorder.clone()),
        config,
    )
    .with_flight_log(flight_log.clone());

    (navigator, recorder, flight_log)
}

/// Asserts `command` is a forward move of about `centimeters`
pub fn assert_move(command: &Command, centimeters: f64) {
    match command {
        Command::MoveForward(distance) => {
            approx::assert_relative_eq!(*distance, centimeters, epsilon = 1e-6)
        }
        other => panic!("expected a forward move of {} cm, got {:?}", centimeters, other),
    }
}
