//! DriveGuard Monitor Host
//!
//! Wires one monitoring session together: a perception source feeding the
//! fusion engine, the dispatcher deciding what surfaces, and the console
//! banner plus speech collaborators rendering the result. The fusion and
//! dispatch layers never see a clock or a renderer; everything impure
//! lives here.

use std::time::{Duration, Instant};

use alerting::{AlertDispatcher, DispatchConfig, DispatchDecision, SpeechSink, VisualSink};
use perception::{PerceptionFrame, PerceptionSource};
use serde::{Deserialize, Serialize};
use state_fusion::{ConfigError, FusionConfig, SignalFusion, StateSnapshot};
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

pub mod console;
pub mod scripted;
pub mod speech;

use console::ConsoleBanner;
use speech::{CommandSpeech, NullSpeech};

/// Host settings, layered from `driveguard.toml` and `DRIVEGUARD_*`
/// environment variables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorSettings {
    /// Frame loop rate (frames per second)
    pub fps: u32,
    /// External command invoked with the spoken message as its argument;
    /// speech is muted when unset
    pub speech_command: Option<String>,
    /// Emit the per-frame snapshot as a JSON debug line when a rule fires
    pub log_snapshots: bool,
    /// Fusion engine thresholds
    pub fusion: FusionConfig,
    /// Dispatcher throttling
    pub dispatch: DispatchConfig,
}

impl Default for MonitorSettings {
    fn default() -> Self {
        Self {
            fps: 15,
            speech_command: None,
            log_snapshots: false,
            fusion: FusionConfig::default(),
            dispatch: DispatchConfig::default(),
        }
    }
}

/// Initialize the global tracing subscriber
pub fn init_logging() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");
}

/// Load host settings from the optional config file and environment
pub fn load_settings() -> Result<MonitorSettings, config::ConfigError> {
    let layered = config::Config::builder()
        .add_source(config::File::with_name("driveguard").required(false))
        .add_source(config::Environment::with_prefix("DRIVEGUARD").separator("__"))
        .build()?;

    layered.try_deserialize()
}

/// One monitoring session: a fusion engine and dispatcher pair owned
/// together, never shared with another session.
pub struct MonitorSession {
    id: Uuid,
    started: Instant,
    fusion: SignalFusion,
    dispatcher: AlertDispatcher,
}

impl MonitorSession {
    pub fn new(settings: &MonitorSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            id: Uuid::new_v4(),
            started: Instant::now(),
            fusion: SignalFusion::new(settings.fusion.clone())?,
            dispatcher: AlertDispatcher::new(settings.dispatch.clone()),
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Milliseconds since the session started
    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Analyze one frame and decide what surfaces
    pub fn process(
        &mut self,
        frame: &PerceptionFrame,
        now_ms: u64,
    ) -> (StateSnapshot, DispatchDecision) {
        let (snapshot, alerts) = self.fusion.analyze(frame, now_ms);
        let decision = self.dispatcher.dispatch(&alerts, now_ms);
        (snapshot, decision)
    }
}

/// Run the frame loop until the source ends
pub async fn run_session<S: PerceptionSource>(
    settings: &MonitorSettings,
    mut source: S,
) -> anyhow::Result<()> {
    let mut session = MonitorSession::new(settings)?;
    info!(session = %session.id(), fps = settings.fps, "session started");

    let mut banner = ConsoleBanner::default();
    let speech: Box<dyn SpeechSink> = match &settings.speech_command {
        Some(command) => Box::new(CommandSpeech::new(command.clone())),
        None => Box::new(NullSpeech),
    };

    let period = Duration::from_millis(1_000 / settings.fps.max(1) as u64);
    let mut ticker = tokio::time::interval(period);
    let mut frames = 0u64;
    let mut accepted = 0u64;

    loop {
        ticker.tick().await;
        let now_ms = session.elapsed_ms();
        let Some(mut frame) = source.next_frame(now_ms) else {
            break;
        };

        let (snapshot, decision) = session.process(&frame, now_ms);
        frames += 1;
        accepted += decision.accepted.len() as u64;

        if settings.log_snapshots && snapshot.any_active() {
            debug!(snapshot = %serde_json::to_string(&snapshot)?, "frame state");
        }

        for alert in &decision.accepted {
            banner.draw(alert, &mut frame, now_ms);
        }
        if let Some(message) = &decision.speech {
            speech.say(message);
        }
    }

    info!(frames, alerts = accepted, "session ended");
    Ok(())
}
