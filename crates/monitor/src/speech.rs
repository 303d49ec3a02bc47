//! Speech collaborators

use alerting::SpeechSink;
use std::process::Command;
use tracing::{info, warn};

/// Speaks by invoking an external command (`say`, `espeak`, ...) with the
/// message as its argument.
///
/// The invocation runs on a detached blocking worker so the frame loop
/// never waits on it; failures are logged here and never retried.
pub struct CommandSpeech {
    command: String,
}

impl CommandSpeech {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl SpeechSink for CommandSpeech {
    fn say(&self, message: &str) {
        let command = self.command.clone();
        let message = message.to_string();

        tokio::task::spawn_blocking(move || {
            match Command::new(&command).arg(&message).status() {
                Ok(status) if status.success() => {}
                Ok(status) => {
                    warn!(%command, %status, "speech command exited with failure");
                }
                Err(error) => {
                    warn!(%command, %error, "speech command failed to start");
                }
            }
        });
    }
}

/// Muted speech channel: logs what would have been spoken.
pub struct NullSpeech;

impl SpeechSink for NullSpeech {
    fn say(&self, message: &str) {
        info!(%message, "speech (muted)");
    }
}
