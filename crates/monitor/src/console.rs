//! Console banner renderer

use alerting::{advisory_text, severity_color, AlertColor, VisualSink};
use perception::PerceptionFrame;
use state_fusion::Alert;

/// Writes color-coded alert banners to the terminal.
///
/// Stands in for the on-frame overlay renderer: same severity colors, same
/// 0.5 s blinking indicator, just aimed at a TTY instead of a video frame.
#[derive(Debug, Default)]
pub struct ConsoleBanner;

fn ansi(color: AlertColor) -> &'static str {
    match color {
        AlertColor::Red => "\x1b[1;31m",
        AlertColor::Orange => "\x1b[1;38;5;208m",
        AlertColor::Yellow => "\x1b[1;33m",
    }
}

impl VisualSink<PerceptionFrame> for ConsoleBanner {
    fn draw(&mut self, alert: &Alert, _frame: &mut PerceptionFrame, now_ms: u64) {
        // Indicator blinks with a 0.5 s phase
        let indicator = if (now_ms / 500) % 2 == 0 { "●" } else { "○" };
        println!(
            "{}{} [{}] {}\x1b[0m  {}",
            ansi(severity_color(alert.severity)),
            indicator,
            alert.kind.as_str(),
            alert.message,
            advisory_text(alert.kind),
        );
    }
}
