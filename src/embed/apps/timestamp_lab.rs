//! TimestampLab embedded application
//!
//! Shows a live clock and converts shared messages that parse as unix
//! timestamps. Anything else is displayed as plain text.

use chrono::{DateTime, Utc};

use crate::domain::message::Notification;

use super::EmbeddedApp;

pub const SOURCE: &str = "embedded/timestamp-lab";

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// What the last shared message turned out to be
enum Probe {
    /// A parseable unix timestamp, in seconds
    Epoch { seconds: i64, utc: DateTime<Utc> },
    /// Anything that is not a representable timestamp
    Raw(String),
}

pub struct TimestampLab {
    now: DateTime<Utc>,
    probe: Option<Probe>,
}

impl TimestampLab {
    pub fn new() -> Self {
        Self {
            now: Utc::now(),
            probe: None,
        }
    }

    fn probe_lines(&self) -> Vec<String> {
        match &self.probe {
            None => vec!["send a unix timestamp from the shell to convert it".to_owned()],
            Some(Probe::Epoch { seconds, utc }) => vec![
                format!("shared timestamp: {seconds}"),
                format!("  utc:   {}", utc.format(DATE_FORMAT)),
                format!("  age:   {} seconds", self.now.timestamp() - seconds),
            ],
            Some(Probe::Raw(text)) => {
                vec![format!("shared text: {text} (not a unix timestamp)")]
            }
        }
    }
}

impl Default for TimestampLab {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddedApp for TimestampLab {
    fn on_notification(&mut self, note: Notification) {
        let Notification::SharedMessage { message } = note;
        let parsed = message
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|seconds| {
                DateTime::from_timestamp(seconds, 0).map(|utc| Probe::Epoch { seconds, utc })
            });
        self.probe = Some(parsed.unwrap_or(Probe::Raw(message)));
    }

    fn tick(&mut self) {
        self.now = Utc::now();
    }

    fn render(&self) -> Vec<String> {
        let mut lines = vec![
            "TimestampLab".to_owned(),
            String::new(),
            format!("now:  {}", self.now.format(DATE_FORMAT)),
            format!("unix: {}", self.now.timestamp()),
            String::new(),
        ];
        lines.extend(self.probe_lines());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_message_is_converted() {
        let mut app = TimestampLab::new();
        app.on_notification(Notification::shared("0"));

        let view = app.render();
        assert!(view.iter().any(|line| line.contains("shared timestamp: 0")));
        assert!(view.iter().any(|line| line.contains("1970-01-01 00:00:00 UTC")));
    }

    #[test]
    fn surrounding_whitespace_does_not_defeat_parsing() {
        let mut app = TimestampLab::new();
        app.on_notification(Notification::shared("  1700000000  "));

        let view = app.render();
        assert!(view.iter().any(|line| line.contains("shared timestamp: 1700000000")));
    }

    #[test]
    fn non_numeric_message_falls_back_to_raw_text() {
        let mut app = TimestampLab::new();
        app.on_notification(Notification::shared("hello"));

        let view = app.render();
        assert!(view.iter().any(|line| line.contains("shared text: hello")));
    }

    #[test]
    fn unrepresentable_timestamp_falls_back_to_raw_text() {
        let mut app = TimestampLab::new();
        app.on_notification(Notification::shared(i64::MAX.to_string()));

        let view = app.render();
        assert!(view.iter().any(|line| line.contains("not a unix timestamp")));
    }

    #[test]
    fn render_always_includes_a_clock() {
        let app = TimestampLab::new();
        let view = app.render();
        assert!(view.iter().any(|line| line.starts_with("now:")));
        assert!(view.iter().any(|line| line.starts_with("unix:")));
    }
}
