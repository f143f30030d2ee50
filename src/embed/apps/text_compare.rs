//! SimpleTextCompare embedded application
//!
//! Compares two text buffers line by line. A shared message from the shell
//! replaces the right-hand buffer, so the user can diff whatever they typed
//! against the sample text.

use crate::domain::message::Notification;

use super::EmbeddedApp;

pub const SOURCE: &str = "embedded/text-compare";

const SAMPLE_LEFT: &[&str] = &[
    "the quick brown fox",
    "jumps over the lazy dog",
    "pack my box with five dozen jugs",
];

const SAMPLE_RIGHT: &[&str] = &[
    "the quick brown fox",
    "sleeps under the lazy dog",
    "pack my box with five dozen jugs",
];

pub struct TextCompare {
    left: Vec<String>,
    right: Vec<String>,
    shared: Option<String>,
}

impl TextCompare {
    pub fn new() -> Self {
        Self {
            left: SAMPLE_LEFT.iter().map(|line| (*line).to_owned()).collect(),
            right: SAMPLE_RIGHT.iter().map(|line| (*line).to_owned()).collect(),
            shared: None,
        }
    }

    fn comparison_rows(&self) -> Vec<String> {
        let rows = self.left.len().max(self.right.len());
        (0..rows)
            .map(|row| {
                let left = self.left.get(row).map(String::as_str).unwrap_or("");
                let right = self.right.get(row).map(String::as_str).unwrap_or("");
                let mark = if left == right { "==" } else { "!=" };
                format!("{mark} {left:<36} | {right}")
            })
            .collect()
    }
}

impl Default for TextCompare {
    fn default() -> Self {
        Self::new()
    }
}

impl EmbeddedApp for TextCompare {
    fn on_notification(&mut self, note: Notification) {
        let Notification::SharedMessage { message } = note;
        self.right = message.lines().map(str::to_owned).collect();
        self.shared = Some(message);
    }

    fn render(&self) -> Vec<String> {
        let mut lines = vec![
            "SimpleTextCompare".to_owned(),
            String::new(),
            format!("{:<39} | right", "   left"),
        ];
        lines.extend(self.comparison_rows());
        lines.push(String::new());
        match &self.shared {
            Some(message) => lines.push(format!("shared message: {message}")),
            None => lines.push("waiting for a shared message from the shell".to_owned()),
        }
        lines
    }
}
