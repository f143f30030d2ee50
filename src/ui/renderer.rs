//! Shell rendering
//!
//! Draws the navigation bar, the dropdown overlay, and either the landing
//! view or the embedded pane. Text assembly is split out of the drawing
//! functions so it can be tested without a terminal.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::app::controller::ShellController;
use crate::app::relay::MessageRelay;
use crate::app::state::View;
use crate::domain::registry::{AppId, Registry};
use crate::embed::host::EmbedHost;

pub fn draw<H: EmbedHost>(frame: &mut Frame<'_>, controller: &ShellController<H>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    let nav = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(11),
            Constraint::Min(24),
            Constraint::Percentage(45),
        ])
        .split(rows[0]);

    draw_brand(frame, nav[0]);
    draw_selector(frame, nav[1], controller);
    draw_draft_input(frame, nav[2], controller);

    match controller.view() {
        View::Landing => draw_landing(frame, rows[1], controller),
        View::Embedded(id) => draw_embedded(frame, rows[1], controller, id),
    }

    draw_status(frame, rows[2]);

    // The overlay paints last so it sits on top of the body.
    if controller.nav().dropdown_open() {
        draw_dropdown(frame, nav[1], controller);
    }
}

fn draw_brand(frame: &mut Frame<'_>, area: Rect) {
    let brand = Paragraph::new("appdeck")
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(brand, area);
}

fn draw_selector<H: EmbedHost>(frame: &mut Frame<'_>, area: Rect, controller: &ShellController<H>) {
    let current = controller.registry().descriptor(controller.nav().selected());
    let arrow = if controller.nav().dropdown_open() {
        "▴"
    } else {
        "▾"
    };
    let selector = Paragraph::new(format!("{} {arrow}", current.display_name))
        .block(Block::default().borders(Borders::ALL).title("apps (Tab)"));
    frame.render_widget(selector, area);
}

fn draw_draft_input<H: EmbedHost>(
    frame: &mut Frame<'_>,
    area: Rect,
    controller: &ShellController<H>,
) {
    let input = Paragraph::new(controller.relay().draft().to_owned()).block(
        Block::default()
            .borders(Borders::ALL)
            .title("message (Enter sends)"),
    );
    frame.render_widget(input, area);
}

fn draw_landing<H: EmbedHost>(frame: &mut Frame<'_>, area: Rect, controller: &ShellController<H>) {
    let body = Paragraph::new(landing_lines(controller.registry(), controller.relay()).join("\n"))
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Home"));
    frame.render_widget(body, area);
}

fn draw_embedded<H: EmbedHost>(
    frame: &mut Frame<'_>,
    area: Rect,
    controller: &ShellController<H>,
    id: AppId,
) {
    let name = controller.registry().descriptor(id).display_name;
    let snapshot = controller.host().snapshot();
    let text = if snapshot.is_empty() {
        format!("loading {name}...")
    } else {
        snapshot.join("\n")
    };
    let pane = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title(name));
    frame.render_widget(pane, area);
}

fn draw_dropdown<H: EmbedHost>(
    frame: &mut Frame<'_>,
    anchor: Rect,
    controller: &ShellController<H>,
) {
    let lines = dropdown_lines(controller.registry(), controller.nav().selected());
    let area = Rect {
        x: anchor.x,
        y: anchor.y.saturating_add(anchor.height),
        width: 34,
        height: lines.len() as u16 + 2,
    }
    .intersection(frame.area());
    if area.height < 3 {
        return;
    }

    frame.render_widget(Clear, area);
    let list = Paragraph::new(lines.join("\n")).block(
        Block::default()
            .borders(Borders::ALL)
            .title("select application")
            .style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(list, area);
}

fn draw_status(frame: &mut Frame<'_>, area: Rect) {
    let status = Paragraph::new("Tab apps | 1-9 pick row | Enter send | Ctrl+Q quit")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Landing page text: welcome, shared-message banner, application cards
fn landing_lines(registry: &Registry, relay: &MessageRelay) -> Vec<String> {
    let mut lines = vec![
        "Welcome to appdeck".to_owned(),
        String::new(),
        "Select an application from the dropdown to get started.".to_owned(),
        String::new(),
    ];

    if let Some(message) = relay.last_sent() {
        lines.push(format!("Current shared message: {message}"));
        lines.push(String::new());
    }

    for (row, entry) in registry.iter().enumerate() {
        if entry.is_embeddable() {
            lines.push(format!("[{}] {}: {}", row + 1, entry.display_name, entry.blurb));
        }
    }
    lines.push(String::new());
    lines.push("Open the dropdown with Tab, then press the row number to launch.".to_owned());
    lines
}

/// Dropdown rows in registry order, current selection marked
fn dropdown_lines(registry: &Registry, selected: AppId) -> Vec<String> {
    registry
        .iter()
        .enumerate()
        .map(|(row, entry)| {
            let marker = if entry.id == selected { '>' } else { ' ' };
            format!("{marker} {}. {}", row + 1, entry.display_name)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::apps::build_registry;
    use crate::embed::host::testing::RecordingHost;

    fn registry() -> Registry {
        build_registry().expect("builtin table must validate")
    }

    #[test]
    fn landing_lists_every_embeddable_app() {
        let lines = landing_lines(&registry(), &MessageRelay::new());
        assert!(lines.iter().any(|line| line.contains("SimpleTextCompare")));
        assert!(lines.iter().any(|line| line.contains("TimestampLab")));
        assert!(!lines.iter().any(|line| line.contains("[1] Home")));
    }

    #[test]
    fn landing_has_no_banner_before_any_send() {
        let lines = landing_lines(&registry(), &MessageRelay::new());
        assert!(!lines.iter().any(|line| line.contains("Current shared message")));
    }

    #[test]
    fn landing_shows_the_last_sent_message() {
        let host = RecordingHost::new();
        host.pretend_mounted(AppId::CostSense);
        let mut relay = MessageRelay::new();
        relay.update_draft("hello".to_owned());
        relay.send(&host);

        let lines = landing_lines(&registry(), &relay);
        assert!(
            lines
                .iter()
                .any(|line| line.contains("Current shared message: hello"))
        );
    }

    #[test]
    fn card_numbers_match_dropdown_rows() {
        let lines = landing_lines(&registry(), &MessageRelay::new());
        assert!(lines.iter().any(|line| line.starts_with("[2] SimpleTextCompare")));
        assert!(lines.iter().any(|line| line.starts_with("[3] TimestampLab")));
    }

    #[test]
    fn dropdown_marks_the_selected_row() {
        let lines = dropdown_lines(&registry(), AppId::TimestampLab);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("  1. Home"));
        assert!(lines[2].starts_with("> 3. TimestampLab"));
    }
}
