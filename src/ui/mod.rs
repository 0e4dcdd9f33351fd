pub mod statusbar;
pub mod theme;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph};

use crate::app::App;
use crate::format::{format_bytes, truncate_unicode};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let background = Block::default().style(Style::default().bg(app.theme.background));
    frame.render_widget(background, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);
    render_report(frame, chunks[1], app);
    render_gauges(frame, chunks[2], app);
    statusbar::render(frame, chunks[3], &app.keybinds, &app.theme);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut spans = vec![
        Span::styled(
            " vitals ",
            Style::default()
                .fg(theme.header_accent_fg)
                .bg(theme.header_accent_bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            app.snapshot.hostname.clone(),
            Style::default().fg(theme.text_primary),
        ),
        Span::raw("  "),
    ];

    if app.snapshot.alerts.is_empty() {
        spans.push(Span::styled(
            "no alerts",
            Style::default().fg(theme.text_secondary),
        ));
    } else {
        spans.push(Span::styled(
            format!("{} alert(s)", app.snapshot.alerts.len()),
            Style::default()
                .fg(theme.alert_fg)
                .add_modifier(Modifier::BOLD),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}

fn render_report(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            " Report ",
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = inner.width as usize;
    let lines: Vec<Line> = app
        .report
        .lines()
        .map(|line| {
            let text = truncate_unicode(line, width);
            let style = if line.starts_with("Alert:") {
                Style::default()
                    .fg(theme.alert_fg)
                    .add_modifier(Modifier::BOLD)
            } else if line.starts_with("Unable to") {
                Style::default()
                    .fg(theme.text_secondary)
                    .add_modifier(Modifier::ITALIC)
            } else {
                Style::default().fg(theme.text_primary)
            };
            Line::from(Span::styled(text, style))
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_gauges(frame: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_cpu_gauge(frame, halves[0], app);
    render_memory_gauge(frame, halves[1], app);
}

fn render_cpu_gauge(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            " CPU Load ",
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));

    let label = match app.snapshot.cpu_load_percent {
        Some(percent) => format!("{percent:.1}%"),
        None => "unavailable".to_string(),
    };

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(
            Style::default()
                .fg(theme.gauge_filled)
                .bg(theme.gauge_unfilled),
        )
        .ratio(app.cpu_ratio())
        .label(label);

    frame.render_widget(gauge, area);
}

fn render_memory_gauge(frame: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.overlay_border))
        .title(Span::styled(
            " Memory ",
            Style::default()
                .fg(theme.text_secondary)
                .add_modifier(Modifier::BOLD),
        ));

    let (ratio, label) = match &app.snapshot.memory {
        Some(memory) => {
            let used = memory.total_phys.saturating_sub(memory.avail_phys);
            (
                (memory.load_percent as f64 / 100.0).clamp(0.0, 1.0),
                format!(
                    "{}/{} ({}%)",
                    format_bytes(used),
                    format_bytes(memory.total_phys),
                    memory.load_percent
                ),
            )
        }
        None => (0.0, "unavailable".to_string()),
    };

    let gauge = Gauge::default()
        .block(block)
        .gauge_style(
            Style::default()
                .fg(theme.gauge_filled)
                .bg(theme.gauge_unfilled),
        )
        .ratio(ratio)
        .label(label);

    frame.render_widget(gauge, area);
}
