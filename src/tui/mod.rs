mod clipboard;
mod help;
mod state;

use crate::cli::Cli;
use crate::model::{Disposition, StepStatus, DISPOSITION_HEADING};
use crate::report;
use crate::session::Session;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::Color,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
    Terminal,
};
use state::UiState;
use std::{io, time::Duration, time::Instant};

pub fn run(args: Cli) -> Result<()> {
    let mut session = Session::new()?;
    if let Some(path) = args.input.as_deref() {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read claim notes from {}", path.display()))?;
        session.set_input(text);
    }

    enable_raw_mode().context("enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).ok();

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;
    terminal.clear().ok();

    let mut ui = UiState::new(session);
    ui.show_gate_status();

    let tick_rate = Duration::from_millis(100);
    let mut last_tick = Instant::now();

    let res = loop {
        if last_tick.elapsed() >= tick_rate {
            terminal.draw(|f| draw(f.area(), f, &ui)).ok();
            last_tick = Instant::now();
        }

        // Poll input with a short timeout to avoid blocking the render loop.
        if event::poll(Duration::from_millis(10)).unwrap_or(false) {
            if let Ok(Event::Key(k)) = event::read() {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key(&mut ui, k) {
                    break Ok(());
                }
            }
        }
    };

    disable_raw_mode().ok();
    let mut stdout = io::stdout();
    execute!(stdout, LeaveAlternateScreen).ok();
    res
}

/// Apply one key press. Returns true to quit.
fn handle_key(ui: &mut UiState, k: KeyEvent) -> bool {
    // Global keys work in both modes.
    match (k.modifiers, k.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => return true,
        (_, KeyCode::Tab) => {
            ui.tab = (ui.tab + 1) % 3;
            return false;
        }
        _ => {}
    }

    if ui.tab == 0 && ui.editing {
        match k.code {
            KeyCode::Esc => {
                ui.editing = false;
                ui.info = "Command mode. Press i to keep editing.".into();
            }
            KeyCode::Enter => {
                ui.session.insert_newline();
                ui.show_gate_status();
            }
            KeyCode::Backspace => {
                ui.session.backspace();
                ui.show_gate_status();
            }
            KeyCode::Char(c) => {
                // Leave Ctrl/Alt chords alone; only plain keystrokes edit.
                if !k
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    ui.session.insert_char(c);
                    ui.show_gate_status();
                }
            }
            _ => {}
        }
        return false;
    }

    match (k.modifiers, k.code) {
        (_, KeyCode::Char('q')) => return true,
        (_, KeyCode::Char('i')) | (_, KeyCode::Enter) => {
            ui.tab = 0;
            ui.editing = true;
            ui.show_gate_status();
        }
        (_, KeyCode::Char('y')) => copy_report(ui),
        (_, KeyCode::Char('s')) => save_report(ui),
        (_, KeyCode::Char('l')) => log_report(ui),
        (_, KeyCode::Char('x')) => {
            ui.session.clear_input();
            ui.info = "Input cleared. Ready for new analysis!".into();
        }
        (_, KeyCode::Char('c')) => choose_disposition(ui, Disposition::CloseNow),
        (_, KeyCode::Char('f')) => choose_disposition(ui, Disposition::FinalizeByFrd),
        (_, KeyCode::Char('?')) => ui.tab = 2,
        _ => {}
    }
    false
}

fn copy_report(ui: &mut UiState) {
    match ui.session.summary() {
        Some(text) => match clipboard::copy_to_clipboard(&text) {
            Ok(()) => ui.info = "Result copied to clipboard!".into(),
            Err(e) => ui.info = format!("Clipboard copy failed: {e:#}"),
        },
        None => ui.info = "Report locked. Complete all four steps first.".into(),
    }
}

fn save_report(ui: &mut UiState) {
    let Some(text) = ui.session.summary() else {
        ui.info = "No completed report to save yet.".into();
        return;
    };
    let name = report::save_file_name();
    match std::fs::write(&name, &text) {
        Ok(()) => ui.info = format!("Saved: {}", name),
        Err(e) => ui.info = format!("Save failed: {e:#}"),
    }
}

fn log_report(ui: &mut UiState) {
    if ui.session.log_summary() {
        ui.info = "Output logged successfully!".into();
    } else {
        ui.info = "Nothing to log yet. Complete all four steps first.".into();
    }
}

fn choose_disposition(ui: &mut UiState, d: Disposition) {
    if ui.session.choose_disposition(d) {
        ui.info = "All steps completed. You can now copy the output.".into();
    } else if ui.session.disposition().is_some() {
        ui.info = "Disposition already recorded for this review.".into();
    } else {
        ui.info = "Step 5 is locked. Complete all four steps first.".into();
    }
}

fn draw(area: Rect, f: &mut ratatui::Frame, ui: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(4),
        ])
        .split(area);

    let tabs = Tabs::new(vec![
        Line::from("Workspace"),
        Line::from("Log"),
        Line::from("Help"),
    ])
    .select(ui.tab)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("claim-review-cli"),
    )
    .highlight_style(Style::default().fg(Color::Yellow));
    f.render_widget(tabs, chunks[0]);

    match ui.tab {
        0 => draw_workspace(chunks[1], f, ui),
        1 => draw_log(chunks[1], f, ui),
        _ => help::draw_help(chunks[1], f),
    }

    draw_status(chunks[2], f, ui);
}

fn draw_workspace(area: Rect, f: &mut ratatui::Frame, ui: &UiState) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(12)])
        .split(cols[0]);

    draw_editor(left[0], f, ui);
    draw_output(left[1], f, ui);
    draw_steps(cols[1], f, ui);
}

fn draw_editor(area: Rect, f: &mut ratatui::Frame, ui: &UiState) {
    let mut lines: Vec<Line> = ui
        .session
        .input()
        .split('\n')
        .map(|l| Line::from(l.to_string()))
        .collect();
    if ui.editing {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("▌", Style::default().fg(Color::Yellow)));
        }
    }

    // Follow the caret: keep the last lines visible once the text outgrows
    // the panel.
    let inner_height = area.height.saturating_sub(2);
    let scroll_y = (lines.len() as u16).saturating_sub(inner_height);

    let title = if ui.editing {
        "Claim Notes (editing)"
    } else {
        "Claim Notes"
    };
    let p = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title))
        .scroll((scroll_y, 0));
    f.render_widget(p, area);
}

fn draw_output(area: Rect, f: &mut ratatui::Frame, ui: &UiState) {
    match ui.session.summary() {
        Some(summary) => {
            let p = Paragraph::new(summary)
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Green))
                        .title("Report"),
                );
            f.render_widget(p, area);
        }
        None => {
            let cover = Paragraph::new(Line::from(Span::styled(
                "Complete all four steps to unlock the report.",
                Style::default().fg(Color::DarkGray),
            )))
            .block(Block::default().borders(Borders::ALL).title("Report (locked)"));
            f.render_widget(cover, area);
        }
    }
}

fn draw_steps(area: Rect, f: &mut ratatui::Frame, ui: &UiState) {
    let snapshot = ui.session.snapshot();
    let complete = snapshot.is_complete();

    let mut constraints = vec![
        Constraint::Length(9),
        Constraint::Min(7),
        Constraint::Length(3),
        Constraint::Length(3),
    ];
    if complete {
        constraints.push(Constraint::Length(4));
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (row, status) in rows.iter().zip(snapshot.steps.iter()) {
        draw_step_panel(*row, f, status);
    }
    if complete {
        draw_disposition_panel(rows[4], f, ui);
    }
}

fn draw_step_panel(area: Rect, f: &mut ratatui::Frame, status: &StepStatus) {
    let mut lines: Vec<Line> = status
        .payload
        .lines()
        .map(|l| Line::from(l.to_string()))
        .collect();
    if let Some(hint) = report::requirements_hint(&status.missing) {
        lines.push(Line::from(Span::styled(
            hint,
            Style::default().fg(Color::DarkGray),
        )));
    }

    let border = if status.complete() {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let p = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(status.step.heading()),
    );
    f.render_widget(p, area);
}

fn draw_disposition_panel(area: Rect, f: &mut ratatui::Frame, ui: &UiState) {
    let lines = match ui.session.disposition() {
        Some(d) => vec![
            Line::from(d.sentence()),
            Line::from(Span::styled(
                "Choices locked for this review.",
                Style::default().fg(Color::DarkGray),
            )),
        ],
        None => vec![
            Line::from(vec![
                Span::styled("c", Style::default().fg(Color::Magenta)),
                Span::raw("  Claim will now be closed."),
            ]),
            Line::from(vec![
                Span::styled("f", Style::default().fg(Color::Magenta)),
                Span::raw("  Claim will be finalized on or before FRD."),
            ]),
        ],
    };

    let p = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(DISPOSITION_HEADING),
    );
    f.render_widget(p, area);
}

fn draw_log(area: Rect, f: &mut ratatui::Frame, ui: &UiState) {
    let log = ui.session.log();
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(vec![
        Span::raw(format!("Log ({} entries) - ", log.len())),
        Span::styled("l", Style::default().fg(Color::Magenta)),
        Span::raw(": log current report, "),
        Span::styled("tab", Style::default().fg(Color::Magenta)),
        Span::raw(": switch tabs"),
    ]));
    lines.push(Line::from(""));

    if log.is_empty() {
        lines.push(Line::from(Span::styled(
            "No reports logged yet.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(vec![
            Span::styled("Info", Style::default().fg(Color::Gray)),
            Span::raw("  /  "),
            Span::styled("Date", Style::default().fg(Color::Gray)),
        ]));
        // One row per entry, insertion order, newest last.
        let info_width = (area.width as usize).saturating_sub(26).max(10);
        for entry in log.entries() {
            let first_line = entry.info.lines().next().unwrap_or("");
            let shown: String = if first_line.chars().count() > info_width {
                let cut: String = first_line.chars().take(info_width - 1).collect();
                format!("{}…", cut)
            } else {
                first_line.to_string()
            };
            lines.push(Line::from(vec![
                Span::raw(shown),
                Span::raw("  "),
                Span::styled(entry.date.clone(), Style::default().fg(Color::Gray)),
            ]));
        }
    }

    let p = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Log"));
    f.render_widget(p, area);
}

fn draw_status(area: Rect, f: &mut ratatui::Frame, ui: &UiState) {
    let mode_hint = if ui.tab == 0 && ui.editing {
        Line::from(vec![
            Span::styled("Esc", Style::default().fg(Color::Magenta)),
            Span::raw(": command mode, "),
            Span::styled("tab", Style::default().fg(Color::Magenta)),
            Span::raw(": switch tabs, "),
            Span::styled("Ctrl-C", Style::default().fg(Color::Magenta)),
            Span::raw(": quit"),
        ])
    } else {
        Line::from(vec![
            Span::styled("i", Style::default().fg(Color::Magenta)),
            Span::raw(": edit, "),
            Span::styled("y", Style::default().fg(Color::Magenta)),
            Span::raw(": copy, "),
            Span::styled("s", Style::default().fg(Color::Magenta)),
            Span::raw(": save, "),
            Span::styled("l", Style::default().fg(Color::Magenta)),
            Span::raw(": log, "),
            Span::styled("x", Style::default().fg(Color::Magenta)),
            Span::raw(": clear, "),
            Span::styled("c", Style::default().fg(Color::Magenta)),
            Span::raw("/"),
            Span::styled("f", Style::default().fg(Color::Magenta)),
            Span::raw(": step 5, "),
            Span::styled("q", Style::default().fg(Color::Magenta)),
            Span::raw(": quit"),
        ])
    };

    let p = Paragraph::new(vec![Line::from(ui.info.clone()), mode_hint])
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(p, area);
}
