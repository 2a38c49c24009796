use ratatui::{
    layout::Rect,
    style::Color,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn keybind(key: &'static str, pad: &'static str, action: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  "),
        Span::styled(key, Style::default().fg(Color::Magenta)),
        Span::raw(pad),
        Span::raw(action),
    ])
}

pub fn draw_help(area: Rect, f: &mut Frame) {
    let p = Paragraph::new(vec![
        Line::from("Keybinds (while editing, Esc leaves the editor first):"),
        keybind("q", " / ", "Ctrl-C  Quit"),
        keybind("i", " / ", "Enter   Edit notes"),
        keybind("y", "           ", "Copy report to clipboard"),
        keybind("s", "           ", "Save report to a file"),
        keybind("l", "           ", "Log report"),
        keybind("x", "           ", "Clear input (log survives)"),
        keybind("c", "           ", "Step 5: claim will now be closed"),
        keybind("f", "           ", "Step 5: claim will be finalized on or before FRD"),
        keybind("tab", "         ", "Switch tabs"),
        keybind("?", "           ", "Show this help"),
        Line::from(""),
        Line::from("Tips:"),
        Line::from("  Enter claim details for a comprehensive analysis."),
        Line::from("  Include customer information for better context."),
        Line::from("  Mention any special circumstances or considerations."),
        Line::from(""),
        Line::from("Recognized lines:"),
        Line::from("  Scenario: <text>                Pre Review Claim Status: <text>"),
        Line::from("  Customer called in to dispute transaction(s) as <text>"),
        Line::from("  Claim Decision: <text>          Specific Action: <text>"),
        Line::from("  Y/N flags and detail fields as <label>: <value>"),
    ])
    .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(p, area);
}
