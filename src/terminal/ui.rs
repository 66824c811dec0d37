use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use super::app::Editor;

pub fn draw_ui(frame: &mut Frame, editor: &Editor) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(3),    // Submitted lines
            Constraint::Length(3), // Current line
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, editor, root[0]);
    render_submitted(frame, editor, root[1]);
    render_line(frame, editor, root[2]);
    render_footer(frame, root[3]);
}

fn render_header(frame: &mut Frame, editor: &Editor, area: Rect) {
    let header = Line::from(vec![
        Span::styled(" geez ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("| "),
        Span::styled(editor.mode_label(), Style::default().fg(Color::Cyan)),
        Span::raw(" | "),
        Span::styled(editor.status.as_str(), Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_submitted(frame: &mut Frame, editor: &Editor, area: Rect) {
    // Newest lines at the bottom; older ones scroll off the top
    let visible = area.height.saturating_sub(2) as usize;
    let skip = editor.submitted.len().saturating_sub(visible);
    let lines: Vec<Line> = editor
        .submitted
        .iter()
        .skip(skip)
        .map(|text| Line::raw(text.as_str()))
        .collect();

    let block = Block::default()
        .title(" Text ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_line(frame: &mut Frame, editor: &Editor, area: Rect) {
    let preedit = editor.session.preedit();
    let line = Line::from(vec![
        Span::raw(editor.line.text()),
        Span::styled(
            preedit,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::UNDERLINED),
        ),
    ]);

    let block = Block::default()
        .title(" Input ")
        .borders(Borders::ALL)
        .border_type(BorderType::Thick);
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Line::from(Span::styled(
        " Ctrl+Space on/off | Alt+T tigrinya | Alt+A amharic | Alt+L latin | Esc cancel | Enter submit | Ctrl+C quit",
        Style::default().fg(Color::DarkGray),
    ));
    frame.render_widget(Paragraph::new(footer), area);
}
