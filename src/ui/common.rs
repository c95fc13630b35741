//! Common UI components: status bar and help overlay.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

/// Render the status bar at the bottom.
///
/// Shows the slider position, the band, and the main controls.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let result = &app.display().result;
    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", result.band.label()),
            app.theme.band_style(result.band).add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " slider {:.1} | ←/→:adjust 0-9:set ?:help q:quit",
            app.slider()
        )),
    ]);

    let paragraph = Paragraph::new(line).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the meter.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.title)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Slider",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ←/→ h/l       Fine step"),
        Line::from("  Shift+←/→     Whole step"),
        Line::from("  ↑/↓ PgUp/PgDn Whole step"),
        Line::from("  0-9           Set rating"),
        Line::from("  Home/End      Jump to 0/10"),
        Line::from("  Mouse         Click or drag track"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ?             Toggle help"),
        Line::from("  q/Esc         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 40u16.min(area.width.saturating_sub(4));
    let help_height = 18u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    frame.render_widget(Clear, help_area);
    frame.render_widget(paragraph, help_area);
}
