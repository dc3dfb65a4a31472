use crate::app::state::AppState;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let w = area.width as usize;
    if w == 0 {
        return;
    }

    let ratio = (app.player.percentage / 100.0).clamp(0.0, 1.0) as f32;

    // knob moves on [0, w-1]
    let knob = if w <= 1 {
        0usize
    } else {
        (ratio * (w as f32 - 1.0)).round() as usize
    };

    let left = "─".repeat(knob);
    let right = "─".repeat(w.saturating_sub(1 + knob));

    let line = Line::from(vec![
        Span::styled(left, Style::default().fg(app.theme.color_accent2())),
        Span::styled("○", Style::default().fg(app.theme.color_accent())),
        Span::styled(right, Style::default().fg(app.theme.color_subtext())),
    ]);

    f.render_widget(Paragraph::new(line), area);
}
