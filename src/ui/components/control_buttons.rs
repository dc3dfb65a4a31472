use crate::app::state::{AppState, Transport};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

// Button order is fixed; hit testing divides the row into five equal
// segments in the same order.
pub const LABELS: [&str; 5] = ["back", "play", "pause", "stop", "next"];

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let active = |t: Transport| app.player.transport == t;

    let spans = vec![
        button(app, LABELS[0], false),
        button(app, LABELS[1], active(Transport::Playing)),
        button(app, LABELS[2], active(Transport::Paused)),
        button(app, LABELS[3], active(Transport::Stopped)),
        button(app, LABELS[4], false),
    ];

    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(ratatui::layout::Alignment::Center),
        area,
    );
}

fn button(app: &AppState, label: &str, active: bool) -> Span<'static> {
    let style = if active {
        Style::default()
            .fg(app.theme.color_base())
            .bg(app.theme.color_accent())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.color_text())
    };
    Span::styled(format!("[{label}] "), style)
}
