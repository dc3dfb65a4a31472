use crate::app::state::AppState;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();

    if app.playlist.is_empty() {
        lines.push(Line::styled(
            "(empty)",
            Style::default().fg(app.theme.color_subtext()),
        ));
    } else {
        for (i, track) in app.playlist.tracks.iter().enumerate() {
            if i >= area.height as usize {
                break;
            }
            let prefix = if app.playlist.current == i { "[>]" } else { "   " };
            let label = format!("{} {:02}. {}", prefix, i + 1, track.name);
            let label = truncate_to_width(&label, area.width as usize);

            let mut style = Style::default().fg(app.theme.color_text());
            if i == app.playlist.selected {
                style = Style::default()
                    .fg(app.theme.color_base())
                    .bg(app.theme.color_accent())
                    .add_modifier(Modifier::BOLD);
            }
            lines.push(Line::styled(label, style));
        }
    }

    f.render_widget(Paragraph::new(lines), area);
}

fn truncate_to_width(s: &str, max: usize) -> String {
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max {
            break;
        }
        used += w;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::truncate_to_width;

    #[test]
    fn truncation_respects_display_width() {
        assert_eq!(truncate_to_width("woodpecker", 4), "wood");
        assert_eq!(truncate_to_width("短い名前", 5), "短い");
        assert_eq!(truncate_to_width("dog", 10), "dog");
    }
}
