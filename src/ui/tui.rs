use crate::app::state::AppState;
use crate::ui::borders::SOLID_BORDER;
use crate::ui::components::{control_buttons, progress_bar};
use crate::ui::panels::playlist_panel;
use crate::utils::input::Action;
use crate::utils::timefmt;
use anyhow::Result;
use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{event, terminal};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Terminal;
use std::io::{self, Stdout};

/// Rects of the clickable regions, captured while drawing so mouse events can
/// be resolved against the frame the user actually saw.
#[derive(Debug, Default, Clone, Copy)]
pub struct UiLayout {
    pub full: Rect,
    pub controls: Rect,
    pub playlist_inner: Rect,
    pub time_line: Rect,
    pub progress: Rect,
}

pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    pub fn new() -> Result<Self> {
        let stdout = io::stdout();
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(Self { terminal })
    }

    pub fn enter(&mut self) -> Result<()> {
        execute!(io::stdout(), EnterAlternateScreen, event::EnableMouseCapture)?;
        terminal::enable_raw_mode()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(io::stdout(), event::DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    pub fn draw(&mut self, app: &AppState) -> Result<UiLayout> {
        let mut layout_out = UiLayout::default();

        self.terminal.draw(|f| {
            let size = f.size();
            layout_out.full = size;

            f.render_widget(Clear, size);
            f.render_widget(
                Block::default().style(
                    Style::default()
                        .fg(app.theme.color_text())
                        .bg(app.theme.color_base()),
                ),
                size,
            );

            // small terminal: keep stable, hide everything else
            if size.width < 40 || size.height < 12 {
                f.render_widget(
                    Paragraph::new("Terminal too small")
                        .style(Style::default().fg(app.theme.color_subtext())),
                    size,
                );
                return;
            }

            // top row is the toast line, bottom row the key hint
            let body = Rect {
                x: size.x,
                y: size.y + 1,
                width: size.width,
                height: size.height - 2,
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_set(SOLID_BORDER)
                .title(" playdeck ")
                .style(Style::default().fg(app.theme.color_subtext()));
            f.render_widget(block, body);

            let inner = body.inner(&Margin {
                horizontal: 2,
                vertical: 1,
            });
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1), // controls
                    Constraint::Length(1), // gap
                    Constraint::Min(1),    // playlist
                    Constraint::Length(1), // time line
                    Constraint::Length(1), // progress bar
                ])
                .split(inner);

            layout_out.controls = rows[0];
            layout_out.playlist_inner = rows[2];
            layout_out.time_line = rows[3];
            layout_out.progress = rows[4];

            control_buttons::render(f, rows[0], app);
            playlist_panel::render(f, rows[2], app);
            render_time_line(f, rows[3], app);
            progress_bar::render(f, rows[4], app);

            let footer = "q quit · space play/pause · s stop · ←/→ track · click to select";
            let footer_area = Rect {
                x: size.x,
                y: size.y + size.height.saturating_sub(1),
                width: size.width,
                height: 1,
            };
            f.render_widget(
                Paragraph::new(footer).style(Style::default().fg(app.theme.color_subtext())),
                footer_area,
            );

            if let Some((msg, _)) = &app.toast {
                let toast_area = Rect {
                    x: size.x,
                    y: size.y,
                    width: size.width,
                    height: 1,
                };
                f.render_widget(
                    Paragraph::new(msg.as_str()).style(
                        Style::default()
                            .fg(app.theme.color_accent3())
                            .bg(app.theme.color_surface()),
                    ),
                    toast_area,
                );
            }
        })?;

        Ok(layout_out)
    }
}

fn render_time_line(f: &mut ratatui::Frame, area: Rect, app: &AppState) {
    let total = match app.player.duration {
        Some(d) => timefmt::mmss(d),
        None => "-:--".to_string(),
    };
    let line = format!("{} / {}", timefmt::mmss(app.player.position), total);
    f.render_widget(
        Paragraph::new(line)
            .style(Style::default().fg(app.theme.color_subtext()))
            .alignment(Alignment::Center),
        area,
    );
}

/// Map a click to an action. The control row is split into five equal
/// segments matching the button order; the progress bar is display-only and
/// deliberately maps to nothing.
pub fn hit_test(layout: &UiLayout, col: u16, row: u16) -> Option<Action> {
    if contains(layout.controls, col, row) {
        let w = layout.controls.width.max(1);
        let rel = col.saturating_sub(layout.controls.x);
        let seg = ((rel as u32) * 5 / (w as u32)) as u16;
        return match seg {
            0 => Some(Action::Prev),
            1 => Some(Action::Play),
            2 => Some(Action::Pause),
            3 => Some(Action::Stop),
            4 => Some(Action::Next),
            _ => None,
        };
    }

    if contains(layout.playlist_inner, col, row) {
        let idx = row.saturating_sub(layout.playlist_inner.y) as usize;
        return Some(Action::PlaylistSelect(idx));
    }

    None
}

fn contains(r: Rect, col: u16, row: u16) -> bool {
    col >= r.x && col < r.x + r.width && row >= r.y && row < r.y + r.height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> UiLayout {
        UiLayout {
            full: Rect::new(0, 0, 80, 24),
            controls: Rect::new(10, 2, 50, 1),
            playlist_inner: Rect::new(10, 4, 50, 8),
            time_line: Rect::new(10, 12, 50, 1),
            progress: Rect::new(10, 13, 50, 1),
        }
    }

    #[test]
    fn control_segments_map_to_the_five_buttons() {
        let l = layout();
        let y = l.controls.y;
        let seg_w = l.controls.width / 5;
        let mid = |seg: u16| l.controls.x + seg * seg_w + seg_w / 2;

        assert_eq!(hit_test(&l, mid(0), y), Some(Action::Prev));
        assert_eq!(hit_test(&l, mid(1), y), Some(Action::Play));
        assert_eq!(hit_test(&l, mid(2), y), Some(Action::Pause));
        assert_eq!(hit_test(&l, mid(3), y), Some(Action::Stop));
        assert_eq!(hit_test(&l, mid(4), y), Some(Action::Next));
    }

    #[test]
    fn playlist_rows_map_to_their_index() {
        let l = layout();
        let x = l.playlist_inner.x + 3;
        assert_eq!(hit_test(&l, x, l.playlist_inner.y), Some(Action::PlaylistSelect(0)));
        assert_eq!(
            hit_test(&l, x, l.playlist_inner.y + 4),
            Some(Action::PlaylistSelect(4))
        );
    }

    #[test]
    fn progress_bar_clicks_are_ignored() {
        let l = layout();
        assert_eq!(hit_test(&l, l.progress.x + 10, l.progress.y), None);
    }

    #[test]
    fn clicks_outside_any_region_are_ignored() {
        let l = layout();
        assert_eq!(hit_test(&l, 0, 0), None);
    }
}
