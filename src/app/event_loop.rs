use crate::app::state::{AppState, Transport};
use crate::playback::player::Player;
use crate::ui::tui::{self, Tui, UiLayout};
use crate::utils::input::{map_key, map_mouse, Action};
use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use std::time::{Duration, Instant};

pub fn run(app: &mut AppState) -> Result<()> {
    let mut player = Player::new().context("audio output unavailable")?;

    let mut tui = Tui::new()?;
    tui.enter()?;
    let result = run_loop(app, &mut player, &mut tui);

    // restore the terminal even when the loop errored
    let restored = tui.exit();
    result.and(restored)
}

fn run_loop(app: &mut AppState, player: &mut Player, tui: &mut Tui) -> Result<()> {
    let mut last_progress = Instant::now();
    let mut last_layout = UiLayout::default();

    loop {
        let frame_start = Instant::now();
        let mut dirty = false;

        // drain input (non-blocking)
        while event::poll(Duration::from_millis(0))? {
            match event::read()? {
                Event::Key(k) => {
                    dirty |= handle_action(app, player, map_key(k), &last_layout);
                }
                Event::Mouse(m) => {
                    dirty |= handle_action(app, player, map_mouse(m), &last_layout);
                }
                _ => {}
            }
        }

        if player.poll_finished() {
            app.handle_track_ended();
            dirty = true;
        }

        // progress tick: armed only while the transport is Playing
        if app.progress_tick_armed()
            && frame_start.duration_since(last_progress)
                >= Duration::from_millis(app.config.progress_refresh_ms)
        {
            last_progress = frame_start;
            app.refresh_progress(player.position(), player.duration());
        }

        sync_player(app, player, dirty);

        app.tick(frame_start);
        last_layout = tui.draw(app)?;

        // frame pacing
        let frame_dt = fps_to_dt(app.config.ui_fps);
        let elapsed = frame_start.elapsed();
        if elapsed < frame_dt {
            std::thread::sleep(frame_dt - elapsed);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Apply one action to the state. Returns true when the state changed and the
/// post-sync progress refresh should run. The player is only touched to
/// forget a remembered fetch failure, so an explicit play/select retries the
/// download once per gesture.
fn handle_action(app: &mut AppState, player: &mut Player, action: Action, layout: &UiLayout) -> bool {
    match action {
        Action::Quit => {
            app.request_quit();
            true
        }
        Action::Play => {
            player.clear_failed();
            app.handle_play();
            true
        }
        Action::Pause => {
            app.handle_pause();
            true
        }
        Action::Stop => {
            app.handle_stop();
            true
        }
        Action::TogglePlayPause => {
            player.clear_failed();
            if app.player.transport == Transport::Playing {
                app.handle_pause();
            } else {
                app.handle_play();
            }
            true
        }
        Action::Prev => {
            app.handle_prev();
            true
        }
        Action::Next => {
            app.handle_next();
            true
        }
        Action::PlaylistUp => {
            app.playlist.move_up();
            app.playlist.clamp_selected();
            true
        }
        Action::PlaylistDown => {
            app.playlist.move_down();
            app.playlist.clamp_selected();
            true
        }
        Action::Confirm => {
            player.clear_failed();
            app.handle_select(app.playlist.selected);
            true
        }
        Action::PlaylistSelect(idx) => {
            if idx < app.playlist.len() {
                player.clear_failed();
                app.handle_select(idx);
                true
            } else {
                false
            }
        }
        Action::MouseClick { col, row } => match tui::hit_test(layout, col, row) {
            Some(a) => handle_action(app, player, a, layout),
            None => false,
        },
        Action::None => false,
    }
}

/// Reconcile the audio primitive with the state: install the expected source
/// if it differs, re-apply the transport side effect (all idempotent), and
/// refresh the progress display when something changed this frame.
fn sync_player(app: &mut AppState, player: &mut Player, refresh: bool) {
    let Some(track) = app.playlist.current_track().cloned() else {
        return;
    };

    if player.source_url() != Some(track.url.as_str())
        && player.failed_url() != Some(track.url.as_str())
    {
        if let Err(e) = player.set_source(&track) {
            log::warn!("loading {} failed: {e}", track.url);
            app.set_toast(format!("track unavailable: {}", track.name));
            app.handle_stop();
        }
    }

    let applied = match app.player.transport {
        Transport::Playing => player.play(),
        Transport::Paused => {
            player.pause();
            Ok(())
        }
        Transport::Stopped => player.stop(),
        Transport::Ended => Ok(()),
    };
    if let Err(e) = applied {
        log::warn!("playback failed for {}: {e}", track.url);
        app.set_toast(format!("track unavailable: {}", track.name));
        app.handle_stop();
    }

    if refresh {
        app.refresh_progress(player.position(), player.duration());
    }
}

fn fps_to_dt(fps: u32) -> Duration {
    let fps = fps.clamp(30, 60);
    Duration::from_millis((1000 / fps) as u64)
}
