use crate::data::config::Config;
use crate::data::playlist::Playlist;
use crate::data::tracks;
use crate::ui::theme::Theme;
use std::time::{Duration, Instant};

/// The one transport variant; the progress tick is armed iff this is
/// `Playing`, so Pause, Stop, and Ended all disarm it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Stopped,
    Playing,
    Paused,
    Ended,
}

#[derive(Debug)]
pub struct PlayerState {
    pub transport: Transport,
    /// Progress bar width, 0..=100. Derived display value, never authoritative.
    pub percentage: f64,
    pub position: Duration,
    pub duration: Option<Duration>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            transport: Transport::Stopped,
            percentage: 0.0,
            position: Duration::ZERO,
            duration: None,
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    pub config: Config,
    pub theme: Theme,

    pub playlist: Playlist,
    pub player: PlayerState,

    pub toast: Option<(String, Instant)>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: Config, theme: Theme) -> Self {
        Self {
            config,
            theme,
            playlist: Playlist::new(tracks::builtin()),
            player: PlayerState::default(),
            toast: None,
            should_quit: false,
        }
    }

    pub fn handle_play(&mut self) {
        self.player.transport = Transport::Playing;
    }

    pub fn handle_pause(&mut self) {
        self.player.transport = Transport::Paused;
    }

    pub fn handle_stop(&mut self) {
        self.player.transport = Transport::Stopped;
    }

    /// Previous/Next move the index only; the transport is untouched.
    pub fn handle_prev(&mut self) {
        if let Some(i) = self.playlist.prev_index() {
            self.playlist.current = i;
            self.playlist.selected = i;
        }
    }

    pub fn handle_next(&mut self) {
        if let Some(i) = self.playlist.next_index() {
            self.playlist.current = i;
            self.playlist.selected = i;
        }
    }

    /// Picking a playlist entry always starts it, whatever the prior transport.
    pub fn handle_select(&mut self, index: usize) {
        if self.playlist.select(index) {
            self.player.transport = Transport::Playing;
        }
    }

    pub fn handle_track_ended(&mut self) {
        self.player.transport = Transport::Ended;
        self.player.percentage = 0.0;
        self.player.position = Duration::ZERO;
    }

    pub fn progress_tick_armed(&self) -> bool {
        self.player.transport == Transport::Playing
    }

    /// Recompute the bar width from the player clock. Unknown or zero
    /// duration renders 0%, as does an ended transport.
    pub fn refresh_progress(&mut self, position: Duration, duration: Option<Duration>) {
        self.player.duration = duration;
        if self.player.transport == Transport::Ended {
            self.player.percentage = 0.0;
            self.player.position = Duration::ZERO;
            return;
        }
        self.player.position = position.min(duration.unwrap_or(position));
        let Some(duration) = duration.filter(|d| !d.is_zero()) else {
            self.player.percentage = 0.0;
            return;
        };
        let ratio = position.as_secs_f64() / duration.as_secs_f64();
        self.player.percentage = (ratio * 100.0).clamp(0.0, 100.0);
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_toast(&mut self, msg: impl Into<String>) {
        self.toast = Some((msg.into(), Instant::now()));
    }

    pub fn tick(&mut self, now: Instant) {
        if let Some((_, at)) = &self.toast {
            if now.duration_since(*at) > Duration::from_millis(1500) {
                self.toast = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::Theme;

    fn app() -> AppState {
        AppState::new(Config::default(), Theme::load("mocha"))
    }

    #[test]
    fn initial_state_is_first_track_stopped() {
        let app = app();
        assert_eq!(app.playlist.current, 0);
        assert_eq!(app.playlist.current_track().unwrap().name, "t-Rex");
        assert_eq!(app.player.transport, Transport::Stopped);
        assert_eq!(app.player.percentage, 0.0);
    }

    #[test]
    fn next_five_times_returns_to_first_track() {
        let mut app = app();
        for _ in 0..5 {
            app.handle_next();
        }
        assert_eq!(app.playlist.current, 0);
    }

    #[test]
    fn prev_and_next_leave_transport_alone() {
        let mut app = app();
        app.handle_play();
        app.handle_next();
        assert_eq!(app.player.transport, Transport::Playing);
        app.handle_pause();
        app.handle_prev();
        assert_eq!(app.player.transport, Transport::Paused);
    }

    #[test]
    fn select_starts_playing_regardless_of_prior_transport() {
        for prior in [
            Transport::Stopped,
            Transport::Playing,
            Transport::Paused,
            Transport::Ended,
        ] {
            let mut app = app();
            app.player.transport = prior;
            app.handle_select(2);
            assert_eq!(app.playlist.current, 2);
            assert_eq!(app.player.transport, Transport::Playing);
        }
    }

    #[test]
    fn select_out_of_range_changes_nothing() {
        let mut app = app();
        app.handle_select(99);
        assert_eq!(app.playlist.current, 0);
        assert_eq!(app.player.transport, Transport::Stopped);
    }

    #[test]
    fn play_pause_play_keeps_current_track() {
        let mut app = app();
        app.handle_select(1);
        app.handle_pause();
        app.handle_play();
        assert_eq!(app.playlist.current, 1);
        assert_eq!(app.player.transport, Transport::Playing);
    }

    #[test]
    fn track_ended_from_any_transport_yields_ended() {
        for prior in [Transport::Stopped, Transport::Playing, Transport::Paused] {
            let mut app = app();
            app.player.transport = prior;
            app.handle_track_ended();
            assert_eq!(app.player.transport, Transport::Ended);
            assert_eq!(app.player.percentage, 0.0);
        }
    }

    #[test]
    fn progress_stays_within_bounds() {
        let mut app = app();
        app.handle_play();
        let dur = Some(Duration::from_secs(10));

        app.refresh_progress(Duration::from_secs(5), dur);
        assert_eq!(app.player.percentage, 50.0);

        // clock can overshoot the probed duration; the bar must not
        app.refresh_progress(Duration::from_secs(30), dur);
        assert_eq!(app.player.percentage, 100.0);

        app.refresh_progress(Duration::ZERO, dur);
        assert_eq!(app.player.percentage, 0.0);
    }

    #[test]
    fn progress_is_zero_without_a_known_duration() {
        let mut app = app();
        app.handle_play();
        app.refresh_progress(Duration::from_secs(3), None);
        assert_eq!(app.player.percentage, 0.0);
        app.refresh_progress(Duration::from_secs(3), Some(Duration::ZERO));
        assert_eq!(app.player.percentage, 0.0);
    }

    #[test]
    fn progress_is_zero_while_ended() {
        let mut app = app();
        app.handle_track_ended();
        app.refresh_progress(Duration::from_secs(5), Some(Duration::from_secs(10)));
        assert_eq!(app.player.percentage, 0.0);
    }

    #[test]
    fn tick_is_armed_only_while_playing() {
        let mut app = app();
        assert!(!app.progress_tick_armed());
        app.handle_play();
        assert!(app.progress_tick_armed());
        app.handle_pause();
        assert!(!app.progress_tick_armed());
        app.handle_play();
        app.handle_stop();
        assert!(!app.progress_tick_armed());
        app.handle_play();
        app.handle_track_ended();
        assert!(!app.progress_tick_armed());
    }

    #[test]
    fn toast_expires_after_its_window() {
        let mut app = app();
        app.set_toast("track unavailable: dog");
        let later = Instant::now() + Duration::from_secs(2);
        app.tick(later);
        assert!(app.toast.is_none());
    }
}
