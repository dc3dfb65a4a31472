#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    pub name: String,
    pub url: String,
}

impl Track {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

/// Fixed at startup; only `current` and the browse cursor move.
#[derive(Debug, Default, Clone)]
pub struct Playlist {
    pub tracks: Vec<Track>,
    pub current: usize,
    pub selected: usize,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self {
            tracks,
            current: 0,
            selected: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    pub fn clamp_selected(&mut self) {
        if self.tracks.is_empty() {
            self.selected = 0;
        } else if self.selected >= self.tracks.len() {
            self.selected = self.tracks.len() - 1;
        }
    }

    pub fn move_up(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    pub fn move_down(&mut self) {
        if !self.tracks.is_empty() {
            self.selected = (self.selected + 1).min(self.tracks.len() - 1);
        }
    }

    pub fn next_index(&self) -> Option<usize> {
        if self.tracks.is_empty() {
            None
        } else {
            Some((self.current + 1) % self.tracks.len())
        }
    }

    pub fn prev_index(&self) -> Option<usize> {
        if self.tracks.is_empty() {
            None
        } else {
            Some((self.current + self.tracks.len() - 1) % self.tracks.len())
        }
    }

    /// Returns false when `index` is out of range; `current` is untouched then.
    pub fn select(&mut self, index: usize) -> bool {
        if index < self.tracks.len() {
            self.current = index;
            self.selected = index;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(n: usize) -> Playlist {
        Playlist::new(
            (0..n)
                .map(|i| Track::new(format!("track-{i}"), format!("https://example.com/{i}.ogg")))
                .collect(),
        )
    }

    #[test]
    fn prev_from_first_wraps_to_last() {
        let pl = playlist(5);
        assert_eq!(pl.current, 0);
        assert_eq!(pl.prev_index(), Some(4));
    }

    #[test]
    fn next_from_last_wraps_to_first() {
        let mut pl = playlist(5);
        pl.current = 4;
        assert_eq!(pl.next_index(), Some(0));
    }

    #[test]
    fn next_and_prev_stay_in_range_from_every_index() {
        let mut pl = playlist(5);
        for i in 0..pl.len() {
            pl.current = i;
            let next = pl.next_index().unwrap();
            let prev = pl.prev_index().unwrap();
            assert!(next < pl.len());
            assert!(prev < pl.len());
        }
    }

    #[test]
    fn navigation_on_empty_playlist_yields_none() {
        let pl = playlist(0);
        assert_eq!(pl.next_index(), None);
        assert_eq!(pl.prev_index(), None);
    }

    #[test]
    fn select_in_range_moves_current_and_cursor() {
        let mut pl = playlist(5);
        assert!(pl.select(3));
        assert_eq!(pl.current, 3);
        assert_eq!(pl.selected, 3);
    }

    #[test]
    fn select_out_of_range_is_rejected() {
        let mut pl = playlist(5);
        assert!(!pl.select(5));
        assert_eq!(pl.current, 0);
    }

    #[test]
    fn cursor_clamps_to_last_item() {
        let mut pl = playlist(3);
        pl.selected = 7;
        pl.clamp_selected();
        assert_eq!(pl.selected, 2);
    }
}
