use crate::data::playlist::Track;

/// The built-in playlist. Order matters: the player starts on the first entry.
pub fn builtin() -> Vec<Track> {
    vec![
        Track::new(
            "t-Rex",
            "https://interactive-examples.mdn.mozilla.net/media/cc0-audio/t-rex-roar.mp3",
        ),
        Track::new(
            "cricket",
            "https://actions.google.com/sounds/v1/animals/afternoon_crickets_long.ogg",
        ),
        Track::new(
            "dog",
            "https://actions.google.com/sounds/v1/animals/dog_growling.ogg",
        ),
        Track::new(
            "cicada",
            "https://actions.google.com/sounds/v1/animals/cicada_chirp.ogg",
        ),
        Track::new(
            "woodpecker",
            "https://actions.google.com/sounds/v1/animals/woodpecker_pecking_fast.ogg",
        ),
    ]
}
