use crate::data::playlist::Track;
use crate::playback::fetch::{self, FetchError};
use lofty::AudioFile;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::collections::HashMap;
use std::io::Cursor;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlayerError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("no audio output device: {0}")]
    Output(#[from] rodio::StreamError),

    #[error("audio sink failed: {0}")]
    Sink(#[from] rodio::PlayError),

    #[error("unsupported or corrupt audio stream: {0}")]
    Decode(#[from] rodio::decoder::DecoderError),
}

struct LoadedSource {
    url: String,
    bytes: Arc<[u8]>,
    duration: Option<Duration>,
}

/// The audio primitive: one output stream + sink pair for the process
/// lifetime. Exposes set-source / play / pause / stop (pause + rewind to
/// zero) and drain polling; every operation is idempotent so the per-frame
/// sync step can re-apply the current transport without side effects.
pub struct Player {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    sink: Sink,

    agent: ureq::Agent,
    cache: HashMap<String, Arc<[u8]>>,

    source: Option<LoadedSource>,
    failed_url: Option<String>,

    // position tracking
    started_at: Option<Instant>,
    paused_acc: Duration,
}

impl Player {
    pub fn new() -> Result<Self, PlayerError> {
        let (_stream, handle) = OutputStream::try_default()?;
        let sink = Sink::try_new(&handle)?;
        Ok(Self {
            _stream,
            handle,
            sink,
            agent: fetch::http_agent(),
            cache: HashMap::new(),
            source: None,
            failed_url: None,
            started_at: None,
            paused_acc: Duration::ZERO,
        })
    }

    pub fn source_url(&self) -> Option<&str> {
        self.source.as_ref().map(|s| s.url.as_str())
    }

    pub fn failed_url(&self) -> Option<&str> {
        self.failed_url.as_deref()
    }

    /// Forget a remembered load failure so the next sync retries the fetch.
    pub fn clear_failed(&mut self) {
        self.failed_url = None;
    }

    /// Install `track` as the sink's source, fetching and caching its bytes.
    /// The old source is discarded and the position rewinds to zero; playback
    /// does not start until `play`.
    pub fn set_source(&mut self, track: &Track) -> Result<(), PlayerError> {
        if self.source_url() == Some(track.url.as_str()) {
            return Ok(());
        }
        match self.load_source(track) {
            Ok(()) => {
                self.failed_url = None;
                Ok(())
            }
            Err(e) => {
                self.failed_url = Some(track.url.clone());
                Err(e)
            }
        }
    }

    fn load_source(&mut self, track: &Track) -> Result<(), PlayerError> {
        let bytes = match self.cache.get(&track.url) {
            Some(bytes) => Arc::clone(bytes),
            None => {
                let fetched: Arc<[u8]> = fetch::fetch_track_bytes(&self.agent, &track.url)?.into();
                self.cache.insert(track.url.clone(), Arc::clone(&fetched));
                fetched
            }
        };

        // Reject streams the decoder cannot open now, instead of at the next
        // play. The decoder only parses headers here; it is dropped unused.
        Decoder::new(Cursor::new(Arc::clone(&bytes)))?;

        let duration = probe_duration(&bytes);
        if duration.is_none() {
            log::warn!("no readable duration for {}; progress stays at 0%", track.name);
        }

        self.sink.stop();
        self.sink = Sink::try_new(&self.handle)?;
        self.started_at = None;
        self.paused_acc = Duration::ZERO;
        self.source = Some(LoadedSource {
            url: track.url.clone(),
            bytes,
            duration,
        });
        Ok(())
    }

    /// Start or resume. An empty sink (fresh source, stopped, or drained)
    /// restarts from zero.
    pub fn play(&mut self) -> Result<(), PlayerError> {
        let Some(source) = self.source.as_ref() else {
            return Ok(());
        };

        if self.sink.empty() {
            let decoder = Decoder::new(Cursor::new(Arc::clone(&source.bytes)))?;
            self.sink.append(decoder);
            self.sink.play();
            self.paused_acc = Duration::ZERO;
            self.started_at = Some(Instant::now());
        } else if self.sink.is_paused() {
            self.sink.play();
            self.started_at = Some(Instant::now());
        }
        Ok(())
    }

    pub fn pause(&mut self) {
        if let Some(started) = self.started_at.take() {
            self.paused_acc += started.elapsed();
        }
        self.sink.pause();
    }

    /// Pause and rewind to zero. The sink is rebuilt so the next `play`
    /// starts a fresh decoder at the beginning.
    pub fn stop(&mut self) -> Result<(), PlayerError> {
        let at_zero =
            self.sink.empty() && self.started_at.is_none() && self.paused_acc.is_zero();
        if at_zero {
            return Ok(());
        }
        self.sink.stop();
        self.sink = Sink::try_new(&self.handle)?;
        self.started_at = None;
        self.paused_acc = Duration::ZERO;
        Ok(())
    }

    pub fn position(&self) -> Duration {
        match self.started_at {
            Some(started) => self.paused_acc + started.elapsed(),
            None => self.paused_acc,
        }
    }

    pub fn duration(&self) -> Option<Duration> {
        self.source.as_ref().and_then(|s| s.duration)
    }

    /// True exactly once when the appended source has drained while playing.
    /// The position clock rewinds to zero, mirroring a stopped transport.
    pub fn poll_finished(&mut self) -> bool {
        if self.source.is_some() && self.started_at.is_some() && self.sink.empty() {
            self.started_at = None;
            self.paused_acc = Duration::ZERO;
            true
        } else {
            false
        }
    }
}

fn probe_duration(bytes: &[u8]) -> Option<Duration> {
    let tagged = lofty::Probe::new(Cursor::new(bytes))
        .guess_file_type()
        .ok()?
        .read()
        .ok()?;
    Some(tagged.properties().duration())
}
