use std::io::Read;
use std::time::Duration;
use thiserror::Error;

// Hard cap on a downloaded track; the built-in playlist is a few hundred KB
// per entry, anything near this limit is a misconfigured URL.
const MAX_TRACK_BYTES: usize = 32 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("http request failed: {0}")]
    Http(#[from] Box<ureq::Error>),

    #[error("reading response body failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("response body exceeds {MAX_TRACK_BYTES} bytes")]
    TooLarge,
}

pub fn http_agent() -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(Duration::from_secs(8))
        .build()
}

/// Blocking GET of one track. Called off the audio path, before a decoder is
/// built, so a slow source delays the source swap but never playback itself.
pub fn fetch_track_bytes(agent: &ureq::Agent, url: &str) -> Result<Vec<u8>, FetchError> {
    let response = agent.get(url).call().map_err(Box::new)?;

    let mut bytes = Vec::new();
    response
        .into_reader()
        .take(MAX_TRACK_BYTES as u64 + 1)
        .read_to_end(&mut bytes)?;

    if bytes.len() > MAX_TRACK_BYTES {
        return Err(FetchError::TooLarge);
    }

    log::debug!("fetched {} bytes from {url}", bytes.len());
    Ok(bytes)
}
