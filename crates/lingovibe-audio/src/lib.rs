mod pcm;
mod sink;

pub use pcm::{PcmBuffer, decode_base64};
pub use sink::{AudioSink, NullSink, WavFileSink};

#[derive(Debug, thiserror::Error)]
pub enum AudioError {
    #[error("Invalid base64 audio: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Invalid channel count: {0}")]
    InvalidChannels(u16),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
