use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use byteorder::{ByteOrder, LittleEndian};

use crate::AudioError;

pub fn decode_base64(data: &str) -> Result<Vec<u8>, AudioError> {
    Ok(STANDARD.decode(data.trim())?)
}

/// Decoded audio, one sample vector per channel
#[derive(Debug, Clone, PartialEq)]
pub struct PcmBuffer {
    pub sample_rate: u32,
    pub channels: Vec<Vec<f32>>,
}

impl PcmBuffer {
    /// Split interleaved signed 16-bit little-endian PCM into channels.
    ///
    /// Samples are scaled to [-1.0, 1.0). A trailing partial frame is dropped.
    pub fn from_pcm16_le(
        bytes: &[u8],
        sample_rate: u32,
        channels: u16,
    ) -> Result<Self, AudioError> {
        if channels == 0 {
            return Err(AudioError::InvalidChannels(channels));
        }

        let channel_count = channels as usize;
        let frame_count = bytes.len() / 2 / channel_count;
        let mut out = vec![Vec::with_capacity(frame_count); channel_count];

        for frame in bytes.chunks_exact(2 * channel_count).take(frame_count) {
            for (channel, sample) in frame.chunks_exact(2).enumerate() {
                let value = LittleEndian::read_i16(sample);
                out[channel].push(value as f32 / 32768.0);
            }
        }

        Ok(Self {
            sample_rate,
            channels: out,
        })
    }

    pub fn channel_count(&self) -> u16 {
        self.channels.len() as u16
    }

    pub fn frame_count(&self) -> usize {
        self.channels.first().map_or(0, Vec::len)
    }

    pub fn duration_secs(&self) -> f32 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.frame_count() as f32 / self.sample_rate as f32
    }

    pub fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }
}
