use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::{AudioError, PcmBuffer};

/// Destination for decoded speech
pub trait AudioSink: Send + Sync {
    fn play(&self, buffer: &PcmBuffer) -> Result<(), AudioError>;
}

/// Discards everything
pub struct NullSink;

impl AudioSink for NullSink {
    fn play(&self, buffer: &PcmBuffer) -> Result<(), AudioError> {
        tracing::debug!("Dropping {} frames of audio", buffer.frame_count());
        Ok(())
    }
}

/// Writes each clip as a 16-bit PCM WAV file
pub struct WavFileSink {
    output_dir: PathBuf,
}

impl WavFileSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn write_wav(path: &Path, buffer: &PcmBuffer) -> Result<(), AudioError> {
        let channels = buffer.channel_count();
        let frames = buffer.frame_count() as u32;
        let block_align = channels as u32 * 2;
        let data_len = frames * block_align;

        let mut out = BufWriter::new(File::create(path)?);

        out.write_all(b"RIFF")?;
        out.write_u32::<LittleEndian>(36 + data_len)?;
        out.write_all(b"WAVE")?;

        out.write_all(b"fmt ")?;
        out.write_u32::<LittleEndian>(16)?;
        out.write_u16::<LittleEndian>(1)?; // PCM
        out.write_u16::<LittleEndian>(channels)?;
        out.write_u32::<LittleEndian>(buffer.sample_rate)?;
        out.write_u32::<LittleEndian>(buffer.sample_rate * block_align)?;
        out.write_u16::<LittleEndian>(block_align as u16)?;
        out.write_u16::<LittleEndian>(16)?;

        out.write_all(b"data")?;
        out.write_u32::<LittleEndian>(data_len)?;
        for frame in 0..frames as usize {
            for channel in &buffer.channels {
                let sample = (channel[frame] * 32768.0).clamp(i16::MIN as f32, i16::MAX as f32);
                out.write_i16::<LittleEndian>(sample as i16)?;
            }
        }

        out.flush()?;
        Ok(())
    }
}

impl AudioSink for WavFileSink {
    fn play(&self, buffer: &PcmBuffer) -> Result<(), AudioError> {
        fs::create_dir_all(&self.output_dir)?;

        let path = self
            .output_dir
            .join(format!("speech-{}.wav", uuid::Uuid::new_v4()));
        Self::write_wav(&path, buffer)?;

        tracing::info!(
            "Wrote {:.1}s of speech to {}",
            buffer.duration_secs(),
            path.display()
        );
        Ok(())
    }
}
