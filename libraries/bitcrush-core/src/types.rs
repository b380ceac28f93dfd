/// Audio-related types
use serde::{Deserialize, Serialize};

/// Sample rate in Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SampleRate(pub u32);

impl SampleRate {
    /// Common sample rates
    pub const CD_QUALITY: Self = Self(44_100);
    pub const DVD_QUALITY: Self = Self(48_000);
    pub const TELEPHONY: Self = Self(8_000);

    /// Create a new sample rate
    #[must_use]
    pub fn new(hz: u32) -> Self {
        Self(hz)
    }

    /// Get the sample rate as Hz
    pub fn as_hz(&self) -> u32 {
        self.0
    }

    /// Rate at half the frequency (playback sounds slower and lower)
    pub fn halved(&self) -> Self {
        Self(self.0 / 2)
    }

    /// Rate at double the frequency (playback sounds faster and higher)
    pub fn doubled(&self) -> Self {
        Self(self.0 * 2)
    }
}

impl std::fmt::Display for SampleRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} Hz", self.0)
    }
}

/// Storage format of the samples in the source asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleFormat {
    /// Unsigned 8-bit PCM
    U8,
    /// Signed 16-bit PCM
    I16,
    /// Signed 24-bit PCM
    I24,
    /// Signed 32-bit PCM
    I32,
    /// 32-bit float
    F32,
}

impl SampleFormat {
    /// Bits used per sample in the source container
    pub fn bits_per_sample(&self) -> u16 {
        match self {
            Self::U8 => 8,
            Self::I16 => 16,
            Self::I24 => 24,
            Self::I32 | Self::F32 => 32,
        }
    }

    /// Whether the source stored floating-point amplitudes
    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32)
    }
}

impl std::fmt::Display for SampleFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::U8 => write!(f, "8-bit unsigned PCM"),
            Self::I16 => write!(f, "16-bit signed PCM"),
            Self::I24 => write!(f, "24-bit signed PCM"),
            Self::I32 => write!(f, "32-bit signed PCM"),
            Self::F32 => write!(f, "32-bit float"),
        }
    }
}

/// A decoded audio asset
///
/// Samples are stored as f32 carrying the *raw* amplitudes from the
/// container: a 16-bit sample of -8 is stored as -8.0, not -8/32768.
/// Normalization is a separate, explicit pipeline stage working from
/// the measured peak, so the decoder must not pre-scale.
///
/// Interleaved format: [ch0, ch1, ch0, ch1, ...] for two channels.
/// Immutable after decode; every transform stage allocates a new buffer.
#[derive(Debug, Clone)]
pub struct AudioAsset {
    /// Raw amplitude samples (f32, interleaved)
    pub samples: Vec<f32>,

    /// Sample rate of the source
    pub sample_rate: SampleRate,

    /// Number of channels (1 = mono, 2 = stereo, etc.)
    pub channels: u16,

    /// Storage format of the source container
    pub format: SampleFormat,
}

impl AudioAsset {
    /// Create a new asset
    pub fn new(
        samples: Vec<f32>,
        sample_rate: SampleRate,
        channels: u16,
        format: SampleFormat,
    ) -> Self {
        Self {
            samples,
            sample_rate,
            channels,
            format,
        }
    }

    /// Get the number of frames (samples per channel)
    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels.max(1) as usize
    }

    /// Get the duration in seconds
    pub fn duration_secs(&self) -> f64 {
        self.frames() as f64 / f64::from(self.sample_rate.as_hz())
    }

    /// Check if the asset holds no samples
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the length in samples (all channels)
    pub fn len(&self) -> usize {
        self.samples.len()
    }
}
