//! Bitcrush Core
//!
//! Shared types, traits, and error handling for the Bitcrush demonstration
//! pipeline.
//!
//! The core crate defines:
//! - **Domain Types**: `AudioAsset`, `SampleRate`, `SampleFormat`
//! - **Collaborator Traits**: `AudioDecoder`, `BlockingOutput`
//! - **Error Handling**: Unified `BitcrushError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use bitcrush_core::{AudioAsset, SampleFormat, SampleRate};
//!
//! let asset = AudioAsset::new(
//!     vec![0.0; 44_100],
//!     SampleRate::CD_QUALITY,
//!     1,
//!     SampleFormat::I16,
//! );
//! assert!((asset.duration_secs() - 1.0).abs() < 1e-9);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{BitcrushError, Result};
pub use traits::{AudioDecoder, BlockingOutput};
pub use types::{AudioAsset, SampleFormat, SampleRate};
