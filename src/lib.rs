//! Studeo - Voice exam-proctor agent driven by compressed study material
//!
//! This library provides the study-material acquisition pipeline and the
//! session configuration handed to an external voice-agent runtime:
//! - Document extraction (PDF to plain text)
//! - Compression via The Token Company API
//! - Single-slot material cache with read-through reuse
//! - Proctor persona and voice-session plan
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────┐
//! │              Acquisition pipeline                 │
//! │   Extractor  →  Compression  →  Cache (slot)     │
//! └───────────────────────┬──────────────────────────┘
//!                         │ study material
//! ┌───────────────────────▼──────────────────────────┐
//! │             Session configurator                  │
//! │   Proctor persona  │  Greeting  │  Model stack   │
//! └───────────────────────┬──────────────────────────┘
//!                         │ session plan
//! ┌───────────────────────▼──────────────────────────┐
//! │        External voice runtime (not here)          │
//! │   Audio  │  VAD  │  STT  │  LLM  │  TTS          │
//! └──────────────────────────────────────────────────┘
//! ```

pub mod cache;
pub mod compress;
pub mod config;
pub mod document;
pub mod error;
pub mod material;
pub mod persona;
pub mod session;

pub use cache::{FileStore, MaterialStore, MemoryStore};
pub use compress::{CompressionSettings, Compressor, TokenCompanyClient};
pub use config::{Config, VoiceConfig};
pub use document::DocumentRef;
pub use error::{Error, Result};
pub use material::MaterialProvider;
pub use session::{SessionPlan, configure_session};
