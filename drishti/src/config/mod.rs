//! Unified configuration loading for Drishti.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drishti::config::DrishtiConfig;
//!
//! // Load from default path (configs/drishti.yaml)
//! let config = DrishtiConfig::load_default()?;
//!
//! // Convert to runtime configs
//! let builder = config.index_builder();
//! let recognizer = config.recognizer.to_recognizer_config();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`GridSection`] | Resolution and padding |
//! | [`SensorSection`] | Field of view, range, ray count, see-through kinds |
//! | [`IndexSection`] | Heading step, empty signatures, parallelism, origin density |
//! | [`RecognizerSection`] | Vision model, endpoint, prompt, API key |
//! | [`RenderSection`] | SVG scale and marker sizes |
//!
//! ## Example YAML
//!
//! ```yaml
//! grid:
//!   resolution: 1.0
//! sensor:
//!   fov_degrees: 60
//!   max_radius: 50
//! index:
//!   heading_step_degrees: 15
//!   parallel: true
//! ```

mod defaults;
mod drishti;
mod error;
mod output;
mod sections;

pub use drishti::{DEFAULT_CONFIG_PATH, DrishtiConfig};
pub use error::ConfigLoadError;

pub use output::{RecognizerSection, RenderSection};
pub use sections::{GridSection, IndexSection, SensorSection};
