//! Signature index: the inverse of the visibility sensor.
//!
//! The index maps every visibility signature observed during an offline
//! sweep to the poses that produced it:
//!
//! ```text
//! corridor vertices ──► dedup (integer) ──► × headings ──► VisibilitySensor
//!                                                               │
//!                                          signature ◄──────────┘
//!                                              │
//!                        BTreeMap<Signature, Vec<PoseSample>>
//! ```
//!
//! Building is the dominant cost of the system
//! (`origins × headings × rays × radius`) and runs as a batch job, optionally
//! on the rayon pool. The result is immutable and is persisted with
//! [`crate::io::save_index`].

mod builder;
mod config;
mod signature_index;

pub use builder::{IndexBuilder, build_index, collect_origins};
pub use config::{DEFAULT_HEADING_STEP, IndexConfig, MIN_HEADING_STEP};
pub use signature_index::{IndexMetadata, SignatureIndex};
