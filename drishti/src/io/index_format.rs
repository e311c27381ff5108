//! JSON persistence for the signature index.
//!
//! Document layout:
//!
//! ```json
//! {
//!   "version": 1,
//!   "metadata": { "grid": {...}, "sensor": {...}, "heading_step_degrees": 15.0, ... },
//!   "entries": [
//!     { "signature": ["alpha", "beta"], "poses": [[30, 30, 75.0], [30, 30, 90.0]] }
//!   ]
//! }
//! ```
//!
//! The file is read wholesale at query start. Signatures are recanonicalized
//! on load, and entries that collapse onto the same key are concatenated.

use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{PoseSample, Signature};
use crate::error::{Error, Result};
use crate::index::{IndexMetadata, SignatureIndex};

/// Current index document version.
pub const INDEX_FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct IndexDocumentRef<'a> {
    version: u32,
    metadata: &'a IndexMetadata,
    entries: Vec<EntryRef<'a>>,
}

#[derive(Serialize)]
struct EntryRef<'a> {
    signature: &'a Signature,
    poses: &'a [PoseSample],
}

#[derive(Deserialize)]
struct VersionProbe {
    version: u32,
}

#[derive(Deserialize)]
struct IndexDocument {
    metadata: IndexMetadata,
    entries: Vec<Entry>,
}

#[derive(Deserialize)]
struct Entry {
    signature: Signature,
    poses: Vec<PoseSample>,
}

/// Write an index as JSON.
pub fn write_index<W: Write>(index: &SignatureIndex, writer: W) -> Result<()> {
    let document = IndexDocumentRef {
        version: INDEX_FORMAT_VERSION,
        metadata: index.metadata(),
        entries: index
            .iter()
            .map(|(signature, poses)| EntryRef { signature, poses })
            .collect(),
    };
    serde_json::to_writer(writer, &document)?;
    Ok(())
}

/// Read an index document.
///
/// Documents with a version other than [`INDEX_FORMAT_VERSION`] are rejected.
pub fn read_index<R: Read>(reader: R) -> Result<SignatureIndex> {
    let value: serde_json::Value = serde_json::from_reader(reader)?;

    let probe = VersionProbe::deserialize(&value)
        .map_err(|e| Error::IndexFormat(format!("missing version: {}", e)))?;
    if probe.version != INDEX_FORMAT_VERSION {
        return Err(Error::IndexFormat(format!(
            "unsupported index version {} (expected {})",
            probe.version, INDEX_FORMAT_VERSION
        )));
    }

    let document = IndexDocument::deserialize(value)
        .map_err(|e| Error::IndexFormat(e.to_string()))?;
    let mut index = SignatureIndex::new(document.metadata);
    for entry in document.entries {
        index.extend(entry.signature, entry.poses);
    }
    Ok(index)
}

/// Save an index to a file.
pub fn save_index(index: &SignatureIndex, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_index(index, &mut writer)?;
    writer.flush()?;
    info!(
        "Saved index ({} signatures, {} poses) to {}",
        index.len(),
        index.pose_count(),
        path.display()
    );
    Ok(())
}

/// Load an index from a file.
pub fn load_index(path: &Path) -> Result<SignatureIndex> {
    let index = read_index(BufReader::new(File::open(path)?))?;
    info!(
        "Loaded index ({} signatures, {} poses) from {}",
        index.len(),
        index.pose_count(),
        path.display()
    );
    Ok(index)
}
