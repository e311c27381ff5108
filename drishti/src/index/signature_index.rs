//! The signature → poses mapping.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::core::{PoseSample, Signature};
use crate::grid::GridConfig;
use crate::sensor::SensorConfig;

use super::config::IndexConfig;

/// Build parameters recorded alongside an index.
///
/// A query is only meaningful against an index built with the same grid and
/// sensor parameters; these are persisted so callers can check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexMetadata {
    /// Grid resolution and padding
    pub grid: GridConfig,
    /// Sensor sweep parameters
    pub sensor: SensorConfig,
    /// Spacing between sampled headings (degrees)
    pub heading_step_degrees: f64,
    /// Whether poses with nothing in view were kept
    pub retain_empty: bool,
    /// Extra origins per corridor edge
    pub edge_subdivisions: u32,
    /// Number of distinct sampled origins
    pub origin_count: usize,
}

impl IndexMetadata {
    /// Metadata for an index built with these configurations.
    pub fn new(grid: GridConfig, sensor: SensorConfig, index: &IndexConfig) -> Self {
        Self {
            grid,
            sensor,
            heading_step_degrees: index.heading_step_degrees,
            retain_empty: index.retain_empty,
            edge_subdivisions: index.edge_subdivisions,
            origin_count: 0,
        }
    }
}

impl Default for IndexMetadata {
    fn default() -> Self {
        Self::new(GridConfig::default(), SensorConfig::default(), &IndexConfig::default())
    }
}

/// Mapping from visibility signature to the poses that produce it.
///
/// Keys are ordered, so iteration order is reproducible. Pose lists keep
/// insertion order and are never deduplicated.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignatureIndex {
    metadata: IndexMetadata,
    entries: BTreeMap<Signature, Vec<PoseSample>>,
}

impl SignatureIndex {
    /// Create an empty index.
    pub fn new(metadata: IndexMetadata) -> Self {
        Self {
            metadata,
            entries: BTreeMap::new(),
        }
    }

    /// Build parameters.
    #[inline]
    pub fn metadata(&self) -> &IndexMetadata {
        &self.metadata
    }

    /// Mutable build parameters (used while building).
    pub(crate) fn metadata_mut(&mut self) -> &mut IndexMetadata {
        &mut self.metadata
    }

    /// Append a pose to a signature's entry, creating it if absent.
    pub fn insert(&mut self, signature: Signature, pose: PoseSample) {
        self.entries.entry(signature).or_default().push(pose);
    }

    /// Append a run of poses to a signature's entry.
    pub fn extend(&mut self, signature: Signature, poses: impl IntoIterator<Item = PoseSample>) {
        self.entries.entry(signature).or_default().extend(poses);
    }

    /// Merge another index, concatenating pose lists for equal keys.
    ///
    /// Poses from `other` follow the existing poses of each key.
    pub fn merge(&mut self, other: SignatureIndex) {
        for (signature, poses) in other.entries {
            self.extend(signature, poses);
        }
    }

    /// Poses stored under an exact signature.
    #[inline]
    pub fn get(&self, signature: &Signature) -> Option<&[PoseSample]> {
        self.entries.get(signature).map(Vec::as_slice)
    }

    /// Number of distinct signatures.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// No signatures stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of stored poses across all signatures.
    pub fn pose_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    /// Iterate over `(signature, poses)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&Signature, &[PoseSample])> + '_ {
        self.entries.iter().map(|(s, p)| (s, p.as_slice()))
    }

    /// Stored signatures in key order.
    pub fn signatures(&self) -> impl Iterator<Item = &Signature> + '_ {
        self.entries.keys()
    }

    /// Signature whose pose list is longest (the most ambiguous observation).
    pub fn most_ambiguous(&self) -> Option<(&Signature, usize)> {
        self.entries
            .iter()
            .map(|(s, p)| (s, p.len()))
            .max_by_key(|&(_, n)| n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order_and_duplicates() {
        let mut index = SignatureIndex::default();
        let sig = Signature::from_labels(["shop:A"]);
        index.insert(sig.clone(), PoseSample::new(1, 1, 0.0));
        index.insert(sig.clone(), PoseSample::new(0, 0, 90.0));
        index.insert(sig.clone(), PoseSample::new(1, 1, 0.0));

        let poses = index.get(&sig).unwrap();
        assert_eq!(poses.len(), 3);
        assert_eq!(poses[1], PoseSample::new(0, 0, 90.0));
        assert_eq!(index.len(), 1);
        assert_eq!(index.pose_count(), 3);
    }

    #[test]
    fn test_merge_concatenates() {
        let a_sig = Signature::from_labels(["a"]);
        let b_sig = Signature::from_labels(["b"]);

        let mut left = SignatureIndex::default();
        left.insert(a_sig.clone(), PoseSample::new(0, 0, 0.0));
        let mut right = SignatureIndex::default();
        right.insert(a_sig.clone(), PoseSample::new(5, 5, 15.0));
        right.insert(b_sig.clone(), PoseSample::new(6, 6, 30.0));

        left.merge(right);
        assert_eq!(
            left.get(&a_sig).unwrap(),
            &[PoseSample::new(0, 0, 0.0), PoseSample::new(5, 5, 15.0)]
        );
        assert_eq!(left.get(&b_sig).unwrap().len(), 1);
        assert_eq!(left.most_ambiguous().unwrap().1, 2);
    }

    #[test]
    fn test_missing_signature() {
        let index = SignatureIndex::default();
        assert!(index.get(&Signature::empty()).is_none());
        assert!(index.is_empty());
        assert!(index.most_ambiguous().is_none());
    }
}
