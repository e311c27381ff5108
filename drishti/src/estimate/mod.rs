//! Pose lookup from an observed signature.
//!
//! The estimator is a pure lookup: observed names are normalized with the
//! same function used at build time, canonicalized into a [`Signature`], and
//! the stored pose list is returned as-is. There is no scoring or
//! disambiguation; several candidates mean the observation is ambiguous.

use std::sync::Arc;

use log::debug;

use crate::core::{PoseSample, Signature, WorldPoint};
use crate::index::SignatureIndex;

/// Outcome of a lookup.
#[derive(Clone, Debug, PartialEq)]
pub enum Estimate {
    /// Signature present; every pose that produced it, in build order.
    Found {
        /// Canonical observed signature
        signature: Signature,
        /// Stored candidates
        poses: Vec<PoseSample>,
    },
    /// No stored pose produced this signature.
    NotFound {
        /// Canonical observed signature
        signature: Signature,
    },
}

impl Estimate {
    /// Canonical signature that was looked up.
    pub fn signature(&self) -> &Signature {
        match self {
            Estimate::Found { signature, .. } | Estimate::NotFound { signature } => signature,
        }
    }

    /// Candidate poses (empty when not found).
    pub fn poses(&self) -> &[PoseSample] {
        match self {
            Estimate::Found { poses, .. } => poses,
            Estimate::NotFound { .. } => &[],
        }
    }

    /// Was the signature present?
    pub fn is_found(&self) -> bool {
        matches!(self, Estimate::Found { .. })
    }

    /// Candidate positions for plotting.
    pub fn candidate_points(&self) -> Vec<WorldPoint> {
        self.poses().iter().map(PoseSample::position).collect()
    }
}

/// Look up an observation in an index.
pub fn estimate<I, S>(observed_labels: I, index: &SignatureIndex) -> Estimate
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let signature = Signature::from_labels(observed_labels);
    match index.get(&signature) {
        Some(poses) => Estimate::Found {
            signature,
            poses: poses.to_vec(),
        },
        None => Estimate::NotFound { signature },
    }
}

/// Shared, read-only query front end over a loaded index.
///
/// Cloning is cheap and clones share the same index, so one estimator can
/// serve concurrent lookups.
#[derive(Clone, Debug)]
pub struct PoseEstimator {
    index: Arc<SignatureIndex>,
}

impl PoseEstimator {
    /// Take ownership of a loaded index.
    pub fn new(index: SignatureIndex) -> Self {
        Self {
            index: Arc::new(index),
        }
    }

    /// The underlying index.
    pub fn index(&self) -> &SignatureIndex {
        &self.index
    }

    /// Look up the poses that produce the observed names.
    pub fn estimate<I, S>(&self, observed_labels: I) -> Estimate
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let result = estimate(observed_labels, &self.index);
        debug!(
            "[PoseEstimator] {} -> {} candidates",
            result.signature(),
            result.poses().len()
        );
        result
    }

    /// Candidate `(x, y)` points for an observation.
    pub fn candidate_points<I, S>(&self, observed_labels: I) -> Vec<WorldPoint>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.estimate(observed_labels).candidate_points()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::IndexMetadata;

    fn index() -> SignatureIndex {
        let mut index = SignatureIndex::new(IndexMetadata::default());
        let pair = Signature::from_labels(["shop:Alpha", "shop:Beta"]);
        index.insert(pair.clone(), PoseSample::new(30, 30, 75.0));
        index.insert(pair, PoseSample::new(12, 4, 90.0));
        index.insert(Signature::empty(), PoseSample::new(30, 30, 255.0));
        index
    }

    #[test]
    fn test_found_returns_all_poses_unmodified() {
        let estimator = PoseEstimator::new(index());
        let result = estimator.estimate(["BETA", "alpha"]);
        assert!(result.is_found());
        assert_eq!(
            result.poses(),
            &[PoseSample::new(30, 30, 75.0), PoseSample::new(12, 4, 90.0)]
        );
        assert_eq!(
            result.candidate_points(),
            vec![WorldPoint::new(30.0, 30.0), WorldPoint::new(12.0, 4.0)]
        );
    }

    #[test]
    fn test_not_found_is_normal_outcome() {
        let result = estimate(["gamma"], &index());
        assert!(!result.is_found());
        assert!(result.poses().is_empty());
        assert_eq!(result.signature().names(), &["gamma".to_string()]);
    }

    #[test]
    fn test_empty_observation_matches_empty_signature() {
        let result = estimate(Vec::<String>::new(), &index());
        assert_eq!(result.poses(), &[PoseSample::new(30, 30, 255.0)]);
    }

    #[test]
    fn test_query_normalization_matches_build() {
        let estimator = PoseEstimator::new(index());
        assert!(estimator.estimate(["shop:ALPHA", "  beta "]).is_found());
        assert!(estimator.estimate(["Alpha|", "Beta/", "alpha"]).is_found());
    }

    #[test]
    fn test_estimator_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PoseEstimator>();
    }
}
