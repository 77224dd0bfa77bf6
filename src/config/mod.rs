//! Configuration types for the vectorizer and its CLI tool.

mod tool;

pub use tool::{load_config, OutputConfig, ToolConfig};

use crate::merge::MergeOptions;
use serde::{Deserialize, Serialize};

/// Pipeline parameters with the documented defaults.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct VectorizerConfig {
    /// Background regions of at most this many pixels are filled as road.
    pub gap_fill_max_px: usize,
    /// Foreground blobs below this many pixels are removed as noise.
    pub min_blob_px: usize,
    /// Skeleton spurs of at most this many pixels are erased after thinning.
    pub spike_max_len_px: usize,
    /// Radius in pixels of the sampling circle walked around each corner.
    pub junction_sample_radius_px: u32,
    /// Minimum subtended angle in degrees for two roads to merge as one
    /// continuation.
    pub continuity_angle_deg: f32,
    /// Maximum distance in pixels between chain endpoints joined by a merge.
    pub endpoint_merge_dist_px: f32,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            gap_fill_max_px: 60,
            min_blob_px: 250,
            spike_max_len_px: 10,
            junction_sample_radius_px: 10,
            continuity_angle_deg: 130.0,
            endpoint_merge_dist_px: 20.0,
        }
    }
}

impl VectorizerConfig {
    pub fn merge_options(&self) -> MergeOptions {
        MergeOptions {
            sample_radius_px: self.junction_sample_radius_px,
            min_continuation_angle_deg: self.continuity_angle_deg,
            max_endpoint_dist_px: self.endpoint_merge_dist_px,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let cfg = VectorizerConfig::default();
        assert_eq!(cfg.gap_fill_max_px, 60);
        assert_eq!(cfg.min_blob_px, 250);
        assert_eq!(cfg.junction_sample_radius_px, 10);
        assert_eq!(cfg.continuity_angle_deg, 130.0);
        assert_eq!(cfg.endpoint_merge_dist_px, 20.0);
    }

    #[test]
    fn partial_config_deserializes_with_defaults() {
        let cfg: VectorizerConfig = serde_json::from_str(r#"{"min_blob_px": 100}"#)
            .expect("valid partial config");
        assert_eq!(cfg.min_blob_px, 100);
        assert_eq!(cfg.gap_fill_max_px, 60);
    }
}
