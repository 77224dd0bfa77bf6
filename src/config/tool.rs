use super::VectorizerConfig;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct ToolConfig {
    /// Source image; any format the `image` crate decodes.
    pub input: PathBuf,
    /// Grayscale values strictly above this become road pixels.
    #[serde(default = "default_threshold")]
    pub threshold: u8,
    #[serde(default)]
    pub vectorizer: VectorizerConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Destination of the road-graph JSON.
    pub roads_json: PathBuf,
    /// Optional debug artifact: binarized input mask.
    #[serde(default)]
    pub mask_png: Option<PathBuf>,
    /// Optional debug artifact: thinned skeleton.
    #[serde(default)]
    pub skeleton_png: Option<PathBuf>,
    /// Optional debug artifact: colorized label raster.
    #[serde(default)]
    pub labels_png: Option<PathBuf>,
}

fn default_threshold() -> u8 {
    30
}

pub fn load_config(path: &Path) -> Result<ToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_parses() {
        let cfg: ToolConfig = serde_json::from_str(
            r#"{
                "input": "tile.png",
                "output": { "roads_json": "roads.json" }
            }"#,
        )
        .expect("valid config");
        assert_eq!(cfg.threshold, 30);
        assert!(cfg.output.mask_png.is_none());
        assert_eq!(cfg.vectorizer.min_blob_px, 250);
    }
}
