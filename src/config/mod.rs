//! Runtime configuration for the demo binary, loaded from JSON.
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::scales::ScaleRange;
use crate::vesselness::VesselnessParams;

#[derive(Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving one PNG per scale layer.
    pub layers_dir: Option<PathBuf>,
    /// Path of the JSON run report.
    pub report_out: Option<PathBuf>,
}

#[derive(Clone, Deserialize)]
pub struct RuntimeConfig {
    pub input_path: PathBuf,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub scale_range: ScaleRange,
    #[serde(default)]
    pub params: VesselnessParams,
}

pub fn load_config(path: &Path) -> Result<RuntimeConfig, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: RuntimeConfig = serde_json::from_str(&contents)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config: RuntimeConfig =
            serde_json::from_str(r#"{ "input_path": "vessels.png" }"#).unwrap();
        assert_eq!(config.scale_range.steps_per_octave, 2);
        assert_eq!(config.params.k, 0.5);
        assert!(!config.params.use_hard_max);
        assert!(config.output.layers_dir.is_none());
    }

    #[test]
    fn full_config_round_trips() {
        let config: RuntimeConfig = serde_json::from_str(
            r#"{
                "input_path": "in.png",
                "output": { "layers_dir": "out", "report_out": "out/report.json" },
                "scale_range": { "sigma0": 1.0, "sigma_max": 8.0, "steps_per_octave": 4 },
                "params": { "k": 0.25, "beta": 1.0, "use_hard_max": true }
            }"#,
        )
        .unwrap();
        assert_eq!(config.scale_range.sigma_max, 8.0);
        assert_eq!(config.params.beta, 1.0);
        assert!(config.params.use_hard_max);
    }
}
