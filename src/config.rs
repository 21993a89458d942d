use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::pose::DEFAULT_LANDMARK_OFFSET;
use crate::report::{default_ranges, OptimalRange};
use crate::skeleton::Side;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub skeleton: SkeletonConfig,
    #[serde(default)]
    pub input: InputConfig,
    /// 最適範囲の上書き。空ならデフォルト表
    #[serde(default)]
    pub ranges: Vec<OptimalRange>,
    #[serde(default)]
    pub verbose: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AnalysisConfig {
    /// 合成ランドマーク（足先・腰の水平基準）のXオフセット（正規化座標）
    #[serde(default = "default_landmark_offset")]
    pub landmark_offset: f64,
    /// フレーム幅（ピクセル）。高さと両方指定するとピクセル座標で計算
    #[serde(default)]
    pub frame_width: Option<u32>,
    /// フレーム高さ（ピクセル）
    #[serde(default)]
    pub frame_height: Option<u32>,
    /// 単一カメラが撮影している側
    #[serde(default)]
    pub side: Side,
}

fn default_landmark_offset() -> f64 { DEFAULT_LANDMARK_OFFSET }

impl AnalysisConfig {
    pub fn frame_size(&self) -> Option<(u32, u32)> {
        match (self.frame_width, self.frame_height) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            landmark_offset: default_landmark_offset(),
            frame_width: None,
            frame_height: None,
            side: Side::default(),
        }
    }
}

/// 骨格モデルのリンク長（モデル単位）
#[derive(Debug, Deserialize, Clone)]
pub struct SkeletonConfig {
    #[serde(default = "default_trunk")]
    pub trunk: f64,
    #[serde(default = "default_neck")]
    pub neck: f64,
    #[serde(default = "default_thigh")]
    pub thigh: f64,
    #[serde(default = "default_shank")]
    pub shank: f64,
    #[serde(default = "default_foot")]
    pub foot: f64,
    #[serde(default = "default_upper_arm")]
    pub upper_arm: f64,
    #[serde(default = "default_forearm")]
    pub forearm: f64,
    #[serde(default = "default_hand")]
    pub hand: f64,
}

fn default_trunk() -> f64 { 5.5 }
fn default_neck() -> f64 { 2.5 }
fn default_thigh() -> f64 { 4.5 }
fn default_shank() -> f64 { 4.5 }
fn default_foot() -> f64 { 1.4 }
fn default_upper_arm() -> f64 { 3.0 }
fn default_forearm() -> f64 { 2.5 }
fn default_hand() -> f64 { 1.0 }

impl Default for SkeletonConfig {
    fn default() -> Self {
        Self {
            trunk: default_trunk(),
            neck: default_neck(),
            thigh: default_thigh(),
            shank: default_shank(),
            foot: default_foot(),
            upper_arm: default_upper_arm(),
            forearm: default_forearm(),
            hand: default_hand(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct InputConfig {
    /// キーポイント記録（JSON Lines）のパス
    #[serde(default = "default_input_path")]
    pub path: String,
}

fn default_input_path() -> String { "keypoints.jsonl".to_string() }

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            path: default_input_path(),
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// ファイルがなければ Ok(None)
    pub fn load_optional<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// load_optional の結果を確定させる。読めなかった場合はログを出してデフォルト
    pub fn with_fallback<P: AsRef<Path>>(path: P, loaded: Result<Option<Self>>) -> Self {
        match loaded {
            Ok(Some(config)) => config,
            Ok(None) => {
                info!("{} not found, using defaults", path.as_ref().display());
                Self::default()
            }
            Err(e) => {
                warn!("{:#}, using defaults", e);
                Self::default()
            }
        }
    }

    /// 読めなければデフォルト設定
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        Self::with_fallback(path, Self::load_optional(path))
    }

    /// 評価に使う最適範囲表
    pub fn optimal_ranges(&self) -> Vec<OptimalRange> {
        if self.ranges.is_empty() {
            default_ranges()
        } else {
            self.ranges.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::SkeletonJoint;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let file = write_config("");
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.analysis.landmark_offset, 0.05);
        assert_eq!(config.analysis.frame_size(), None);
        assert_eq!(config.analysis.side, Side::Right);
        assert_eq!(config.skeleton.trunk, 5.5);
        assert_eq!(config.input.path, "keypoints.jsonl");
        assert!(!config.verbose);
        assert_eq!(config.optimal_ranges().len(), SkeletonJoint::COUNT);
    }

    #[test]
    fn test_partial_sections() {
        let file = write_config(
            r#"
verbose = true

[analysis]
frame_width = 1920
frame_height = 1080
side = "left"

[skeleton]
thigh = 5.0

[[ranges]]
joint = "knee_right"
min_range = [20.0, 30.0]
max_range = [140.0, 150.0]
"#,
        );
        let config = Config::load(file.path()).unwrap();
        assert!(config.verbose);
        assert_eq!(config.analysis.frame_size(), Some((1920, 1080)));
        assert_eq!(config.analysis.side, Side::Left);
        assert_eq!(config.analysis.landmark_offset, 0.05);
        assert_eq!(config.skeleton.thigh, 5.0);
        assert_eq!(config.skeleton.shank, 4.5);

        let ranges = config.optimal_ranges();
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges[0].joint, SkeletonJoint::KneeRight);
        assert_eq!(ranges[0].min_range, (20.0, 30.0));
    }

    #[test]
    fn test_width_without_height_stays_normalized() {
        let file = write_config("[analysis]\nframe_width = 640\n");
        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.analysis.frame_size(), None);
    }

    #[test]
    fn test_invalid_config_is_error() {
        let file = write_config("[analysis]\nlandmark_offset = \"wide\"\n");
        assert!(Config::load(file.path()).is_err());
        let config = Config::load_or_default(file.path());
        assert_eq!(config.analysis.landmark_offset, 0.05);
    }

    #[test]
    fn test_missing_file_falls_back() {
        assert!(Config::load("no/such/config.toml").is_err());
        let config = Config::load_or_default("no/such/config.toml");
        assert_eq!(config.skeleton.hand, 1.0);
    }

    #[test]
    fn test_load_optional() {
        assert!(Config::load_optional("no/such/config.toml").unwrap().is_none());

        let file = write_config("verbose = true\n");
        let loaded = Config::load_optional(file.path()).unwrap();
        assert!(loaded.as_ref().is_some_and(|c| c.verbose));
        let config = Config::with_fallback(file.path(), Ok(loaded));
        assert!(config.verbose);

        let broken = write_config("verbose = 3\n");
        let loaded = Config::load_optional(broken.path());
        assert!(loaded.is_err());
        assert!(!Config::with_fallback(broken.path(), loaded).verbose);
    }
}
