use tracing::debug;

use crate::config::AnalysisConfig;
use crate::error::AnalysisError;
use crate::geometry::{angle_at, AngleResult, ArcSpan, Point2D};
use crate::pose::{KeypointMapper, LandmarkMap, DEFAULT_LANDMARK_OFFSET};

use super::joint::Joint;

/// 1フレーム分の関節角（`Joint` ごとに1件）
#[derive(Debug, Clone, PartialEq)]
pub struct FrameAngles {
    results: [AngleResult; Joint::COUNT],
    landmarks: LandmarkMap,
}

impl FrameAngles {
    pub fn get(&self, joint: Joint) -> &AngleResult {
        &self.results[joint as usize]
    }

    /// 関節角（度）。未定義なら `None`
    pub fn angle(&self, joint: Joint) -> Option<f64> {
        self.get(joint).angle
    }

    /// 関節定義の円弧モードで求めた描画範囲
    pub fn arc_span(&self, joint: Joint) -> ArcSpan {
        self.get(joint).arc_span(joint.definition().arc_mode)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Joint, &AngleResult)> + '_ {
        Joint::ALL.into_iter().map(move |j| (j, &self.results[j as usize]))
    }

    /// 角度計算に使ったランドマーク
    pub fn landmarks(&self) -> &LandmarkMap {
        &self.landmarks
    }
}

/// キーポイント → 7関節の角度
///
/// 状態を持たないので、呼び出しごとに独立した結果を返す。
#[derive(Debug, Clone)]
pub struct FrameAnalyzer {
    mapper: KeypointMapper,
    /// 指定時はピクセル座標で角度を計算する
    frame_size: Option<(u32, u32)>,
}

impl FrameAnalyzer {
    /// `offset` は合成ランドマーク（足先・腰オフセット）のずらし量
    pub fn new(offset: f64) -> Self {
        Self {
            mapper: KeypointMapper::new(offset),
            frame_size: None,
        }
    }

    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            frame_size: config.frame_size(),
            ..Self::new(config.landmark_offset)
        }
    }

    pub fn with_frame_size(mut self, width: u32, height: u32) -> Self {
        self.frame_size = Some((width, height));
        self
    }

    /// 検出結果の先頭の人物を解析する
    ///
    /// 人物が1人も検出されていなければ `NoDetection`。
    pub fn analyze_frame(&self, detections: &[Vec<Point2D>]) -> Result<FrameAngles, AnalysisError> {
        let subject = detections.first().ok_or(AnalysisError::NoDetection)?;
        self.analyze_keypoints(subject)
    }

    /// 1人分のキーポイント列を解析する
    pub fn analyze_keypoints(&self, keypoints: &[Point2D]) -> Result<FrameAngles, AnalysisError> {
        let mut landmarks = self.mapper.map(keypoints)?;
        if let Some((width, height)) = self.frame_size {
            landmarks = landmarks.to_pixels(width, height);
        }

        let results = Joint::ALL.map(|joint| {
            let def = joint.definition();
            angle_at(
                landmarks.get(def.proximal),
                landmarks.get(def.vertex),
                landmarks.get(def.distal),
            )
        });

        let undefined = results.iter().filter(|r| r.angle.is_none()).count();
        debug!(undefined, "frame analyzed");

        Ok(FrameAngles { results, landmarks })
    }
}

impl Default for FrameAnalyzer {
    fn default() -> Self {
        Self::new(DEFAULT_LANDMARK_OFFSET)
    }
}
