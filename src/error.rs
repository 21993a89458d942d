use thiserror::Error;

/// フレーム全体を中断する構造的な失敗
///
/// 幾何的に未定義な角度はここに含めない（関節ごとに `None` で返す）。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    #[error("missing landmark: got {actual} keypoints, {required} required")]
    MissingLandmark { required: usize, actual: usize },

    #[error("no subject detected in frame")]
    NoDetection,
}
