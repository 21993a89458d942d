use crate::error::AnalysisError;
use crate::geometry::Point2D;

/// 姿勢推定モデルの出力インデックス（9キーポイント）
///
/// 並び順はモデル側の出力仕様に従う固定の取り決め。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum KeypointIndex {
    Toe = 0,
    Ankle = 1,
    Knee = 2,
    Hip = 3,
    Shoulder = 4,
    Elbow = 5,
    Wrist = 6,
    Hand = 7,
    Head = 8,
}

impl KeypointIndex {
    pub const COUNT: usize = 9;

    pub const ALL: [KeypointIndex; Self::COUNT] = [
        Self::Toe,
        Self::Ankle,
        Self::Knee,
        Self::Hip,
        Self::Shoulder,
        Self::Elbow,
        Self::Wrist,
        Self::Hand,
        Self::Head,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// 1人分のキーポイント列（長さ検証済み）
#[derive(Debug, Clone, PartialEq)]
pub struct KeypointSet {
    pub keypoints: [Point2D; KeypointIndex::COUNT],
}

impl KeypointSet {
    pub fn new(keypoints: [Point2D; KeypointIndex::COUNT]) -> Self {
        Self { keypoints }
    }

    /// モデル出力の点列から作成
    ///
    /// 必要数より短ければ `MissingLandmark`。余分な点は無視する。
    pub fn from_slice(points: &[Point2D]) -> Result<Self, AnalysisError> {
        if points.len() < KeypointIndex::COUNT {
            return Err(AnalysisError::MissingLandmark {
                required: KeypointIndex::COUNT,
                actual: points.len(),
            });
        }

        let mut keypoints = [Point2D::default(); KeypointIndex::COUNT];
        keypoints.copy_from_slice(&points[..KeypointIndex::COUNT]);
        Ok(Self::new(keypoints))
    }

    /// インデックスでキーポイントを取得
    pub fn get(&self, index: KeypointIndex) -> Point2D {
        self.keypoints[index as usize]
    }
}
