use crate::error::AnalysisError;
use crate::geometry::Point2D;

use super::keypoint::{KeypointIndex, KeypointSet};

/// 合成ランドマークのX方向オフセット（正規化座標）
pub const DEFAULT_LANDMARK_OFFSET: f64 = 0.05;

/// 解剖学的ランドマーク
///
/// 検出点をそのままコピーしたものと、既存の点から合成したもの
/// （Forefoot, HipOffset）がある。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Landmark {
    Toe = 0,
    Ankle = 1,
    Knee = 2,
    Hip = 3,
    Shoulder = 4,
    Elbow = 5,
    Wrist = 6,
    Hand = 7,
    Head = 8,
    /// 足首から +X にずらした点。足関節角の計算専用
    Forefoot = 9,
    /// 腰から +X にずらした水平基準点。骨盤傾斜の計算専用
    HipOffset = 10,
}

impl Landmark {
    pub const COUNT: usize = 11;

    pub const ALL: [Landmark; Self::COUNT] = [
        Self::Toe,
        Self::Ankle,
        Self::Knee,
        Self::Hip,
        Self::Shoulder,
        Self::Elbow,
        Self::Wrist,
        Self::Hand,
        Self::Head,
        Self::Forefoot,
        Self::HipOffset,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Toe => "toe",
            Self::Ankle => "ankle",
            Self::Knee => "knee",
            Self::Hip => "hip",
            Self::Shoulder => "shoulder",
            Self::Elbow => "elbow",
            Self::Wrist => "wrist",
            Self::Hand => "hand",
            Self::Head => "head",
            Self::Forefoot => "forefoot",
            Self::HipOffset => "hip_offset",
        }
    }

    /// コピー元のキーポイント。合成ランドマークは `None`
    pub fn source(&self) -> Option<KeypointIndex> {
        match self {
            Self::Toe => Some(KeypointIndex::Toe),
            Self::Ankle => Some(KeypointIndex::Ankle),
            Self::Knee => Some(KeypointIndex::Knee),
            Self::Hip => Some(KeypointIndex::Hip),
            Self::Shoulder => Some(KeypointIndex::Shoulder),
            Self::Elbow => Some(KeypointIndex::Elbow),
            Self::Wrist => Some(KeypointIndex::Wrist),
            Self::Hand => Some(KeypointIndex::Hand),
            Self::Head => Some(KeypointIndex::Head),
            Self::Forefoot | Self::HipOffset => None,
        }
    }
}

/// 1フレーム分のランドマーク位置。全ランドマークが必ず揃っている
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkMap {
    points: [Point2D; Landmark::COUNT],
}

impl LandmarkMap {
    pub fn get(&self, landmark: Landmark) -> Point2D {
        self.points[landmark as usize]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Landmark, Point2D)> + '_ {
        Landmark::ALL.into_iter().map(move |l| (l, self.points[l as usize]))
    }

    /// 全ランドマークをピクセル座標に変換
    pub fn to_pixels(&self, width: u32, height: u32) -> Self {
        Self {
            points: self.points.map(|p| p.to_pixel(width, height)),
        }
    }
}

/// モデル出力のキーポイント列 → 名前付きランドマーク
#[derive(Debug, Clone, Copy)]
pub struct KeypointMapper {
    offset: f64,
}

impl KeypointMapper {
    pub fn new(offset: f64) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// 点列をランドマークに対応付け、合成点を追加する
    ///
    /// 点列がインデックス表より短ければ `MissingLandmark`。
    pub fn map(&self, raw: &[Point2D]) -> Result<LandmarkMap, AnalysisError> {
        let keypoints = KeypointSet::from_slice(raw)?;
        Ok(self.map_set(&keypoints))
    }

    pub fn map_set(&self, keypoints: &KeypointSet) -> LandmarkMap {
        let mut points = [Point2D::default(); Landmark::COUNT];
        for landmark in Landmark::ALL {
            if let Some(index) = landmark.source() {
                points[landmark as usize] = keypoints.get(index);
            }
        }

        points[Landmark::Forefoot as usize] = keypoints.get(KeypointIndex::Ankle).offset_x(self.offset);
        points[Landmark::HipOffset as usize] = keypoints.get(KeypointIndex::Hip).offset_x(self.offset);

        LandmarkMap { points }
    }
}

impl Default for KeypointMapper {
    fn default() -> Self {
        Self::new(DEFAULT_LANDMARK_OFFSET)
    }
}
