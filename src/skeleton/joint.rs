use serde::{Deserialize, Serialize};

/// カメラが撮影している体の側
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    #[default]
    Right,
}

/// 角度テーブル・骨格モデルで共有する14関節
///
/// 並び順は角度テーブルの行順と一致する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(usize)]
pub enum SkeletonJoint {
    Pelvis = 0,
    Neck = 1,
    HipRight = 2,
    KneeRight = 3,
    AnkleRight = 4,
    HipLeft = 5,
    KneeLeft = 6,
    AnkleLeft = 7,
    ShoulderRight = 8,
    ElbowRight = 9,
    WristRight = 10,
    ShoulderLeft = 11,
    ElbowLeft = 12,
    WristLeft = 13,
}

impl SkeletonJoint {
    pub const COUNT: usize = 14;

    pub const ALL: [SkeletonJoint; Self::COUNT] = [
        Self::Pelvis,
        Self::Neck,
        Self::HipRight,
        Self::KneeRight,
        Self::AnkleRight,
        Self::HipLeft,
        Self::KneeLeft,
        Self::AnkleLeft,
        Self::ShoulderRight,
        Self::ElbowRight,
        Self::WristRight,
        Self::ShoulderLeft,
        Self::ElbowLeft,
        Self::WristLeft,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Pelvis => "Pelvis",
            Self::Neck => "Neck",
            Self::HipRight => "Hip R",
            Self::KneeRight => "Knee R",
            Self::AnkleRight => "Ankle R",
            Self::HipLeft => "Hip L",
            Self::KneeLeft => "Knee L",
            Self::AnkleLeft => "Ankle L",
            Self::ShoulderRight => "Shoulder R",
            Self::ElbowRight => "Elbow R",
            Self::WristRight => "Wrist R",
            Self::ShoulderLeft => "Shoulder L",
            Self::ElbowLeft => "Elbow L",
            Self::WristLeft => "Wrist L",
        }
    }

    /// 下肢の関節（順運動学でZ軸を反転する）
    pub fn is_lower_limb(&self) -> bool {
        matches!(
            self,
            Self::HipRight
                | Self::KneeRight
                | Self::AnkleRight
                | Self::HipLeft
                | Self::KneeLeft
                | Self::AnkleLeft
        )
    }

    pub fn hip(side: Side) -> Self {
        match side {
            Side::Right => Self::HipRight,
            Side::Left => Self::HipLeft,
        }
    }

    pub fn knee(side: Side) -> Self {
        match side {
            Side::Right => Self::KneeRight,
            Side::Left => Self::KneeLeft,
        }
    }

    pub fn ankle(side: Side) -> Self {
        match side {
            Side::Right => Self::AnkleRight,
            Side::Left => Self::AnkleLeft,
        }
    }

    pub fn shoulder(side: Side) -> Self {
        match side {
            Side::Right => Self::ShoulderRight,
            Side::Left => Self::ShoulderLeft,
        }
    }

    pub fn elbow(side: Side) -> Self {
        match side {
            Side::Right => Self::ElbowRight,
            Side::Left => Self::ElbowLeft,
        }
    }

    pub fn wrist(side: Side) -> Self {
        match side {
            Side::Right => Self::WristRight,
            Side::Left => Self::WristLeft,
        }
    }
}
