use crate::geometry::ArcMode;
use crate::pose::Landmark;

/// 1フレームから求める7関節
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum Joint {
    Neck = 0,
    Pelvis = 1,
    Shoulder = 2,
    Elbow = 3,
    Wrist = 4,
    Knee = 5,
    Ankle = 6,
}

impl Joint {
    pub const COUNT: usize = 7;

    pub const ALL: [Joint; Self::COUNT] = [
        Self::Neck,
        Self::Pelvis,
        Self::Shoulder,
        Self::Elbow,
        Self::Wrist,
        Self::Knee,
        Self::Ankle,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Neck => "neck",
            Self::Pelvis => "pelvis",
            Self::Shoulder => "shoulder",
            Self::Elbow => "elbow",
            Self::Wrist => "wrist",
            Self::Knee => "knee",
            Self::Ankle => "ankle",
        }
    }

    pub fn definition(&self) -> &'static JointDefinition {
        &JOINT_DEFINITIONS[*self as usize]
    }
}

/// 関節角を求める3点（近位, 頂点, 遠位）と円弧の向き
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JointDefinition {
    pub joint: Joint,
    pub proximal: Landmark,
    pub vertex: Landmark,
    pub distal: Landmark,
    pub arc_mode: ArcMode,
}

const fn def(
    joint: Joint,
    proximal: Landmark,
    vertex: Landmark,
    distal: Landmark,
    arc_mode: ArcMode,
) -> JointDefinition {
    JointDefinition {
        joint,
        proximal,
        vertex,
        distal,
        arc_mode,
    }
}

/// 関節ごとの3点表（`Joint` の並び順）
pub static JOINT_DEFINITIONS: [JointDefinition; Joint::COUNT] = [
    def(Joint::Neck, Landmark::Head, Landmark::Shoulder, Landmark::Hip, ArcMode::Opposite),
    def(Joint::Pelvis, Landmark::HipOffset, Landmark::Hip, Landmark::Shoulder, ArcMode::Short),
    def(Joint::Shoulder, Landmark::Hip, Landmark::Shoulder, Landmark::Elbow, ArcMode::Short),
    def(Joint::Elbow, Landmark::Shoulder, Landmark::Elbow, Landmark::Wrist, ArcMode::Short),
    def(Joint::Wrist, Landmark::Elbow, Landmark::Wrist, Landmark::Hand, ArcMode::Short),
    def(Joint::Knee, Landmark::Hip, Landmark::Knee, Landmark::Ankle, ArcMode::Short),
    def(Joint::Ankle, Landmark::Forefoot, Landmark::Ankle, Landmark::Knee, ArcMode::Short),
];
