use super::joint::SkeletonJoint;

/// 骨格モデルの19点
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum SkeletonPoint {
    Pelvis = 0,
    Neck = 1,
    Head = 2,
    HipRight = 3,
    KneeRight = 4,
    AnkleRight = 5,
    FootRight = 6,
    HipLeft = 7,
    KneeLeft = 8,
    AnkleLeft = 9,
    FootLeft = 10,
    ShoulderRight = 11,
    ElbowRight = 12,
    WristRight = 13,
    HandRight = 14,
    ShoulderLeft = 15,
    ElbowLeft = 16,
    WristLeft = 17,
    HandLeft = 18,
}

impl SkeletonPoint {
    pub const COUNT: usize = 19;

    /// 角度から再計算しない固定点（骨盤・第1椎骨）
    pub fn is_root(&self) -> bool {
        matches!(self, Self::Pelvis | Self::Neck)
    }
}

/// 剛体リンクの種類（左右で共通の長さ）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(usize)]
pub enum LinkKind {
    Trunk = 0,
    Neck = 1,
    Thigh = 2,
    Shank = 3,
    Foot = 4,
    UpperArm = 5,
    Forearm = 6,
    Hand = 7,
}

impl LinkKind {
    pub const COUNT: usize = 8;
}

/// 骨格の接続 (開始点, 終了点, 関節, リンク)
///
/// 関節・リンクを持たない接続は体幹からの固定オフセット。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Connection {
    pub start: SkeletonPoint,
    pub end: SkeletonPoint,
    pub joint: Option<SkeletonJoint>,
    pub link: Option<LinkKind>,
}

const fn driven(start: SkeletonPoint, end: SkeletonPoint, joint: SkeletonJoint, link: LinkKind) -> Connection {
    Connection {
        start,
        end,
        joint: Some(joint),
        link: Some(link),
    }
}

const fn fixed(start: SkeletonPoint, end: SkeletonPoint) -> Connection {
    Connection {
        start,
        end,
        joint: None,
        link: None,
    }
}

/// 親から子の順。親の新しい終点が子の始点になる
pub static SKELETON_CONNECTIONS: [Connection; 18] = {
    use LinkKind as L;
    use SkeletonJoint as J;
    use SkeletonPoint as P;
    [
        // 脊柱
        driven(P::Pelvis, P::Neck, J::Pelvis, L::Trunk),
        driven(P::Neck, P::Head, J::Neck, L::Neck),
        // 右脚
        fixed(P::Pelvis, P::HipRight),
        driven(P::HipRight, P::KneeRight, J::HipRight, L::Thigh),
        driven(P::KneeRight, P::AnkleRight, J::KneeRight, L::Shank),
        driven(P::AnkleRight, P::FootRight, J::AnkleRight, L::Foot),
        // 左脚
        fixed(P::Pelvis, P::HipLeft),
        driven(P::HipLeft, P::KneeLeft, J::HipLeft, L::Thigh),
        driven(P::KneeLeft, P::AnkleLeft, J::KneeLeft, L::Shank),
        driven(P::AnkleLeft, P::FootLeft, J::AnkleLeft, L::Foot),
        // 右腕
        fixed(P::Neck, P::ShoulderRight),
        driven(P::ShoulderRight, P::ElbowRight, J::ShoulderRight, L::UpperArm),
        driven(P::ElbowRight, P::WristRight, J::ElbowRight, L::Forearm),
        driven(P::WristRight, P::HandRight, J::WristRight, L::Hand),
        // 左腕
        fixed(P::Neck, P::ShoulderLeft),
        driven(P::ShoulderLeft, P::ElbowLeft, J::ShoulderLeft, L::UpperArm),
        driven(P::ElbowLeft, P::WristLeft, J::ElbowLeft, L::Forearm),
        driven(P::WristLeft, P::HandLeft, J::WristLeft, L::Hand),
    ]
};

/// 初期姿勢 (x, y, z)
pub const REST_POSE: [[f64; 3]; SkeletonPoint::COUNT] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.0, 5.5],
    [0.0, 0.0, 8.0],
    [1.0, 0.0, 0.0],
    [1.0, 0.0, -4.5],
    [1.0, 0.0, -9.0],
    [1.0, 1.0, -9.0],
    [-1.0, 0.0, 0.0],
    [-1.0, 0.0, -4.5],
    [-1.0, 0.0, -9.0],
    [-1.0, 1.0, -9.0],
    [2.5, 0.0, 5.5],
    [2.5, 0.0, 2.5],
    [2.5, 0.0, 0.0],
    [2.5, 1.0, 0.0],
    [-2.5, 0.0, 5.5],
    [-2.5, 0.0, 2.5],
    [-2.5, 0.0, 0.0],
    [-2.5, 1.0, 0.0],
];

/// 関節が駆動する接続
pub fn connection_of(joint: SkeletonJoint) -> &'static Connection {
    let index = match joint {
        SkeletonJoint::Pelvis => 0,
        SkeletonJoint::Neck => 1,
        SkeletonJoint::HipRight => 3,
        SkeletonJoint::KneeRight => 4,
        SkeletonJoint::AnkleRight => 5,
        SkeletonJoint::HipLeft => 7,
        SkeletonJoint::KneeLeft => 8,
        SkeletonJoint::AnkleLeft => 9,
        SkeletonJoint::ShoulderRight => 11,
        SkeletonJoint::ElbowRight => 12,
        SkeletonJoint::WristRight => 13,
        SkeletonJoint::ShoulderLeft => 15,
        SkeletonJoint::ElbowLeft => 16,
        SkeletonJoint::WristLeft => 17,
    };
    &SKELETON_CONNECTIONS[index]
}
