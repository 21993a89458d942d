use crate::geometry::Point2D;
use crate::pose::Landmark;
use crate::skeleton::Side;

use super::frame::FrameAngles;

/// 片側の膝・足首の軌跡
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SideTrajectory {
    pub knee: Vec<Point2D>,
    pub ankle: Vec<Point2D>,
}

/// 左右の膝・足首の軌跡（解析画面のトラジェクトリ表示用）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrajectoryLog {
    left: SideTrajectory,
    right: SideTrajectory,
}

impl TrajectoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, side: Side, frame: &FrameAngles) {
        let landmarks = frame.landmarks();
        let trajectory = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        trajectory.knee.push(landmarks.get(Landmark::Knee));
        trajectory.ankle.push(landmarks.get(Landmark::Ankle));
    }

    pub fn side(&self, side: Side) -> &SideTrajectory {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
