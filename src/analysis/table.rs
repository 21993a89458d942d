use std::collections::HashMap;

use crate::skeleton::{Side, SkeletonJoint};

use super::frame::FrameAngles;
use super::joint::Joint;

/// 1関節の現在値・最大・最小
///
/// 最初の有効なサンプルで最大・最小の両方を初期化する。
/// 0° も正当な値として扱うため、初期化済みかどうかは `has_baseline` で持つ。
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AngleStats {
    pub current: Option<f64>,
    pub max: f64,
    pub min: f64,
    pub has_baseline: bool,
}

impl AngleStats {
    /// 新しいサンプルを記録。未定義なら現在値だけ消して範囲は保持する
    pub fn record(&mut self, angle: Option<f64>) {
        self.current = angle;
        let Some(angle) = angle else {
            return;
        };

        if !self.has_baseline {
            self.max = angle;
            self.min = angle;
            self.has_baseline = true;
            return;
        }

        if angle > self.max {
            self.max = angle;
        }
        if angle < self.min {
            self.min = angle;
        }
    }

    /// [現在値, 最大, 最小]。未記録の値は 0
    pub fn as_row(&self) -> [f64; 3] {
        [self.current.unwrap_or(0.0), self.max, self.min]
    }
}

/// 14関節の角度テーブル
///
/// 表示側が所有し、フレームごとに1回更新する。
#[derive(Debug, Clone, PartialEq, Default)]
pub struct JointAngleTable {
    rows: [AngleStats; SkeletonJoint::COUNT],
}

impl JointAngleTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, joint: SkeletonJoint) -> &AngleStats {
        &self.rows[joint as usize]
    }

    pub fn record(&mut self, joint: SkeletonJoint, angle: Option<f64>) {
        self.rows[joint as usize].record(angle);
    }

    /// 片側カメラのフレーム結果をテーブルに反映
    ///
    /// 骨盤角は Pelvis と撮影側の Hip の両方に入る。
    pub fn record_frame(&mut self, side: Side, frame: &FrameAngles) {
        for (joint, result) in frame.iter() {
            for target in table_rows(joint, side) {
                self.record(target, result.angle);
            }
        }
    }

    /// 最大・最小を含めて全行をクリア
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn iter(&self) -> impl Iterator<Item = (SkeletonJoint, &AngleStats)> + '_ {
        SkeletonJoint::ALL
            .into_iter()
            .map(move |j| (j, &self.rows[j as usize]))
    }

    /// 現在値が定義されている関節の角度（度）
    pub fn current_angles(&self) -> HashMap<SkeletonJoint, f64> {
        self.iter()
            .filter_map(|(joint, stats)| stats.current.map(|angle| (joint, angle)))
            .collect()
    }
}

fn table_rows(joint: Joint, side: Side) -> impl Iterator<Item = SkeletonJoint> {
    let (row, extra) = match joint {
        Joint::Neck => (SkeletonJoint::Neck, None),
        Joint::Pelvis => (SkeletonJoint::Pelvis, Some(SkeletonJoint::hip(side))),
        Joint::Shoulder => (SkeletonJoint::shoulder(side), None),
        Joint::Elbow => (SkeletonJoint::elbow(side), None),
        Joint::Wrist => (SkeletonJoint::wrist(side), None),
        Joint::Knee => (SkeletonJoint::knee(side), None),
        Joint::Ankle => (SkeletonJoint::ankle(side), None),
    };
    std::iter::once(row).chain(extra)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::FrameAnalyzer;
    use crate::geometry::Point2D;

    #[test]
    fn test_table_rows() {
        let rows: Vec<_> = table_rows(Joint::Pelvis, Side::Left).collect();
        assert_eq!(rows, [SkeletonJoint::Pelvis, SkeletonJoint::HipLeft]);
        let rows: Vec<_> = table_rows(Joint::Knee, Side::Right).collect();
        assert_eq!(rows, [SkeletonJoint::KneeRight]);
        assert_eq!(table_rows(Joint::Neck, Side::Left).collect::<Vec<_>>(), [SkeletonJoint::Neck]);
    }

    #[test]
    fn test_first_sample_seeds_both_bounds() {
        let mut stats = AngleStats::default();
        assert_eq!(stats.as_row(), [0.0, 0.0, 0.0]);
        for angle in [45.0, 10.0, 90.0] {
            stats.record(Some(angle));
        }
        assert_eq!(stats.as_row(), [90.0, 90.0, 10.0]);
    }

    #[test]
    fn test_zero_degrees_is_a_real_minimum() {
        let mut stats = AngleStats::default();
        stats.record(Some(20.0));
        stats.record(Some(0.0));
        stats.record(Some(15.0));
        assert_eq!(stats.min, 0.0);
        assert_eq!(stats.max, 20.0);
    }

    #[test]
    fn test_undefined_keeps_bounds() {
        let mut stats = AngleStats::default();
        stats.record(None);
        assert!(!stats.has_baseline);
        stats.record(Some(30.0));
        stats.record(None);
        assert_eq!(stats.current, None);
        assert_eq!((stats.max, stats.min), (30.0, 30.0));
    }

    #[test]
    fn test_record_frame_maps_to_side() {
        let keypoints: Vec<Point2D> = [
            (0.50, 0.90),
            (0.50, 0.80),
            (0.50, 0.50),
            (0.50, 0.30),
            (0.50, 0.10),
            (0.70, 0.15),
            (0.85, 0.20),
            (0.85, 0.22),
            (0.50, 0.00),
        ]
        .iter()
        .map(|&(x, y)| Point2D::new(x, y))
        .collect();
        let frame = FrameAnalyzer::default().analyze_keypoints(&keypoints).unwrap();

        let mut table = JointAngleTable::new();
        table.record_frame(Side::Left, &frame);

        assert_eq!(table.get(SkeletonJoint::KneeLeft).current, frame.angle(Joint::Knee));
        assert_eq!(table.get(SkeletonJoint::Pelvis).current, frame.angle(Joint::Pelvis));
        assert_eq!(table.get(SkeletonJoint::HipLeft).current, frame.angle(Joint::Pelvis));
        assert_eq!(table.get(SkeletonJoint::KneeRight).current, None);
        assert!(!table.get(SkeletonJoint::ElbowRight).has_baseline);
        assert_eq!(table.current_angles().len(), 8);
    }

    #[test]
    fn test_reset() {
        let mut table = JointAngleTable::new();
        table.record(SkeletonJoint::Neck, Some(12.0));
        table.reset();
        assert_eq!(table, JointAngleTable::new());
    }
}
