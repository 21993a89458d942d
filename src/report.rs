//! Observed joint ranges against reference ranges.
//!
//! Each joint has a reference interval for its minimum and for its maximum
//! angle over a session. The closeness score is the same red-to-green
//! gradient the range bars show: 1 at the interval centre, 0 at its edges.

use serde::Deserialize;

use crate::analysis::JointAngleTable;
use crate::skeleton::SkeletonJoint;

/// 関節ごとの最適範囲（最小角・最大角それぞれの区間, 度）
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OptimalRange {
    pub joint: SkeletonJoint,
    pub min_range: (f64, f64),
    pub max_range: (f64, f64),
}

/// デフォルトの最適範囲表
pub fn default_ranges() -> Vec<OptimalRange> {
    SkeletonJoint::ALL
        .iter()
        .map(|&joint| {
            let (min_range, max_range) = match joint {
                SkeletonJoint::Pelvis | SkeletonJoint::Neck => ((25.0, 35.0), (145.0, 155.0)),
                _ => ((30.0, 40.0), (150.0, 160.0)),
            };
            OptimalRange {
                joint,
                min_range,
                max_range,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeStatus {
    Below,
    Within,
    Above,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeCheck {
    pub value: f64,
    pub status: RangeStatus,
    /// 区間中央への近さ [0, 1]
    pub score: f64,
}

impl RangeCheck {
    pub fn new(value: f64, (start, end): (f64, f64)) -> Self {
        let status = if value < start {
            RangeStatus::Below
        } else if value > end {
            RangeStatus::Above
        } else {
            RangeStatus::Within
        };

        let mid = (start + end) / 2.0;
        let half = (end - start) / 2.0;
        let score = if half > 0.0 {
            (1.0 - (value - mid).abs() / half).max(0.0)
        } else if value == mid {
            1.0
        } else {
            0.0
        };

        Self { value, status, score }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeReport {
    pub joint: SkeletonJoint,
    pub min: RangeCheck,
    pub max: RangeCheck,
}

/// 記録済みの関節だけを評価する
pub fn evaluate(table: &JointAngleTable, ranges: &[OptimalRange]) -> Vec<RangeReport> {
    ranges
        .iter()
        .filter_map(|range| {
            let stats = table.get(range.joint);
            if !stats.has_baseline {
                return None;
            }
            Some(RangeReport {
                joint: range.joint,
                min: RangeCheck::new(stats.min, range.min_range),
                max: RangeCheck::new(stats.max, range.max_range),
            })
        })
        .collect()
}
