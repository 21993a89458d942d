//! Single-plane forward kinematics for the 3D skeleton view.
//!
//! Each driven link is rotated in the Y-Z plane of its start point:
//! `end = start + length * (0, cos θ, sin θ)`, with `end.z` negated for lower
//! limbs. This is a coarse visualisation aid, not a biomechanical
//! reconstruction.

use nalgebra::{Point3, Vector3};
use std::collections::HashMap;
use tracing::debug;

use crate::analysis::JointAngleTable;
use crate::config::SkeletonConfig;

use super::joint::SkeletonJoint;
use super::links::{connection_of, LinkKind, SkeletonPoint, REST_POSE, SKELETON_CONNECTIONS};

/// 長さ `length`、角度 `theta`（ラジアン）のリンク終点
pub fn link_end(origin: Point3<f64>, length: f64, theta: f64) -> Point3<f64> {
    origin + link_offset(length, theta)
}

fn link_offset(length: f64, theta: f64) -> Vector3<f64> {
    let (sin_t, cos_t) = theta.sin_cos();
    Vector3::new(0.0, length * cos_t, length * sin_t)
}

/// 骨格モデル（19点 + 8種類のリンク長）
#[derive(Debug, Clone, PartialEq)]
pub struct SkeletonModel {
    points: [Point3<f64>; SkeletonPoint::COUNT],
    link_lengths: [f64; LinkKind::COUNT],
}

impl SkeletonModel {
    pub fn new(config: &SkeletonConfig) -> Self {
        Self {
            points: rest_points(),
            link_lengths: [
                config.trunk,
                config.neck,
                config.thigh,
                config.shank,
                config.foot,
                config.upper_arm,
                config.forearm,
                config.hand,
            ],
        }
    }

    /// 初期姿勢に戻す
    pub fn reset(&mut self) {
        self.points = rest_points();
    }

    pub fn point(&self, point: SkeletonPoint) -> Point3<f64> {
        self.points[point as usize]
    }

    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    pub fn link_length(&self, link: LinkKind) -> f64 {
        self.link_lengths[link as usize]
    }

    /// 関節の位置（その関節が駆動する接続の始点）
    pub fn joint_position(&self, joint: SkeletonJoint) -> Point3<f64> {
        self.point(connection_of(joint).start)
    }

    /// 描画用の線分リスト
    pub fn segments(&self) -> Vec<(Point3<f64>, Point3<f64>)> {
        SKELETON_CONNECTIONS
            .iter()
            .map(|c| (self.point(c.start), self.point(c.end)))
            .collect()
    }

    /// 関節角（度）から各リンクの終点を再計算
    ///
    /// 接続表の順に処理するので、親の新しい終点が子の始点になる。
    /// 固定点（骨盤・第1椎骨）は動かさない。下肢は求めた終点のZ座標を反転する。
    /// 角度がない関節は前回の位置を保持する。
    pub fn propagate(&mut self, angles: &HashMap<SkeletonJoint, f64>) {
        for conn in SKELETON_CONNECTIONS.iter() {
            let (Some(joint), Some(link)) = (conn.joint, conn.link) else {
                continue;
            };
            if conn.end.is_root() {
                continue;
            }
            let Some(&degrees) = angles.get(&joint) else {
                debug!(joint = joint.label(), "no angle, keeping previous position");
                continue;
            };

            let start = self.point(conn.start);
            let mut end = link_end(start, self.link_length(link), degrees.to_radians());
            if joint.is_lower_limb() {
                end.z = -end.z;
            }
            self.points[conn.end as usize] = end;
        }
    }

    /// 角度テーブルの現在値で再計算
    pub fn propagate_from_table(&mut self, table: &JointAngleTable) {
        self.propagate(&table.current_angles());
    }
}

impl Default for SkeletonModel {
    fn default() -> Self {
        Self::new(&SkeletonConfig::default())
    }
}

fn rest_points() -> [Point3<f64>; SkeletonPoint::COUNT] {
    REST_POSE.map(|[x, y, z]| Point3::new(x, y, z))
}
