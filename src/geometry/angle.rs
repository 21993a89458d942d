//! Angle at a joint from three landmark points.
//!
//! Both vectors start at the vertex: v1 = p1 - vertex, v2 = p2 - vertex.
//! The result keeps every intermediate value so a renderer can draw the two
//! segments and the arc without recomputing geometry.

use super::vector::{arc_span, bearing, included_angle, ArcMode, ArcSpan, Point2D, Vector2D};

/// 1関節・1フレーム分の角度計算結果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleResult {
    /// なす角（度, 小数2桁に丸め）。`None` は未定義
    pub angle: Option<f64>,
    /// vector1 の方位角（度, [0, 360)）
    pub bearing1: f64,
    /// vector2 の方位角（度, [0, 360)）
    pub bearing2: f64,
    pub vector1: Vector2D,
    pub vector2: Vector2D,
    pub p1: Point2D,
    /// 頂点（関節位置）
    pub p2: Point2D,
    pub p3: Point2D,
}

impl AngleResult {
    /// 描画用の円弧範囲
    pub fn arc_span(&self, mode: ArcMode) -> ArcSpan {
        arc_span(self.bearing1, self.bearing2, mode)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// vertex を頂点とする p1-vertex-p2 の角度
pub fn angle_at(p1: Point2D, vertex: Point2D, p2: Point2D) -> AngleResult {
    let vector1 = p1 - vertex;
    let vector2 = p2 - vertex;
    build(vector1, vector2, p1, vertex, p2)
}

/// 旧形式: 経路に沿って v1 = p2 - p1, v2 = p3 - p2 を取る
///
/// 関節の角度ではなく進行方向の変化量（180° - 関節角）になる。
/// 過去データとの比較用にだけ残している。
pub fn chained_angle(p1: Point2D, p2: Point2D, p3: Point2D) -> AngleResult {
    let vector1 = p2 - p1;
    let vector2 = p3 - p2;
    build(vector1, vector2, p1, p2, p3)
}

fn build(vector1: Vector2D, vector2: Vector2D, p1: Point2D, p2: Point2D, p3: Point2D) -> AngleResult {
    AngleResult {
        angle: included_angle(vector1, vector2).map(round2),
        bearing1: bearing(vector1),
        bearing2: bearing(vector2),
        vector1,
        vector2,
        p1,
        p2,
        p3,
    }
}
