use serde::{Deserialize, Serialize};
use std::ops::Sub;

/// 2次元の点 (正規化座標 0.0〜1.0 またはピクセル座標)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// X方向にずらした点
    pub fn offset_x(&self, dx: f64) -> Self {
        Self::new(self.x + dx, self.y)
    }

    /// ピクセル座標に変換（整数ピクセルに切り捨て）
    pub fn to_pixel(&self, width: u32, height: u32) -> Self {
        let px = (self.x * width as f64).trunc();
        let py = (self.y * height as f64).trunc();
        Self::new(px, py)
    }
}

impl Sub for Point2D {
    type Output = Vector2D;

    fn sub(self, rhs: Point2D) -> Vector2D {
        Vector2D::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// 2次元ベクトル (dx, dy)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector2D {
    pub dx: f64,
    pub dy: f64,
}

impl Vector2D {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn dot(&self, other: Vector2D) -> f64 {
        self.dx * other.dx + self.dy * other.dy
    }

    pub fn length(&self) -> f64 {
        (self.dx * self.dx + self.dy * self.dy).sqrt()
    }

    pub fn scale(&self, k: f64) -> Self {
        Self::new(self.dx * k, self.dy * k)
    }
}

/// 角度を [0, 360) に正規化
fn normalize_degrees(deg: f64) -> f64 {
    let d = deg.rem_euclid(360.0);
    // 負の微小値は 360.0 に丸まるので 0 に戻す。-0.0 も +0.0 にする
    if d >= 360.0 {
        0.0
    } else {
        d + 0.0
    }
}

/// X軸正方向から見たベクトルの方位角（度, [0, 360)）
///
/// ゼロベクトルでも定義される: atan2(0, 0) = 0 なので 0°
pub fn bearing(v: Vector2D) -> f64 {
    normalize_degrees(v.dy.atan2(v.dx).to_degrees())
}

/// 2ベクトルのなす角（度, [0, 180]）
///
/// cos(θ) = (v1 · v2) / (|v1| × |v2|)
///
/// どちらかが長さ0、または浮動小数点誤差で cos が [-1, 1] を外れた場合は
/// `None`（未定義）。エラーではなく正当な結果として扱う。
pub fn included_angle(v1: Vector2D, v2: Vector2D) -> Option<f64> {
    let norms = v1.length() * v2.length();
    if norms == 0.0 {
        return None;
    }

    let cos_angle = v1.dot(v2) / norms;
    // NaN もここで弾かれる
    if !(-1.0..=1.0).contains(&cos_angle) {
        return None;
    }

    Some(cos_angle.acos().to_degrees())
}

/// 円弧の選び方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArcMode {
    /// 短い方の弧
    #[default]
    Short,
    /// 反対側（補角側）の弧
    Opposite,
}

/// 描画用の円弧範囲（度）。end は 360 を超えることがある
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSpan {
    pub start: f64,
    pub end: f64,
}

impl ArcSpan {
    /// 弧の掃引角
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }
}

/// 2つの方位角から描画する円弧の範囲を決める
///
/// - Short: 差が180°を超えるなら max → min+360、そうでなければ min → max
/// - Opposite: 同じ判定で分岐を入れ替える（差が180°以下なら min → max+360）
pub fn arc_span(bearing1: f64, bearing2: f64, mode: ArcMode) -> ArcSpan {
    let b1 = normalize_degrees(bearing1);
    let b2 = normalize_degrees(bearing2);
    let (lo, hi) = if b1 <= b2 { (b1, b2) } else { (b2, b1) };
    let wraps = (b2 - b1).abs() > 180.0;

    match (mode, wraps) {
        (ArcMode::Short, true) => ArcSpan { start: hi, end: lo + 360.0 },
        (ArcMode::Short, false) => ArcSpan { start: lo, end: hi },
        (ArcMode::Opposite, true) => ArcSpan { start: lo, end: hi },
        (ArcMode::Opposite, false) => ArcSpan { start: lo, end: hi + 360.0 },
    }
}
