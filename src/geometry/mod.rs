pub mod angle;
pub mod vector;

pub use angle::{angle_at, chained_angle, AngleResult};
pub use vector::{arc_span, bearing, included_angle, ArcMode, ArcSpan, Point2D, Vector2D};
