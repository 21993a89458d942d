pub mod keypoint;
pub mod landmark;
pub mod source;

pub use keypoint::{KeypointIndex, KeypointSet};
pub use landmark::{KeypointMapper, Landmark, LandmarkMap, DEFAULT_LANDMARK_OFFSET};
pub use source::{Detections, JsonLinesSource, PoseSource, ReplaySource};
