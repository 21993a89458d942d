pub mod joint;
pub mod links;
pub mod model;

pub use joint::{Side, SkeletonJoint};
pub use links::{connection_of, Connection, LinkKind, SkeletonPoint, REST_POSE, SKELETON_CONNECTIONS};
pub use model::{link_end, SkeletonModel};
