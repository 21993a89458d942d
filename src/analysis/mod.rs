pub mod frame;
pub mod joint;
pub mod table;
pub mod trajectory;

pub use frame::{FrameAnalyzer, FrameAngles};
pub use joint::{Joint, JointDefinition, JOINT_DEFINITIONS};
pub use table::{AngleStats, JointAngleTable};
pub use trajectory::{SideTrajectory, TrajectoryLog};
