use approx::assert_abs_diff_eq;
use nalgebra::Point3;
use std::collections::HashMap;
use std::io::Write;

use bikefit_angles::analysis::{FrameAnalyzer, Joint, JointAngleTable, TrajectoryLog};
use bikefit_angles::geometry::{angle_at, Point2D};
use bikefit_angles::pose::{Detections, JsonLinesSource, PoseSource, ReplaySource};
use bikefit_angles::skeleton::{link_end, Side, SkeletonJoint, SkeletonModel, SkeletonPoint};
use bikefit_angles::AnalysisError;

fn scenario() -> Vec<Point2D> {
    [
        (0.50, 0.90), // toe
        (0.50, 0.80), // ankle
        (0.50, 0.50), // knee
        (0.50, 0.30), // hip
        (0.50, 0.10), // shoulder
        (0.70, 0.15), // elbow
        (0.85, 0.20), // wrist
        (0.85, 0.22), // hand
        (0.50, 0.00), // head
    ]
    .iter()
    .map(|&(x, y)| Point2D::new(x, y))
    .collect()
}

#[test]
fn test_straight_leg_bent_arm() {
    let frame = FrameAnalyzer::default()
        .analyze_frame(&[scenario()])
        .unwrap();

    assert_abs_diff_eq!(frame.angle(Joint::Knee).unwrap(), 180.0, epsilon = 0.01);

    let elbow = frame.angle(Joint::Elbow).unwrap();
    assert!(elbow > 0.0 && elbow < 180.0);

    let ankle = frame.get(Joint::Ankle);
    assert_eq!(ankle.p1, Point2D::new(0.5 + 0.05, 0.8));
    assert_abs_diff_eq!(ankle.vector1.dx, 0.05, epsilon = 1e-12);
    assert_eq!(ankle.vector1.dy, 0.0);
    assert_abs_diff_eq!(ankle.angle.unwrap(), 90.0, epsilon = 0.01);

    assert_eq!(frame.iter().count(), Joint::COUNT);
}

#[test]
fn test_included_angle_symmetry_on_random_like_points() {
    let points = [
        Point2D::new(0.12, 0.87),
        Point2D::new(0.55, 0.31),
        Point2D::new(0.93, 0.64),
        Point2D::new(0.40, 0.05),
    ];
    for &a in &points {
        for &v in &points {
            for &b in &points {
                if a == v || b == v || a == b {
                    continue;
                }
                let forward = angle_at(a, v, b);
                let backward = angle_at(b, v, a);
                let angle = forward.angle.unwrap();
                assert!((0.0..=180.0).contains(&angle));
                assert_eq!(forward.angle, backward.angle);
                assert_eq!(forward.bearing1, backward.bearing2);
            }
        }
    }
}

#[test]
fn test_running_max_min() {
    let mut table = JointAngleTable::new();
    assert_eq!(table.get(SkeletonJoint::KneeRight).as_row(), [0.0, 0.0, 0.0]);
    for angle in [45.0, 10.0, 90.0] {
        table.record(SkeletonJoint::KneeRight, Some(angle));
    }
    assert_eq!(table.get(SkeletonJoint::KneeRight).as_row(), [90.0, 90.0, 10.0]);
}

#[test]
fn test_forward_kinematics_axis_mapping() {
    let origin = Point3::new(0.0, 0.0, 0.0);
    let length = 2.0;

    let flat = link_end(origin, length, 0.0);
    assert_abs_diff_eq!(flat.x, 0.0);
    assert_abs_diff_eq!(flat.y, length);
    assert_abs_diff_eq!(flat.z, 0.0);

    let up = link_end(origin, length, 90f64.to_radians());
    assert_abs_diff_eq!(up.x, 0.0);
    assert_abs_diff_eq!(up.y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(up.z, length);
}

#[test]
fn test_session_skips_bad_frames() {
    let frames: Vec<Detections> = vec![
        vec![scenario()],
        vec![],
        vec![scenario()[..3].to_vec()],
        vec![scenario()],
    ];
    let mut source = ReplaySource::new(frames);
    let analyzer = FrameAnalyzer::default();
    let mut table = JointAngleTable::new();
    let mut trajectory = TrajectoryLog::new();
    let mut skeleton = SkeletonModel::default();

    let mut errors = Vec::new();
    while let Some(detections) = source.next_frame().unwrap() {
        match analyzer.analyze_frame(&detections) {
            Ok(frame) => {
                table.record_frame(Side::Right, &frame);
                trajectory.record(Side::Right, &frame);
                skeleton.propagate_from_table(&table);
            }
            Err(e) => errors.push(e),
        }
    }

    assert_eq!(
        errors,
        vec![
            AnalysisError::NoDetection,
            AnalysisError::MissingLandmark { required: 9, actual: 3 },
        ]
    );
    assert_eq!(trajectory.side(Side::Right).knee.len(), 2);

    let knee = table.get(SkeletonJoint::KneeRight);
    assert_abs_diff_eq!(knee.max, 180.0, epsilon = 0.01);
    assert_abs_diff_eq!(knee.min, 180.0, epsilon = 0.01);

    // 股関節90°で膝は (1, 0, -4.5)、膝180°で脚リンクは y 方向に -4.5、
    // 下肢なので終点の z が反転される
    let ankle = skeleton.point(SkeletonPoint::AnkleRight);
    let knee_pos = skeleton.point(SkeletonPoint::KneeRight);
    assert_abs_diff_eq!(knee_pos.z, -4.5, epsilon = 1e-9);
    assert_abs_diff_eq!(ankle.y - knee_pos.y, -4.5, epsilon = 1e-9);
    assert_abs_diff_eq!(ankle.z, -knee_pos.z, epsilon = 1e-9);

    let angles: HashMap<SkeletonJoint, f64> = table.current_angles();
    assert!(angles.contains_key(&SkeletonJoint::HipRight));
    assert!(!angles.contains_key(&SkeletonJoint::HipLeft));
}

#[test]
fn test_json_lines_file_round() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let subject: Vec<[f64; 2]> = scenario().iter().map(|p| [p.x, p.y]).collect();
    writeln!(file, "{}", serde_json::to_string(&vec![subject]).unwrap()).unwrap();
    writeln!(file, "[]").unwrap();

    let mut source = JsonLinesSource::open(file.path()).unwrap();
    let analyzer = FrameAnalyzer::default();

    let first = source.next_frame().unwrap().unwrap();
    assert!(analyzer.analyze_frame(&first).is_ok());

    let second = source.next_frame().unwrap().unwrap();
    assert_eq!(analyzer.analyze_frame(&second).unwrap_err(), AnalysisError::NoDetection);

    assert!(source.next_frame().unwrap().is_none());
}
