use anyhow::Result;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use bikefit_angles::analysis::{FrameAnalyzer, JointAngleTable, TrajectoryLog};
use bikefit_angles::config::Config;
use bikefit_angles::pose::{JsonLinesSource, PoseSource};
use bikefit_angles::report::{evaluate, RangeStatus};
use bikefit_angles::skeleton::SkeletonModel;

const CONFIG_PATH: &str = "config.toml";

fn main() -> Result<()> {
    let config_path = std::env::args().nth(1).unwrap_or_else(|| CONFIG_PATH.to_string());
    let loaded = Config::load_optional(&config_path);

    // verbose は設定ファイル側にあるので、ログ初期化より先に読む
    let verbose = matches!(&loaded, Ok(Some(config)) if config.verbose);
    let default_level = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .init();

    let config = Config::with_fallback(&config_path, loaded);

    info!("bikefit-angles {}", env!("CARGO_PKG_VERSION"));
    info!("input: {}", config.input.path);

    let analyzer = FrameAnalyzer::from_config(&config.analysis);
    let side = config.analysis.side;
    let mut source = JsonLinesSource::open(&config.input.path)?;
    let mut table = JointAngleTable::new();
    let mut trajectory = TrajectoryLog::new();
    let mut skeleton = SkeletonModel::new(&config.skeleton);

    let mut frame_index = 0usize;
    let mut skipped = 0usize;
    while let Some(detections) = source.next_frame()? {
        frame_index += 1;

        // 失敗したフレームは飛ばし、テーブルは前回の値を保持する
        let frame = match analyzer.analyze_frame(&detections) {
            Ok(frame) => frame,
            Err(e) => {
                warn!(frame = frame_index, "skipping frame: {}", e);
                skipped += 1;
                continue;
            }
        };

        table.record_frame(side, &frame);
        trajectory.record(side, &frame);
        skeleton.propagate_from_table(&table);
        debug!(frame = frame_index, "skeleton updated");
    }

    info!("frames: {}, skipped: {}", frame_index, skipped);

    println!("{:<12} {:>10} {:>10} {:>10}", "Joint", "Angle", "Max", "Min");
    for (joint, stats) in table.iter() {
        let current = stats
            .current
            .map(|a| format!("{:.2}", a))
            .unwrap_or_else(|| "-".to_string());
        if stats.has_baseline {
            println!(
                "{:<12} {:>10} {:>10.2} {:>10.2}",
                joint.label(),
                current,
                stats.max,
                stats.min
            );
        } else {
            println!("{:<12} {:>10} {:>10} {:>10}", joint.label(), current, "-", "-");
        }
    }

    println!();
    for report in evaluate(&table, &config.optimal_ranges()) {
        println!(
            "{:<12} min {:>7.2} {:<6} ({:.2})  max {:>7.2} {:<6} ({:.2})",
            report.joint.label(),
            report.min.value,
            status_label(report.min.status),
            report.min.score,
            report.max.value,
            status_label(report.max.status),
            report.max.score,
        );
    }

    Ok(())
}

fn status_label(status: RangeStatus) -> &'static str {
    match status {
        RangeStatus::Below => "below",
        RangeStatus::Within => "ok",
        RangeStatus::Above => "above",
    }
}
