//! Pose source seam.
//!
//! The pose-estimation model is an external collaborator. Anything that can
//! hand over one frame of detections at a time implements [`PoseSource`].

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::geometry::Point2D;

/// 1フレーム分の検出結果（人物ごとのキーポイント列）
///
/// 空なら「検出なし」。全点0の列とは区別する。
pub type Detections = Vec<Vec<Point2D>>;

pub trait PoseSource {
    /// 次のフレームの検出結果。ストリーム終端なら `None`
    fn next_frame(&mut self) -> Result<Option<Detections>>;
}

/// 記録済みのフレーム列を順に返すソース
#[derive(Debug, Default)]
pub struct ReplaySource {
    frames: VecDeque<Detections>,
}

impl ReplaySource {
    pub fn new(frames: Vec<Detections>) -> Self {
        Self {
            frames: frames.into(),
        }
    }
}

impl PoseSource for ReplaySource {
    fn next_frame(&mut self) -> Result<Option<Detections>> {
        Ok(self.frames.pop_front())
    }
}

/// JSON Lines 形式のキーポイント記録を読むソース
///
/// 1行1フレーム: `[[[x, y], ...], ...]`（人物 × キーポイント × xy）
pub struct JsonLinesSource<R> {
    reader: R,
    line_no: usize,
}

impl JsonLinesSource<BufReader<File>> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("Failed to open keypoint file {}", path.display()))?;
        Ok(Self::from_reader(BufReader::new(file)))
    }
}

impl<R: BufRead> JsonLinesSource<R> {
    pub fn from_reader(reader: R) -> Self {
        Self { reader, line_no: 0 }
    }
}

impl<R: BufRead> PoseSource for JsonLinesSource<R> {
    fn next_frame(&mut self) -> Result<Option<Detections>> {
        let mut line = String::new();
        loop {
            line.clear();
            let read = self
                .reader
                .read_line(&mut line)
                .context("Failed to read keypoint file")?;
            if read == 0 {
                return Ok(None);
            }
            self.line_no += 1;

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            let raw: Vec<Vec<[f64; 2]>> = serde_json::from_str(trimmed)
                .with_context(|| format!("Invalid keypoint data at line {}", self.line_no))?;
            let detections = raw
                .into_iter()
                .map(|subject| subject.into_iter().map(|[x, y]| Point2D::new(x, y)).collect())
                .collect();
            return Ok(Some(detections));
        }
    }
}
