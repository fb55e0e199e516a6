//! Saws every video in a folder into fixed-duration clips.

use std::fs;
use std::path::Path;

use failure::Error;
use tracing::{error, info, warn};

use crate::command::copy_video_fragment;
use crate::probe::probe_file;

/// Containers the segmenter picks up from the input folder.
const VIDEO_EXTENSIONS: [&str; 6] = ["mp4", "avi", "mov", "mkv", "wmv", "flv"];

/// One planned output segment: where it starts in the source and how long it runs.
#[derive(Debug, Clone, PartialEq)]
pub struct Clip {
    pub index: usize,
    pub start: f64,
    pub duration: f64,
}

/// Extension check against the allow-list, case-insensitive.
pub fn is_video_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| VIDEO_EXTENSIONS.iter().any(|v| e.eq_ignore_ascii_case(v)))
        .unwrap_or(false)
}

/// Whole clips only: a trailing remainder shorter than `clip_duration`
/// is dropped.
pub fn plan_clips(total_secs: f64, clip_duration: u32) -> Vec<Clip> {
    if clip_duration == 0 {
        return Vec::new();
    }
    let num_clips = (total_secs / f64::from(clip_duration)) as usize;
    (0..num_clips)
        .map(|i| Clip {
            index: i,
            start: i as f64 * f64::from(clip_duration),
            duration: f64::from(clip_duration),
        })
        .collect()
}

/// Clip indices are 1-based and zero-padded in the file name; the output
/// container is always mp4.
pub fn clip_file_name(stem: &str, index: usize) -> String {
    format!("{}_clip_{:03}.mp4", stem, index + 1)
}

/// Cuts every video file in `input_dir` into `clip_duration`-second clips
/// under `output_dir`.
///
/// Failures are contained per unit of work: a file that cannot be probed
/// is logged and skipped, and a clip that fails to cut does not stop the
/// remaining clips of the same file.
pub fn cut_videos_into_clips(
    input_dir: &Path,
    output_dir: &Path,
    clip_duration: u32,
) -> Result<(), Error> {
    if !output_dir.exists() {
        fs::create_dir_all(output_dir)?;
        info!("created output directory: {}", output_dir.display());
    }

    let mut video_files = Vec::new();
    for entry in fs::read_dir(input_dir)? {
        let path = entry?.path();
        if is_video_file(&path) {
            video_files.push(path);
        }
    }
    video_files.sort();

    if video_files.is_empty() {
        warn!("no video files found in {}", input_dir.display());
        return Ok(());
    }

    info!("found {} video files to process", video_files.len());

    for input_path in &video_files {
        if let Err(e) = cut_one_video(input_path, output_dir, clip_duration) {
            error!("error processing {}: {}", input_path.display(), e);
        }
    }

    info!("all videos processed");
    Ok(())
}

fn cut_one_video(input_path: &Path, output_dir: &Path, clip_duration: u32) -> Result<(), Error> {
    let media = probe_file(input_path)?;

    if !media.has_video_stream() {
        warn!("no video stream found in {}", input_path.display());
        return Ok(());
    }

    let duration = media.duration_secs()?;
    let clips = plan_clips(duration, clip_duration);
    info!(
        "video duration: {:.2} seconds, creating {} clips",
        duration,
        clips.len()
    );

    let stem = input_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let total = clips.len();
    for clip in clips {
        let output_name = clip_file_name(&stem, clip.index);
        let output_path = output_dir.join(&output_name);

        info!("saving clip {}/{}: {}", clip.index + 1, total, output_name);

        if let Err(e) = copy_video_fragment(input_path, &output_path, clip.start, clip.duration) {
            error!(
                "error creating clip {} from {}: {}",
                clip.index + 1,
                input_path.display(),
                e
            );
        }
    }

    info!("finished processing {}", input_path.display());
    Ok(())
}
