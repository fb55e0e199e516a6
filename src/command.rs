use std::io::{self, Error, ErrorKind};
use std::path::Path;
use std::process::Command;

use tracing::debug;

/// Copies one fragment of a video without re-encoding, using the system ffmpeg.
///
/// `start_time` and `duration` are in seconds. The output container is
/// whatever the output path's extension implies; streams are copied as-is,
/// so cut points snap to whatever ffmpeg finds near the requested times.
pub fn copy_video_fragment(
    input_path: &Path,
    output_path: &Path,
    start_time: f64,
    duration: f64,
) -> io::Result<()> {
    if !input_path.exists() {
        return Err(Error::new(
            ErrorKind::NotFound,
            format!("input file not found: {}", input_path.display()),
        ));
    }

    let mut cmd = Command::new("ffmpeg");
    cmd.arg("-loglevel")
        .arg("error")
        .arg("-ss")
        .arg(start_time.to_string())
        .arg("-i")
        .arg(input_path)
        .arg("-t")
        .arg(duration.to_string())
        .arg("-c")
        .arg("copy") // no re-encode
        .arg("-avoid_negative_ts")
        .arg("make_zero")
        .arg("-y") // overwrite without asking
        .arg(output_path);

    debug!("running {:?}", cmd);

    let status = cmd.status()?;

    if !status.success() {
        return Err(Error::new(
            ErrorKind::Other,
            format!("ffmpeg failed with exit code: {:?}", status.code()),
        ));
    }

    Ok(())
}
