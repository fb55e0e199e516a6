//! Media introspection through the system ffprobe.

use std::path::Path;
use std::process::Command;

use failure::Error;
use serde::Deserialize;
use tracing::debug;

use crate::error::ClipperError;

/// Parsed subset of `ffprobe -print_format json` output.
#[derive(Debug, Deserialize)]
pub struct MediaInfo {
    #[serde(default)]
    streams: Vec<Stream>,
    #[serde(default)]
    format: Format,
}

#[derive(Debug, Deserialize)]
struct Stream {
    codec_type: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Format {
    duration: Option<String>,
}

impl MediaInfo {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn has_video_stream(&self) -> bool {
        self.streams
            .iter()
            .any(|s| s.codec_type.as_deref() == Some("video"))
    }

    /// Container duration in seconds. ffprobe reports it as a decimal string.
    pub fn duration_secs(&self) -> Result<f64, Error> {
        let raw = self
            .format
            .duration
            .as_deref()
            .ok_or(ClipperError::MissingDuration)?;
        let secs = raw
            .parse::<f64>()
            .map_err(|_| ClipperError::BadDuration(raw.to_string()))?;
        Ok(secs)
    }
}

/// Probes a media file with the system ffprobe.
///
/// A non-zero exit (unreadable file, not a media file at all) becomes
/// [`ClipperError::ProbeFailed`] carrying whatever ffprobe wrote to stderr.
pub fn probe_file(path: &Path) -> Result<MediaInfo, Error> {
    debug!("probing {}", path.display());

    let output = Command::new("ffprobe")
        .arg("-loglevel")
        .arg("error")
        .arg("-print_format")
        .arg("json")
        .arg("-show_format")
        .arg("-show_streams")
        .arg(path)
        .output()?;

    if !output.status.success() {
        return Err(ClipperError::ProbeFailed {
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }

    Ok(serde_json::from_slice(&output.stdout)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIDEO_JSON: &str = r#"{
        "streams": [
            {"index": 0, "codec_type": "video", "codec_name": "h264"},
            {"index": 1, "codec_type": "audio", "codec_name": "aac"}
        ],
        "format": {"filename": "in.mp4", "duration": "12.512000"}
    }"#;

    const AUDIO_ONLY_JSON: &str = r#"{
        "streams": [
            {"index": 0, "codec_type": "audio", "codec_name": "mp3"}
        ],
        "format": {"filename": "in.mp3", "duration": "180.07"}
    }"#;

    const NO_DURATION_JSON: &str = r#"{
        "streams": [
            {"index": 0, "codec_type": "video"}
        ],
        "format": {"filename": "in.mkv"}
    }"#;

    #[test]
    fn detects_video_stream_and_duration() {
        let info = MediaInfo::from_json(VIDEO_JSON).unwrap();
        assert!(info.has_video_stream());
        assert!((info.duration_secs().unwrap() - 12.512).abs() < 1e-9);
    }

    #[test]
    fn audio_only_file_has_no_video_stream() {
        let info = MediaInfo::from_json(AUDIO_ONLY_JSON).unwrap();
        assert!(!info.has_video_stream());
        assert!(info.duration_secs().is_ok());
    }

    #[test]
    fn missing_duration_is_an_error() {
        let info = MediaInfo::from_json(NO_DURATION_JSON).unwrap();
        assert!(info.has_video_stream());
        assert!(info.duration_secs().is_err());
    }

    #[test]
    fn tolerates_absent_streams_and_format() {
        let info = MediaInfo::from_json("{}").unwrap();
        assert!(!info.has_video_stream());
        assert!(info.duration_secs().is_err());
    }
}
