//! # sample_cut
//!
//! Two small dataset-preparation tools: copying a random selection of
//! files out of a directory, and sawing every video in a folder into
//! fixed-duration clips with the system ffmpeg.

pub mod clipper;
pub mod command;
pub mod error;
pub mod probe;
pub mod sampler;

pub use crate::{
    clipper::{cut_videos_into_clips, plan_clips, Clip},
    error::{ClipperError, SamplerError},
    probe::MediaInfo,
    sampler::copy_random_files,
};
