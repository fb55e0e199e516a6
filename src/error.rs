use failure::Fail;

/// Errors raised by the random file sampler.
#[derive(Debug, Fail)]
pub enum SamplerError {
    #[fail(display = "source directory '{}' does not exist", _0)]
    SourceMissing(String),
}

/// Errors raised while probing media files.
#[derive(Debug, Fail)]
pub enum ClipperError {
    #[fail(display = "ffprobe exited with code {:?}: {}", code, stderr)]
    ProbeFailed {
        code: Option<i32>,
        stderr: String,
    },

    #[fail(display = "container reports no duration")]
    MissingDuration,

    #[fail(display = "unparseable duration '{}'", _0)]
    BadDuration(String),
}
