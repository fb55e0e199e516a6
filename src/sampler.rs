//! Random sampling of files out of a directory.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use failure::Error;
use filetime::FileTime;
use rand::seq::SliceRandom;
use tracing::{info, warn};

use crate::error::SamplerError;

/// Copies `count` files chosen uniformly at random (without replacement)
/// from the top level of `source_dir` into `output_dir`, creating the
/// output directory if needed.
///
/// Subdirectories are not eligible and are never descended into. When the
/// request exceeds what is available, everything available is copied and a
/// warning is logged. Destination name clashes get a `_<n>` suffix before
/// the extension. Returns the number of files copied.
pub fn copy_random_files(
    source_dir: &Path,
    output_dir: &Path,
    count: usize,
) -> Result<usize, Error> {
    if !source_dir.is_dir() {
        return Err(SamplerError::SourceMissing(source_dir.display().to_string()).into());
    }

    fs::create_dir_all(output_dir)?;

    let mut all_files: Vec<(PathBuf, String)> = Vec::new();
    for entry in fs::read_dir(source_dir)? {
        let entry = entry?;
        let path = entry.path();
        // follows symlinks; broken links just fail the is_file test
        let is_file = fs::metadata(&path).map(|m| m.is_file()).unwrap_or(false);
        if is_file {
            let name = entry.file_name().to_string_lossy().into_owned();
            all_files.push((path, name));
        }
    }

    if all_files.is_empty() {
        warn!(
            "no files found in source directory '{}'",
            source_dir.display()
        );
        return Ok(0);
    }

    let to_copy = count.min(all_files.len());
    if to_copy < count {
        warn!(
            "only {} files available in source directory (requested {})",
            to_copy, count
        );
    }

    let mut rng = rand::thread_rng();
    let mut copied = 0usize;
    for (source_path, name) in all_files.choose_multiple(&mut rng, to_copy) {
        let dest_path = unique_destination(output_dir, name);
        copy_with_times(source_path, &dest_path)?;
        info!("copied {} to {}", name, dest_path.display());
        copied += 1;
    }

    info!("successfully copied {} files", copied);
    Ok(copied)
}

/// Resolves a destination path inside `dir` that does not exist yet.
///
/// `name.ext` is tried first, then `name_1.ext`, `name_2.ext`, and so on.
/// The check-then-use is sequential; a concurrent writer in the same
/// directory can still race it.
pub fn unique_destination(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !candidate.exists() {
        return candidate;
    }

    let name = Path::new(file_name);
    let stem = name
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = name.extension().map(|e| e.to_string_lossy().into_owned());

    let mut n = 1u32;
    loop {
        let next = match &ext {
            Some(ext) => format!("{}_{}.{}", stem, n, ext),
            None => format!("{}_{}", stem, n),
        };
        let candidate = dir.join(next);
        if !candidate.exists() {
            return candidate;
        }
        n += 1;
    }
}

// fs::copy carries permissions; timestamps need an explicit pass.
fn copy_with_times(source: &Path, dest: &Path) -> io::Result<()> {
    fs::copy(source, dest)?;
    let meta = fs::metadata(source)?;
    filetime::set_file_times(
        dest,
        FileTime::from_last_access_time(&meta),
        FileTime::from_last_modification_time(&meta),
    )
}
