//! Output path resolution.
//!
//! Inside the container image every file lands in [`CONTAINER_OUTPUT_DIR`],
//! which is expected to be a mounted volume. Locally the user's path is
//! honoured, and a trailing separator marks it as a directory.

use chrono::Local;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

/// Directory all exports are written to when running containerised.
pub const CONTAINER_OUTPUT_DIR: &str = "/output";

/// Timestamp layout used for generated file names.
pub const FILE_NAME_FORMAT: &str = "%Y-%m-%d_%H:%M:%S";

/// Resolve where an export goes.
///
/// `output` is the user-supplied name (possibly empty) and `extension`
/// includes the leading dot.
pub fn resolve_output_path(output: &str, extension: &str, dockerized: bool) -> PathBuf {
    if dockerized {
        container_output_path(output, extension)
    } else {
        local_output_path(output, extension)
    }
}

/// A timestamp-based file stem for exports without a name.
pub fn generate_file_name() -> String {
    Local::now().format(FILE_NAME_FORMAT).to_string()
}

fn container_output_path(output: &str, extension: &str) -> PathBuf {
    let dir = Path::new(CONTAINER_OUTPUT_DIR);

    let base = Path::new(output)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    if base.is_empty() {
        return dir.join(generate_file_name() + extension);
    }

    dir.join(with_extension(base, extension))
}

fn local_output_path(output: &str, extension: &str) -> PathBuf {
    if output.is_empty() {
        return PathBuf::from(generate_file_name() + extension);
    }

    if output.ends_with(MAIN_SEPARATOR) || output.ends_with('/') {
        return Path::new(output).join(generate_file_name() + extension);
    }

    let path = Path::new(output);
    let base = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let dir = path.parent().unwrap_or_else(|| Path::new(""));

    dir.join(with_extension(base, extension))
}

fn with_extension(base: String, extension: &str) -> String {
    if base.ends_with(extension) {
        base
    } else {
        base + extension
    }
}
