use crate::shared::error::EnricherError;
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of any input file we read (manifest, overrides, config): 100 MB
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Reads a text input file after rejecting symlinks, non-regular files
/// and files above [`MAX_FILE_SIZE`].
///
/// # Arguments
/// * `path` - The file to read
/// * `file_description` - Human readable name used in error messages
pub fn read_regular_file(path: &Path, file_description: &str) -> Result<String> {
    let metadata = fs::symlink_metadata(path).map_err(|e| EnricherError::FileReadError {
        path: path.to_path_buf(),
        details: format!("Failed to read {} metadata: {}", file_description, e),
    })?;

    if metadata.is_symlink() {
        return Err(EnricherError::SecurityError {
            path: path.to_path_buf(),
            reason: format!("{} is a symbolic link", file_description),
            hint: "Symbolic links are not followed; pass the real file path".to_string(),
        }
        .into());
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

    fs::read_to_string(path).map_err(|e| {
        EnricherError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        }
        .into()
    })
}

/// Validates that an output target is not an existing symlink
///
/// # Errors
/// Returns an error if the path exists and is a symbolic link
pub fn validate_output_target(path: &Path) -> Result<()> {
    if let Ok(metadata) = fs::symlink_metadata(path) {
        if metadata.is_symlink() {
            return Err(EnricherError::FileWriteError {
                path: path.to_path_buf(),
                details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
            }
            .into());
        }
    }

    if let Some(parent) = path.parent() {
        if parent != Path::new("") && !parent.exists() {
            return Err(EnricherError::FileWriteError {
                path: path.to_path_buf(),
                details: format!("Parent directory does not exist: {}", parent.display()),
            }
            .into());
        }
    }

    Ok(())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        return Err(EnricherError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "File is too large ({} bytes). Maximum allowed size is {} bytes.",
                file_size, max_size
            ),
            hint: "Split the SBOM or check that the right file was passed".to_string(),
        }
        .into());
    }
    Ok(())
}
