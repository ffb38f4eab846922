use std::path::{Path, PathBuf};

/// Derive the reference name output files are named after: the input path
/// with its extension removed, reduced to the base name unless `keep_dirs`
/// asks for the directory components to survive.
pub fn reference_name(path: &Path, keep_dirs: bool) -> PathBuf {
    if keep_dirs {
        path.with_extension("")
    } else {
        path.file_stem().map(PathBuf::from).unwrap_or_default()
    }
}
