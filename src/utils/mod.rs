// imgflat/src/utils/mod.rs
use std::path::Path;

/// Extensions accepted by the classifier. Matching is case-sensitive and
/// exact, as reported by the filesystem.
pub const SUPPORTED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Extension of the fixed save format shared by all artifacts.
pub const PRIMARY_EXTENSION: &str = "jpg";

pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// True when the source already carries the save format's extension and
/// can be copied through without re-encoding. A `.jpeg` extension does
/// not qualify; those sources are re-encoded.
pub fn has_primary_extension(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()) == Some(PRIMARY_EXTENSION)
}

pub fn primary_file_name(index: u32) -> String {
    format!("{}.{}", index, PRIMARY_EXTENSION)
}

pub fn derivative_file_name(index: u32, size: u32) -> String {
    format!("{}_{}.{}", index, size, PRIMARY_EXTENSION)
}

pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{} B", bytes)
    } else {
        format!("{:.2} {}", size, UNITS[unit])
    }
}
