mod password;

use std::path::{Path, PathBuf};

pub use password::*;

/// Stego images are always written as PNG, `.png` is appended unless present (any case).
pub fn png_output_path(path: &Path) -> PathBuf {
    let is_png = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("png"))
        .unwrap_or(false);

    if is_png {
        path.to_path_buf()
    } else {
        let mut with_ext = path.as_os_str().to_owned();
        with_ext.push(".png");
        PathBuf::from(with_ext)
    }
}
