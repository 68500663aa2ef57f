use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::model::FontConfig;

/// Regular sans/mono faces commonly shipped by each platform.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Returns the configured font path followed by the system candidates.
fn candidate_paths(config: &FontConfig) -> Vec<PathBuf> {
    config
        .path
        .iter()
        .cloned()
        .chain(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from))
        .collect()
}

/// Reads the first font file that exists, or `None` when labels must go
/// without text.
pub(crate) fn font_data(config: &FontConfig) -> Option<Vec<u8>> {
    for path in candidate_paths(config) {
        match read_font(&path) {
            Some(bytes) => {
                info!("using font {}", path.display());
                return Some(bytes);
            }
            None => debug!("font candidate {} unavailable", path.display()),
        }
    }
    warn!("no usable font found; labels will render without text");
    None
}

fn read_font(path: &Path) -> Option<Vec<u8>> {
    let bytes = fs::read(path).ok()?;
    fontdue::Font::from_bytes(bytes.as_slice(), fontdue::FontSettings::default()).ok()?;
    Some(bytes)
}
