use include_dir::{include_dir, Dir};

static ASSET_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Raw bytes of a packaged file, addressed relative to `assets/`.
pub fn bytes(path: &str) -> Option<&'static [u8]> {
    ASSET_DIR.get_file(path).map(|file| file.contents())
}

pub fn text(path: &str) -> Option<&'static str> {
    ASSET_DIR.get_file(path).and_then(|file| file.contents_utf8())
}
