use std::fs;
use std::io;
use std::path::Path;

/// Write `contents` to a sibling temp file, then rename over `path`.
/// Readers never observe a partial file. Parent directories are created
/// as needed.
pub(crate) fn replace_file(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)
}
