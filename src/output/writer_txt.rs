use std::collections::HashSet;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Names in a stable order so repeated runs write identical files.
pub fn sorted_names(names: &HashSet<String>) -> Vec<&str> {
    let mut v: Vec<&str> = names.iter().map(String::as_str).collect();
    v.sort_unstable();
    v
}

/// Overwrite `path` with one name per line. The parent directory is created
/// if needed; the file handle is closed on every return path.
pub fn write_name_list(path: &Path, names: &HashSet<String>) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        crate::utils::ensure_dir(parent)?;
    }
    let mut w = BufWriter::new(File::create(path)?);
    for name in sorted_names(names) {
        w.write_all(name.as_bytes())?;
        w.write_all(b"\n")?;
    }
    w.flush()
}
