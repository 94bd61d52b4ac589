//! Loading a corpus from a directory of text files.

use std::fs;
use std::io;
use std::path::Path;

use log::{debug, info};

use crate::corpus::Corpus;
use crate::error::{LecternError, Result};

/// Read every file in `directory` whose extension is `extension`.
///
/// The scan is not recursive. Entries are sorted by file name so that the
/// resulting order, and therefore the ranking tie-break, is the same on
/// every platform.
pub fn load_files<P: AsRef<Path>>(directory: P, extension: &str) -> Result<Corpus> {
    let directory = directory.as_ref();
    if !directory.is_dir() {
        return Err(LecternError::corpus(format!(
            "{} is not a directory",
            directory.display()
        )));
    }

    let extension = extension.trim_start_matches('.');
    let mut files = Vec::new();

    for entry in fs::read_dir(directory)? {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type()?.is_file() {
            debug!("Skipping non-file entry {}", path.display());
            continue;
        }

        if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
            debug!("Skipping {} (extension is not .{extension})", path.display());
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let text = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::InvalidData => {
                LecternError::corpus(format!("{name} is not valid UTF-8 text"))
            }
            _ => LecternError::Io(e),
        })?;

        files.push((name, text));
    }

    files.sort_by(|(a, _), (b, _)| a.cmp(b));
    info!(
        "Loaded {} .{extension} file(s) from {}",
        files.len(),
        directory.display()
    );

    Ok(Corpus::from_entries(files))
}
