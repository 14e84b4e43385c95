use crate::error::{Result, StoreError};
use serde::Serialize;
use sitegen_core::{parse, Domain, ParseMode, Record};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DataFile {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ParsedFile {
    pub file: DataFile,
    pub record: Record,
}

/// Files in `dir` that follow the domain's naming convention, sorted by
/// name. Anything else in the directory is ignored.
pub fn list_data_files(dir: &Path, domain: Domain) -> Result<Vec<DataFile>> {
    if !dir.is_dir() {
        return Err(StoreError::MissingDirectory(dir.to_path_buf()));
    }

    let read_dir_err = |source: std::io::Error| StoreError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let path = entry.path();
        let Some(name) = entry.file_name().to_str().map(str::to_string) else {
            continue;
        };
        if !domain.accepts_file_name(&name) || !path.is_file() {
            continue;
        }
        files.push(DataFile { name, path });
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));
    debug!(dir = %dir.display(), count = files.len(), "listed data files");
    Ok(files)
}

/// Reads and parses one data file. Bytes that are not valid UTF-8 become
/// U+FFFD instead of failing the run.
pub fn read_record(path: &Path, mode: ParseMode) -> Result<Record> {
    let bytes = fs::read(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse(mode, &String::from_utf8_lossy(&bytes)))
}

pub fn load_domain(dir: &Path, domain: Domain) -> Result<Vec<ParsedFile>> {
    list_data_files(dir, domain)?
        .into_iter()
        .map(|file| {
            let record = read_record(&file.path, domain.parse_mode())?;
            Ok(ParsedFile { file, record })
        })
        .collect()
}
