use cassmap_core::{Error, Result};
use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::warn;

const RULE: &str = "------------------------------------------------------------------";

/// DDL written to a file instead of being executed.
#[derive(Debug)]
pub(crate) struct Script {
    path: PathBuf,
    out: BufWriter<File>,
}

impl Script {
    /// Replaces any existing file at `path` and writes the header.
    pub(crate) fn create(path: &Path) -> Result<Script> {
        match fs::remove_file(path) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::NotFound => {}
            Err(err) => return Err(Error::io(path, err)),
        }

        if let Some(parent) = path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            fs::create_dir_all(parent).map_err(|err| Error::io(parent, err))?;
        }

        let file = File::create(path).map_err(|err| Error::io(path, err))?;
        let mut out = BufWriter::new(file);

        let ran_at = jiff::Zoned::now().strftime("%d/%m/%Y %H:%M:%S");
        writeln!(out, "{RULE}")
            .and_then(|_| writeln!(out, "-- cassmap SchemaTool (ran at {ran_at})"))
            .and_then(|_| writeln!(out, "{RULE}"))
            .map_err(|err| Error::io(path, err))?;

        Ok(Script {
            path: path.to_path_buf(),
            out,
        })
    }

    /// Appends one statement. A failed write is logged and skipped.
    pub(crate) fn write(&mut self, cql: &str) {
        if let Err(err) = writeln!(self.out, "{cql};") {
            warn!(path = %self.path.display(), error = %err, cql, "failed to write DDL statement");
        }
    }

    pub(crate) fn finish(mut self) {
        if let Err(err) = self.out.flush() {
            warn!(path = %self.path.display(), error = %err, "failed to flush DDL file");
        }
    }
}
