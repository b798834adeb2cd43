use recordlog::{Level, LogError, Result, Transport};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Component, Path, PathBuf};

/// Appends each message to `<dir>/<level>.log`
///
/// Each message is written as `"{message} \n"`. Files are created on
/// first use; the directory must already exist. A level that is not a
/// plain file name (separators, `.`, `..`, absolute paths) is refused.
#[derive(Debug, Clone)]
pub struct FileAppendTransport {
    dir: PathBuf,
}

impl FileAppendTransport {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// File that messages of `level` are appended to
    ///
    /// # Errors
    ///
    /// Returns a transport error when the level would name a file outside
    /// the directory.
    pub fn path_for(&self, level: &Level) -> Result<PathBuf> {
        let name = level.as_str();
        let mut components = Path::new(name).components();
        let single_normal = matches!(
            (components.next(), components.next()),
            (Some(Component::Normal(_)), None)
        );

        if !single_normal || name.contains(|c: char| c == '/' || c == '\\') {
            return Err(LogError::transport(format!(
                "level {:?} is not a valid log file name",
                name
            )));
        }
        Ok(self.dir.join(format!("{}.log", name)))
    }
}

impl Transport for FileAppendTransport {
    fn send(&self, level: &Level, message: &str) -> Result<()> {
        let path = self.path_for(level)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::io(e, Some(path.clone())))?;

        file.write_all(format!("{} \n", message).as_bytes())
            .map_err(|e| LogError::io(e, Some(path.clone())))?;

        tracing::trace!(
            component = module_path!(),
            op = "file_append",
            path = %path.display(),
        );
        Ok(())
    }
}
