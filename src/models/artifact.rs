use crate::Error;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::path::Path;
use std::path::PathBuf;

/// A fitted model that can be written to and read back from disk.
pub trait Artifact: Serialize + DeserializeOwned {
    /// File stem, shared by every deployment.
    fn name() -> &'static str;
    /// path to file on disk
    fn path(dir: &Path) -> PathBuf {
        dir.join(format!("{}.json", Self::name()))
    }
    /// check if file exists on disk
    fn done(dir: &Path) -> bool {
        std::fs::metadata(Self::path(dir)).is_ok()
    }
    /// read from disk
    fn load(dir: &Path) -> Result<Self, Error> {
        let path = Self::path(dir);
        log::info!("loading {} ({})", Self::name(), path.display());
        let file = File::open(&path).map_err(|e| Error::Artifact(format!("{}: {}", path.display(), e)))?;
        serde_json::from_reader(BufReader::new(file))
            .map_err(|e| Error::Artifact(format!("{}: {}", path.display(), e)))
    }
    /// write to disk
    fn save(&self, dir: &Path) -> Result<(), Error> {
        let path = Self::path(dir);
        log::info!("saving  {} ({})", Self::name(), path.display());
        std::fs::create_dir_all(dir).map_err(|e| Error::Artifact(format!("{}: {}", dir.display(), e)))?;
        let file = File::create(&path).map_err(|e| Error::Artifact(format!("{}: {}", path.display(), e)))?;
        serde_json::to_writer(BufWriter::new(file), self)
            .map_err(|e| Error::Artifact(format!("{}: {}", path.display(), e)))
    }
}
