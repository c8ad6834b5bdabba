use std::{
    env, fs,
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

use dirs::home_dir;

use super::{PersistenceGateway, Result};

const DEFAULT_DIR_NAME: &str = ".wrvu_core";
const STORE_EXTENSION: &str = "json";
const TMP_SUFFIX: &str = "tmp";

/// Returns the application-specific data directory, defaulting to `~/.wrvu_core`.
pub fn app_data_dir() -> PathBuf {
    if let Some(custom) = env::var_os("WRVU_CORE_HOME") {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// File-per-store JSON gateway. Each store key maps to `<root>/<key>.json`;
/// writes go through a temp file and rename so a crash mid-write never leaves
/// a truncated document behind.
#[derive(Debug, Clone)]
pub struct JsonFileGateway {
    root: PathBuf,
}

impl JsonFileGateway {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let root = root.unwrap_or_else(app_data_dir);
        ensure_dir(&root)?;
        Ok(Self { root })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn store_path(&self, store: &str) -> PathBuf {
        self.root.join(format!("{}.{}", store, STORE_EXTENSION))
    }
}

impl PersistenceGateway for JsonFileGateway {
    fn load(&self, store: &str) -> Result<Option<String>> {
        let path = self.store_path(store);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn save(&self, store: &str, state: &str) -> Result<()> {
        let path = self.store_path(store);
        let tmp = tmp_path(&path);
        write_atomic(&tmp, state)?;
        fs::rename(&tmp, &path)?;
        Ok(())
    }
}

fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn gateway_with_temp_dir() -> (JsonFileGateway, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let gateway =
            JsonFileGateway::new(Some(temp.path().to_path_buf())).expect("json gateway");
        (gateway, temp)
    }

    #[test]
    fn load_reports_absence_before_first_save() {
        let (gateway, _guard) = gateway_with_temp_dir();
        assert!(gateway.load("catalog").expect("load").is_none());
    }

    #[test]
    fn save_then_load_roundtrip() {
        let (gateway, _guard) = gateway_with_temp_dir();
        gateway.save("catalog", "{\"groups\":[]}").expect("save");
        let loaded = gateway.load("catalog").expect("load");
        assert_eq!(loaded.as_deref(), Some("{\"groups\":[]}"));
    }

    #[test]
    fn save_replaces_prior_document() {
        let (gateway, _guard) = gateway_with_temp_dir();
        gateway.save("ledger", "[1]").expect("first save");
        gateway.save("ledger", "[1,2]").expect("second save");
        assert_eq!(gateway.load("ledger").expect("load").as_deref(), Some("[1,2]"));
    }

    #[test]
    fn stores_are_independent_files() {
        let (gateway, _guard) = gateway_with_temp_dir();
        gateway.save("catalog", "{}").expect("save catalog");
        gateway.save("ledger", "[]").expect("save ledger");
        assert!(gateway.store_path("catalog").exists());
        assert!(gateway.store_path("ledger").exists());
        assert_eq!(gateway.load("catalog").expect("load").as_deref(), Some("{}"));
    }
}
