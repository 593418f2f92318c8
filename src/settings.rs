//! Persisted widget state: storage port, bindings and typed accessors.
//!
//! Everything the widget remembers across runs goes through [`StoragePort`],
//! a flat string-to-string surface. Production binds [`FileStore`], a JSON
//! object under the per-user config directory; tests and embedders that want
//! ephemeral state bind [`MemoryStore`]. Storage trouble never reaches the
//! widget: reads degrade to unset and writes quietly do nothing.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// File name used under the per-user config directory.
const STORE_FILE: &str = "settings.json";

/// Key holding the active theme token.
pub const MODE_KEY: &str = "bin-theme-toggler-mode";
/// Key holding the position-mode token (`fixed` / `absolute`).
pub const POSITION_KEY: &str = "bin-theme-toggler-position";
/// Key holding the toggler's top offset as a CSS length string.
pub const TOP_KEY: &str = "bin-theme-toggler-top";
/// Key holding the toggler's left offset as a CSS length string.
pub const LEFT_KEY: &str = "bin-theme-toggler-left";

/// Theme selection persisted under [`MODE_KEY`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    Dark,
}

impl Default for ThemeMode {
    fn default() -> Self {
        // Anything but the dark token reads as light, including unset.
        ThemeMode::Light
    }
}

impl ThemeMode {
    const DARK_TOKEN: &'static str = "BIN_DARK_THEME";
    const LIGHT_TOKEN: &'static str = "BIN_LIGHT_THEME";

    pub fn as_token(self) -> &'static str {
        match self {
            ThemeMode::Light => Self::LIGHT_TOKEN,
            ThemeMode::Dark => Self::DARK_TOKEN,
        }
    }

    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(Self::DARK_TOKEN) => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

/// How the toggler is positioned, persisted under [`POSITION_KEY`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PositionMode {
    /// Anchored to the viewport, ignoring scroll (`fixed`).
    Pinned,
    /// Anchored to the page content, scrolling with it (`absolute`).
    ScrollRelative,
}

impl Default for PositionMode {
    fn default() -> Self {
        PositionMode::ScrollRelative
    }
}

impl PositionMode {
    const PINNED_TOKEN: &'static str = "fixed";
    const SCROLL_TOKEN: &'static str = "absolute";

    pub fn as_token(self) -> &'static str {
        match self {
            PositionMode::Pinned => Self::PINNED_TOKEN,
            PositionMode::ScrollRelative => Self::SCROLL_TOKEN,
        }
    }

    pub fn from_token(token: Option<&str>) -> Self {
        match token {
            Some(Self::PINNED_TOKEN) => PositionMode::Pinned,
            _ => PositionMode::ScrollRelative,
        }
    }

    pub fn is_pinned(self) -> bool {
        self == PositionMode::Pinned
    }
}

/// Durable string-to-string storage the widget persists through.
pub trait StoragePort {
    /// Return the previously stored value, or `None` if never set.
    fn get(&self, key: &str) -> Option<String>;
    /// Overwrite unconditionally. Failures must not surface.
    fn set(&mut self, key: &str, value: &str);
}

/// On-disk entries, serialized as a single JSON object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct Entries(BTreeMap<String, String>);

/// [`StoragePort`] backed by a JSON file.
pub struct FileStore {
    path: PathBuf,
    entries: Entries,
}

impl FileStore {
    /// Open a store at `path`, loading existing entries.
    ///
    /// A missing file or unreadable contents yield an empty store; the
    /// path is still used for subsequent writes.
    pub fn open(path: PathBuf) -> Self {
        let entries = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
            Err(_) => Entries::default(),
        };
        Self { path, entries }
    }

    /// Resolve the per-user store path and ensure the directory exists.
    pub fn default_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("dev", "theme_toggler", "theme_toggler")
            .ok_or_else(|| anyhow!("cannot determine config directory"))?;
        let config_dir = proj_dirs.config_dir();
        fs::create_dir_all(config_dir)?;
        Ok(config_dir.join(STORE_FILE))
    }

    fn write_file(&self) -> Result<()> {
        let contents = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl StoragePort for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.0.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.0.insert(key.to_string(), value.to_string());
        if let Err(err) = self.write_file() {
            warn!(path = %self.path.display(), %err, "failed to persist widget state");
        }
    }
}

/// In-memory [`StoragePort`]. State lives as long as the value does.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StoragePort for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// Typed accessors over an injected [`StoragePort`].
///
/// Values pass through verbatim; token interpretation happens on read so
/// stale or foreign values fall back to the documented defaults.
pub struct SettingsStore {
    port: Box<dyn StoragePort>,
}

impl SettingsStore {
    pub fn new(port: Box<dyn StoragePort>) -> Self {
        Self { port }
    }

    /// Raw read-through, mainly useful to inspect stored tokens.
    pub fn get(&self, key: &str) -> Option<String> {
        self.port.get(key)
    }

    pub fn display_mode(&self) -> ThemeMode {
        ThemeMode::from_token(self.port.get(MODE_KEY).as_deref())
    }

    pub fn set_display_mode(&mut self, mode: ThemeMode) {
        self.port.set(MODE_KEY, mode.as_token());
    }

    pub fn position_mode(&self) -> PositionMode {
        PositionMode::from_token(self.port.get(POSITION_KEY).as_deref())
    }

    pub fn set_position_mode(&mut self, mode: PositionMode) {
        self.port.set(POSITION_KEY, mode.as_token());
    }

    pub fn top(&self) -> Option<String> {
        self.port.get(TOP_KEY)
    }

    pub fn set_top(&mut self, top: &str) {
        self.port.set(TOP_KEY, top);
    }

    pub fn left(&self) -> Option<String> {
        self.port.get(LEFT_KEY)
    }

    pub fn set_left(&mut self, left: &str) {
        self.port.set(LEFT_KEY, left);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_round_trips_offsets() {
        let mut store = SettingsStore::new(Box::new(MemoryStore::new()));
        assert_eq!(store.top(), None);
        assert_eq!(store.left(), None);

        store.set_top("134px");
        store.set_left("20%");
        assert_eq!(store.top().as_deref(), Some("134px"));
        assert_eq!(store.left().as_deref(), Some("20%"));

        store.set_top("135px");
        assert_eq!(store.top().as_deref(), Some("135px"));
    }

    #[test]
    fn mode_tokens_map_totally() {
        assert_eq!(ThemeMode::from_token(None), ThemeMode::Light);
        assert_eq!(ThemeMode::from_token(Some("BIN_LIGHT_THEME")), ThemeMode::Light);
        assert_eq!(ThemeMode::from_token(Some("BIN_DARK_THEME")), ThemeMode::Dark);
        assert_eq!(ThemeMode::from_token(Some("garbage")), ThemeMode::Light);

        assert_eq!(PositionMode::from_token(None), PositionMode::ScrollRelative);
        assert_eq!(PositionMode::from_token(Some("fixed")), PositionMode::Pinned);
        assert_eq!(PositionMode::from_token(Some("sticky")), PositionMode::ScrollRelative);
    }

    #[test]
    fn typed_accessors_use_fixed_keys() {
        let mut store = SettingsStore::new(Box::new(MemoryStore::new()));
        store.set_display_mode(ThemeMode::Dark);
        store.set_position_mode(PositionMode::Pinned);

        assert_eq!(store.get(MODE_KEY).as_deref(), Some("BIN_DARK_THEME"));
        assert_eq!(store.get(POSITION_KEY).as_deref(), Some("fixed"));
        assert_eq!(store.display_mode(), ThemeMode::Dark);
        assert_eq!(store.position_mode(), PositionMode::Pinned);
    }

    #[test]
    fn file_store_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORE_FILE);

        let mut store = FileStore::open(path.clone());
        store.set(MODE_KEY, "BIN_DARK_THEME");
        store.set(TOP_KEY, "40px");

        let reopened = FileStore::open(path);
        assert_eq!(reopened.get(MODE_KEY).as_deref(), Some("BIN_DARK_THEME"));
        assert_eq!(reopened.get(TOP_KEY).as_deref(), Some("40px"));
        assert_eq!(reopened.get(LEFT_KEY), None);
    }

    #[test]
    fn file_store_ignores_malformed_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORE_FILE);
        fs::write(&path, "not json").unwrap();

        let store = FileStore::open(path);
        assert_eq!(store.get(MODE_KEY), None);
    }

    #[test]
    fn file_store_degrades_when_path_is_unwritable() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();

        // Parent is a regular file, so every write must fail quietly.
        let mut store = FileStore::open(blocker.join(STORE_FILE));
        store.set(MODE_KEY, "BIN_DARK_THEME");
        assert_eq!(store.get(MODE_KEY).as_deref(), Some("BIN_DARK_THEME"));

        let reopened = FileStore::open(blocker.join(STORE_FILE));
        assert_eq!(reopened.get(MODE_KEY), None);
    }
}
