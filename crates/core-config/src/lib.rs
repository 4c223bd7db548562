//! Configuration loading for `neo.toml`.
//!
//! Lookup order: explicit path from the command line, then `neo.toml` in the
//! working directory, then `<config_dir>/neo/neo.toml`. A missing file or a
//! parse error yields defaults; editing is never blocked by configuration.
//!
//! ```toml
//! [editor]
//! tab_stop = 4
//! message_timeout_secs = 10
//! ```
//!
//! Unknown fields are ignored. Out of range values are clamped by
//! `Config::resolve` and the clamp is logged under the `config` target.

use anyhow::Result;
use serde::Deserialize;
use std::time::Duration;
use std::{fs, path::PathBuf};
use tracing::{info, warn};

pub const CONFIG_FILE_NAME: &str = "neo.toml";
pub const TAB_STOP_MIN: usize = 1;
pub const TAB_STOP_MAX: usize = 16;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    #[serde(default = "EditorConfig::default_tab_stop")]
    pub tab_stop: usize,
    #[serde(default = "EditorConfig::default_message_timeout_secs")]
    pub message_timeout_secs: u64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: Self::default_tab_stop(),
            message_timeout_secs: Self::default_message_timeout_secs(),
        }
    }
}

impl EditorConfig {
    const fn default_tab_stop() -> usize {
        4
    }
    const fn default_message_timeout_secs() -> u64 {
        10
    }
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ConfigFile {
    #[serde(default)]
    pub editor: EditorConfig,
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub raw: Option<String>, // original file string (optional)
    pub file: ConfigFile,    // parsed (or default) data
}

/// Best-effort config path following platform conventions (XDG / AppData Roaming).
pub fn discover() -> PathBuf {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return local;
    }
    if let Some(dir) = dirs::config_dir() {
        return dir.join("neo").join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn load_from(path: Option<PathBuf>) -> Result<Config> {
    let path = path.unwrap_or_else(discover);
    let Ok(content) = fs::read_to_string(&path) else {
        return Ok(Config::default());
    };
    match toml::from_str::<ConfigFile>(&content) {
        Ok(file) => {
            info!(target: "config", path = %path.display(), "loaded");
            Ok(Config {
                raw: Some(content),
                file,
            })
        }
        Err(e) => {
            warn!(target: "config", path = %path.display(), error = %e, "parse_error_using_defaults");
            Ok(Config::default())
        }
    }
}

/// Values ready for use by the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub tab_stop: usize,
    pub message_timeout: Duration,
}

impl Config {
    /// Clamp raw values into their accepted ranges.
    pub fn resolve(&self) -> Resolved {
        let raw = self.file.editor.tab_stop;
        let tab_stop = raw.clamp(TAB_STOP_MIN, TAB_STOP_MAX);
        if tab_stop != raw {
            info!(
                target: "config",
                raw,
                clamped = tab_stop,
                min = TAB_STOP_MIN,
                max = TAB_STOP_MAX,
                "tab_stop_clamped"
            );
        }
        Resolved {
            tab_stop,
            message_timeout: Duration::from_secs(self.file.editor.message_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;
    use std::sync::{Arc, Mutex, MutexGuard};
    use tracing::Level;
    use tracing::subscriber::with_default;
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone)]
    struct BufferWriter {
        inner: Arc<Mutex<Vec<u8>>>,
    }

    impl BufferWriter {
        fn new() -> (Self, Arc<Mutex<Vec<u8>>>) {
            let buf = Arc::new(Mutex::new(Vec::new()));
            (Self { inner: buf.clone() }, buf)
        }
    }

    struct LockedWriter<'a> {
        guard: MutexGuard<'a, Vec<u8>>,
    }

    impl<'a> Write for LockedWriter<'a> {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.guard.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for BufferWriter {
        type Writer = LockedWriter<'a>;

        fn make_writer(&'a self) -> Self::Writer {
            LockedWriter {
                guard: self.inner.lock().expect("log buffer poisoned"),
            }
        }
    }

    fn write_config(body: &str) -> tempfile::NamedTempFile {
        let tmp = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(tmp.path(), body).unwrap();
        tmp
    }

    #[test]
    fn default_config_when_missing_file() {
        let cfg = load_from(Some(PathBuf::from("__nonexistent_hopefully__.toml"))).unwrap();
        assert!(cfg.raw.is_none());
        let r = cfg.resolve();
        assert_eq!(r.tab_stop, 4);
        assert_eq!(r.message_timeout, Duration::from_secs(10));
    }

    #[test]
    fn parses_editor_section() {
        let tmp = write_config("[editor]\ntab_stop = 8\nmessage_timeout_secs = 3\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.editor.tab_stop, 8);
        let r = cfg.resolve();
        assert_eq!(r.tab_stop, 8);
        assert_eq!(r.message_timeout, Duration::from_secs(3));
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let tmp = write_config("[editor]\ntab_stop = 2\n[unknown]\nx = 1\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.editor.tab_stop, 2);
        assert_eq!(cfg.file.editor.message_timeout_secs, 10);
    }

    #[test]
    fn parse_error_falls_back_to_defaults() {
        let tmp = write_config("[editor\ntab_stop = ");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.file.editor, EditorConfig::default());
    }

    #[test]
    fn tab_stop_clamped_into_range() {
        let tmp = write_config("[editor]\ntab_stop = 0\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.resolve().tab_stop, TAB_STOP_MIN);
        let tmp = write_config("[editor]\ntab_stop = 99\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        assert_eq!(cfg.resolve().tab_stop, TAB_STOP_MAX);
    }

    #[test]
    fn clamp_logging_uses_config_target() {
        let tmp = write_config("[editor]\ntab_stop = 40\n");
        let cfg = load_from(Some(tmp.path().to_path_buf())).unwrap();
        let (writer, buffer) = BufferWriter::new();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(Level::INFO)
            .with_target(true)
            .with_ansi(false)
            .without_time()
            .with_writer(writer)
            .finish();

        with_default(subscriber, || {
            cfg.resolve();
        });

        let log_output = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(log_output.contains("INFO config:"));
        assert!(log_output.contains("tab_stop_clamped"));
    }
}
