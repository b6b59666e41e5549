use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Url;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";
pub const BACKEND_URL_KEY: &str = "BACKEND_URL";
const SECRETS_FILENAME: &str = "secrets.toml";
const APP_DIR: &str = "tts-frontend";

const PROBE_TIMEOUT: Duration = Duration::from_secs(5);
const SYNTHESIS_TIMEOUT: Duration = Duration::from_secs(30);

/// Where the backend lives and how long each kind of call may take.
/// Built once in `main` and handed to the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    pub probe_timeout: Duration,
    pub synthesis_timeout: Duration,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BACKEND_URL)
    }
}

impl BackendConfig {
    pub fn with_base_url(base_url: impl AsRef<str>) -> Self {
        Self {
            base_url: base_url.as_ref().trim().trim_end_matches('/').to_string(),
            probe_timeout: PROBE_TIMEOUT,
            synthesis_timeout: SYNTHESIS_TIMEOUT,
        }
    }

    /// Secret store overrides the environment, which overrides the default.
    pub fn load() -> Self {
        let from_env = env::var(BACKEND_URL_KEY).ok();
        Self::load_from(&secret_paths(), from_env.as_deref())
    }

    /// The first secrets file holding a usable URL wins; unusable files are skipped.
    pub fn load_from(secret_files: &[PathBuf], from_env: Option<&str>) -> Self {
        let secret = secret_files.iter().find_map(|path| usable_secret(path));
        Self::with_base_url(resolve_base_url(secret.as_deref(), from_env))
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

pub fn resolve_base_url(secret: Option<&str>, from_env: Option<&str>) -> String {
    let candidates = [("secret store", secret), ("environment", from_env)];
    for (source, value) in candidates {
        let Some(value) = value else {
            continue;
        };
        match normalize_url(value) {
            Some(url) => {
                log::debug!("Backend URL taken from {source}: {url}");
                return url;
            }
            None => log::warn!("Ignoring invalid {BACKEND_URL_KEY} from {source}: {value:?}"),
        }
    }
    DEFAULT_BACKEND_URL.to_string()
}

/// Reads `BACKEND_URL` from a TOML secrets file. A file without the key is `Ok(None)`.
pub fn read_secret_file(path: &Path) -> Result<Option<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed reading {}", path.display()))?;
    let table: toml::Value =
        toml::from_str(&raw).with_context(|| format!("Invalid TOML in {}", path.display()))?;
    Ok(table
        .get(BACKEND_URL_KEY)
        .and_then(|v| v.as_str())
        .map(str::to_string))
}

pub fn secret_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(SECRETS_FILENAME)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(APP_DIR).join(SECRETS_FILENAME));
    }
    paths
}

fn usable_secret(path: &Path) -> Option<String> {
    if !path.exists() {
        return None;
    }
    match read_secret_file(path) {
        Ok(Some(value)) => {
            let url = normalize_url(&value);
            if url.is_none() {
                log::warn!(
                    "Skipping {}: invalid {BACKEND_URL_KEY} {value:?}",
                    path.display()
                );
            }
            url
        }
        Ok(None) => {
            log::warn!("Skipping {}: no {BACKEND_URL_KEY} key", path.display());
            None
        }
        Err(err) => {
            log::warn!("Skipping secrets file: {err:#}");
            None
        }
    }
}

fn normalize_url(value: &str) -> Option<String> {
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return None;
    }
    let parsed = Url::parse(trimmed).ok()?;
    if !matches!(parsed.scheme(), "http" | "https") || parsed.host_str().is_none() {
        return None;
    }
    Some(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_when_nothing_configured() {
        assert_eq!(resolve_base_url(None, None), "http://localhost:8000");
        assert_eq!(BackendConfig::default().base_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn secret_store_beats_environment() {
        let url = resolve_base_url(Some("https://tts.example.com"), Some("http://10.0.0.2:8000"));
        assert_eq!(url, "https://tts.example.com");
        let url = resolve_base_url(None, Some("http://10.0.0.2:8000/"));
        assert_eq!(url, "http://10.0.0.2:8000");
    }

    #[test]
    fn invalid_values_fall_through() {
        assert_eq!(
            resolve_base_url(Some("   "), Some("http://backend:9000")),
            "http://backend:9000"
        );
        assert_eq!(
            resolve_base_url(Some("not a url"), Some("ftp://backend")),
            DEFAULT_BACKEND_URL
        );
    }

    #[test]
    fn endpoints_join_without_double_slash() {
        let config = BackendConfig::with_base_url("http://host:8000/");
        assert_eq!(config.endpoint("/health"), "http://host:8000/health");
        assert_eq!(
            config.endpoint("v1/audio/speech"),
            "http://host:8000/v1/audio/speech"
        );
        assert_eq!(config.probe_timeout, Duration::from_secs(5));
        assert_eq!(config.synthesis_timeout, Duration::from_secs(30));
    }

    #[test]
    fn reads_backend_url_from_secrets_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "BACKEND_URL = \"https://speech.internal\"").unwrap();
        writeln!(file, "OTHER = 1").unwrap();
        let value = read_secret_file(file.path()).unwrap();
        assert_eq!(value.as_deref(), Some("https://speech.internal"));
    }

    #[test]
    fn secrets_file_without_key_is_none() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "API_TOKEN = \"abc\"").unwrap();
        assert_eq!(read_secret_file(file.path()).unwrap(), None);
    }

    fn secrets_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn file_without_key_falls_through_to_next_secrets_file() {
        let dir = tempfile::tempdir().unwrap();
        let files = [
            secrets_file(dir.path(), "cwd.toml", "API_TOKEN = \"abc\"\n"),
            secrets_file(
                dir.path(),
                "config.toml",
                "BACKEND_URL = \"http://from-config-dir:9000\"\n",
            ),
        ];
        let config = BackendConfig::load_from(&files, None);
        assert_eq!(config.base_url, "http://from-config-dir:9000");
    }

    #[test]
    fn malformed_or_invalid_secrets_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let files = [
            secrets_file(dir.path(), "broken.toml", "BACKEND_URL = \n"),
            secrets_file(dir.path(), "blank.toml", "BACKEND_URL = \"  \"\n"),
            secrets_file(dir.path(), "good.toml", "BACKEND_URL = \"https://tts.example.com/\"\n"),
        ];
        let config = BackendConfig::load_from(&files, Some("http://from-env:8000"));
        assert_eq!(config.base_url, "https://tts.example.com");
    }

    #[test]
    fn environment_used_when_no_secrets_file_is_usable() {
        let dir = tempfile::tempdir().unwrap();
        let files = [
            dir.path().join("missing.toml"),
            secrets_file(dir.path(), "other.toml", "BACKEND_URL = \"ftp://nope\"\n"),
        ];
        let config = BackendConfig::load_from(&files, Some("http://from-env:8000"));
        assert_eq!(config.base_url, "http://from-env:8000");

        let config = BackendConfig::load_from(&files, None);
        assert_eq!(config.base_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn malformed_secrets_file_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "BACKEND_URL = ").unwrap();
        assert!(read_secret_file(file.path()).is_err());
    }
}
