use anyhow::Context;
use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use crate::catalog::{
    default_languages, VoiceCatalog, DEFAULT_VOICE_LANGUAGE, UNLISTED_LANGUAGE_VOICE,
};
use crate::error::AppError;
use crate::settings::BackendConfig;

const HEALTH_PATH: &str = "/health";
const LANGUAGES_PATH: &str = "/api/languages";
const VOICES_PATH: &str = "/v1/voices";
pub const SPEECH_PATH: &str = "/v1/audio/speech";

const TTS_MODEL: &str = "tts-1";
const TTS_RESPONSE_FORMAT: &str = "wav";

/// What a catalog call produced: the backend's own answer, or a default
/// substituted because the call failed.
#[derive(Debug)]
pub enum Lookup<T> {
    Backend(T),
    Fallback { value: T, reason: AppError },
}

impl<T> Lookup<T> {
    pub fn value(&self) -> &T {
        match self {
            Self::Backend(value) | Self::Fallback { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Self::Backend(value) | Self::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }

    pub fn fallback_reason(&self) -> Option<&AppError> {
        match self {
            Self::Fallback { reason, .. } => Some(reason),
            Self::Backend(_) => None,
        }
    }
}

#[derive(Clone)]
pub struct BackendClient {
    http: Client,
    config: BackendConfig,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Result<Self, AppError> {
        let http = Client::builder()
            .connect_timeout(config.probe_timeout)
            .build()
            .context("Failed to initialise HTTP client")
            .map_err(AppError::from)?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    pub fn health(&self) -> Result<(), AppError> {
        let url = self.config.endpoint(HEALTH_PATH);
        log::debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .timeout(self.config.probe_timeout)
            .send()?;
        if response.status() == StatusCode::OK {
            Ok(())
        } else {
            Err(backend_error(response))
        }
    }

    pub fn check_health(&self) -> bool {
        match self.health() {
            Ok(()) => true,
            Err(err) => {
                log::warn!("Backend at {} is unavailable: {err}", self.base_url());
                false
            }
        }
    }

    pub fn list_languages(&self) -> Lookup<Vec<String>> {
        let fetched = self
            .get_json::<LanguagesResponse>(LANGUAGES_PATH)
            .and_then(|payload| match payload.languages {
                Some(languages) if !languages.is_empty() => Ok(languages),
                Some(_) => Err(AppError::Message("Backend listed no languages".into())),
                None => Err(AppError::Message(
                    "Language response has no `languages` field".into(),
                )),
            });
        match fetched {
            Ok(languages) => Lookup::Backend(languages),
            Err(reason) => {
                log::warn!("Using default languages: {reason}");
                Lookup::Fallback {
                    value: default_languages(),
                    reason,
                }
            }
        }
    }

    pub fn list_voices(&self) -> Lookup<VoiceCatalog> {
        match self.get_json::<VoicesResponse>(VOICES_PATH) {
            Ok(payload) => Lookup::Backend(group_voices(payload.voices.unwrap_or_default())),
            Err(reason) => {
                log::warn!("Using fallback voice catalog: {reason}");
                Lookup::Fallback {
                    value: VoiceCatalog::fallback(),
                    reason,
                }
            }
        }
    }

    /// Returns the response body exactly as the backend sent it.
    pub fn synthesize(&self, text: &str, voice: &str) -> Result<Vec<u8>, AppError> {
        if text.trim().is_empty() {
            return Err(AppError::Client(
                "Cannot generate speech for empty text".into(),
            ));
        }

        let payload = SpeechRequest {
            model: TTS_MODEL,
            input: text,
            voice,
            response_format: TTS_RESPONSE_FORMAT,
        };

        let url = self.config.endpoint(SPEECH_PATH);
        log::debug!("POST {url} ({} chars, voice {voice})", text.chars().count());
        let response = self
            .http
            .post(url)
            .timeout(self.config.synthesis_timeout)
            .header(ACCEPT, "audio/wav")
            .header(CONTENT_TYPE, "application/json")
            .json(&payload)
            .send()?;

        if response.status() != StatusCode::OK {
            return Err(backend_error(response));
        }
        let audio = response.bytes()?;
        log::info!("Received {} bytes of audio", audio.len());
        Ok(audio.to_vec())
    }

    fn get_json<T>(&self, path: &str) -> Result<T, AppError>
    where
        T: for<'de> Deserialize<'de>,
    {
        let url = self.config.endpoint(path);
        log::debug!("GET {url}");
        let response = self
            .http
            .get(url)
            .timeout(self.config.probe_timeout)
            .send()?;
        if response.status() != StatusCode::OK {
            return Err(backend_error(response));
        }
        let body = response.text()?;
        serde_json::from_str(&body)
            .map_err(|err| AppError::Client(format!("Malformed response from {path}: {err}")))
    }
}

#[derive(Serialize)]
struct SpeechRequest<'a> {
    model: &'a str,
    input: &'a str,
    voice: &'a str,
    response_format: &'a str,
}

#[derive(Deserialize)]
struct LanguagesResponse {
    #[serde(default)]
    languages: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct VoicesResponse {
    #[serde(default)]
    voices: Option<Vec<VoiceEntry>>,
}

#[derive(Deserialize)]
struct VoiceEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    language: Option<String>,
}

fn group_voices(entries: Vec<VoiceEntry>) -> VoiceCatalog {
    let mut catalog = VoiceCatalog::default();
    for entry in entries {
        catalog.push(
            entry
                .language
                .unwrap_or_else(|| DEFAULT_VOICE_LANGUAGE.to_string()),
            entry
                .id
                .unwrap_or_else(|| UNLISTED_LANGUAGE_VOICE.to_string()),
        );
    }
    catalog
}

fn backend_error(response: Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().unwrap_or_default();
    log::warn!("Backend answered {status}");
    AppError::Backend { status, body }
}
