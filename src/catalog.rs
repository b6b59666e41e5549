use once_cell::sync::Lazy;
use serde_json::{Map, Value};

pub const DEFAULT_LANGUAGES: &[&str] = &["en", "hi"];
pub const DEFAULT_VOICE_LANGUAGE: &str = "en";
pub const UNLISTED_LANGUAGE_VOICE: &str = "alloy";

const FALLBACK_VOICES: &[(&str, &[&str])] = &[
    ("en", &["alloy", "echo", "fable", "onyx", "nova", "shimmer"]),
    ("hi", &["hindi_voice", "alloy"]),
];

static UNLISTED_LANGUAGE_VOICES: Lazy<Vec<String>> =
    Lazy::new(|| vec![UNLISTED_LANGUAGE_VOICE.to_string()]);

pub fn default_languages() -> Vec<String> {
    DEFAULT_LANGUAGES.iter().map(|code| code.to_string()).collect()
}

pub fn language_label(code: &str) -> String {
    match code {
        "en" => "English".to_string(),
        "hi" => "Hindi".to_string(),
        other => other.to_uppercase(),
    }
}

/// Voices per language, in the order the backend listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceCatalog {
    groups: Vec<(String, Vec<String>)>,
}

impl VoiceCatalog {
    pub fn fallback() -> Self {
        let mut catalog = Self::default();
        for (language, voices) in FALLBACK_VOICES {
            for voice in *voices {
                catalog.push(*language, *voice);
            }
        }
        catalog
    }

    pub fn push(&mut self, language: impl Into<String>, voice: impl Into<String>) {
        let language = language.into();
        let voice = voice.into();
        match self.groups.iter_mut().find(|(lang, _)| *lang == language) {
            Some((_, voices)) => voices.push(voice),
            None => self.groups.push((language, vec![voice])),
        }
    }

    pub fn languages(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|(lang, _)| lang.as_str())
    }

    /// Voices for `language`; languages the catalog does not know get `alloy`.
    pub fn voices_for(&self, language: &str) -> &[String] {
        self.groups
            .iter()
            .find(|(lang, _)| lang == language)
            .map(|(_, voices)| voices.as_slice())
            .unwrap_or(UNLISTED_LANGUAGE_VOICES.as_slice())
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn to_json(&self) -> Value {
        let map: Map<String, Value> = self
            .groups
            .iter()
            .map(|(lang, voices)| {
                let list = voices.iter().cloned().map(Value::String).collect();
                (lang.clone(), Value::Array(list))
            })
            .collect();
        Value::Object(map)
    }
}

/// The language and voice currently picked in a form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    language: String,
    voice: String,
}

impl Selection {
    pub fn new(languages: &[String], catalog: &VoiceCatalog) -> Self {
        let language = languages
            .first()
            .cloned()
            .unwrap_or_else(|| DEFAULT_VOICE_LANGUAGE.to_string());
        let voice = first_voice(catalog, &language);
        Self { language, voice }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn voice(&self) -> &str {
        &self.voice
    }

    pub fn set_language(&mut self, language: &str, catalog: &VoiceCatalog) {
        if self.language == language {
            return;
        }
        self.language = language.to_string();
        if !catalog.voices_for(language).contains(&self.voice) {
            self.voice = first_voice(catalog, language);
        }
    }

    /// Returns false, leaving the selection alone, for voices not offered for the current language.
    pub fn set_voice(&mut self, voice: &str, catalog: &VoiceCatalog) -> bool {
        if catalog
            .voices_for(&self.language)
            .iter()
            .any(|candidate| candidate == voice)
        {
            self.voice = voice.to_string();
            true
        } else {
            false
        }
    }

    /// Re-validates against a freshly loaded language list and catalog.
    pub fn reconcile(&mut self, languages: &[String], catalog: &VoiceCatalog) {
        if !languages.contains(&self.language) {
            *self = Self::new(languages, catalog);
            return;
        }
        if !catalog.voices_for(&self.language).contains(&self.voice) {
            self.voice = first_voice(catalog, &self.language);
        }
    }
}

fn first_voice(catalog: &VoiceCatalog, language: &str) -> String {
    catalog
        .voices_for(language)
        .first()
        .cloned()
        .unwrap_or_else(|| UNLISTED_LANGUAGE_VOICE.to_string())
}
