use std::fs;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use arboard::Clipboard;
use chrono::{DateTime, Local};
use eframe::App;
use egui::{self, Align, Color32, Context, Frame, Layout, RichText, ScrollArea, Ui, Vec2};
use serde_json::json;

use crate::audio::{AudioClip, AudioPlayer};
use crate::backend::{BackendClient, Lookup, SPEECH_PATH};
use crate::catalog::{language_label, Selection, VoiceCatalog};
use crate::error::AppError;
use crate::text_utils::{
    character_count, download_file_name, estimated_seconds, format_byte_count,
};

const ERROR_COLOR: Color32 = Color32::from_rgb(200, 60, 60);
const OK_COLOR: Color32 = Color32::from_rgb(0, 150, 0);

pub struct TtsApp {
    client: BackendClient,
    player: Option<AudioPlayer>,
    player_error: Option<String>,

    connection: Connection,
    startup_task: Option<BackgroundTask<BackendSnapshot>>,
    languages: Vec<String>,
    catalog: VoiceCatalog,
    fallback_notes: Vec<String>,
    selection: Selection,

    text_input: String,
    speech: Option<SpeechResult>,

    api_text: String,
    api_voice: String,
    api_result: Option<ApiTestResult>,

    synthesis: Option<PendingSynthesis>,
    status_text: Option<String>,
    error_text: Option<String>,
    error_detail: Option<String>,
    copy_feedback_until: Option<Instant>,
}

impl TtsApp {
    pub fn new(client: BackendClient) -> Self {
        let (player, player_error) = match AudioPlayer::new() {
            Ok(player) => (Some(player), None),
            Err(err) => {
                log::warn!("Audio output unavailable: {err}");
                (None, Some(err.to_string()))
            }
        };
        let languages = crate::catalog::default_languages();
        let catalog = VoiceCatalog::fallback();
        let selection = Selection::new(&languages, &catalog);
        let api_voice = selection.voice().to_string();

        let mut app = Self {
            client,
            player,
            player_error,
            connection: Connection::Checking,
            startup_task: None,
            languages,
            catalog,
            fallback_notes: Vec::new(),
            selection,
            text_input: String::new(),
            speech: None,
            api_text: String::new(),
            api_voice,
            api_result: None,
            synthesis: None,
            status_text: None,
            error_text: None,
            error_detail: None,
            copy_feedback_until: None,
        };
        app.connect();
        app
    }

    fn connect(&mut self) {
        self.connection = Connection::Checking;
        let client = self.client.clone();
        self.startup_task = Some(BackgroundTask::spawn(move || {
            client.health()?;
            Ok(BackendSnapshot {
                languages: client.list_languages(),
                voices: client.list_voices(),
            })
        }));
    }

    fn poll_startup(&mut self, ctx: &Context) {
        let Some(task) = &mut self.startup_task else {
            return;
        };
        let Some(result) = task.try_take() else {
            ctx.request_repaint_after(Duration::from_millis(100));
            return;
        };
        self.startup_task = None;
        match result {
            Ok(snapshot) => self.apply_snapshot(snapshot),
            Err(err) => {
                log::warn!("Backend unavailable at {}: {err}", self.client.base_url());
                self.connection = Connection::Offline(err.to_string());
            }
        }
    }

    fn apply_snapshot(&mut self, snapshot: BackendSnapshot) {
        self.fallback_notes.clear();
        if let Some(reason) = snapshot.languages.fallback_reason() {
            self.fallback_notes
                .push(format!("Languages: using defaults ({reason})"));
        }
        if let Some(reason) = snapshot.voices.fallback_reason() {
            self.fallback_notes
                .push(format!("Voices: using defaults ({reason})"));
        }
        self.languages = snapshot.languages.into_value();
        self.catalog = snapshot.voices.into_value();
        self.selection.reconcile(&self.languages, &self.catalog);
        self.reconcile_api_voice();
        self.connection = Connection::Online;
        log::info!(
            "Connected to {} ({} languages, {} voice groups)",
            self.client.base_url(),
            self.languages.len(),
            self.catalog.len()
        );
    }

    fn reconcile_api_voice(&mut self) {
        let voices = self.catalog.voices_for(self.selection.language());
        if !voices.contains(&self.api_voice) {
            self.api_voice = voices
                .first()
                .cloned()
                .unwrap_or_else(|| self.selection.voice().to_string());
        }
    }

    fn is_busy(&self) -> bool {
        self.synthesis.is_some()
    }

    fn request_speech(&mut self, intent: SpeechIntent, text: String) {
        if self.is_busy() {
            return;
        }
        let client = self.client.clone();
        let voice = intent.voice().to_string();
        if matches!(intent, SpeechIntent::Form { .. }) {
            self.error_text = None;
            self.error_detail = None;
            self.status_text = None;
            self.speech = None;
        }
        self.synthesis = Some(PendingSynthesis {
            intent,
            task: BackgroundTask::spawn(move || {
                let started = Instant::now();
                let audio = client.synthesize(&text, &voice)?;
                Ok(SynthesisOutcome {
                    clip: AudioClip::new(audio),
                    elapsed: started.elapsed(),
                })
            }),
        });
    }

    fn poll_synthesis(&mut self, ctx: &Context) {
        let Some(pending) = &mut self.synthesis else {
            return;
        };
        let Some(result) = pending.task.try_take() else {
            ctx.request_repaint_after(Duration::from_millis(100));
            return;
        };
        let Some(pending) = self.synthesis.take() else {
            return;
        };
        match (pending.intent, result) {
            (SpeechIntent::Form { language, voice }, Ok(outcome)) => {
                self.status_text = Some(format!(
                    "Speech generated in {:.2}s",
                    outcome.elapsed.as_secs_f64()
                ));
                self.speech = Some(SpeechResult {
                    clip: outcome.clip,
                    language,
                    voice,
                    elapsed: outcome.elapsed,
                    created_at: Local::now(),
                });
            }
            (SpeechIntent::Form { .. }, Err(err)) => {
                log::warn!("Speech synthesis failed: {err}");
                self.error_detail = err.backend_body().map(str::to_string);
                self.error_text = Some(err.to_string());
            }
            (SpeechIntent::ApiTest { .. }, Ok(outcome)) => {
                self.api_result = Some(ApiTestResult::Passed(outcome.clip));
            }
            (SpeechIntent::ApiTest { .. }, Err(err)) => {
                log::warn!("API test failed: {err}");
                self.api_result = Some(ApiTestResult::Failed {
                    message: api_failure_message(&err),
                    body: err.backend_body().map(str::to_string),
                });
            }
        }
    }

    fn toggle_playback(&mut self, clip: &AudioClip) {
        let Some(player) = self.player.as_mut() else {
            self.error_text = Some("Audio output unavailable".to_string());
            return;
        };
        if player.is_playing_clip(clip) {
            player.stop();
        } else if let Err(err) = player.play(clip) {
            self.error_text = Some(err.to_string());
        }
    }

    fn save_speech(&mut self) {
        let Some(speech) = &self.speech else {
            return;
        };
        let file_name = download_file_name(
            &speech.language,
            &speech.voice,
            speech.created_at.timestamp(),
        );
        let Some(path) = rfd::FileDialog::new()
            .set_title("Download Audio")
            .set_file_name(file_name)
            .add_filter("WAV audio", &["wav"])
            .save_file()
        else {
            return;
        };
        match fs::write(&path, speech.clip.bytes()) {
            Ok(()) => {
                log::info!("Saved audio to {}", path.display());
                self.status_text = Some(format!("Audio saved to {}", path.display()));
            }
            Err(err) => {
                self.error_text = Some(AppError::from(err).to_string());
            }
        }
    }

    fn copy_to_clipboard(&mut self, text: String) {
        match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
            Ok(()) => {
                self.copy_feedback_until = Some(Instant::now() + Duration::from_secs(2));
            }
            Err(err) => {
                self.error_text = Some(format!("Clipboard error: {err}"));
            }
        }
    }

    fn show_connecting(&mut self, ui: &mut Ui) {
        ui.add_space(40.0);
        ui.vertical_centered(|ui| {
            ui.spinner();
            ui.label(format!("Connecting to backend at {}…", self.client.base_url()));
        });
    }

    fn show_offline(&mut self, ui: &mut Ui, reason: &str) {
        ui.add_space(20.0);
        Frame::group(ui.style())
            .inner_margin(egui::Margin::same(12.0))
            .rounding(egui::Rounding::same(8.0))
            .show(ui, |ui| {
                ui.colored_label(
                    ERROR_COLOR,
                    "⚠ Backend server is not available. Please start the backend service.",
                );
                ui.label(format!("Expected backend URL: {}", self.client.base_url()));
                ui.label(RichText::new(reason).small().weak());
                ui.add_space(8.0);
                if ui.button("Retry").clicked() {
                    self.connect();
                }
            });
    }

    fn show_sidebar(&mut self, ui: &mut Ui) {
        ui.heading("Configuration");
        ui.colored_label(OK_COLOR, "✔ Backend Connected");
        ui.add_space(8.0);

        ui.label("Select Language");
        let mut language = self.selection.language().to_string();
        egui::ComboBox::from_id_source("language")
            .selected_text(language_label(&language))
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for code in &self.languages {
                    ui.selectable_value(&mut language, code.clone(), language_label(code));
                }
            });
        if language != self.selection.language() {
            self.selection.set_language(&language, &self.catalog);
            self.reconcile_api_voice();
        }

        ui.label("Select Voice");
        let mut voice = self.selection.voice().to_string();
        egui::ComboBox::from_id_source("voice")
            .selected_text(voice.as_str())
            .width(ui.available_width())
            .show_ui(ui, |ui| {
                for candidate in self.catalog.voices_for(self.selection.language()) {
                    ui.selectable_value(&mut voice, candidate.clone(), candidate.as_str());
                }
            })
            .response
            .on_hover_text(format!(
                "Choose voice for {} language",
                self.selection.language().to_uppercase()
            ));
        if voice != self.selection.voice() {
            self.selection.set_voice(&voice, &self.catalog);
        }

        ui.separator();
        ui.strong("Backend Info");
        ui.monospace(self.client.base_url());

        ui.add_space(6.0);
        ui.strong("API Endpoints");
        let endpoints = [
            ("OpenAI-compatible:", self.client.config().endpoint(SPEECH_PATH)),
            ("Health check:", self.client.config().endpoint("/health")),
        ];
        for (caption, url) in endpoints {
            ui.label(RichText::new(caption).small());
            ui.horizontal(|ui| {
                ui.monospace(&url);
                if ui.small_button("⧉").on_hover_text("Copy").clicked() {
                    self.copy_to_clipboard(url.clone());
                }
            });
        }
        if let Some(deadline) = self.copy_feedback_until {
            if Instant::now() < deadline {
                ui.label(RichText::new("Copied to clipboard").color(OK_COLOR));
            } else {
                self.copy_feedback_until = None;
            }
        }
    }

    fn show_text_input(&mut self, ui: &mut Ui) {
        ui.heading("Text Input");
        ui.label("Enter text to convert to speech");
        let width = ui.available_width();
        ui.add_sized(
            Vec2::new(width, ui.spacing().interact_size.y * 7.0),
            egui::TextEdit::multiline(&mut self.text_input)
                .hint_text("Type your text here... (English or Hindi)"),
        );

        let has_text = !self.text_input.trim().is_empty();
        ui.horizontal(|ui| {
            let generate = ui.add_enabled(
                has_text && !self.is_busy(),
                egui::Button::new(RichText::new("Generate Speech").strong()),
            );
            if generate.clicked() {
                let intent = SpeechIntent::Form {
                    language: self.selection.language().to_string(),
                    voice: self.selection.voice().to_string(),
                };
                self.request_speech(intent, self.text_input.clone());
            }
            if has_text {
                ui.label(
                    RichText::new(format!(
                        "Characters: {}",
                        character_count(&self.text_input)
                    ))
                    .small(),
                );
                ui.label(
                    RichText::new(format!(
                        "Est. time: {:.1}s",
                        estimated_seconds(&self.text_input)
                    ))
                    .small(),
                );
            }
        });
    }

    fn show_audio_output(&mut self, ui: &mut Ui) {
        ui.heading("Audio Output");
        if matches!(
            self.synthesis,
            Some(PendingSynthesis {
                intent: SpeechIntent::Form { .. },
                ..
            })
        ) {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Generating speech...");
            });
            return;
        }

        if let Some(err) = &self.error_text {
            ui.colored_label(ERROR_COLOR, err);
            if let Some(body) = &self.error_detail {
                ui.code(body);
            }
        }

        let Some(speech) = self.speech.as_ref() else {
            return;
        };
        let clip = speech.clip.clone();
        let summary = format!(
            "{} · {} · {:.2}s",
            language_label(&speech.language),
            speech.voice,
            speech.elapsed.as_secs_f64()
        );

        if let Some(status) = &self.status_text {
            ui.colored_label(OK_COLOR, format!("✔ {status}"));
        }
        ui.label(RichText::new(summary).small().weak());
        ui.label(RichText::new(format!("Audio size: {}", format_byte_count(clip.len()))).small());
        if let Some(format) = clip.format() {
            ui.label(
                RichText::new(format!("{} Hz, {} ch", format.sample_rate, format.channels))
                    .small()
                    .weak(),
            );
        }

        self.show_playback_row(ui, &clip);
        if ui.button("⬇ Download Audio").clicked() {
            self.save_speech();
        }
    }

    fn show_playback_row(&mut self, ui: &mut Ui, clip: &AudioClip) {
        let playing = self
            .player
            .as_ref()
            .is_some_and(|player| player.is_playing_clip(clip));
        ui.horizontal(|ui| {
            let label = if playing { "■ Stop" } else { "▶ Play" };
            if ui
                .add_enabled(clip.is_playable(), egui::Button::new(label))
                .clicked()
            {
                self.toggle_playback(clip);
            }
            if playing {
                if let Some(player) = &self.player {
                    ui.add(
                        egui::ProgressBar::new(player.progress())
                            .desired_width(ui.available_width())
                            .text(time_display(player.elapsed())),
                    );
                }
            }
        });
    }

    fn show_api_testing(&mut self, ui: &mut Ui) {
        ui.heading("API Testing");
        ui.columns(2, |columns| {
            let ui = &mut columns[0];
            ui.strong("Test Backend API Directly:");
            ui.add(
                egui::TextEdit::singleline(&mut self.api_text)
                    .hint_text("Enter text to test API")
                    .desired_width(f32::INFINITY),
            );
            let mut api_voice = self.api_voice.clone();
            egui::ComboBox::from_id_source("api_voice")
                .selected_text(api_voice.as_str())
                .show_ui(ui, |ui| {
                    for candidate in self.catalog.voices_for(self.selection.language()) {
                        ui.selectable_value(&mut api_voice, candidate.clone(), candidate.as_str());
                    }
                });
            self.api_voice = api_voice;
            let enabled = !self.api_text.trim().is_empty() && !self.is_busy();
            if ui
                .add_enabled(enabled, egui::Button::new("Test API"))
                .clicked()
            {
                self.api_result = None;
                let intent = SpeechIntent::ApiTest {
                    voice: self.api_voice.clone(),
                };
                self.request_speech(intent, self.api_text.clone());
            }

            let ui = &mut columns[1];
            if matches!(
                self.synthesis,
                Some(PendingSynthesis {
                    intent: SpeechIntent::ApiTest { .. },
                    ..
                })
            ) {
                ui.horizontal(|ui| {
                    ui.spinner();
                    ui.label("Testing API...");
                });
                return;
            }
            let passed = match &self.api_result {
                Some(ApiTestResult::Passed(clip)) => Some(clip.clone()),
                _ => None,
            };
            if let Some(clip) = passed {
                ui.colored_label(OK_COLOR, "✔ API test successful!");
                ui.label(
                    RichText::new(format!("Response size: {}", format_byte_count(clip.len())))
                        .small(),
                );
                self.show_playback_row(ui, &clip);
            } else if let Some(ApiTestResult::Failed { message, body }) = &self.api_result {
                ui.colored_label(ERROR_COLOR, message);
                if let Some(body) = body {
                    ui.code(body);
                }
            }
        });
    }

    fn show_system_info(&mut self, ui: &mut Ui) {
        egui::CollapsingHeader::new("System Information").show(ui, |ui| {
            let frontend = json!({
                "Backend URL": self.client.base_url(),
                "Supported Languages": self.languages,
                "Connection Status": self.connection.label(),
            });
            ui.columns(2, |columns| {
                columns[0].strong("Frontend Configuration:");
                columns[0].code(pretty_json(&frontend));
                columns[1].strong("Available Voices:");
                columns[1].code(pretty_json(&self.catalog.to_json()));
            });
            for note in &self.fallback_notes {
                ui.label(RichText::new(note).small().weak());
            }
            if let Some(err) = &self.player_error {
                ui.colored_label(ERROR_COLOR, err);
            }
        });
    }

    fn show_usage(&mut self, ui: &mut Ui) {
        egui::CollapsingHeader::new("Usage Instructions").show(ui, |ui| {
            for (idx, step) in USAGE_STEPS.iter().enumerate() {
                ui.label(format!("{}. {step}", idx + 1));
            }
            ui.add_space(6.0);
            ui.strong("API Integration:");
            ui.monospace(format!("GET {}", self.client.config().endpoint("/health")));
            ui.monospace(format!(
                "POST {}",
                self.client.config().endpoint(SPEECH_PATH)
            ));
        });
    }
}

impl App for TtsApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.poll_startup(ctx);
        self.poll_synthesis(ctx);
        if let Some(player) = &mut self.player {
            player.refresh();
            if player.is_playing() {
                ctx.request_repaint();
            }
        }

        egui::TopBottomPanel::top("topbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Text-to-Speech").heading());
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    ui.label(RichText::new("Independent Frontend with Backend API").italics());
                });
            });
        });

        match self.connection.clone() {
            Connection::Checking => {
                egui::CentralPanel::default().show(ctx, |ui| self.show_connecting(ui));
            }
            Connection::Offline(reason) => {
                egui::CentralPanel::default().show(ctx, |ui| self.show_offline(ui, &reason));
            }
            Connection::Online => {
                egui::SidePanel::left("sidebar")
                    .resizable(true)
                    .default_width(260.0)
                    .show(ctx, |ui| {
                        ScrollArea::vertical().show(ui, |ui| self.show_sidebar(ui));
                    });
                egui::CentralPanel::default().show(ctx, |ui| {
                    ScrollArea::vertical().show(ui, |ui| {
                        ui.columns(2, |columns| {
                            self.show_text_input(&mut columns[0]);
                            self.show_audio_output(&mut columns[1]);
                        });
                        ui.separator();
                        self.show_api_testing(ui);
                        ui.separator();
                        self.show_system_info(ui);
                        self.show_usage(ui);
                    });
                });
            }
        }
    }
}

const USAGE_STEPS: &[&str] = &[
    "Ensure Backend is Running: the backend server must be running",
    "Select Language: choose a language in the sidebar",
    "Select Voice: pick from the voices available for that language",
    "Enter Text: type or paste your text in the input area",
    "Generate Speech: click the \"Generate Speech\" button",
    "Play Audio: use the play button to listen to the result",
    "Download: save the audio file using the download button",
];

#[derive(Clone)]
enum Connection {
    Checking,
    Online,
    Offline(String),
}

impl Connection {
    fn label(&self) -> &'static str {
        match self {
            Self::Online => "Connected",
            Self::Checking => "Checking",
            Self::Offline(_) => "Disconnected",
        }
    }
}

struct BackendSnapshot {
    languages: Lookup<Vec<String>>,
    voices: Lookup<VoiceCatalog>,
}

enum SpeechIntent {
    Form { language: String, voice: String },
    ApiTest { voice: String },
}

impl SpeechIntent {
    fn voice(&self) -> &str {
        match self {
            Self::Form { voice, .. } | Self::ApiTest { voice } => voice,
        }
    }
}

struct PendingSynthesis {
    intent: SpeechIntent,
    task: BackgroundTask<SynthesisOutcome>,
}

struct SynthesisOutcome {
    clip: AudioClip,
    elapsed: Duration,
}

struct SpeechResult {
    clip: AudioClip,
    language: String,
    voice: String,
    elapsed: Duration,
    created_at: DateTime<Local>,
}

enum ApiTestResult {
    Passed(AudioClip),
    Failed {
        message: String,
        body: Option<String>,
    },
}

struct BackgroundTask<T> {
    receiver: Option<mpsc::Receiver<Result<T, AppError>>>,
}

impl<T: Send + 'static> BackgroundTask<T> {
    fn spawn<F>(task: F) -> Self
    where
        F: FnOnce() -> Result<T, AppError> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        std::thread::spawn(move || {
            let _ = tx.send(task());
        });
        Self { receiver: Some(rx) }
    }

    fn try_take(&mut self) -> Option<Result<T, AppError>> {
        let rx = self.receiver.as_ref()?;
        match rx.try_recv() {
            Ok(result) => {
                self.receiver = None;
                Some(result)
            }
            Err(mpsc::TryRecvError::Empty) => None,
            Err(mpsc::TryRecvError::Disconnected) => {
                self.receiver = None;
                Some(Err(AppError::Message(
                    "Background task ended without a result".to_string(),
                )))
            }
        }
    }
}

fn api_failure_message(err: &AppError) -> String {
    match err {
        AppError::Backend { status, .. } => format!("✖ API test failed: {status}"),
        AppError::ConnectionUnavailable => "✖ Cannot connect to backend API".to_string(),
        other => format!("✖ API test error: {other}"),
    }
}

fn pretty_json(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn time_display(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_test_messages() {
        let rejected = AppError::Backend {
            status: 422,
            body: "unknown voice".into(),
        };
        assert_eq!(api_failure_message(&rejected), "✖ API test failed: 422");
        assert_eq!(
            api_failure_message(&AppError::ConnectionUnavailable),
            "✖ Cannot connect to backend API"
        );
        assert_eq!(
            api_failure_message(&AppError::RequestTimedOut),
            "✖ API test error: Request timed out. Please try with shorter text."
        );
    }

    #[test]
    fn background_task_delivers_result_once() {
        let mut task = BackgroundTask::spawn(|| Ok(7u32));
        let started = Instant::now();
        let result = loop {
            if let Some(result) = task.try_take() {
                break result;
            }
            assert!(started.elapsed() < Duration::from_secs(5));
            std::thread::sleep(Duration::from_millis(5));
        };
        assert_eq!(result.unwrap(), 7);
        assert!(task.try_take().is_none());
    }

    fn offline_app() -> TtsApp {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let config = crate::settings::BackendConfig::with_base_url(format!("http://{addr}"));
        TtsApp::new(BackendClient::new(config).unwrap())
    }

    #[test]
    fn api_test_keeps_form_result_and_status() {
        let mut app = offline_app();
        app.status_text = Some("Speech generated in 1.20s".to_string());
        app.speech = Some(SpeechResult {
            clip: AudioClip::new(b"RIFF".to_vec()),
            language: "en".into(),
            voice: "alloy".into(),
            elapsed: Duration::from_millis(1200),
            created_at: Local::now(),
        });

        app.request_speech(
            SpeechIntent::ApiTest {
                voice: "alloy".into(),
            },
            "ping".into(),
        );
        assert_eq!(app.status_text.as_deref(), Some("Speech generated in 1.20s"));
        assert!(app.speech.is_some());
    }

    #[test]
    fn form_request_clears_previous_result() {
        let mut app = offline_app();
        app.status_text = Some("Speech generated in 1.20s".to_string());
        app.request_speech(
            SpeechIntent::Form {
                language: "en".into(),
                voice: "alloy".into(),
            },
            "hello".into(),
        );
        assert_eq!(app.status_text, None);
        assert!(app.speech.is_none());
        assert!(app.is_busy());
    }

    #[test]
    fn playback_clock() {
        assert_eq!(time_display(Duration::from_secs(75)), "01:15");
    }
}
