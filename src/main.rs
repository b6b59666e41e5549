use std::path::Path;

use tts_frontend::app::TtsApp;
use tts_frontend::backend::BackendClient;
use tts_frontend::settings::BackendConfig;

// Hindi input needs a Devanagari face; egui's bundled fonts only cover Latin.
const FALLBACK_FONTS: &[(&str, &str)] = &[
    ("NotoSans-Regular", "assets/fonts/NotoSans-Regular.ttf"),
    ("NotoSansDevanagari-Regular", "assets/fonts/NotoSansDevanagari-Regular.ttf"),
    ("NotoSans-Regular", "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf"),
    (
        "NotoSansDevanagari-Regular",
        "/usr/share/fonts/truetype/noto/NotoSansDevanagari-Regular.ttf",
    ),
    (
        "Lohit-Devanagari",
        "/usr/share/fonts/truetype/lohit-devanagari/Lohit-Devanagari.ttf",
    ),
    ("Mangal", "C:\\Windows\\Fonts\\mangal.ttf"),
    ("Kohinoor", "/System/Library/Fonts/Kohinoor.ttc"),
];

fn configure_fonts(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    for (name, path) in FALLBACK_FONTS {
        if fonts.font_data.contains_key(*name) || !Path::new(path).exists() {
            continue;
        }
        let Ok(bytes) = std::fs::read(path) else {
            continue;
        };
        fonts
            .font_data
            .insert(name.to_string(), egui::FontData::from_owned(bytes));
        for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
            fonts
                .families
                .entry(family)
                .or_default()
                .push(name.to_string());
        }
        log::info!("Loaded fallback font: {name} from {path}");
    }
    ctx.set_fonts(fonts);
}

fn main() -> eframe::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = BackendConfig::load();
    log::info!("Backend URL: {}", config.base_url);
    let client = match BackendClient::new(config) {
        Ok(client) => client,
        Err(err) => {
            log::error!("Cannot start HTTP client: {err}");
            std::process::exit(1);
        }
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([720.0, 520.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Text-to-Speech",
        native_options,
        Box::new(move |cc| {
            configure_fonts(&cc.egui_ctx);
            Box::new(TtsApp::new(client))
        }),
    )
}
