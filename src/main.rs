#![allow(non_snake_case)]

mod components;
mod export;
mod i18n;
mod settings;
mod theme;

use std::time::Duration;

use dioxus::prelude::*;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::components::ExportInProgress;
use crate::export::{ExportProgress, ExportStage};
use crate::i18n::Translator;
use crate::settings::Settings;
use crate::theme::DialogTheme;

const DEMO_TOTAL: u64 = 120;
const DEMO_TICK: Duration = Duration::from_millis(150);

#[derive(Clone)]
struct AppContext {
    translator: Translator,
    theme: DialogTheme,
}

fn init_logging() -> WorkerGuard {
    let file_appender = tracing_appender::rolling::daily(Settings::config_dir(), "export-dialog.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .init();

    guard
}

async fn load_context() -> AppContext {
    let path = Settings::default_path();
    let settings = match Settings::load(&path).await {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load settings, using defaults: {}", e);
            Settings::default()
        }
    };

    if !path.exists() {
        match settings.save().await {
            Ok(()) => info!("wrote default settings to {}", path.display()),
            Err(e) => error!("Failed to write default settings: {}", e),
        }
    }

    let translator = match settings.translator().await {
        Ok(translator) => translator,
        Err(e) => {
            error!("Failed to load locale {}: {}", settings.locale, e);
            Translator::english()
        }
    };

    AppContext {
        translator,
        theme: settings.theme,
    }
}

fn main() {
    let _guard = init_logging();
    info!("starting app");

    let context = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime.block_on(load_context()),
        Err(e) => {
            error!("Failed to start settings runtime: {}", e);
            AppContext {
                translator: Translator::english(),
                theme: DialogTheme::default(),
            }
        }
    };
    info!("using locale {}", context.translator.locale());

    let cfg = dioxus::desktop::Config::new()
        .with_custom_head(r#"<link rel="stylesheet" href="tailwind.css">"#.to_string());

    LaunchBuilder::desktop()
        .with_cfg(cfg)
        .with_context(context)
        .launch(App);
}

#[component]
fn App() -> Element {
    let AppContext { translator, theme } = use_context::<AppContext>();

    let mut progress = use_signal(|| ExportProgress::new(0, DEMO_TOTAL));
    let mut stage = use_signal(|| ExportStage::Starting);
    let mut dialog_open = use_signal(|| true);

    // Stand-in for the export engine so the dialog has something to show
    let mut export = use_future(move || async move {
        stage.set(ExportStage::ExportingFiles);
        while !progress.peek().is_complete() {
            tokio::time::sleep(DEMO_TICK).await;
            progress.write().current += 1;
        }
        stage.set(ExportStage::Finished);
        info!("demo export finished");
    });

    rsx! {
        div {
            class: "min-h-screen bg-gray-900 flex items-center justify-center",
            if dialog_open() {
                div {
                    class: "bg-gray-800 rounded-lg shadow-xl w-[28rem]",
                    ExportInProgress {
                        export_stage: stage(),
                        export_progress: progress(),
                        stop_export: move |_| {
                            export.cancel();
                            stage.set(ExportStage::Finished);
                            info!("export stopped at {:?}", *progress.peek());
                        },
                        close_export_dialog: move |_| dialog_open.set(false),
                        translator: translator.clone(),
                        theme: theme.clone(),
                    }
                }
            } else {
                button {
                    class: "px-4 py-2 bg-blue-500 text-white rounded hover:bg-blue-600",
                    onclick: move |_| dialog_open.set(true),
                    "Show export progress"
                }
            }
        }
    }
}
