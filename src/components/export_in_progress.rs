#![allow(non_snake_case)]

use dioxus::prelude::*;
use serde_json::{json, Value};
use std::fmt::{self, Display};
use tracing::debug;

use crate::components::dialog::{DialogActions, DialogContent, FlexWrapper, VerticallyCentered};
use crate::components::progress_bar::ProgressBar;
use crate::export::{ExportProgress, ExportStage};
use crate::i18n::{MessageKey, Segment, Translator};
use crate::theme::DialogTheme;

/// What the dialog can ask its parent to do.
pub trait ExportControls {
    fn stop_export(&self);
    fn close_export_dialog(&self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogAction {
    /// Dismiss the dialog and leave the export running
    Close,
    /// Cancel the running export
    Stop,
}

impl DialogAction {
    /// Buttons in the order they appear in the action row
    pub const ALL: [DialogAction; 2] = [DialogAction::Close, DialogAction::Stop];

    pub fn label_key(self) -> MessageKey {
        match self {
            DialogAction::Close => MessageKey::Close,
            DialogAction::Stop => MessageKey::StopExport,
        }
    }

    pub fn dispatch(self, controls: &impl ExportControls) {
        debug!("Export dialog action: {:?}", self);
        match self {
            DialogAction::Close => controls.close_export_dialog(),
            DialogAction::Stop => controls.stop_export(),
        }
    }
}

impl Display for DialogAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DialogAction::Close => write!(f, "close"),
            DialogAction::Stop => write!(f, "stop"),
        }
    }
}

fn button_class(theme: &DialogTheme, action: DialogAction) -> String {
    match action {
        DialogAction::Close => theme.close_button_class.clone(),
        DialogAction::Stop => theme.stop_button_class.clone(),
    }
}

#[derive(Clone, Copy)]
struct Callbacks {
    stop_export: EventHandler<()>,
    close_export_dialog: EventHandler<()>,
}

impl ExportControls for Callbacks {
    fn stop_export(&self) {
        self.stop_export.call(());
    }

    fn close_export_dialog(&self) {
        self.close_export_dialog.call(());
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct ExportInProgressProps {
    pub export_stage: ExportStage,
    pub export_progress: ExportProgress,
    pub stop_export: EventHandler<()>,
    pub close_export_dialog: EventHandler<()>,
    pub translator: Translator,
    #[props(default)]
    pub theme: DialogTheme,
}

/// Body and buttons of the export dialog while files are being written.
#[component]
pub fn ExportInProgress(props: ExportInProgressProps) -> Element {
    let ExportInProgressProps {
        export_stage,
        export_progress,
        stop_export,
        close_export_dialog,
        translator,
        theme,
    } = props;

    let callbacks = Callbacks {
        stop_export,
        close_export_dialog,
    };

    let segments = translator.resolve_markup(
        MessageKey::ExportProgress,
        &json!({ "progress": export_progress }),
    );
    let span_style = theme.comfy_span.to_css();

    rsx! {
        div {
            class: "export-in-progress",
            "data-export-stage": "{export_stage}",
            DialogContent {
                VerticallyCentered {
                    div {
                        class: "{theme.message_class}",
                        {segments.iter().map(|segment| match segment {
                            Segment::Text(text) => rsx! { "{text}" },
                            Segment::Styled(text) => rsx! {
                                span {
                                    class: "comfy-span",
                                    style: "{span_style}",
                                    "{text}"
                                }
                            },
                        })}
                    }
                    FlexWrapper {
                        px: 1,
                        ProgressBar {
                            now: export_progress.percentage(),
                            animated: true,
                            style: theme.progress_bar.clone(),
                        }
                    }
                }
            }
            DialogActions {
                for action in DialogAction::ALL {
                    button {
                        key: "{action}",
                        r#type: "button",
                        class: button_class(&theme, action),
                        onclick: move |_| action.dispatch(&callbacks),
                        "data-action": "{action}",
                        {translator.resolve(action.label_key(), &Value::Null)}
                    }
                }
            }
        }
    }
}
