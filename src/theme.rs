use serde::{Deserialize, Serialize};

/// Inline style for the highlighted counter inside the progress sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpanStyle {
    pub padding: String,
    pub word_spacing: String,
    pub color: String,
}

impl Default for SpanStyle {
    fn default() -> Self {
        Self {
            padding: "0 0.5rem".to_string(),
            word_spacing: "1rem".to_string(),
            color: "#ddd".to_string(),
        }
    }
}

impl SpanStyle {
    pub fn to_css(&self) -> String {
        format!(
            "padding: {}; word-spacing: {}; color: {};",
            self.padding, self.word_spacing, self.color
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgressBarStyle {
    pub track_class: String,
    pub fill_class: String,
    /// Added to the fill when the bar is animated
    pub animated_class: String,
    pub variant: Option<String>,
}

impl Default for ProgressBarStyle {
    fn default() -> Self {
        Self {
            track_class: "w-full bg-gray-700 rounded-full h-2.5 overflow-hidden".to_string(),
            fill_class: "bg-green-500 h-2.5 rounded-full transition-all duration-300".to_string(),
            animated_class: "progress-bar-striped progress-bar-animated animate-pulse".to_string(),
            variant: Some("upload-progress-bar".to_string()),
        }
    }
}

/// Look of the export progress dialog. Every field has a default so a
/// settings file only needs the parts it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogTheme {
    pub message_class: String,
    pub comfy_span: SpanStyle,
    pub progress_bar: ProgressBarStyle,
    pub close_button_class: String,
    pub stop_button_class: String,
}

impl Default for DialogTheme {
    fn default() -> Self {
        Self {
            message_class: "mb-3 text-gray-200".to_string(),
            comfy_span: SpanStyle::default(),
            progress_bar: ProgressBarStyle::default(),
            close_button_class: "px-6 py-3 text-base font-medium text-gray-100 bg-gray-600 rounded-md hover:bg-gray-500".to_string(),
            stop_button_class: "px-6 py-3 text-base font-medium text-white bg-red-600 rounded-md hover:bg-red-700".to_string(),
        }
    }
}
