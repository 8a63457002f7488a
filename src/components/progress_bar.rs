#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::theme::ProgressBarStyle;

#[derive(Props, Clone, PartialEq)]
pub struct ProgressBarProps {
    /// Completion in percent
    pub now: u8,
    #[props(default)]
    pub animated: bool,
    #[props(default)]
    pub style: ProgressBarStyle,
}

#[component]
pub fn ProgressBar(props: ProgressBarProps) -> Element {
    let ProgressBarProps {
        now,
        animated,
        style,
    } = props;

    let now = now.min(100);

    let mut fill_class = style.fill_class.clone();
    if let Some(variant) = &style.variant {
        fill_class.push(' ');
        fill_class.push_str(variant);
    }
    if animated {
        fill_class.push(' ');
        fill_class.push_str(&style.animated_class);
    }

    rsx! {
        div {
            class: "{style.track_class}",
            div {
                class: "{fill_class}",
                role: "progressbar",
                "aria-valuenow": "{now}",
                "aria-valuemin": "0",
                "aria-valuemax": "100",
                style: "width: {now}%",
            }
        }
    }
}
