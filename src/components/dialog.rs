#![allow(non_snake_case)]

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct RegionProps {
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

fn with_extra(base: &str, extra: &Option<String>) -> String {
    match extra {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    }
}

/// Scrollable body of a dialog
#[component]
pub fn DialogContent(props: RegionProps) -> Element {
    let class = with_extra("dialog-content px-6 py-5 overflow-y-auto", &props.class);
    rsx! {
        div {
            class: "{class}",
            {props.children}
        }
    }
}

/// Right-aligned row of dialog buttons
#[component]
pub fn DialogActions(props: RegionProps) -> Element {
    let class = with_extra(
        "dialog-actions flex items-center justify-end gap-2 px-4 pb-4",
        &props.class,
    );
    rsx! {
        div {
            class: "{class}",
            {props.children}
        }
    }
}

#[component]
pub fn VerticallyCentered(props: RegionProps) -> Element {
    let class = with_extra(
        "vertically-centered flex flex-col items-center justify-center text-center",
        &props.class,
    );
    rsx! {
        div {
            class: "{class}",
            {props.children}
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct FlexWrapperProps {
    /// Horizontal padding step, as in `px-{n}`
    #[props(default)]
    pub px: u8,
    #[props(default)]
    pub class: Option<String>,
    pub children: Element,
}

#[component]
pub fn FlexWrapper(props: FlexWrapperProps) -> Element {
    let FlexWrapperProps {
        px,
        class,
        children,
    } = props;
    let class = with_extra(&format!("flex-wrapper flex items-center w-full px-{}", px), &class);
    rsx! {
        div {
            class: "{class}",
            {children}
        }
    }
}
