//! Button Components
//!
//! - Primary: main actions
//! - Ghost: subtle/secondary actions
//! - World: painted with the active world's button gradient

use dioxus::prelude::*;

/// Button style variants
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ButtonVariant {
    /// Primary action button
    #[default]
    Primary,
    /// Subtle/secondary action
    Ghost,
    /// Uses the world theme's button gradient
    World,
}

impl ButtonVariant {
    /// Returns the CSS class for this variant
    pub fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Ghost => "btn-ghost",
            ButtonVariant::World => "btn-world",
        }
    }
}

/// Properties for the Button component
#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    /// Visual style variant
    #[props(default)]
    pub variant: ButtonVariant,
    /// Button content (text, icons, etc.)
    pub children: Element,
    /// Click handler
    #[props(default)]
    pub onclick: Option<EventHandler<()>>,
    /// Whether the button is disabled
    #[props(default = false)]
    pub disabled: bool,
    /// Optional type attribute (button, submit, reset)
    #[props(default = "button".to_string())]
    pub button_type: String,
    /// CSS background, used by the World variant
    #[props(default)]
    pub background: Option<String>,
}

/// Styled button component
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     Button {
///         variant: ButtonVariant::World,
///         background: theme.button_gradient.clone(),
///         onclick: move |_| complete(),
///         "Completar"
///     }
/// }
/// ```
#[component]
pub fn Button(props: ButtonProps) -> Element {
    let class = props.variant.class();
    let style = match (&props.variant, &props.background) {
        (ButtonVariant::World, Some(bg)) => format!("background: {};", bg),
        _ => String::new(),
    };

    rsx! {
        button {
            class: "{class}",
            style: "{style}",
            r#type: "{props.button_type}",
            disabled: props.disabled,
            onclick: move |_| {
                if let Some(handler) = &props.onclick {
                    handler.call(());
                }
            },
            {props.children}
        }
    }
}
