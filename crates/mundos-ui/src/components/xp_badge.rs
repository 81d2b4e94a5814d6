//! XP Badge Component

use dioxus::prelude::*;

use super::GemIcon;

/// Compact XP label: `"850 XP"`, `"1.5k XP"`, `"12k XP"`.
///
/// Thousands keep one truncated decimal, dropped when it is zero.
pub fn format_xp(xp: u64) -> String {
    if xp < 1000 {
        return format!("{} XP", xp);
    }
    let tenths = xp / 100;
    let (whole, decimal) = (tenths / 10, tenths % 10);
    if decimal == 0 {
        format!("{}k XP", whole)
    } else {
        format!("{}.{}k XP", whole, decimal)
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct XpBadgeProps {
    /// Experience points to show
    pub xp: u64,
    /// Accent color for the border and gem
    #[props(default = "#22d3ee".to_string())]
    pub accent: String,
}

/// Pill showing the user's experience points next to a gem
#[component]
pub fn XpBadge(props: XpBadgeProps) -> Element {
    let label = format_xp(props.xp);

    rsx! {
        span {
            class: "xp-badge",
            style: "border-color: {props.accent};",
            title: "{props.xp} XP",
            GemIcon { size: 16, animated: false, color: props.accent.clone() }
            span { class: "xp-badge-label", "{label}" }
        }
    }
}
