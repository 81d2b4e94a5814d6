//! Gem Icon Component
//!
//! The platform's gem mark as an inline SVG. When animated it gets the
//! `gem-icon--animated` class; the shimmer keyframes live in the global
//! stylesheet.

use dioxus::prelude::*;

/// CSS class list for the gem
pub fn gem_class(animated: bool) -> &'static str {
    if animated {
        "gem-icon gem-icon--animated"
    } else {
        "gem-icon"
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct GemIconProps {
    /// Width and height in pixels
    #[props(default = 24)]
    pub size: u32,
    /// Whether the shimmer animation plays
    #[props(default = true)]
    pub animated: bool,
    /// Fill color of the facets
    #[props(default = "#22d3ee".to_string())]
    pub color: String,
}

#[component]
pub fn GemIcon(props: GemIconProps) -> Element {
    let size = props.size;
    let color = &props.color;

    rsx! {
        svg {
            class: gem_class(props.animated),
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            "aria-hidden": "true",
            // Crown
            path { d: "M6 3h12l4 6H2z", fill: "{color}", opacity: "0.85" }
            // Pavilion
            path { d: "M2 9h20L12 22z", fill: "{color}" }
            // Facet lines
            path {
                d: "M2 9h20M12 22 8 9l4-6 4 6z",
                fill: "none",
                stroke: "rgba(255, 255, 255, 0.6)",
                stroke_width: "1",
                stroke_linejoin: "round",
            }
        }
    }
}
