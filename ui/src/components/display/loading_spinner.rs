use dioxus::prelude::*;

const LOADING_SPINNER_CSS: Asset = asset!("/assets/styling/loading_spinner.css");

/// One bouncing circle and its shadow
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinnerDot {
    /// Horizontal placement inside the 200px wrapper
    pub position: &'static str,
    /// Offset applied to both keyframe animations
    pub delay: &'static str,
}

pub const SPINNER_DOTS: [SpinnerDot; 3] = [
    SpinnerDot {
        position: "left: 15%;",
        delay: "0s",
    },
    SpinnerDot {
        position: "left: 45%;",
        delay: ".2s",
    },
    SpinnerDot {
        position: "left: auto; right: 15%;",
        delay: ".3s",
    },
];

impl SpinnerDot {
    pub fn style(&self) -> String {
        format!("{} animation-delay: {};", self.position, self.delay)
    }
}

/// Three circles bouncing over their shadows; animation is pure CSS
#[component]
pub fn LoadingSpinner() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: LOADING_SPINNER_CSS }

        div {
            class: "loading-spinner",
            role: "status",
            "aria-label": "Chargement",
            for (index, dot) in SPINNER_DOTS.iter().enumerate() {
                div {
                    key: "circle-{index}",
                    class: "spinner-circle",
                    style: "{dot.style()}",
                }
            }
            for (index, dot) in SPINNER_DOTS.iter().enumerate() {
                div {
                    key: "shadow-{index}",
                    class: "spinner-shadow",
                    style: "{dot.style()}",
                }
            }
        }
    }
}
