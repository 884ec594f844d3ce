use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::config::SITE;
use crate::state::{Action, ViewState};

#[derive(Clone, PartialEq, Props)]
pub struct HeaderProps {
    pub state: ViewState,
    pub on_action: EventHandler<Action>,
}

#[component]
pub fn Header(props: HeaderProps) -> Element {
    let state = props.state;
    let on_action = props.on_action;

    rsx! {
        header { class: "site-header",
            img {
                class: "site-logo",
                src: SITE.logo_url,
                alt: SITE.logo_alt,
            }
            div { class: "header-controls",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_action.call(Action::ToggleDarkMode),
                    "{state.theme_toggle_label()}"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_action.call(Action::TogglePlaying),
                    if state.playing { "Pause Music" } else { "Play Music" }
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| on_action.call(Action::ToggleMuted),
                    if state.muted { "Unmute" } else { "Mute" }
                }
            }
        }
    }
}
