use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
}

impl ButtonVariant {
    pub fn class(self) -> &'static str {
        match self {
            Self::Default => "btn btn-default",
            Self::Outline => "btn btn-outline",
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct ButtonProps {
    #[props(default)]
    pub variant: ButtonVariant,
    pub onclick: EventHandler<MouseEvent>,
    pub children: Element,
}

#[component]
pub fn Button(props: ButtonProps) -> Element {
    let onclick = props.onclick;

    rsx! {
        button {
            class: props.variant.class(),
            onclick: move |evt| onclick.call(evt),
            {props.children}
        }
    }
}
