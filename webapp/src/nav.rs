use std::fmt;

use dioxus::prelude::*;

use crate::components::button::{Button, ButtonVariant};
use crate::state::Action;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Home,
    About,
    Information,
    Links,
}

impl Section {
    // navigation order
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Information,
        Section::Links,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Information => "info",
            Self::Links => "links",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About Me",
            Self::Information => "Information",
            Self::Links => "Links",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    section: Section,
    active: bool,
    on_select: EventHandler<Action>,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let section = props.section;
    let on_select = props.on_select;

    rsx! {
        Button {
            variant: if props.active { ButtonVariant::Default } else { ButtonVariant::Outline },
            onclick: move |_| on_select.call(Action::SelectSection(section)),
            "{section.label()}"
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct NavBarProps {
    pub active: Section,
    pub on_select: EventHandler<Action>,
}

#[component]
pub fn NavBar(props: NavBarProps) -> Element {
    rsx! {
        nav { class: "section-nav",
            for section in Section::ALL {
                NavBarButton {
                    key: "{section}",
                    section,
                    active: section == props.active,
                    on_select: props.on_select,
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_in_navigation_order() {
        let keys: Vec<_> = Section::ALL.iter().map(|s| s.key()).collect();
        assert_eq!(keys, ["home", "about", "info", "links"]);
        assert_eq!(Section::default(), Section::Home);
    }

    #[test]
    fn labels_follow_navigation_order() {
        let labels: Vec<_> = Section::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Home", "About Me", "Information", "Links"]);
    }
}
