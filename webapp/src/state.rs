use crate::nav::Section;

// everything the page can change about itself
//
// one record, owned by the site view; there are no other sources of ui state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewState {
    pub active_section: Section,
    pub dark_mode: bool,
    pub playing: bool,
    pub muted: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            active_section: Section::Home,
            dark_mode: true,
            playing: false,
            muted: false,
        }
    }
}

// one variant per button on the page
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    SelectSection(Section),
    ToggleDarkMode,
    TogglePlaying,
    ToggleMuted,
}

impl ViewState {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SelectSection(section) => self.active_section = section,
            Action::ToggleDarkMode => self.dark_mode = !self.dark_mode,
            Action::TogglePlaying => self.playing = !self.playing,
            Action::ToggleMuted => self.muted = !self.muted,
        }
    }

    pub fn theme_class(&self) -> &'static str {
        if self.dark_mode {
            "theme-dark"
        } else {
            "theme-light"
        }
    }

    // the toggle names the theme it switches *to*
    pub fn theme_toggle_label(&self) -> &'static str {
        if self.dark_mode {
            "Light Mode"
        } else {
            "Dark Mode"
        }
    }

    pub fn root_class(&self) -> String {
        let mut class = format!("site-root {}", self.theme_class());
        if self.playing {
            class.push_str(" stars-bg");
        }
        class
    }
}
