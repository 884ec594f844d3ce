use dioxus::prelude::*;
use tracing::{debug, error};

use crate::audio::{AudioLifecycle, WebAudio};
use crate::components::{footer::Footer, header::Header};
use crate::config::SITE;
use crate::content::ContentPanel;
use crate::nav::NavBar;
use crate::state::{Action, ViewState};

// the whole page
//
// owns the view state and the single <audio> element; everything below it renders from a copy
// of the state and reports clicks back as actions
#[component]
pub fn SiteView() -> Element {
    let mut state = use_signal(ViewState::default);
    let mut player = use_signal(|| None::<AudioLifecycle<WebAudio>>);

    let playing = use_memo(move || state.read().playing);
    let muted = use_memo(move || state.read().muted);

    // also reruns once the audio element mounts, which is when the volume and loop settings first land
    use_effect(move || {
        let playing = playing();
        if let Some(lifecycle) = &*player.read() {
            lifecycle.sync_playing(playing, |request| {
                // fire and forget, the outcome is dropped
                spawn(async move {
                    let _ = request.await;
                });
            });
        }
    });

    use_effect(move || {
        let muted = muted();
        if let Some(lifecycle) = &*player.read() {
            lifecycle.sync_muted(muted);
        }
    });

    let dispatch = move |action: Action| {
        debug!({ action = ?action }, "applying view action");
        state.write().apply(action);
    };

    let current = *state.read();

    rsx! {
        div { class: current.root_class(),
            audio {
                src: SITE.music.url,
                onmounted: move |evt| match WebAudio::from_mounted(&evt.data()) {
                    Ok(handle) => {
                        debug!("audio element attached");
                        player.set(Some(AudioLifecycle::new(handle, SITE.music)));
                    }
                    Err(err) => error!("failed to attach audio element: {err}"),
                },
            }
            Header { state: current, on_action: dispatch }
            NavBar { active: current.active_section, on_select: dispatch }
            ContentPanel { section: current.active_section }
            Footer {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_mounted() -> String {
        let mut dom = VirtualDom::new(SiteView);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn mount_renders_home_in_dark_mode() {
        let html = render_mounted();

        assert!(html.contains("site-root theme-dark"));
        assert!(!html.contains("stars-bg"));
        assert!(html.contains(">Welcome to my Website</h1>"));

        // the nav lists every section, but only the home fragment is on the page
        assert!(html.contains("data-section=\"home\""));
        assert!(!html.contains("data-section=\"about\""));
        assert!(!html.contains("I am a content creator"));
        assert!(!html.contains("former student"));
        assert!(!html.contains("My YouTube Channel"));
    }

    #[test]
    fn mount_renders_controls_and_footer() {
        let html = render_mounted();

        assert!(html.contains(">Light Mode<"));
        assert!(html.contains(">Play Music<"));
        assert!(html.contains(">Mute<"));
        assert!(html.contains("All rights reserved."));
        assert!(html.contains(SITE.music.credit));
        assert!(html.contains("<audio"));
    }

    #[test]
    fn only_the_active_section_button_is_filled() {
        let html = render_mounted();

        assert_eq!(html.matches("btn btn-default").count(), 1);
        assert!(html.contains("class=\"btn btn-default\">Home</button>"));
    }
}
