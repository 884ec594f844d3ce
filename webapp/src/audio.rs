use dioxus::prelude::MountedData;
use futures::future::LocalBoxFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlMediaElement;

use crate::config::MusicConfig;

// a begin-playback request; hosts are allowed to reject it (autoplay policy)
pub type PlaybackRequest = LocalBoxFuture<'static, anyhow::Result<()>>;

// the slice of a media element that the site drives
pub trait PlaybackHandle {
    fn set_volume(&self, volume: f64);

    fn set_looping(&self, looping: bool);

    fn set_muted(&self, muted: bool);

    fn play(&self) -> PlaybackRequest;

    fn pause(&self);
}

// keeps the one audio resource in line with the view state
//
// the handle is bound once when the <audio> element mounts and is only ever reconfigured
pub struct AudioLifecycle<H> {
    handle: H,
    config: MusicConfig,
}

impl<H: PlaybackHandle> AudioLifecycle<H> {
    pub fn new(handle: H, config: MusicConfig) -> Self {
        AudioLifecycle { handle, config }
    }

    // runs whenever `playing` changes
    //
    // the play request is handed to `detach` and never observed again: a rejection leaves
    // the view state alone and nothing is reported. pause is synchronous and supersedes
    // any request still in flight
    pub fn sync_playing<D>(&self, playing: bool, detach: D)
    where
        D: FnOnce(PlaybackRequest),
    {
        self.handle.set_volume(self.config.volume);
        self.handle.set_looping(self.config.looping);

        if playing {
            detach(self.handle.play());
        } else {
            self.handle.pause();
        }
    }

    pub fn sync_muted(&self, muted: bool) {
        self.handle.set_muted(muted);
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WebAudio {
    element: HtmlMediaElement,
}

impl WebAudio {
    pub fn from_mounted(data: &MountedData) -> anyhow::Result<Self> {
        let element = data
            .downcast::<web_sys::Element>()
            .ok_or_else(|| anyhow::Error::msg("mounted audio node is not a dom element"))?;

        let element = element
            .clone()
            .dyn_into::<HtmlMediaElement>()
            .map_err(|_| anyhow::Error::msg("mounted audio node is not a media element"))?;

        Ok(WebAudio { element })
    }
}

fn js_error(err: JsValue) -> anyhow::Error {
    anyhow::Error::msg(format!("{err:?}"))
}

impl PlaybackHandle for WebAudio {
    fn set_volume(&self, volume: f64) {
        self.element.set_volume(volume);
    }

    fn set_looping(&self, looping: bool) {
        self.element.set_loop(looping);
    }

    fn set_muted(&self, muted: bool) {
        self.element.set_muted(muted);
    }

    fn play(&self) -> PlaybackRequest {
        let promise = self.element.play();

        Box::pin(async move {
            let promise = promise.map_err(js_error)?;
            JsFuture::from(promise).await.map_err(js_error)?;
            Ok(())
        })
    }

    fn pause(&self) {
        // HTMLMediaElement.pause() does not throw
        let _ = self.element.pause();
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use futures::executor::block_on;

    use super::*;
    use crate::config::SITE;

    #[derive(Debug, Default)]
    struct FakeState {
        volume: f64,
        looping: bool,
        muted: bool,
        playing: bool,
        play_requests: usize,
        pauses: usize,
    }

    #[derive(Clone)]
    struct FakeAudio {
        state: Rc<RefCell<FakeState>>,
        reject: bool,
    }

    impl FakeAudio {
        fn new(reject: bool) -> Self {
            FakeAudio {
                state: Rc::new(RefCell::new(FakeState::default())),
                reject,
            }
        }
    }

    impl PlaybackHandle for FakeAudio {
        fn set_volume(&self, volume: f64) {
            self.state.borrow_mut().volume = volume;
        }

        fn set_looping(&self, looping: bool) {
            self.state.borrow_mut().looping = looping;
        }

        fn set_muted(&self, muted: bool) {
            self.state.borrow_mut().muted = muted;
        }

        fn play(&self) -> PlaybackRequest {
            self.state.borrow_mut().play_requests += 1;

            let state = self.state.clone();
            let reject = self.reject;
            Box::pin(async move {
                if reject {
                    return Err(anyhow::Error::msg("NotAllowedError"));
                }
                state.borrow_mut().playing = true;
                Ok(())
            })
        }

        fn pause(&self) {
            let mut state = self.state.borrow_mut();
            state.playing = false;
            state.pauses += 1;
        }
    }

    #[test]
    fn play_then_pause_after_play_resolved() {
        let audio = FakeAudio::new(false);
        let lifecycle = AudioLifecycle::new(audio.clone(), SITE.music);

        let mut pending = Vec::new();
        lifecycle.sync_playing(true, |req| pending.push(req));
        assert_eq!(pending.len(), 1);

        for req in pending {
            assert!(block_on(req).is_ok());
        }
        assert!(audio.state.borrow().playing);

        lifecycle.sync_playing(false, |_| panic!("pause must not request playback"));
        assert!(!audio.state.borrow().playing);
    }

    #[test]
    fn play_then_pause_after_play_rejected() {
        let audio = FakeAudio::new(true);
        let lifecycle = AudioLifecycle::new(audio.clone(), SITE.music);

        // the detached task drops the outcome, same as the view does
        lifecycle.sync_playing(true, |req| {
            let _ = block_on(req);
        });
        assert!(!audio.state.borrow().playing);
        assert_eq!(audio.state.borrow().play_requests, 1);

        lifecycle.sync_playing(false, |_| unreachable!());
        let state = audio.state.borrow();
        assert!(!state.playing);
        assert_eq!(state.pauses, 1);
    }

    #[test]
    fn pause_supersedes_pending_play() {
        let audio = FakeAudio::new(false);
        let lifecycle = AudioLifecycle::new(audio.clone(), SITE.music);

        let mut pending = None;
        lifecycle.sync_playing(true, |req| pending = Some(req));
        lifecycle.sync_playing(false, |_| unreachable!());

        assert!(pending.is_some());
        assert!(!audio.state.borrow().playing);
    }

    #[test]
    fn configuration_is_reapplied_on_every_change() {
        let audio = FakeAudio::new(false);
        let lifecycle = AudioLifecycle::new(audio.clone(), SITE.music);

        lifecycle.sync_playing(false, |_| unreachable!());
        {
            let state = audio.state.borrow();
            assert_eq!(state.volume, 0.25);
            assert!(state.looping);
        }

        // someone else fiddled with the element in between
        audio.set_volume(1.0);
        audio.set_looping(false);

        lifecycle.sync_playing(true, drop);
        let state = audio.state.borrow();
        assert_eq!(state.volume, 0.25);
        assert!(state.looping);
        assert_eq!(state.play_requests, 1);
    }

    #[test]
    fn mute_is_propagated_synchronously() {
        let audio = FakeAudio::new(false);
        let lifecycle = AudioLifecycle::new(audio.clone(), SITE.music);

        lifecycle.sync_muted(true);
        assert!(audio.state.borrow().muted);

        lifecycle.sync_muted(false);
        assert!(!audio.state.borrow().muted);

        // muting never touches playback
        assert_eq!(audio.state.borrow().play_requests, 0);
        assert_eq!(audio.state.borrow().pauses, 0);
    }
}
