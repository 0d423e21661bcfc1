//! Microphone capture with start/stop toggling and playback of the captured
//! clip. Backed by the browser's MediaRecorder on wasm; on other platforms
//! starting a recording reports unavailability and nothing else happens.

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RecorderStatus {
    #[default]
    Idle,
    Recording,
    Saved,
    Failed(String),
}

impl RecorderStatus {
    /// User-visible status line, or `None` while idle.
    pub fn message(&self) -> Option<&str> {
        match self {
            RecorderStatus::Idle => None,
            RecorderStatus::Recording => Some("🎤 Recording..."),
            RecorderStatus::Saved => {
                Some("✓ Recording saved! Click \"Play Recording\" to listen.")
            }
            RecorderStatus::Failed(msg) => Some(msg),
        }
    }
}

/// Start/stop bookkeeping for a capture backend whose startup is
/// asynchronous (the browser's permission prompt). Arming happens
/// synchronously in the click handler, so a second toggle while the prompt
/// is still open reads as "recording" and stops the attempt instead of
/// launching a second capture over the first.
#[derive(Debug)]
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
struct CaptureState<T> {
    pending: bool,
    active: Option<T>,
}

impl<T> Default for CaptureState<T> {
    fn default() -> Self {
        Self {
            pending: false,
            active: None,
        }
    }
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl<T> CaptureState<T> {
    /// Claims the right to start a capture. Exactly one caller gets `true`
    /// until the capture is disarmed again.
    fn arm(&mut self) -> bool {
        if self.engaged() {
            return false;
        }
        self.pending = true;
        true
    }

    fn engaged(&self) -> bool {
        self.pending || self.active.is_some()
    }

    /// Installs the handle a finished startup produced. If the capture was
    /// disarmed while starting up, the handle is handed back so the caller
    /// can shut it down instead of leaking a live microphone.
    fn activate(&mut self, handle: T) -> Result<(), T> {
        if !self.pending {
            return Err(handle);
        }
        self.pending = false;
        self.active = Some(handle);
        Ok(())
    }

    /// Startup failed; release the claim taken by `arm`.
    fn abort(&mut self) {
        self.pending = false;
    }

    fn disarm(&mut self) -> Option<T> {
        self.pending = false;
        self.active.take()
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::Recorder;

#[cfg(not(target_arch = "wasm32"))]
pub use native::Recorder;

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::RecorderStatus;

    #[derive(Default)]
    pub struct Recorder {
        status: RecorderStatus,
    }

    impl Recorder {
        pub fn status(&self) -> RecorderStatus {
            self.status.clone()
        }

        pub fn is_recording(&self) -> bool {
            false
        }

        pub fn has_recording(&self) -> bool {
            false
        }

        pub fn toggle(&mut self) {
            self.status = RecorderStatus::Failed(
                "❌ Microphone capture is not available on this platform.".to_owned(),
            );
        }

        pub fn play(&self) {}
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn toggling_without_a_microphone_reports_failure() {
            let mut recorder = Recorder::default();
            assert_eq!(recorder.status(), RecorderStatus::Idle);
            assert!(recorder.status().message().is_none());
            recorder.toggle();
            let status = recorder.status();
            assert!(matches!(status, RecorderStatus::Failed(_)));
            assert!(status.message().unwrap().contains("not available"));
            assert!(!recorder.has_recording());
        }
    }
}

#[cfg(target_arch = "wasm32")]
mod wasm {
    use super::{CaptureState, RecorderStatus};
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::{JsCast, JsValue};

    #[derive(Default)]
    struct Shared {
        status: RecorderStatus,
        capture: CaptureState<Active>,
        url: Option<String>,
    }

    struct Active {
        recorder: web_sys::MediaRecorder,
        stream: web_sys::MediaStream,
    }

    /// Handle shared with the async permission request and the recorder's
    /// event callbacks. Single-threaded, so `Rc<RefCell>` is enough.
    #[derive(Default)]
    pub struct Recorder {
        shared: Rc<RefCell<Shared>>,
    }

    impl Recorder {
        pub fn status(&self) -> RecorderStatus {
            self.shared.borrow().status.clone()
        }

        pub fn is_recording(&self) -> bool {
            self.shared.borrow().capture.engaged()
        }

        pub fn has_recording(&self) -> bool {
            self.shared.borrow().url.is_some()
        }

        pub fn toggle(&mut self) {
            if self.is_recording() {
                self.stop();
            } else {
                self.start();
            }
        }

        pub fn play(&self) {
            let shared = self.shared.borrow();
            if let Some(url) = &shared.url {
                if let Ok(audio) = web_sys::HtmlAudioElement::new_with_src(url) {
                    let _ = audio.play();
                }
            }
        }

        fn start(&self) {
            if !self.shared.borrow_mut().capture.arm() {
                return;
            }
            let shared = self.shared.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match begin_recording(&shared).await {
                    Ok(active) => {
                        let rejected = shared.borrow_mut().capture.activate(active);
                        match rejected {
                            Ok(()) => shared.borrow_mut().status = RecorderStatus::Recording,
                            // Stopped again while the permission prompt was
                            // still open.
                            Err(active) => shut_down(active),
                        }
                    }
                    Err(_) => {
                        let mut shared = shared.borrow_mut();
                        shared.capture.abort();
                        shared.status = RecorderStatus::Failed(
                            "❌ Microphone access denied or not available.".to_owned(),
                        );
                    }
                }
            });
        }

        fn stop(&self) {
            // Take the handle out before calling into the platform so no
            // RefCell borrow is held while events fire.
            let active = self.shared.borrow_mut().capture.disarm();
            if let Some(active) = active {
                shut_down(active);
            }
        }
    }

    fn shut_down(active: Active) {
        let _ = active.recorder.stop();
        for track in active.stream.get_tracks().iter() {
            if let Ok(track) = track.dyn_into::<web_sys::MediaStreamTrack>() {
                track.stop();
            }
        }
    }

    async fn begin_recording(shared: &Rc<RefCell<Shared>>) -> Result<Active, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let devices = window.navigator().media_devices()?;
        let constraints = web_sys::MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::TRUE);
        let promise = devices.get_user_media_with_constraints(&constraints)?;
        let stream: web_sys::MediaStream =
            wasm_bindgen_futures::JsFuture::from(promise).await?.dyn_into()?;
        let recorder = web_sys::MediaRecorder::new(&stream)?;

        let chunks = Rc::new(RefCell::new(Vec::<web_sys::Blob>::new()));

        let ondata = {
            let chunks = chunks.clone();
            Closure::<dyn FnMut(web_sys::BlobEvent)>::new(move |event: web_sys::BlobEvent| {
                if let Some(blob) = event.data() {
                    chunks.borrow_mut().push(blob);
                }
            })
        };
        recorder.set_ondataavailable(Some(ondata.as_ref().unchecked_ref()));
        // The callbacks must outlive this scope; recordings last for the
        // rest of the page, so leaking them is fine.
        ondata.forget();

        let onstop = {
            let shared = shared.clone();
            let chunks = chunks.clone();
            Closure::<dyn FnMut()>::new(move || {
                let mut shared = shared.borrow_mut();
                match object_url_for(&chunks.borrow()) {
                    Ok(url) => {
                        shared.url = Some(url);
                        shared.status = RecorderStatus::Saved;
                    }
                    Err(_) => {
                        shared.status =
                            RecorderStatus::Failed("❌ Could not save the recording.".to_owned());
                    }
                }
            })
        };
        recorder.set_onstop(Some(onstop.as_ref().unchecked_ref()));
        onstop.forget();

        recorder.start()?;
        Ok(Active { recorder, stream })
    }

    fn object_url_for(chunks: &[web_sys::Blob]) -> Result<String, JsValue> {
        let parts = js_sys::Array::new();
        for chunk in chunks {
            parts.push(chunk);
        }
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("audio/wav");
        let parts: JsValue = parts.into();
        let blob = web_sys::Blob::new_with_blob_sequence_and_options(&parts, &options)?;
        web_sys::Url::create_object_url_with_blob(&blob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_capture_can_be_armed_at_a_time() {
        let mut state: CaptureState<u32> = CaptureState::default();
        assert!(state.arm());
        assert!(state.engaged());
        // Second click while the permission prompt is still open.
        assert!(!state.arm());
        assert_eq!(state.activate(1), Ok(()));
        assert!(!state.arm());
    }

    #[test]
    fn handle_arriving_after_disarm_is_handed_back_for_shutdown() {
        let mut state: CaptureState<u32> = CaptureState::default();
        assert!(state.arm());
        // Toggled off before the async startup finished.
        assert_eq!(state.disarm(), None);
        assert!(!state.engaged());
        // The startup resolves late; its handle must not be installed.
        assert_eq!(state.activate(7), Err(7));
        assert!(!state.engaged());
    }

    #[test]
    fn disarm_yields_the_active_handle_exactly_once() {
        let mut state: CaptureState<u32> = CaptureState::default();
        assert!(state.arm());
        assert_eq!(state.activate(3), Ok(()));
        assert_eq!(state.disarm(), Some(3));
        assert_eq!(state.disarm(), None);
        assert!(state.arm());
    }

    #[test]
    fn failed_startup_releases_the_claim() {
        let mut state: CaptureState<u32> = CaptureState::default();
        assert!(state.arm());
        state.abort();
        assert!(!state.engaged());
        assert!(state.arm());
    }
}
