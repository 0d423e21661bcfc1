/// Slowed down so young players can hear every letter sound.
const SPEECH_RATE: f32 = 0.8;

/// Speaks `text` in the given BCP-47 locale. Returns `false` when speech
/// output is unavailable so the caller can fall back to showing the word.
#[cfg(target_arch = "wasm32")]
pub fn speak(text: &str, locale: &str) -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    let Ok(synth) = window.speech_synthesis() else {
        return false;
    };
    let Ok(utterance) = web_sys::SpeechSynthesisUtterance::new_with_text(text) else {
        return false;
    };
    utterance.set_lang(locale);
    utterance.set_rate(SPEECH_RATE);
    synth.speak(&utterance);
    true
}

#[cfg(not(target_arch = "wasm32"))]
pub fn speak(text: &str, locale: &str) -> bool {
    let _ = (text, locale, SPEECH_RATE);
    false
}
