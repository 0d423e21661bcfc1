use crate::data::{WordBank, read_word_bank_embedded};
use crate::model::{AppState, Language, RewardTier, WordEntry};
use crate::platform::recorder::Recorder;
use crate::ui::confetti::Confetti;
use std::collections::HashSet;

pub mod actions;
pub mod completion;
pub mod navigation;
pub mod progress;
pub mod queries;

pub use actions::normalize_answer;

/// One attempt at a level. Created by `start_level`, discarded when the
/// player leaves or restarts.
#[derive(Debug, Clone)]
pub struct Session {
    pub language: Language,
    pub level: u32,
    pub word_index: usize,
    pub score: usize,
    pub words: Vec<WordEntry>,
    pub input: String,
}

impl Session {
    pub fn new(language: Language, level: u32, words: Vec<WordEntry>) -> Self {
        Self {
            language,
            level,
            word_index: 0,
            score: 0,
            words,
            input: String::new(),
        }
    }

    pub fn current_word(&self) -> Option<&WordEntry> {
        self.words.get(self.word_index)
    }

    pub fn is_finished(&self) -> bool {
        self.word_index >= self.words.len()
    }
}

/// Feedback shown between answering a word and advancing to the next one.
#[derive(Debug, Clone, PartialEq)]
pub enum Feedback {
    Correct { emoji: &'static str },
    Incorrect { correct_word: String },
}

/// Deadline for the automatic advance after feedback. Stamped with the
/// generation current when it was scheduled so a deadline left over from an
/// abandoned attempt can never fire into a new one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingAdvance {
    pub due_at: f64,
    pub generation: u64,
}

/// Everything the results screen needs, computed once when a level ends.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelOutcome {
    pub score: usize,
    pub total: usize,
    pub accuracy: u32,
    pub tier: RewardTier,
}

pub struct SpellCraftApp {
    pub bank: WordBank,
    pub selected_language: Option<Language>,
    pub completed_levels: HashSet<String>,
    pub device_time_earned: u32,
    pub activities: Vec<String>,
    pub session: Option<Session>,
    pub outcome: Option<LevelOutcome>,
    pub state: AppState,
    pub feedback: Option<Feedback>,
    pub pending_advance: Option<PendingAdvance>,
    pub generation: u64,
    pub message: String,
    /// Speech fallback: show the literal word in the hint area.
    pub reveal_word: bool,
    pub show_dashboard: bool,
    pub confirm_exit: bool,
    /// Set by operations that change persisted progress; the next frame
    /// writes the store through instead of waiting for shutdown.
    pub progress_dirty: bool,
    /// Set when a new word loads so the view puts the caret back in the
    /// spelling box.
    pub refocus_input: bool,
    pub recorder: Recorder,
    pub confetti: Option<Confetti>,
}

impl Default for SpellCraftApp {
    fn default() -> Self {
        Self {
            bank: read_word_bank_embedded(),
            selected_language: None,
            completed_levels: HashSet::new(),
            device_time_earned: 0,
            activities: Vec::new(),
            session: None,
            outcome: None,
            state: AppState::LanguageSelect,
            feedback: None,
            pending_advance: None,
            generation: 0,
            message: String::new(),
            reveal_word: false,
            show_dashboard: false,
            confirm_exit: false,
            progress_dirty: false,
            refocus_input: false,
            recorder: Recorder::default(),
            confetti: None,
        }
    }
}

impl SpellCraftApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::default();
        if let Some(storage) = cc.storage {
            app.restore(storage);
        }
        app
    }
}
