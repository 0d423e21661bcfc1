use super::*;
use crate::model::accuracy_percent;
use crate::platform::speech;
use rand::seq::SliceRandom;

/// Canonical form used for comparison: trimmed and lower-cased, nothing else.
pub fn normalize_answer(input: &str) -> String {
    input.trim().to_lowercase()
}

// UI pacing, not a retry mechanism: correct answers linger briefly,
// incorrect ones a little longer so the correct spelling can be read.
const CORRECT_ADVANCE_DELAY: f64 = 1.5;
const INCORRECT_ADVANCE_DELAY: f64 = 2.5;

impl SpellCraftApp {
    /// Evaluates the typed spelling against the current word. `now` is the
    /// UI clock in seconds, used to schedule the automatic advance.
    pub fn submit_spelling(&mut self, now: f64) {
        // An advance is already scheduled: the word was answered, the input
        // box is just waiting out the feedback delay.
        if self.pending_advance.is_some() {
            return;
        }

        let Some(session) = &mut self.session else {
            return;
        };
        let Some(entry) = session.words.get(session.word_index) else {
            return;
        };

        let typed = normalize_answer(&session.input);
        if typed.is_empty() {
            return;
        }

        let delay = if typed == normalize_answer(&entry.word) {
            session.score += 1;
            let emoji = random_emoji(RewardTier::Excellent);
            self.feedback = Some(Feedback::Correct { emoji });
            CORRECT_ADVANCE_DELAY
        } else {
            self.feedback = Some(Feedback::Incorrect {
                correct_word: entry.word.clone(),
            });
            INCORRECT_ADVANCE_DELAY
        };

        self.pending_advance = Some(PendingAdvance {
            due_at: now + delay,
            generation: self.generation,
        });
    }

    /// Fires due advances. Called every frame while a level is in progress.
    /// Deadlines stamped with an older generation are discarded unfired.
    pub fn tick(&mut self, now: f64) {
        let Some(pending) = self.pending_advance else {
            return;
        };
        if pending.generation != self.generation {
            self.pending_advance = None;
            return;
        }
        if now >= pending.due_at {
            self.pending_advance = None;
            self.advance_word();
        }
    }

    fn advance_word(&mut self) {
        self.feedback = None;
        self.reveal_word = false;

        let Some(session) = &mut self.session else {
            return;
        };
        session.word_index += 1;
        session.input.clear();

        if session.is_finished() {
            self.finish_level();
        } else {
            self.refocus_input = true;
        }
    }

    /// Results transition: scores the attempt, accumulates device time,
    /// records completion at 60% or better and logs the activity.
    fn finish_level(&mut self) {
        let Some(session) = &self.session else {
            return;
        };

        let score = session.score;
        let total = session.words.len();
        let level = session.level;
        let language = session.language;

        let accuracy = accuracy_percent(score, total);
        let tier = RewardTier::for_result(score, total);
        self.device_time_earned += tier.device_minutes();

        if accuracy >= 60 {
            self.completed_levels
                .insert(Self::level_key(language, level));
        }

        if tier.celebrates() {
            self.confetti = Some(Confetti::burst());
        }

        self.log_activity(&format!("Completed Level {level} - {accuracy}% accuracy"));
        log::info!("level {level} ({}) finished: {score}/{total}", language.tag());

        self.outcome = Some(LevelOutcome {
            score,
            total,
            accuracy,
            tier,
        });
        self.state = AppState::Results;
        self.progress_dirty = true;
    }

    /// Speaks the current word; if speech output is unavailable the hint
    /// area falls back to showing the word itself.
    pub fn play_current_word(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        let Some(entry) = session.current_word() else {
            return;
        };
        if !speech::speak(&entry.word, session.language.locale()) {
            self.message =
                "Text-to-speech is not supported here. The word is shown instead.".to_owned();
            self.reveal_word = true;
        }
    }
}

pub(crate) fn random_emoji(tier: RewardTier) -> &'static str {
    let mut rng = rand::thread_rng();
    tier.emojis().choose(&mut rng).copied().unwrap_or("🌟")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_in_level(level: u32) -> SpellCraftApp {
        let mut app = SpellCraftApp::default();
        app.select_language(Language::English);
        app.start_level(level);
        app
    }

    fn type_and_submit(app: &mut SpellCraftApp, text: &str, now: f64) {
        app.session.as_mut().unwrap().input = text.to_owned();
        app.submit_spelling(now);
    }

    /// Answers the whole current level, getting `correct` words right.
    fn play_level(app: &mut SpellCraftApp, correct: usize) {
        let words: Vec<String> = app
            .session
            .as_ref()
            .unwrap()
            .words
            .iter()
            .map(|w| w.word.clone())
            .collect();
        let mut now = 0.0;
        for (i, word) in words.iter().enumerate() {
            let answer = if i < correct { word.clone() } else { "xx".to_owned() };
            type_and_submit(app, &answer, now);
            now += 10.0;
            app.tick(now);
        }
    }

    #[test]
    fn normalization_trims_and_lowercases() {
        assert_eq!(normalize_answer("  CAT "), "cat");
        assert_eq!(normalize_answer("Féileacán"), "féileacán");
        assert_eq!(normalize_answer("   "), "");
    }

    #[test]
    fn correct_answer_scores_and_schedules_short_delay() {
        let mut app = app_in_level(1);
        type_and_submit(&mut app, "  CAT ", 100.0);
        assert_eq!(app.session.as_ref().unwrap().score, 1);
        assert!(matches!(app.feedback, Some(Feedback::Correct { .. })));
        let pending = app.pending_advance.unwrap();
        assert_eq!(pending.due_at, 101.5);
    }

    #[test]
    fn incorrect_answer_shows_word_and_schedules_long_delay() {
        let mut app = app_in_level(1);
        type_and_submit(&mut app, "kat", 100.0);
        assert_eq!(app.session.as_ref().unwrap().score, 0);
        assert_eq!(
            app.feedback,
            Some(Feedback::Incorrect {
                correct_word: "cat".to_owned()
            })
        );
        assert_eq!(app.pending_advance.unwrap().due_at, 102.5);
    }

    #[test]
    fn empty_input_is_ignored() {
        let mut app = app_in_level(1);
        type_and_submit(&mut app, "   ", 0.0);
        assert!(app.feedback.is_none());
        assert!(app.pending_advance.is_none());
    }

    #[test]
    fn submit_is_ignored_while_advance_pending() {
        let mut app = app_in_level(1);
        type_and_submit(&mut app, "cat", 0.0);
        type_and_submit(&mut app, "cat", 0.1);
        assert_eq!(app.session.as_ref().unwrap().score, 1);
        assert_eq!(app.session.as_ref().unwrap().word_index, 0);
    }

    #[test]
    fn tick_advances_only_after_deadline() {
        let mut app = app_in_level(1);
        type_and_submit(&mut app, "cat", 0.0);
        app.tick(1.0);
        assert_eq!(app.session.as_ref().unwrap().word_index, 0);
        app.tick(1.6);
        assert_eq!(app.session.as_ref().unwrap().word_index, 1);
        assert!(app.feedback.is_none());
        assert!(app.pending_advance.is_none());
    }

    #[test]
    fn advancing_to_a_new_word_requests_input_focus() {
        let mut app = app_in_level(1);
        app.refocus_input = false;
        type_and_submit(&mut app, "cat", 0.0);
        assert!(!app.refocus_input);
        app.tick(2.0);
        assert!(app.refocus_input);
    }

    #[test]
    fn finishing_a_level_marks_progress_for_immediate_write() {
        let mut app = app_in_level(1);
        // Language selection already marked it once; start clean.
        app.progress_dirty = false;
        play_level(&mut app, 5);
        assert!(app.progress_dirty);
    }

    #[test]
    fn stale_deadline_from_old_attempt_never_fires() {
        let mut app = app_in_level(1);
        type_and_submit(&mut app, "cat", 0.0);
        // Restart before the pending advance fires.
        app.retry_level();
        assert!(app.pending_advance.is_none());
        app.tick(10.0);
        assert_eq!(app.session.as_ref().unwrap().word_index, 0);
        assert_eq!(app.session.as_ref().unwrap().score, 0);
    }

    #[test]
    fn sixty_percent_is_good_and_completes_the_level() {
        let mut app = app_in_level(1);
        play_level(&mut app, 3);
        let outcome = app.outcome.unwrap();
        assert_eq!(outcome.accuracy, 60);
        assert_eq!(outcome.tier, RewardTier::Good);
        assert_eq!(app.device_time_earned, 5);
        assert!(app.completed_levels.contains("english-1"));
        assert_eq!(app.state, AppState::Results);
    }

    #[test]
    fn perfect_score_adds_fifteen_minutes_on_top_of_prior_time() {
        let mut app = app_in_level(1);
        app.device_time_earned = 42;
        play_level(&mut app, 5);
        let outcome = app.outcome.unwrap();
        assert_eq!(outcome.tier, RewardTier::Perfect);
        assert_eq!(app.device_time_earned, 57);
        assert!(app.confetti.is_some());
    }

    #[test]
    fn failed_level_earns_time_but_no_completion() {
        let mut app = app_in_level(1);
        play_level(&mut app, 2);
        let outcome = app.outcome.unwrap();
        assert_eq!(outcome.tier, RewardTier::Okay);
        assert_eq!(app.device_time_earned, 2);
        assert!(!app.completed_levels.contains("english-1"));
        assert!(app.confetti.is_none());
    }

    #[test]
    fn score_never_exceeds_total() {
        let mut app = app_in_level(1);
        play_level(&mut app, 5);
        let outcome = app.outcome.unwrap();
        assert!(outcome.score <= outcome.total);
    }
}
