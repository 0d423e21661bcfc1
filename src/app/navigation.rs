use super::*;

impl SpellCraftApp {
    pub fn select_language(&mut self, language: Language) {
        self.selected_language = Some(language);
        self.state = AppState::LevelSelect;
        self.message.clear();
        self.progress_dirty = true;
    }

    pub fn back_to_languages(&mut self) {
        self.abandon_attempt();
        self.state = AppState::LanguageSelect;
        self.message.clear();
    }

    /// Starts (or restarts) a level: fresh session, zeroed score, first word.
    /// A no-op for locked or nonexistent levels.
    pub fn start_level(&mut self, level: u32) {
        let Some(language) = self.selected_language else {
            return;
        };
        if !self.is_level_unlocked(language, level) {
            return;
        }
        let Some(words) = self.bank.words(language, level) else {
            return;
        };
        let words = words.to_vec();

        self.abandon_attempt();
        self.session = Some(Session::new(language, level, words));
        self.outcome = None;
        self.confetti = None;
        self.state = AppState::InProgress;
        self.message.clear();
        self.refocus_input = true;
    }

    /// Results → InProgress on the same level.
    pub fn retry_level(&mut self) {
        if let Some(level) = self.session.as_ref().map(|s| s.level) {
            self.start_level(level);
        }
    }

    /// Results → next level if one exists, otherwise back to the level menu.
    pub fn next_level(&mut self) {
        let Some(session) = &self.session else {
            return;
        };
        let language = session.language;
        let next = session.level + 1;

        if self.bank.has_level(language, next) {
            self.start_level(next);
        } else {
            self.abandon_attempt();
            self.session = None;
            self.state = AppState::LevelSelect;
            self.message = "🎉 Congratulations! You've completed all levels!".to_owned();
        }
    }

    pub fn exit_to_levels(&mut self) {
        self.abandon_attempt();
        self.session = None;
        self.outcome = None;
        self.state = AppState::LevelSelect;
        self.message.clear();
    }

    pub fn toggle_dashboard(&mut self) {
        self.show_dashboard = !self.show_dashboard;
    }

    /// Invalidates any in-flight feedback delay. Bumping the generation is
    /// what keeps a deadline scheduled in an old attempt from advancing a
    /// new one.
    fn abandon_attempt(&mut self) {
        self.generation += 1;
        self.pending_advance = None;
        self.feedback = None;
        self.reveal_word = false;
        self.confetti = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selecting_language_opens_level_menu() {
        let mut app = SpellCraftApp::default();
        app.select_language(Language::Irish);
        assert_eq!(app.selected_language, Some(Language::Irish));
        assert_eq!(app.state, AppState::LevelSelect);
        assert!(app.progress_dirty);
    }

    #[test]
    fn starting_a_level_focuses_the_spelling_box() {
        let mut app = SpellCraftApp::default();
        app.select_language(Language::English);
        app.refocus_input = false;
        app.start_level(1);
        assert!(app.refocus_input);
    }

    #[test]
    fn starting_locked_level_is_a_no_op() {
        let mut app = SpellCraftApp::default();
        app.select_language(Language::English);
        app.start_level(2);
        assert!(app.session.is_none());
        assert_eq!(app.state, AppState::LevelSelect);
    }

    #[test]
    fn starting_unlocked_level_resets_session_state() {
        let mut app = SpellCraftApp::default();
        app.select_language(Language::English);
        app.start_level(1);
        let session = app.session.as_ref().unwrap();
        assert_eq!(session.level, 1);
        assert_eq!(session.word_index, 0);
        assert_eq!(session.score, 0);
        assert_eq!(session.words.len(), 5);
        assert_eq!(app.state, AppState::InProgress);
    }

    #[test]
    fn next_level_advances_once_current_level_is_completed() {
        let mut app = SpellCraftApp::default();
        app.select_language(Language::English);
        app.completed_levels.insert("english-1".to_owned());
        app.start_level(1);
        app.next_level();
        assert_eq!(app.session.as_ref().unwrap().level, 2);
    }

    #[test]
    fn next_level_past_the_last_returns_to_menu() {
        let mut app = SpellCraftApp::default();
        app.select_language(Language::English);
        for level in 1..=5 {
            app.completed_levels
                .insert(SpellCraftApp::level_key(Language::English, level));
        }
        app.start_level(5);
        app.next_level();
        assert!(app.session.is_none());
        assert_eq!(app.state, AppState::LevelSelect);
        assert!(app.message.contains("Congratulations"));
    }

    #[test]
    fn exit_clears_session_and_pending_feedback() {
        let mut app = SpellCraftApp::default();
        app.select_language(Language::English);
        app.start_level(1);
        app.session.as_mut().unwrap().input = "cat".to_owned();
        app.submit_spelling(0.0);
        app.exit_to_levels();
        assert!(app.session.is_none());
        assert!(app.pending_advance.is_none());
        assert!(app.feedback.is_none());
        assert_eq!(app.state, AppState::LevelSelect);
    }
}
