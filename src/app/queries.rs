use super::*;
use crate::view_models::DashboardStats;

impl SpellCraftApp {
    pub fn current_hint(&self) -> Option<&str> {
        let session = self.session.as_ref()?;
        let entry = session.current_word()?;
        Some(if self.reveal_word {
            // Speech fallback path: the view formats "Spell: {word}".
            entry.word.as_str()
        } else {
            entry.hint.as_str()
        })
    }

    /// Fraction of the level already attempted, for the progress bar.
    pub fn level_progress(&self) -> f32 {
        let Some(session) = &self.session else {
            return 0.0;
        };
        if session.words.is_empty() {
            return 0.0;
        }
        session.word_index as f32 / session.words.len() as f32
    }

    pub fn dashboard_stats(&self) -> Option<DashboardStats> {
        let language = self.selected_language?;
        Some(DashboardStats {
            progress_percent: self.progress_percent(language),
            completed: self.completed_count(language),
            total: self.bank.level_count(language),
            device_minutes: self.device_time_earned,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_fraction_follows_word_index() {
        let mut app = SpellCraftApp::default();
        app.select_language(Language::English);
        app.start_level(1);
        assert_eq!(app.level_progress(), 0.0);
        app.session.as_mut().unwrap().word_index = 2;
        assert_eq!(app.level_progress(), 0.4);
    }

    #[test]
    fn hint_switches_to_word_when_revealed() {
        let mut app = SpellCraftApp::default();
        app.select_language(Language::English);
        app.start_level(1);
        assert_eq!(app.current_hint(), Some("A furry pet that says meow"));
        app.reveal_word = true;
        assert_eq!(app.current_hint(), Some("cat"));
    }

    #[test]
    fn dashboard_stats_need_a_language() {
        let mut app = SpellCraftApp::default();
        assert!(app.dashboard_stats().is_none());
        app.select_language(Language::English);
        app.device_time_earned = 17;
        let stats = app.dashboard_stats().unwrap();
        assert_eq!(stats.total, 5);
        assert_eq!(stats.device_minutes, 17);
    }
}
