use super::*;
use crate::view_models::LevelInfo;

impl SpellCraftApp {
    /// Identifier stored in the completed-level set: `"{language}-{level}"`.
    pub fn level_key(language: Language, level: u32) -> String {
        format!("{}-{}", language.tag(), level)
    }

    pub fn is_level_completed(&self, language: Language, level: u32) -> bool {
        self.completed_levels
            .contains(&Self::level_key(language, level))
    }

    /// Level 1 is always open; level n needs level n-1 completed.
    pub fn is_level_unlocked(&self, language: Language, level: u32) -> bool {
        level <= 1 || self.is_level_completed(language, level - 1)
    }

    pub fn completed_count(&self, language: Language) -> usize {
        self.bank
            .level_numbers(language)
            .into_iter()
            .filter(|&level| self.is_level_completed(language, level))
            .count()
    }

    /// Share of levels completed for the dashboard, as a rounded percentage.
    pub fn progress_percent(&self, language: Language) -> u32 {
        let total = self.bank.level_count(language);
        if total == 0 {
            return 0;
        }
        ((self.completed_count(language) as f64 / total as f64) * 100.0).round() as u32
    }

    pub fn level_infos(&self, language: Language) -> Vec<LevelInfo> {
        self.bank
            .level_numbers(language)
            .into_iter()
            .map(|level| LevelInfo {
                level,
                unlocked: self.is_level_unlocked(language, level),
                completed: self.is_level_completed(language, level),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_one_is_always_unlocked() {
        let app = SpellCraftApp::default();
        for language in Language::ALL {
            assert!(app.is_level_unlocked(language, 1));
            assert!(!app.is_level_unlocked(language, 2));
        }
    }

    #[test]
    fn level_unlocks_when_previous_is_completed() {
        let mut app = SpellCraftApp::default();
        app.completed_levels.insert("english-1".to_owned());
        assert!(app.is_level_unlocked(Language::English, 2));
        assert!(!app.is_level_unlocked(Language::English, 3));
        // Completion is per language.
        assert!(!app.is_level_unlocked(Language::Irish, 2));
    }

    #[test]
    fn progress_percent_counts_only_the_selected_language() {
        let mut app = SpellCraftApp::default();
        app.completed_levels.insert("english-1".to_owned());
        app.completed_levels.insert("english-2".to_owned());
        app.completed_levels.insert("irish-1".to_owned());
        assert_eq!(app.completed_count(Language::English), 2);
        assert_eq!(app.progress_percent(Language::English), 40);
        assert_eq!(app.progress_percent(Language::Irish), 20);
    }

    #[test]
    fn level_infos_reflect_unlock_chain() {
        let mut app = SpellCraftApp::default();
        app.completed_levels.insert("english-1".to_owned());
        let infos = app.level_infos(Language::English);
        assert_eq!(infos.len(), 5);
        assert!(infos[0].completed && infos[0].unlocked);
        assert!(infos[1].unlocked && !infos[1].completed);
        assert!(!infos[2].unlocked);
    }
}
