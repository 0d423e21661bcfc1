use super::*;
use chrono::Local;

// Storage keys, one value per key. No transactional grouping: each key is
// written independently, exactly like the original browser store.
pub const KEY_LANGUAGE: &str = "spellcraft_language";
pub const KEY_COMPLETED: &str = "spellcraft_completed";
pub const KEY_DEVICE_TIME: &str = "spellcraft_device_time";
pub const KEY_ACTIVITIES: &str = "spellcraft_activities";

/// The activity log keeps this many entries, oldest evicted first.
pub const ACTIVITY_LOG_CAP: usize = 20;

impl SpellCraftApp {
    /// Loads persisted progress. Malformed values fail closed: the affected
    /// key falls back to its default instead of surfacing a parse error.
    pub fn restore(&mut self, storage: &dyn eframe::Storage) {
        if let Some(raw) = storage.get_string(KEY_COMPLETED) {
            self.completed_levels = match serde_json::from_str(&raw) {
                Ok(set) => set,
                Err(err) => {
                    log::warn!("discarding corrupt {KEY_COMPLETED}: {err}");
                    HashSet::new()
                }
            };
        }

        if let Some(raw) = storage.get_string(KEY_DEVICE_TIME) {
            self.device_time_earned = raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("discarding corrupt {KEY_DEVICE_TIME}: {raw:?}");
                0
            });
        }

        if let Some(raw) = storage.get_string(KEY_ACTIVITIES) {
            self.activities = match serde_json::from_str::<Vec<String>>(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    log::warn!("discarding corrupt {KEY_ACTIVITIES}: {err}");
                    Vec::new()
                }
            };
            self.trim_activity_log();
        }

        if let Some(raw) = storage.get_string(KEY_LANGUAGE) {
            self.selected_language = Language::from_tag(raw.trim());
        }
    }

    /// Writes every persisted value back under its own key.
    pub fn persist(&self, storage: &mut dyn eframe::Storage) {
        if let Some(language) = self.selected_language {
            storage.set_string(KEY_LANGUAGE, language.tag().to_owned());
        }
        storage.set_string(
            KEY_COMPLETED,
            serde_json::to_string(&self.completed_levels).unwrap_or_else(|_| "[]".to_owned()),
        );
        storage.set_string(KEY_DEVICE_TIME, self.device_time_earned.to_string());
        storage.set_string(
            KEY_ACTIVITIES,
            serde_json::to_string(&self.activities).unwrap_or_else(|_| "[]".to_owned()),
        );
    }

    pub fn log_activity(&mut self, activity: &str) {
        let timestamp = Local::now().format("%d/%m/%Y, %H:%M:%S");
        self.activities.push(format!("{timestamp}: {activity}"));
        self.trim_activity_log();
    }

    /// Newest first, for the dashboard's recent-activity list.
    pub fn recent_activities(&self, count: usize) -> Vec<&str> {
        self.activities
            .iter()
            .rev()
            .take(count)
            .map(|s| s.as_str())
            .collect()
    }

    fn trim_activity_log(&mut self) {
        while self.activities.len() > ACTIVITY_LOG_CAP {
            self.activities.remove(0);
        }
    }
}
