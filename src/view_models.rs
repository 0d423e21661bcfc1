/// Row for the level menu.
#[derive(Clone, Copy, Debug)]
pub struct LevelInfo {
    pub level: u32,
    pub unlocked: bool,
    pub completed: bool,
}

impl LevelInfo {
    pub fn label(&self) -> String {
        if self.completed {
            format!("Level {} ✅", self.level)
        } else if self.unlocked {
            format!("Level {} 🔓", self.level)
        } else {
            format!("Level {} 🔒", self.level)
        }
    }
}

/// Numbers shown on the parent dashboard.
#[derive(Clone, Copy, Debug)]
pub struct DashboardStats {
    pub progress_percent: u32,
    pub completed: usize,
    pub total: usize,
    pub device_minutes: u32,
}
