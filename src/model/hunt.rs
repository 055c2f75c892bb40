//! Domain model for hunt profiles.
//!
//! The hunt profile is a plain record owned by the hunt menu. Every field carries a serde
//! default so that profiles written by older versions of the bot are upgraded when read.

use serde::{Deserialize, Serialize};

/// Width of the XP progress bar in characters.
pub const PROGRESS_BAR_WIDTH: usize = 20;

/// An item that can be held in an inventory or equipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuntItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
}

/// A user's hunting progression, stats and equipment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HuntProfile {
    pub level: u32,
    pub xp: u32,
    pub next_level_xp: u32,
    pub health: u32,
    pub defense: u32,
    pub gear_equipped: Option<HuntItem>,
    pub misc_equipped: Option<HuntItem>,
    pub gear_inventory: Vec<HuntItem>,
    pub misc_inventory: Vec<HuntItem>,
}

impl Default for HuntProfile {
    fn default() -> Self {
        Self {
            level: 1,
            xp: 0,
            next_level_xp: 100,
            health: 100,
            defense: 0,
            gear_equipped: None,
            misc_equipped: None,
            gear_inventory: Vec::new(),
            misc_inventory: Vec::new(),
        }
    }
}

impl HuntProfile {
    /// Progress towards the next level as a percentage in 0.0..=100.0.
    pub fn xp_percent(&self) -> f64 {
        if self.next_level_xp == 0 {
            return 0.0;
        }

        (f64::from(self.xp) / f64::from(self.next_level_xp) * 100.0).clamp(0.0, 100.0)
    }

    /// Renders XP progress as a bar of `width` filled (`█`) and empty (`░`) cells.
    pub fn xp_progress_bar(&self, width: usize) -> String {
        let total = self.next_level_xp.max(1);
        let ratio = (f64::from(self.xp) / f64::from(total)).clamp(0.0, 1.0);
        let filled = (ratio * width as f64) as usize;

        format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
    }
}
