//! Weapon stats loading (RON)
//!
//! ```ron
//! (
//!     ammo_type: Rifle,
//!     shoot_mode: Auto,
//!     damage: 12.0,
//!     range: 120.0,
//!     cooldown: 0.1,
//!     reload_time: 2.0,
//!     magazine_capacity: 30,
//!     muzzle_flash: (prefab: "effects/muzzle_flash_rifle", lifetime: 0.08),
//!     hit_effect: (prefab: "effects/bullet_impact", lifetime: 2.0),
//! )
//! ```

use std::path::Path;

use thiserror::Error;

use crate::weapon::WeaponStats;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read weapon stats file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse weapon stats: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("invalid weapon stats: `{field}` {reason}")]
    Invalid { field: &'static str, reason: String },
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

impl WeaponStats {
    /// Проверка инвариантов конфигурации
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.magazine_capacity < 1 {
            return Err(invalid("magazine_capacity", "must be at least 1"));
        }
        if !(self.cooldown >= 0.0) {
            return Err(invalid("cooldown", format!("must be >= 0, got {}", self.cooldown)));
        }
        if !(self.reload_time >= 0.0) {
            return Err(invalid(
                "reload_time",
                format!("must be >= 0, got {}", self.reload_time),
            ));
        }
        if !(self.range > 0.0) {
            return Err(invalid("range", format!("must be > 0, got {}", self.range)));
        }
        if !self.damage.is_finite() {
            return Err(invalid("damage", "must be finite"));
        }
        Ok(())
    }
}

/// Parse + validate weapon stats из RON строки
pub fn load_weapon_stats(text: &str) -> Result<WeaponStats, ConfigError> {
    let stats: WeaponStats = ron::from_str(text)?;
    stats.validate()?;
    Ok(stats)
}

/// Parse + validate weapon stats из RON файла
pub fn load_weapon_stats_file(path: impl AsRef<Path>) -> Result<WeaponStats, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    load_weapon_stats(&text)
}
