//! Runtime state hitscan оружия
//!
//! State machine: Idle / CoolingDown / Reloading, тикается системами раз в
//! frame. Перезарядка — time accumulator (`ReloadRoutine`), отменяется
//! мгновенно.
//!
//! Инварианты:
//! - `magazine ≤ stats.magazine_capacity`
//! - `reload_progress > 0` только пока routine в полёте
//! - выстрел невозможен при reloading / cooldown / пустом магазине

use bevy::prelude::*;

use super::{Aiming, WeaponStats};

/// In-flight перезарядка
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct ReloadRoutine {
    /// Накопленное время (секунды)
    pub elapsed: f32,
}

/// Результат нажатия reload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadStart {
    /// Routine запущена
    Started,
    /// Резерв пуст или магазин полон — routine сразу закончилась
    Refused,
}

/// Результат одного тика перезарядки
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadTick {
    /// Нет routine в полёте
    Idle,
    InProgress,
    /// Таймер истёк: забрать у резерва до `requested` патронов
    Complete { requested: u32 },
}

/// Hitscan weapon runtime state
///
/// Спавнится выключенным: системы трогают только entity с `Equipped`.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
#[require(Aiming)]
pub struct RaycastWeapon {
    magazine: u32,
    reload_progress: f32,
    cooldown_timer: f32,
    reloading: bool,
    reload: Option<ReloadRoutine>,
}

impl RaycastWeapon {
    /// Оружие с заряженным магазином (clamp к ёмкости)
    pub fn with_magazine(stats: &WeaponStats, rounds: u32) -> Self {
        Self {
            magazine: rounds.min(stats.magazine_capacity),
            ..Default::default()
        }
    }

    pub fn magazine(&self) -> u32 {
        self.magazine
    }

    /// Прогресс перезарядки 0.0..=1.0
    pub fn reload_progress(&self) -> f32 {
        self.reload_progress
    }

    /// Reload key зажат (даже если routine уже закончилась)
    pub fn is_reloading(&self) -> bool {
        self.reloading
    }

    pub fn is_reload_in_flight(&self) -> bool {
        self.reload.is_some()
    }

    pub fn is_cooling_down(&self) -> bool {
        self.cooldown_timer > 0.0
    }

    pub fn cooldown_remaining(&self) -> f32 {
        self.cooldown_timer
    }

    pub fn can_fire(&self) -> bool {
        !self.reloading && !self.is_cooling_down() && self.magazine > 0
    }

    pub fn tick_cooldown(&mut self, delta: f32) {
        if self.cooldown_timer > 0.0 {
            self.cooldown_timer = (self.cooldown_timer - delta).max(0.0);
        }
    }

    /// Reload key down: прерывает in-flight routine и запускает новую
    ///
    /// `reserve` — сколько патронов этого типа у владельца.
    pub fn begin_reload(&mut self, stats: &WeaponStats, reserve: u32) -> ReloadStart {
        self.reload = None;
        self.reload_progress = 0.0;
        self.reloading = true;

        if reserve == 0 || self.magazine >= stats.magazine_capacity {
            return ReloadStart::Refused;
        }

        self.reload = Some(ReloadRoutine::default());
        ReloadStart::Started
    }

    /// Reload key up: останавливает routine, незавершённая не даёт патронов
    ///
    /// Возвращает `true` если оружие было в состоянии reloading.
    pub fn cancel_reload(&mut self) -> bool {
        let was_reloading = self.reloading;
        self.reload = None;
        self.reload_progress = 0.0;
        self.reloading = false;
        was_reloading
    }

    /// Продвинуть routine на `delta` секунд
    ///
    /// На `Complete` routine уже закрыта и прогресс сброшен; caller обязан
    /// забрать патроны у резерва и вызвать `load`.
    pub fn advance_reload(&mut self, stats: &WeaponStats, delta: f32) -> ReloadTick {
        let Some(routine) = self.reload.as_mut() else {
            return ReloadTick::Idle;
        };

        routine.elapsed += delta;

        if routine.elapsed >= stats.reload_time {
            self.reload = None;
            self.reload_progress = 0.0;
            return ReloadTick::Complete {
                requested: stats.magazine_capacity.saturating_sub(self.magazine),
            };
        }

        self.reload_progress = (routine.elapsed / stats.reload_time).clamp(0.0, 1.0);
        ReloadTick::InProgress
    }

    /// Зарядить патроны в магазин, возвращает сколько реально вошло
    pub fn load(&mut self, stats: &WeaponStats, rounds: u32) -> u32 {
        let space = stats.magazine_capacity.saturating_sub(self.magazine);
        let loaded = rounds.min(space);
        self.magazine += loaded;
        loaded
    }

    /// Выстрел: -1 патрон + cooldown
    ///
    /// `false` если стрельба заблокирована (состояние не меняется).
    pub fn try_fire(&mut self, stats: &WeaponStats) -> bool {
        if !self.can_fire() {
            return false;
        }

        self.magazine -= 1;
        self.cooldown_timer = stats.cooldown.max(0.0);
        true
    }
}
