//! Запас патронов владельца (backpack ammo)
//!
//! Оружие не хранит резерв: при завершении перезарядки оно берёт патроны
//! у `AmmoPouch` владельца (`WeaponRig::owner`) одним вызовом
//! `take_ammunition`.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::weapon::AmmoType;

/// Per-type счётчики патронов в рюкзаке
#[derive(Component, Debug, Clone, Default, PartialEq, Eq)]
pub struct AmmoPouch {
    counts: HashMap<AmmoType, u32>,
}

impl AmmoPouch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: стартовый запас одного типа
    pub fn with_ammunition(mut self, ammo_type: AmmoType, count: u32) -> Self {
        self.add_ammunition(ammo_type, count);
        self
    }

    /// Сколько патронов данного типа лежит в рюкзаке
    pub fn get_ammunition(&self, ammo_type: AmmoType) -> u32 {
        self.counts.get(&ammo_type).copied().unwrap_or(0)
    }

    /// Забрать до `requested` патронов, возвращает реально выданное
    /// количество: `min(requested, available)`
    pub fn take_ammunition(&mut self, ammo_type: AmmoType, requested: u32) -> u32 {
        let Some(available) = self.counts.get_mut(&ammo_type) else {
            return 0;
        };

        let granted = requested.min(*available);
        *available -= granted;
        granted
    }

    pub fn add_ammunition(&mut self, ammo_type: AmmoType, count: u32) {
        let slot = self.counts.entry(ammo_type).or_insert(0);
        *slot = slot.saturating_add(count);
    }
}
