//! Pause domain — глобальный pause flag + time scale
//!
//! - `PauseState` (resource): единственный владелец флага, меняется только
//!   через `pause()` / `unpause()`
//! - `PauseToggle` (component на pause menu entity): пока он есть, pause key
//!   переключает паузу; появление компонента сбрасывает паузу
//! - Мертвый игрок (`Health.current ≤ 0`) не может переключить паузу
//! - `sync_virtual_time`: пауза останавливает `Time<Virtual>`, поэтому
//!   reload / cooldown / effects замирают вместе с игрой

use bevy::prelude::*;

use crate::components::{Health, Player};
use crate::input::PauseInputEvent;

/// Global pause controller
#[derive(Resource, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Resource)]
pub struct PauseState {
    paused: bool,
    time_scale: f32,
}

impl Default for PauseState {
    fn default() -> Self {
        Self {
            paused: false,
            time_scale: 1.0,
        }
    }
}

impl PauseState {
    pub fn pause(&mut self) {
        self.paused = true;
        self.time_scale = 0.0;
    }

    pub fn unpause(&mut self) {
        self.paused = false;
        self.time_scale = 1.0;
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn time_scale(&self) -> f32 {
        self.time_scale
    }
}

/// Marker: pause menu (toggle активен пока компонент существует)
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct PauseToggle;

/// Event: пауза переключена (для pause menu UI)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseToggled {
    pub paused: bool,
}

/// Observer: `PauseToggle` появился → игра не на паузе
pub fn reset_pause_on_toggle_added(
    _trigger: Trigger<OnAdd, PauseToggle>,
    mut pause: ResMut<PauseState>,
) {
    pause.unpause();
}

/// System: pause key → pause / unpause
pub fn toggle_pause(
    mut inputs: EventReader<PauseInputEvent>,
    toggles: Query<(), With<PauseToggle>>,
    players: Query<&Health, With<Player>>,
    mut pause: ResMut<PauseState>,
    mut toggled: EventWriter<PauseToggled>,
) {
    // Читаем всегда, чтобы нажатия не копились пока toggle неактивен
    let pressed = inputs.read().count() > 0;
    if !pressed || toggles.is_empty() {
        return;
    }

    if players.iter().any(|health| health.current <= 0.0) {
        return;
    }

    if pause.is_paused() {
        pause.unpause();
    } else {
        pause.pause();
    }

    toggled.write(PauseToggled {
        paused: pause.is_paused(),
    });
    crate::logger::log_info(&format!(
        "Pause toggled: paused={} (time scale {})",
        pause.is_paused(),
        pause.time_scale()
    ));
}

/// System: `PauseState` → `Time<Virtual>`
pub fn sync_virtual_time(pause: Res<PauseState>, time: Option<ResMut<Time<Virtual>>>) {
    let Some(mut time) = time else {
        return;
    };

    if pause.is_paused() {
        time.pause();
    } else {
        time.unpause();
    }
}

pub struct PausePlugin;

impl Plugin for PausePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PauseState>()
            .add_event::<PauseInputEvent>()
            .add_event::<PauseToggled>()
            .add_observer(reset_pause_on_toggle_added)
            .add_systems(
                Update,
                (
                    toggle_pause,
                    sync_virtual_time.run_if(resource_changed::<PauseState>),
                )
                    .chain()
                    .in_set(crate::GunplaySet::Pause),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pause_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.configure_sets(Update, crate::GunplaySet::Pause);
        app.add_plugins(PausePlugin);
        app
    }

    fn press_pause(app: &mut App) {
        app.world_mut().send_event(PauseInputEvent);
        app.update();
    }

    #[test]
    fn test_pause_state_transitions() {
        let mut state = PauseState::default();
        assert!(!state.is_paused());
        assert_eq!(state.time_scale(), 1.0);

        state.pause();
        assert!(state.is_paused());
        assert_eq!(state.time_scale(), 0.0);

        state.unpause();
        assert!(!state.is_paused());
        assert_eq!(state.time_scale(), 1.0);
    }

    #[test]
    fn test_toggle_added_forces_unpause() {
        let mut app = pause_app();
        app.world_mut().resource_mut::<PauseState>().pause();

        app.world_mut().spawn(PauseToggle);
        assert!(!app.world().resource::<PauseState>().is_paused());
    }

    #[test]
    fn test_pause_key_flips_state() {
        let mut app = pause_app();
        app.world_mut().spawn(PauseToggle);
        app.world_mut().spawn((Player, Health::new(100.0)));

        press_pause(&mut app);
        assert!(app.world().resource::<PauseState>().is_paused());
        assert!(app.world().resource::<Time<Virtual>>().is_paused());

        press_pause(&mut app);
        assert!(!app.world().resource::<PauseState>().is_paused());
        assert!(!app.world().resource::<Time<Virtual>>().is_paused());
    }

    #[test]
    fn test_dead_player_cannot_pause() {
        let mut app = pause_app();
        app.world_mut().spawn(PauseToggle);
        let mut health = Health::new(100.0);
        health.take_damage(100.0);
        app.world_mut().spawn((Player, health));

        press_pause(&mut app);
        press_pause(&mut app);
        press_pause(&mut app);
        assert!(!app.world().resource::<PauseState>().is_paused());
    }

    #[test]
    fn test_no_toggle_no_pause() {
        let mut app = pause_app();
        app.world_mut().spawn((Player, Health::new(100.0)));

        press_pause(&mut app);
        assert!(!app.world().resource::<PauseState>().is_paused());
    }
}
