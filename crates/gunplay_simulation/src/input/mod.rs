//! Player input → intent events
//!
//! # Архитектура
//! - Emit: `capture_player_input` читает платформенный input
//!   (`ButtonInput<KeyCode>` / `ButtonInput<MouseButton>`, их заполняет
//!   bevy `InputPlugin` хоста)
//! - Consume: weapon systems (через `WeaponInputState`) и pause toggle
//!
//! Bindings фиксированные: R — reload (hold), LMB — fire, Escape — pause.
//! Headless/tests пишут события напрямую, минуя `ButtonInput`.

use bevy::prelude::*;

pub const RELOAD_KEY: KeyCode = KeyCode::KeyR;
pub const PAUSE_KEY: KeyCode = KeyCode::Escape;
pub const FIRE_BUTTON: MouseButton = MouseButton::Left;

/// Weapon input за один frame
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeaponInputEvent {
    /// Reload key just_pressed
    pub reload_pressed: bool,
    /// Reload key just_released
    pub reload_released: bool,
    /// Fire button just_pressed (Single mode)
    pub fire_pressed: bool,
    /// Fire button pressed (Auto mode)
    pub fire_held: bool,
}

impl WeaponInputEvent {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn reload_press() -> Self {
        Self {
            reload_pressed: true,
            ..Default::default()
        }
    }

    pub fn reload_release() -> Self {
        Self {
            reload_released: true,
            ..Default::default()
        }
    }

    /// Клик: press edge + held в том же frame
    pub fn fire_click() -> Self {
        Self {
            fire_pressed: true,
            fire_held: true,
            ..Default::default()
        }
    }

    /// Кнопка удерживается (без press edge)
    pub fn fire_hold() -> Self {
        Self {
            fire_held: true,
            ..Default::default()
        }
    }

    fn merge(&mut self, other: &Self) {
        self.reload_pressed |= other.reload_pressed;
        self.reload_released |= other.reload_released;
        self.fire_pressed |= other.fire_pressed;
        self.fire_held |= other.fire_held;
    }
}

/// Pause key just_pressed
#[derive(Event, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PauseInputEvent;

/// Свёрнутый weapon input текущего frame
///
/// Пересобирается каждый frame из `WeaponInputEvent` (несколько событий
/// за frame объединяются через OR).
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WeaponInputState(pub WeaponInputEvent);

/// System: платформенный input → intent events
pub fn capture_player_input(
    keys: Option<Res<ButtonInput<KeyCode>>>,
    mouse: Option<Res<ButtonInput<MouseButton>>>,
    mut weapon_events: EventWriter<WeaponInputEvent>,
    mut pause_events: EventWriter<PauseInputEvent>,
) {
    let mut input = WeaponInputEvent::default();

    if let Some(keys) = keys.as_deref() {
        input.reload_pressed = keys.just_pressed(RELOAD_KEY);
        input.reload_released = keys.just_released(RELOAD_KEY);

        if keys.just_pressed(PAUSE_KEY) {
            pause_events.write(PauseInputEvent);
        }
    }

    if let Some(mouse) = mouse.as_deref() {
        input.fire_pressed = mouse.just_pressed(FIRE_BUTTON);
        input.fire_held = mouse.pressed(FIRE_BUTTON);
    }

    if !input.is_empty() {
        weapon_events.write(input);
    }
}

/// System: свернуть события frame в `WeaponInputState`
pub fn collect_weapon_input(
    mut events: EventReader<WeaponInputEvent>,
    mut state: ResMut<WeaponInputState>,
) {
    let mut frame = WeaponInputEvent::default();
    for event in events.read() {
        frame.merge(event);
    }
    state.0 = frame;
}

/// Input plugin: регистрирует события и capture/collect системы
pub struct PlayerInputPlugin;

impl Plugin for PlayerInputPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<WeaponInputEvent>()
            .add_event::<PauseInputEvent>()
            .init_resource::<WeaponInputState>()
            .add_systems(
                Update,
                (capture_player_input, collect_weapon_input)
                    .chain()
                    .in_set(crate::GunplaySet::Input),
            );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input_app() -> App {
        let mut app = App::new();
        app.configure_sets(Update, crate::GunplaySet::Input);
        app.add_plugins(PlayerInputPlugin);
        app.init_resource::<ButtonInput<KeyCode>>();
        app.init_resource::<ButtonInput<MouseButton>>();
        app
    }

    #[test]
    fn test_reload_key_edges() {
        let mut app = input_app();

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(RELOAD_KEY);
        app.update();
        let state = app.world().resource::<WeaponInputState>().0;
        assert!(state.reload_pressed);
        assert!(!state.reload_released);

        {
            let mut keys = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            keys.clear();
            keys.release(RELOAD_KEY);
        }
        app.update();
        let state = app.world().resource::<WeaponInputState>().0;
        assert!(!state.reload_pressed);
        assert!(state.reload_released);
    }

    #[test]
    fn test_fire_held_without_edge() {
        let mut app = input_app();

        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .press(FIRE_BUTTON);
        app.update();
        assert_eq!(
            app.world().resource::<WeaponInputState>().0,
            WeaponInputEvent::fire_click()
        );

        // Следующий frame: кнопка всё ещё зажата, edge очищен
        app.world_mut()
            .resource_mut::<ButtonInput<MouseButton>>()
            .clear();
        app.update();
        assert_eq!(
            app.world().resource::<WeaponInputState>().0,
            WeaponInputEvent::fire_hold()
        );
    }

    #[test]
    fn test_state_resets_without_input() {
        let mut app = input_app();

        app.world_mut().send_event(WeaponInputEvent::reload_press());
        app.update();
        assert!(app.world().resource::<WeaponInputState>().0.reload_pressed);

        app.update();
        assert!(app.world().resource::<WeaponInputState>().0.is_empty());
    }
}
