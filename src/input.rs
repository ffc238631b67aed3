use macroquad::prelude::*;

/// One frame's worth of raw input, captured once at the top of the
/// loop. Button hit-testing happens in the ui module from the pointer
/// snapshot here.
#[derive(Clone, Copy, Debug)]
pub struct InputModel {
    pub quit_requested: bool,
    pub reset_requested: bool,
    pub speed_up_requested: bool,
    pub speed_down_requested: bool,
    pub fullscreen_toggle_requested: bool,
    pub pointer: Vec2,
    pub pointer_pressed: bool,
}

impl InputModel {
    pub fn capture() -> Self {
        let (mx, my) = mouse_position();

        let quit_requested = is_key_pressed(KeyCode::Escape) || is_key_pressed(KeyCode::Q);
        let reset_requested = is_key_pressed(KeyCode::R);
        let speed_up_requested = is_key_pressed(KeyCode::Up);
        let speed_down_requested = is_key_pressed(KeyCode::Down);
        let fullscreen_toggle_requested = is_key_pressed(KeyCode::F);

        Self {
            quit_requested,
            reset_requested,
            speed_up_requested,
            speed_down_requested,
            fullscreen_toggle_requested,
            pointer: vec2(mx, my),
            pointer_pressed: is_mouse_button_pressed(MouseButton::Left),
        }
    }
}
