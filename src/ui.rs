use lib_sim::{GameState, RunMode, Viewport, BASE_VIEW_HEIGHT, BASE_VIEW_WIDTH};
use macroquad::prelude::*;

use crate::input::InputModel;

const BUTTON_WIDTH: f32 = 100.0;
const BUTTON_HEIGHT: f32 = 40.0;
const BUTTON_MARGIN: f32 = 10.0;
const FONT_SIZE: f32 = 25.0;

const START_COLOR: Color = Color::from_rgba(0, 255, 0, 255);
const STOP_COLOR: Color = Color::from_rgba(255, 0, 0, 255);
const PAUSE_COLOR: Color = Color::from_rgba(255, 255, 0, 255);
const RESUME_COLOR: Color = Color::from_rgba(0, 255, 255, 255);
const BACKDROP_COLOR: Color = Color::new(0.0, 0.0, 0.12, 0.5);

static GAMEOVER_TEXT: &str = "Game Over";
static PAUSE_TEXT: &str = "Paused";
static START_TEXT: &str = "Blink to jump";
static START_HINT: &str = "Click Start to play";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    Start,
    Stop,
    Pause,
    Resume,
}

/// A button is pure data; hover and activation are recomputed from
/// the pointer snapshot every frame.
#[derive(Clone, Copy)]
struct Button {
    kind: ButtonKind,
    rect: Rect,
    label: &'static str,
    color: Color,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct UiModel {
    hovered: Option<ButtonKind>,
    clicked: Option<ButtonKind>,
}

impl UiModel {
    #[cfg(test)]
    pub fn with_click(kind: ButtonKind) -> Self {
        Self {
            hovered: Some(kind),
            clicked: Some(kind),
        }
    }

    pub fn start_requested(&self) -> bool {
        self.clicked == Some(ButtonKind::Start)
    }

    pub fn stop_requested(&self) -> bool {
        self.clicked == Some(ButtonKind::Stop)
    }

    pub fn pause_requested(&self) -> bool {
        self.clicked == Some(ButtonKind::Pause)
    }

    pub fn resume_requested(&self) -> bool {
        self.clicked == Some(ButtonKind::Resume)
    }
}

pub struct Ui {
    viewport: Viewport,
    buttons: [Button; 4],
    font_size: f32,
    margin: f32,
}

impl Ui {
    pub fn new(viewport: Viewport) -> Self {
        let scale = (viewport.w / BASE_VIEW_WIDTH).min(viewport.h / BASE_VIEW_HEIGHT);
        let (w, h) = (BUTTON_WIDTH * scale, BUTTON_HEIGHT * scale);
        let margin = BUTTON_MARGIN * scale;
        // Slot 0 hugs the right edge, the rest stack leftward.
        let slot = |i: f32| Rect::new(viewport.w - (i + 1.0) * (w + margin), margin, w, h);

        let buttons = [
            Button {
                kind: ButtonKind::Resume,
                rect: slot(0.0),
                label: "Resume",
                color: RESUME_COLOR,
            },
            Button {
                kind: ButtonKind::Pause,
                rect: slot(1.0),
                label: "Pause",
                color: PAUSE_COLOR,
            },
            Button {
                kind: ButtonKind::Stop,
                rect: slot(2.0),
                label: "Stop",
                color: STOP_COLOR,
            },
            Button {
                kind: ButtonKind::Start,
                rect: slot(3.0),
                label: "Start",
                color: START_COLOR,
            },
        ];

        Self {
            viewport,
            buttons,
            font_size: FONT_SIZE * scale,
            margin,
        }
    }

    pub fn update(&self, input: &InputModel) -> UiModel {
        let hovered = self
            .buttons
            .iter()
            .find(|b| b.rect.contains(input.pointer))
            .map(|b| b.kind);
        let clicked = if input.pointer_pressed { hovered } else { None };

        UiModel { hovered, clicked }
    }

    pub fn draw(&self, game: &GameState, model: &UiModel) {
        for button in &self.buttons {
            let fill = if model.hovered == Some(button.kind) {
                brighten(button.color)
            } else {
                button.color
            };
            draw_rectangle(
                button.rect.x,
                button.rect.y,
                button.rect.w,
                button.rect.h,
                fill,
            );
            draw_rectangle_lines(
                button.rect.x,
                button.rect.y,
                button.rect.w,
                button.rect.h,
                2.0,
                BLACK,
            );

            let center = get_text_center(button.label, None, self.font_size as u16, 1.0, 0.0);
            draw_text(
                button.label,
                button.rect.x + button.rect.w / 2.0 - center.x,
                button.rect.y + button.rect.h / 2.0 - center.y,
                self.font_size,
                BLACK,
            );
        }

        draw_text(
            &format!("Score: {}", game.score),
            self.margin,
            self.margin + self.font_size,
            self.font_size,
            BLACK,
        );

        match game.mode {
            RunMode::Stopped if game.game_over => self.draw_announcement(
                GAMEOVER_TEXT,
                Some(&format!("Final score: {}", game.score)),
            ),
            RunMode::Stopped => self.draw_announcement(START_TEXT, Some(START_HINT)),
            RunMode::Paused => self.draw_announcement(PAUSE_TEXT, None),
            RunMode::Running => (),
        }
    }

    fn draw_announcement(&self, text: &str, hint: Option<&str>) {
        draw_rectangle(
            0.0,
            0.0,
            self.viewport.w,
            self.viewport.h,
            BACKDROP_COLOR,
        );

        let main_size = self.font_size * 2.0;
        let center = get_text_center(text, None, main_size as u16, 1.0, 0.0);
        draw_text(
            text,
            self.viewport.w / 2.0 - center.x,
            self.viewport.h / 2.0 - center.y,
            main_size,
            WHITE,
        );

        let Some(hint) = hint else {
            return;
        };
        let center = get_text_center(hint, None, self.font_size as u16, 1.0, 0.0);
        draw_text(
            hint,
            self.viewport.w / 2.0 - center.x,
            self.viewport.h / 2.0 - center.y + main_size,
            self.font_size,
            WHITE,
        );
    }
}

fn brighten(color: Color) -> Color {
    Color::new(
        (color.r + 0.12).min(1.0),
        (color.g + 0.12).min(1.0),
        (color.b + 0.12).min(1.0),
        color.a,
    )
}
