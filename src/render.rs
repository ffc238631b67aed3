use lib_sim::GameState;
use macroquad::prelude::*;

const PLAYER_COLOR: Color = Color::from_rgba(255, 255, 0, 255);
const OBSTACLE_COLOR: Color = Color::from_rgba(0, 0, 255, 255);
const GROUND_COLOR: Color = Color::from_rgba(128, 128, 128, 255);

/// Draw the scene. Everything is rectangles; the ui module layers the
/// buttons and text on top.
pub fn draw(game: &GameState) {
    clear_background(WHITE);

    draw_line(
        0.0,
        game.viewport.h - 1.0,
        game.viewport.w,
        game.viewport.h - 1.0,
        2.0,
        GROUND_COLOR,
    );

    let tuning = &game.tuning;
    draw_rectangle(
        game.player.pos.x,
        game.player.pos.y,
        tuning.player_size.x,
        tuning.player_size.y,
        PLAYER_COLOR,
    );

    for obstacle in &game.obstacles {
        draw_rectangle(
            obstacle.pos.x,
            obstacle.pos.y,
            tuning.obstacle_size.x,
            tuning.obstacle_size.y,
            OBSTACLE_COLOR,
        );
    }
}
