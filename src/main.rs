use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use lib_sim::{GameState, RunMode, Tuning, Viewport, TICKRATE};
use macroquad::prelude::*;

mod cli;
mod input;
mod render;
mod signal;
mod ui;

fn window_conf() -> Conf {
    Conf {
        window_title: "Blink Runner".to_owned(),
        high_dpi: true,
        window_width: 1280,
        window_height: 720,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    if let Err(e) = run().await {
        error!("driver exited with error: {e:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    set_max_level(STATIC_MAX_LEVEL);

    let args = cli::Args::parse();

    let viewport = Viewport::new(screen_width(), screen_height())?;
    let tuning = load_tuning(&args)?.scaled_to(viewport);
    info!("viewport {}x{}", viewport.w, viewport.h);

    // Warm-up happens entirely before the loop; inside it the source
    // is only ever polled.
    let mut source = signal::from_cli(&args);
    source.connect()?;
    source.start()?;
    signal::warm_up(source.as_mut(), Duration::from_secs(args.warmup));

    let mut game = GameState::new(tuning, viewport);
    let ui = ui::Ui::new(viewport);

    let mut fullscreen = window_conf().fullscreen;
    // Save old size as leaving fullscreen will give window a different size
    let old_size = (window_conf().window_width, window_conf().window_height);
    let mut accumulated_time = 0.0f32;

    info!("entering the frame loop");

    loop {
        let input = input::InputModel::capture();
        if input.quit_requested {
            info!("quit requested");
            break;
        }

        if input.fullscreen_toggle_requested {
            // NOTE: macroquad does not update window config when it goes fullscreen
            set_fullscreen(!fullscreen);
            if fullscreen {
                miniquad::window::set_window_size(old_size.0 as u32, old_size.1 as u32);
            }
            fullscreen = !fullscreen;
        }

        let ui_model = ui.update(&input);
        apply_mode_transition(&mut game, &ui_model);

        if input.reset_requested {
            game.reset();
        }
        if input.speed_up_requested {
            game.adjust_speed(-game.tuning.scroll_speed_step);
        }
        if input.speed_down_requested {
            game.adjust_speed(game.tuning.scroll_speed_step);
        }

        source.poll();
        if update_ticking(&mut accumulated_time, get_frame_time()) {
            game.tick(source.blink_strength());
        }

        render::draw(&game);
        ui.draw(&game, &ui_model);

        next_frame().await
    }

    Ok(())
}

fn apply_mode_transition(game: &mut GameState, ui_model: &ui::UiModel) {
    match game.mode {
        RunMode::Stopped if ui_model.start_requested() => {
            // A run that ended in a collision restarts from a
            // fresh world rather than an obstacle mid-field.
            if game.game_over {
                game.reset();
            }
            info!("starting the run");
            game.mode = RunMode::Running;
        }
        // Stop abandons a paused run too.
        RunMode::Running | RunMode::Paused if ui_model.stop_requested() => {
            info!("run stopped");
            game.reset();
        }
        RunMode::Running if ui_model.pause_requested() => {
            info!("pausing");
            game.mode = RunMode::Paused;
        }
        RunMode::Paused if ui_model.resume_requested() => {
            info!("resuming");
            game.mode = RunMode::Running;
        }
        _ => (),
    }
}

/// The presentation runs at whatever rate the display gives us; the
/// simulation advances in fixed [TICKRATE] steps through this
/// accumulator, zero or one per frame.
fn update_ticking(accumulated_time: &mut f32, real_dt: f32) -> bool {
    *accumulated_time += real_dt;
    if *accumulated_time >= 2.0 * TICKRATE {
        warn!(
            "LAG by {:.2}ms",
            (*accumulated_time - 2.0 * TICKRATE) * 1000.0
        );
        *accumulated_time = 0.0;
        false
    } else if *accumulated_time >= TICKRATE {
        *accumulated_time -= TICKRATE;
        true
    } else {
        false
    }
}

fn load_tuning(args: &cli::Args) -> anyhow::Result<Tuning> {
    let Some(path) = &args.tuning else {
        return Ok(Tuning::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading tuning file {}", path.display()))?;
    let tuning = ron::from_str(&text)
        .with_context(|| format!("parsing tuning file {}", path.display()))?;
    info!("tuning loaded from {}", path.display());
    Ok(tuning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{ButtonKind, UiModel};

    fn fresh_game() -> GameState {
        let viewport = Viewport::new(800.0, 400.0).unwrap();
        GameState::new(Tuning::default(), viewport)
    }

    #[test]
    fn start_begins_a_run() {
        let mut game = fresh_game();

        apply_mode_transition(&mut game, &UiModel::with_click(ButtonKind::Start));

        assert_eq!(game.mode, RunMode::Running);
    }

    #[test]
    fn start_after_a_collision_resets_first() {
        let mut game = fresh_game();
        game.mode = RunMode::Running;
        for _ in 0..5 {
            game.tick(0.0);
        }
        game.mode = RunMode::Stopped;
        game.game_over = true;

        apply_mode_transition(&mut game, &UiModel::with_click(ButtonKind::Start));

        assert_eq!(game.mode, RunMode::Running);
        assert_eq!(game.score, 0);
        assert!(!game.game_over);
    }

    #[test]
    fn pause_and_resume_round_trip() {
        let mut game = fresh_game();
        game.mode = RunMode::Running;

        apply_mode_transition(&mut game, &UiModel::with_click(ButtonKind::Pause));
        assert_eq!(game.mode, RunMode::Paused);

        apply_mode_transition(&mut game, &UiModel::with_click(ButtonKind::Resume));
        assert_eq!(game.mode, RunMode::Running);
    }

    #[test]
    fn stop_resets_a_running_run() {
        let mut game = fresh_game();
        game.mode = RunMode::Running;
        for _ in 0..5 {
            game.tick(0.0);
        }

        apply_mode_transition(&mut game, &UiModel::with_click(ButtonKind::Stop));

        assert_eq!(game.mode, RunMode::Stopped);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn stop_resets_a_paused_run() {
        let mut game = fresh_game();
        game.mode = RunMode::Running;
        for _ in 0..5 {
            game.tick(0.0);
        }
        game.mode = RunMode::Paused;

        apply_mode_transition(&mut game, &UiModel::with_click(ButtonKind::Stop));

        assert_eq!(game.mode, RunMode::Stopped);
        assert_eq!(game.score, 0);
        assert_eq!(game.obstacles.len(), 1);
    }

    #[test]
    fn off_mode_clicks_are_ignored() {
        let mut game = fresh_game();

        // Stopped world: only Start does anything.
        apply_mode_transition(&mut game, &UiModel::with_click(ButtonKind::Pause));
        apply_mode_transition(&mut game, &UiModel::with_click(ButtonKind::Resume));
        apply_mode_transition(&mut game, &UiModel::with_click(ButtonKind::Stop));
        assert_eq!(game.mode, RunMode::Stopped);

        // Paused world: Resume and Stop work, Start and Pause do not.
        game.mode = RunMode::Paused;
        apply_mode_transition(&mut game, &UiModel::with_click(ButtonKind::Start));
        assert_eq!(game.mode, RunMode::Paused);
        apply_mode_transition(&mut game, &UiModel::with_click(ButtonKind::Pause));
        assert_eq!(game.mode, RunMode::Paused);
    }
}
