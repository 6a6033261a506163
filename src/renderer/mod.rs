//! Canvas2D render pipeline
//!
//! Pure read of the session state: background, night sky, clouds, tiled
//! ground track, runner, obstacles, HUD text, and the game-over overlay.
//! Sprites that failed to load arrive as placeholders and are drawn through
//! the same path, so nothing here cares whether an asset exists.

use web_sys::CanvasRenderingContext2d;

use crate::assets::{AssetKey, AssetStore, Sprite, cactus_asset};
use crate::config::GameConfig;
use crate::consts::*;
use crate::sim::{GameState, ObstacleKind, Rect, RunnerPose, SessionPhase};

const DAY_BG: &str = "#f7f7f7";
const NIGHT_BG: &str = "#262626";
const DAY_INK: &str = "#535353";
const NIGHT_INK: &str = "#ffffff";
const MILESTONE_INK: &str = "#ff5722";
const STAR_INK: &str = "#ffffff";
const MOON_INK: &str = "#ffffff";
const MOON_CRATER_INK: &str = "#e7e7e7";
const HUD_FONT: &str = "bold 14px monospace";

/// Where the restart control sits on the terminal overlay, for hit-testing
/// taps/clicks. Uses the catalog dimensions so it matches the drawn sprite
/// even when the real image failed to load.
pub fn reset_button_rect(width: f32, height: f32) -> Rect {
    let (w, h) = AssetKey::Reset.placeholder_size();
    Rect::new(width / 2.0 - w / 2.0, height / 2.0 + 10.0, w, h)
}

pub struct Renderer {
    ctx: CanvasRenderingContext2d,
    assets: AssetStore,
}

impl Renderer {
    pub fn new(ctx: CanvasRenderingContext2d, assets: AssetStore) -> Self {
        Self { ctx, assets }
    }

    /// Draw one complete frame of the given state
    pub fn render(&self, state: &GameState, config: &GameConfig, best: u32) {
        let w = state.width as f64;
        let h = state.height as f64;

        self.ctx
            .set_fill_style_str(if state.night { NIGHT_BG } else { DAY_BG });
        self.ctx.fill_rect(0.0, 0.0, w, h);

        self.draw_sky(state);
        self.draw_clouds(state);
        self.draw_track(state);
        self.draw_runner(state);
        self.draw_obstacles(state);
        self.draw_hud(state, config, best);

        if state.phase == SessionPhase::Over {
            self.draw_overlay(state);
        }
    }

    /// Draw a sprite or its placeholder; the distinction never escapes here
    fn draw_sprite(&self, key: AssetKey, x: f64, y: f64, w: f64, h: f64) {
        match self.assets.get(key) {
            Sprite::Image(img) => {
                let _ = self
                    .ctx
                    .draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h);
            }
            Sprite::Placeholder { color, .. } => {
                self.ctx.set_fill_style_str(color);
                self.ctx.fill_rect(x, y, w, h);
            }
        }
    }

    /// Stars and moon, present only while night mode is active
    fn draw_sky(&self, state: &GameState) {
        if !state.night {
            return;
        }

        self.ctx.set_fill_style_str(STAR_INK);
        for star in &state.stars {
            if star.visible {
                self.ctx.fill_rect(
                    star.pos.x as f64,
                    star.pos.y as f64,
                    STAR_SIZE as f64,
                    STAR_SIZE as f64,
                );
            }
        }

        if let Some(moon) = &state.moon {
            let (x, y, r) = (moon.pos.x as f64, moon.pos.y as f64, moon.radius as f64);
            self.ctx.set_fill_style_str(MOON_INK);
            self.ctx.begin_path();
            let _ = self.ctx.arc(x, y, r, 0.0, std::f64::consts::TAU);
            self.ctx.fill();

            self.ctx.set_fill_style_str(MOON_CRATER_INK);
            self.ctx.begin_path();
            let _ = self.ctx.arc(x + 5.0, y - 5.0, r / 3.0, 0.0, std::f64::consts::TAU);
            self.ctx.fill();
        }
    }

    fn draw_clouds(&self, state: &GameState) {
        for cloud in &state.clouds {
            self.draw_sprite(
                AssetKey::Cloud,
                cloud.pos.x as f64,
                cloud.pos.y as f64,
                CLOUD_WIDTH as f64,
                CLOUD_HEIGHT as f64,
            );
        }
    }

    /// Tile the track texture across the viewport, shifted by the
    /// accumulated scroll offset. Tiles draw at the texture's natural
    /// width so a wide texture isn't squashed into one period.
    fn draw_track(&self, state: &GameState) {
        let (nat_w, nat_h) = self.assets.get(AssetKey::Track).size();
        let tile_w = nat_w.max(1.0) as f64;
        let tile_h = nat_h.max(1.0) as f64;
        let ground = state.ground_y() as f64;

        let mut x = -(state.track_offset as f64 % tile_w);
        while x < state.width as f64 {
            self.draw_sprite(AssetKey::Track, x, ground, tile_w, tile_h);
            x += tile_w;
        }
    }

    /// Sprite priority: dead, then airborne, then ducking, then run frame
    fn draw_runner(&self, state: &GameState) {
        let runner = &state.runner;
        let key = match state.phase {
            SessionPhase::Over => AssetKey::RunnerDead,
            SessionPhase::Ready => AssetKey::RunnerIdle,
            SessionPhase::Running => match runner.pose {
                RunnerPose::Airborne { .. } => AssetKey::RunnerJump,
                RunnerPose::Ducking => {
                    if runner.anim_frame == 0 {
                        AssetKey::RunnerDuck1
                    } else {
                        AssetKey::RunnerDuck2
                    }
                }
                RunnerPose::Running => {
                    if runner.anim_frame == 0 {
                        AssetKey::RunnerRun1
                    } else {
                        AssetKey::RunnerRun2
                    }
                }
            },
        };

        self.draw_sprite(
            key,
            RUNNER_X as f64,
            (state.ground_y() - runner.height() - runner.rise()) as f64,
            runner.width() as f64,
            runner.height() as f64,
        );
    }

    fn draw_obstacles(&self, state: &GameState) {
        for obstacle in &state.obstacles {
            let key = match obstacle.kind {
                ObstacleKind::Cactus { variant } => cactus_asset(variant),
                ObstacleKind::Bird { anim_frame, .. } => {
                    if anim_frame == 0 {
                        AssetKey::Bird1
                    } else {
                        AssetKey::Bird2
                    }
                }
            };
            self.draw_sprite(
                key,
                obstacle.pos.x as f64,
                obstacle.pos.y as f64,
                obstacle.size.x as f64,
                obstacle.size.y as f64,
            );
        }
    }

    /// Score (right), local best (left), tournament banner (center)
    fn draw_hud(&self, state: &GameState, config: &GameConfig, best: u32) {
        let flash_on = state.milestone_active() && state.milestone_flash % 4 < 2;
        let ink = if flash_on {
            MILESTONE_INK
        } else if state.night {
            NIGHT_INK
        } else {
            DAY_INK
        };
        self.ctx.set_fill_style_str(ink);
        self.ctx.set_font(HUD_FONT);

        self.ctx.set_text_align("right");
        let score_text = if config.booster_active() {
            format!("{} x{}", state.score, config.booster_multiplier)
        } else {
            state.score.to_string()
        };
        let _ = self
            .ctx
            .fill_text(&score_text, state.width as f64 - 10.0, 20.0);

        if best > 0 {
            self.ctx.set_text_align("left");
            let _ = self.ctx.fill_text(&format!("HI {best}"), 10.0, 20.0);
        }

        if let Some(tournament) = config.tournament {
            self.ctx.set_text_align("center");
            let _ = self
                .ctx
                .fill_text(tournament.label(), state.width as f64 / 2.0, 20.0);
        }
    }

    /// Terminal overlay: game-over banner plus the restart control
    fn draw_overlay(&self, state: &GameState) {
        let w = state.width as f64;
        let h = state.height as f64;

        let (gw, gh) = self.assets.get(AssetKey::GameOver).size();
        self.draw_sprite(
            AssetKey::GameOver,
            w / 2.0 - gw as f64 / 2.0,
            h / 2.0 - 50.0,
            gw as f64,
            gh as f64,
        );

        let button = reset_button_rect(state.width, state.height);
        self.draw_sprite(
            AssetKey::Reset,
            button.min.x as f64,
            button.min.y as f64,
            button.size.x as f64,
            button.size.y as f64,
        );
    }
}
