//! macroquad implementation of `RenderSurface`

use std::f32::consts::FRAC_PI_2;
use std::path::Path;

use anyhow::anyhow;
use glam::IVec2;
use macroquad::color::Color;
use macroquad::math::{Vec2, vec2};
use macroquad::shapes::draw_rectangle;
use macroquad::text::{draw_text, measure_text};
use macroquad::texture::{DrawTextureParams, Texture2D, draw_texture_ex, load_texture};
use macroquad::window::{clear_background, next_frame};

use crate::config::GameConfig;
use crate::platform::{RenderSurface, Rgb, Sprite, TextStyle};
use crate::sim::Rect;

/// Images loaded once at startup
pub struct Textures {
    background: Texture2D,
    yellow_ship: Texture2D,
    red_ship: Texture2D,
}

impl Textures {
    pub const BACKGROUND: &'static str = "space.png";
    pub const YELLOW_SHIP: &'static str = "spaceship_yellow.png";
    pub const RED_SHIP: &'static str = "spaceship_red.png";

    pub async fn load(asset_dir: &Path) -> anyhow::Result<Self> {
        let textures = Self {
            background: load_image(asset_dir, Self::BACKGROUND).await?,
            yellow_ship: load_image(asset_dir, Self::YELLOW_SHIP).await?,
            red_ship: load_image(asset_dir, Self::RED_SHIP).await?,
        };
        log::info!("Loaded textures from {}", asset_dir.display());
        Ok(textures)
    }
}

async fn load_image(asset_dir: &Path, name: &str) -> anyhow::Result<Texture2D> {
    let path = asset_dir.join(name);
    let path = path.to_string_lossy();
    load_texture(&path)
        .await
        .map_err(|err| anyhow!("failed to load image {path}: {err:?}"))
}

fn to_color(rgb: Rgb) -> Color {
    Color::from_rgba(rgb.0, rgb.1, rgb.2, 255)
}

fn font_size(style: TextStyle) -> u16 {
    match style {
        TextStyle::Hud => 40,
        TextStyle::Banner => 100,
    }
}

/// Unrotated draw origin and size for an image turned a quarter turn about its
/// centre, so that the turned image covers exactly `size` at `pos`.
fn quarter_turn_placement(pos: IVec2, size: IVec2) -> (Vec2, Vec2) {
    let (w, h) = (size.x as f32, size.y as f32);
    let origin = vec2(pos.x as f32 + (w - h) / 2.0, pos.y as f32 + (h - w) / 2.0);
    (origin, vec2(h, w))
}

/// Draws to the macroquad window
pub struct MacroquadSurface {
    textures: Textures,
    playfield: IVec2,
    ship_size: IVec2,
}

impl MacroquadSurface {
    pub fn new(textures: Textures, config: &GameConfig) -> Self {
        Self {
            textures,
            playfield: IVec2::new(config.width, config.height),
            ship_size: config.ship_size,
        }
    }
}

impl RenderSurface for MacroquadSurface {
    fn clear(&mut self) {
        clear_background(to_color(Rgb::WHITE));
    }

    fn draw_rect(&mut self, rect: Rect, color: Rgb) {
        draw_rectangle(
            rect.left() as f32,
            rect.top() as f32,
            rect.width() as f32,
            rect.height() as f32,
            to_color(color),
        );
    }

    fn draw_sprite(&mut self, sprite: Sprite, pos: IVec2) {
        let (texture, origin, dest_size, rotation) = match sprite {
            Sprite::Background => (
                &self.textures.background,
                vec2(pos.x as f32, pos.y as f32),
                vec2(self.playfield.x as f32, self.playfield.y as f32),
                0.0,
            ),
            // Ship art faces up; turn it toward the opponent
            Sprite::YellowShip => {
                let (origin, dest_size) = quarter_turn_placement(pos, self.ship_size);
                (&self.textures.yellow_ship, origin, dest_size, FRAC_PI_2)
            }
            Sprite::RedShip => {
                let (origin, dest_size) = quarter_turn_placement(pos, self.ship_size);
                (&self.textures.red_ship, origin, dest_size, -FRAC_PI_2)
            }
        };

        draw_texture_ex(
            texture,
            origin.x,
            origin.y,
            to_color(Rgb::WHITE),
            DrawTextureParams {
                dest_size: Some(dest_size),
                rotation,
                ..Default::default()
            },
        );
    }

    fn draw_text(&mut self, text: &str, pos: IVec2, style: TextStyle) {
        let size = font_size(style);
        let dims = measure_text(text, None, size, 1.0);
        // macroquad positions text by its baseline
        draw_text(
            text,
            pos.x as f32,
            pos.y as f32 + dims.offset_y,
            f32::from(size),
            to_color(Rgb::WHITE),
        );
    }

    fn measure_text(&self, text: &str, style: TextStyle) -> IVec2 {
        let dims = measure_text(text, None, font_size(style), 1.0);
        IVec2::new(dims.width.round() as i32, dims.height.round() as i32)
    }

    async fn present(&mut self) -> anyhow::Result<()> {
        next_frame().await;
        Ok(())
    }
}
