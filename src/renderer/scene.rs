//! Frame layout: what goes where on the surface

use glam::IVec2;

use crate::config::GameConfig;
use crate::platform::{RenderSurface, Rgb, Sprite, TextStyle};
use crate::sim::{Round, Side};

/// Gap between HUD text and the window edges
const HUD_PADDING: i32 = 10;

/// Projectile colour for a side
pub fn projectile_color(side: Side) -> Rgb {
    match side {
        Side::Yellow => Rgb::YELLOW,
        Side::Red => Rgb::RED,
    }
}

fn ship_sprite(side: Side) -> Sprite {
    match side {
        Side::Yellow => Sprite::YellowShip,
        Side::Red => Sprite::RedShip,
    }
}

/// Draw the playfield, both ships, projectiles and health counters
pub fn draw_round<S: RenderSurface>(surface: &mut S, round: &Round, config: &GameConfig) {
    surface.clear();
    surface.draw_sprite(Sprite::Background, IVec2::ZERO);
    surface.draw_rect(config.divider(), Rgb::BLACK);

    for side in Side::ALL {
        let ship = round.ship(side);
        surface.draw_sprite(ship_sprite(side), ship.pos());
    }

    for side in Side::ALL {
        for projectile in round.projectiles(side) {
            surface.draw_rect(projectile.rect, projectile_color(side));
        }
    }

    let yellow_text = format!("Health: {}", round.health(Side::Yellow));
    surface.draw_text(
        &yellow_text,
        IVec2::new(HUD_PADDING, HUD_PADDING),
        TextStyle::Hud,
    );

    let red_text = format!("Health: {}", round.health(Side::Red));
    let red_size = surface.measure_text(&red_text, TextStyle::Hud);
    surface.draw_text(
        &red_text,
        IVec2::new(config.width - red_size.x - HUD_PADDING, HUD_PADDING),
        TextStyle::Hud,
    );
}

/// Overlay the winner banner, centred, with the session tally below it
pub fn draw_winner<S: RenderSurface>(
    surface: &mut S,
    message: &str,
    tally: &str,
    config: &GameConfig,
) {
    let banner = surface.measure_text(message, TextStyle::Banner);
    let banner_pos = IVec2::new(
        config.width / 2 - banner.x / 2,
        config.height / 2 - banner.y / 2,
    );
    surface.draw_text(message, banner_pos, TextStyle::Banner);

    let line = surface.measure_text(tally, TextStyle::Hud);
    surface.draw_text(
        tally,
        IVec2::new(config.width / 2 - line.x / 2, banner_pos.y + banner.y + HUD_PADDING),
        TextStyle::Hud,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Projectile;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        Rect(crate::sim::Rect, Rgb),
        Sprite(Sprite, IVec2),
        Text(String, IVec2, TextStyle),
    }

    /// Records draw calls; every glyph is 10x20
    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
    }

    impl RenderSurface for Recorder {
        fn clear(&mut self) {
            self.calls.push(Call::Clear);
        }
        fn draw_rect(&mut self, rect: crate::sim::Rect, color: Rgb) {
            self.calls.push(Call::Rect(rect, color));
        }
        fn draw_sprite(&mut self, sprite: Sprite, pos: IVec2) {
            self.calls.push(Call::Sprite(sprite, pos));
        }
        fn draw_text(&mut self, text: &str, pos: IVec2, style: TextStyle) {
            self.calls.push(Call::Text(text.to_string(), pos, style));
        }
        fn measure_text(&self, text: &str, _style: TextStyle) -> IVec2 {
            IVec2::new(text.len() as i32 * 10, 20)
        }
        async fn present(&mut self) -> anyhow::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_draw_round_layout() {
        let config = GameConfig::default();
        let mut round = Round::new(&config);
        round.red.health = 7;
        round
            .red_projectiles
            .push(Projectile::new(Side::Red, IVec2::new(400, 200), config.projectile_size));

        let mut surface = Recorder::default();
        draw_round(&mut surface, &round, &config);

        assert_eq!(surface.calls[0], Call::Clear);
        assert_eq!(surface.calls[1], Call::Sprite(Sprite::Background, IVec2::ZERO));
        assert_eq!(surface.calls[2], Call::Rect(config.divider(), Rgb::BLACK));
        assert!(surface.calls.contains(&Call::Sprite(Sprite::YellowShip, IVec2::new(100, 300))));
        assert!(surface.calls.contains(&Call::Sprite(Sprite::RedShip, IVec2::new(700, 300))));
        assert!(surface.calls.contains(&Call::Rect(
            crate::sim::Rect::new(400, 200, 10, 5),
            Rgb::RED
        )));
        assert!(surface.calls.contains(&Call::Text(
            "Health: 20".to_string(),
            IVec2::new(10, 10),
            TextStyle::Hud
        )));
        // "Health: 7" is 9 glyphs wide, right-aligned 10px from the edge
        assert!(surface.calls.contains(&Call::Text(
            "Health: 7".to_string(),
            IVec2::new(900 - 90 - 10, 10),
            TextStyle::Hud
        )));
    }

    #[test]
    fn test_winner_banner_is_centred() {
        let config = GameConfig::default();
        let mut surface = Recorder::default();
        draw_winner(&mut surface, "Red Wins", "Yellow 0 - 1 Red", &config);

        assert_eq!(
            surface.calls[0],
            Call::Text("Red Wins".to_string(), IVec2::new(410, 240), TextStyle::Banner)
        );
        assert_eq!(
            surface.calls[1],
            Call::Text(
                "Yellow 0 - 1 Red".to_string(),
                IVec2::new(370, 270),
                TextStyle::Hud
            )
        );
    }
}
