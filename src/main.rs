//! Star Duel entry point
//!
//! Loads settings and assets, then hands control to the game loop.

use std::path::Path;

use macroquad::window::Conf;

use star_duel::GameConfig;
use star_duel::Settings;
use star_duel::audio::{AudioManager, Volume};
use star_duel::consts::{HEIGHT, WIDTH};
use star_duel::driver::{Driver, Io};
use star_duel::platform::native::{FrameClock, MacroquadInput};
use star_duel::renderer::{MacroquadSurface, Textures};

fn window_conf() -> Conf {
    Conf {
        window_title: "Star Duel".to_owned(),
        window_width: WIDTH,
        window_height: HEIGHT,
        window_resizable: false,
        fullscreen: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Star Duel starting...");

    if let Err(err) = run().await {
        log::error!("{err:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let settings = Settings::load(Path::new(Settings::FILE_NAME))?;
    let config = GameConfig::default();

    // Everything must load before the first tick
    let textures = Textures::load(&settings.asset_dir).await?;
    let audio = AudioManager::load(&settings.asset_dir, Volume::from_settings(&settings)).await?;

    let mut surface = MacroquadSurface::new(textures, &config);
    let mut input = MacroquadInput::new();
    let mut clock = FrameClock::new();

    let mut io = Io {
        surface: &mut surface,
        audio: &audio,
        input: &mut input,
        clock: &mut clock,
    };
    let mut driver = Driver::new(&config);
    driver.run(&mut io).await
}
