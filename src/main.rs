use std::path::Path;

use macroquad::input::{KeyCode, is_key_pressed};
use macroquad::time::get_time;
use macroquad::window::{Conf, next_frame, request_new_screen_size};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use snake_pc::assets::Assets;
use snake_pc::config::CONFIG_FILE;
use snake_pc::game::Direction;
use snake_pc::highscore::HighScoreFile;
use snake_pc::render;
use snake_pc::session::{Flow, Input, Session};
use snake_pc::{GameConfig, GameError};

fn window_conf() -> Conf {
    let (width, height) = GameConfig::default().grid().window_size();
    Conf {
        window_title: "Snake - PC Edition".to_owned(),
        window_width: width as i32,
        window_height: height as i32,
        window_resizable: false,
        ..Default::default()
    }
}

/// Keys pressed this frame, in the order the game applies them
fn read_inputs() -> Vec<Input> {
    let mut inputs = Vec::new();
    if is_key_pressed(KeyCode::Enter) {
        inputs.push(Input::Start);
    }
    if is_key_pressed(KeyCode::Escape) {
        inputs.push(Input::Quit);
    }
    let arrows = [
        (KeyCode::Up, Direction::Up),
        (KeyCode::Down, Direction::Down),
        (KeyCode::Left, Direction::Left),
        (KeyCode::Right, Direction::Right),
    ];
    for (key, direction) in arrows {
        if is_key_pressed(key) {
            inputs.push(Input::Steer(direction));
        }
    }
    inputs
}

async fn run() -> Result<(), GameError> {
    let config = GameConfig::load(Path::new(CONFIG_FILE))?;
    let grid = config.grid();
    let (width, height) = grid.window_size();
    request_new_screen_size(width, height);

    let mut assets = Assets::load(&config).await?;
    let store = HighScoreFile::new(&config.high_score_path);
    let mut session = Session::start(grid, config.tick_interval, store, StdRng::from_entropy());
    info!(
        cells = grid.cell_count(),
        tick_interval = config.tick_interval,
        "Snake ready"
    );

    loop {
        let inputs = read_inputs();
        if session.frame(get_time(), &inputs, &mut assets.sounds) == Flow::Exit {
            break;
        }
        render::draw(&session, assets.food_texture.as_ref());
        next_frame().await;
    }

    info!("Bye");
    Ok(())
}

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "snake_pc=info".into()))
        .init();

    if let Err(err) = run().await {
        error!("{err}");
        std::process::exit(1);
    }
}
