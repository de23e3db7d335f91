//! Drawing with macroquad. Reads game state, never mutates it.

use macroquad::prelude::*;

use crate::game::{GameState, Grid, Position};
use crate::highscore::ScoreStore;
use crate::session::{Screen, Session};

const BACKGROUND: Color = Color::new(0.678, 0.8, 0.376, 1.0);
const FOREGROUND: Color = Color::new(0.169, 0.2, 0.094, 1.0);

const BORDER_GAP: f32 = 5.0;
const BORDER_THICKNESS: f32 = 5.0;

/// Draw whichever screen the session is on
pub fn draw<S: ScoreStore>(session: &Session<S>, food_texture: Option<&Texture2D>) {
    clear_background(BACKGROUND);
    let state = session.state();
    draw_border(state.grid());
    match session.screen() {
        Screen::Intro => draw_intro(state.grid()),
        Screen::Playing => draw_playing(state, food_texture),
    }
}

fn draw_border(grid: &Grid) {
    let edge = grid.offset() as f32 - BORDER_GAP;
    let side = grid.board_extent() + 2.0 * BORDER_GAP;
    draw_rectangle_lines(edge, edge, side, side, BORDER_THICKNESS, FOREGROUND);
}

/// Draw text with its top edge at `top` (macroquad places text by baseline)
fn text_from_top(text: &str, x: f32, top: f32, size: f32) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, x, top + dims.offset_y, size, FOREGROUND);
}

fn draw_intro(grid: &Grid) {
    let left = grid.offset() as f32 + 10.0;
    let middle = grid.offset() as f32 + grid.board_extent() / 2.0;
    text_from_top("Snake", left, middle - 150.0, 80.0);
    text_from_top("Press Enter to Start", left, middle - 10.0, 30.0);
    text_from_top("Press Esc to Exit", left, middle + 30.0, 30.0);
}

fn draw_playing(state: &GameState, food_texture: Option<&Texture2D>) {
    let grid = state.grid();
    let offset = grid.offset() as f32;
    let right = offset + grid.board_extent();

    text_from_top("Snake", offset - BORDER_GAP, 20.0, 40.0);

    let high_score = format!("High Score: {}", state.high_score());
    let dims = measure_text(&high_score, None, 30, 1.0);
    text_from_top(&high_score, right - dims.width, 25.0, 30.0);

    text_from_top(
        &state.score().to_string(),
        offset - BORDER_GAP,
        right + BORDER_GAP + 5.0,
        40.0,
    );

    draw_food(grid, state.food().position(), food_texture);
    for segment in state.snake().body() {
        draw_segment(grid, *segment);
    }
}

fn draw_food(grid: &Grid, pos: Position, texture: Option<&Texture2D>) {
    let (x, y) = grid.cell_origin(pos);
    let size = grid.cell_size() as f32;
    match texture {
        Some(texture) => draw_texture_ex(
            texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(size, size)),
                ..Default::default()
            },
        ),
        None => draw_circle(x + size / 2.0, y + size / 2.0, size * 0.4, FOREGROUND),
    }
}

fn draw_segment(grid: &Grid, pos: Position) {
    let (x, y) = grid.cell_origin(pos);
    let size = grid.cell_size() as f32;
    let inset = (size * 0.05).max(1.0);
    draw_rectangle(x + inset, y + inset, size - 2.0 * inset, size - 2.0 * inset, FOREGROUND);
}
