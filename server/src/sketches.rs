//! Server-rendered sketches, one SVG per request.

use actix_web::{HttpResponse, web};
use atelier_core::sketch::{CloudField, FlowerField, HexGrid, IsoCubes, PixelBoxGrid};
use atelier_core::{Difficulty, GameSession, StartTile, Theme};
use atelier_protocol::WeatherReport;
use serde::Deserialize;
use std::str::FromStr;

use crate::{AppState, ServerError, svg};

/// Response header carrying the seed a sketch was drawn with.
pub const SEED_HEADER: &str = "x-sketch-seed";

const HEX_COLS: u16 = 12;
const HEX_ROWS: u16 = 9;
const HEX_RADIUS: f32 = 20.0;
const ISO_SIZE: u8 = 8;
const ISO_MAX_HEIGHT: u8 = 4;
const BOX_GRID: u16 = 40;
const BOX_LIMIT: usize = 200;
const FLOWER_COUNT: usize = 9;
const MEADOW_WIDTH: f32 = 480.0;
const MEADOW_HEIGHT: f32 = 320.0;
const CLOUD_WIDTH: f32 = 640.0;
const CLOUD_HEIGHT: f32 = 360.0;
/// Cloud cover used when neither the query nor the weather report has one.
const FALLBACK_COVER: f32 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SketchKind {
    Hex,
    Iso,
    Boxes,
    Flowers,
    Clouds,
    Minesweeper,
}

impl FromStr for SketchKind {
    type Err = ServerError;

    /// Parses a file name such as `hex.svg`.
    fn from_str(file: &str) -> Result<Self, Self::Err> {
        use SketchKind::*;
        match file.strip_suffix(".svg") {
            Some("hex") => Ok(Hex),
            Some("iso") => Ok(Iso),
            Some("boxes") => Ok(Boxes),
            Some("flowers") => Ok(Flowers),
            Some("clouds") => Ok(Clouds),
            Some("minesweeper") => Ok(Minesweeper),
            _ => Err(ServerError::UnknownSketch(file.to_owned())),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SketchQuery {
    pub seed: Option<u64>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Cloud cover percentage overriding the live weather.
    pub cover: Option<f32>,
}

pub async fn get_sketch(
    state: web::Data<AppState>,
    file: web::Path<String>,
    query: web::Query<SketchQuery>,
) -> Result<HttpResponse, ServerError> {
    let kind: SketchKind = file.parse()?;
    let query = query.into_inner();
    let seed = query.seed.unwrap_or_else(rand::random);
    let palette = query.theme.palette();
    log::debug!("rendering {kind:?} seed={seed} theme={:?}", query.theme);

    let body = match kind {
        SketchKind::Hex => svg::hex(&HexGrid::new(HEX_COLS, HEX_ROWS, HEX_RADIUS), palette),
        SketchKind::Iso => {
            let cubes = IsoCubes::random(ISO_SIZE, ISO_SIZE, ISO_MAX_HEIGHT, seed);
            svg::iso(&cubes, palette)
        }
        SketchKind::Boxes => {
            let mut grid = PixelBoxGrid::new(BOX_GRID, BOX_GRID, 1..=6, seed)?;
            grid.fill(BOX_LIMIT);
            svg::boxes(&grid, palette)
        }
        SketchKind::Flowers => {
            let field = FlowerField::new(MEADOW_WIDTH, MEADOW_HEIGHT, FLOWER_COUNT, seed)?;
            svg::flowers(&field, palette)
        }
        SketchKind::Clouds => {
            let (cover, report) = match query.cover {
                Some(cover) => (cover, WeatherReport::unavailable()),
                None => {
                    let report = state.weather.report().await;
                    let cover = report.mean_cloud_cover().unwrap_or(FALLBACK_COVER);
                    (cover, report)
                }
            };
            let field = CloudField::new(CLOUD_WIDTH, CLOUD_HEIGHT, cover, seed);
            svg::clouds(&field, &report, palette)
        }
        SketchKind::Minesweeper => {
            let bounds = query.difficulty.config().bounds;
            let center = (
                (bounds.min.0 + bounds.max.0) / 2,
                (bounds.min.1 + bounds.max.1) / 2,
            );
            let mut session = GameSession::with_difficulty(query.difficulty, query.theme, seed)?
                .with_start_tile(StartTile::SimpleSafe(center))?;
            session.reveal(center)?;
            svg::board(session.engine(), palette)
        }
    };

    Ok(HttpResponse::Ok()
        .content_type("image/svg+xml")
        .insert_header((SEED_HEADER, seed.to_string()))
        .body(body))
}
