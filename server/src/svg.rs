//! SVG rendering of the sketches and the Minesweeper board.

use atelier_core::sketch::{
    CloudField, FlowerField, HexGrid, IsoCubes, PixelBoxGrid, Point, hex_distance,
};
use atelier_core::{Palette, PlayEngine};
use atelier_protocol::WeatherReport;
use std::fmt::Write as _;
use xmlwriter::{Indent, Options, XmlWriter};

/// Pixel size of one pixel-box cell.
pub const BOX_CELL: f32 = 12.0;
/// Pixel size of one Minesweeper tile.
pub const BOARD_TILE: f32 = 24.0;
/// Edge of one isometric cube.
pub const ISO_TILE: f32 = 18.0;

fn document(width: f32, height: f32, palette: &Palette) -> XmlWriter {
    let mut w = XmlWriter::new(Options {
        indent: Indent::None,
        attributes_indent: Indent::None,
        ..Options::default()
    });
    w.start_element("svg");
    w.write_attribute("xmlns", "http://www.w3.org/2000/svg");
    w.write_attribute_fmt("viewBox", format_args!("0 0 {width} {height}"));
    w.write_attribute("width", &width);
    w.write_attribute("height", &height);
    rect(&mut w, Point::new(0.0, 0.0), width, height, palette.background);
    w
}

fn points(points: &[Point]) -> String {
    let mut out = String::new();
    for (i, p) in points.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        // writing to a String cannot fail
        let _ = write!(out, "{:.2},{:.2}", p.x, p.y);
    }
    out
}

fn polygon(w: &mut XmlWriter, corners: &[Point], fill: &str, stroke: &str) {
    w.start_element("polygon");
    w.write_attribute("points", &points(corners));
    w.write_attribute("fill", fill);
    w.write_attribute("stroke", stroke);
    w.end_element();
}

fn rect(w: &mut XmlWriter, at: Point, width: f32, height: f32, fill: &str) {
    w.start_element("rect");
    w.write_attribute("x", &at.x);
    w.write_attribute("y", &at.y);
    w.write_attribute("width", &width);
    w.write_attribute("height", &height);
    w.write_attribute("fill", fill);
    w.end_element();
}

fn text(w: &mut XmlWriter, at: Point, size: f32, fill: &str, content: &str) {
    w.start_element("text");
    w.write_attribute("x", &at.x);
    w.write_attribute("y", &at.y);
    w.write_attribute("font-size", &size);
    w.write_attribute("text-anchor", "middle");
    w.write_attribute("dominant-baseline", "central");
    w.write_attribute("fill", fill);
    w.write_text(content);
    w.end_element();
}

/// Hexagons coloured in rings around the first cell.
pub fn hex(grid: &HexGrid, palette: &Palette) -> String {
    let (width, height) = grid.extent();
    let mut w = document(width, height, palette);
    let cells = grid.cells();
    let origin = cells.first().map(|cell| (cell.q, cell.r)).unwrap_or_default();
    for cell in &cells {
        let ring = hex_distance(origin, (cell.q, cell.r)) as usize;
        polygon(
            &mut w,
            &grid.corners(cell.center),
            palette.accent(ring),
            palette.stroke,
        );
    }
    w.end_document()
}

pub fn iso(cubes: &IsoCubes, palette: &Palette) -> String {
    let ((width, height), origin) = cubes.layout(ISO_TILE);
    let mut w = document(width, height, palette);
    for cube in cubes.cubes() {
        let faces = IsoCubes::faces(cube, ISO_TILE, origin);
        polygon(&mut w, &faces.left, palette.accent(1), palette.stroke);
        polygon(&mut w, &faces.right, palette.accent(2), palette.stroke);
        polygon(&mut w, &faces.top, palette.accent(0), palette.stroke);
    }
    w.end_document()
}

pub fn boxes(grid: &PixelBoxGrid, palette: &Palette) -> String {
    let width = f32::from(grid.width()) * BOX_CELL;
    let height = f32::from(grid.height()) * BOX_CELL;
    let mut w = document(width, height, palette);
    for (i, b) in grid.boxes().iter().enumerate() {
        rect(
            &mut w,
            Point::new(f32::from(b.x) * BOX_CELL, f32::from(b.y) * BOX_CELL),
            f32::from(b.w) * BOX_CELL,
            f32::from(b.h) * BOX_CELL,
            palette.accent(i),
        );
    }
    w.end_document()
}

/// Petals as closed pairs of quadratic curves, a round core on top.
pub fn flowers(field: &FlowerField, palette: &Palette) -> String {
    let (width, height) = field.size();
    let mut w = document(width, height, palette);
    for (i, flower) in field.flowers().iter().enumerate() {
        for petal in &flower.petals {
            let (b, l, t, r) = (petal.base, petal.left, petal.tip, petal.right);
            w.start_element("path");
            w.write_attribute_fmt(
                "d",
                format_args!(
                    "M{:.2},{:.2} Q{:.2},{:.2} {:.2},{:.2} Q{:.2},{:.2} {:.2},{:.2} Z",
                    b.x, b.y, l.x, l.y, t.x, t.y, r.x, r.y, b.x, b.y
                ),
            );
            w.write_attribute("fill", palette.accent(i));
            w.write_attribute("stroke", palette.stroke);
            w.end_element();
        }
        w.start_element("circle");
        w.write_attribute("cx", &flower.center.x);
        w.write_attribute("cy", &flower.center.y);
        w.write_attribute("r", &flower.core_radius);
        w.write_attribute("fill", palette.accent(i + 1));
        w.end_element();
    }
    w.end_document()
}

/// Clouds plus, when the report is available, a strip of hourly weather
/// symbols along the bottom edge.
pub fn clouds(field: &CloudField, report: &WeatherReport, palette: &Palette) -> String {
    let (width, height) = field.size();
    let mut w = document(width, height, palette);
    for cloud in field.clouds() {
        for puff in &cloud.puffs {
            let center = cloud.position + puff.offset;
            w.start_element("circle");
            w.write_attribute("cx", &center.x);
            w.write_attribute("cy", &center.y);
            w.write_attribute("r", &puff.radius);
            w.write_attribute("fill", palette.revealed);
            w.write_attribute("fill-opacity", "0.85");
            w.end_element();
        }
    }

    if report.available && !report.hours.is_empty() {
        let step = width / report.hours.len() as f32;
        let size = (step * 0.8).min(height / 8.0);
        for (i, hour) in report.hours.iter().enumerate() {
            let at = Point::new(step * (i as f32 + 0.5), height - size);
            text(&mut w, at, size, palette.stroke, &hour.symbol.glyph().to_string());
        }
    }
    w.end_document()
}

/// The board as the player sees it: hidden tiles, counts, flags and, once
/// the game is lost, every mine.
pub fn board(engine: &PlayEngine, palette: &Palette) -> String {
    let bounds = engine.bounds();
    let width = f32::from(bounds.row_len()) * BOARD_TILE;
    let height = f32::from(bounds.row_count()) * BOARD_TILE;
    let mut w = document(width, height, palette);
    let (min_q, min_r) = bounds.min;

    for (coords, tile) in engine.board().iter() {
        let at = Point::new(
            f32::from(coords.0 - min_q) * BOARD_TILE,
            f32::from(coords.1 - min_r) * BOARD_TILE,
        );
        let center = at + Point::new(BOARD_TILE / 2.0, BOARD_TILE / 2.0);
        let inner = BOARD_TILE - 2.0;
        let at = at + Point::new(1.0, 1.0);

        if !tile.clicked {
            rect(&mut w, at, inner, inner, palette.hidden);
            if tile.flagged {
                text(&mut w, center, BOARD_TILE * 0.6, palette.flag, "⚑");
            }
        } else if tile.mine {
            let fill = if engine.triggered_mine() == Some(coords) {
                palette.flag
            } else {
                palette.revealed
            };
            rect(&mut w, at, inner, inner, fill);
            w.start_element("circle");
            w.write_attribute("cx", &center.x);
            w.write_attribute("cy", &center.y);
            w.write_attribute("r", &(BOARD_TILE * 0.3));
            w.write_attribute("fill", palette.mine);
            w.end_element();
        } else {
            rect(&mut w, at, inner, inner, palette.revealed);
            if let Some(color) = palette.number(tile.count) {
                text(&mut w, center, BOARD_TILE * 0.6, color, &tile.count.to_string());
            }
        }
    }
    w.end_document()
}

#[cfg(test)]
mod tests {
    use super::*;
    use atelier_core::*;

    fn count(haystack: &str, needle: &str) -> usize {
        haystack.matches(needle).count()
    }

    #[test]
    fn hex_draws_a_polygon_per_cell() {
        let svg = hex(&HexGrid::new(4, 3, 10.0), Theme::Classic.palette());
        assert!(svg.starts_with("<svg"));
        assert_eq!(count(&svg, "<polygon"), 12);
    }

    #[test]
    fn iso_draws_three_faces_per_visible_cube() {
        let cubes = IsoCubes::random(3, 3, 2, 6);
        let svg = iso(&cubes, Theme::Night.palette());
        assert_eq!(count(&svg, "<polygon"), 3 * cubes.cubes().len());
    }

    #[test]
    fn boxes_draw_background_plus_one_rect_each() {
        let mut grid = PixelBoxGrid::new(10, 10, 1..=3, 2).unwrap();
        let placed = grid.fill(15);
        let svg = boxes(&grid, Theme::Pastel.palette());
        assert_eq!(count(&svg, "<rect"), placed + 1);
    }

    #[test]
    fn flowers_draw_a_path_per_petal_and_a_core_each() {
        let field = FlowerField::new(300.0, 200.0, 6, 4).unwrap();
        let petals: usize = field.flowers().iter().map(|f| f.petals.len()).sum();

        let svg = flowers(&field, Theme::Pastel.palette());
        assert_eq!(count(&svg, "<path"), petals);
        assert_eq!(count(&svg, "<circle"), 6);
    }

    #[test]
    fn clouds_skip_symbols_without_weather() {
        let field = CloudField::new(200.0, 100.0, 50.0, 1);
        let puffs: usize = field.clouds().iter().map(|c| c.puffs.len()).sum();

        let svg = clouds(&field, &WeatherReport::unavailable(), Theme::Classic.palette());
        assert_eq!(count(&svg, "<circle"), puffs);
        assert_eq!(count(&svg, "<text"), 0);
    }

    #[test]
    fn clouds_draw_a_symbol_per_hour() {
        use atelier_core::weather::WeatherSymbol;
        use atelier_protocol::HourlyReport;

        let field = CloudField::new(200.0, 100.0, 50.0, 1);
        let report = WeatherReport {
            available: true,
            hours: vec![
                HourlyReport {
                    time: "t0".into(),
                    cloud_cover: 10.0,
                    temperature: 3.0,
                    symbol: WeatherSymbol::Clear,
                },
                HourlyReport {
                    time: "t1".into(),
                    cloud_cover: 90.0,
                    temperature: 3.0,
                    symbol: WeatherSymbol::Rain,
                },
            ],
            days: vec![],
        };
        let svg = clouds(&field, &report, Theme::Classic.palette());
        assert_eq!(count(&svg, "<text"), 2);
        assert!(svg.contains('☂'));
    }

    #[test]
    fn lost_board_shows_every_mine() {
        let mined = Board::with_mines(Bounds::square(3), [(0, 0), (2, 2)]).unwrap();
        let mut engine = PlayEngine::new(mined);
        engine.reveal((2, 2)).unwrap();

        let svg = board(&engine, Theme::Classic.palette());
        assert_eq!(count(&svg, "<circle"), 2);
        // background plus one per tile
        assert_eq!(count(&svg, "<rect"), 10);
    }

    #[test]
    fn board_prints_counts_of_open_tiles() {
        let mined = Board::with_mines(Bounds::new((-1, -1), (2, 1)), [(1, 0)]).unwrap();
        let mut engine = PlayEngine::new(mined);
        engine.reveal((0, 0)).unwrap();

        let svg = board(&engine, Theme::Classic.palette());
        assert_eq!(count(&svg, "<text"), 1);
        assert!(svg.contains(">1</text>"));
    }
}
