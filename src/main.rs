//! Marchlands - Entry Point
//!
//! Generates a territory map, traces faction borders, and emits the result
//! as a text summary, a JSON report, or a standalone SVG drawing.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use marchlands::border::{trace_borders, BorderPath};
use marchlands::core::config::MapConfig;
use marchlands::core::error::Result;
use marchlands::core::types::{Faction, ScreenPoint};
use marchlands::territory::{generate, Terrain, TerritoryMap};
use marchlands::viewport::Viewport;

#[derive(Parser, Debug)]
#[command(name = "marchlands")]
#[command(about = "Generate a territory hex map and trace its faction borders")]
struct Args {
    /// Map width in tiles
    #[arg(long, default_value_t = 15)]
    width: i32,

    /// Map height in tiles
    #[arg(long, default_value_t = 15)]
    height: i32,

    /// Claim radius around each capital, in hex distance
    #[arg(long, default_value_t = 2)]
    radius: i32,

    /// Tile width in pixels
    #[arg(long, default_value_t = 100.0)]
    tile_width: f32,

    /// Tile height in pixels
    #[arg(long, default_value_t = 30.0)]
    tile_height: f32,

    /// Random seed for deterministic maps
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: text, json or svg
    #[arg(long, default_value = "text")]
    format: String,

    /// Write output to a file instead of stdout
    #[arg(long)]
    out: Option<std::path::PathBuf>,
}

/// JSON output structure
#[derive(Serialize)]
struct MapReport {
    seed: u64,
    width: i32,
    height: i32,
    radius: i32,
    tiles: Vec<TileReport>,
    paths: Vec<PathReport>,
}

#[derive(Serialize)]
struct TileReport {
    q: i32,
    r: i32,
    terrain: Terrain,
    owner: Option<Faction>,
    is_capital: bool,
    x: f32,
    y: f32,
    asset: &'static str,
}

#[derive(Serialize)]
struct PathReport {
    owner: Faction,
    closed: bool,
    points: Vec<ScreenPoint>,
    label: Option<ScreenPoint>,
    svg_data: String,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("marchlands=info")
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = MapConfig {
        width: args.width,
        height: args.height,
        radius: args.radius,
        tile_width: args.tile_width,
        tile_height: args.tile_height,
    };

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let map = generate(&config, &mut rng)?;
    let paths = trace_borders(&map);
    tracing::info!(
        "Generated {}x{} map (seed {}) with {} border path(s)",
        map.width(),
        map.height(),
        seed,
        paths.len()
    );

    let output = match args.format.as_str() {
        "json" => render_json(seed, &config, &map, &paths)?,
        "svg" => render_svg(&config, &map, &paths),
        "text" => render_text(seed, &config, &map, &paths),
        other => {
            eprintln!("Unknown format '{}', defaulting to text", other);
            render_text(seed, &config, &map, &paths)
        }
    };

    match args.out {
        Some(path) => std::fs::write(path, output)?,
        None => println!("{}", output),
    }
    Ok(())
}

fn render_text(seed: u64, config: &MapConfig, map: &TerritoryMap, paths: &[BorderPath]) -> String {
    let mut out = String::new();
    out.push_str("Territory Map\n");
    out.push_str("=============\n");
    out.push_str(&format!(
        "Grid: {}x{} (radius {}), seed {}\n",
        map.width(),
        map.height(),
        config.radius,
        seed
    ));

    let projection = map.projection();
    for faction in Faction::ALL {
        let tiles = map
            .tiles()
            .iter()
            .filter(|t| t.owner == Some(faction))
            .count();
        let capital = match map.capital_of(faction) {
            Some(tile) => format!("({}, {})", tile.coord.q, tile.coord.r),
            None => "lost".to_string(),
        };
        out.push_str(&format!(
            "{}: {} tiles, capital {}\n",
            faction.name(),
            tiles,
            capital
        ));
        for path in paths.iter().filter(|p| p.owner == faction) {
            let kind = if path.closed { "loop" } else { "open chain" };
            out.push_str(&format!(
                "  {} of {} edges, area {:.0}\n",
                kind,
                path.edge_count(),
                path.area(projection)
            ));
        }
    }

    let neutral = map.tiles().iter().filter(|t| t.owner.is_none()).count();
    out.push_str(&format!("neutral: {} tiles\n", neutral));
    out
}

fn render_json(
    seed: u64,
    config: &MapConfig,
    map: &TerritoryMap,
    paths: &[BorderPath],
) -> Result<String> {
    let projection = map.projection();
    let report = MapReport {
        seed,
        width: map.width(),
        height: map.height(),
        radius: config.radius,
        tiles: map
            .tiles()
            .iter()
            .map(|t| TileReport {
                q: t.coord.q,
                r: t.coord.r,
                terrain: t.terrain,
                owner: t.owner,
                is_capital: t.is_capital,
                x: t.screen.x,
                y: t.screen.y,
                asset: t.asset_path(),
            })
            .collect(),
        paths: paths
            .iter()
            .map(|p| PathReport {
                owner: p.owner,
                closed: p.closed,
                points: p.screen_points(projection),
                label: p.label_anchor(projection),
                svg_data: p.svg_path_data(projection),
            })
            .collect(),
    };
    Ok(serde_json::to_string_pretty(&report)?)
}

const CANVAS_W: f32 = 1200.0;
const CANVAS_H: f32 = 800.0;

fn render_svg(config: &MapConfig, map: &TerritoryMap, paths: &[BorderPath]) -> String {
    let hw = config.tile_width / 2.0;
    let hh = config.tile_height / 2.0;

    // Fit the whole tile field into the canvas
    let mut min = ScreenPoint::new(f32::MAX, f32::MAX);
    let mut max = ScreenPoint::new(f32::MIN, f32::MIN);
    for tile in map.tiles() {
        min.x = min.x.min(tile.screen.x - hw);
        min.y = min.y.min(tile.screen.y - hh);
        max.x = max.x.max(tile.screen.x + hw);
        max.y = max.y.max(tile.screen.y + hh);
    }
    let mut viewport = Viewport::default();
    viewport.fit_bounds(min, max, CANVAS_W, CANVAS_H);

    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = CANVAS_W,
        h = CANVAS_H
    ));
    svg.push_str(&format!(
        "  <rect width=\"{}\" height=\"{}\" fill=\"#f4efe6\"/>\n",
        CANVAS_W, CANVAS_H
    ));
    svg.push_str(&format!("  <g transform=\"{}\">\n", viewport.svg_transform()));

    for tile in map.tiles() {
        let c = tile.screen;
        let d = format!(
            "M{} {} L{} {} L{} {} L{} {} Z",
            c.x,
            c.y - hh,
            c.x + hw,
            c.y,
            c.x,
            c.y + hh,
            c.x - hw,
            c.y
        );
        svg.push_str(&format!(
            "    <path d=\"{}\" fill=\"{}\" stroke=\"#c9c2b2\" stroke-width=\"1\"/>\n",
            d,
            tile_fill(tile.owner)
        ));
    }

    for path in paths {
        svg.push_str(&format!(
            "    <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"3\" stroke-dasharray=\"8 5\"/>\n",
            path.svg_path_data(map.projection()),
            stroke_color(path.owner)
        ));
    }

    for faction in Faction::ALL {
        if let Some(capital) = map.capital_of(faction) {
            svg.push_str(&format!(
                "    <circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
                capital.screen.x,
                capital.screen.y,
                hh / 2.0,
                stroke_color(faction)
            ));
        }
    }

    svg.push_str("  </g>\n</svg>\n");
    svg
}

fn tile_fill(owner: Option<Faction>) -> &'static str {
    match owner {
        Some(Faction::Crimson) => "#e0b4b4",
        Some(Faction::Azure) => "#b4c4e0",
        None => "#dcd6c6",
    }
}

fn stroke_color(faction: Faction) -> &'static str {
    match faction {
        Faction::Crimson => "#b03a3a",
        Faction::Azure => "#3a5fb0",
    }
}
