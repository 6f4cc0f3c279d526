use anyhow::{anyhow, Context};
use config::{Config, File};
use hexmap::{
    shape, timed, CubeCoordinate, HexLayout, Point2, Point3, TileDirection,
};
use log::{debug, LevelFilter};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    fmt::Display,
    path::{Path, PathBuf},
    process,
};
use structopt::{clap::AppSettings, StructOpt};
use strum::{Display as StrumDisplay, EnumString};

/// CLI for querying hex grids via the hexmap toolkit. Every command prints
/// tiles as `(q, r, s)` cube coordinates.
#[derive(Debug, StructOpt)]
#[structopt(
    name = "hexmap",
    global_settings = &[AppSettings::AllowNegativeNumbers]
)]
struct Opt {
    /// Path to a config file that defines the hex layout. Supported formats:
    /// JSON, TOML
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Distance from a tile's center to any of its corners, in world units.
    /// Overrides the value from the config file, if any
    #[structopt(long)]
    hex_size: Option<f64>,

    /// The format to print results in. Supported formats:
    ///
    /// text - One value per line
    ///
    /// json - A single JSON document
    #[structopt(short, long, default_value = "text")]
    format: OutputFormat,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "warn")]
    log_level: LevelFilter,

    #[structopt(subcommand)]
    command: Command,
}

/// A tile, given as its q and r components
#[derive(Copy, Clone, Debug, StructOpt)]
struct TileArg {
    q: i32,
    r: i32,
}

impl From<TileArg> for CubeCoordinate {
    fn from(arg: TileArg) -> Self {
        Self::new(arg.q, arg.r)
    }
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Print the six tiles adjacent to a tile
    Neighbors {
        #[structopt(flatten)]
        center: TileArg,
    },
    /// Print the rhombus of tiles within `range` steps along both the q and
    /// r axes
    Rectangle {
        #[structopt(flatten)]
        center: TileArg,
        range: i32,
    },
    /// Print every tile within `range` steps of a tile
    Area {
        #[structopt(flatten)]
        center: TileArg,
        range: i32,
    },
    /// Print every tile exactly `radius` steps from a tile
    Ring {
        #[structopt(flatten)]
        center: TileArg,
        radius: i32,
    },
    /// Print `length` tiles, starting at a tile and stepping in a direction.
    /// Directions: nnw, nne, e, sse, ssw, w
    Line {
        #[structopt(flatten)]
        origin: TileArg,
        direction: TileDirection,
        length: i32,
    },
    /// Print the tiles along the straight line between two tiles
    LineBetween {
        from_q: i32,
        from_r: i32,
        to_q: i32,
        to_r: i32,
    },
    /// Print a triangular wedge of tiles pointing away from a tile.
    /// Directions: nnw, nne, e, sse, ssw, w
    Triangle {
        #[structopt(flatten)]
        center: TileArg,
        direction: TileDirection,
        range: i32,
    },
    /// Print the tile that contains a world position. With two components the
    /// position is on the ground plane; with three, the second is height and
    /// is ignored
    ToHex { x: f64, y: f64, z: Option<f64> },
    /// Print the world position of a tile's center
    ToWorld {
        #[structopt(flatten)]
        tile: TileArg,
        /// Print a 3D position (y up) instead of a 2D one
        #[structopt(long = "3d")]
        three_d: bool,
    },
    /// Print the resolved hex layout, in TOML format
    Config,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, StrumDisplay, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for `--format`!
    Text,
    Json,
}

fn load_config(config_path: &Path) -> anyhow::Result<HexLayout> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Build the layout from the config file (if any) and command line overrides.
/// Everything is validated here, so the rest of the CLI can trust it.
fn resolve_layout(opt: &Opt) -> anyhow::Result<HexLayout> {
    let from_file = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => HexLayout::default(),
    };
    let hex_size = opt.hex_size.unwrap_or(from_file.hex_size);
    let layout = HexLayout::new(hex_size)?;
    debug!("Using layout {:?}", layout);
    Ok(layout)
}

fn print_tiles(
    format: OutputFormat,
    tiles: &[CubeCoordinate],
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => {
            for tile in tiles {
                println!("{}", tile);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string(tiles)?);
        }
    }
    Ok(())
}

fn print_value<T: Display + Serialize>(
    format: OutputFormat,
    value: &T,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", value),
        OutputFormat::Json => println!("{}", serde_json::to_string(value)?),
    }
    Ok(())
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;
    let layout = resolve_layout(&opt)?;
    let format = opt.format;

    let tiles = match opt.command {
        Command::Neighbors { center } => shape::neighbors(center.into()),
        Command::Rectangle { center, range } => {
            timed!("Rectangle", shape::rectangle(center.into(), range))
        }
        Command::Area { center, range } => {
            timed!("Area", shape::area_by_distance(center.into(), range))
        }
        Command::Ring { center, radius } => {
            timed!("Ring", shape::ring(center.into(), radius))
        }
        Command::Line {
            origin,
            direction,
            length,
        } => shape::line(origin.into(), direction.vector(), length),
        Command::LineBetween {
            from_q,
            from_r,
            to_q,
            to_r,
        } => timed!(
            "Line",
            layout.line_between(
                CubeCoordinate::new(from_q, from_r),
                CubeCoordinate::new(to_q, to_r),
            )
        ),
        Command::Triangle {
            center,
            direction,
            range,
        } => {
            timed!("Triangle", shape::triangle(center.into(), direction, range))
        }
        Command::ToHex { x, y, z: None } => {
            return print_value(format, &layout.world_to_hex(Point2::new(x, y)));
        }
        Command::ToHex { x, y, z: Some(z) } => {
            return print_value(
                format,
                &layout.world_to_hex(Point3::new(x, y, z)),
            );
        }
        Command::ToWorld {
            tile,
            three_d: false,
        } => {
            return print_value(format, &layout.hex_to_world_2d(tile.into()));
        }
        Command::ToWorld {
            tile,
            three_d: true,
        } => {
            return print_value(format, &layout.hex_to_world(tile.into()));
        }
        Command::Config => {
            print!(
                "{}",
                toml::to_string_pretty(&layout)
                    .context("error serializing config")?
            );
            return Ok(());
        }
    };

    debug!("Generated {} tiles", tiles.len());
    print_tiles(format, &tiles)
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}
