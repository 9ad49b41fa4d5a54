use std::error::Error;
use std::path::PathBuf;
use std::process;

use cavern::export::{ascii_map, save_obj};
use cavern::{CaveConfig, build_cave, load_config_from_path};
use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "cavern")]
#[command(version, about = "Procedural cave generator: grid, floor mesh and walls")]
struct Cli {
    /// TOML file with cave settings; flags below override it.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<i32>,

    #[arg(long)]
    height: Option<i32>,

    #[arg(long)]
    seed: Option<String>,

    /// Derive the seed from the current time.
    #[arg(long)]
    random_seed: bool,

    /// Percent chance an interior tile starts as wall.
    #[arg(long)]
    fill: Option<i32>,

    /// Wall regions smaller than this are opened.
    #[arg(long)]
    wall_threshold: Option<u32>,

    /// Open regions smaller than this are filled.
    #[arg(long)]
    room_threshold: Option<u32>,

    #[arg(long)]
    square_size: Option<f32>,

    #[arg(long)]
    wall_height: Option<f32>,

    /// Solid padding added around the grid before meshing.
    #[arg(long)]
    border: Option<usize>,

    /// Write floor and wall meshes to this OBJ file.
    #[arg(long)]
    obj: Option<PathBuf>,

    /// Print the padded grid to stdout.
    #[arg(long)]
    print_map: bool,

    /// Raise log level (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    fn load_config(&self) -> Result<CaveConfig, Box<dyn Error>> {
        let mut cfg = match &self.config {
            Some(path) => {
                let cfg = load_config_from_path(path)?;
                log::debug!("loaded {}", path.display());
                cfg
            }
            None => CaveConfig::default(),
        };
        if let Some(v) = self.width {
            cfg.width = v;
        }
        if let Some(v) = self.height {
            cfg.height = v;
        }
        if let Some(v) = &self.seed {
            cfg.seed = v.clone();
        }
        if self.random_seed {
            cfg.use_random_seed = true;
        }
        if let Some(v) = self.fill {
            cfg.fill_percent = v;
        }
        if let Some(v) = self.wall_threshold {
            cfg.wall_threshold = v;
        }
        if let Some(v) = self.room_threshold {
            cfg.room_threshold = v;
        }
        if let Some(v) = self.square_size {
            cfg.square_size = v;
        }
        if let Some(v) = self.wall_height {
            cfg.wall_height = v;
        }
        if let Some(v) = self.border {
            cfg.border_size = v;
        }
        Ok(cfg)
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let cfg = cli.load_config()?;
    let build = build_cave(&cfg)?;
    if cli.print_map {
        print!("{}", ascii_map(&build));
    }
    if let Some(path) = &cli.obj {
        save_obj(path, &build)?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    if let Err(e) = run(&cli) {
        log::error!("{e}");
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
