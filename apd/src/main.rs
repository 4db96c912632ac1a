use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use apd::config::ApdConfig;
use apd::driver::SessionDriver;
use apd::io;
use apd::io::cli::Cli;
use apd::io::map_to_svg::board_to_svg;
use apd::io::output::ApdOutput;
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;
use terra_rs::entities::DragBoard;
use terra_rs::io::export;
use terra_rs::io::import::Importer;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            ApdConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("Successfully parsed ApdConfig: {config:?}");

    let input_file_stem = args.input_file.file_stem().unwrap().to_str().unwrap();

    if !args.output_folder.exists() {
        fs::create_dir_all(&args.output_folder).unwrap_or_else(|_| {
            panic!("could not create output folder: {:?}", args.output_folder)
        });
    }

    let feature_collection = io::read_map_file(args.input_file.as_path())?;
    let atlas = Importer::new(&config.name_property).import(&feature_collection)?;
    let board = DragBoard::new(atlas, config.rescale_config);
    let mut driver = SessionDriver::new(board, config.clone());

    let session = match &args.session_file {
        Some(path) => io::read_session_file(path)?,
        None => {
            info!("[MAIN] no session file provided, sampling a random walk");
            let mut rng = match config.prng_seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            driver.sample_walk_session(&mut rng)?
        }
    };

    {
        let svg_path = args
            .output_folder
            .join(format!("{input_file_stem}_before.svg"));
        let svg = board_to_svg(&driver.board, config.svg_draw_options, "before");
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    let report = driver.run(&session);

    {
        let output = ApdOutput {
            session: session.clone(),
            report,
            config: config.clone(),
        };
        let report_path = args
            .output_folder
            .join(format!("report_{input_file_stem}_{}.json", session.name));
        io::write_json(&output, Path::new(&report_path))?;
    }

    {
        let svg_path = args
            .output_folder
            .join(format!("{input_file_stem}_{}.svg", session.name));
        let svg = board_to_svg(&driver.board, config.svg_draw_options, "after");
        io::write_svg(&svg, Path::new(&svg_path))?;
    }

    {
        let map_path = args
            .output_folder
            .join(format!("{input_file_stem}_{}.geojson", session.name));
        let feature_collection = export::export(&driver.board);
        io::write_json(&feature_collection, Path::new(&map_path))?;
    }

    Ok(())
}
