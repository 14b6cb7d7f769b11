use std::fs;
use std::fs::File;
use std::io::BufReader;

use aco::config::AcoConfig;
use aco::generator::generate_instance;
use aco::io::cli::Cli;
use aco::io::output::AcoOutput;
use aco::opt::aco_optimizer::AcoOptimizer;
use aco::replay::{PackingReplay, ReplayStep};
use aco::{EPOCH, io};
use anyhow::{Context, Result};
use antpack::entities::Instance;
use clap::Parser as ClapParser;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config: AcoConfig = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            AcoConfig::default()
        }
        Some(config_file) => {
            let file = File::open(&config_file)
                .with_context(|| format!("could not open config file: {}", config_file.display()))?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };
    config.validate()?;

    info!("[MAIN] Successfully parsed AcoConfig: {config:?}");

    let mut rng = match config.prng_seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_os_rng(),
    };

    let (instance, input_stem) = match &args.input_file {
        Some(input_file) => {
            let ext_instance = io::read_instance(input_file)?;
            let stem = input_file
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("instance")
                .to_string();
            (antpack::io::import(&ext_instance)?, stem)
        }
        None => {
            info!("[MAIN] No input file provided, generating a random instance");
            let instance = generate_instance(&config.instance_gen, &mut rng)?;
            let stem = instance.name.clone();
            (instance, stem)
        }
    };

    fs::create_dir_all(&args.solution_folder).with_context(|| {
        format!(
            "could not create solution folder: {}",
            args.solution_folder.display()
        )
    })?;

    let sol = AcoOptimizer::new(instance.clone(), config, rng)?.solve();

    log_replay(&instance);

    let output = AcoOutput::new(&instance, &sol, config);
    let solution_path = args
        .solution_folder
        .join(format!("sol_{input_stem}.json"));
    io::write_json(&output, &solution_path)?;

    info!(
        "[MAIN] finished after {:.3}s",
        EPOCH.elapsed().as_secs_f64()
    );
    println!("Best solution: {:?}", sol.packed_tuples());

    Ok(())
}

/// Logs the frame-by-frame packing of the item set in its canonical order
fn log_replay(instance: &Instance) {
    for (frame, step) in PackingReplay::new(&instance.items, instance.bin).enumerate() {
        match step {
            ReplayStep::Placed { rect, remaining } => debug!(
                "[REPLAY] packed rectangle {}: {}x{} at ({}, {}), {remaining} remaining",
                frame + 1,
                rect.width,
                rect.height,
                rect.x,
                rect.y
            ),
            ReplayStep::Skipped { item_id, remaining } => debug!(
                "[REPLAY] item {item_id} does not fit, {remaining} remaining"
            ),
        }
    }
}
