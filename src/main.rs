use orbsim::telemetry::init_tracing;
use orbsim::{bench_gravity, bench_step, bench_step_curve};
use orbsim::{Frame, Mailbox, Scenario, ScenarioConfig, StepWorker};
use clap::Parser;
use anyhow::{Context, Result};
use tracing::{debug, info};

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use std::thread;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file, looked up under `scenarios/` unless it is an existing path
    #[arg(short, default_value = "default.yaml")]
    file_name: String,

    /// Override the number of frames to run
    #[arg(long)]
    frames: Option<u64>,

    /// Print benchmark tables instead of running a scenario
    #[arg(long)]
    bench: bool,

    /// Pretty multi-line log output
    #[arg(long)]
    pretty: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let given = PathBuf::from(file_name);
    let config_path = if given.exists() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
    };
    let file = File::open(&config_path).with_context(|| format!("opening {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg = ScenarioConfig::from_reader(reader)
        .with_context(|| format!("parsing {}", config_path.display()))?;
    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.pretty);

    if args.bench {
        bench_gravity();
        bench_step();
        bench_step_curve();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let Scenario {
        universe,
        entities,
        mut camera,
        viewport,
        frame_delay,
        frames,
    } = Scenario::build_scenario(scenario_cfg).context("building scenario")?;
    let frames = args.frames.unwrap_or(frames);

    let mailbox = Mailbox::new();
    let worker = StepWorker::spawn(universe, entities, mailbox.clone());

    let mut skipped = 0u64;
    for frame_no in 0..frames {
        // A step still running means this tick is skipped, not queued
        if !worker.request_step() {
            skipped += 1;
        }
        thread::sleep(frame_delay);

        let Some(snapshot) = mailbox.take() else {
            continue;
        };
        camera.move_step();
        let frame = Frame::build(&camera, &viewport, &snapshot);
        debug!(
            frame = frame_no,
            entities = snapshot.len(),
            visible = frame.visible(),
            trails = frame.trails.len(),
            culled = frame.culled,
            "frame built"
        );
    }

    let final_entities = worker.shutdown().context("stopping step worker")?;
    let total_mass: f64 = final_entities.iter().map(|e| e.mass()).sum();
    info!(frames, skipped, entities = final_entities.len(), total_mass, "simulation finished");
    Ok(())
}
