//! Headless scene inspector: replays an exported scene through the studio,
//! prints the re-export and optionally repacks the downloadable archive.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use fss_core::{build_scene_archive, CommandRecorder, Studio, UiRequest};

#[derive(Parser)]
#[command(about = "Replay an exported FSS scene and print its re-export")]
struct Args {
    /// Exported scene JSON file.
    scene: PathBuf,

    /// Runner script to pack into an archive alongside the scene.
    #[arg(long)]
    runner: Option<PathBuf>,

    /// Where to write the archive (defaults to export.zip).
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let Args { scene, runner, out } = Args::parse();
    let raw = std::fs::read_to_string(&scene)
        .with_context(|| format!("reading {}", scene.display()))?;

    let mut studio = Studio::new(42);
    let mut recorder = CommandRecorder::new();

    let fragment = studio
        .import(&raw, &mut recorder)
        .context("importing scene")?;
    for command in &recorder.commands {
        log::info!("[replay] {}", command.port_name());
    }
    log::info!("[replay] fragment {}", fragment);

    recorder.clear();
    let exported = studio
        .handle_request(UiRequest::Export(raw), &mut recorder)
        .context("re-exporting scene")?;
    println!("{exported}");

    if let Some(runner_path) = runner {
        let runner = std::fs::read(&runner_path)
            .with_context(|| format!("reading {}", runner_path.display()))?;
        let bytes = build_scene_archive(&runner, &exported).context("assembling archive")?;
        let out = out.unwrap_or_else(|| PathBuf::from("export.zip"));
        std::fs::write(&out, &bytes).with_context(|| format!("writing {}", out.display()))?;
        log::info!("[replay] wrote {} ({} bytes)", out.display(), bytes.len());
    }

    Ok(())
}
