//! Quill tooling CLI
//!
//! Two commands: `quill svg` renders the demo scene into an SVG file through
//! the vector-output backend, and `quill android` writes the Android Studio
//! project tree for building the toolkit.

mod demo;

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quill_scaffold::{scaffold, ScaffoldRequest};
use quill_svg::SvgSurface;

#[derive(Parser)]
#[command(name = "quill", version, about = "Companion tooling for the Quill toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the demo scene into an SVG file
    Svg {
        /// Output file
        #[arg(long, default_value = "hello.svg")]
        out: PathBuf,
        /// Canvas width in pixels
        #[arg(long, default_value_t = 340)]
        width: i32,
        /// Canvas height in pixels
        #[arg(long, default_value_t = 180)]
        height: i32,
    },
    /// Write an Android Studio project for building the toolkit
    Android {
        /// Root of the toolkit source tree
        #[arg(long)]
        toolkit_root: PathBuf,
        /// Project directory; relative paths resolve under the toolkit root
        #[arg(long, default_value = "build/AndroidStudio")]
        project: PathBuf,
        /// Overwrite files left by a previous run
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    match Cli::parse().command {
        Command::Svg { out, width, height } => render_svg(&out, width, height),
        Command::Android {
            toolkit_root,
            project,
            force,
        } => scaffold_android(toolkit_root, project, force),
    }
}

fn render_svg(out: &PathBuf, width: i32, height: i32) -> Result<()> {
    let file = File::create(out)
        .with_context(|| format!("failed to create {}", out.display()))?;
    let mut surface = SvgSurface::new(width, height, BufWriter::new(file))
        .context("failed to open SVG session")?;
    demo::draw_scene(surface.driver_mut(), width, height)
        .context("failed to render demo scene")?;
    surface.finish().context("failed to close SVG session")?;
    tracing::info!(path = %out.display(), width, height, "wrote SVG");
    Ok(())
}

fn scaffold_android(toolkit_root: PathBuf, project: PathBuf, force: bool) -> Result<()> {
    let project_root = if project.is_absolute() {
        project
    } else {
        toolkit_root.join(project)
    };
    let report = scaffold(&ScaffoldRequest {
        toolkit_root,
        project_root: project_root.clone(),
        overwrite: force,
    })
    .with_context(|| format!("failed to scaffold {}", project_root.display()))?;
    for file in &report.files {
        tracing::info!(path = %file.display(), "wrote");
    }
    tracing::info!(
        files = report.files.len(),
        root = %project_root.display(),
        "Android project ready"
    );
    Ok(())
}
