use std::path::PathBuf;

use clap::{Parser, Subcommand};

use bootanim::{DEVICES, inspect, make_bootanimation, resolve_dimensions};

#[derive(Parser, Debug)]
#[command(name = "bootanim", version, about = "Builds boot animations for Android")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List known device names and their screen sizes.
    List,
    /// Inspect an existing boot-animation archive.
    Preview(PreviewArgs),
    /// Build a boot-animation zip from an animated GIF.
    Build(BuildArgs),
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Archive to inspect.
    archive: PathBuf,
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Device name from `list`, or a literal pair like "768,1270".
    #[arg(value_name = "DIMENSIONS")]
    dimensions: String,

    /// Input GIF path.
    #[arg(value_name = "FROM")]
    input: PathBuf,

    /// Output zip name (".zip" is appended if missing).
    #[arg(short, long, value_name = "OUTPUT")]
    out: Option<PathBuf>,

    /// Playback speed; derived from the GIF's frame timing if omitted.
    #[arg(long)]
    fps: Option<u32>,

    /// Scale frames to this percentage of the canvas width.
    #[arg(long)]
    fit: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::List => cmd_list(),
        Command::Preview(args) => cmd_preview(args),
        Command::Build(args) => cmd_build(args),
    }
}

fn cmd_list() -> anyhow::Result<()> {
    for (name, canvas) in DEVICES {
        println!("{name} {}x{}", canvas.width, canvas.height);
    }
    Ok(())
}

fn cmd_preview(args: PreviewArgs) -> anyhow::Result<()> {
    let summary = inspect(&args.archive)?;
    let desc = &summary.descriptor;
    println!(
        "{} {}x{} @ {} fps, {} frame(s)",
        args.archive.display(),
        desc.width,
        desc.height,
        desc.fps,
        summary.frame_entries
    );
    for part in &desc.parts {
        println!("part {} loop={} delay={}", part.folder, part.loop_count, part.delay);
    }
    Ok(())
}

fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    let (label, canvas) = resolve_dimensions(&args.dimensions)?;

    println!(
        "Building animation for {label} ({}x{})",
        canvas.width, canvas.height
    );
    let out = make_bootanimation(
        canvas,
        &args.input,
        args.out.as_deref(),
        args.fps,
        args.fit,
    )?;
    println!("Output in {}", out.display());
    Ok(())
}
