use anyhow::{Context, Result};
use clap::Parser;
use ptsorient::api::{
    ensure_dir, output_path, process_text, read_input, write_output, Config, DEFAULT_OUT_DIR,
};
use std::path::PathBuf;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod summary;

use summary::Summary;

#[derive(Parser, Debug)]
#[command(name = "ptsorient")]
#[command(about = "Rewrite a closed point loop counter-clockwise, rounded and deduplicated")]
struct Cmd {
    /// Input point file
    input: PathBuf,

    /// Output directory (created if absent)
    #[arg(default_value = DEFAULT_OUT_DIR)]
    out_dir: PathBuf,

    /// Keep only every second record (0 or 1)
    #[arg(default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=1))]
    minimize: u8,

    /// Print the summary as JSON instead of a single line
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    let summary = run(&cmd)?;
    if cmd.json {
        println!("{}", summary.json()?);
    } else {
        println!("{}", summary.line());
    }
    Ok(())
}

fn run(cmd: &Cmd) -> Result<Summary> {
    let cfg = Config::default().with_minimize(cmd.minimize == 1);
    tracing::info!(
        input = %cmd.input.display(),
        out_dir = %cmd.out_dir.display(),
        minimize = cfg.minimize,
        "run"
    );
    let file_name = cmd
        .input
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| cmd.input.display().to_string());

    ensure_dir(&cmd.out_dir)?;
    let text = read_input(&cmd.input)?;
    let outcome = process_text(&text, &cfg);

    let Some(rendered) = outcome.rendered.as_deref() else {
        tracing::warn!(file = %file_name, "direction is unknown, no output file");
        return Ok(Summary::new(&file_name, &outcome, None));
    };
    let out_path = output_path(&cmd.input, &cmd.out_dir);
    write_output(&out_path, rendered)
        .with_context(|| format!("processing {}", cmd.input.display()))?;
    tracing::info!(
        winding = %outcome.winding,
        output = %out_path.display(),
        "written"
    );
    Ok(Summary::new(&file_name, &outcome, Some(&out_path)))
}
