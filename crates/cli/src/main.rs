use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use gridcells::prelude::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;
mod snapshot;

use provenance::{write_sidecar, Provenance};
use snapshot::Snapshot;

#[derive(Parser)]
#[command(name = "gridcells-cli")]
#[command(about = "Build orthogonal grid subdivisions and report their cells")]
struct Cmd {
    /// Minimum distance between parallel dividers (px)
    #[arg(long, default_value_t = GridCfg::default().min_clearance)]
    clearance: i64,

    /// Pick tolerance for gestures (px)
    #[arg(long, default_value_t = GridCfg::default().pick_tolerance)]
    pick: i64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Apply full-length dividers and erase regions, then write a snapshot
    Build {
        #[arg(long)]
        width: i64,
        #[arg(long)]
        height: i64,
        /// Vertical divider at local x (repeatable)
        #[arg(long)]
        vertical: Vec<i64>,
        /// Horizontal divider at local y (repeatable)
        #[arg(long)]
        horizontal: Vec<i64>,
        /// Erase region X,Y,W,H in local offsets (repeatable)
        #[arg(long, value_parser = parse_region)]
        erase: Vec<Rect>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Sample a replayable random layout and write a snapshot
    Random {
        #[arg(long, default_value_t = 800)]
        width: i64,
        #[arg(long, default_value_t = 600)]
        height: i64,
        #[arg(long)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, default_value_t = SampleCfg::default().dividers)]
        dividers: usize,
        #[arg(long, default_value_t = SampleCfg::default().min_len_frac)]
        min_len_frac: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    let cfg = GridCfg {
        min_clearance: cmd.clearance,
        pick_tolerance: cmd.pick,
    };
    match cmd.action {
        Action::Build {
            width,
            height,
            vertical,
            horizontal,
            erase,
            out,
        } => build(cfg, width, height, &vertical, &horizontal, &erase, &out),
        Action::Random {
            width,
            height,
            seed,
            index,
            dividers,
            min_len_frac,
            out,
        } => random(
            cfg,
            width,
            height,
            ReplayToken::new(seed, index),
            SampleCfg {
                dividers,
                min_len_frac,
            },
            &out,
        ),
        Action::Report => report(),
    }
}

fn area(width: i64, height: i64) -> Result<Rect> {
    if width <= 0 || height <= 0 {
        bail!("width and height must be positive, got {width}x{height}");
    }
    Ok(Rect::new(0, 0, width, height))
}

/// Editor commands for `build`, in application order.
fn build_commands(
    area: Rect,
    vertical: &[i64],
    horizontal: &[i64],
    erase: &[Rect],
) -> Vec<Command> {
    let v = vertical.iter().map(|&x| Command::AddDivider {
        a: Point::new(x, 0),
        b: Point::new(x, area.height),
    });
    let h = horizontal.iter().map(|&y| Command::AddDivider {
        a: Point::new(0, y),
        b: Point::new(area.width, y),
    });
    let e = erase.iter().map(|&region| Command::EraseDivider { region });
    v.chain(h).chain(e).collect()
}

fn build(
    cfg: GridCfg,
    width: i64,
    height: i64,
    vertical: &[i64],
    horizontal: &[i64],
    erase: &[Rect],
    out: &Path,
) -> Result<()> {
    let area = area(width, height)?;
    tracing::info!(
        width,
        height,
        vertical = ?vertical,
        horizontal = ?horizontal,
        erase = erase.len(),
        "build"
    );
    let mut editor = Editor::new(area, cfg)?;
    let mut rejected = 0usize;
    for command in build_commands(area, vertical, horizontal, erase) {
        if let Outcome::Unchanged(reason) = editor.apply(command) {
            tracing::warn!(?command, %reason, "command had no effect");
            rejected += 1;
        }
    }
    let params = serde_json::json!({
        "width": width,
        "height": height,
        "vertical": vertical,
        "horizontal": horizontal,
        "erase": erase.iter().map(|r| [r.x, r.y, r.width, r.height]).collect::<Vec<_>>(),
        "min_clearance": cfg.min_clearance,
        "rejected": rejected,
    });
    finish(&editor, "build", params, out)
}

fn random(
    cfg: GridCfg,
    width: i64,
    height: i64,
    token: ReplayToken,
    sample: SampleCfg,
    out: &Path,
) -> Result<()> {
    let area = area(width, height)?;
    tracing::info!(
        width,
        height,
        seed = token.seed,
        index = token.index,
        dividers = sample.dividers,
        "random"
    );
    let editor = random_editor(area, cfg, &sample, token)?;
    let params = serde_json::json!({
        "width": width,
        "height": height,
        "seed": token.seed,
        "index": token.index,
        "dividers": sample.dividers,
        "min_len_frac": sample.min_len_frac,
        "min_clearance": cfg.min_clearance,
    });
    finish(&editor, "random", params, out)
}

fn finish(
    editor: &Editor,
    command: &str,
    params: serde_json::Value,
    out: &Path,
) -> Result<()> {
    let snap = Snapshot::of(editor);
    snap.write(out)?;
    let sidecar = write_sidecar(out, Provenance::new(command, params))?;
    tracing::info!(
        nodes = snap.nodes.len(),
        edges = snap.edges.len(),
        faces = snap.faces.len(),
        out = %out.display(),
        sidecar = %sidecar.display(),
        "snapshot written"
    );
    Ok(())
}

fn report() -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "version": gridcells::VERSION,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

fn parse_region(s: &str) -> Result<Rect, String> {
    let parts: Vec<i64> = s
        .split(',')
        .map(|p| p.trim().parse::<i64>().map_err(|e| format!("{p:?}: {e}")))
        .collect::<Result<_, _>>()?;
    match parts.as_slice() {
        &[x, y, w, h] if w >= 0 && h >= 0 => Ok(Rect::new(x, y, w, h)),
        &[_, _, _, _] => Err("width and height must be non-negative".to_string()),
        _ => Err(format!("expected X,Y,W,H, got {s:?}")),
    }
}
