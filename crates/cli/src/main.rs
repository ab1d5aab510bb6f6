use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::SubscriberBuilder;

use pick::prelude::{GridBounds, LatticePoint, PolygonEditor};

mod report;
use report::Report;

/// The board's example preset; canned caller data, not engine state.
const EXAMPLE_TRIANGLE: &[(i64, i64)] = &[(2, 4), (6, 2), (6, 6)];

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Lattice-polygon metrics runner")]
struct Cmd {
    /// Grid size N; valid coordinates are 0..N-1
    #[arg(long, default_value_t = 11)]
    grid: i64,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Close a polygon from ordered vertices and report its metrics
    Metrics {
        /// Vertices in order as "x,y", e.g. --vertex 2,4 --vertex 6,2 --vertex 6,6
        #[arg(long = "vertex", required = true)]
        vertices: Vec<String>,
        /// Write the JSON report here instead of stdout
        #[arg(long)]
        out: Option<String>,
    },
    /// Report metrics for the example triangle preset
    Example {
        #[arg(long)]
        out: Option<String>,
    },
    /// Replay a scripted edit session (one op per line) and report the result
    Replay {
        #[arg(long)]
        script: String,
        #[arg(long)]
        out: Option<String>,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    if cmd.grid <= 0 {
        bail!("grid size must be positive, got {}", cmd.grid);
    }
    let bounds = GridBounds::new(cmd.grid);
    match cmd.action {
        Action::Metrics { vertices, out } => metrics(&vertices, bounds, out.as_deref()),
        Action::Example { out } => example(bounds, out.as_deref()),
        Action::Replay { script, out } => replay(&script, bounds, out.as_deref()),
    }
}

fn metrics(vertices: &[String], bounds: GridBounds, out: Option<&str>) -> Result<()> {
    let mut ed = PolygonEditor::new(bounds);
    for (i, raw) in vertices.iter().enumerate() {
        let p = parse_point(raw, bounds).with_context(|| format!("vertex #{i} ({raw:?})"))?;
        // Retracing the first vertex closes the ring; anything after that is
        // a usage error, not an engine call.
        if ed.is_closed() {
            bail!("vertex #{i} ({raw:?}): polygon already closed by an earlier vertex");
        }
        ed.add_vertex(p)
            .with_context(|| format!("vertex #{i} ({raw:?})"))?;
    }
    ed.close().context("closing the polygon")?;
    Report::from_editor(&ed).emit(out)
}

fn example(bounds: GridBounds, out: Option<&str>) -> Result<()> {
    let mut ed = PolygonEditor::new(bounds);
    for &(x, y) in EXAMPLE_TRIANGLE {
        ed.add_vertex(LatticePoint::new(x, y))
            .context("loading the example preset")?;
    }
    ed.close().context("closing the example preset")?;
    tracing::info!("example preset loaded");
    Report::from_editor(&ed).emit(out)
}

/// Run a script of editor ops. Rejections are the engine's expected answers,
/// so they are logged and the replay continues; only malformed lines abort.
fn replay(script: &str, bounds: GridBounds, out: Option<&str>) -> Result<()> {
    let body =
        std::fs::read_to_string(script).with_context(|| format!("reading script {script}"))?;
    let mut ed = PolygonEditor::new(bounds);
    for (lineno, line) in body.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let result = apply_op(&mut ed, line, bounds)
            .with_context(|| format!("{script}:{}: {line:?}", lineno + 1))?;
        match result {
            Ok(()) => tracing::info!(line, "ok"),
            Err(reason) => tracing::info!(line, %reason, "rejected"),
        }
    }
    Report::from_editor(&ed).emit(out)
}

/// Parse and apply one script line. The outer Result is a parse/usage error;
/// the inner one is the engine's verdict.
fn apply_op(
    ed: &mut PolygonEditor,
    line: &str,
    bounds: GridBounds,
) -> Result<std::result::Result<(), pick::prelude::EditReject>> {
    let mut words = line.split_whitespace();
    let op = words.next().unwrap_or_default();
    let args: Vec<&str> = words.collect();
    let verdict = match (op, args.as_slice()) {
        ("add", [xy]) => {
            let p = parse_point(xy, bounds)?;
            // Adding to a closed ring is a caller bug at the engine level;
            // from a script it is a plain usage error.
            if ed.is_closed() {
                bail!("polygon is already closed; use move/insert/delete or clear");
            }
            ed.add_vertex(p)
        }
        ("close", []) => ed.close(),
        ("delete", [i]) => {
            let i = parse_index(i, ed.vertex_count())?;
            ed.delete_vertex(i)
        }
        ("move", [i, xy]) => {
            let i = parse_index(i, ed.vertex_count())?;
            ed.move_vertex(i, parse_point(xy, bounds)?)
        }
        ("insert", [i, xy]) => {
            let edges = if ed.is_closed() {
                ed.vertex_count()
            } else {
                ed.vertex_count().saturating_sub(1)
            };
            let i = parse_index(i, edges)?;
            ed.insert_vertex_on_edge(i, parse_point(xy, bounds)?)
        }
        ("clear", []) => {
            ed.clear();
            Ok(())
        }
        _ => bail!("unknown op (expected add/close/delete/move/insert/clear)"),
    };
    Ok(verdict)
}

fn parse_point(raw: &str, bounds: GridBounds) -> Result<LatticePoint> {
    let Some((x, y)) = raw.split_once(',') else {
        bail!("expected \"x,y\", got {raw:?}");
    };
    let x: i64 = x.trim().parse().with_context(|| format!("x in {raw:?}"))?;
    let y: i64 = y.trim().parse().with_context(|| format!("y in {raw:?}"))?;
    let p = LatticePoint::new(x, y);
    // Off-grid points are caller bugs for the engine; turn them into plain
    // errors at this boundary instead.
    if !bounds.contains(p) {
        bail!("point {raw:?} is outside the {}x{} grid", bounds.n, bounds.n);
    }
    Ok(p)
}

fn parse_index(raw: &str, len: usize) -> Result<usize> {
    let i: usize = raw.parse().with_context(|| format!("index {raw:?}"))?;
    if i >= len {
        bail!("index {i} out of range (len {len})");
    }
    Ok(i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn parse_point_rejects_malformed_and_off_grid() {
        let bounds = GridBounds::new(11);
        assert!(parse_point("2,4", bounds).is_ok());
        assert!(parse_point("2;4", bounds).is_err());
        assert!(parse_point("12,0", bounds).is_err());
        assert!(parse_point("-1,0", bounds).is_err());
    }

    #[test]
    fn replay_survives_rejections() {
        let mut script = NamedTempFile::new().unwrap();
        writeln!(
            script,
            "# bowtie attempt, then a valid close\n\
             add 0,0\n\
             add 4,4\n\
             add 4,0\n\
             add 0,4\n\
             close"
        )
        .unwrap();
        let bounds = GridBounds::new(11);
        let mut ed = PolygonEditor::new(bounds);
        let body = std::fs::read_to_string(script.path()).unwrap();
        let mut rejected = 0;
        for line in body.lines().map(str::trim) {
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if apply_op(&mut ed, line, bounds).unwrap().is_err() {
                rejected += 1;
            }
        }
        assert_eq!(rejected, 1); // the crossing add
        assert!(ed.is_closed());
        assert_eq!(ed.vertex_count(), 3);
    }

    #[test]
    fn add_after_close_is_an_error_not_a_panic() {
        let bounds = GridBounds::new(11);
        let mut ed = PolygonEditor::new(bounds);
        // Retracing the first vertex closes the ring.
        for line in ["add 0,0", "add 4,0", "add 4,4", "add 0,0"] {
            apply_op(&mut ed, line, bounds).unwrap().unwrap();
        }
        assert!(ed.is_closed());
        // A further add is a usage error surfaced to the script author.
        assert!(apply_op(&mut ed, "add 2,2", bounds).is_err());
        assert_eq!(ed.vertex_count(), 3);
    }

    #[test]
    fn metrics_rejects_vertices_after_closing_retrace() {
        let bounds = GridBounds::new(11);
        let vertices: Vec<String> = ["0,0", "4,0", "4,4", "0,0", "2,2"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let err = metrics(&vertices, bounds, None).unwrap_err();
        assert!(err.to_string().contains("already closed"));
    }

    #[test]
    fn apply_op_flags_parse_errors() {
        let bounds = GridBounds::new(11);
        let mut ed = PolygonEditor::new(bounds);
        assert!(apply_op(&mut ed, "frobnicate", bounds).is_err());
        assert!(apply_op(&mut ed, "add 1;2", bounds).is_err());
        assert!(apply_op(&mut ed, "delete 0", bounds).is_err()); // empty editor
    }
}
