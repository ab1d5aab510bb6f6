//! JSON report emitted after a session: metrics, point sets, identity gap.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use pick::metrics::{compute_derived, Metrics};
use pick::prelude::{LatticePoint, PolygonEditor};

/// Snapshot of an editor plus everything the board would display.
#[derive(Serialize)]
pub struct Report {
    pub engine_version: &'static str,
    pub grid: i64,
    pub state: String,
    pub vertices: Vec<[i64; 2]>,
    pub metrics: Metrics,
    pub pick_identity_gap: f64,
    pub boundary: Vec<[i64; 2]>,
    pub interior: Vec<[i64; 2]>,
}

impl Report {
    pub fn from_editor(editor: &PolygonEditor) -> Self {
        let d = compute_derived(editor);
        Self {
            engine_version: pick::VERSION,
            grid: editor.bounds().n,
            state: format!("{:?}", editor.state()),
            vertices: editor.vertices().iter().map(|v| [v.x, v.y]).collect(),
            metrics: d.metrics,
            pick_identity_gap: d.metrics.pick_identity_gap(),
            boundary: sorted_pairs(d.boundary),
            interior: sorted_pairs(d.interior),
        }
    }

    /// Pretty-print to stdout, or write to `out` when given.
    pub fn emit(&self, out: Option<&str>) -> Result<()> {
        let body = serde_json::to_string_pretty(self)?;
        match out {
            None => println!("{body}"),
            Some(path) => {
                let path = Path::new(path);
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)
                            .with_context(|| format!("creating {}", parent.display()))?;
                    }
                }
                fs::write(path, body).with_context(|| format!("writing {}", path.display()))?;
            }
        }
        Ok(())
    }
}

/// Point sets are unordered; sort so reports are byte-stable across runs.
fn sorted_pairs(set: HashSet<LatticePoint>) -> Vec<[i64; 2]> {
    let mut v: Vec<[i64; 2]> = set.into_iter().map(|p| [p.x, p.y]).collect();
    v.sort_unstable();
    v
}
