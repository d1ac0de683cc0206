use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use crate::search::graph_algo::TraversalOutcome;

pub const TSV_HEADER: &str = "Node Pair\tBFS Distance\tBFS Time (ms)\tDFS Distance\tDFS Time (ms)";

/// Timings and visited counts for one start/target pair.
#[derive(Debug, Clone, Serialize)]
pub struct ReportRow {
    pub start: String,
    pub target: String,
    #[serde(rename = "bfs_visited")]
    pub bfs: TraversalOutcome,
    pub bfs_ms: f64,
    #[serde(rename = "dfs_visited")]
    pub dfs: TraversalOutcome,
    pub dfs_ms: f64,
}

impl ReportRow {
    pub fn pair_label(&self) -> String {
        format!("{} -> {}", self.start, self.target)
    }

    /// Row line, times with four decimals and `-` for unreachable. The value
    /// columns are separated by two tabs so they line up under the header.
    pub fn to_tsv(&self) -> String {
        format!(
            "{}\t{}\t\t{:.4}\t\t{}\t\t{:.4}",
            self.pair_label(),
            self.bfs,
            self.bfs_ms,
            self.dfs,
            self.dfs_ms
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ReportFormat {
    /// Header line followed by one tab-separated line per target
    #[default]
    Tsv,
    /// One JSON object per target, `null` counts for unreachable targets
    Json,
}

/// Writes `rows` to `out` in the requested format.
pub fn write_report<W: Write>(rows: &[ReportRow], format: ReportFormat, out: &mut W) -> io::Result<()> {
    match format {
        ReportFormat::Tsv => {
            writeln!(out, "{TSV_HEADER}")?;
            for row in rows {
                writeln!(out, "{}", row.to_tsv())?;
            }
        }
        ReportFormat::Json => {
            for row in rows {
                serde_json::to_writer(&mut *out, row)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()
}
