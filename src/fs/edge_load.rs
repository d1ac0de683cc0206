use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::{debug, info};

use crate::{
    error::{GraphError, GraphResult},
    search::AdjacencyGraph,
};

/// Parses one `NODE_A,NODE_B` line into its two trimmed labels.
///
/// Returns `Ok(None)` for a blank line. Any other line must hold exactly two
/// non-empty labels separated by a single comma.
///
/// ```
/// use graphwalk::fs::parse_edge_line;
///
/// assert_eq!(parse_edge_line(" N_0 , N_1 ", 1).unwrap(), Some(("N_0", "N_1")));
/// assert_eq!(parse_edge_line("   ", 2).unwrap(), None);
/// assert!(parse_edge_line("N_0", 3).is_err());
/// ```
pub fn parse_edge_line(line: &str, line_number: usize) -> GraphResult<Option<(&str, &str)>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let malformed = || GraphError::MalformedInput {
        line_number,
        content: line.to_string(),
    };

    let (left, right) = line.split_once(',').ok_or_else(malformed)?;
    let (left, right) = (left.trim(), right.trim());
    if left.is_empty() || right.is_empty() || right.contains(',') {
        return Err(malformed());
    }
    Ok(Some((left, right)))
}

impl AdjacencyGraph {
    /// Builds the undirected graph described by `lines`, one edge per line.
    ///
    /// The whole build fails on the first malformed line; blank lines are
    /// skipped. Input without any edge yields an empty graph.
    pub fn from_edge_lines<I, S>(lines: I) -> GraphResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut graph = AdjacencyGraph::new();
        let mut edges = 0usize;

        for (i, line) in lines.into_iter().enumerate() {
            if let Some((a, b)) = parse_edge_line(line.as_ref(), i + 1)? {
                graph.add_edge(a, b);
                edges += 1;
            }
        }
        debug!(edge_lines = edges, "parsed edge list");
        Ok(graph)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> GraphResult<Self> {
        let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
        Self::from_edge_lines(lines)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> GraphResult<Self> {
        let path = path.as_ref();
        let graph = Self::from_reader(BufReader::new(File::open(path)?))?;
        info!(
            path = %path.display(),
            nodes = graph.len(),
            edges = graph.edge_count(),
            "loaded graph"
        );
        Ok(graph)
    }
}
