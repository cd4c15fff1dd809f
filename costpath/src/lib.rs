//! Find the least-cost path across a text cost map.
//!
//! The binary reads a map file, asks for a destination, runs A* over the
//! map's 4-connected graph and prints the map with the path drawn on it,
//! followed by the total cost and the visited coordinates.

pub mod cli;
pub mod prompt;
pub mod render;
pub mod report;

use std::fs;
use std::io::{BufRead, Write};
use std::path::Path as FsPath;

use anyhow::{Context, Result, bail};
use costpath_core::{Coordinate, MapFile};
use costpath_paths::{Graph, Path, find_path};

pub use cli::Args;

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Found(Path),
    /// The destination cannot be reached from the start.
    NoPath,
}

/// Read and validate the map file at `path`.
pub fn load_map(path: &FsPath) -> Result<MapFile> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read map file {}", path.display()))?;
    MapFile::parse(&text).with_context(|| format!("invalid map file {}", path.display()))
}

/// Load the configured map, pick the destination and solve.
///
/// The destination prompt and its rejections go to `prompt_output`; only
/// the result is written to `output`.
pub fn run<R: BufRead, P: Write, W: Write>(
    args: &Args,
    color: bool,
    input: &mut R,
    prompt_output: &mut P,
    output: &mut W,
) -> Result<Outcome> {
    let map = load_map(&args.map)?;
    log::info!(
        "loaded {} map from {}, start {}",
        map.grid.bounds(),
        args.map.display(),
        map.start
    );

    let goal = match args.goal.as_deref() {
        Some(&[x, y]) => map.grid.endpoint(x, y).context("invalid --goal")?,
        Some(other) => bail!("--goal takes exactly two values, got {}", other.len()),
        None => prompt::prompt_destination(&map.grid, input, prompt_output)
            .context("failed to read the destination")?,
    };

    solve(&map, goal, args.json, color, output)
}

/// Search from the map's start to `goal` and write the result.
pub fn solve<W: Write>(
    map: &MapFile,
    goal: Coordinate,
    json: bool,
    color: bool,
    output: &mut W,
) -> Result<Outcome> {
    let graph = Graph::build(&map.grid);
    let path = match find_path(&graph, map.start, goal) {
        Ok(path) => Some(path),
        Err(err) if err.is_no_path() => {
            log::info!("{err}");
            None
        }
        Err(err) => return Err(err).context("search failed"),
    };

    if json {
        writeln!(output, "{}", report::json(path.as_ref())?)?;
    } else {
        let rows = render::glyph_rows(&map.grid, map.start, goal, path.as_ref());
        render::write_map(output, &rows, color)?;
        match &path {
            Some(path) => writeln!(output, "{}", report::summary_line(path))?,
            None => writeln!(output, "no path found")?,
        }
    }

    Ok(match path {
        Some(path) => Outcome::Found(path),
        None => Outcome::NoPath,
    })
}
