//! Interactive destination prompt.
//!
//! Invalid answers are reported and asked again; they never reach the
//! search.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use costpath_core::{Coordinate, CostGrid, GridError, parse_coordinate};

pub const DESTINATION_PROMPT: &str = "Enter destination coordinate (format: 'x y'): ";

/// Ask `message` until `parse` accepts the trimmed answer.
///
/// Each rejection is written to `output` before asking again. Running out of
/// input is an [`io::ErrorKind::UnexpectedEof`] error.
pub fn prompt_until<R, W, T, E>(
    input: &mut R,
    output: &mut W,
    message: &str,
    mut parse: impl FnMut(&str) -> Result<T, E>,
) -> io::Result<T>
where
    R: BufRead,
    W: Write,
    E: Display,
{
    let mut line = String::new();
    loop {
        write!(output, "{message}")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a valid answer was given",
            ));
        }

        match parse(line.trim()) {
            Ok(value) => return Ok(value),
            Err(err) => {
                log::debug!("rejected answer {:?}: {err}", line.trim());
                writeln!(output, "{err}")?;
            }
        }
    }
}

/// Parse `x y` and check it names a passable cell of `grid`.
pub fn parse_destination(grid: &CostGrid, line: &str) -> Result<Coordinate, GridError> {
    let (x, y) = parse_coordinate(line)?;
    grid.endpoint(x, y)
}

/// Prompt for the destination until a valid one is given.
pub fn prompt_destination<R: BufRead, W: Write>(
    grid: &CostGrid,
    input: &mut R,
    output: &mut W,
) -> io::Result<Coordinate> {
    prompt_until(input, output, DESTINATION_PROMPT, |line| {
        parse_destination(grid, line)
    })
}
