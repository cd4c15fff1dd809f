//! Glyph rendering of a map and its path.

use std::collections::HashMap;
use std::io::{self, Write};

use costpath_core::{Coordinate, CostGrid, Direction};
use costpath_paths::Path;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

/// What a single cell shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Start,
    End,
    /// Path cell, pointing at the next step.
    Step(Direction),
    Obstacle,
    Open,
}

impl Glyph {
    /// Three-column text of the glyph.
    pub fn text(self) -> &'static str {
        match self {
            Self::Start => " S ",
            Self::End => " E ",
            Self::Step(Direction::Left) => " < ",
            Self::Step(Direction::Right) => " > ",
            Self::Step(Direction::Down) => " v ",
            Self::Step(Direction::Up) => " ^ ",
            Self::Obstacle => " ■ ",
            Self::Open => "   ",
        }
    }

    fn color(self) -> Option<Color> {
        match self {
            Self::Start => Some(Color::Green),
            Self::End => Some(Color::Red),
            Self::Step(_) => Some(Color::Yellow),
            Self::Obstacle => Some(Color::DarkGrey),
            Self::Open => None,
        }
    }
}

/// Lay out the glyph of every cell, row by row.
///
/// Start and end markers win over path arrows, which win over obstacles.
pub fn glyph_rows(
    grid: &CostGrid,
    start: Coordinate,
    goal: Coordinate,
    path: Option<&Path>,
) -> Vec<Vec<Glyph>> {
    let arrows: HashMap<Coordinate, Direction> =
        path.map(|p| p.directions().collect()).unwrap_or_default();

    (0..grid.height())
        .map(|y| {
            (0..grid.width())
                .map(|x| {
                    let p = Coordinate::new(x, y);
                    if p == start {
                        Glyph::Start
                    } else if p == goal {
                        Glyph::End
                    } else if let Some(&d) = arrows.get(&p) {
                        Glyph::Step(d)
                    } else if !grid.is_passable(p) {
                        Glyph::Obstacle
                    } else {
                        Glyph::Open
                    }
                })
                .collect()
        })
        .collect()
}

/// Write the rows, each followed by a blank line.
pub fn write_map<W: Write>(out: &mut W, rows: &[Vec<Glyph>], color: bool) -> io::Result<()> {
    for row in rows {
        for &glyph in row {
            match glyph.color().filter(|_| color) {
                Some(c) => queue!(out, SetForegroundColor(c), Print(glyph.text()), ResetColor)?,
                None => queue!(out, Print(glyph.text()))?,
            }
        }
        queue!(out, Print("\n\n"))?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use costpath_paths::{Graph, find_path};

    fn grid() -> CostGrid {
        CostGrid::new(3, 2, &[vec![0, -1, 0], vec![0, 0, 0]]).unwrap()
    }

    fn plain(rows: &[Vec<Glyph>]) -> String {
        let mut out = Vec::new();
        write_map(&mut out, rows, false).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn renders_path_arrows() {
        let grid = grid();
        let (start, goal) = (Coordinate::new(0, 0), Coordinate::new(2, 0));
        let path = find_path(&Graph::build(&grid), start, goal).unwrap();
        let rows = glyph_rows(&grid, start, goal, Some(&path));
        assert_eq!(
            rows,
            vec![
                vec![Glyph::Start, Glyph::Obstacle, Glyph::End],
                vec![
                    Glyph::Step(Direction::Right),
                    Glyph::Step(Direction::Right),
                    Glyph::Step(Direction::Up)
                ],
            ]
        );
        assert_eq!(plain(&rows), " S  ■  E \n\n >  >  ^ \n\n");
    }

    #[test]
    fn renders_without_path() {
        let grid = grid();
        let rows = glyph_rows(&grid, Coordinate::new(0, 1), Coordinate::new(2, 1), None);
        assert_eq!(plain(&rows), "    ■    \n\n S     E \n\n");
    }

    #[test]
    fn colored_output_wraps_glyphs() {
        let rows = vec![vec![Glyph::Start, Glyph::Open]];
        let mut out = Vec::new();
        write_map(&mut out, &rows, true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\u{1b}["));
        assert!(text.contains(" S "));
        assert!(text.ends_with("   \n\n"));
    }
}
