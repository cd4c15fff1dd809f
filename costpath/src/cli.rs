//! Command-line configuration.

use std::path::PathBuf;

use clap::Parser;

/// Find the least-cost path across a text cost map.
///
/// The map's first line is `width height`, the second the start `x y`,
/// followed by `height` rows of `width` costs (`-1` is impassable).
#[derive(Debug, Clone, Parser)]
#[command(name = "costpath", version, about)]
pub struct Args {
    /// Map file, resolved against the current directory.
    #[arg(long, short, default_value = "map.txt")]
    pub map: PathBuf,

    /// Destination `X Y`. Prompted for interactively when omitted.
    #[arg(
        long,
        num_args = 2,
        value_names = ["X", "Y"],
        allow_negative_numbers = true
    )]
    pub goal: Option<Vec<i64>>,

    /// Print the path as JSON instead of the rendered map.
    #[arg(long)]
    pub json: bool,

    /// Disable colored glyphs.
    #[arg(long)]
    pub plain: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_map_txt() {
        let args = Args::parse_from(["costpath"]);
        assert_eq!(args.map, PathBuf::from("map.txt"));
        assert_eq!(args.goal, None);
        assert!(!args.json);
        assert!(!args.plain);
    }

    #[test]
    fn goal_takes_two_values() {
        let args = Args::parse_from(["costpath", "--map", "m.txt", "--goal", "2", "3", "--json"]);
        assert_eq!(args.map, PathBuf::from("m.txt"));
        assert_eq!(args.goal, Some(vec![2, 3]));
        assert!(args.json);
    }

    #[test]
    fn goal_with_one_value_is_rejected() {
        assert!(Args::try_parse_from(["costpath", "--goal", "2"]).is_err());
    }
}
