use costpath_paths::Path;

/// `"<cost>  x,y  x,y ..."`, every coordinate preceded by two spaces.
pub fn summary_line(path: &Path) -> String {
    let coords: String = path
        .steps()
        .iter()
        .map(|p| format!("  {},{}", p.x, p.y))
        .collect();
    format!("{}{coords}", path.cost())
}

/// Pretty JSON of the path, `null` when there is none.
pub fn json(path: Option<&Path>) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use costpath_core::{Coordinate, CostGrid};
    use costpath_paths::{Graph, find_path};

    fn path() -> Path {
        let grid = CostGrid::new(3, 1, &[vec![0, 5, 0]]).unwrap();
        find_path(&Graph::build(&grid), Coordinate::new(0, 0), Coordinate::new(2, 0)).unwrap()
    }

    #[test]
    fn summary_lists_cost_then_steps() {
        assert_eq!(summary_line(&path()), "7  0,0  1,0  2,0");
    }

    #[test]
    fn json_output() {
        let text = json(Some(&path())).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["cost"], 7);
        assert_eq!(value["steps"][2]["x"], 2);
        assert_eq!(json(None).unwrap(), "null");
    }
}
