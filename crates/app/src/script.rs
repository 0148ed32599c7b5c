//! Input scripts for the headless driver.
//!
//! `CITYBUILDER_SCRIPT` may point at a JSON file holding an array of
//! `PlacementInput` values. Without it the built-in demo runs.

use std::fmt;
use std::path::{Path, PathBuf};

use placement::{Coordinate, PlacementInput};

pub const SCRIPT_ENV_VAR: &str = "CITYBUILDER_SCRIPT";

#[derive(Debug)]
pub enum ScriptError {
    Io { path: PathBuf, source: std::io::Error },
    Parse { path: PathBuf, source: serde_json::Error },
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Io { path, source } => {
                write!(f, "cannot read script {}: {}", path.display(), source)
            }
            ScriptError::Parse { path, source } => {
                write!(f, "invalid script {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ScriptError::Io { source, .. } => Some(source),
            ScriptError::Parse { source, .. } => Some(source),
        }
    }
}

pub fn load_script(path: &Path) -> Result<Vec<PlacementInput>, ScriptError> {
    let text = std::fs::read_to_string(path).map_err(|source| ScriptError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_script(&text).map_err(|source| ScriptError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_script(text: &str) -> Result<Vec<PlacementInput>, serde_json::Error> {
    serde_json::from_str(text)
}

/// Select the road, lay a short street by dragging, try to build on top of
/// it, bulldoze one cell and deselect.
pub fn demo_script() -> Vec<PlacementInput> {
    vec![
        PlacementInput::select("road"),
        PlacementInput::hover(3, 4),
        PlacementInput::place(3, 4),
        PlacementInput::place(3, 4),
        PlacementInput::DragStart {
            coord: Coordinate::new(-5, 0),
        },
        PlacementInput::DragMove {
            coord: Coordinate::new(0, 0),
        },
        PlacementInput::DragEnd {
            coord: Coordinate::new(5, 0),
        },
        PlacementInput::Remove {
            coord: Coordinate::new(0, 0),
        },
        PlacementInput::place(25, 0),
        PlacementInput::deselect(),
        PlacementInput::place(1, 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_externally_tagged_inputs() {
        let text = r#"[
            {"Select": {"type_id": "road"}},
            {"Hover": {"coord": {"x": 1, "z": 2}}},
            {"Place": {"coord": {"x": 1, "z": 2}}},
            {"Select": {"type_id": null}}
        ]"#;
        let script = parse_script(text).unwrap();
        assert_eq!(
            script,
            vec![
                PlacementInput::select("road"),
                PlacementInput::hover(1, 2),
                PlacementInput::place(1, 2),
                PlacementInput::deselect(),
            ]
        );
    }

    #[test]
    fn malformed_script_is_an_error() {
        assert!(parse_script(r#"[{"Teleport": {}}]"#).is_err());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_script(Path::new("/nonexistent/script.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/script.json"));
    }
}
