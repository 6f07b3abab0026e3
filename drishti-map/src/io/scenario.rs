//! Scripted movement scenarios.
//!
//! A scenario replaces keyboard input with a list of timed segments:
//!
//! ```yaml
//! name: corridor sweep
//! start_px: [100.0, 100.0]
//! dt: 0.0333
//! ticks: 900
//! segments:
//!   - direction: [1.0, 0.0]
//!     ticks: 60
//!   - direction: [0.0, -1.0]
//!     boost: true
//!     ticks: 30
//! ```
//!
//! Ticks past the last segment run with no command (the agent stays put
//! and the beam keeps rotating).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::agent::MovementCommand;

/// Errors loading a scenario file.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ScenarioError {
    /// I/O error reading file
    #[error("I/O error: {0}")]
    Io(String),
    /// YAML parsing error
    #[error("Parse error: {0}")]
    Parse(String),
}

/// A scripted run loaded from YAML.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Human-readable name
    #[serde(default)]
    pub name: String,

    /// Start position in pixels (None = config or map center)
    #[serde(default)]
    pub start_px: Option<[f32; 2]>,

    /// Tick interval override (seconds)
    #[serde(default)]
    pub dt: Option<f32>,

    /// Total ticks (None = sum of segment ticks)
    #[serde(default)]
    pub ticks: Option<usize>,

    /// Movement segments, run in order
    #[serde(default)]
    pub segments: Vec<Segment>,
}

/// One command held for a number of ticks.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Segment {
    /// Heading in pixels, y down
    pub direction: [f32; 2],
    /// Apply the boost multiplier
    #[serde(default)]
    pub boost: bool,
    /// Number of ticks to hold this command
    pub ticks: usize,
}

impl Segment {
    /// Command issued on each tick of this segment.
    pub fn command(&self) -> MovementCommand {
        MovementCommand::new(self.direction, self.boost)
    }
}

impl Scenario {
    /// Load scenario from YAML file
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ScenarioError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, ScenarioError> {
        serde_yaml::from_str(yaml).map_err(|e| ScenarioError::Parse(e.to_string()))
    }

    /// Ticks covered by segments.
    pub fn segment_ticks(&self) -> usize {
        self.segments.iter().map(|s| s.ticks).sum()
    }

    /// Total ticks to run.
    pub fn total_ticks(&self) -> usize {
        self.ticks.unwrap_or_else(|| self.segment_ticks())
    }

    /// Per-tick commands for the whole run.
    pub fn commands(&self) -> impl Iterator<Item = Option<MovementCommand>> + '_ {
        self.segments
            .iter()
            .flat_map(|s| std::iter::repeat_n(Some(s.command()), s.ticks))
            .chain(std::iter::repeat(None))
            .take(self.total_ticks())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const YAML: &str = r#"
name: "Test Scenario"
start_px: [10.0, 20.0]
segments:
  - direction: [1.0, 0.0]
    ticks: 2
  - direction: [0.0, -1.0]
    boost: true
    ticks: 1
"#;

    #[test]
    fn test_parse_scenario() {
        let scenario = Scenario::from_yaml(YAML).unwrap();
        assert_eq!(scenario.name, "Test Scenario");
        assert_eq!(scenario.start_px, Some([10.0, 20.0]));
        assert_eq!(scenario.segments.len(), 2);
        assert!(scenario.segments[1].boost);
        assert_eq!(scenario.total_ticks(), 3);
    }

    #[test]
    fn test_commands_expand_segments() {
        let scenario = Scenario::from_yaml(YAML).unwrap();
        let commands: Vec<_> = scenario.commands().collect();
        assert_eq!(commands.len(), 3);
        assert_eq!(commands[0], Some(MovementCommand::new([1.0, 0.0], false)));
        assert_eq!(commands[2], Some(MovementCommand::new([0.0, -1.0], true)));
    }

    #[test]
    fn test_idle_tail() {
        let mut scenario = Scenario::from_yaml(YAML).unwrap();
        scenario.ticks = Some(5);
        let commands: Vec<_> = scenario.commands().collect();
        assert_eq!(commands.len(), 5);
        assert_eq!(commands[3], None);
        assert_eq!(commands[4], None);

        scenario.ticks = Some(1);
        assert_eq!(scenario.commands().count(), 1);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            Scenario::from_yaml("segments: 5"),
            Err(ScenarioError::Parse(_))
        ));
    }
}
