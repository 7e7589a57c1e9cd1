/// Command-line configuration for the terminal demo
use bluegeom_core::{parse, Offset4i, Point3f, Point3i};
use clap::Parser;

/// Animate a point from a source to a destination in the terminal.
///
/// Coordinates accept `(x, y, z)` or `x,y,z`. Insets accept four values
/// `left, right, top, bottom` or a single value for every side.
#[derive(Parser, Debug, Clone)]
#[command(name = "bluegeom-terminal", version, about)]
pub struct DemoConfig {
    /// Starting position
    #[arg(long, value_parser = parse_point, default_value = "(-8, -4, 0)")]
    pub source: Point3f,

    /// Final position
    #[arg(long, value_parser = parse_point, default_value = "(8, 4, 0)")]
    pub destination: Point3f,

    /// Fraction of the trip covered each frame, greater than zero
    #[arg(long, value_parser = parse_step, default_value_t = 0.02)]
    pub step: f32,

    /// Frames per second
    #[arg(long, default_value_t = 30)]
    pub fps: u32,

    /// Terminal cells per world unit
    #[arg(long, default_value_t = 2.0)]
    pub scale: f32,

    /// Cells kept clear around the grid
    #[arg(long, value_parser = parse_insets, default_value = "0, 0, 1, 0")]
    pub insets: Offset4i,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            source: Point3f::frozen_from(&Point3i::frozen(-8, -4, 0)),
            destination: Point3f::frozen_from(&Point3i::frozen(8, 4, 0)),
            step: 0.02,
            fps: 30,
            scale: 2.0,
            insets: Offset4i::frozen(0, 0, 1, 0),
        }
    }
}

fn parse_point(input: &str) -> Result<Point3f, String> {
    let [x, y, z] = parse::parse_triple::<f32>(input).map_err(|e| e.to_string())?;
    Point3f::frozen(x, y, z).map_err(|e| e.to_string())
}

/// A step that never reaches 1 would keep the point from arriving.
pub(crate) fn parse_step(input: &str) -> Result<f32, String> {
    let step: f32 = input
        .trim()
        .parse()
        .map_err(|e| format!("invalid step {:?}: {}", input, e))?;
    if !step.is_finite() || step <= 0.0 {
        return Err(format!("step must be a finite number above zero, got {}", step));
    }
    Ok(step)
}

fn parse_insets(input: &str) -> Result<Offset4i, String> {
    let [left, right, top, bottom] = parse::parse_offset(input).map_err(|e| e.to_string())?;
    Ok(Offset4i::frozen(left, right, top, bottom))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bluegeom_core::DualMode;

    #[test]
    fn test_defaults_match_cli() {
        let parsed = DemoConfig::try_parse_from(["bluegeom-terminal"]).unwrap();
        let defaults = DemoConfig::default();
        assert!(parsed.source.at(&defaults.source));
        assert!(parsed.destination.at(&defaults.destination));
        assert_eq!(parsed.step, defaults.step);
        assert_eq!(parsed.fps, defaults.fps);
        assert_eq!(parsed.insets, defaults.insets);
    }

    #[test]
    fn test_parse_arguments() {
        let config = DemoConfig::try_parse_from([
            "bluegeom-terminal",
            "--source",
            "1,2,3",
            "--insets",
            "2",
            "--step",
            "0.5",
        ])
        .unwrap();
        assert_eq!(config.source.components(), [1.0, 2.0, 3.0]);
        assert!(!config.source.is_mutable());
        assert_eq!(config.insets.sides(), [2, 2, 2, 2]);
        assert_eq!(config.step, 0.5);
    }

    #[test]
    fn test_rejects_step_that_never_arrives() {
        for step in ["0", "-0.5", "inf", "NaN", "fast"] {
            let arg = format!("--step={}", step);
            assert!(
                DemoConfig::try_parse_from(["bluegeom-terminal", arg.as_str()]).is_err(),
                "accepted {}",
                arg
            );
        }
        assert_eq!(parse_step(" 0.25 "), Ok(0.25));
    }

    #[test]
    fn test_rejects_bad_literals() {
        assert!(DemoConfig::try_parse_from(["bluegeom-terminal", "--source", "1,2"]).is_err());
        assert!(
            DemoConfig::try_parse_from(["bluegeom-terminal", "--destination", "nan,0,0"]).is_err()
        );
    }
}
