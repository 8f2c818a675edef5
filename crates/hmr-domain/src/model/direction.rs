//! Direction - Where the robot can move
//!
//! A closed set. Free text is turned into a Direction at the driver
//! boundary; the robot never sees an unknown direction.

use core::str::FromStr;

/// Movement direction along the y axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// All directions, in display order
    pub const ALL: [Direction; 2] = [Direction::Forward, Direction::Backward];

    /// Change applied to `y` when moving this way
    pub fn delta_y(self) -> i32 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when text does not name a direction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseDirectionError {
    pub input: String,
}

impl core::fmt::Display for ParseDirectionError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Unknown direction '{}'. Expected 'forward' or 'backward'",
            self.input
        )
    }
}

impl std::error::Error for ParseDirectionError {}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Direction::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseDirectionError {
                input: trimmed.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("forward".parse::<Direction>(), Ok(Direction::Forward));
        assert_eq!("FORWARD".parse::<Direction>(), Ok(Direction::Forward));
        assert_eq!(" Backward ".parse::<Direction>(), Ok(Direction::Backward));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "sideways".parse::<Direction>().unwrap_err();
        assert_eq!(err.input, "sideways");
        assert!(err.to_string().contains("sideways"));

        assert!("".parse::<Direction>().is_err());
    }

    #[test]
    fn test_delta() {
        assert_eq!(Direction::Forward.delta_y(), 1);
        assert_eq!(Direction::Backward.delta_y(), -1);
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for direction in Direction::ALL {
            assert_eq!(direction.to_string().parse::<Direction>(), Ok(direction));
        }
    }
}
