//! Stream resolution model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// A width/height pair in pixels.
///
/// The zero pair is the "custom" marker: when selected, the profile's custom
/// width and height apply instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub width: u32,
    pub height: u32,
}

impl Resolution {
    /// Marker entry meaning "use the custom dimensions"
    pub const CUSTOM: Self = Self::new(0, 0);

    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn is_custom(self) -> bool {
        self.width == 0 && self.height == 0
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_custom() {
            write!(f, "custom")
        } else {
            write!(f, "{}x{}", self.width, self.height)
        }
    }
}

impl FromStr for Resolution {
    type Err = Error;

    /// Parse `WIDTHxHEIGHT` or the literal `custom`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        if value.eq_ignore_ascii_case("custom") {
            return Ok(Self::CUSTOM);
        }

        let (width, height) = value
            .split_once(['x', 'X'])
            .ok_or_else(|| Error::InvalidInput(format!("expected WIDTHxHEIGHT, got '{value}'")))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<u32>()
                .map_err(|error| Error::InvalidInput(format!("invalid dimension '{part}': {error}")))
        };
        Ok(Self::new(parse(width)?, parse(height)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_dimension_pairs() {
        assert_eq!("1920x1080".parse::<Resolution>().unwrap(), Resolution::new(1920, 1080));
        assert_eq!(" 2560X1440 ".parse::<Resolution>().unwrap(), Resolution::new(2560, 1440));
        assert_eq!("custom".parse::<Resolution>().unwrap(), Resolution::CUSTOM);
    }

    #[test]
    fn rejects_malformed_pairs() {
        assert!("1920".parse::<Resolution>().is_err());
        assert!("axb".parse::<Resolution>().is_err());
    }

    #[test]
    fn display_names_custom_marker() {
        assert_eq!(Resolution::new(1280, 720).to_string(), "1280x720");
        assert_eq!(Resolution::CUSTOM.to_string(), "custom");
    }
}
