use std::{fmt, num::ParseIntError, str::FromStr};

/// Version of the loaded toolkit
///
/// Detecting it is up to the caller (usually by asking the toolkit itself once
/// its library is open); it is only used here to pick which entry points exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToolkitVersion {
    /// Major version, `2` or `3` for the toolkits this crate knows about
    pub major: u32,
    /// Minor version
    pub minor: u32,
    /// Micro (patch) version
    pub micro: u32,
}

impl ToolkitVersion {
    /// Build a version triple
    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self { major, minor, micro }
    }

    /// Whether this version is the given one or newer
    pub fn at_least(&self, major: u32, minor: u32, micro: u32) -> bool {
        *self >= Self::new(major, minor, micro)
    }
}

impl fmt::Display for ToolkitVersion {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

/// Error returned when parsing a [`ToolkitVersion`] fails
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseVersionError {
    /// The string was empty or had more than three components
    #[error("expected `major[.minor[.micro]]`, got {0:?}")]
    Malformed(String),
    /// A component is not a number
    #[error("invalid version component: {0}")]
    Component(#[from] ParseIntError),
}

impl FromStr for ToolkitVersion {
    type Err = ParseVersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts = trimmed.split('.').collect::<Vec<_>>();
        if trimmed.is_empty() || parts.len() > 3 {
            return Err(ParseVersionError::Malformed(s.into()));
        }
        let mut numbers = [0u32; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = part.parse()?;
        }
        Ok(Self::new(numbers[0], numbers[1], numbers[2]))
    }
}
