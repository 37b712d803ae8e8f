//! Port types with validation and parsing.
//!
//! The `Port` newtype ensures values are always valid port numbers (1-65535).
//! `PortList` turns a textual port expression into the ordered, de-duplicated
//! sequence of ports a scan works through.

use crate::error::{PortError, PortParseResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

const RANGE_DELIMITER: char = '-';
const LIST_SEPARATOR: char = ',';

/// A validated network port number (1-65535).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Port(u16);

impl Port {
    /// Minimum valid port number.
    pub const MIN: u16 = 1;
    /// Maximum valid port number.
    pub const MAX: u16 = 65535;

    /// Create a new Port from a u16, returning None if invalid.
    #[inline]
    pub const fn new(port: u16) -> Option<Self> {
        if port >= Self::MIN {
            Some(Self(port))
        } else {
            None
        }
    }

    /// Get the raw port number.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self.0
    }

    /// Validate a parsed integer, which may lie well outside `u16`.
    fn from_parsed(value: i64, spec: &str) -> PortParseResult<Self> {
        u16::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| PortError::InvalidRange(spec.to_string()))
    }
}

impl fmt::Display for Port {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for Port {
    type Error = PortError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| PortError::InvalidRange(value.to_string()))
    }
}

impl From<Port> for u16 {
    fn from(port: Port) -> Self {
        port.0
    }
}

/// Ordered sequence of distinct ports, in the order they are scanned and reported.
///
/// Parsed from either a range (`"1-1024"`) or a comma list (`"80,443"`).
/// The form is chosen by the presence of `-` anywhere in the input, so a
/// mixed expression such as `"80,443-445,22"` goes down the range path and
/// fails with [`PortError::InvalidFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct PortList(Vec<Port>);

impl PortList {
    /// Parse a port expression.
    pub fn parse(spec: &str) -> PortParseResult<Self> {
        if spec.contains(RANGE_DELIMITER) {
            Self::parse_range(spec)
        } else {
            Self::parse_list(spec)
        }
    }

    fn parse_range(spec: &str) -> PortParseResult<Self> {
        let (start, end) = spec
            .split_once(RANGE_DELIMITER)
            .ok_or_else(|| PortError::InvalidFormat(spec.to_string()))?;

        let start = parse_number(start, spec)?;
        let end = parse_number(end, spec)?;

        if start > end || start < i64::from(Port::MIN) || end > i64::from(Port::MAX) {
            return Err(PortError::InvalidRange(spec.to_string()));
        }

        let ports = (start..=end)
            .map(|p| Port::from_parsed(p, spec))
            .collect::<PortParseResult<Vec<_>>>()?;

        Ok(Self(ports))
    }

    fn parse_list(spec: &str) -> PortParseResult<Self> {
        let mut seen = HashSet::new();
        let mut ports = Vec::new();

        for part in spec.split(LIST_SEPARATOR) {
            let value = parse_number(part, spec)?;
            let port = Port::from_parsed(value, spec)?;
            if seen.insert(port) {
                ports.push(port);
            }
        }

        Ok(Self(ports))
    }

    /// Number of ports in the list.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list holds no ports. Never true for a parsed list.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consume the list, returning the underlying ports.
    pub fn into_vec(self) -> Vec<Port> {
        self.0
    }
}

fn parse_number(token: &str, spec: &str) -> PortParseResult<i64> {
    token
        .trim()
        .parse()
        .map_err(|_| PortError::InvalidFormat(spec.to_string()))
}

impl Deref for PortList {
    type Target = [Port];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromStr for PortList {
    type Err = PortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<Vec<Port>> for PortList {
    fn from(ports: Vec<Port>) -> Self {
        let mut seen = HashSet::new();
        Self(ports.into_iter().filter(|p| seen.insert(*p)).collect())
    }
}

impl<'a> IntoIterator for &'a PortList {
    type Item = &'a Port;
    type IntoIter = std::slice::Iter<'a, Port>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
