//! Byte units and server-imposed size ceilings

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Deserializer};

use crate::error::AssertionError;

/// Decimal multipliers for size suffixes. Lookups are case-insensitive.
pub const BYTE_UNITS: [(&str, u64); 8] = [
    ("K", 1_000),
    ("KB", 1_000),
    ("M", 1_000_000),
    ("MB", 1_000_000),
    ("G", 1_000_000_000),
    ("GB", 1_000_000_000),
    ("T", 1_000_000_000_000),
    ("TB", 1_000_000_000_000),
];

/// Multiplier for a unit suffix, case-insensitive.
///
/// `B` is one byte. Anything not in [`BYTE_UNITS`] yields `None`.
///
/// ```rust
/// use touchstone::upload::byte_multiplier;
///
/// assert_eq!(byte_multiplier("mb"), Some(1_000_000));
/// assert_eq!(byte_multiplier("B"), Some(1));
/// assert_eq!(byte_multiplier("MiB"), None);
/// ```
pub fn byte_multiplier(unit: &str) -> Option<u64> {
    let unit = unit.trim();
    if unit.eq_ignore_ascii_case("b") {
        return Some(1);
    }
    BYTE_UNITS
        .iter()
        .find(|(symbol, _)| symbol.eq_ignore_ascii_case(unit))
        .map(|&(_, multiplier)| multiplier)
}

fn canonical_symbol(unit: &str) -> &'static str {
    BYTE_UNITS
        .iter()
        .find(|(symbol, _)| symbol.eq_ignore_ascii_case(unit.trim()))
        .map_or("B", |&(symbol, _)| symbol)
}

/// A configured size, such as `8M` or `512K`.
///
/// A value of zero means "no limit", matching how servers usually spell an
/// unlimited body size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeLimit {
    value: f64,
    unit: &'static str,
    multiplier: u64,
}

impl SizeLimit {
    /// Build a limit from a number and a unit suffix.
    ///
    /// An empty suffix or `B` means bytes.
    pub fn new(value: f64, unit: &str) -> Result<Self, AssertionError> {
        if !value.is_finite() || value < 0.0 {
            return Err(AssertionError::invalid_argument(format!(
                "size limit must be a non-negative number, got {value}"
            )));
        }
        let multiplier = if unit.trim().is_empty() {
            1
        } else {
            byte_multiplier(unit).ok_or_else(|| {
                AssertionError::invalid_argument(format!("unknown size unit '{unit}'"))
            })?
        };
        Ok(SizeLimit {
            value,
            unit: canonical_symbol(unit),
            multiplier,
        })
    }

    /// A limit expressed directly in bytes.
    pub fn bytes(bytes: u64) -> Self {
        SizeLimit {
            value: bytes as f64,
            unit: "B",
            multiplier: 1,
        }
    }

    /// No limit at all.
    pub fn unlimited() -> Self {
        SizeLimit::bytes(0)
    }

    /// The numeric part.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The canonical unit suffix (`B` for bytes).
    pub fn unit(&self) -> &'static str {
        self.unit
    }

    /// The limit in bytes, or `None` when unlimited.
    pub fn ceiling(&self) -> Option<u64> {
        if self.value == 0.0 {
            None
        } else {
            Some((self.value * self.multiplier as f64).round() as u64)
        }
    }
}

impl FromStr for SizeLimit {
    type Err = AssertionError;

    /// Parse `"<number><unit>"`, e.g. `"2M"`, `"1.5 GB"`, `"1048576"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let split = trimmed
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(trimmed.len());
        let (number, unit) = trimmed.split_at(split);

        let value: f64 = number.parse().map_err(|_| {
            AssertionError::invalid_argument(format!("invalid size limit '{s}'"))
        })?;
        SizeLimit::new(value, unit)
    }
}

impl TryFrom<String> for SizeLimit {
    type Error = AssertionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

// Read from its textual form, e.g. `post_max_size = "8M"`
#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for SizeLimit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        SizeLimit::try_from(text).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for SizeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit == "B" {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{}{}", self.value, self.unit)
        }
    }
}

/// Where the server's upload ceilings come from.
pub trait ServerLimitProvider: Send + Sync {
    /// Maximum size of a whole request body.
    fn post_max_size(&self) -> SizeLimit;

    /// Maximum size of a single uploaded file.
    fn upload_max_filesize(&self) -> SizeLimit;
}

/// Statically configured server ceilings.
///
/// Defaults to an 8 MB request body and a 2 MB file.
///
/// # Example
///
/// ```rust
/// use touchstone::upload::{max_server_file_size, ServerLimits};
///
/// let limits = ServerLimits::parse("20M", "5M").unwrap();
/// assert_eq!(max_server_file_size(&limits), Some(5_000_000));
///
/// assert_eq!(max_server_file_size(&ServerLimits::default()), Some(2_000_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Deserialize), serde(default))]
pub struct ServerLimits {
    /// See [`ServerLimitProvider::post_max_size`].
    pub post_max_size: SizeLimit,
    /// See [`ServerLimitProvider::upload_max_filesize`].
    pub upload_max_filesize: SizeLimit,
}

impl ServerLimits {
    /// Build from two already parsed limits.
    pub fn new(post_max_size: SizeLimit, upload_max_filesize: SizeLimit) -> Self {
        ServerLimits {
            post_max_size,
            upload_max_filesize,
        }
    }

    /// Parse both limits from their textual form.
    pub fn parse(post_max_size: &str, upload_max_filesize: &str) -> Result<Self, AssertionError> {
        Ok(ServerLimits::new(
            post_max_size.parse()?,
            upload_max_filesize.parse()?,
        ))
    }
}

impl Default for ServerLimits {
    fn default() -> Self {
        ServerLimits {
            post_max_size: SizeLimit {
                value: 8.0,
                unit: "M",
                multiplier: 1_000_000,
            },
            upload_max_filesize: SizeLimit {
                value: 2.0,
                unit: "M",
                multiplier: 1_000_000,
            },
        }
    }
}

impl ServerLimitProvider for ServerLimits {
    fn post_max_size(&self) -> SizeLimit {
        self.post_max_size
    }

    fn upload_max_filesize(&self) -> SizeLimit {
        self.upload_max_filesize
    }
}

impl<P: ServerLimitProvider + ?Sized> ServerLimitProvider for &P {
    fn post_max_size(&self) -> SizeLimit {
        (**self).post_max_size()
    }

    fn upload_max_filesize(&self) -> SizeLimit {
        (**self).upload_max_filesize()
    }
}

/// The binding server ceiling in bytes: the smaller of the two limits.
///
/// `None` when neither limit is set.
pub fn max_server_file_size<P: ServerLimitProvider + ?Sized>(limits: &P) -> Option<u64> {
    match (
        limits.post_max_size().ceiling(),
        limits.upload_max_filesize().ceiling(),
    ) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}
