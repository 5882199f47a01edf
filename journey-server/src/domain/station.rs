//! Station code types.

use std::fmt;

use serde::{Deserialize, Serialize, de};

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A valid station code: 2 to 5 uppercase ASCII letters.
///
/// Station codes are the short identifiers the timetable uses for stations
/// (e.g. "NDLS" for New Delhi, "BCT" for Mumbai Central). This type
/// guarantees that any `StationCode` value is valid by construction.
///
/// The `Ord` impl is plain lexicographic order on the code text; the planner
/// relies on it for deterministic tie-breaking.
///
/// # Examples
///
/// ```
/// use journey_server::domain::StationCode;
///
/// let ndls = StationCode::parse("NDLS").unwrap();
/// assert_eq!(ndls.as_str(), "NDLS");
///
/// // Lowercase is rejected
/// assert!(StationCode::parse("ndls").is_err());
///
/// // Wrong length is rejected
/// assert!(StationCode::parse("N").is_err());
/// assert!(StationCode::parse("NEWDELHI").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationCode {
    // Padded with zero bytes past `len`; zero sorts before any letter,
    // so derived Ord is lexicographic with shorter codes first.
    bytes: [u8; 5],
    len: u8,
}

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be 2 to 5 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let raw = s.as_bytes();

        if raw.len() < 2 || raw.len() > 5 {
            return Err(InvalidStationCode {
                reason: "must be 2 to 5 characters",
            });
        }

        let mut bytes = [0u8; 5];
        for (i, &b) in raw.iter().enumerate() {
            if !b.is_ascii_uppercase() {
                return Err(InvalidStationCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
            bytes[i] = b;
        }

        Ok(StationCode {
            bytes,
            len: raw.len() as u8,
        })
    }

    /// Parse a station code, tolerating surrounding whitespace and lowercase.
    ///
    /// This is the form used for user-supplied query parameters; dataset
    /// records are expected to be canonical already and go through `parse`.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the station code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap()
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StationCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StationCode {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        StationCode::parse(&s).map_err(de::Error::custom)
    }
}

/// A station record: code plus display attributes.
///
/// Everything except the code is opaque payload to the graph; the engine
/// never interprets it beyond identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub code: StationCode,
    pub name: String,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl Station {
    /// Create a station with just a code and name.
    pub fn new(code: StationCode, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
            city: None,
            latitude: None,
            longitude: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_codes() {
        assert!(StationCode::parse("NDLS").is_ok());
        assert!(StationCode::parse("BCT").is_ok());
        assert!(StationCode::parse("SBC").is_ok());
        assert!(StationCode::parse("AB").is_ok());
        assert!(StationCode::parse("ZZZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(StationCode::parse("ndls").is_err());
        assert!(StationCode::parse("Ndls").is_err());
        assert!(StationCode::parse("NDLs").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(StationCode::parse("").is_err());
        assert!(StationCode::parse("N").is_err());
        assert!(StationCode::parse("NEWDEL").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(StationCode::parse("N1LS").is_err());
        assert!(StationCode::parse("N-LS").is_err());
        assert!(StationCode::parse("N LS").is_err());
        assert!(StationCode::parse("NÖLS").is_err());
    }

    #[test]
    fn parse_normalized_tolerates_case_and_space() {
        assert_eq!(
            StationCode::parse_normalized(" ndls "),
            StationCode::parse("NDLS")
        );
        assert!(StationCode::parse_normalized("  ").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let code = StationCode::parse("NDLS").unwrap();
        assert_eq!(code.as_str(), "NDLS");
    }

    #[test]
    fn display_and_debug() {
        let code = StationCode::parse("BCT").unwrap();
        assert_eq!(format!("{}", code), "BCT");
        assert_eq!(format!("{:?}", code), "StationCode(BCT)");
    }

    #[test]
    fn ordering_is_lexicographic() {
        let ab = StationCode::parse("AB").unwrap();
        let abc = StationCode::parse("ABC").unwrap();
        let ba = StationCode::parse("BA").unwrap();
        assert!(ab < abc);
        assert!(abc < ba);
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(StationCode::parse("NDLS").unwrap());
        assert!(set.contains(&StationCode::parse("NDLS").unwrap()));
        assert!(!set.contains(&StationCode::parse("BCT").unwrap()));
    }

    #[test]
    fn serde_roundtrip() {
        let code = StationCode::parse("NDLS").unwrap();
        let json = serde_json::to_string(&code).unwrap();
        assert_eq!(json, "\"NDLS\"");
        let back: StationCode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, code);
    }

    #[test]
    fn serde_rejects_invalid() {
        assert!(serde_json::from_str::<StationCode>("\"ndls\"").is_err());
        assert!(serde_json::from_str::<StationCode>("\"X\"").is_err());
    }
}
