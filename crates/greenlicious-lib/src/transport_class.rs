//! Cargo density classes supplied by the product catalog.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Classification of goods by how densely they pack a vessel.
///
/// - `Bulk`: unpackaged goods such as grain or bananas, high capacity utilisation.
/// - `Volume`: bulky goods that fill space before weight, low utilisation.
/// - `Average`: statistical average over all transports of a carrier.
/// - `Unknown`: no classification available; treated like `Average`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportClass {
    Bulk,
    Average,
    Volume,
    #[default]
    Unknown,
}

impl TransportClass {
    pub const ALL: [TransportClass; 4] = [
        TransportClass::Bulk,
        TransportClass::Average,
        TransportClass::Volume,
        TransportClass::Unknown,
    ];

    /// Net tons loaded per twenty-foot equivalent unit (TEU).
    pub fn tons_per_teu(self) -> f64 {
        match self {
            TransportClass::Bulk => 14.5,
            TransportClass::Average => 10.5,
            TransportClass::Volume => 6.0,
            TransportClass::Unknown => 10.5,
        }
    }

    /// Index into per-class factor tables. `Unknown` shares the `Average` row.
    pub(crate) fn table_index(self) -> usize {
        match self {
            TransportClass::Bulk => 0,
            TransportClass::Average | TransportClass::Unknown => 1,
            TransportClass::Volume => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            TransportClass::Bulk => "bulk",
            TransportClass::Average => "average",
            TransportClass::Volume => "volume",
            TransportClass::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TransportClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransportClass {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        TransportClass::ALL
            .into_iter()
            .find(|class| class.name() == wanted)
            .ok_or_else(|| Error::UnknownVariant {
                kind: "transport class",
                value: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_shares_average_density() {
        assert_eq!(
            TransportClass::Unknown.tons_per_teu(),
            TransportClass::Average.tons_per_teu()
        );
        assert_eq!(
            TransportClass::Unknown.table_index(),
            TransportClass::Average.table_index()
        );
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("BULK".parse::<TransportClass>().unwrap(), TransportClass::Bulk);
        assert_eq!(" volume ".parse::<TransportClass>().unwrap(), TransportClass::Volume);
        assert!("liquid".parse::<TransportClass>().is_err());
    }
}
