use serde::{Deserialize, Serialize};

use stockroom_core::ValueObject;

/// Kind of stock tracked by a ledger.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Item {
    Wood,
}

impl Item {
    /// Upper-case code used in logs and serialized payloads.
    pub fn code(self) -> &'static str {
        match self {
            Item::Wood => "WOOD",
        }
    }
}

impl ValueObject for Item {}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_upper_case_code() {
        assert_eq!(serde_json::to_string(&Item::Wood).unwrap(), "\"WOOD\"");
        let parsed: Item = serde_json::from_str("\"WOOD\"").unwrap();
        assert_eq!(parsed, Item::Wood);
    }

    #[test]
    fn display_matches_code() {
        assert_eq!(Item::Wood.to_string(), Item::Wood.code());
    }
}
