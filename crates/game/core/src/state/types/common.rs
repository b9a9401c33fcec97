use std::fmt;

use strum::IntoEnumIterator;

/// Identity of a connected player, assigned by the transport layer.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for PlayerId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable identifier of an item instance. Never reused within a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ItemId(pub u32);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The six zones of the board, in display order.
///
/// [`Location::Showdown`] is the decisive location: entering it is one-way
/// and standing in it regenerates hit points at settlement.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::EnumCount,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Location {
    StartingGrounds,
    Armory,
    Menagerie,
    Apothecary,
    BlackMarket,
    Showdown,
}

impl Location {
    /// Where every player starts.
    pub const START: Self = Location::StartingGrounds;

    /// The irreversible endgame zone.
    pub const DECISIVE: Self = Location::Showdown;

    pub fn all() -> impl Iterator<Item = Location> {
        Location::iter()
    }

    /// Wire name (`snake_case`).
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            Location::StartingGrounds => "Starting Grounds",
            Location::Armory => "Armory",
            Location::Menagerie => "Menagerie",
            Location::Apothecary => "Apothecary",
            Location::BlackMarket => "Black Market",
            Location::Showdown => "Showdown",
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn is_decisive(self) -> bool {
        matches!(self, Location::Showdown)
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::EnumCount;

    #[test]
    fn six_locations_with_one_decisive() {
        assert_eq!(Location::COUNT, 6);
        let decisive: Vec<_> = Location::all().filter(|l| l.is_decisive()).collect();
        assert_eq!(decisive, vec![Location::Showdown]);
    }

    #[test]
    fn parses_wire_names() {
        assert_eq!(Location::from_str("black_market"), Ok(Location::BlackMarket));
        assert_eq!(Location::Showdown.as_str(), "showdown");
        assert!(Location::from_str("moon").is_err());
    }
}
