//! Status effects carried by players.
//!
//! Statuses have no duration: they stay until purified, toggled by
//! settlement (cursed), or the player dies. A player holds each status at
//! most once, so the set is a bitflag word.

use bitflags::bitflags;
use strum::IntoEnumIterator;

/// Closed set of statuses. Settlement matches on this exhaustively.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::EnumIter, strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StatusKind {
    /// Loses 1 hp per settlement, never below the poison floor.
    Poisoned,
    /// Deals double damage.
    Berserk,
    /// Curses every other living player sharing the location.
    CurseSource,
    /// Recomputed each settlement; costs extra hp while it lasts.
    Cursed,
    /// Immune to melee damage.
    Mounted,
}

impl StatusKind {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    const fn flag(self) -> StatusFlags {
        match self {
            StatusKind::Poisoned => StatusFlags::POISONED,
            StatusKind::Berserk => StatusFlags::BERSERK,
            StatusKind::CurseSource => StatusFlags::CURSE_SOURCE,
            StatusKind::Cursed => StatusFlags::CURSED,
            StatusKind::Mounted => StatusFlags::MOUNTED,
        }
    }
}

bitflags! {
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    struct StatusFlags: u8 {
        const POISONED = 1 << 0;
        const BERSERK = 1 << 1;
        const CURSE_SOURCE = 1 << 2;
        const CURSED = 1 << 3;
        const MOUNTED = 1 << 4;
    }
}

/// Active statuses on a player. Serialized as a list of [`StatusKind`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "Vec<StatusKind>", from = "Vec<StatusKind>")
)]
pub struct StatusEffects {
    flags: StatusFlags,
}

impl StatusEffects {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn has(&self, kind: StatusKind) -> bool {
        self.flags.contains(kind.flag())
    }

    /// Adds a status. Returns false if it was already present.
    pub fn insert(&mut self, kind: StatusKind) -> bool {
        let added = !self.has(kind);
        self.flags.insert(kind.flag());
        added
    }

    /// Removes a status. Returns false if it was not present.
    pub fn remove(&mut self, kind: StatusKind) -> bool {
        let removed = self.has(kind);
        self.flags.remove(kind.flag());
        removed
    }

    pub fn clear(&mut self) {
        self.flags = StatusFlags::empty();
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = StatusKind> + '_ {
        StatusKind::iter().filter(move |kind| self.has(*kind))
    }
}

impl From<StatusEffects> for Vec<StatusKind> {
    fn from(value: StatusEffects) -> Self {
        value.iter().collect()
    }
}

impl From<Vec<StatusKind>> for StatusEffects {
    fn from(value: Vec<StatusKind>) -> Self {
        value.into_iter().collect()
    }
}

impl FromIterator<StatusKind> for StatusEffects {
    fn from_iter<T: IntoIterator<Item = StatusKind>>(iter: T) -> Self {
        let mut effects = Self::empty();
        for kind in iter {
            effects.insert(kind);
        }
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn statuses_are_multiplicity_free() {
        let mut effects = StatusEffects::empty();
        assert!(effects.insert(StatusKind::Berserk));
        assert!(!effects.insert(StatusKind::Berserk));
        assert_eq!(effects.iter().count(), 1);
    }

    #[test]
    fn clear_drops_everything() {
        let mut effects: StatusEffects = [StatusKind::Poisoned, StatusKind::Mounted]
            .into_iter()
            .collect();
        assert!(effects.has(StatusKind::Mounted));
        effects.clear();
        assert!(effects.is_empty());
        assert!(!effects.remove(StatusKind::Poisoned));
    }
}
