use super::PlayerId;

/// Session-wide stage of a round.
///
/// ```text
/// WAITING -> ROLL -> ACTION -> EXTRA_ACTION -> SETTLEMENT -> ROLL -> ...
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::IntoStaticStr)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Phase {
    /// Lobby; players may join.
    #[default]
    Waiting,
    /// Every living player rolls initiative once.
    Roll,
    /// Primary pass over the turn order.
    Action,
    /// Bonus pass: players who rolled the lowest face, then the highest.
    ExtraAction,
    /// End-of-round resolution. Also where a finished game stays parked.
    Settlement,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Phases in which turn-bound actions may be taken.
    pub const fn is_action_phase(self) -> bool {
        matches!(self, Phase::Action | Phase::ExtraAction)
    }
}

/// Turn bookkeeping.
///
/// The primary and extra orders are separate sequences; `phase` selects which
/// one `cursor` indexes into. Neither list is ever reused for the other.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnState {
    pub phase: Phase,

    /// Living players sorted by roll, highest first. Rebuilt every round.
    pub turn_order: Vec<PlayerId>,

    /// Lowest-face rollers followed by highest-face rollers. Rebuilt every round.
    pub extra_order: Vec<PlayerId>,

    /// Index into the order selected by `phase`.
    pub cursor: usize,

    /// Rounds started so far (the first round is 1).
    pub round: u32,

    /// Committed action counter. Feeds the dice seed.
    pub nonce: u64,
}

impl TurnState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The order the cursor currently walks, if any.
    pub fn active_order(&self) -> Option<&[PlayerId]> {
        match self.phase {
            Phase::Action => Some(&self.turn_order),
            Phase::ExtraAction => Some(&self.extra_order),
            _ => None,
        }
    }

    /// Player holding the turn, or `None` outside the action phases.
    pub fn current_actor(&self) -> Option<&PlayerId> {
        self.active_order()?.get(self.cursor)
    }

    /// Clears both orders and the cursor.
    pub fn reset_orders(&mut self) {
        self.turn_order.clear();
        self.extra_order.clear();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_indexes_the_order_selected_by_phase() {
        let mut turn = TurnState::new();
        turn.turn_order = vec![PlayerId::from("a"), PlayerId::from("b")];
        turn.extra_order = vec![PlayerId::from("b")];

        assert_eq!(turn.current_actor(), None);

        turn.phase = Phase::Action;
        turn.cursor = 1;
        assert_eq!(turn.current_actor(), Some(&PlayerId::from("b")));

        turn.phase = Phase::ExtraAction;
        turn.cursor = 1;
        assert_eq!(turn.current_actor(), None);
    }

    #[test]
    fn phase_names_are_screaming_snake_case() {
        assert_eq!(Phase::ExtraAction.as_str(), "EXTRA_ACTION");
        assert_eq!(Phase::Waiting.as_str(), "WAITING");
    }
}
