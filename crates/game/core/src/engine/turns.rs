use crate::config::GameConfig;
use crate::env::GameEnv;
use crate::state::{Phase, PlayerId};

use super::GameEngine;

fn with_face(ranked: &[(PlayerId, u32)], face: u32) -> impl Iterator<Item = PlayerId> + '_ {
    ranked
        .iter()
        .filter(move |(_, roll)| *roll == face)
        .map(|(id, _)| id.clone())
}

/// Turn scheduling methods for GameEngine.
impl<'a> GameEngine<'a> {
    /// Returns the player holding the turn, or `None` outside the action phases.
    pub fn current_actor(&self) -> Option<&PlayerId> {
        self.state.turn.current_actor()
    }

    /// True once at least one player is alive and every living player rolled.
    pub(super) fn everyone_rolled(&self) -> bool {
        let mut living = self.state.living_players().peekable();
        living.peek().is_some() && living.all(|player| player.has_rolled())
    }

    /// Builds both orders from the current rolls and opens the ACTION phase.
    ///
    /// The primary order is every living player by roll, highest first; equal
    /// rolls keep join order. The extra order is the players who rolled the
    /// skip face followed by those who rolled the bonus face, each group in
    /// primary order.
    pub(super) fn compute_initiative(&mut self, config: &GameConfig) {
        let mut ranked: Vec<(PlayerId, u32)> = self
            .state
            .living_players()
            .map(|player| (player.id.clone(), player.roll))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));

        let extra_order: Vec<PlayerId> = with_face(&ranked, config.skip_face())
            .chain(with_face(&ranked, config.bonus_face()))
            .collect();
        let order = ranked
            .iter()
            .map(|(id, _)| self.state.name_of(id))
            .collect::<Vec<_>>()
            .join(", ");

        let turn = &mut self.state.turn;
        turn.turn_order = ranked.into_iter().map(|(id, _)| id).collect();
        turn.extra_order = extra_order;
        turn.phase = Phase::Action;
        turn.cursor = 0;

        self.state.log(format!("Turn order: {order}."));
    }

    /// Moves the cursor to the next player who may act, switching from the
    /// primary to the extra pass and into settlement as orders run out.
    pub(super) fn settle_cursor(&mut self, env: &GameEnv<'_>) {
        let skip_face = env.config().skip_face();
        loop {
            let phase = self.state.turn.phase;
            let order = match phase {
                Phase::Action => &self.state.turn.turn_order,
                Phase::ExtraAction => &self.state.turn.extra_order,
                _ => return,
            };

            let cursor = self.state.turn.cursor;
            let next = order.iter().skip(cursor).position(|id| {
                self.state.player(id).is_ok_and(|player| {
                    player.alive && !(phase == Phase::Action && player.roll == skip_face)
                })
            });

            if let Some(offset) = next {
                self.state.turn.cursor = cursor + offset;
                return;
            }

            self.state.turn.cursor = 0;
            if phase == Phase::Action {
                self.state.turn.phase = Phase::ExtraAction;
                if !self.state.turn.extra_order.is_empty() {
                    self.state.log("Extra actions begin.");
                }
            } else {
                self.settle(env);
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::action::Action;
    use crate::config::GameConfig;
    use crate::engine::GameEngine;
    use crate::env::{GameEnv, ScriptedRng};
    use crate::state::{GameState, Location, Phase, PlayerId};

    fn ids(raw: &[&str]) -> Vec<PlayerId> {
        raw.iter().map(|id| PlayerId::from(*id)).collect()
    }

    fn rolled(players: &[(&str, u32)]) -> GameState {
        let config = GameConfig::default();
        let rng = ScriptedRng::new(players.iter().map(|(_, face)| *face));
        let env = GameEnv::new(&config, &rng);
        let mut state = GameState::new(&config, 0);
        let mut engine = GameEngine::new(&mut state);
        for (id, _) in players {
            engine.execute(env, &Action::join(*id, id.to_uppercase())).unwrap();
        }
        engine.execute(env, &Action::start_game(players[0].0)).unwrap();
        for (id, _) in players {
            engine.execute(env, &Action::roll(*id)).unwrap();
        }
        state
    }

    #[test]
    fn ties_keep_join_order() {
        let state = rolled(&[("a", 3), ("b", 5), ("c", 3), ("d", 5)]);
        assert_eq!(state.turn.turn_order, ids(&["b", "d", "a", "c"]));
        assert!(state.turn.extra_order.is_empty());
    }

    #[test]
    fn extra_order_lists_ones_then_sixes() {
        let state = rolled(&[("a", 6), ("b", 1), ("c", 4), ("d", 1), ("e", 6)]);
        assert_eq!(state.turn.turn_order, ids(&["a", "e", "c", "b", "d"]));
        assert_eq!(state.turn.extra_order, ids(&["b", "d", "a", "e"]));
    }

    #[test]
    fn ones_are_skipped_in_the_primary_pass() {
        let config = GameConfig::default();
        let rng = ScriptedRng::default();
        let env = GameEnv::new(&config, &rng);
        let mut state = rolled(&[("a", 1), ("b", 3)]);
        assert_eq!(state.turn.phase, Phase::Action);
        assert_eq!(state.turn.current_actor(), Some(&PlayerId::from("b")));

        GameEngine::new(&mut state)
            .execute(env, &Action::move_to("b", Location::Armory))
            .unwrap();
        assert_eq!(state.turn.phase, Phase::ExtraAction);
        assert_eq!(state.turn.current_actor(), Some(&PlayerId::from("a")));
    }

    #[test]
    fn empty_extra_order_goes_straight_to_the_next_round() {
        let config = GameConfig::default();
        let rng = ScriptedRng::default();
        let env = GameEnv::new(&config, &rng);
        let mut state = rolled(&[("a", 4), ("b", 3)]);

        let mut engine = GameEngine::new(&mut state);
        engine.execute(env, &Action::move_to("a", Location::Armory)).unwrap();
        engine.execute(env, &Action::move_to("b", Location::Armory)).unwrap();

        assert_eq!(state.turn.phase, Phase::Roll);
        assert_eq!(state.turn.round, 2);
        assert!(state.players.iter().all(|player| player.roll == 0));
        assert!(state.turn.turn_order.is_empty());
    }

    #[test]
    fn leaving_on_your_turn_passes_it_on() {
        let config = GameConfig::default();
        let rng = ScriptedRng::default();
        let env = GameEnv::new(&config, &rng);
        let mut state = rolled(&[("a", 5), ("b", 4), ("c", 3)]);

        GameEngine::new(&mut state)
            .execute(env, &Action::leave("a"))
            .unwrap();

        assert_eq!(state.turn.current_actor(), Some(&PlayerId::from("b")));
        assert_eq!(state.turn.turn_order, ids(&["b", "c"]));
    }

    #[test]
    fn last_roller_leaving_triggers_initiative() {
        let config = GameConfig::default();
        let rng = ScriptedRng::new([2, 5]);
        let env = GameEnv::new(&config, &rng);
        let mut state = GameState::new(&config, 0);
        let mut engine = GameEngine::new(&mut state);
        for id in ["a", "b", "c"] {
            engine.execute(env, &Action::join(id, id)).unwrap();
        }
        engine.execute(env, &Action::start_game("a")).unwrap();
        engine.execute(env, &Action::roll("a")).unwrap();
        engine.execute(env, &Action::roll("b")).unwrap();
        engine.execute(env, &Action::leave("c")).unwrap();

        assert_eq!(state.turn.phase, Phase::Action);
        assert_eq!(state.turn.turn_order, ids(&["b", "a"]));
    }
}
