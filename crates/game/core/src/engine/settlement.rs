//! End-of-round resolution.
//!
//! Runs once both action passes are exhausted. Each living player, in join
//! order, takes poison, then curse, then safe-zone regeneration; a player whose
//! hp reaches zero dies on the spot, before later players are resolved.
use crate::env::GameEnv;
use crate::state::{GameOutcome, Location, Phase, PlayerId, StatusKind};

use super::GameEngine;

impl<'a> GameEngine<'a> {
    /// Resolves the round, then either declares the outcome or opens the next
    /// ROLL phase. Does nothing once the outcome is decided.
    pub fn settle(&mut self, env: &GameEnv<'_>) {
        if self.state.outcome.is_some() {
            return;
        }
        self.state.turn.phase = Phase::Settlement;

        let living: Vec<PlayerId> = self
            .state
            .living_players()
            .map(|player| player.id.clone())
            .collect();
        // A curse death always leaves its source alive on the same spot, so
        // convergence cannot change during the pass.
        let converged = self
            .state
            .living_players()
            .all(|player| player.location.is_decisive());
        for id in &living {
            self.settle_player(id, converged, env);
        }

        let survivors: Vec<PlayerId> = self
            .state
            .living_players()
            .map(|player| player.id.clone())
            .collect();
        let outcome = match survivors.as_slice() {
            [winner] => Some(GameOutcome::Winner(winner.clone())),
            [] => Some(GameOutcome::Draw),
            _ => None,
        };

        match outcome {
            Some(GameOutcome::Winner(winner)) => {
                let name = self.state.name_of(&winner);
                self.state.log(format!("{name} is the last one standing and wins!"));
                self.state.outcome = Some(GameOutcome::Winner(winner));
            }
            Some(GameOutcome::Draw) => {
                self.state.log("Nobody survived. The game ends in a draw.");
                self.state.outcome = Some(GameOutcome::Draw);
            }
            None => self.start_next_round(),
        }
    }

    fn settle_player(&mut self, id: &PlayerId, converged: bool, env: &GameEnv<'_>) {
        let config = env.config();
        let cursed = self.is_cursed(id);

        let Ok(player) = self.state.player_mut(id) else {
            return;
        };
        if !player.alive {
            return;
        }
        let name = player.name.clone();
        let mut entries = Vec::new();

        if player.has_status(StatusKind::Poisoned) && player.hp > config.poison_floor {
            player.hp -= 1;
            entries.push(format!("{name} suffers from poison."));
        }

        if cursed != player.has_status(StatusKind::Cursed) {
            if cursed {
                player.status.insert(StatusKind::Cursed);
                entries.push(format!("{name} has been cursed."));
            } else {
                player.status.remove(StatusKind::Cursed);
                entries.push(format!("The curse on {name} has lifted."));
            }
        }
        let mut dead = false;
        if cursed {
            dead = player.take_damage(config.curse_damage);
            entries.push(format!("The curse drains {name}."));
        }

        if !dead
            && player.location == Location::DECISIVE
            && !converged
            && player.heal(config.regen_amount) > 0
        {
            entries.push(format!("{name} recovers in the {}.", Location::DECISIVE));
        }

        for entry in entries {
            self.state.log(entry);
        }
        if dead {
            self.state.process_death(id);
        }
    }

    /// Whether another living curse source shares the player's location.
    fn is_cursed(&self, id: &PlayerId) -> bool {
        let Ok(player) = self.state.player(id) else {
            return false;
        };
        self.state.living_players().any(|other| {
            &other.id != id
                && other.location == player.location
                && other.has_status(StatusKind::CurseSource)
        })
    }

    fn start_next_round(&mut self) {
        let turn = &mut self.state.turn;
        turn.reset_orders();
        turn.round += 1;
        turn.phase = Phase::Roll;
        for player in &mut self.state.players {
            player.roll = 0;
        }
        let round = self.state.turn.round;
        self.state.log(format!("Round {round} begins. Roll for initiative!"));
    }
}
