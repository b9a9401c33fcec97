#![allow(dead_code)]

use game_core::{
    Action, ActionError, ActionOutcome, GameConfig, GameEngine, GameEnv, GameState,
    ItemDefinition, ItemId, Location, Phase, PlayerId, RngOracle, ScriptedRng,
};

/// A session plus the dice and config needed to drive it.
pub struct Table {
    pub config: GameConfig,
    pub rng: Box<dyn RngOracle>,
    pub state: GameState,
}

impl Table {
    /// Players join in order; `stock` is laid out before anyone arrives.
    pub fn new(players: &[&str], stock: &[(Location, ItemDefinition)]) -> Self {
        let config = GameConfig::default();
        let state = GameState::with_stock(
            &config,
            7,
            stock.iter().map(|(location, definition)| (*location, definition)),
        );
        let mut table = Self {
            config,
            rng: Box::new(ScriptedRng::default()),
            state,
        };
        for id in players {
            table.act(Action::join(*id, id.to_uppercase())).unwrap();
        }
        table
    }

    pub fn with_rng(mut self, rng: impl RngOracle + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    pub fn act(&mut self, action: Action) -> Result<ActionOutcome, ActionError> {
        let env = GameEnv::new(&self.config, self.rng.as_ref());
        GameEngine::new(&mut self.state).execute(env, &action)
    }

    /// Starts the game (if still waiting) and rolls the given faces in order.
    pub fn roll_round(&mut self, faces: &[(&str, u32)]) {
        if self.state.turn.phase == Phase::Waiting {
            let first = faces[0].0;
            self.act(Action::start_game(first)).unwrap();
        }
        let rng = ScriptedRng::new(faces.iter().map(|(_, face)| *face));
        let previous = std::mem::replace(&mut self.rng, Box::new(rng));
        for (id, _) in faces {
            self.act(Action::roll(*id)).unwrap();
        }
        self.rng = previous;
    }

    /// Passes the current actor's turn by staying in place.
    pub fn pass(&mut self) {
        let actor = self.current_actor().expect("someone holds the turn");
        let here = self.player(actor.as_str()).location;
        self.act(Action::move_to(actor, here)).unwrap();
    }

    pub fn current_actor(&self) -> Option<PlayerId> {
        self.state.turn.current_actor().cloned()
    }

    pub fn player(&self, id: &str) -> &game_core::PlayerState {
        self.state.player(&PlayerId::from(id)).unwrap()
    }

    pub fn ground_item(&self, location: Location, name: &str) -> ItemId {
        self.state
            .world
            .find_on_ground(location, |item| item.name == name)
            .map(|item| item.id)
            .unwrap()
    }

    pub fn inventory_item(&self, owner: &str, name: &str) -> ItemId {
        self.player(owner)
            .inventory
            .find(|item| item.name == name)
            .map(|item| item.id)
            .unwrap()
    }
}
