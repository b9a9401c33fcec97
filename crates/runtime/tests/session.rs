use std::sync::Arc;

use game_core::{Action, ActionError, Location, Phase, PlayerId, UNKNOWN_LOCATION};
use runtime::{
    ClientMessage, HandlerResult, RuntimeConfig, RuntimeError, SessionEvent, SessionHandle,
    SessionRegistry,
};
use serde_json::json;

fn config() -> RuntimeConfig {
    RuntimeConfig::default().with_seed(7)
}

async fn seated(players: &[&str]) -> SessionHandle {
    let handle = SessionHandle::spawn("table", &config());
    for id in players {
        handle
            .submit(Action::join(*id, id.to_uppercase()))
            .await
            .expect("join should succeed");
    }
    handle
}

#[tokio::test]
async fn join_start_and_roll_reach_the_action_phases() {
    let handle = seated(&["a", "b"]).await;

    let outcome = handle.submit(Action::start_game("a")).await.unwrap();
    assert_eq!(outcome.phase, Phase::Roll);

    handle.submit(Action::roll("a")).await.unwrap();
    let outcome = handle.submit(Action::roll("b")).await.unwrap();
    assert!(outcome.phase.is_action_phase());

    let state = handle.state().await.unwrap();
    assert_eq!(state.turn.turn_order.len(), 2);
    assert!(state.turn.current_actor().is_some());
}

#[tokio::test]
async fn rejected_actions_leave_the_state_alone_but_still_publish() {
    let handle = seated(&["a"]).await;
    let before = handle.state().await.unwrap();
    let mut events = handle.subscribe();

    let err = handle.submit(Action::start_game("a")).await.unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Action(ActionError::InsufficientPlayers { required: 2, present: 1 })
    ));
    assert!(err.is_rejection());

    let SessionEvent::StateChanged(published) = events.recv().await.unwrap();
    assert_eq!(*published, *before);
    assert!(Arc::ptr_eq(&published, &handle.state().await.unwrap()));
}

#[tokio::test]
async fn committed_actions_are_published_in_order() {
    let handle = SessionHandle::spawn("table", &config());
    let mut events = handle.subscribe();

    handle.submit(Action::join("a", "Ann")).await.unwrap();
    handle.submit(Action::join("b", "Bob")).await.unwrap();

    let first = events.recv().await.unwrap();
    let second = events.recv().await.unwrap();
    assert_eq!(first.state().players.len(), 1);
    assert_eq!(second.state().players.len(), 2);
}

#[tokio::test]
async fn disconnect_removes_the_player_once() {
    let handle = seated(&["a", "b"]).await;

    assert!(handle.disconnect(PlayerId::from("a")).await.unwrap());
    assert!(!handle.disconnect(PlayerId::from("a")).await.unwrap());

    let state = handle.state().await.unwrap();
    assert!(!state.contains_player(&PlayerId::from("a")));
    assert!(state.log.iter().any(|line| line == "A left the game."));
}

#[tokio::test]
async fn disconnecting_the_turn_holder_hands_the_turn_on() {
    let handle = seated(&["a", "b"]).await;
    handle.submit(Action::start_game("a")).await.unwrap();
    handle.submit(Action::roll("a")).await.unwrap();
    handle.submit(Action::roll("b")).await.unwrap();

    let state = handle.state().await.unwrap();
    let actor = state.turn.current_actor().cloned().unwrap();
    let other = if actor.as_str() == "a" { "b" } else { "a" };

    assert!(handle.disconnect(actor.clone()).await.unwrap());

    let state = handle.state().await.unwrap();
    assert!(!state.contains_player(&actor));
    assert!(!state.turn.turn_order.contains(&actor));
    assert!(!state.turn.extra_order.contains(&actor));
    assert_eq!(state.players.len(), 1);
    assert_eq!(state.players[0].id, PlayerId::from(other));
}

#[tokio::test]
async fn snapshots_are_filtered_per_observer() {
    let handle = seated(&["a", "b"]).await;
    handle.submit(Action::start_game("a")).await.unwrap();
    handle.submit(Action::roll("a")).await.unwrap();
    handle.submit(Action::roll("b")).await.unwrap();

    let state = handle.state().await.unwrap();
    let actor = state.turn.current_actor().cloned().unwrap();
    handle
        .submit(Action::move_to(actor.clone(), Location::Armory))
        .await
        .unwrap();

    let other = if actor.as_str() == "a" { "b" } else { "a" };
    let view = handle.snapshot(Some(&PlayerId::from(other))).await.unwrap();
    assert_eq!(view.player(&actor).unwrap().location, UNKNOWN_LOCATION);

    let admin = handle.snapshot(None).await.unwrap();
    assert_eq!(admin.player(&actor).unwrap().location, "armory");
}

#[tokio::test]
async fn wire_messages_drive_the_session() {
    let handle = SessionHandle::spawn("table", &config());
    let actor = PlayerId::from("a");

    let message: ClientMessage =
        serde_json::from_value(json!({"action": "join", "payload": {"name": "Ann"}})).unwrap();
    let action = message.decode(&actor).unwrap();
    let result = HandlerResult::from(handle.submit(action).await);
    assert_eq!(result, HandlerResult::ok("Joined as Ann."));

    let message: ClientMessage = serde_json::from_value(json!({"action": "roll"})).unwrap();
    let action = message.decode(&actor).unwrap();
    let result = HandlerResult::from(handle.submit(action).await);
    assert!(!result.success);
    assert_eq!(result.message, "cannot roll during the WAITING phase");
}

#[tokio::test]
async fn registry_opens_each_session_once() {
    let registry = SessionRegistry::new(config());

    let first = registry.open("lobby").await;
    first.submit(Action::join("a", "Ann")).await.unwrap();
    let again = registry.open("lobby").await;
    assert_eq!(again.state().await.unwrap().players.len(), 1);

    let other = registry.open("side").await;
    assert!(other.state().await.unwrap().players.is_empty());
    assert_eq!(registry.session_ids().await, vec!["lobby", "side"]);

    assert!(registry.close("lobby").await);
    assert!(!registry.close("lobby").await);
    assert!(registry.get("lobby").await.is_none());
    let fresh = registry.open("lobby").await;
    assert!(fresh.state().await.unwrap().players.is_empty());
}

#[tokio::test]
async fn sessions_start_with_the_configured_stock() {
    let handle = SessionHandle::spawn("table", &config());
    let state = handle.state().await.unwrap();
    assert_eq!(state.world.ground(Location::Armory).len(), 8);
    assert_eq!(state.game_seed, 7);
}
