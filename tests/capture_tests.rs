//! Capture and chain reaction integration tests.
//!
//! Each scenario builds a board, plays one card through the Turn
//! Controller, and checks ownership, score, and the emitted events.

mod common;

use common::{seed_board, set_hand_card, weak_match};
use grid_triad::{
    play_card, Card, CaptureEvent, CaptureRule, CardId, Position, RuleConfig, Score, Side, Stats, TurnController,
};

fn play_first_card(
    state: &grid_triad::MatchState,
    position: Position,
    rules: &RuleConfig,
) -> (grid_triad::MatchState, Vec<CaptureEvent>) {
    let card = state.hand(state.current_turn)[0].clone();
    let outcome = TurnController::new(*rules)
        .play(state, &card, position, |_| {})
        .unwrap();
    (outcome.state, outcome.events)
}

// =============================================================================
// Basic Rule
// =============================================================================

#[test]
fn test_basic_capture_scenario() {
    let rules = RuleConfig::basic();
    let mut state = weak_match(rules);
    seed_board(&mut state, 1, 0, "defender", Stats::new(1, 3, 1, 1), Side::Opponent);
    set_hand_card(&mut state, Side::Player, 0, Card::new("attacker", Stats::new(1, 1, 1, 5)));

    let (next, events) = play_first_card(&state, Position::new(1, 1), &rules);

    assert_eq!(next.board.owner_at(Position::new(1, 0)), Some(Side::Player));
    assert_eq!(next.score(), Score { player: 2, opponent: 0 });
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].card_id, CardId::from("defender"));
    assert_eq!(events[0].rule, CaptureRule::Basic);
    assert!(!events[0].is_chain_reaction);
}

#[test]
fn test_equal_values_do_not_capture() {
    let rules = RuleConfig::basic();
    let mut state = weak_match(rules);
    seed_board(&mut state, 1, 0, "defender", Stats::new(1, 5, 1, 1), Side::Opponent);
    set_hand_card(&mut state, Side::Player, 0, Card::new("attacker", Stats::new(1, 1, 1, 5)));

    let (next, events) = play_first_card(&state, Position::new(1, 1), &rules);

    assert!(events.is_empty());
    assert_eq!(next.board.owner_at(Position::new(1, 0)), Some(Side::Opponent));
    assert_eq!(next.score(), Score { player: 1, opponent: 1 });
}

#[test]
fn test_captures_every_weaker_neighbor() {
    let rules = RuleConfig::basic();
    let mut state = weak_match(rules);
    seed_board(&mut state, 0, 1, "up", Stats::uniform(2), Side::Opponent);
    seed_board(&mut state, 1, 0, "left", Stats::uniform(2), Side::Opponent);
    seed_board(&mut state, 1, 2, "right", Stats::uniform(2), Side::Opponent);
    seed_board(&mut state, 2, 1, "down", Stats::uniform(8), Side::Opponent);
    set_hand_card(&mut state, Side::Player, 0, Card::new("attacker", Stats::uniform(5)));

    let (next, events) = play_first_card(&state, Position::new(1, 1), &rules);

    let tags: Vec<_> = events.iter().map(|e| (e.card_id.as_str(), e.is_chain_reaction)).collect();
    assert_eq!(tags, vec![("left", false), ("right", true), ("up", true)]);
    assert_eq!(next.score(), Score { player: 4, opponent: 1 });
}

// =============================================================================
// Same and Plus
// =============================================================================

#[test]
fn test_same_rule_scenario() {
    let rules = RuleConfig::basic().with_same(true);
    let mut state = weak_match(rules);
    seed_board(&mut state, 0, 1, "above", Stats::new(1, 1, 4, 1), Side::Opponent);
    seed_board(&mut state, 1, 0, "beside", Stats::new(1, 4, 1, 1), Side::Opponent);

    let (next, events) = play_first_card(&state, Position::new(1, 1), &rules);

    assert_eq!(next.board.owner_at(Position::new(0, 1)), Some(Side::Player));
    assert_eq!(next.board.owner_at(Position::new(1, 0)), Some(Side::Player));
    assert!(events.iter().all(|e| e.rule == CaptureRule::Same));
    assert_eq!(next.score(), Score { player: 3, opponent: 0 });
}

#[test]
fn test_same_rule_off_leaves_cards() {
    let rules = RuleConfig::basic();
    let mut state = weak_match(rules);
    seed_board(&mut state, 0, 1, "above", Stats::new(1, 1, 4, 1), Side::Opponent);
    seed_board(&mut state, 1, 0, "beside", Stats::new(1, 4, 1, 1), Side::Opponent);

    let (next, events) = play_first_card(&state, Position::new(1, 1), &rules);

    assert!(events.is_empty());
    assert_eq!(next.score(), Score { player: 1, opponent: 2 });
}

#[test]
fn test_same_rule_single_neighbor_never_triggers() {
    let rules = RuleConfig::basic().with_same(true);
    let mut state = weak_match(rules);
    seed_board(&mut state, 0, 1, "above", Stats::new(1, 1, 4, 1), Side::Opponent);

    let (next, events) = play_first_card(&state, Position::new(1, 1), &rules);

    assert!(events.is_empty());
    assert_eq!(next.board.owner_at(Position::new(0, 1)), Some(Side::Opponent));
}

#[test]
fn test_plus_rule_captures_equal_sums() {
    let rules = RuleConfig::basic().with_plus(true);
    let mut state = weak_match(rules);
    // attacker top 2 + above bottom 6 = 8, attacker left 3 + beside right 5 = 8
    seed_board(&mut state, 0, 1, "above", Stats::new(1, 1, 6, 1), Side::Opponent);
    seed_board(&mut state, 1, 0, "beside", Stats::new(1, 5, 1, 1), Side::Opponent);
    set_hand_card(&mut state, Side::Player, 0, Card::new("attacker", Stats::new(2, 1, 1, 3)));

    let (next, events) = play_first_card(&state, Position::new(1, 1), &rules);

    assert_eq!(events.len(), 2);
    assert!(events.iter().all(|e| e.rule == CaptureRule::Plus));
    assert_eq!(next.score(), Score { player: 3, opponent: 0 });
}

#[test]
fn test_plus_with_own_card_in_group() {
    let rules = RuleConfig::basic().with_plus(true);
    let mut state = weak_match(rules);
    seed_board(&mut state, 0, 1, "ally", Stats::new(1, 1, 6, 1), Side::Player);
    seed_board(&mut state, 1, 0, "beside", Stats::new(1, 5, 1, 1), Side::Opponent);
    set_hand_card(&mut state, Side::Player, 0, Card::new("attacker", Stats::new(2, 1, 1, 3)));

    let (next, events) = play_first_card(&state, Position::new(1, 1), &rules);

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].card_id, CardId::from("beside"));
    assert_eq!(next.score(), Score { player: 3, opponent: 0 });
}

// =============================================================================
// Chain Reactions
// =============================================================================

#[test]
fn test_chain_reaction_scenario() {
    let rules = RuleConfig::basic();
    let mut state = weak_match(rules);
    // Q at (1,2) loses to the placed card; once flipped, Q's top 7 beats R's bottom 2.
    seed_board(&mut state, 1, 2, "q", Stats::new(7, 1, 1, 2), Side::Opponent);
    seed_board(&mut state, 0, 2, "r", Stats::new(1, 1, 2, 1), Side::Opponent);
    set_hand_card(&mut state, Side::Player, 0, Card::new("p", Stats::new(1, 6, 1, 1)));

    let mut notified = Vec::new();
    let card = state.player_hand()[0].clone();
    let next = play_card(&state, &card, Position::new(1, 1), &rules, |e| {
        notified.push((e.card_id.clone(), e.is_chain_reaction));
    })
    .unwrap();

    assert_eq!(
        notified,
        vec![(CardId::from("q"), false), (CardId::from("r"), true)]
    );
    assert_eq!(next.board.owner_at(Position::new(0, 2)), Some(Side::Player));
    assert_eq!(next.score(), Score { player: 3, opponent: 0 });
}

#[test]
fn test_chain_does_not_start_from_unflipped_cards() {
    let rules = RuleConfig::basic();
    let mut state = weak_match(rules);
    // Q does not lose to the placed card, so R next to Q stays put.
    seed_board(&mut state, 1, 2, "q", Stats::new(7, 1, 1, 9), Side::Opponent);
    seed_board(&mut state, 0, 2, "r", Stats::new(1, 1, 2, 1), Side::Opponent);
    set_hand_card(&mut state, Side::Player, 0, Card::new("p", Stats::new(1, 6, 1, 1)));

    let (next, events) = play_first_card(&state, Position::new(1, 1), &rules);

    assert!(events.is_empty());
    assert_eq!(next.score(), Score { player: 1, opponent: 2 });
}

#[test]
fn test_chain_events_are_breadth_first() {
    let rules = RuleConfig::basic();
    let mut state = weak_match(rules);
    // Two direct captures, each of which captures one further card. Only the
    // first capture of the turn is untagged.
    seed_board(&mut state, 1, 0, "a", Stats::new(9, 1, 1, 1), Side::Opponent);
    seed_board(&mut state, 1, 2, "b", Stats::new(9, 1, 1, 1), Side::Opponent);
    seed_board(&mut state, 0, 0, "a2", Stats::new(1, 1, 1, 1), Side::Opponent);
    seed_board(&mut state, 0, 2, "b2", Stats::new(1, 1, 1, 1), Side::Opponent);
    set_hand_card(&mut state, Side::Player, 0, Card::new("p", Stats::new(1, 5, 1, 5)));

    let (next, events) = play_first_card(&state, Position::new(1, 1), &rules);

    let order: Vec<_> = events
        .iter()
        .map(|e| (e.card_id.as_str(), e.is_chain_reaction))
        .collect();
    assert_eq!(order, vec![("a", false), ("b", true), ("a2", true), ("b2", true)]);
    assert!(next.board.occupied().all(|(_, card)| card.is_owned_by(Side::Player)));
}

#[test]
fn test_second_direct_capture_is_tagged_chain() {
    let rules = RuleConfig::basic();
    let mut state = weak_match(rules);
    seed_board(&mut state, 1, 0, "a", Stats::uniform(1), Side::Opponent);
    seed_board(&mut state, 1, 2, "b", Stats::uniform(1), Side::Opponent);
    set_hand_card(&mut state, Side::Player, 0, Card::new("p", Stats::uniform(5)));

    let mut notified = Vec::new();
    let card = state.player_hand()[0].clone();
    play_card(&state, &card, Position::new(1, 1), &rules, |e| {
        notified.push((e.card_id.clone(), e.is_chain_reaction));
    })
    .unwrap();

    assert_eq!(notified, vec![(CardId::from("a"), false), (CardId::from("b"), true)]);
}

#[test]
fn test_opponent_captures_player_cards() {
    let rules = RuleConfig::basic();
    let state = weak_match(rules);
    let card = state.player_hand()[0].clone();
    let mut state = play_card(&state, &card, Position::new(0, 0), &rules, |_| {}).unwrap();

    set_hand_card(&mut state, Side::Opponent, 0, Card::new("strong", Stats::uniform(9)));
    let (next, events) = play_first_card(&state, Position::new(0, 1), &rules);

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].new_owner, Side::Opponent);
    assert_eq!(next.score(), Score { player: 0, opponent: 2 });
}
