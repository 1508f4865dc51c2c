//! Match state.
//!
//! ## Lifecycle
//!
//! A `MatchState` is created once from two hands, changes only through
//! the Turn Controller, and is terminal when the board has no empty cell.
//!
//! ## Snapshots
//!
//! Hands and history use `im` persistent vectors and the board is an owned
//! array, so `clone()` is cheap and never aliases mutable storage. Old
//! states can be kept for undo, replay, or AI lookahead.
//!
//! ## Score
//!
//! The score is derived: `score()` scans the board on every call. There is
//! no stored counter to drift out of sync.

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Position};
use crate::cards::{Card, CardId};
use crate::core::{RuleConfig, Score, SetupError, Side, SideMap};
use crate::rules::GameResult;

/// Cards per hand at the start of a match.
pub const HAND_SIZE: usize = 5;

/// One applied move, kept for replay.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Turn number at which the move was made (0-based).
    pub turn: u32,
    pub side: Side,
    pub card_id: CardId,
    pub position: Position,
    /// Number of cards that changed owner as a result.
    pub captures: usize,
}

/// Complete state of a match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub board: Board,

    /// Cards still in hand. Player 1 is `Side::Player`, player 2 is
    /// `Side::Opponent`. Hand cards carry no owner.
    pub hands: SideMap<Vector<Card>>,

    /// Side to move.
    pub current_turn: Side,

    /// Moves applied so far.
    pub turn_count: u32,

    pub rules: RuleConfig,

    /// Applied moves, oldest first.
    pub history: Vector<MoveRecord>,
}

impl MatchState {
    /// Start a match from two hands.
    ///
    /// Each hand must hold exactly `HAND_SIZE` cards and card ids must be
    /// unique across both hands. `Side::Player` moves first.
    pub fn new(
        player_hand: impl IntoIterator<Item = Card>,
        opponent_hand: impl IntoIterator<Item = Card>,
        rules: RuleConfig,
    ) -> Result<Self, SetupError> {
        let hands = SideMap::from_pair(
            player_hand.into_iter().map(Card::unowned).collect::<Vector<_>>(),
            opponent_hand.into_iter().map(Card::unowned).collect::<Vector<_>>(),
        );

        let mut seen: FxHashSet<&CardId> = FxHashSet::default();
        for (side, hand) in hands.iter() {
            if hand.len() != HAND_SIZE {
                return Err(SetupError::HandSize {
                    side,
                    expected: HAND_SIZE,
                    actual: hand.len(),
                });
            }
            for card in hand.iter() {
                if !seen.insert(&card.id) {
                    return Err(SetupError::DuplicateCard {
                        card_id: card.id.clone(),
                    });
                }
            }
        }

        Ok(Self {
            board: Board::new(),
            hands,
            current_turn: Side::Player,
            turn_count: 0,
            rules,
            history: Vector::new(),
        })
    }

    /// Cards in `side`'s hand.
    #[must_use]
    pub fn hand(&self, side: Side) -> &Vector<Card> {
        &self.hands[side]
    }

    /// Player 1's hand.
    #[must_use]
    pub fn player_hand(&self) -> &Vector<Card> {
        self.hand(Side::Player)
    }

    /// Player 2's hand.
    #[must_use]
    pub fn opponent_hand(&self) -> &Vector<Card> {
        self.hand(Side::Opponent)
    }

    /// Index of the card with `card_id` in `side`'s hand.
    #[must_use]
    pub fn hand_index(&self, side: Side, card_id: &CardId) -> Option<usize> {
        self.hands[side].iter().position(|card| &card.id == card_id)
    }

    /// Cell counts per side, freshly counted from the board.
    #[must_use]
    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// True once every cell is occupied.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.board.is_full()
    }

    /// Result by strict score comparison. Meaningful once the game is over.
    #[must_use]
    pub fn winner(&self) -> GameResult {
        GameResult::from_score(&self.score())
    }

    /// `Some(result)` if the game is over, `None` if it continues.
    #[must_use]
    pub fn outcome(&self) -> Option<GameResult> {
        self.is_game_over().then(|| self.winner())
    }

    /// Every `(hand index, empty position)` pair for the side to move,
    /// hand index ascending, then row-major.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<(usize, Position)> {
        let empty: Vec<Position> = self.board.empty_positions().collect();
        (0..self.hands[self.current_turn].len())
            .flat_map(|index| empty.iter().map(move |&pos| (index, pos)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Stats;

    fn hand(prefix: &str) -> Vec<Card> {
        (0..HAND_SIZE)
            .map(|i| Card::new(format!("{prefix}{i}"), Stats::uniform(i as u8 + 1)))
            .collect()
    }

    #[test]
    fn test_new_match() {
        let state = MatchState::new(hand("p"), hand("o"), RuleConfig::basic()).unwrap();

        assert_eq!(state.current_turn, Side::Player);
        assert_eq!(state.turn_count, 0);
        assert_eq!(state.player_hand().len(), HAND_SIZE);
        assert_eq!(state.opponent_hand().len(), HAND_SIZE);
        assert_eq!(state.score(), Score::default());
        assert!(!state.is_game_over());
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn test_hand_cards_are_unowned() {
        let mut cards = hand("p");
        cards[0] = cards[0].owned_by(Side::Opponent);

        let state = MatchState::new(cards, hand("o"), RuleConfig::basic()).unwrap();
        assert!(state.player_hand().iter().all(|c| c.owner.is_none()));
    }

    #[test]
    fn test_wrong_hand_size_rejected() {
        let mut short = hand("o");
        short.pop();

        let err = MatchState::new(hand("p"), short, RuleConfig::basic()).unwrap_err();
        assert_eq!(
            err,
            SetupError::HandSize {
                side: Side::Opponent,
                expected: HAND_SIZE,
                actual: HAND_SIZE - 1,
            }
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = MatchState::new(hand("x"), hand("x"), RuleConfig::basic()).unwrap_err();
        assert_eq!(
            err,
            SetupError::DuplicateCard {
                card_id: CardId::from("x0")
            }
        );
    }

    #[test]
    fn test_legal_moves_order() {
        let state = MatchState::new(hand("p"), hand("o"), RuleConfig::basic()).unwrap();
        let moves = state.legal_moves();

        assert_eq!(moves.len(), HAND_SIZE * 9);
        assert_eq!(moves[0], (0, Position::new(0, 0)));
        assert_eq!(moves[1], (0, Position::new(0, 1)));
        assert_eq!(moves[9], (1, Position::new(0, 0)));
    }

    #[test]
    fn test_hand_index() {
        let state = MatchState::new(hand("p"), hand("o"), RuleConfig::basic()).unwrap();
        assert_eq!(state.hand_index(Side::Player, &CardId::from("p3")), Some(3));
        assert_eq!(state.hand_index(Side::Player, &CardId::from("o3")), None);
    }

    #[test]
    fn test_state_serialization() {
        let state = MatchState::new(hand("p"), hand("o"), RuleConfig::basic().with_same(true)).unwrap();
        let json = serde_json::to_string(&state).unwrap();
        let back: MatchState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }

    #[test]
    fn test_state_with_unowned_board_card_rejected() {
        let mut state = MatchState::new(hand("p"), hand("o"), RuleConfig::basic()).unwrap();
        state.board.place(Position::new(0, 0), Card::new("x", Stats::uniform(1)), Side::Opponent);

        let json = serde_json::to_string(&state).unwrap();
        assert!(serde_json::from_str::<MatchState>(&json).is_ok());

        let broken = json.replace(r#""owner":"opponent""#, r#""owner":null"#);
        assert!(serde_json::from_str::<MatchState>(&broken).is_err());
    }
}
