use crate::card::Card;
use crate::error::{FinishError, PlayError};
use crate::player::{Player, TrickRecord};
use crate::result::{Capture, MatchResult, TurnOutcome};

use super::{CARD_COUNT_BONUS, DEALS_PER_MATCH, Game, GameState, Seat};

impl Game {
    /// Plays the human's card at the given 1-based hand index.
    ///
    /// Resolves a capture if the card matches the table's top card by suit
    /// or rank, then passes the turn.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the human's turn, or if `index` is
    /// outside `1..=hand_len`. An out-of-range index does not consume the
    /// turn; the caller should re-prompt.
    pub fn play_human(&mut self, index: usize) -> Result<TurnOutcome, PlayError> {
        if self.state != GameState::HumanTurn {
            return Err(PlayError::InvalidState);
        }

        let card = index
            .checked_sub(1)
            .and_then(|position| self.human.take_card(position))
            .ok_or(PlayError::IndexOutOfRange)?;

        Ok(self.resolve_play(Seat::Human, card))
    }

    /// Plays the computer's turn using the injected strategy.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the computer's turn, or if the strategy
    /// returned a card the computer does not hold.
    pub fn play_computer(&mut self) -> Result<TurnOutcome, PlayError> {
        if self.state != GameState::ComputerTurn {
            return Err(PlayError::InvalidState);
        }

        let chosen = (self.strategy)(self.computer.hand(), self.table.top(), &mut self.rng);
        let card = self
            .computer
            .hand()
            .iter()
            .position(|&held| held == chosen)
            .and_then(|position| self.computer.take_card(position))
            .ok_or(PlayError::CardNotInHand)?;

        Ok(self.resolve_play(Seat::Computer, card))
    }

    /// Sweeps any leftover table cards and awards the card-count bonus.
    ///
    /// The leftover cards go to whoever captured last (to the starter if no
    /// capture ever happened), scored by the standard rank values. The
    /// 3-point bonus goes to the strictly larger won pile, or to the starter
    /// on a tie. Moves the match to `Finished`.
    ///
    /// # Errors
    ///
    /// Returns an error if turns remain to be played.
    pub fn finish(&mut self) -> Result<MatchResult, FinishError> {
        if self.state != GameState::Cleanup {
            return Err(FinishError::InvalidState);
        }

        let final_sweep = if self.table.is_empty() {
            None
        } else {
            let sweeper = match (self.human.last_trick(), self.computer.last_trick()) {
                (TrickRecord::Won, _) => Seat::Human,
                (_, TrickRecord::Won) => Seat::Computer,
                _ => self.starter,
            };
            let swept = self.table.sweep();
            let (actor, _) = self.seat_players(sweeper);
            actor.take_won(swept.clone());
            Some((sweeper, swept))
        };

        let bonus = match (self.human.won().len(), self.computer.won().len()) {
            (h, c) if h > c => Seat::Human,
            (h, c) if h < c => Seat::Computer,
            _ => self.starter,
        };
        let (winner, _) = self.seat_players(bonus);
        winner.award_bonus(CARD_COUNT_BONUS);

        self.state = GameState::Finished;

        Ok(MatchResult {
            human_score: self.human.score(),
            computer_score: self.computer.score(),
            human_cards: self.human.won().len(),
            computer_cards: self.computer.won().len(),
            bonus,
            final_sweep,
        })
    }

    /// Places the card, resolves a capture, and advances the phase.
    ///
    /// On a capture the swept pile, score, and both last-trick records are
    /// updated together before the turn passes.
    fn resolve_play(&mut self, seat: Seat, card: Card) -> TurnOutcome {
        let is_capture = self.table.top().is_some_and(|top| card.matches(top));
        self.table.place(card);

        let capture = if is_capture {
            let swept = self.table.sweep();
            let (actor, opponent) = self.seat_players(seat);
            let points = actor.take_won(swept.clone());
            actor.set_last_trick(TrickRecord::Won);
            opponent.set_last_trick(TrickRecord::Lost);
            Some(Capture {
                cards: swept,
                points,
            })
        } else {
            None
        };

        self.advance_turn(seat);

        TurnOutcome {
            seat,
            card,
            capture,
        }
    }

    /// Passes the turn, or closes the round when both hands are empty.
    fn advance_turn(&mut self, seat: Seat) {
        if self.human.hand().is_empty() && self.computer.hand().is_empty() {
            self.state = if self.rounds_dealt < DEALS_PER_MATCH {
                GameState::Dealing
            } else {
                GameState::Cleanup
            };
        } else {
            self.state = GameState::turn_of(seat.opponent());
        }
    }

    /// Returns (actor, opponent) for the given seat.
    fn seat_players(&mut self, seat: Seat) -> (&mut Player, &mut Player) {
        match seat {
            Seat::Human => (&mut self.human, &mut self.computer),
            Seat::Computer => (&mut self.computer, &mut self.human),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{Rank, Suit};

    const fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    /// A game forced straight to cleanup with the given won piles.
    fn rigged_cleanup(starter: Seat, human_won: Vec<Card>, computer_won: Vec<Card>) -> Game {
        let mut game = Game::new(starter, 0);
        game.human.take_won(human_won);
        game.computer.take_won(computer_won);
        game.state = GameState::Cleanup;
        game
    }

    #[test]
    fn bonus_goes_to_larger_pile() {
        let mut game = rigged_cleanup(
            Seat::Human,
            vec![card(Rank::Two, Suit::Clubs)],
            vec![
                card(Rank::Three, Suit::Diamonds),
                card(Rank::Four, Suit::Hearts),
            ],
        );

        let result = game.finish().unwrap();
        assert_eq!(result.bonus, Seat::Computer);
        assert_eq!(result.computer_score, CARD_COUNT_BONUS);
        assert_eq!(result.human_score, 0);
        assert_eq!(game.state, GameState::Finished);
    }

    #[test]
    fn bonus_tie_goes_to_starter() {
        let mut game = rigged_cleanup(
            Seat::Computer,
            vec![card(Rank::Two, Suit::Clubs)],
            vec![card(Rank::Three, Suit::Diamonds)],
        );

        let result = game.finish().unwrap();
        assert_eq!(result.bonus, Seat::Computer);
        assert_eq!(result.computer_score, CARD_COUNT_BONUS);
    }

    #[test]
    fn leftover_cards_go_to_last_capturer_with_points() {
        let mut game = rigged_cleanup(Seat::Human, Vec::new(), Vec::new());
        game.computer.set_last_trick(TrickRecord::Won);
        game.human.set_last_trick(TrickRecord::Lost);
        game.table.place(card(Rank::Ten, Suit::Clubs));
        game.table.place(card(Rank::Nine, Suit::Diamonds));

        let result = game.finish().unwrap();
        let (sweeper, swept) = result.final_sweep.expect("table was not empty");
        assert_eq!(sweeper, Seat::Computer);
        assert_eq!(swept.len(), 2);
        assert_eq!(result.computer_cards, 2);
        // 10♣ is worth a point, 9♦ nothing; bonus on top.
        assert_eq!(result.computer_score, 1 + CARD_COUNT_BONUS);
    }

    #[test]
    fn leftover_cards_go_to_starter_when_no_capture_happened() {
        let mut game = rigged_cleanup(Seat::Computer, Vec::new(), Vec::new());
        game.table.place(card(Rank::Five, Suit::Spades));

        let result = game.finish().unwrap();
        let (sweeper, _) = result.final_sweep.expect("table was not empty");
        assert_eq!(sweeper, Seat::Computer);
        assert_eq!(result.computer_cards, 1);
    }

    #[test]
    fn finish_with_empty_table_sweeps_nothing() {
        let mut game = rigged_cleanup(Seat::Human, Vec::new(), Vec::new());

        let result = game.finish().unwrap();
        assert!(result.final_sweep.is_none());
        assert_eq!(result.bonus, Seat::Human);
    }

    #[test]
    fn finish_rejects_wrong_state() {
        let mut game = Game::new(Seat::Human, 0);
        assert_eq!(game.finish().unwrap_err(), FinishError::InvalidState);
    }
}
