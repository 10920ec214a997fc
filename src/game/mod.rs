//! Match engine and state management.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DealError;
use crate::player::Player;
use crate::strategy::{self, Strategy};
use crate::table::Table;

mod turn;
pub mod state;

pub use state::{GameState, Seat};

/// Cards placed face-up on the table during setup.
pub const INITIAL_TABLE_CARDS: usize = 4;
/// Cards dealt to each hand per round.
pub const CARDS_PER_DEAL: usize = 6;
/// Dealing rounds in a match; together with setup this consumes the deck
/// exactly (4 × 12 + 4 = 52).
pub const DEALS_PER_MATCH: u8 = 4;
/// Flat bonus for winning the most cards.
pub const CARD_COUNT_BONUS: u32 = 3;

/// A match of one human against the computer.
///
/// Operations follow the phase machine `Setup → Dealing → HumanTurn ↔
/// ComputerTurn → Cleanup → Finished`; calling one out of phase returns the
/// operation's `InvalidState` error.
pub struct Game {
    /// The remaining deck. Public so tests can rig the deal order.
    pub deck: Deck,
    table: Table,
    human: Player,
    computer: Player,
    starter: Seat,
    state: GameState,
    rounds_dealt: u8,
    strategy: Strategy,
    rng: ChaCha8Rng,
}

impl Game {
    /// Creates a match with a freshly shuffled deck.
    ///
    /// `starter` plays first in every round and is fixed for the match; the
    /// seed makes the shuffle and the computer's random picks reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use indigo::{Game, Seat};
    ///
    /// let game = Game::new(Seat::Human, 42);
    /// assert_eq!(game.cards_remaining(), 52);
    /// ```
    #[must_use]
    pub fn new(starter: Seat, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut deck = Deck::standard();
        deck.shuffle(&mut rng);

        Self {
            deck,
            table: Table::new(),
            human: Player::new(),
            computer: Player::new(),
            starter,
            state: GameState::Setup,
            rounds_dealt: 0,
            strategy: strategy::choose_card,
            rng,
        }
    }

    /// Replaces the computer's card-selection strategy.
    ///
    /// The default is [`strategy::choose_card`]; tests inject deterministic
    /// strategies here.
    #[must_use]
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Deals the four opening cards face-up to the table.
    ///
    /// Returns the placed cards for display and moves the match to the
    /// dealing phase.
    ///
    /// # Errors
    ///
    /// Returns an error if setup has already run, or (never, given a full
    /// deck) if the deck is short.
    pub fn open_table(&mut self) -> Result<Vec<Card>, DealError> {
        if self.state != GameState::Setup {
            return Err(DealError::InvalidState);
        }

        let cards = self.deck.deal(INITIAL_TABLE_CARDS)?;
        for &card in &cards {
            self.table.place(card);
        }
        self.state = GameState::Dealing;
        Ok(cards)
    }

    /// Deals six cards to each hand, one to each alternately, human first.
    ///
    /// Moves the match to the starter's turn.
    ///
    /// # Errors
    ///
    /// Returns an error if the match is not waiting for a deal, or (never,
    /// under the fixed schedule) if the deck is short.
    pub fn deal_round(&mut self) -> Result<(), DealError> {
        if self.state != GameState::Dealing {
            return Err(DealError::InvalidState);
        }

        for _ in 0..CARDS_PER_DEAL {
            self.human.receive(self.deck.deal(1)?);
            self.computer.receive(self.deck.deal(1)?);
        }
        self.rounds_dealt += 1;
        self.state = GameState::turn_of(self.starter);
        Ok(())
    }

    /// Returns the current match phase.
    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    /// Returns the seat that plays first each round.
    #[must_use]
    pub const fn starter(&self) -> Seat {
        self.starter
    }

    /// Returns the number of dealing rounds completed so far.
    #[must_use]
    pub const fn rounds_dealt(&self) -> u8 {
        self.rounds_dealt
    }

    /// Returns the table's top card, or `None` if the table is empty.
    #[must_use]
    pub fn top_card(&self) -> Option<Card> {
        self.table.top()
    }

    /// Returns the cards on the table in placement order.
    #[must_use]
    pub fn table_cards(&self) -> &[Card] {
        self.table.cards()
    }

    /// Returns the human player's state.
    #[must_use]
    pub const fn human(&self) -> &Player {
        &self.human
    }

    /// Returns the computer player's state.
    #[must_use]
    pub const fn computer(&self) -> &Player {
        &self.computer
    }

    /// Returns the player at the given seat.
    #[must_use]
    pub const fn player(&self, seat: Seat) -> &Player {
        match seat {
            Seat::Human => &self.human,
            Seat::Computer => &self.computer,
        }
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }
}
