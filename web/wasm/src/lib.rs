use blackjack_session::{
    Card, DealerHand, Event, Game, GameOptions, GameState, Hand, Outcome, Participant,
    RoundResult, SessionStats,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmGame {
    game: Game,
}

#[wasm_bindgen]
impl WasmGame {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32, starting_balance: Option<u32>) -> Self {
        Self {
            game: Game::new(options(starting_balance), u64::from(seed)),
        }
    }

    pub fn reset(&mut self, seed: u32, starting_balance: Option<u32>) {
        self.game = Game::new(options(starting_balance), u64::from(seed));
    }

    pub fn place_bet(&self, amount: u32) -> Result<(), JsValue> {
        self.game.place_bet(u64::from(amount)).map_err(js_err)
    }

    pub fn hit(&self) -> Result<(), JsValue> {
        self.game.hit().map(|_| ()).map_err(js_err)
    }

    pub fn stand(&self) -> Result<JsValue, JsValue> {
        let result = self.game.stand().map_err(js_err)?;
        to_js_value(&JsRoundResult::from(result))
    }

    pub fn start_next_hand(&self) -> Result<(), JsValue> {
        self.game.start_next_hand().map_err(js_err)
    }

    /// Returns queued events, oldest first, for the page to animate.
    pub fn drain_events(&self) -> Result<JsValue, JsValue> {
        let events: Vec<JsEvent> = self
            .game
            .drain_events()
            .into_iter()
            .map(JsEvent::from)
            .collect();
        to_js_value(&events)
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let snapshot = Snapshot {
            state: state_to_str(self.game.state()),
            money: self.game.balance() as u32,
            bet: self.game.current_bet() as u32,
            player: JsHand::from(&self.game.player_hand()),
            dealer: JsDealer::from(&self.game.dealer_hand()),
            result: self.game.round_result().map(JsRoundResult::from),
            stats: JsStats::from(self.game.stats()),
            game_over: self.game.is_game_over(),
            cards_remaining: self.game.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

fn options(starting_balance: Option<u32>) -> GameOptions {
    match starting_balance {
        Some(balance) => GameOptions::default().with_starting_balance(u64::from(balance)),
        None => GameOptions::default(),
    }
}

#[derive(Serialize)]
struct Snapshot {
    state: &'static str,
    money: u32,
    bet: u32,
    player: JsHand,
    dealer: JsDealer,
    result: Option<JsRoundResult>,
    stats: JsStats,
    game_over: bool,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: &'static str,
    /// Asset name used by the page, e.g. `k_of_spades`.
    image: String,
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<JsCard>,
    value: u16,
    is_soft: bool,
    is_bust: bool,
}

impl From<&Hand> for JsHand {
    fn from(hand: &Hand) -> Self {
        Self {
            cards: hand.cards().iter().copied().map(card_to_js).collect(),
            value: hand.value(),
            is_soft: hand.is_soft(),
            is_bust: hand.is_bust(),
        }
    }
}

#[derive(Serialize)]
struct JsDealer {
    /// Face-down cards are `null`.
    cards: Vec<Option<JsCard>>,
    visible_value: u16,
    hole_revealed: bool,
}

impl From<&DealerHand> for JsDealer {
    fn from(dealer: &DealerHand) -> Self {
        let cards = dealer
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (!dealer.is_hidden(index)).then(|| card_to_js(*card)))
            .collect();

        Self {
            cards,
            visible_value: dealer.visible_value(),
            hole_revealed: dealer.is_hole_revealed(),
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    message: String,
    bet: u32,
    payout: u32,
    balance_delta: i32,
    player_score: u16,
    dealer_score: u16,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        Self {
            outcome: outcome_to_str(result.outcome),
            message: result.outcome.to_string(),
            bet: result.bet as u32,
            payout: result.payout as u32,
            balance_delta: result.balance_delta as i32,
            player_score: result.player_score,
            dealer_score: result.dealer_score,
        }
    }
}

#[derive(Serialize)]
struct JsStats {
    hands_played: u32,
    hands_won: u32,
    hands_lost: u32,
    net_earnings: i32,
}

impl From<SessionStats> for JsStats {
    fn from(stats: SessionStats) -> Self {
        Self {
            hands_played: stats.hands_played,
            hands_won: stats.hands_won,
            hands_lost: stats.hands_lost,
            net_earnings: stats.net_earnings as i32,
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum JsEvent {
    CardDealt {
        participant: &'static str,
        /// `null` while the card is face down.
        card: Option<JsCard>,
    },
    HoleCardRevealed {
        card: JsCard,
    },
    ScoresUpdated {
        player: u16,
        dealer: u16,
    },
    RoundSettled {
        result: JsRoundResult,
    },
    StatsUpdated {
        stats: JsStats,
    },
    BalanceUpdated {
        balance: u32,
    },
    DeckReplenished,
    GameOver,
}

impl From<Event> for JsEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::CardDealt {
                participant,
                card,
                hidden,
            } => Self::CardDealt {
                participant: match participant {
                    Participant::Player => "player",
                    Participant::Dealer => "dealer",
                },
                card: (!hidden).then(|| card_to_js(card)),
            },
            Event::HoleCardRevealed(card) => Self::HoleCardRevealed {
                card: card_to_js(card),
            },
            Event::ScoresUpdated { player, dealer } => Self::ScoresUpdated { player, dealer },
            Event::RoundSettled(result) => Self::RoundSettled {
                result: result.into(),
            },
            Event::StatsUpdated(stats) => Self::StatsUpdated {
                stats: stats.into(),
            },
            Event::BalanceUpdated(balance) => Self::BalanceUpdated {
                balance: balance as u32,
            },
            Event::DeckReplenished => Self::DeckReplenished,
            Event::GameOver => Self::GameOver,
        }
    }
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: card.suit.name(),
        rank: card.rank.label(),
        image: format!(
            "{}_of_{}",
            card.rank.label().to_lowercase(),
            card.suit.name().to_lowercase()
        ),
    }
}

fn state_to_str(state: GameState) -> &'static str {
    match state {
        GameState::Betting => "Betting",
        GameState::Dealing => "Dealing",
        GameState::PlayerTurn => "PlayerTurn",
        GameState::DealerTurn => "DealerTurn",
        GameState::Settled => "Settled",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::PlayerBust => "PlayerBust",
        Outcome::DealerBust => "DealerBust",
        Outcome::PlayerWin => "PlayerWin",
        Outcome::DealerWin => "DealerWin",
        Outcome::Push => "Push",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
