//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_session::{
    Card, DealerHand, Game, GameOptions, GameState, Hand, Observer, Participant, Rank,
    RoundResult, SessionStats, Suit,
};
use tracing_subscriber::EnvFilter;

/// Chip shortcuts offered at the betting prompt.
const CHIPS: [u64; 3] = [100, 500, 1000];

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = std::env::var("BLACKJACK_SEED")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs()
        });
    let game = Game::new(GameOptions::default(), seed);
    let mut view = TerminalView::default();

    loop {
        view.render_money(&game);
        if game.is_game_over() {
            println!("Game over! You're out of money.");
            break;
        }

        let Some(bet) = prompt_bet(game.balance()) else {
            break;
        };

        if let Err(err) = game.place_bet(bet) {
            println!("{err}");
            continue;
        }
        game.drain_into(&mut view);

        while game.state() == GameState::PlayerTurn {
            print_table(&game);

            let result = match prompt_line("Action ([h]it, [s]tand): ").as_str() {
                "h" | "hit" => game.hit().map(|_| ()),
                "s" | "stand" => game.stand().map(|_| ()),
                "q" | "quit" => return finish(game),
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
            game.drain_into(&mut view);
        }

        print_table_final(&game);

        if let Err(err) = game.start_next_hand() {
            println!("Could not start the next hand: {err}");
            break;
        }
        game.drain_into(&mut view);
    }

    finish(game);
}

fn finish(game: Game) {
    let stats = game.end_session().stats();
    println!(
        "Session: {} played, {} won, {} lost, net ${}",
        stats.hands_played, stats.hands_won, stats.hands_lost, stats.net_earnings
    );
}

/// Prints engine events as they are drained.
#[derive(Default)]
struct TerminalView {
    balance: Option<u64>,
}

impl TerminalView {
    fn render_money(&self, game: &Game) {
        let balance = self.balance.unwrap_or_else(|| game.balance());
        println!("\nMoney: ${balance}");
    }
}

impl Observer for TerminalView {
    fn on_card_dealt(&mut self, participant: Participant, card: Card, hidden: bool) {
        let who = match participant {
            Participant::Player => "You",
            Participant::Dealer => "Dealer",
        };
        if hidden {
            println!("{who}: ?? (face down)");
        } else {
            println!("{who}: {}", format_card(&card));
        }
    }

    fn on_hole_card_revealed(&mut self, card: Card) {
        println!("Dealer reveals {}", format_card(&card));
    }

    fn on_round_settled(&mut self, result: &RoundResult) {
        println!("{}", result.outcome);
        let delta = result.balance_delta;
        let text = if delta > 0 {
            colorize(&format!("+{delta}$"), "32")
        } else {
            colorize(&format!("{delta}$"), "31")
        };
        println!("{text}");
    }

    fn on_stats_updated(&mut self, stats: &SessionStats) {
        println!(
            "Hands played: {} | won: {} | lost: {} | net: ${}",
            stats.hands_played, stats.hands_won, stats.hands_lost, stats.net_earnings
        );
    }

    fn on_balance_updated(&mut self, balance: u64) {
        self.balance = Some(balance);
    }

    fn on_deck_replenished(&mut self) {
        println!("Deck reshuffled.");
    }
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}

fn prompt_bet(balance: u64) -> Option<u64> {
    let chips = CHIPS
        .iter()
        .enumerate()
        .map(|(index, chip)| {
            let text = format!("[c{}]${chip}", index + 1);
            if *chip <= balance {
                colorize(&text, "32")
            } else {
                colorize(&text, "90")
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    loop {
        let input = prompt_line(&format!("Bet {chips} or an amount (1-{balance}): "));
        if input == "q" || input == "quit" || input.is_empty() {
            return None;
        }
        match parse_bet(&input) {
            Some(amount) => return Some(amount),
            None => println!("Please enter an amount or a chip (c1-c{}).", CHIPS.len()),
        }
    }
}

/// Reads `c1`..`c3` as chip shortcuts and anything else as a plain amount.
fn parse_bet(input: &str) -> Option<u64> {
    match input.strip_prefix('c') {
        Some(index) => {
            let index = index.parse::<usize>().ok()?;
            CHIPS.get(index.checked_sub(1)?).copied()
        }
        None => input.parse().ok(),
    }
}

fn print_table(game: &Game) {
    let dealer = game.dealer_hand();
    println!(
        "\nDealer: {} (value {})",
        format_dealer(&dealer),
        dealer.visible_value()
    );

    let hand = game.player_hand();
    println!(
        "You:    {} (value {}) | bet {}",
        format_hand(&hand),
        hand.value(),
        game.current_bet()
    );
}

fn print_table_final(game: &Game) {
    let dealer = game.dealer_hand();
    println!(
        "\nDealer: {} (value {})",
        format_dealer(&dealer),
        dealer.value()
    );

    let hand = game.player_hand();
    println!("You:    {} (value {})", format_hand(&hand), hand.value());
}

fn format_dealer(dealer: &DealerHand) -> String {
    if dealer.is_empty() {
        return "(no cards)".to_string();
    }

    dealer
        .cards()
        .iter()
        .enumerate()
        .map(|(index, card)| {
            if dealer.is_hidden(index) {
                "??".to_string()
            } else {
                format_card(card)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let (suit, color_code) = match card.suit {
        Suit::Hearts => ("H", "31"),
        Suit::Diamonds => ("D", "31"),
        Suit::Clubs => ("C", "32"),
        Suit::Spades => ("S", "34"),
    };

    let rank = card.rank.label();
    let colored_rank = if card.rank.is_face() || card.rank == Rank::Ace {
        colorize(rank, color_code)
    } else {
        rank.to_string()
    };
    let colored_suit = colorize(suit, color_code);
    format!("{colored_rank}{colored_suit}")
}
