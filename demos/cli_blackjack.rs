//! CLI blackjack demo with basic-strategy hints.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjsim::{
    Action, Card, Hand, Round, RoundOutcome, RoundPhase, SessionState, SimulationOptions,
    Simulator, Suit, decide_player_action,
};

fn main() {
    println!("Blackjack CLI demo (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let simulator = Simulator::new(SimulationOptions::default(), seed);

    let Some(bankroll) = prompt_u64("Starting bankroll: ") else {
        return;
    };
    let mut session = SessionState::new(bankroll, 1);

    while session.is_active() {
        let money = session.bankroll;
        let Some(bet) = prompt_u64(&format!("Bet amount (1-{money}, 0 to quit): ")) else {
            break;
        };
        if bet == 0 {
            break;
        }

        let mut shoe = simulator.new_shoe();
        let mut bankroll = session.bankroll;
        let mut round = match Round::deal(&mut shoe, bet, &mut bankroll) {
            Ok(round) => round,
            Err(err) => {
                println!("Bet error: {err}");
                continue;
            }
        };

        let natural = round.check_blackjack().unwrap_or(false);

        while round.phase() == RoundPhase::PlayerTurn {
            print_table(&round, false);

            let upcard = round.dealer_upcard().map_or(0, |card| card.value());
            let hint = decide_player_action(round.player(), upcard);
            let double = if round.can_double(bankroll) {
                "[d]ouble"
            } else {
                "(no double)"
            };
            let input = prompt_line(&format!(
                "[h]it [s]tand {double}  (basic strategy: {}): ",
                action_label(hint)
            ));

            let result = match input.as_str() {
                "h" | "hit" => round.hit(&mut shoe).map(|_| ()),
                "s" | "stand" => round.stand(),
                "d" | "double" => round.double_down(&mut shoe, &mut bankroll).map(|_| ()),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        if !natural {
            match round.dealer_play(&mut shoe, &simulator.options) {
                Ok(drawn) if !drawn.is_empty() => println!("Dealer draws {} card(s).", drawn.len()),
                Ok(_) => {}
                Err(err) => println!("Dealer error: {err}"),
            }
        }

        match round.settle(&mut bankroll, &simulator.options) {
            Ok(result) => {
                print_table(&round, true);
                println!("{} (net {})", outcome_message(result.outcome), result.net);
                session.record(bet, &result);
            }
            Err(err) => println!("Settlement error: {err}"),
        }
    }

    let summary = session.result();
    println!(
        "Hands played: {} | peak bankroll: {} | final bankroll: {}",
        summary.hands_played, summary.peak_bankroll, session.bankroll
    );
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

fn prompt_u64(prompt: &str) -> Option<u64> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u64>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(round: &Round, reveal: bool) {
    let dealer = round.dealer();
    if reveal {
        println!(
            "\nDealer: {} (value {})",
            format_hand(dealer),
            dealer.display_value()
        );
    } else {
        let up = round.dealer_upcard().map_or_else(String::new, format_card);
        println!("\nDealer: {up} ??");
    }

    let player = round.player();
    let doubled = if round.doubled() { " (doubled)" } else { "" };
    println!(
        "You:    {} (value {}) | bet {}{doubled}\n",
        format_hand(player),
        player.display_value(),
        round.bet()
    );
}

const fn action_label(action: Action) -> &'static str {
    match action {
        Action::Hit => "hit",
        Action::Stand => "stand",
        Action::Double => "double",
    }
}

const fn outcome_message(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Win => "Player wins!",
        RoundOutcome::Lose => "Dealer wins!",
        RoundOutcome::Push => "It's a tie!",
        RoundOutcome::Blackjack => "Blackjack!",
    }
}

fn format_hand(hand: &Hand) -> String {
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    let suit = match card.suit {
        Suit::Hearts => "H",
        Suit::Diamonds => "D",
        Suit::Clubs => "C",
        Suit::Spades => "S",
    };
    colorize(&format!("{}{suit}", card.rank), color_code)
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
