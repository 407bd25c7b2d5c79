//! Terminal front end for the blackjack engine.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use bj21::money::{Amount, parse_amount};
use bj21::rules::load_rules;
use bj21::{BetError, Command, DealError, Game, GameOptions, GamePhase, SessionError, Variant};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Variant to play: 1, 2, 3 or a rules key such as `spanish_21`.
    /// Shows the menu when omitted.
    #[arg(short, long)]
    variant: Option<Variant>,

    /// Number of decks in the shoe
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..))]
    decks: u8,

    /// Starting wallet, e.g. `100` or `250.50`
    #[arg(short, long, default_value = "100", value_parser = parse_amount)]
    wallet: usize,

    /// Shuffle seed; defaults to the current time
    #[arg(long)]
    seed: Option<u64>,

    /// Directory holding the rules text files
    #[arg(long, default_value = "rules")]
    rules_dir: PathBuf,

    /// Let the dealer draw to 17 on its own after the player stands
    #[arg(long)]
    auto_dealer: bool,

    /// Deal the dealer a face-down second card in Blackjack and Spanish 21
    /// (ignored by Face Up 21, which deals both dealer cards face up)
    #[arg(long)]
    hole_card: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let Some(variant) = cli.variant.or_else(choose_variant) else {
        return;
    };

    let options = GameOptions::default()
        .with_variant(variant)
        .with_decks(cli.decks)
        .with_wallet(cli.wallet)
        .with_auto_dealer(cli.auto_dealer)
        .with_hole_card(cli.hole_card);
    log::info!("starting {variant} with seed {seed}");

    let rules = load_rules(&cli.rules_dir, variant);
    let mut game = Game::new(options, seed);

    if let Err(err) = run(&mut game, &rules) {
        println!("{}", colorize(&capitalize(&err.to_string()), "31"));
    }
}

/// Plays rounds until the player quits or the session ends.
fn run(game: &mut Game, rules: &str) -> Result<(), SessionError> {
    loop {
        if game.check_funds().is_err() {
            return Err(SessionError::OutOfFunds);
        }

        if !place_bet(game)? {
            return Ok(());
        }

        match game.deal() {
            Ok(()) => {}
            Err(DealError::EmptyShoe) => return Err(SessionError::OutOfCards),
            Err(err) => {
                log::warn!("deal refused: {err}");
                game.next_round();
                continue;
            }
        }

        while matches!(game.phase(), GamePhase::PlayerTurn | GamePhase::DealerTurn) {
            print_table(game, rules);
            println!("{}", format_commands(game));

            let Some(line) = prompt_line("> ") else {
                return Ok(());
            };
            let command = match line.parse::<Command>() {
                Ok(Command::Quit) => return Ok(()),
                Ok(command) => command,
                Err(err) => {
                    println!("{}", colorize(&capitalize(&err.to_string()), "90"));
                    continue;
                }
            };

            game.apply(command)?;
        }

        print_table(game, rules);
        if let Some(result) = game.last_result() {
            println!("Round net: {}", format_net(result.net()));
        }
        game.next_round();
    }
}

/// Prompts until a bet is accepted. Returns `false` when the player quits.
fn place_bet(game: &mut Game) -> Result<bool, SessionError> {
    loop {
        let prompt = format!("Bet (wallet {}, q to quit): ", Amount(game.wallet()));
        let Some(line) = prompt_line(&prompt) else {
            return Ok(false);
        };
        if line.eq_ignore_ascii_case("q") {
            return Ok(false);
        }

        let result = parse_amount(&line).and_then(|amount| game.bet(amount));
        match result {
            Ok(()) => return Ok(true),
            Err(BetError::OutOfFunds) => return Err(SessionError::OutOfFunds),
            Err(err) => println!("{}", colorize(&capitalize(&err.to_string()), "90")),
        }
    }
}

/// Shows the variant menu until a valid choice is made. Returns `None` on
/// end of input.
fn choose_variant() -> Option<Variant> {
    loop {
        println!("Choose a game:");
        for variant in Variant::ALL {
            println!("  {}: {variant}", variant.menu_number());
        }

        let line = prompt_line("> ")?;
        match line.parse() {
            Ok(variant) => return Some(variant),
            Err(err) => println!("{}", colorize(&capitalize(&err.to_string()), "90")),
        }
    }
}

fn print_table(game: &Game, rules: &str) {
    if !rules.is_empty() {
        println!("\n{}", rules.trim_end());
    }
    println!("\n{}", game.view());
}

fn format_commands(game: &Game) -> String {
    let parts: Vec<String> = Command::ALL
        .iter()
        .filter(|command| command.is_offered(game.rules()))
        .map(|command| {
            let key = colorize(&command.key().to_string(), "32");
            format!("{key} {}", command.label())
        })
        .collect();
    parts.join(", ")
}

fn format_net(net: isize) -> String {
    let amount = Amount(net.unsigned_abs()).to_string();
    if net < 0 {
        colorize(&format!("-{amount}"), "31")
    } else {
        colorize(&format!("+{amount}"), "32")
    }
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_owned()),
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}
