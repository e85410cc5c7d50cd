//! Console front-end for Space Race.
//!
//! All game logic lives in the library; this binary collects input,
//! drives the session round by round and renders the results.

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;

use space_race::{GameSession, GameStatus, MAX_PLAYERS, MIN_PLAYERS};

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Optional numeric seed as the first argument for reproducible games.
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(rand::random);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut session = GameSession::new(seed);

    println!("Welcome to Space Race.\n");

    loop {
        if !set_up_from_prompt(&mut session, &mut input)? {
            break;
        }
        run_game(&mut session, &mut input)?;
        print_results(&session);

        if !prompt_restart(&mut input)? {
            println!("\nThanks for playing Space Race.");
            break;
        }
        println!();
        session.reset();
    }

    Ok(())
}

/// Prompt until a valid player count is accepted. Returns false at end of
/// input.
fn set_up_from_prompt(session: &mut GameSession, input: &mut impl BufRead) -> io::Result<bool> {
    println!("This game is for {MIN_PLAYERS}-{MAX_PLAYERS} players.");
    loop {
        print!("How many players ({MIN_PLAYERS}-{MAX_PLAYERS}): ");
        io::stdout().flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(false);
        };
        println!();
        match line.trim().parse::<usize>() {
            Ok(count) => match session.set_up_players(count) {
                Ok(()) => return Ok(true),
                Err(error) => println!("Error: {error}."),
            },
            Err(_) => println!("Error: invalid number of players entered."),
        }
    }
}

/// Drive rounds until the game ends or stdin closes.
fn run_game(session: &mut GameSession, input: &mut impl BufRead) -> io::Result<()> {
    while session.status() == GameStatus::Playing {
        print!("\nPress Enter to play a round");
        io::stdout().flush()?;
        if read_line(input)?.is_none() {
            return Ok(());
        }

        let report = session.play_one_round();
        println!("\tRound {}\n", report.round);
        for player in session.players() {
            if player.has_power() {
                println!(
                    "\tPlayer {} is on square {} with {} yottawatts of power remaining",
                    player.name(),
                    player.position(),
                    player.rocket_fuel()
                );
            } else {
                println!(
                    "\tPlayer {} has run out of fuel on square {}",
                    player.name(),
                    player.position()
                );
            }
        }
    }
    Ok(())
}

fn print_results(session: &GameSession) {
    match session.status() {
        GameStatus::Finished => {
            println!(
                "\n\n\tThe following player(s) finished the game in round {}\n",
                session.round() - 1
            );
            for player in session.players().iter().filter(|p| p.at_finish()) {
                println!("\t\t{}", player.name());
            }

            println!("\n\tIndividual players finished at the following locations.\n");
            for player in session.players() {
                println!(
                    "\t\tPlayer {} with {} yottawatts of power at square {}",
                    player.name(),
                    player.rocket_fuel(),
                    player.position()
                );
            }
        }
        GameStatus::AllOutOfFuel => {
            println!(
                "\n\n\tAll players have run out of fuel in round {}!\n",
                session.round() - 1
            );
            for player in session.players() {
                println!(
                    "\tPlayer {} finished on square {} before they ran out of fuel!",
                    player.name(),
                    player.position()
                );
            }
        }
        GameStatus::Setup | GameStatus::Playing => {}
    }
}

/// Y/N restart prompt; anything other than Y counts as no.
fn prompt_restart(input: &mut impl BufRead) -> io::Result<bool> {
    print!("\n\nPlay again? (Y or N): ");
    io::stdout().flush()?;
    match read_line(input)? {
        Some(line) => Ok(line.trim().eq_ignore_ascii_case("y")),
        None => Ok(false),
    }
}

/// Read one line, `None` at end of input.
fn read_line(input: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}
