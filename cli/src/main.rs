mod config;

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

use clap::Parser;
use tictactoe_engine::{
    Difficulty, GameSession, Mark, Outcome, SessionSnapshot, Turn, check_win_with_line, log,
    logger::init_logger,
};

use config::{CONFIG_FILE_NAME, CliConfig};

#[derive(Parser, Debug)]
#[command(about = "Play Tic-Tac-Toe against the computer in the terminal")]
struct Args {
    /// Difficulty for this run, overriding the config file
    #[arg(short, long)]
    difficulty: Option<Difficulty>,

    /// RNG seed for reproducible Easy/Medium games
    #[arg(short, long)]
    seed: Option<u64>,

    /// Config file location
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    init_logger("tictactoe");

    let args = Args::parse();
    let config_path = args.config.clone().unwrap_or_else(default_config_path);

    let mut config = match CliConfig::load(&config_path) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{}", error);
            std::process::exit(1);
        }
    };

    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }

    let mut session = match args.seed {
        Some(seed) => GameSession::with_seed(config.difficulty, seed),
        None => GameSession::new(config.difficulty),
    };

    log!("Starting session at {} difficulty", config.difficulty);
    print_help();

    run_loop(&mut session, &mut config, &config_path);
}

fn default_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

fn run_loop(session: &mut GameSession, config: &mut CliConfig, config_path: &Path) {
    let stdin = io::stdin();

    loop {
        render(&session.snapshot());
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(_) => break,
        }

        match parse_command(line.trim()) {
            Some(Command::Quit) => break,
            Some(Command::Reset) => {
                session.reset();
                log!("Board reset");
            }
            Some(Command::ClearScores) => {
                session.reset_tally();
                log!("Scores cleared");
            }
            Some(Command::SetDifficulty(difficulty)) => {
                session.set_difficulty(difficulty);
                config.difficulty = difficulty;
                if let Err(error) = config.save(config_path) {
                    eprintln!("{}", error);
                }
                log!("Difficulty set to {}", difficulty);
            }
            Some(Command::Help) => print_help(),
            Some(Command::Place(index)) => {
                play_turn(session, index, config.move_delay_ms);
            }
            None => println!("Unrecognized command: {}", line.trim()),
        }
    }
}

enum Command {
    Place(usize),
    SetDifficulty(Difficulty),
    Reset,
    ClearScores,
    Help,
    Quit,
}

fn parse_command(input: &str) -> Option<Command> {
    match input {
        "q" | "quit" => return Some(Command::Quit),
        "r" | "reset" => return Some(Command::Reset),
        "t" | "scores" => return Some(Command::ClearScores),
        "h" | "help" => return Some(Command::Help),
        _ => {}
    }

    if let Some(rest) = input.strip_prefix("d ")
        && let Ok(difficulty) = rest.parse::<Difficulty>()
    {
        return Some(Command::SetDifficulty(difficulty));
    }

    input.parse::<usize>().ok().map(Command::Place)
}

fn play_turn(session: &mut GameSession, index: usize, move_delay_ms: u64) {
    if !session.place_player_move(index) {
        println!("Cell {} is not playable right now", index);
        return;
    }
    log!("Player placed X at {}", index);
    announce_if_over(session);

    if session.turn() == Turn::Computer && session.outcome() == Outcome::InProgress {
        // Pacing only; the engine itself replies instantly.
        thread::sleep(Duration::from_millis(move_delay_ms));
        if let Some(reply) = session.compute_computer_move() {
            log!("Computer placed O at {}", reply);
        }
        announce_if_over(session);
    }
}

fn announce_if_over(session: &GameSession) {
    match session.outcome() {
        Outcome::PlayerWin => log!("Game over: player wins"),
        Outcome::ComputerWin => log!("Game over: computer wins"),
        Outcome::Draw => log!("Game over: draw"),
        Outcome::InProgress => return,
    }
    if let Some((_, line)) = check_win_with_line(session.board()) {
        log!("Winning line: {:?}", line);
    }
    println!("Type r to play again");
}

fn render(snapshot: &SessionSnapshot) {
    println!();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .map(|col| {
                let index = row * 3 + col;
                let cell = snapshot.board[index];
                if cell == Mark::Empty {
                    index.to_string()
                } else {
                    cell.as_char().to_string()
                }
            })
            .collect();
        println!(" {} ", cells.join(" | "));
        if row < 2 {
            println!("---+---+---");
        }
    }

    let status = match snapshot.outcome {
        Outcome::PlayerWin => "X Wins!".to_string(),
        Outcome::ComputerWin => "O Wins!".to_string(),
        Outcome::Draw => "It's a Draw!".to_string(),
        Outcome::InProgress => match snapshot.turn {
            Turn::Player => "Your Turn".to_string(),
            Turn::Computer => "Computer's Turn".to_string(),
        },
    };

    println!(
        "{} | Player: {} | Computer: {} | Draws: {} | {}",
        status,
        snapshot.tally.player_wins,
        snapshot.tally.computer_wins,
        snapshot.tally.draws,
        snapshot.difficulty,
    );
}

fn print_help() {
    println!("Commands: 0-8 place a mark, d easy|medium|hard, r reset, t clear scores, q quit");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place_command() {
        assert!(matches!(parse_command("4"), Some(Command::Place(4))));
        assert!(parse_command("nine").is_none());
    }

    #[test]
    fn test_parse_difficulty_command() {
        assert!(matches!(
            parse_command("d medium"),
            Some(Command::SetDifficulty(Difficulty::Medium))
        ));
        assert!(parse_command("d impossible").is_none());
    }

    #[test]
    fn test_parse_control_commands() {
        assert!(matches!(parse_command("q"), Some(Command::Quit)));
        assert!(matches!(parse_command("reset"), Some(Command::Reset)));
        assert!(matches!(parse_command("t"), Some(Command::ClearScores)));
    }
}
