use clap::{Parser, Subcommand};
use log::info;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    init_logging, print_player_view, BotPlayer, Command, Event, MatchRegistry, Player, PlayerId,
};

/// Bound on attacks in one match; a 10×10 board is exhausted long before.
const MAX_ATTACKS: usize = 400;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play bot against bot on the local machine.
    Local {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Print both boards after every attack")]
        show_boards: bool,
    },
}

fn make_rng(seed: Option<u64>, offset: u64) -> SmallRng {
    match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(offset)),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    }
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Local { seed, show_boards } => {
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            run_local(seed, show_boards)
        }
    }
}

fn run_local(seed: Option<u64>, show_boards: bool) -> anyhow::Result<()> {
    let mut registry = MatchRegistry::new(make_rng(seed, 0));
    let ids: [PlayerId; 2] = [1, 2];
    let mut bots = [BotPlayer::new(), BotPlayer::new()];
    let mut rngs = [make_rng(seed, 1), make_rng(seed, 2)];

    let events = registry.handle(Command::CreateMatch {
        first: ids[0],
        second: ids[1],
    })?;
    let match_id = match events.first() {
        Some(Event::MatchCreated { match_id, .. }) => *match_id,
        other => return Err(anyhow::anyhow!("Expected MatchCreated, got {:?}", other)),
    };

    let mut current = None;
    for i in 0..2 {
        let ships = bots[i].place_ships(&mut rngs[i])?;
        for event in registry.handle(Command::PlaceFleet {
            match_id,
            player: ids[i],
            ships,
        })? {
            if let Event::StartGame { current_player, .. } = event {
                current = Some(current_player);
            }
        }
    }
    let mut current = current.ok_or_else(|| anyhow::anyhow!("Match did not start"))?;
    println!("Player {} opens", current);

    for _ in 0..MAX_ATTACKS {
        let slot = ids
            .iter()
            .position(|&id| id == current)
            .ok_or_else(|| anyhow::anyhow!("Unknown current player {}", current))?;
        let game = registry.get(match_id)?;
        let target = bots[slot].select_target(&mut rngs[slot], game.opponent_state(current)?.board())?;
        if show_boards {
            let own = game.player_state(current)?.board();
            let opponent = game.opponent_state(current)?.board();
            print_player_view(own, opponent);
        }

        for event in registry.handle(Command::Attack {
            match_id,
            attacker: current,
            target: Some(target),
        })? {
            match event {
                Event::AttackOutcome { cells, .. } => {
                    info!("player {} fired at {}: {:?}", current, target, cells);
                }
                Event::TurnChanged { current_player, .. } => current = current_player,
                Event::MatchFinished { winner, .. } => {
                    println!("Player {} wins", winner);
                    for (player, wins) in registry.winners() {
                        println!("  player {}: {} win(s)", player, wins);
                    }
                    return Ok(());
                }
                _ => {}
            }
        }
    }
    Err(anyhow::anyhow!("Match did not finish within {} attacks", MAX_ATTACKS))
}
