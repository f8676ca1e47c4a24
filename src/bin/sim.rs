use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{host, init_logging, BotPlayer, Command, Event, MatchRegistry, Player, PlayerId};
use serde_json::json;

const MAX_ATTACKS: usize = 400;

/// Bot against bot through the async host. Prints a JSON summary.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    let (handle, task) = host::spawn(MatchRegistry::seeded(seed));
    let ids: [PlayerId; 2] = [1, 2];
    let mut bots = [BotPlayer::new(), BotPlayer::new()];
    let mut rngs = [
        SmallRng::seed_from_u64(seed.wrapping_add(1)),
        SmallRng::seed_from_u64(seed.wrapping_add(2)),
    ];

    let match_id = match handle
        .send(Command::CreateMatch {
            first: ids[0],
            second: ids[1],
        })
        .await??
        .pop()
    {
        Some(Event::MatchCreated { match_id, .. }) => match_id,
        other => return Err(anyhow::anyhow!("Expected MatchCreated, got {:?}", other)),
    };

    let mut current = None;
    for i in 0..2 {
        let ships = bots[i].place_ships(&mut rngs[i])?;
        let events = handle
            .send(Command::PlaceFleet {
                match_id,
                player: ids[i],
                ships,
            })
            .await??;
        for event in events {
            if let Event::StartGame { current_player, .. } = event {
                current = Some(current_player);
            }
        }
    }
    let mut current = current.ok_or_else(|| anyhow::anyhow!("Match did not start"))?;

    let mut attacks = [0usize; 2];
    let mut winner = None;
    'game: for _ in 0..MAX_ATTACKS {
        let slot = if current == ids[0] { 0 } else { 1 };
        attacks[slot] += 1;
        // Targets are drawn by the host's picker.
        let events = handle
            .send(Command::Attack {
                match_id,
                attacker: current,
                target: None,
            })
            .await??;
        for event in events {
            match event {
                Event::TurnChanged { current_player, .. } => current = current_player,
                Event::MatchFinished { winner: w, .. } => {
                    winner = Some(w);
                    break 'game;
                }
                _ => {}
            }
        }
    }

    drop(handle);
    let registry = task.await?;

    let result = json!({
        "player1": {"id": ids[0], "attacks": attacks[0]},
        "player2": {"id": ids[1], "attacks": attacks[1]},
        "winner": winner,
        "live_matches": registry.len(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
