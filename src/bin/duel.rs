use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use rust_gwent::cards::{CardCatalog, CardId, CardPack, Faction};
use rust_gwent::core::{GameRng, MatchConfig, PlayerId};
use rust_gwent::players::AiController;
use rust_gwent::rules::{GameResult, MatchBuilder};

const BASE_PACK: &str = include_str!("../../data/cards.json");

/// Headless AI-vs-AI match runner.
#[derive(Debug, Parser)]
#[command(name = "duel", version, about = "Play AI-vs-AI lane card matches")]
struct Cli {
    /// Seed for deck sampling and shuffling.
    #[arg(long, value_name = "SEED", default_value_t = 0)]
    seed: u64,

    /// Number of matches to play.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    games: u32,

    /// Cards per deck.
    #[arg(long, value_name = "CARDS", default_value_t = 22)]
    deck_size: usize,

    /// Log level used when RUST_LOG is not set.
    #[arg(long, value_name = "LEVEL", default_value = "info")]
    log_level: String,

    /// Extra card pack (JSON) loaded after the bundled one.
    #[arg(long, value_name = "FILE")]
    pack: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut packs = vec![CardPack::from_json(BASE_PACK).context("parsing bundled card pack")?];
    if let Some(path) = &cli.pack {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading card pack {}", path.display()))?;
        packs.push(CardPack::from_json(&json).with_context(|| format!("parsing card pack {}", path.display()))?);
    }
    let catalog = Arc::new(CardCatalog::from_packs(packs));
    let ids = catalog.all_ids();
    info!(cards = catalog.len(), "catalog loaded");

    let mut wins = [0u32; 2];
    let mut draws = 0u32;

    for game in 0..cli.games {
        let seed = cli.seed.wrapping_add(u64::from(game));
        let mut rng = GameRng::new(seed).for_context("decks");
        let mut sample_deck = || -> Vec<CardId> {
            (0..cli.deck_size)
                .filter_map(|_| rng.choose(&ids).cloned())
                .collect()
        };
        let player_deck = sample_deck();
        let opponent_deck = sample_deck();

        let mut controller = MatchBuilder::new(Arc::clone(&catalog))
            .config(MatchConfig::default().with_seed(seed))
            .side(PlayerId::PLAYER, "Geralt", Faction::Neutral, player_deck, Box::new(AiController::new()))
            .side(PlayerId::OPPONENT, "Yennefer", Faction::Neutral, opponent_deck, Box::new(AiController::new()))
            .build()?;

        let Some(result) = controller.run()? else {
            println!("match {}: abandoned", game + 1);
            continue;
        };

        let outcome = match result.result {
            GameResult::Winner(side) => {
                wins[side.index()] += 1;
                format!("{} wins", controller.player(side).name())
            }
            GameResult::Draw => {
                draws += 1;
                "draw".to_string()
            }
        };
        println!(
            "match {}: {} after {} rounds (lives {}-{}, last round {}-{})",
            game + 1,
            outcome,
            result.final_round.round,
            result.lives[PlayerId::PLAYER],
            result.lives[PlayerId::OPPONENT],
            result.final_round.scores[PlayerId::PLAYER],
            result.final_round.scores[PlayerId::OPPONENT],
        );
    }

    println!(
        "totals: Geralt {} / Yennefer {} / draws {}",
        wins[0], wins[1], draws
    );
    Ok(())
}
