//! Generate command CLI handler.

use super::GenerateArgs;
use kanban_seed::{CardTargeting, FakeValues, Generator, OutputTarget, SeedConfig, SeedStats};
use serde::Serialize;
use tracing::info;

/// JSON output for dry runs
#[derive(Serialize)]
struct DryRunJsonOutput<'a> {
    seed: u64,
    users: u64,
    card_targeting: String,
    output: String,
    statistics: &'a SeedStats,
}

pub async fn run(args: GenerateArgs) -> anyhow::Result<()> {
    let mut config = match args.config {
        Some(ref path) => SeedConfig::load(path)?,
        None => SeedConfig::default(),
    };

    // Command-line values win over the config file
    if let Some(count) = args.count {
        config.users = count;
    }
    if let Some(output) = args.output {
        config.output = output;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(schema) = args.schema {
        config.schema = schema;
    }
    if let Some(ref targeting) = args.card_targeting {
        config.card_targeting = targeting
            .parse::<CardTargeting>()
            .map_err(|e| anyhow::anyhow!("{}", e))?;
    }
    config.validate()?;

    // Generate random seed if not provided
    let seed = config.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        users = config.users,
        card_targeting = %config.card_targeting,
        "generating seed script"
    );

    let target = OutputTarget::from_path(&config.output);

    if !args.dry_run {
        kanban_seed::run(&config, FakeValues::from_seed(seed), target).await?;
        return Ok(());
    }

    let script = Generator::new(&config, FakeValues::from_seed(seed)).generate()?;
    let stats = script.stats();

    if args.json {
        let output = DryRunJsonOutput {
            seed,
            users: config.users,
            card_targeting: config.card_targeting.to_string(),
            output: target.to_string(),
            statistics: &stats,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        eprintln!("Seed Statistics (dry run, nothing written to {}):", target);
        eprintln!("  Seed:      {}", seed);
        eprintln!("  Users:     {}", stats.users);
        eprintln!("  Boards:    {}", stats.boards);
        eprintln!("  Columns:   {}", stats.columns);
        eprintln!("  Members:   {}", stats.members);
        eprintln!("  Cards:     {}", stats.cards);
        eprintln!(
            "  Total:     {} ({} creation, {} deferred)",
            stats.total(),
            stats.creation(),
            stats.deferred()
        );
    }

    Ok(())
}
