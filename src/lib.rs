//! Seed script generator for the kanban schema.
//!
//! Generates users, boards, columns, members and cards as SQL statements and
//! writes them to a single script (`data.sql` by default).
//!
//! # Example
//!
//! ```rust
//! use kanban_seed::{FakeValues, Generator, SeedConfig};
//!
//! let config = SeedConfig { users: 2, ..Default::default() };
//! let script = Generator::new(&config, FakeValues::from_seed(42))
//!     .generate()
//!     .unwrap();
//!
//! assert_eq!(script.stats().total(), 42);
//! println!("{}", script.assemble());
//! ```

pub mod config;
pub mod fake;
pub mod generator;
pub mod templates;
pub mod writer;

pub use config::{CardTargeting, SeedConfig};
pub use crate::fake::{FakeValues, ValueSource};
pub use generator::{Generator, Phase, SeedScript, SeedStats, Statement, StatementKind};
pub use writer::{OutputTarget, ScriptWriter};

use anyhow::Context;

/// Generate a full script and write it to `target`.
///
/// Generation completes before the single write, so a failing value source
/// leaves any existing output untouched.
pub async fn run<V: ValueSource>(
    config: &SeedConfig,
    source: V,
    target: OutputTarget,
) -> anyhow::Result<SeedStats> {
    let script = Generator::new(config, source)
        .generate()
        .context("Failed to generate seed statements")?;

    let writer = ScriptWriter::new(target);
    let bytes = writer.write(&script).await?;

    let stats = script.stats();
    tracing::info!(
        statements = stats.total(),
        bytes,
        output = %writer.target(),
        "seed script written"
    );
    Ok(stats)
}
