//! YAML configuration for the seed generator.
//!
//! Every field has a default, so an empty file (or no file at all) yields the
//! stock script: 10 users into `data.sql` under the `_App` schema.

use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Number of users, and therefore boards, in the stock script
pub const DEFAULT_USER_COUNT: u64 = 10;
pub const DEFAULT_COLUMNS_PER_BOARD: u64 = 3;
/// Card authors are drawn from a fixed range that does not follow the user count
pub const DEFAULT_CARD_AUTHORS: u64 = 6;
pub const DEFAULT_SCHEMA: &str = "_App";
pub const DEFAULT_OUTPUT: &str = "data.sql";

/// Which column id a card statement points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardTargeting {
    /// Cards of board `i` point at column id `i`, regardless of the column
    /// they were generated under (historic data.sql layout)
    #[default]
    Legacy,
    /// Cards point at the column they were generated under, and authors are
    /// limited to users that exist
    Column,
}

impl std::str::FromStr for CardTargeting {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(CardTargeting::Legacy),
            "column" => Ok(CardTargeting::Column),
            _ => Err(format!(
                "Unknown card targeting: {}. Valid options: legacy, column",
                s
            )),
        }
    }
}

impl std::fmt::Display for CardTargeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardTargeting::Legacy => write!(f, "legacy"),
            CardTargeting::Column => write!(f, "column"),
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Number of users (and boards)
    pub users: u64,
    pub columns_per_board: u64,
    /// Upper bound of the card author range `1..=card_authors`
    pub card_authors: u64,
    /// Schema prefix for procedures and tables
    pub schema: String,
    pub card_targeting: CardTargeting,
    /// RNG seed; a random one is chosen when absent
    pub seed: Option<u64>,
    /// Output file, `-` for stdout
    pub output: PathBuf,
    pub password_length: usize,
    pub title_length: usize,
    pub body_length: usize,
    /// Column and card positions are drawn from `0..=max_position`
    pub max_position: i64,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            users: DEFAULT_USER_COUNT,
            columns_per_board: DEFAULT_COLUMNS_PER_BOARD,
            card_authors: DEFAULT_CARD_AUTHORS,
            schema: DEFAULT_SCHEMA.to_string(),
            card_targeting: CardTargeting::default(),
            seed: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            password_length: 24,
            title_length: 30,
            body_length: 255,
            max_position: 10,
        }
    }
}

impl SeedConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: SeedConfig = serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// Reject configurations the generator cannot honor
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.users == 0 {
            bail!("users must be at least 1");
        }
        if self.columns_per_board == 0 {
            bail!("columns_per_board must be at least 1");
        }
        if self.schema.trim().is_empty() {
            bail!("schema must not be empty");
        }
        if self.password_length == 0 || self.title_length == 0 || self.body_length == 0 {
            bail!("password, title and body lengths must be greater than 0");
        }
        if self.max_position < 0 {
            bail!("max_position must not be negative");
        }
        Ok(())
    }

    /// Last author ordinal cards are generated for
    pub fn author_limit(&self) -> u64 {
        match self.card_targeting {
            CardTargeting::Legacy => self.card_authors,
            CardTargeting::Column => self.card_authors.min(self.users),
        }
    }
}
