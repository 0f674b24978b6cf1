//! Seed script generator.
//!
//! Walks users × boards × columns × card authors and renders one statement per
//! row. Statements are routed by kind into two sequences: the creation
//! sequence (users, boards, columns) and the deferred sequence (members,
//! cards). Members and cards reference boards and columns, so the assembled
//! script always emits the whole creation sequence first.

mod ids;

pub use ids::{Entity, IdAllocator};

use crate::config::{CardTargeting, SeedConfig};
use crate::fake::ValueSource;
use crate::templates;
use anyhow::ensure;
use serde::Serialize;
use tracing::debug;

/// Output phase of a statement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Defines an entity without forward references
    Creation,
    /// References entities from the creation phase
    Deferred,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatementKind {
    User,
    Board,
    Column,
    Member,
    Card,
}

impl StatementKind {
    pub fn phase(self) -> Phase {
        match self {
            StatementKind::User | StatementKind::Board | StatementKind::Column => Phase::Creation,
            StatementKind::Member | StatementKind::Card => Phase::Deferred,
        }
    }
}

/// One rendered SQL statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    pub kind: StatementKind,
    pub sql: String,
}

impl Statement {
    pub fn new(kind: StatementKind, sql: String) -> Self {
        Self { kind, sql }
    }
}

/// Statement counts of a generated script
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeedStats {
    pub users: usize,
    pub boards: usize,
    pub columns: usize,
    pub members: usize,
    pub cards: usize,
}

impl SeedStats {
    pub fn creation(&self) -> usize {
        self.users + self.boards + self.columns
    }

    pub fn deferred(&self) -> usize {
        self.members + self.cards
    }

    pub fn total(&self) -> usize {
        self.creation() + self.deferred()
    }
}

/// The two ordered statement sequences of one generation pass
#[derive(Debug, Clone, Default)]
pub struct SeedScript {
    creation: Vec<Statement>,
    deferred: Vec<Statement>,
}

impl SeedScript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement to the sequence its kind belongs to
    pub fn push(&mut self, statement: Statement) {
        match statement.kind.phase() {
            Phase::Creation => self.creation.push(statement),
            Phase::Deferred => self.deferred.push(statement),
        }
    }

    pub fn creation(&self) -> &[Statement] {
        &self.creation
    }

    pub fn deferred(&self) -> &[Statement] {
        &self.deferred
    }

    /// All statements in output order
    pub fn statements(&self) -> impl Iterator<Item = &Statement> {
        self.creation.iter().chain(self.deferred.iter())
    }

    pub fn len(&self) -> usize {
        self.creation.len() + self.deferred.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Join all statements with newlines, creation sequence first
    pub fn assemble(&self) -> String {
        self.statements()
            .map(|s| s.sql.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn stats(&self) -> SeedStats {
        let mut stats = SeedStats::default();
        for statement in self.statements() {
            match statement.kind {
                StatementKind::User => stats.users += 1,
                StatementKind::Board => stats.boards += 1,
                StatementKind::Column => stats.columns += 1,
                StatementKind::Member => stats.members += 1,
                StatementKind::Card => stats.cards += 1,
            }
        }
        stats
    }
}

/// Generates a [`SeedScript`] from a configuration and a value source
pub struct Generator<'a, V: ValueSource> {
    config: &'a SeedConfig,
    source: V,
}

impl<'a, V: ValueSource> Generator<'a, V> {
    pub fn new(config: &'a SeedConfig, source: V) -> Self {
        Self { config, source }
    }

    /// Run one full generation pass.
    ///
    /// Fails only when the value source fails; nothing partial is returned.
    pub fn generate(&mut self) -> anyhow::Result<SeedScript> {
        let users = self.config.users;
        let author_limit = self.config.author_limit();
        let mut ids = IdAllocator::new();
        let mut script = SeedScript::new();

        for i in 1..=users {
            let user_id = ids.next_id(Entity::User);
            script.push(self.user_statement()?);

            let board_id = ids.next_id(Entity::Board);
            // Board i is owned by user i
            ensure!(
                user_id == i && board_id == i,
                "id allocation out of step: user {} / board {} at ordinal {}",
                user_id,
                board_id,
                i
            );
            script.push(self.board_statement(user_id)?);

            for member_id in (1..=users).filter(|&s| s != i) {
                script.push(Statement::new(
                    StatementKind::Member,
                    templates::render_create_member(&self.config.schema, member_id, board_id),
                ));
            }

            for _ in 0..self.config.columns_per_board {
                let column_id = ids.next_id(Entity::Column);
                script.push(self.column_statement(board_id)?);

                let target = match self.config.card_targeting {
                    CardTargeting::Legacy => i,
                    CardTargeting::Column => column_id,
                };
                for author_id in (1..=author_limit).filter(|&k| k != i) {
                    script.push(self.card_statement(target, author_id)?);
                }
            }
        }

        debug!(
            creation = script.creation().len(),
            deferred = script.deferred().len(),
            columns = ids.issued(Entity::Column),
            "generation pass complete"
        );

        Ok(script)
    }

    fn position(&mut self) -> anyhow::Result<i64> {
        self.source.int_range(0, self.config.max_position)
    }

    fn user_statement(&mut self) -> anyhow::Result<Statement> {
        let username = self.source.username()?;
        let first_name = self.source.first_name()?;
        let last_name = self.source.last_name()?;
        let email = self.source.email()?;
        let password = self.source.password(self.config.password_length)?;
        Ok(Statement::new(
            StatementKind::User,
            templates::render_create_user(
                &self.config.schema,
                &username,
                &first_name,
                &last_name,
                &email,
                &password,
            ),
        ))
    }

    fn board_statement(&mut self, owner_id: u64) -> anyhow::Result<Statement> {
        let title = self.source.alpha(self.config.title_length)?;
        let color = self.source.rgb_color()?;
        Ok(Statement::new(
            StatementKind::Board,
            templates::render_create_board(&self.config.schema, owner_id, &title, &color),
        ))
    }

    fn column_statement(&mut self, board_id: u64) -> anyhow::Result<Statement> {
        let title = self.source.alpha(self.config.title_length)?;
        let position = self.position()?;
        Ok(Statement::new(
            StatementKind::Column,
            templates::render_create_column(&self.config.schema, board_id, &title, position),
        ))
    }

    fn card_statement(&mut self, column_id: u64, author_id: u64) -> anyhow::Result<Statement> {
        let position = self.position()?;
        let title = self.source.alpha(self.config.title_length)?;
        let body = self.source.alpha(self.config.body_length)?;
        Ok(Statement::new(
            StatementKind::Card,
            templates::render_create_card(
                &self.config.schema,
                column_id,
                author_id,
                position,
                &title,
                &body,
            ),
        ))
    }
}
