//! SQL statement templates.
//!
//! One pure function per entity or relationship. Every rendered statement is a
//! single line terminated by `;`. String fields go through
//! [`escape_sql_string`] so generated text can never break out of a literal.

/// Output variable the stored procedures write the new id into. Never read.
const DISCARD_VAR: &str = "@__discarded__";

/// Escape a value for use inside a single-quoted MySQL string literal
pub fn escape_sql_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}

fn quote(s: &str) -> String {
    format!("'{}'", escape_sql_string(s))
}

pub fn render_create_user(
    schema: &str,
    username: &str,
    first_name: &str,
    last_name: &str,
    email: &str,
    password: &str,
) -> String {
    format!(
        "CALL {}.create_user({}, {}, {}, {}, {}, {});",
        schema,
        quote(username),
        quote(first_name),
        quote(last_name),
        quote(email),
        quote(password),
        DISCARD_VAR
    )
}

pub fn render_create_board(schema: &str, owner_id: u64, title: &str, color: &str) -> String {
    format!(
        "CALL {}.create_board({}, {}, {}, {});",
        schema,
        owner_id,
        quote(title),
        quote(color),
        DISCARD_VAR
    )
}

pub fn render_create_column(schema: &str, board_id: u64, title: &str, position: i64) -> String {
    format!(
        "INSERT INTO {}.Columns (boardId, title, pos) VALUE ({}, {}, {});",
        schema,
        board_id,
        quote(title),
        position
    )
}

pub fn render_create_member(schema: &str, user_id: u64, board_id: u64) -> String {
    format!(
        "INSERT INTO {}.Members (userId, boardId) VALUE ({}, {});",
        schema, user_id, board_id
    )
}

pub fn render_create_card(
    schema: &str,
    column_id: u64,
    author_id: u64,
    position: i64,
    title: &str,
    body: &str,
) -> String {
    format!(
        "INSERT INTO {}.Cards (columnId, authorId, pos, title, content) VALUE ({}, {}, {}, {}, {});",
        schema,
        column_id,
        author_id,
        position,
        quote(title),
        quote(body)
    )
}
