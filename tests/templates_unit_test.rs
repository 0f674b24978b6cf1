//! Unit tests for statement templates

use kanban_seed::templates::{
    render_create_board, render_create_card, render_create_column, render_create_member,
    render_create_user,
};

#[test]
fn test_create_user() {
    let sql = render_create_user("_App", "jdoe", "John", "Doe", "john@example.com", "secret");
    assert_eq!(
        sql,
        "CALL _App.create_user('jdoe', 'John', 'Doe', 'john@example.com', 'secret', @__discarded__);"
    );
}

#[test]
fn test_create_board() {
    let sql = render_create_board("_App", 3, "Roadmap", "#1a2b3c");
    assert_eq!(
        sql,
        "CALL _App.create_board(3, 'Roadmap', '#1a2b3c', @__discarded__);"
    );
}

#[test]
fn test_create_column() {
    let sql = render_create_column("_App", 2, "Todo", 7);
    assert_eq!(
        sql,
        "INSERT INTO _App.Columns (boardId, title, pos) VALUE (2, 'Todo', 7);"
    );
}

#[test]
fn test_create_member() {
    assert_eq!(
        render_create_member("_App", 5, 1),
        "INSERT INTO _App.Members (userId, boardId) VALUE (5, 1);"
    );
}

#[test]
fn test_create_card_is_single_line() {
    let sql = render_create_card("_App", 4, 2, 0, "Fix login", "Body text");
    assert_eq!(
        sql,
        "INSERT INTO _App.Cards (columnId, authorId, pos, title, content) VALUE (4, 2, 0, 'Fix login', 'Body text');"
    );
    assert_eq!(sql.lines().count(), 1);
}

#[test]
fn test_apostrophes_are_escaped() {
    let sql = render_create_user("_App", "o'hara", "Dan", "O'Hara", "o'hara@example.com", "p'w");
    assert!(sql.contains("'o\\'hara'"));
    assert!(sql.contains("'O\\'Hara'"));
    assert!(sql.contains("'p\\'w'"));

    let sql = render_create_card("_App", 1, 2, 3, "it's", "multi\nline");
    assert!(sql.contains("'it\\'s'"));
    assert!(sql.contains("'multi\\nline'"));
    assert_eq!(sql.lines().count(), 1);
}

#[test]
fn test_schema_prefix() {
    assert!(render_create_board("Kanban", 1, "t", "#000000").starts_with("CALL Kanban.create_board("));
    assert!(render_create_member("Kanban", 1, 2).starts_with("INSERT INTO Kanban.Members"));
}
