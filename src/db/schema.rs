//! SQL DDL for the inventory store.
//! SQLite-first design; cascade deletion is delegated to the engine.

/// Schema with:
/// - `users`: username keyed, PHC password hash only (never plaintext)
/// - `categories`: name keyed, `updated` is epoch millis
/// - `items`: rowid keyed, `category` FK with ON DELETE CASCADE
///
/// `qty` is deliberately TEXT; quantity semantics are opaque to this layer.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE users (
    username TEXT PRIMARY KEY,
    password_hash TEXT NOT NULL
);

CREATE TABLE categories (
    name TEXT PRIMARY KEY,
    updated INTEGER NOT NULL
);

CREATE TABLE items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    description TEXT NOT NULL,
    qty TEXT NOT NULL,
    category TEXT NOT NULL,
    FOREIGN KEY(category) REFERENCES categories(name) ON DELETE CASCADE
);
"#;

/// Destructive reset used by the upgrade path. Order matters: items holds
/// the foreign key, so it goes first.
pub const SQLITE_DROP: &str = r#"
DROP TABLE IF EXISTS items;
DROP TABLE IF EXISTS categories;
DROP TABLE IF EXISTS users;
"#;

/// Categories present in every fresh store.
pub const SEED_CATEGORIES: [&str; 4] = ["Appliances", "Computers", "Electronics", "HomeKitchen"];
