// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-time document database bootstrap.
//!
//! On first container start the database gets an application user with read/write access
//! and the indexes the content backend relies on. [`BootstrapPlan::render_script`] emits
//! the plan as a mongo shell script suitable for an init-scripts directory.

use core::fmt::Write as _;

use crate::config::DatabaseConfig;

/// Sort direction of an index key.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Ascending (`1`).
    Ascending,
    /// Descending (`-1`).
    Descending,
}

impl Direction {
    /// Mongo key order value.
    pub const fn order(self) -> i8 {
        match self {
            Self::Ascending => 1,
            Self::Descending => -1,
        }
    }
}

/// A single-field index.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IndexSpec {
    /// Collection name.
    pub collection: &'static str,
    /// Indexed field.
    pub field: &'static str,
    /// Key order.
    pub direction: Direction,
    /// Reject duplicate values.
    pub unique: bool,
}

/// Indexes declared for users, categories and media.
pub const INDEXES: [IndexSpec; 6] = [
    IndexSpec {
        collection: "users",
        field: "email",
        direction: Direction::Ascending,
        unique: true,
    },
    IndexSpec {
        collection: "users",
        field: "createdAt",
        direction: Direction::Descending,
        unique: false,
    },
    IndexSpec {
        collection: "categories",
        field: "slug",
        direction: Direction::Ascending,
        unique: true,
    },
    IndexSpec {
        collection: "categories",
        field: "name",
        direction: Direction::Ascending,
        unique: false,
    },
    IndexSpec {
        collection: "media",
        field: "filename",
        direction: Direction::Ascending,
        unique: false,
    },
    IndexSpec {
        collection: "media",
        field: "createdAt",
        direction: Direction::Descending,
        unique: false,
    },
];

/// Role granted to the application user.
pub const APP_ROLE: &str = "readWrite";

/// Everything the bootstrap creates.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BootstrapPlan {
    /// Target database.
    pub database: String,
    /// Application user.
    pub user: String,
    /// Application user's password.
    pub password: String,
    /// Indexes to declare, in order.
    pub indexes: Vec<IndexSpec>,
}

impl BootstrapPlan {
    /// Plan for the configured database and the standard indexes.
    pub fn from_config(config: &DatabaseConfig) -> Self {
        Self {
            database: config.name.clone(),
            user: config.user.clone(),
            password: config.password.clone(),
            indexes: INDEXES.to_vec(),
        }
    }

    /// Render the plan as a mongo shell script.
    pub fn render_script(&self) -> String {
        let db = js_string(&self.database);
        let mut out = String::new();
        out.push_str("// Funroad database bootstrap. Runs once, on first container start.\n");
        let _ = writeln!(out, "db = db.getSiblingDB({db});");
        out.push('\n');
        let _ = writeln!(out, "db.createUser({{");
        let _ = writeln!(out, "  user: {},", js_string(&self.user));
        let _ = writeln!(out, "  pwd: {},", js_string(&self.password));
        let _ = writeln!(out, "  roles: [{{ role: {}, db: {db} }}],", js_string(APP_ROLE));
        let _ = writeln!(out, "}});");
        out.push('\n');
        for index in &self.indexes {
            let _ = write!(
                out,
                "db.getCollection({}).createIndex({{ {}: {} }}",
                js_string(index.collection),
                js_string(index.field),
                index.direction.order()
            );
            if index.unique {
                out.push_str(", { unique: true }");
            }
            out.push_str(");\n");
        }
        out.push('\n');
        let _ = writeln!(
            out,
            "print({});",
            js_string(&format!(
                "bootstrap complete: database {}, user {}, {} indexes",
                self.database,
                self.user,
                self.indexes.len()
            ))
        );
        out
    }
}

/// Quote `value` as a JavaScript string literal.
fn js_string(value: &str) -> String {
    // JSON string literals are valid JavaScript string literals.
    serde_json::Value::from(value).to_string()
}
