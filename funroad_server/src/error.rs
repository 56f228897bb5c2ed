// Copyright 2026 the Funroad Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use funroad_catalog::CatalogError;

use crate::config::ConfigError;

/// Errors that stop the server from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration could not be read.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Socket or file I/O failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    /// The configured category document is unusable.
    #[error("category catalog: {0}")]
    Catalog(#[from] CatalogError),
}
