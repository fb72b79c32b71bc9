//! isodb-cli
//! =========
//!
//! Command-line interface for the `isodb-core` ISO reference-data library.
//!
//! This crate primarily provides a binary (`isodb`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! Install the CLI from crates.io:
//!
//! ```text
//! cargo install isodb-cli
//! ```
//!
//! Basic usage:
//!
//! ```text
//! isodb --help
//! isodb countries --code US
//! isodb countries --name Island
//! isodb currencies --code USD --format json
//! ```
//!
//! For programmatic access to the datasets and query APIs, use the
//! [`isodb-core`] crate directly.
//!
//! [`isodb-core`]: https://docs.rs/isodb-core

// This library target intentionally exposes no API; the binary is the primary
// deliverable. The presence of this file enables a rendered page on docs.rs.
