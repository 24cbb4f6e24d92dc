#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Text analytics over hazard-related social-media posts.
//!
//! Script-aware tokenization, batch-scoped corpus TF-IDF, lexicon
//! sentiment, composite crisis scoring, deterministic topic bucketing,
//! gazetteer entity extraction, and rolling sentiment trends. Everything
//! is synchronous and CPU-bound; the only mutable state is the
//! [`corpus::Corpus`] arena, which is scoped to a single analysis batch
//! and never shared across batches (stale document frequencies would
//! corrupt IDF).

pub mod analyze;
pub mod corpus;
pub mod crisis;
pub mod entities;
pub mod sentiment;
pub mod tokenize;
pub mod topics;
pub mod trend;
