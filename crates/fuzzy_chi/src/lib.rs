//! # Fuzzy Chi
//!
//! Chi-style fuzzy rule induction for training sets split across independent workers.
//!
//! ## Key Features
//!
//! - **Shared fuzzy database**: uniform triangular labels derived only from declared
//!   attribute ranges, so every partition sees the same domain without communicating
//! - **Independent partitions**: each partition induces its own rule set with a local
//!   accumulator; partitions run in parallel on rayon
//! - **Ordered merge**: partition rule sets are combined in partition order with a
//!   configurable collision policy and a per-partition provenance table
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use fuzzy_chi::{conf::ChiConfig, domain::build_domain, induce::induce, merge::merge};
//! use fuzzy_chi::schema::{AttributeSpec, DataPartition, DatasetSchema, Instance};
//!
//! let schema = Arc::new(DatasetSchema::new(
//!     vec![AttributeSpec::numeric("x", 0.0, 10.0)],
//!     ["c0", "c1"],
//! ));
//! let domain = Arc::new(build_domain(&schema, 3)?);
//! let partition = DataPartition::new(
//!     0,
//!     Arc::clone(&schema),
//!     vec![Instance::new(vec![1.0], 0), Instance::new(vec![9.0], 1)],
//! );
//! let local = induce(&partition, &domain, &ChiConfig::default())?;
//! let global = merge(&[local])?; // provenance() == [2]
//! ```

// Module declarations
pub mod codec;
pub mod conf;
pub mod dataframe;
pub mod domain;
pub mod error;
pub mod estimator;
pub mod induce;
pub mod membership;
pub mod merge;
pub mod orchestrator;
pub mod rule;
pub mod rule_base;
pub mod schema;
pub mod serde;

pub use error::{ChiError, Result};
