//! Custom serde for Arc<FuzzyDomain> - the domain is written by value so the rule base
//! stays self-describing, and each decoded rule base gets its own Arc.

use crate::domain::FuzzyDomain;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::sync::Arc;

pub fn serialize<S>(domain: &Arc<FuzzyDomain>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    domain.as_ref().serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Arc<FuzzyDomain>, D::Error>
where
    D: Deserializer<'de>,
{
    FuzzyDomain::deserialize(deserializer).map(Arc::new)
}
