//! Custom serde modules for fields that are shared behind an `Arc`.

pub mod shared_domain;
