//! CLI command implementations.

pub(crate) mod copy;
