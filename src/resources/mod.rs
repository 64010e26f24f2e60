//! Pure filesystem primitives: path probing and symlink reconciliation.
//!
//! Nothing in this module spawns processes or reads configuration; every
//! function is a direct mapping from filesystem state (plus a desired
//! [`LinkSpec`]) to a value. State is probed fresh on every call — the
//! filesystem may change between checks and no staleness-freedom is
//! assumed.
pub mod probe;
pub mod symlink;

pub use probe::{PathState, probe};
pub use symlink::{LinkPolicy, LinkSpec, Outcome, reconcile};
