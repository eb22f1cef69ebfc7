//! Private instrumented element types for testing and examples in
//! `contig_vec` packages.
//!
//! These are the collaborators the container is observed through: a probe
//! that counts live instances, marker types that support only one transfer
//! strategy each, a padding-heavy wide-aligned element, and a
//! duplication-failure injector.

mod counting;
mod flaky;
mod markers;

pub use counting::*;
pub use flaky::*;
pub use markers::*;
