#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// channel isolation module.
pub mod channel;

/// grayscale and negate operations.
pub mod color;

/// region copy and collage module.
pub mod composite;

/// threshold edge detection module.
pub mod edges;

/// half-mirror and diagonal mirror module.
pub mod mirror;

/// module containing parallelization utilities.
pub mod parallel;

/// region statistics and colour similarity gate.
pub mod similarity;
