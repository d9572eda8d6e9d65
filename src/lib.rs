#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub use num_bigint::BigUint;
pub use rand_core;

mod algorithms;
mod blocks;
mod engine;
pub mod errors;
mod key;
pub mod math;

pub use crate::{
    engine::RsaEngine,
    errors::{Error, Result},
    key::RsaKey,
    math::ModInverse,
};
