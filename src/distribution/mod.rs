//! The [`Distribution`] type and everything that combines distributions.
//!
//! - [`Distribution`] — normalized outcome → mass mapping with
//!   [`convolve`](Distribution::convolve) and [`map`](Distribution::map)
//! - [`Outcome`] — dynamically typed outcome (boolean, integer, real, label)
//! - [`Op`] / [`Operand`] — binary operation dispatch and operator overloads
//! - [`ValidationError`] — why a distribution is invalid
//! - [`dice`] — coin and dice presets, dice notation
pub mod dice;
mod distribution;
mod error;
mod ops;
mod outcome;

pub use dice::Dice;
pub use distribution::*;
pub use error::*;
pub use ops::*;
pub use outcome::*;
