//! Discrete outcome distributions.
//!
//! A [`Distribution`] maps outcomes to probability mass and is normalized
//! as soon as it is built. Distributions combine by convolution
//! (summing two dice) or by mapping a function over their outcomes, and
//! the arithmetic and comparison operators route to one or the other
//! depending on whether the right-hand side is another distribution or a
//! constant.
//!
//! ## Modules
//!
//! - [`support`] — the [`Support`] marker trait for outcome types
//! - [`distribution`] — [`Distribution`], [`Outcome`], [`Op`], presets
pub mod distribution;
pub mod support;

pub use distribution::*;
pub use support::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Outcome masses, densities, and totals.
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing.
pub trait Arbitrary {
    /// Generate a random instance.
    fn random() -> Self;
}

// ============================================================================
// VALIDATION
// ============================================================================
/// Allowed deviation of total mass from 1.0 in [`Distribution::ensure`].
/// Six masses of 1/6 already sum to 0.9999999999999999.
pub const ENSURE_TOLERANCE: Probability = 1e-9;

// ============================================================================
// RENDERING
// ============================================================================
/// Decimal places for masses in the `Display` form.
pub const DISPLAY_PRECISION: usize = 2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging.
/// INFO by default, DEBUG when `verbose` is set.
#[cfg(feature = "cli")]
pub fn log(verbose: bool) -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let level = match verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    };
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}
