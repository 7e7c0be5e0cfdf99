//! Financial instruments.
//!
//! - [`credit`]: Credit default swaps, their leg integrators and pricer

pub mod credit;
