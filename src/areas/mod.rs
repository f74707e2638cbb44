//! The places a run touches
//!
//! - `checkout`: the upstream working tree patches are applied to
//! - `patches`: the directory holding `.patch` files
//! - `session`: ties settings, output and the subprocess runner together

pub mod checkout;
pub mod patches;
pub mod session;
