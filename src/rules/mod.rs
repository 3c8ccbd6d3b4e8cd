//! Game rules: fixed policy, precondition checks, and action outcomes.
//!
//! - `policy`: player bounds, token limits, card ranges
//! - `validator`: side-effect-free checks run before any mutation
//! - `result`: the `ActionResult` every command returns

pub mod policy;
pub mod result;
pub mod validator;

pub use result::{ActionResult, Outcome};
pub use validator::GameValidator;
