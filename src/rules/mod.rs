//! Game rules.
//!
//! - `chain`: the played chain and the Chain Engine (`apply_move`)
//! - `validator`: legality checks (pure)
//! - `deal`: splitting a shuffled set into hands
//! - `scoring`: pip totals and the block winner
//! - `controller`: the turn/round state machine
//! - `result`: how a finished round ended

pub mod chain;
pub mod validator;
pub mod deal;
pub mod scoring;
pub mod result;
pub mod controller;

pub use chain::{apply_move, Chain, End, OpenEnds, Orientation};
pub use validator::{has_legal_move, is_legal_placement, legal_placements, Placement};
pub use deal::deal;
pub use scoring::{final_scores, lowest_score, pip_sum};
pub use result::GameResult;
pub use controller::Step;
