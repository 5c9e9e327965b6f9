pub mod access_controller_state;
pub use access_controller_state::*;

pub mod token_validator_state;
pub use token_validator_state::*;

pub mod fundlock_state;
pub use fundlock_state::*;

pub mod ledger_state;
pub use ledger_state::*;
