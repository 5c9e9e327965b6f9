// admin
pub mod init_access_controller;
pub use init_access_controller::*;

pub mod grant_role;
pub use grant_role::*;

pub mod revoke_role;
pub use revoke_role::*;

pub mod init_token_validator;
pub use init_token_validator::*;

pub mod add_token_to_whitelist;
pub use add_token_to_whitelist::*;

pub mod remove_token_from_whitelist;
pub use remove_token_from_whitelist::*;

pub mod init_fundlock;
pub use init_fundlock::*;

pub mod init_ledger;
pub use init_ledger::*;
