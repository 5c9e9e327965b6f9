pub mod admin;
pub use admin::*;

pub mod check_role;
pub use check_role::*;

pub mod renounce_role;
pub use renounce_role::*;

pub mod deposit_fundlock;
pub use deposit_fundlock::*;

pub mod withdraw_fundlock;
pub use withdraw_fundlock::*;

pub mod release_fundlock;
pub use release_fundlock::*;

pub mod balance_sheet_fundlock;
pub use balance_sheet_fundlock::*;

pub mod update_balances_fundlock;
pub use update_balances_fundlock::*;

pub mod update_fund_movements;
pub use update_fund_movements::*;

pub mod create_contracts_and_positions;
pub use create_contracts_and_positions::*;

pub mod deposit_kamino;
pub use deposit_kamino::*;

pub mod redeem_kamino;
pub use redeem_kamino::*;
