// PDA seed prefixes
pub const ACCESS_CONTROLLER_SEED: &[u8] = b"access_controller";
pub const ROLE_SEED: &[u8] = b"role";
pub const MEMBER_SEED: &[u8] = b"member";
pub const TOKEN_VALIDATOR_SEED: &[u8] = b"token_validator";
pub const WHITELISTED_TOKEN_SEED: &[u8] = b"whitelisted_token";
pub const FUNDLOCK_SEED: &[u8] = b"fundlock";
pub const FUNDLOCK_TOKEN_VAULT_SEED: &[u8] = b"fundlock_token_vault";
pub const FUNDLOCK_COLLATERAL_VAULT_SEED: &[u8] = b"fundlock_collateral_vault";
pub const CLIENT_BALANCE_SEED: &[u8] = b"client_balance";
pub const WITHDRAWALS_SEED: &[u8] = b"withdrawals";
pub const LEDGER_SEED: &[u8] = b"ledger";
pub const CONTRACT_SEED: &[u8] = b"contract";
pub const POSITION_SEED: &[u8] = b"position";

// A client can have at most this many withdrawals queued per token
pub const ALLOWED_WITHDRAWAL_LIMIT: usize = 5;

#[derive(Debug, PartialEq, Eq)]
pub enum Roles {
    Admin,
    UtilityAccount,
    Liquidator,
}

impl Roles {
    pub fn as_str(&self) -> &'static str {
        match self {
            Roles::Admin => "DEFAULT_ADMIN_ROLE",
            Roles::UtilityAccount => "UTILITY_ACCOUNT_ROLE",
            Roles::Liquidator => "LIQUIDATOR_ROLE",
        }
    }

    pub fn is_valid_role(role: &str) -> bool {
        matches!(
            role,
            "DEFAULT_ADMIN_ROLE" | "UTILITY_ACCOUNT_ROLE" | "LIQUIDATOR_ROLE"
        )
    }
}
