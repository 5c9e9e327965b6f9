use anchor_lang::prelude::*;

/// One entry of a create_contracts_and_positions batch. Remaining
/// accounts carry the (contract, position) PDA pair at the matching
/// position.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct PositionParam {
    pub contract_id: u64,
    pub client: Pubkey,
    pub size: i64,
}

/// One client's settlement movement in ledger precision. Amounts are
/// signed: negative debits the client, positive credits. Each side is
/// scaled by the ledger's multiplier for that token before it touches
/// the fundlock balance.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct FundMovementParam {
    pub client: Pubkey,
    pub underlying_amount: i64,
    pub strike_amount: i64,
}
