//libraries
use anchor_lang::prelude::*;

//local imports
use crate::constants::*;
use crate::errors::ErrorCode;
use crate::states::{AccessController, Contract, Fundlock, Ledger, Member, Position, Role, TokenValidator};
use crate::types::PositionParam;
use crate::utils::{create_pda_account, read_pda_account, write_pda_account};

// Remaining accounts carry one (contract, position) PDA pair per batch
// entry, in entry order. Missing accounts are created on the fly,
// existing positions grow by the entry size.
pub fn handle<'info>(
    ctx: Context<'_, '_, '_, 'info, CreateContractsAndPositions<'info>>,
    positions: Vec<PositionParam>,
) -> Result<()> {
    require!(!positions.is_empty(), ErrorCode::InvalidRemainingAccounts);
    require!(
        ctx.remaining_accounts.len() == positions.len() * 2,
        ErrorCode::InvalidRemainingAccounts
    );

    let ledger_key = ctx.accounts.ledger.key();
    let caller_info = ctx.accounts.caller.to_account_info();
    let system_program_info = ctx.accounts.system_program.to_account_info();

    for (i, entry) in positions.iter().enumerate() {
        let contract_info = &ctx.remaining_accounts[i * 2];
        let position_info = &ctx.remaining_accounts[i * 2 + 1];

        let contract_id_bytes = entry.contract_id.to_le_bytes();
        let (contract_pda, contract_bump) = Pubkey::find_program_address(
            &[CONTRACT_SEED, ledger_key.as_ref(), contract_id_bytes.as_ref()],
            &crate::ID,
        );
        require!(
            contract_pda == contract_info.key(),
            ErrorCode::InvalidRemainingAccounts
        );

        if contract_info.data_is_empty() {
            create_pda_account(
                &caller_info,
                contract_info,
                &system_program_info,
                8 + Contract::INIT_SPACE,
                &[
                    CONTRACT_SEED,
                    ledger_key.as_ref(),
                    contract_id_bytes.as_ref(),
                    &[contract_bump],
                ],
            )?;
            let contract = Contract {
                contract_id: entry.contract_id,
                bump: contract_bump,
            };
            write_pda_account(&contract, contract_info)?;
            msg!("Contract {} created", entry.contract_id);
        } else {
            let contract: Contract = read_pda_account(contract_info)?;
            require!(
                contract.contract_id == entry.contract_id,
                ErrorCode::InvalidRemainingAccounts
            );
        }

        let (position_pda, position_bump) = Pubkey::find_program_address(
            &[POSITION_SEED, contract_pda.as_ref(), entry.client.as_ref()],
            &crate::ID,
        );
        require!(
            position_pda == position_info.key(),
            ErrorCode::InvalidRemainingAccounts
        );

        if position_info.data_is_empty() {
            create_pda_account(
                &caller_info,
                position_info,
                &system_program_info,
                8 + Position::INIT_SPACE,
                &[
                    POSITION_SEED,
                    contract_pda.as_ref(),
                    entry.client.as_ref(),
                    &[position_bump],
                ],
            )?;
            let position = Position {
                contract_id: entry.contract_id,
                client: entry.client,
                size: entry.size,
                bump: position_bump,
            };
            write_pda_account(&position, position_info)?;
            msg!(
                "Position opened for {} on contract {}, size {}",
                entry.client,
                entry.contract_id,
                entry.size
            );
        } else {
            let mut position: Position = read_pda_account(position_info)?;
            require!(
                position.client == entry.client,
                ErrorCode::InvalidRemainingAccounts
            );
            position.size = position
                .size
                .checked_add(entry.size)
                .ok_or(ErrorCode::Overflow)?;
            write_pda_account(&position, position_info)?;
            msg!(
                "Position for {} on contract {} adjusted to {}",
                entry.client,
                entry.contract_id,
                position.size
            );
        }
    }

    Ok(())
}

#[derive(Accounts)]
pub struct CreateContractsAndPositions<'info> {
    #[account(mut)]
    pub caller: Signer<'info>,

    #[account(
        seeds = [ACCESS_CONTROLLER_SEED, access_controller.admin.as_ref()],
        bump = access_controller.bump,
    )]
    pub access_controller: Box<Account<'info, AccessController>>,
    #[account(
        seeds = [ROLE_SEED, access_controller.key().as_ref(), Roles::UtilityAccount.as_str().as_bytes()],
        bump = role.bump,
    )]
    pub role: Box<Account<'info, Role>>,
    #[account(
        seeds = [MEMBER_SEED, role.key().as_ref(), caller.key().as_ref()],
        bump = member.bump,
    )]
    pub member: Box<Account<'info, Member>>,
    #[account(
        seeds = [TOKEN_VALIDATOR_SEED, access_controller.key().as_ref()],
        bump = token_validator.bump,
    )]
    pub token_validator: Box<Account<'info, TokenValidator>>,
    #[account(
        seeds = [FUNDLOCK_SEED, access_controller.key().as_ref(), token_validator.key().as_ref()],
        bump = fundlock.bump,
    )]
    pub fundlock: Box<Account<'info, Fundlock>>,
    #[account(
        constraint = ledger.fundlock == fundlock.key() @ ErrorCode::InvalidRemainingAccounts
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    // Programs and Sysvars
    pub system_program: Program<'info, System>,
}
