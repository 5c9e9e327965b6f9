#![allow(dead_code)]

use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use fundlock_contracts::constants::*;
use fundlock_contracts::errors::ErrorCode;
use solana_program_test::*;
use solana_sdk::{
    clock::Clock,
    instruction::{AccountMeta, Instruction, InstructionError},
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction, system_program,
    transaction::{Transaction, TransactionError},
};

// Anchor's generated `entry` ties the accounts-slice lifetime to the
// `AccountInfo` lifetime, but `processor!` expects those lifetimes to be
// independent. This shim bridges them.
//
// SAFETY: `fundlock_contracts::entry` only borrows the account slice for the
// duration of this call, so widening the lifetime is sound here.
fn fundlock_entry_shim(
    program_id: &Pubkey,
    accounts: &[solana_sdk::account_info::AccountInfo],
    instruction_data: &[u8],
) -> solana_sdk::entrypoint::ProgramResult {
    let accounts_static: &[solana_sdk::account_info::AccountInfo] =
        unsafe { std::mem::transmute(accounts) };
    fundlock_contracts::entry(program_id, accounts_static, instruction_data)
}

pub const TRADE_LOCK: i64 = 30;
pub const RELEASE_LOCK: i64 = 60;

// Anchor's own error for a PDA that was never created (or was closed)
pub const ACCOUNT_NOT_INITIALIZED: u32 = 3012;

pub fn err_code(e: ErrorCode) -> u32 {
    6000 + e as u32
}

// --- PDA derivation ---

pub fn access_controller_pda(admin: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[ACCESS_CONTROLLER_SEED, admin.as_ref()],
        &fundlock_contracts::id(),
    )
    .0
}

pub fn role_pda(access_controller: &Pubkey, role_name: &str) -> Pubkey {
    Pubkey::find_program_address(
        &[ROLE_SEED, access_controller.as_ref(), role_name.as_bytes()],
        &fundlock_contracts::id(),
    )
    .0
}

pub fn member_pda(role: &Pubkey, member: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[MEMBER_SEED, role.as_ref(), member.as_ref()],
        &fundlock_contracts::id(),
    )
    .0
}

pub fn token_validator_pda(access_controller: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[TOKEN_VALIDATOR_SEED, access_controller.as_ref()],
        &fundlock_contracts::id(),
    )
    .0
}

pub fn whitelisted_token_pda(token_validator: &Pubkey, mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[WHITELISTED_TOKEN_SEED, token_validator.as_ref(), mint.as_ref()],
        &fundlock_contracts::id(),
    )
    .0
}

pub fn fundlock_pda(access_controller: &Pubkey, token_validator: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[FUNDLOCK_SEED, access_controller.as_ref(), token_validator.as_ref()],
        &fundlock_contracts::id(),
    )
    .0
}

pub fn vault_pda(fundlock: &Pubkey, mint: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[FUNDLOCK_TOKEN_VAULT_SEED, fundlock.as_ref(), mint.as_ref()],
        &fundlock_contracts::id(),
    )
    .0
}

pub fn client_balance_pda(vault: &Pubkey, client_ata: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[CLIENT_BALANCE_SEED, vault.as_ref(), client_ata.as_ref()],
        &fundlock_contracts::id(),
    )
    .0
}

pub fn withdrawals_pda(fundlock: &Pubkey, client_balance: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[WITHDRAWALS_SEED, fundlock.as_ref(), client_balance.as_ref()],
        &fundlock_contracts::id(),
    )
    .0
}

pub fn ledger_pda(
    access_controller: &Pubkey,
    token_validator: &Pubkey,
    underlying: &Pubkey,
    strike: &Pubkey,
) -> Pubkey {
    Pubkey::find_program_address(
        &[
            LEDGER_SEED,
            access_controller.as_ref(),
            token_validator.as_ref(),
            underlying.as_ref(),
            strike.as_ref(),
        ],
        &fundlock_contracts::id(),
    )
    .0
}

pub fn contract_pda(ledger: &Pubkey, contract_id: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[CONTRACT_SEED, ledger.as_ref(), &contract_id.to_le_bytes()],
        &fundlock_contracts::id(),
    )
    .0
}

pub fn position_pda(contract: &Pubkey, client: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[POSITION_SEED, contract.as_ref(), client.as_ref()],
        &fundlock_contracts::id(),
    )
    .0
}

// --- Environment ---

pub struct TestEnv {
    pub ctx: ProgramTestContext,
    pub admin: Keypair,
    pub access_controller: Pubkey,
    pub token_validator: Pubkey,
    pub fundlock: Pubkey,
}

/// Boots the program and initializes access controller, token
/// validator and fundlock under the test payer as admin.
pub async fn setup_fundlock_env() -> TestEnv {
    let pt = ProgramTest::new(
        "fundlock_contracts",
        fundlock_contracts::id(),
        processor!(fundlock_entry_shim),
    );
    let mut ctx = pt.start_with_context().await;
    let admin = ctx.payer.insecure_clone();

    let access_controller = access_controller_pda(&admin.pubkey());
    let token_validator = token_validator_pda(&access_controller);
    let fundlock = fundlock_pda(&access_controller, &token_validator);

    let ixs = vec![
        ix_init_access_controller(&admin.pubkey()),
        ix_init_token_validator(&admin.pubkey()),
        ix_init_fundlock(&admin.pubkey(), TRADE_LOCK, RELEASE_LOCK),
    ];
    send_tx(&mut ctx, &admin, &[], &ixs).await.unwrap();

    TestEnv {
        ctx,
        admin,
        access_controller,
        token_validator,
        fundlock,
    }
}

pub async fn send_tx(
    ctx: &mut ProgramTestContext,
    payer: &Keypair,
    extra_signers: &[&Keypair],
    ixs: &[Instruction],
) -> Result<(), BanksClientError> {
    let blockhash = ctx.get_new_latest_blockhash().await.unwrap();
    let mut signers: Vec<&Keypair> = vec![payer];
    signers.extend_from_slice(extra_signers);
    let tx = Transaction::new_signed_with_payer(ixs, Some(&payer.pubkey()), &signers, blockhash);
    ctx.banks_client.process_transaction(tx).await
}

pub fn custom_error_code(err: BanksClientError) -> u32 {
    match err {
        BanksClientError::TransactionError(TransactionError::InstructionError(
            _,
            InstructionError::Custom(code),
        )) => code,
        other => panic!("expected a custom instruction error, got {:?}", other),
    }
}

pub async fn advance_clock(ctx: &mut ProgramTestContext, seconds: i64) {
    let mut clock: Clock = ctx.banks_client.get_sysvar().await.unwrap();
    clock.unix_timestamp += seconds;
    ctx.set_sysvar(&clock);
}

// --- Account fetching ---

pub async fn fetch_account<T: AccountDeserialize>(
    ctx: &mut ProgramTestContext,
    address: &Pubkey,
) -> T {
    let account = ctx
        .banks_client
        .get_account(*address)
        .await
        .unwrap()
        .expect("account does not exist");
    T::try_deserialize(&mut account.data.as_slice()).unwrap()
}

pub async fn account_exists(ctx: &mut ProgramTestContext, address: &Pubkey) -> bool {
    ctx.banks_client.get_account(*address).await.unwrap().is_some()
}

pub async fn token_balance(ctx: &mut ProgramTestContext, address: &Pubkey) -> u64 {
    let account = ctx
        .banks_client
        .get_account(*address)
        .await
        .unwrap()
        .expect("token account does not exist");
    spl_token::state::Account::unpack(&account.data).unwrap().amount
}

// --- SPL helpers ---

pub async fn create_mint(
    ctx: &mut ProgramTestContext,
    payer: &Keypair,
    mint: &Keypair,
    decimals: u8,
) {
    let rent = ctx.banks_client.get_rent().await.unwrap();
    let lamports = rent.minimum_balance(spl_token::state::Mint::LEN);
    let ixs = vec![
        system_instruction::create_account(
            &payer.pubkey(),
            &mint.pubkey(),
            lamports,
            spl_token::state::Mint::LEN as u64,
            &spl_token::id(),
        ),
        spl_token::instruction::initialize_mint(
            &spl_token::id(),
            &mint.pubkey(),
            &payer.pubkey(),
            None,
            decimals,
        )
        .unwrap(),
    ];
    send_tx(ctx, payer, &[mint], &ixs).await.unwrap();
}

pub async fn create_ata(
    ctx: &mut ProgramTestContext,
    payer: &Keypair,
    owner: &Pubkey,
    mint: &Pubkey,
) -> Pubkey {
    let ata = spl_associated_token_account::get_associated_token_address(owner, mint);
    let ix = spl_associated_token_account::instruction::create_associated_token_account(
        &payer.pubkey(),
        owner,
        mint,
        &spl_token::id(),
    );
    send_tx(ctx, payer, &[], &[ix]).await.unwrap();
    ata
}

pub async fn mint_to(
    ctx: &mut ProgramTestContext,
    payer: &Keypair,
    mint: &Pubkey,
    destination: &Pubkey,
    amount: u64,
) {
    let ix = spl_token::instruction::mint_to(
        &spl_token::id(),
        mint,
        destination,
        &payer.pubkey(),
        &[],
        amount,
    )
    .unwrap();
    send_tx(ctx, payer, &[], &[ix]).await.unwrap();
}

/// New client keypair with lamports and a funded token account.
pub async fn create_funded_client(
    env: &mut TestEnv,
    mint: &Pubkey,
    amount: u64,
) -> (Keypair, Pubkey) {
    let client = Keypair::new();
    let payer = env.admin.insecure_clone();
    let fund_ix = system_instruction::transfer(
        &payer.pubkey(),
        &client.pubkey(),
        10_000_000_000,
    );
    send_tx(&mut env.ctx, &payer, &[], &[fund_ix]).await.unwrap();
    let ata = create_ata(&mut env.ctx, &payer, &client.pubkey(), mint).await;
    if amount > 0 {
        mint_to(&mut env.ctx, &payer, mint, &ata, amount).await;
    }
    (client, ata)
}

// --- Instruction builders ---

pub fn ix_init_access_controller(admin: &Pubkey) -> Instruction {
    let access_controller = access_controller_pda(admin);
    let role = role_pda(&access_controller, Roles::Admin.as_str());
    let member = member_pda(&role, admin);
    Instruction {
        program_id: fundlock_contracts::id(),
        accounts: fundlock_contracts::accounts::InitAccessController {
            admin: *admin,
            access_controller,
            role,
            member,
            system_program: system_program::id(),
        }
        .to_account_metas(None),
        data: fundlock_contracts::instruction::InitAccessController {}.data(),
    }
}

pub fn ix_grant_role(
    admin: &Pubkey,
    access_controller: &Pubkey,
    role_name: &str,
    new_member: &Pubkey,
) -> Instruction {
    let role = role_pda(access_controller, role_name);
    let member = member_pda(&role, new_member);
    Instruction {
        program_id: fundlock_contracts::id(),
        accounts: fundlock_contracts::accounts::GrantRole {
            admin: *admin,
            access_controller: *access_controller,
            role,
            member,
            system_program: system_program::id(),
        }
        .to_account_metas(None),
        data: fundlock_contracts::instruction::GrantRole {
            role_granted: role_name.to_string(),
            new_member: *new_member,
        }
        .data(),
    }
}

pub fn ix_revoke_role(
    admin: &Pubkey,
    access_controller: &Pubkey,
    role_name: &str,
    member_pk: &Pubkey,
) -> Instruction {
    let role = role_pda(access_controller, role_name);
    let member = member_pda(&role, member_pk);
    Instruction {
        program_id: fundlock_contracts::id(),
        accounts: fundlock_contracts::accounts::RevokeRole {
            admin: *admin,
            access_controller: *access_controller,
            role,
            member,
            system_program: system_program::id(),
        }
        .to_account_metas(None),
        data: fundlock_contracts::instruction::RevokeRole {
            role_revoked: role_name.to_string(),
            member_pk: *member_pk,
        }
        .data(),
    }
}

pub fn ix_renounce_role(
    caller: &Pubkey,
    access_controller: &Pubkey,
    role_name: &str,
) -> Instruction {
    let role = role_pda(access_controller, role_name);
    let member = member_pda(&role, caller);
    Instruction {
        program_id: fundlock_contracts::id(),
        accounts: fundlock_contracts::accounts::RenounceRole {
            caller: *caller,
            access_controller: *access_controller,
            role,
            member,
            system_program: system_program::id(),
        }
        .to_account_metas(None),
        data: fundlock_contracts::instruction::RenounceRole {
            role_renounced: role_name.to_string(),
            member_pk: *caller,
        }
        .data(),
    }
}

pub fn ix_check_role(
    caller: &Pubkey,
    access_controller: &Pubkey,
    role_name: &str,
    member_pk: &Pubkey,
) -> Instruction {
    let role = role_pda(access_controller, role_name);
    let member = member_pda(&role, member_pk);
    Instruction {
        program_id: fundlock_contracts::id(),
        accounts: fundlock_contracts::accounts::CheckRole {
            caller: *caller,
            access_controller: *access_controller,
            role,
            member,
        }
        .to_account_metas(None),
        data: fundlock_contracts::instruction::CheckRole {
            role_checked: role_name.to_string(),
            member_pk: *member_pk,
        }
        .data(),
    }
}

pub fn ix_init_token_validator(admin: &Pubkey) -> Instruction {
    let access_controller = access_controller_pda(admin);
    let role = role_pda(&access_controller, Roles::Admin.as_str());
    let member = member_pda(&role, admin);
    Instruction {
        program_id: fundlock_contracts::id(),
        accounts: fundlock_contracts::accounts::InitTokenValidator {
            admin: *admin,
            access_controller,
            role,
            member,
            token_validator: token_validator_pda(&access_controller),
            system_program: system_program::id(),
        }
        .to_account_metas(None),
        data: fundlock_contracts::instruction::InitTokenValidator {}.data(),
    }
}

pub fn ix_add_token_to_whitelist(admin: &Pubkey, mint: &Pubkey, precision: u8) -> Instruction {
    let access_controller = access_controller_pda(admin);
    let role = role_pda(&access_controller, Roles::Admin.as_str());
    let member = member_pda(&role, admin);
    let token_validator = token_validator_pda(&access_controller);
    Instruction {
        program_id: fundlock_contracts::id(),
        accounts: fundlock_contracts::accounts::AddTokenToWhitelist {
            admin: *admin,
            access_controller,
            role,
            member,
            token_validator,
            new_token_to_whitelist: *mint,
            whitelisted_token: whitelisted_token_pda(&token_validator, mint),
            system_program: system_program::id(),
        }
        .to_account_metas(None),
        data: fundlock_contracts::instruction::AddTokenToWhitelist {
            token_precision: precision,
        }
        .data(),
    }
}

pub fn ix_remove_token_from_whitelist(admin: &Pubkey, mint: &Pubkey) -> Instruction {
    let access_controller = access_controller_pda(admin);
    let role = role_pda(&access_controller, Roles::Admin.as_str());
    let member = member_pda(&role, admin);
    let token_validator = token_validator_pda(&access_controller);
    Instruction {
        program_id: fundlock_contracts::id(),
        accounts: fundlock_contracts::accounts::RemoveTokenFromWhitelist {
            admin: *admin,
            access_controller,
            role,
            member,
            token_validator,
            token_to_remove: *mint,
            whitelisted_token: whitelisted_token_pda(&token_validator, mint),
            system_program: system_program::id(),
        }
        .to_account_metas(None),
        data: fundlock_contracts::instruction::RemoveTokenFromWhitelist {}.data(),
    }
}

pub fn ix_init_fundlock(admin: &Pubkey, trade_lock: i64, release_lock: i64) -> Instruction {
    let access_controller = access_controller_pda(admin);
    let role = role_pda(&access_controller, Roles::Admin.as_str());
    let member = member_pda(&role, admin);
    let token_validator = token_validator_pda(&access_controller);
    Instruction {
        program_id: fundlock_contracts::id(),
        accounts: fundlock_contracts::accounts::InitFundlock {
            admin: *admin,
            access_controller,
            role,
            member,
            token_validator,
            fundlock: fundlock_pda(&access_controller, &token_validator),
            system_program: system_program::id(),
        }
        .to_account_metas(None),
        data: fundlock_contracts::instruction::InitFundlock {
            trade_lock,
            release_lock,
        }
        .data(),
    }
}

/// Fundlock client account set shared by deposit, withdraw and release.
pub struct ClientAccounts {
    pub vault: Pubkey,
    pub client_balance: Pubkey,
    pub withdrawals: Pubkey,
}

pub fn client_accounts(env: &TestEnv, mint: &Pubkey, client_ata: &Pubkey) -> ClientAccounts {
    let vault = vault_pda(&env.fundlock, mint);
    let client_balance = client_balance_pda(&vault, client_ata);
    let withdrawals = withdrawals_pda(&env.fundlock, &client_balance);
    ClientAccounts {
        vault,
        client_balance,
        withdrawals,
    }
}

pub fn ix_deposit_fundlock(
    env: &TestEnv,
    client: &Pubkey,
    mint: &Pubkey,
    client_ata: &Pubkey,
    amount: u64,
) -> Instruction {
    let accounts = client_accounts(env, mint, client_ata);
    Instruction {
        program_id: fundlock_contracts::id(),
        accounts: fundlock_contracts::accounts::DepositFundlock {
            client: *client,
            access_controller: env.access_controller,
            token_validator: env.token_validator,
            fundlock: env.fundlock,
            token: *mint,
            whitelisted_token: whitelisted_token_pda(&env.token_validator, mint),
            fundlock_token_vault: accounts.vault,
            client_ata: *client_ata,
            client_balance: accounts.client_balance,
            withdrawals: accounts.withdrawals,
            system_program: system_program::id(),
            token_program: spl_token::id(),
        }
        .to_account_metas(None),
        data: fundlock_contracts::instruction::DepositFundlock { amount }.data(),
    }
}

pub fn ix_withdraw_fundlock(
    env: &TestEnv,
    client: &Pubkey,
    mint: &Pubkey,
    client_ata: &Pubkey,
    amount: u64,
) -> Instruction {
    let accounts = client_accounts(env, mint, client_ata);
    Instruction {
        program_id: fundlock_contracts::id(),
        accounts: fundlock_contracts::accounts::WithdrawFundlock {
            client: *client,
            access_controller: env.access_controller,
            token_validator: env.token_validator,
            fundlock: env.fundlock,
            token: *mint,
            whitelisted_token: whitelisted_token_pda(&env.token_validator, mint),
            fundlock_token_vault: accounts.vault,
            client_ata: *client_ata,
            client_balance: accounts.client_balance,
            withdrawals: accounts.withdrawals,
        }
        .to_account_metas(None),
        data: fundlock_contracts::instruction::WithdrawFundlock { amount }.data(),
    }
}

pub fn ix_release_fundlock(
    env: &TestEnv,
    client: &Pubkey,
    mint: &Pubkey,
    client_ata: &Pubkey,
    index: u64,
) -> Instruction {
    let accounts = client_accounts(env, mint, client_ata);
    Instruction {
        program_id: fundlock_contracts::id(),
        accounts: fundlock_contracts::accounts::ReleaseFundlock {
            client: *client,
            access_controller: env.access_controller,
            token_validator: env.token_validator,
            fundlock: env.fundlock,
            token: *mint,
            whitelisted_token: whitelisted_token_pda(&env.token_validator, mint),
            fundlock_token_vault: accounts.vault,
            client_ata: *client_ata,
            client_balance: accounts.client_balance,
            withdrawals: accounts.withdrawals,
            token_program: spl_token::id(),
        }
        .to_account_metas(None),
        data: fundlock_contracts::instruction::ReleaseFundlock { index }.data(),
    }
}

pub fn ix_balance_sheet_fundlock(
    env: &TestEnv,
    caller: &Pubkey,
    mint: &Pubkey,
    client_ata: &Pubkey,
) -> Instruction {
    let accounts = client_accounts(env, mint, client_ata);
    Instruction {
        program_id: fundlock_contracts::id(),
        accounts: fundlock_contracts::accounts::BalanceSheetFundlock {
            caller: *caller,
            access_controller: env.access_controller,
            token_validator: env.token_validator,
            fundlock: env.fundlock,
            token: *mint,
            whitelisted_token: whitelisted_token_pda(&env.token_validator, mint),
            fundlock_token_vault: accounts.vault,
            client_ata: *client_ata,
            client_balance: accounts.client_balance,
            withdrawals: accounts.withdrawals,
        }
        .to_account_metas(None),
        data: fundlock_contracts::instruction::BalanceSheetFundlock {}.data(),
    }
}

/// One (client_balance, withdrawals) pair per batch entry, writable.
pub fn balance_pair_metas(pairs: &[(Pubkey, Pubkey)]) -> Vec<AccountMeta> {
    pairs
        .iter()
        .flat_map(|(balance, withdrawals)| {
            [
                AccountMeta::new(*balance, false),
                AccountMeta::new(*withdrawals, false),
            ]
        })
        .collect()
}

pub fn ix_update_balances_fundlock(
    env: &TestEnv,
    caller: &Pubkey,
    amounts: Vec<i64>,
    tokens: Vec<Pubkey>,
    clients_ata: Vec<Pubkey>,
    backend_id: u64,
    pairs: &[(Pubkey, Pubkey)],
) -> Instruction {
    let role = role_pda(&env.access_controller, Roles::Admin.as_str());
    let member = member_pda(&role, caller);
    let mut accounts = fundlock_contracts::accounts::UpdateBalancesFundlock {
        caller: *caller,
        access_controller: env.access_controller,
        role,
        member,
        token_validator: env.token_validator,
        fundlock: env.fundlock,
    }
    .to_account_metas(None);
    accounts.extend(balance_pair_metas(pairs));
    Instruction {
        program_id: fundlock_contracts::id(),
        accounts,
        data: fundlock_contracts::instruction::UpdateBalancesFundlock {
            amounts,
            tokens,
            clients_ata,
            backend_id,
        }
        .data(),
    }
}

pub fn ix_init_ledger(env: &TestEnv, admin: &Pubkey, underlying: &Pubkey, strike: &Pubkey) -> Instruction {
    let role = role_pda(&env.access_controller, Roles::Admin.as_str());
    let member = member_pda(&role, admin);
    Instruction {
        program_id: fundlock_contracts::id(),
        accounts: fundlock_contracts::accounts::InitLedger {
            admin: *admin,
            access_controller: env.access_controller,
            role,
            member,
            token_validator: env.token_validator,
            fundlock: env.fundlock,
            underlying_token: *underlying,
            whitelisted_underlying_token: whitelisted_token_pda(&env.token_validator, underlying),
            strike_token: *strike,
            whitelisted_strike_token: whitelisted_token_pda(&env.token_validator, strike),
            ledger: ledger_pda(&env.access_controller, &env.token_validator, underlying, strike),
            system_program: system_program::id(),
        }
        .to_account_metas(None),
        data: fundlock_contracts::instruction::InitLedger {}.data(),
    }
}

pub fn ix_update_fund_movements(
    env: &TestEnv,
    caller: &Pubkey,
    underlying: &Pubkey,
    strike: &Pubkey,
    fund_movements: Vec<fundlock_contracts::types::FundMovementParam>,
    backend_id: u64,
    pairs: &[(Pubkey, Pubkey)],
) -> Instruction {
    let role = role_pda(&env.access_controller, Roles::UtilityAccount.as_str());
    let member = member_pda(&role, caller);
    let mut accounts = fundlock_contracts::accounts::UpdateFundMovements {
        caller: *caller,
        access_controller: env.access_controller,
        role,
        member,
        token_validator: env.token_validator,
        fundlock: env.fundlock,
        underlying_token: *underlying,
        whitelisted_underlying_token: whitelisted_token_pda(&env.token_validator, underlying),
        strike_token: *strike,
        whitelisted_strike_token: whitelisted_token_pda(&env.token_validator, strike),
        ledger: ledger_pda(&env.access_controller, &env.token_validator, underlying, strike),
    }
    .to_account_metas(None);
    accounts.extend(balance_pair_metas(pairs));
    Instruction {
        program_id: fundlock_contracts::id(),
        accounts,
        data: fundlock_contracts::instruction::UpdateFundMovements {
            fund_movements,
            backend_id,
        }
        .data(),
    }
}

pub fn ix_create_contracts_and_positions(
    env: &TestEnv,
    caller: &Pubkey,
    ledger: &Pubkey,
    positions: Vec<fundlock_contracts::types::PositionParam>,
    pda_pairs: &[(Pubkey, Pubkey)],
) -> Instruction {
    let role = role_pda(&env.access_controller, Roles::UtilityAccount.as_str());
    let member = member_pda(&role, caller);
    let mut accounts = fundlock_contracts::accounts::CreateContractsAndPositions {
        caller: *caller,
        access_controller: env.access_controller,
        role,
        member,
        token_validator: env.token_validator,
        fundlock: env.fundlock,
        ledger: *ledger,
        system_program: system_program::id(),
    }
    .to_account_metas(None);
    accounts.extend(balance_pair_metas(pda_pairs));
    Instruction {
        program_id: fundlock_contracts::id(),
        accounts,
        data: fundlock_contracts::instruction::CreateContractsAndPositions { positions }.data(),
    }
}
