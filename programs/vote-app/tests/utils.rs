// Test utilities for the vote app program

#![allow(dead_code)]

use anchor_lang::AccountDeserialize;
use litesvm::LiteSVM;
use litesvm_token::get_spl_account;
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    native_token::LAMPORTS_PER_SOL,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;

// Program ID matching declare_id!
pub const VOTE_APP_PROGRAM_ID: Pubkey = Pubkey::new_from_array(vote_app::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
use solana_system_interface::program::ID as system_program;

// PDA Seeds (must match constants.rs)
pub const SOL_VAULT: &[u8] = b"sol_vault";
pub const TREASURY_CONFIG: &[u8] = b"treasury_config";
pub const MINT_AUTHORITY: &[u8] = b"mint_authority";
pub const X_MINT: &[u8] = b"x_mint";
pub const VOTER: &[u8] = b"voter";
pub const WINNER: &[u8] = b"winner";
pub const PROPOSAL_COUNTER: &[u8] = b"proposal_counter";
pub const PROPOSAL: &[u8] = b"proposal";
pub const VOTE_RECORD: &[u8] = b"vote_record";

// Sale parameters used across tests
pub const SOL_PRICE: u64 = 1_000_000_000;
pub const TOKEN_PER_PURCHASE: u64 = 1_000_000_000;
pub const DECIMALS: u8 = 6;

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

// Setup LiteSVM with the vote app program
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../../../target/deploy/vote_app.so");
    svm.add_program(VOTE_APP_PROGRAM_ID, program_bytes);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Convert a program-side key for comparison with test keys
pub fn to_sdk_pubkey(key: &anchor_lang::prelude::Pubkey) -> Pubkey {
    Pubkey::new_from_array(key.to_bytes())
}

// Fetch and deserialize a program account, None if missing or closed
pub fn fetch_account<T: AccountDeserialize>(svm: &LiteSVM, address: &Pubkey) -> Option<T> {
    let account = svm.get_account(address)?;
    if account.data.is_empty() {
        return None;
    }
    T::try_deserialize(&mut account.data.as_slice()).ok()
}

pub fn lamports(svm: &LiteSVM, address: &Pubkey) -> u64 {
    svm.get_account(address).map(|a| a.lamports).unwrap_or(0)
}

pub fn token_balance(svm: &LiteSVM, token_account: &Pubkey) -> u64 {
    get_spl_account::<spl_token::state::Account>(svm, token_account)
        .map(|a| a.amount)
        .unwrap_or(0)
}

// Current unix timestamp of the SVM clock
pub fn now(svm: &LiteSVM) -> i64 {
    let clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp
}

// Advance the SVM clock by the specified number of seconds
pub fn advance_time(svm: &mut LiteSVM, seconds: u64) {
    let mut clock: solana_sdk::clock::Clock = svm.get_sysvar();
    clock.unix_timestamp += seconds as i64;
    svm.set_sysvar(&clock);

    let current_slot = clock.slot;
    svm.warp_to_slot(current_slot + (seconds * 2) + 5);
}

// Append an unused account so an otherwise identical transaction gets a new signature
pub fn add_unique_meta(mut ix: Instruction) -> Instruction {
    ix.accounts
        .push(AccountMeta::new_readonly(Pubkey::new_unique(), false));
    ix
}

// ======================== PDA DERIVATION ========================

pub fn derive_treasury_config_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREASURY_CONFIG], &VOTE_APP_PROGRAM_ID)
}

pub fn derive_sol_vault_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SOL_VAULT], &VOTE_APP_PROGRAM_ID)
}

pub fn derive_mint_authority_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[MINT_AUTHORITY], &VOTE_APP_PROGRAM_ID)
}

pub fn derive_x_mint_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[X_MINT], &VOTE_APP_PROGRAM_ID)
}

pub fn derive_proposal_counter_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[PROPOSAL_COUNTER], &VOTE_APP_PROGRAM_ID)
}

pub fn derive_winner_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[WINNER], &VOTE_APP_PROGRAM_ID)
}

pub fn derive_voter_pda(voter: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VOTER, voter.as_ref()], &VOTE_APP_PROGRAM_ID)
}

pub fn derive_proposal_pda(proposal_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[PROPOSAL, &proposal_id.to_le_bytes()],
        &VOTE_APP_PROGRAM_ID,
    )
}

pub fn derive_vote_record_pda(voter: &Pubkey, proposal_id: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[VOTE_RECORD, voter.as_ref(), &proposal_id.to_le_bytes()],
        &VOTE_APP_PROGRAM_ID,
    )
}

// Treasury token account: ATA of the mint authority PDA
pub fn treasury_token_account() -> Pubkey {
    let (mint_authority, _) = derive_mint_authority_pda();
    let (x_mint, _) = derive_x_mint_pda();
    get_associated_token_address(&mint_authority, &x_mint)
}

pub fn user_token_account(user: &Pubkey) -> Pubkey {
    let (x_mint, _) = derive_x_mint_pda();
    get_associated_token_address(user, &x_mint)
}

// ======================== INSTRUCTION BUILDERS ========================

pub fn build_initialize_treasury_ix(
    authority: &Pubkey,
    sol_price: u64,
    token_per_purchase: u64,
) -> Instruction {
    let (treasury_config, _) = derive_treasury_config_pda();
    let (x_mint, _) = derive_x_mint_pda();
    let (sol_vault, _) = derive_sol_vault_pda();
    let (mint_authority, _) = derive_mint_authority_pda();

    let mut data = anchor_discriminator("initialize_treasury").to_vec();
    data.extend_from_slice(&sol_price.to_le_bytes());
    data.extend_from_slice(&token_per_purchase.to_le_bytes());

    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(treasury_config, false),
            AccountMeta::new(x_mint, false),
            AccountMeta::new(treasury_token_account(), false),
            AccountMeta::new(sol_vault, false),
            AccountMeta::new_readonly(mint_authority, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_buy_tokens_ix(buyer: &Pubkey) -> Instruction {
    let (treasury_config, _) = derive_treasury_config_pda();
    let (sol_vault, _) = derive_sol_vault_pda();
    let (mint_authority, _) = derive_mint_authority_pda();
    let (x_mint, _) = derive_x_mint_pda();

    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*buyer, true),
            AccountMeta::new_readonly(treasury_config, false),
            AccountMeta::new(sol_vault, false),
            AccountMeta::new_readonly(mint_authority, false),
            AccountMeta::new(x_mint, false),
            AccountMeta::new(user_token_account(buyer), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("buy_tokens").to_vec(),
    }
}

pub fn build_withdraw_sol_ix(authority: &Pubkey, amount: u64) -> Instruction {
    let (treasury_config, _) = derive_treasury_config_pda();
    let (sol_vault, _) = derive_sol_vault_pda();

    let mut data = anchor_discriminator("withdraw_sol").to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(treasury_config, false),
            AccountMeta::new(sol_vault, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_register_voter_ix(voter: &Pubkey) -> Instruction {
    let (voter_account, _) = derive_voter_pda(voter);

    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*voter, true),
            AccountMeta::new(voter_account, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("register_voter").to_vec(),
    }
}

pub fn build_close_voter_ix(voter: &Pubkey, destination: &Pubkey) -> Instruction {
    let (voter_account, _) = derive_voter_pda(voter);

    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*voter, true),
            AccountMeta::new(voter_account, false),
            AccountMeta::new(*destination, false),
        ],
        data: anchor_discriminator("close_voter").to_vec(),
    }
}

pub fn build_initialize_proposal_counter_ix(authority: &Pubkey) -> Instruction {
    let (treasury_config, _) = derive_treasury_config_pda();
    let (proposal_counter, _) = derive_proposal_counter_pda();

    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new_readonly(treasury_config, false),
            AccountMeta::new(proposal_counter, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data: anchor_discriminator("initialize_proposal_counter").to_vec(),
    }
}

// proposal_id must be the id the program will assign (counter + 1)
pub fn build_register_proposal_ix(
    creator: &Pubkey,
    proposal_id: u64,
    proposal_info: &str,
    deadline: i64,
    stake_amount: u64,
) -> Instruction {
    let (treasury_config, _) = derive_treasury_config_pda();
    let (proposal_counter, _) = derive_proposal_counter_pda();
    let (proposal, _) = derive_proposal_pda(proposal_id);
    let (x_mint, _) = derive_x_mint_pda();

    let mut data = anchor_discriminator("register_proposal").to_vec();
    // Borsh serialization: len (4 bytes) + string bytes
    data.extend_from_slice(&(proposal_info.len() as u32).to_le_bytes());
    data.extend_from_slice(proposal_info.as_bytes());
    data.extend_from_slice(&deadline.to_le_bytes());
    data.extend_from_slice(&stake_amount.to_le_bytes());

    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*creator, true),
            AccountMeta::new_readonly(treasury_config, false),
            AccountMeta::new(proposal_counter, false),
            AccountMeta::new(proposal, false),
            AccountMeta::new_readonly(x_mint, false),
            AccountMeta::new(user_token_account(creator), false),
            AccountMeta::new(treasury_token_account(), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_proposal_to_vote_ix(voter: &Pubkey, proposal_id: u64, stake_amount: u64) -> Instruction {
    let (treasury_config, _) = derive_treasury_config_pda();
    let (voter_account, _) = derive_voter_pda(voter);
    let (proposal, _) = derive_proposal_pda(proposal_id);
    let (vote_record, _) = derive_vote_record_pda(voter, proposal_id);
    let (x_mint, _) = derive_x_mint_pda();

    let mut data = anchor_discriminator("proposal_to_vote").to_vec();
    data.extend_from_slice(&proposal_id.to_le_bytes());
    data.extend_from_slice(&stake_amount.to_le_bytes());

    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*voter, true),
            AccountMeta::new_readonly(treasury_config, false),
            AccountMeta::new(voter_account, false),
            AccountMeta::new(proposal, false),
            AccountMeta::new(vote_record, false),
            AccountMeta::new_readonly(x_mint, false),
            AccountMeta::new(user_token_account(voter), false),
            AccountMeta::new(treasury_token_account(), false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_pick_winner_ix(caller: &Pubkey, proposal_id: u64) -> Instruction {
    let (proposal, _) = derive_proposal_pda(proposal_id);
    let (winner, _) = derive_winner_pda();

    let mut data = anchor_discriminator("pick_winner").to_vec();
    data.extend_from_slice(&proposal_id.to_le_bytes());

    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*caller, true),
            AccountMeta::new_readonly(proposal, false),
            AccountMeta::new(winner, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

pub fn build_close_proposal_ix(
    authority: &Pubkey,
    proposal_id: u64,
    destination: &Pubkey,
) -> Instruction {
    let (proposal, _) = derive_proposal_pda(proposal_id);

    let mut data = anchor_discriminator("close_proposal").to_vec();
    data.extend_from_slice(&proposal_id.to_le_bytes());

    Instruction {
        program_id: VOTE_APP_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(proposal, false),
            AccountMeta::new(*destination, false),
        ],
        data,
    }
}

// ======================== TRANSACTION HELPERS ========================

/// Send a transaction and expect success
pub fn send_tx_expect_success(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );

    let result = svm.send_transaction(tx);
    assert!(
        result.is_ok(),
        "Transaction should succeed, got error: {:?}",
        result.err()
    );
}

/// Send a transaction and expect failure, returning the debug-formatted error
pub fn send_tx_expect_failure(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> String {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );

    let result = svm.send_transaction(tx);
    assert!(result.is_err(), "Transaction should have failed");
    format!("{:?}", result.err().unwrap())
}

// ======================== SETUP HELPERS ========================

/// Initialize the treasury and proposal counter with the default sale parameters.
/// Returns the treasury authority.
pub fn setup_treasury(svm: &mut LiteSVM) -> Keypair {
    let admin = create_funded_account(svm, 10 * LAMPORTS_PER_SOL);

    let ix = build_initialize_treasury_ix(&admin.pubkey(), SOL_PRICE, TOKEN_PER_PURCHASE);
    send_tx_expect_success(svm, ix, &admin, &[&admin]);

    let ix = build_initialize_proposal_counter_ix(&admin.pubkey());
    send_tx_expect_success(svm, ix, &admin, &[&admin]);

    admin
}

/// Fund a participant, buy one purchase unit of tokens and register as voter
pub fn setup_participant(svm: &mut LiteSVM) -> Keypair {
    let user = create_funded_account(svm, 10 * LAMPORTS_PER_SOL);

    let ix = build_buy_tokens_ix(&user.pubkey());
    send_tx_expect_success(svm, ix, &user, &[&user]);

    let ix = build_register_voter_ix(&user.pubkey());
    send_tx_expect_success(svm, ix, &user, &[&user]);

    user
}

/// Register a proposal with the given id, staking `stake_amount`, that closes in `duration` seconds
pub fn register_proposal(
    svm: &mut LiteSVM,
    creator: &Keypair,
    proposal_id: u64,
    stake_amount: u64,
    duration: i64,
) -> i64 {
    let deadline = now(svm) + duration;
    let ix = build_register_proposal_ix(
        &creator.pubkey(),
        proposal_id,
        &format!("Proposal number {}", proposal_id),
        deadline,
        stake_amount,
    );
    send_tx_expect_success(svm, ix, creator, &[creator]);
    deadline
}

pub fn cast_vote(svm: &mut LiteSVM, voter: &Keypair, proposal_id: u64, stake_amount: u64) {
    let ix = build_proposal_to_vote_ix(&voter.pubkey(), proposal_id, stake_amount);
    send_tx_expect_success(svm, ix, voter, &[voter]);
}
