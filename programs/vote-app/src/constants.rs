use anchor_lang::prelude::*;

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// PDA seeds
#[constant]
pub const SOL_VAULT: &[u8] = b"sol_vault";
#[constant]
pub const TREASURY_CONFIG: &[u8] = b"treasury_config";
#[constant]
pub const MINT_AUTHORITY: &[u8] = b"mint_authority";
#[constant]
pub const X_MINT: &[u8] = b"x_mint";
#[constant]
pub const VOTER: &[u8] = b"voter";
#[constant]
pub const WINNER: &[u8] = b"winner";
#[constant]
pub const PROPOSAL_COUNTER: &[u8] = b"proposal_counter";
#[constant]
pub const PROPOSAL: &[u8] = b"proposal";
#[constant]
pub const VOTE_RECORD: &[u8] = b"vote_record";

// Decimals of the utility token minted by the treasury
pub const TOKEN_DECIMALS: u8 = 6;

// Upper bound on proposal description length, in bytes
pub const MAX_PROPOSAL_INFO_LEN: usize = 200;
