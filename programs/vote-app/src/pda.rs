// Address derivation for every record the program owns.
//
// Each account lives at a PDA computed from a fixed seed tag plus, for
// per-entity records, the identity or id it belongs to. Clients use these
// helpers to locate accounts; the program checks the same seeds through
// `seeds`/`bump` constraints.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::VoteError};

// Returns the PDA and bump for `seeds` under this program id.
// Fails only if no bump in 255..=0 yields an off-curve address.
pub fn derive_address(seeds: &[&[u8]]) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(seeds, &crate::ID)
        .ok_or_else(|| error!(VoteError::AddressDerivationFailed))
}

pub fn treasury_config_address() -> Result<(Pubkey, u8)> {
    derive_address(&[TREASURY_CONFIG])
}

pub fn sol_vault_address() -> Result<(Pubkey, u8)> {
    derive_address(&[SOL_VAULT])
}

pub fn mint_authority_address() -> Result<(Pubkey, u8)> {
    derive_address(&[MINT_AUTHORITY])
}

pub fn x_mint_address() -> Result<(Pubkey, u8)> {
    derive_address(&[X_MINT])
}

pub fn proposal_counter_address() -> Result<(Pubkey, u8)> {
    derive_address(&[PROPOSAL_COUNTER])
}

pub fn winner_address() -> Result<(Pubkey, u8)> {
    derive_address(&[WINNER])
}

pub fn voter_address(identity: &Pubkey) -> Result<(Pubkey, u8)> {
    derive_address(&[VOTER, identity.as_ref()])
}

pub fn proposal_address(proposal_id: u64) -> Result<(Pubkey, u8)> {
    derive_address(&[PROPOSAL, &proposal_id.to_le_bytes()])
}

pub fn vote_record_address(voter: &Pubkey, proposal_id: u64) -> Result<(Pubkey, u8)> {
    derive_address(&[VOTE_RECORD, voter.as_ref(), &proposal_id.to_le_bytes()])
}
