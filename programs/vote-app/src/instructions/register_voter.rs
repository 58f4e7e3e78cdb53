use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
pub struct RegisterVoter<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    // Keyed on the voter identity, so a second registration lands on the
    // same address and is rejected below
    #[account(
        init_if_needed,
        payer = voter,
        space = ANCHOR_DISCRIMINATOR + Voter::INIT_SPACE,
        seeds = [VOTER, voter.key().as_ref()],
        bump
    )]
    pub voter_account: Account<'info, Voter>,

    pub system_program: Program<'info, System>,
}

impl<'info> RegisterVoter<'info> {
    pub fn register_voter(&mut self, bumps: &RegisterVoterBumps) -> Result<()> {
        require!(
            !self.voter_account.is_registered(),
            VoteError::AlreadyRegistered
        );

        let now = Clock::get()?.unix_timestamp;

        self.voter_account.set_inner(Voter {
            voter_id: self.voter.key(),
            votes_cast: 0,
            registered_at: now,
            bump: bumps.voter_account,
        });

        emit!(VoterRegistered {
            voter: self.voter.key(),
            timestamp: now,
        });

        Ok(())
    }
}
