use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, state::*};

#[derive(Accounts)]
pub struct InitializeProposalCounter<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    // Only the treasury authority may open proposal registration
    #[account(
        seeds = [TREASURY_CONFIG],
        bump = treasury_config.bump,
        has_one = authority @ VoteError::Unauthorized
    )]
    pub treasury_config: Account<'info, TreasuryConfig>,

    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + ProposalCounter::INIT_SPACE,
        seeds = [PROPOSAL_COUNTER],
        bump
    )]
    pub proposal_counter: Account<'info, ProposalCounter>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeProposalCounter<'info> {
    pub fn initialize_proposal_counter(
        &mut self,
        bumps: &InitializeProposalCounterBumps,
    ) -> Result<()> {
        require!(
            !self.proposal_counter.is_initialized(),
            VoteError::ProposalCounterAlreadyInitialized
        );

        self.proposal_counter.set_inner(ProposalCounter {
            authority: self.authority.key(),
            count: 0,
            bump: bumps.proposal_counter,
        });

        Ok(())
    }
}
