use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct PickWinner<'info> {
    // Anyone can resolve; the first caller pays for the winner record
    #[account(mut)]
    pub caller: Signer<'info>,

    /// CHECK: seeds pin the address; Proposal::load checks owner and discriminator
    #[account(
        seeds = [PROPOSAL, &proposal_id.to_le_bytes()],
        bump
    )]
    pub proposal: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = caller,
        space = ANCHOR_DISCRIMINATOR + Winner::INIT_SPACE,
        seeds = [WINNER],
        bump
    )]
    pub winner: Account<'info, Winner>,

    pub system_program: Program<'info, System>,
}

impl<'info> PickWinner<'info> {
    pub fn pick_winner(&mut self, proposal_id: u64, bumps: &PickWinnerBumps) -> Result<()> {
        let proposal = Proposal::load(&self.proposal)?;
        let now = Clock::get()?.unix_timestamp;

        require!(proposal.has_ended(now), VoteError::VotingStillActive);
        require!(proposal.number_of_votes > 0, VoteError::NoVoteCast);

        self.winner.bump = bumps.winner;

        let votes = proposal.number_of_votes;
        if self.winner.consider(proposal_id, votes, now) {
            msg!("Proposal {} leads with {} votes", proposal_id, votes);

            emit!(WinnerDeclared {
                winning_proposal_id: proposal_id,
                winning_votes: votes,
                timestamp: now,
            });
        } else {
            msg!(
                "Proposal {} ({} votes) does not beat proposal {} ({} votes)",
                proposal_id,
                votes,
                self.winner.winning_proposal_id,
                self.winner.winning_votes
            );
        }

        Ok(())
    }
}
