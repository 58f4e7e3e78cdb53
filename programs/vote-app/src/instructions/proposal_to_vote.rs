use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{transfer, Mint, Token, TokenAccount, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
#[instruction(proposal_id: u64)]
pub struct ProposalToVote<'info> {
    #[account(mut)]
    pub voter: Signer<'info>,

    #[account(
        seeds = [TREASURY_CONFIG],
        bump = treasury_config.bump
    )]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    // Only registered voters can vote
    #[account(
        mut,
        seeds = [VOTER, voter.key().as_ref()],
        bump = voter_account.bump,
        constraint = voter_account.voter_id == voter.key() @ VoteError::Unauthorized
    )]
    pub voter_account: Box<Account<'info, Voter>>,

    /// CHECK: seeds pin the address; Proposal::load checks owner and discriminator
    #[account(
        mut,
        seeds = [PROPOSAL, &proposal_id.to_le_bytes()],
        bump
    )]
    pub proposal: UncheckedAccount<'info>,

    // Per (voter, proposal) record; populated means already voted
    #[account(
        init_if_needed,
        payer = voter,
        space = ANCHOR_DISCRIMINATOR + VoteRecord::INIT_SPACE,
        seeds = [VOTE_RECORD, voter.key().as_ref(), &proposal_id.to_le_bytes()],
        bump
    )]
    pub vote_record: Box<Account<'info, VoteRecord>>,

    #[account(
        address = treasury_config.x_mint @ VoteError::TokenMintMismatch
    )]
    pub x_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        associated_token::mint = x_mint,
        associated_token::authority = voter
    )]
    pub voter_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        address = treasury_config.treasury_token_account @ VoteError::InvalidTreasuryAccount
    )]
    pub treasury_token_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> ProposalToVote<'info> {
    pub fn proposal_to_vote(
        &mut self,
        proposal_id: u64,
        stake_amount: u64,
        bumps: &ProposalToVoteBumps,
    ) -> Result<()> {
        let mut proposal = Proposal::load(&self.proposal)?;
        let now = Clock::get()?.unix_timestamp;

        require!(proposal.is_voting_open(now), VoteError::VotingClosed);
        require!(!self.vote_record.is_consumed(), VoteError::DuplicateVote);
        require!(stake_amount > 0, VoteError::InsufficientStake);
        require!(
            self.voter_token_account.amount >= stake_amount,
            VoteError::InsufficientStake
        );

        transfer(
            CpiContext::new(
                self.token_program.to_account_info(),
                Transfer {
                    from: self.voter_token_account.to_account_info(),
                    to: self.treasury_token_account.to_account_info(),
                    authority: self.voter.to_account_info(),
                },
            ),
            stake_amount,
        )?;

        // One ballot is one tally unit, whatever the stake
        proposal.record_vote()?;
        proposal.store(&self.proposal)?;

        self.voter_account.votes_cast = self
            .voter_account
            .votes_cast
            .checked_add(1)
            .ok_or(VoteError::MathOverflow)?;

        self.vote_record.set_inner(VoteRecord {
            voter: self.voter.key(),
            proposal_id,
            stake_amount,
            voted_at: now,
            bump: bumps.vote_record,
        });

        emit!(VoteCast {
            proposal_id,
            voter: self.voter.key(),
            stake_amount,
            number_of_votes: proposal.number_of_votes,
            timestamp: now,
        });

        Ok(())
    }
}
