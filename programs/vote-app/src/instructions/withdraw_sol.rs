use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};

use crate::{constants::*, errors::*, events::*, state::*};

// Moves sale proceeds from the vault to the treasury authority.
// The vault always keeps its rent-exempt minimum.
#[derive(Accounts)]
pub struct WithdrawSol<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [TREASURY_CONFIG],
        bump = treasury_config.bump,
        has_one = authority @ VoteError::Unauthorized
    )]
    pub treasury_config: Account<'info, TreasuryConfig>,

    #[account(
        mut,
        seeds = [SOL_VAULT],
        bump = treasury_config.sol_vault_bump
    )]
    pub sol_vault: SystemAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawSol<'info> {
    pub fn withdraw_sol(&mut self, amount: u64) -> Result<()> {
        require!(amount > 0, VoteError::InvalidAmount);

        let min_rent = Rent::get()?.minimum_balance(0);
        let available = self
            .sol_vault
            .lamports()
            .checked_sub(min_rent)
            .ok_or(VoteError::InsufficientVaultBalance)?;
        require!(amount <= available, VoteError::InsufficientVaultBalance);

        let signer_seeds: &[&[&[u8]]] = &[&[
            SOL_VAULT,
            &[self.treasury_config.sol_vault_bump],
        ]];

        transfer(
            CpiContext::new_with_signer(
                self.system_program.to_account_info(),
                Transfer {
                    from: self.sol_vault.to_account_info(),
                    to: self.authority.to_account_info(),
                },
                signer_seeds,
            ),
            amount,
        )?;

        msg!("Withdrew {} lamports to {}", amount, self.authority.key());

        emit!(SolWithdrawn {
            authority: self.authority.key(),
            amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
