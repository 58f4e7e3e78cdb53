use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, state::*};

// Sets up the token sale: config, mint, stake custody and SOL vault.
// Runs once per deployment; every later call fails with AlreadyInitialized.
#[derive(Accounts)]
pub struct InitializeTreasury<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    // init_if_needed so a repeat call reaches the handler and gets a named error
    #[account(
        init_if_needed,
        payer = authority,
        space = ANCHOR_DISCRIMINATOR + TreasuryConfig::INIT_SPACE,
        seeds = [TREASURY_CONFIG],
        bump
    )]
    pub treasury_config: Box<Account<'info, TreasuryConfig>>,

    #[account(
        init_if_needed,
        payer = authority,
        mint::decimals = TOKEN_DECIMALS,
        mint::authority = mint_authority,
        seeds = [X_MINT],
        bump
    )]
    pub x_mint: Box<Account<'info, Mint>>,

    // Stake custody, owned by the mint authority PDA
    #[account(
        init_if_needed,
        payer = authority,
        associated_token::mint = x_mint,
        associated_token::authority = mint_authority,
    )]
    pub treasury_token_account: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [SOL_VAULT],
        bump
    )]
    pub sol_vault: SystemAccount<'info>,

    /// CHECK: data-less PDA used only as a signer
    #[account(
        seeds = [MINT_AUTHORITY],
        bump
    )]
    pub mint_authority: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitializeTreasury<'info> {
    pub fn initialize_treasury(
        &mut self,
        sol_price: u64,
        token_per_purchase: u64,
        bumps: &InitializeTreasuryBumps,
    ) -> Result<()> {
        require!(
            !self.treasury_config.is_initialized(),
            VoteError::AlreadyInitialized
        );
        require!(sol_price > 0, VoteError::InvalidAmount);
        require!(token_per_purchase > 0, VoteError::InvalidAmount);

        self.treasury_config.set_inner(TreasuryConfig {
            authority: self.authority.key(),
            x_mint: self.x_mint.key(),
            treasury_token_account: self.treasury_token_account.key(),
            sol_price,
            token_per_purchase,
            bump: bumps.treasury_config,
            sol_vault_bump: bumps.sol_vault,
            mint_authority_bump: bumps.mint_authority,
            x_mint_bump: bumps.x_mint,
        });

        // Vault holds the rent-exempt minimum from the start
        let min_rent = Rent::get()?.minimum_balance(0);
        let shortfall = min_rent.saturating_sub(self.sol_vault.lamports());
        if shortfall > 0 {
            transfer(
                CpiContext::new(
                    self.system_program.to_account_info(),
                    Transfer {
                        from: self.authority.to_account_info(),
                        to: self.sol_vault.to_account_info(),
                    },
                ),
                shortfall,
            )?;
        }

        msg!(
            "Treasury initialized: {} lamports buys {} tokens of {}",
            sol_price,
            token_per_purchase,
            self.x_mint.key()
        );

        emit!(TreasuryInitialized {
            authority: self.authority.key(),
            x_mint: self.x_mint.key(),
            sol_price,
            token_per_purchase,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
