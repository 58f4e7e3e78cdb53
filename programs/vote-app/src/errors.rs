use anchor_lang::prelude::*;

#[error_code]
pub enum VoteError {
    // Setup errors
    #[msg("Treasury is already initialized")]
    AlreadyInitialized,

    #[msg("Voter is already registered")]
    AlreadyRegistered,

    // Proposal and vote errors
    #[msg("Deadline must be in the future")]
    DeadlineInPast,

    #[msg("Stake must be non-zero and covered by the token balance")]
    InsufficientStake,

    #[msg("Voter has already voted on this proposal")]
    DuplicateVote,

    #[msg("Voting on this proposal has closed")]
    VotingClosed,

    #[msg("Voting is still active - cannot declare winner yet")]
    VotingStillActive,

    // Authorization errors
    #[msg("Unauthorized access")]
    Unauthorized,

    #[msg("Proposal not found")]
    ProposalNotFound,

    // Input validation errors
    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Proposal info must be between 1 and 200 bytes")]
    InvalidProposalInfo,

    // Counter errors
    #[msg("Proposal counter is already initialized")]
    ProposalCounterAlreadyInitialized,

    #[msg("Proposal counter overflow")]
    ProposalCounterOverflow,

    #[msg("Proposal votes overflow")]
    ProposalVotesOverflow,

    #[msg("No vote cast for this proposal")]
    NoVoteCast,

    // Account validation errors
    #[msg("Token mint mismatch")]
    TokenMintMismatch,

    #[msg("Invalid treasury token account")]
    InvalidTreasuryAccount,

    // Treasury errors
    #[msg("Vault balance cannot cover this withdrawal")]
    InsufficientVaultBalance,

    #[msg("Math overflow occurred")]
    MathOverflow,

    #[msg("No valid bump found for the given seeds")]
    AddressDerivationFailed,
}
