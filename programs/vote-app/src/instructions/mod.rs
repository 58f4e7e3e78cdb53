pub mod initialize_treasury;
pub mod buy_tokens;
pub mod withdraw_sol;
pub mod register_voter;
pub mod close_voter;
pub mod initialize_proposal_counter;
pub mod register_proposal;
pub mod proposal_to_vote;
pub mod pick_winner;
pub mod close_proposal;

pub use initialize_treasury::*;
pub use buy_tokens::*;
pub use withdraw_sol::*;
pub use register_voter::*;
pub use close_voter::*;
pub use initialize_proposal_counter::*;
pub use register_proposal::*;
pub use proposal_to_vote::*;
pub use pick_winner::*;
pub use close_proposal::*;
