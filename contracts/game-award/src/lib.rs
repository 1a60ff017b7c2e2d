//! GameAward Voting Contract
//!
//! A multi-round elimination vote between games. Games are registered and vote
//! sessions opened over a snapshot of the catalog; the owner manages the jury
//! and moves each session from round to round. Only the leading games of a round stay in
//! contention for the next one.
//!
//! ## Voting Flow
//! 1. `add_game` fills the catalog; the owner adds jury members
//! 2. `create_vote_session`, then the owner calls `start_vote_session` (opens round 0)
//! 3. Anyone calls `vote` once per round; jury ballots weigh 30, others 1
//! 4. Owner calls `pass_to_next_round`: tied leaders all advance, the rest drop
//! 5. The session ends after `max_rounds` rounds or on `end_vote_session`
//!
//! ## Conventions
//! - Game ids and rounds start at 0, session ids start at 1
//! - Scores never carry over between rounds
#![no_std]
#![allow(unexpected_cfgs)]

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env, String, Vec};

mod events;
mod ledger;
mod registry;
mod rounds;
mod session;
mod storage;

pub use events::*;
pub use storage::DataKey;

use storage::{get_admin, get_max_rounds, require_initialized};

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized     = 2,
    NotAuthorized      = 3,
    GameNotFound       = 4,
    SessionNotFound    = 5,
    JuryNotFound       = 6,
    RoundNotFound      = 7,
    VoteNotFound       = 8,
    JuryAlreadyExists  = 9,
    InvalidState       = 10,
    NotContending      = 11,
    AlreadyVoted       = 12,
    InvalidMaxRounds   = 13,
    Overflow           = 14,
}

impl From<gameaward_shared::Error> for Error {
    fn from(err: gameaward_shared::Error) -> Self {
        match err {
            gameaward_shared::Error::Overflow => Error::Overflow,
        }
    }
}

// ---------------------------------------------------------------------------
// Storage types
// ---------------------------------------------------------------------------

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Game {
    pub id: u32,
    pub name: String,
    pub platform: String,
    pub price: String, // display string, e.g. "130€"
    pub category: String,
    pub day: String,
    pub photo: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct JuryMember {
    pub wallet_address: Address,
    pub name: String,
    pub picture_url: String,
}

#[contracttype]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum SessionState {
    Created = 0,
    Active = 1,
    Ended = 2,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VoteSession {
    pub id: u64,
    pub state: SessionState,
    pub current_round: u32,
    pub contending_game_ids: Vec<u32>,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Vote {
    pub session_id: u64,
    pub round: u32,
    pub voter: Address,
    pub game_id: u32,
    pub weight: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GameScore {
    pub game_id: u32,
    pub score: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LeadingGame {
    pub game: Game,
    pub score: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub max_rounds: u32,
}

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

#[contract]
pub struct GameAward;

#[contractimpl]
impl GameAward {
    /// Initialize with the owner and the number of rounds a session may run.
    pub fn init(env: Env, admin: Address, max_rounds: u32) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Admin) {
            return Err(Error::AlreadyInitialized);
        }
        if max_rounds == 0 {
            return Err(Error::InvalidMaxRounds);
        }
        admin.require_auth();

        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::MaxRounds, &max_rounds);

        Initialized { admin, max_rounds }.publish(&env);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<Config, Error> {
        Ok(Config {
            admin: get_admin(&env)?,
            max_rounds: get_max_rounds(&env)?,
        })
    }

    pub fn is_owner(env: Env, caller: Address) -> Result<bool, Error> {
        Ok(get_admin(&env)? == caller)
    }

    // -- Registry -----------------------------------------------------------

    /// Append a game to the catalog and return its id.
    #[allow(clippy::too_many_arguments)]
    pub fn add_game(
        env: Env,
        caller: Address,
        name: String,
        platform: String,
        price: String,
        category: String,
        day: String,
        photo: String,
    ) -> Result<u32, Error> {
        require_initialized(&env)?;
        registry::add_game(&env, &caller, name, platform, price, category, day, photo)
    }

    pub fn get_game(env: Env, game_id: u32) -> Result<Game, Error> {
        registry::get_game(&env, game_id)
    }

    pub fn get_games(env: Env) -> Result<Vec<Game>, Error> {
        registry::get_games(&env)
    }

    pub fn get_game_count(env: Env) -> u32 {
        registry::game_count(&env)
    }

    /// Register a jury member. Owner only; one entry per address.
    pub fn add_jury_member(
        env: Env,
        caller: Address,
        wallet_address: Address,
        name: String,
        picture_url: String,
    ) -> Result<(), Error> {
        require_initialized(&env)?;
        registry::add_jury_member(&env, &caller, wallet_address, name, picture_url)
    }

    /// Remove a jury member. Owner only; the others keep their order.
    pub fn remove_jury_member(
        env: Env,
        caller: Address,
        wallet_address: Address,
    ) -> Result<(), Error> {
        require_initialized(&env)?;
        registry::remove_jury_member(&env, &caller, wallet_address)
    }

    pub fn get_juries(env: Env) -> Vec<JuryMember> {
        registry::get_juries(&env)
    }

    pub fn is_jury_member(env: Env, address: Address) -> bool {
        registry::is_jury_member(&env, &address)
    }

    // -- Sessions -----------------------------------------------------------

    /// Create a session over the games currently in the catalog.
    pub fn create_vote_session(env: Env, caller: Address) -> Result<u64, Error> {
        require_initialized(&env)?;
        session::create(&env, &caller)
    }

    pub fn get_last_vote_session_id(env: Env) -> Result<u64, Error> {
        session::get_last_id(&env)
    }

    pub fn get_vote_session(env: Env, session_id: u64) -> Result<VoteSession, Error> {
        session::load(&env, session_id)
    }

    /// Open round 0 of a created session. Owner only.
    pub fn start_vote_session(env: Env, caller: Address, session_id: u64) -> Result<(), Error> {
        require_initialized(&env)?;
        session::start(&env, &caller, session_id)
    }

    pub fn get_current_round(env: Env, session_id: u64) -> Result<u32, Error> {
        session::current_round(&env, session_id)
    }

    // -- Rounds -------------------------------------------------------------

    /// Cast the caller's single ballot for the open round.
    pub fn vote(env: Env, voter: Address, session_id: u64, game_id: u32) -> Result<Vote, Error> {
        require_initialized(&env)?;
        rounds::vote(&env, &voter, session_id, game_id)
    }

    pub fn get_vote_round_game_ids(env: Env, session_id: u64) -> Result<Vec<u32>, Error> {
        rounds::round_game_ids(&env, session_id)
    }

    /// Close the open round and advance its leaders. Owner only.
    pub fn pass_to_next_round(env: Env, caller: Address, session_id: u64) -> Result<(), Error> {
        require_initialized(&env)?;
        rounds::pass_to_next_round(&env, &caller, session_id)
    }

    /// End an active session; the open round's leaders win. Owner only.
    pub fn end_vote_session(env: Env, caller: Address, session_id: u64) -> Result<(), Error> {
        require_initialized(&env)?;
        rounds::end_session(&env, &caller, session_id)
    }

    pub fn get_current_round_leading_games(
        env: Env,
        session_id: u64,
        round: u32,
    ) -> Result<Vec<LeadingGame>, Error> {
        rounds::leading_games(&env, session_id, round)
    }

    pub fn get_winners(env: Env, session_id: u64) -> Result<Vec<u32>, Error> {
        rounds::winners(&env, session_id)
    }

    // -- Ledger -------------------------------------------------------------

    pub fn get_vote_weight(env: Env, voter: Address) -> u64 {
        ledger::weight_of(&env, &voter)
    }

    pub fn get_score(env: Env, session_id: u64, round: u32, game_id: u32) -> u64 {
        ledger::score_of(&env, session_id, round, game_id)
    }

    pub fn get_vote(env: Env, session_id: u64, round: u32, voter: Address) -> Result<Vote, Error> {
        ledger::get_vote(&env, session_id, round, &voter)
    }

    pub fn has_voted(env: Env, session_id: u64, round: u32, voter: Address) -> bool {
        ledger::has_voted(&env, session_id, round, &voter)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
