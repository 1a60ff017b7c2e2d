//! Vote session lifecycle: creation, lookup and start.

use soroban_sdk::{Address, Env};

use crate::events::{SessionCreated, SessionStarted};
use crate::storage::{require_admin, set_persistent, DataKey};
use crate::{registry, Error, SessionState, VoteSession};

/// Id of the most recent session; 0 while none has been created.
fn last_session_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&DataKey::LastSessionId)
        .unwrap_or(0)
}

pub(crate) fn load(env: &Env, session_id: u64) -> Result<VoteSession, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Session(session_id))
        .ok_or(Error::SessionNotFound)
}

pub(crate) fn save(env: &Env, session: &VoteSession) {
    set_persistent(env, DataKey::Session(session.id), session);
}

pub(crate) fn get_last_id(env: &Env) -> Result<u64, Error> {
    match last_session_id(env) {
        0 => Err(Error::SessionNotFound),
        id => Ok(id),
    }
}

/// Allocates a session over a snapshot of the current catalog. Games added
/// afterwards never join it.
pub(crate) fn create(env: &Env, caller: &Address) -> Result<u64, Error> {
    caller.require_auth();

    let id = last_session_id(env)
        .checked_add(1)
        .ok_or(Error::Overflow)?;
    let contending_game_ids = registry::game_ids(env);
    let game_count = contending_game_ids.len();

    let session = VoteSession {
        id,
        state: SessionState::Created,
        current_round: 0,
        contending_game_ids,
    };
    save(env, &session);
    env.storage().instance().set(&DataKey::LastSessionId, &id);

    SessionCreated {
        session_id: id,
        game_count,
    }
    .publish(env);

    Ok(id)
}

pub(crate) fn start(env: &Env, caller: &Address, session_id: u64) -> Result<(), Error> {
    require_admin(env, caller)?;

    let mut session = load(env, session_id)?;
    if session.state != SessionState::Created {
        return Err(Error::InvalidState);
    }

    session.state = SessionState::Active;
    session.current_round = 0;
    set_persistent(
        env,
        DataKey::RoundContenders(session_id, 0),
        &session.contending_game_ids,
    );
    save(env, &session);

    SessionStarted { session_id }.publish(env);

    Ok(())
}

pub(crate) fn current_round(env: &Env, session_id: u64) -> Result<u32, Error> {
    let session = load(env, session_id)?;
    if session.state == SessionState::Created {
        return Err(Error::InvalidState);
    }
    Ok(session.current_round)
}
