use gameaward_shared::PERSISTENT_BUMP_LEDGERS;
use soroban_sdk::{contracttype, Address, Env, IntoVal, Val};

use crate::Error;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    MaxRounds,
    GameCount,
    LastSessionId,
    Game(u32),
    Juries,
    Jury(Address),
    Session(u64),
    RoundContenders(u64, u32), // (session_id, round)
    RoundTally(u64, u32),      // (session_id, round)
    Vote(u64, u32, Address),   // (session_id, round, voter)
}

pub(crate) fn require_initialized(env: &Env) -> Result<(), Error> {
    if !env.storage().instance().has(&DataKey::Admin) {
        return Err(Error::NotInitialized);
    }
    Ok(())
}

pub(crate) fn get_admin(env: &Env) -> Result<Address, Error> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(Error::NotInitialized)
}

pub(crate) fn get_max_rounds(env: &Env) -> Result<u32, Error> {
    env.storage()
        .instance()
        .get(&DataKey::MaxRounds)
        .ok_or(Error::NotInitialized)
}

pub(crate) fn require_admin(env: &Env, caller: &Address) -> Result<(), Error> {
    let admin = get_admin(env)?;
    caller.require_auth();
    if caller != &admin {
        return Err(Error::NotAuthorized);
    }
    Ok(())
}

pub(crate) fn set_persistent<T>(env: &Env, key: DataKey, value: &T)
where
    T: IntoVal<Env, Val>,
{
    env.storage().persistent().set(&key, value);
    extend_persistent_ttl(env, &key);
}

pub(crate) fn extend_persistent_ttl(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_BUMP_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}
