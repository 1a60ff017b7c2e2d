//! Game catalog and jury roster.

use soroban_sdk::{Address, Env, String, Vec};

use crate::events::{GameAdded, JuryMemberAdded, JuryMemberRemoved};
use crate::storage::{require_admin, set_persistent, DataKey};
use crate::{Error, Game, JuryMember};

pub(crate) fn game_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::GameCount)
        .unwrap_or(0)
}

#[allow(clippy::too_many_arguments)]
pub(crate) fn add_game(
    env: &Env,
    caller: &Address,
    name: String,
    platform: String,
    price: String,
    category: String,
    day: String,
    photo: String,
) -> Result<u32, Error> {
    caller.require_auth();

    let id = game_count(env);
    let next = id.checked_add(1).ok_or(Error::Overflow)?;

    let game = Game {
        id,
        name: name.clone(),
        platform,
        price,
        category,
        day,
        photo,
    };
    set_persistent(env, DataKey::Game(id), &game);
    env.storage().instance().set(&DataKey::GameCount, &next);

    GameAdded { game_id: id, name }.publish(env);

    Ok(id)
}

pub(crate) fn get_game(env: &Env, id: u32) -> Result<Game, Error> {
    if id >= game_count(env) {
        return Err(Error::GameNotFound);
    }
    env.storage()
        .persistent()
        .get(&DataKey::Game(id))
        .ok_or(Error::GameNotFound)
}

pub(crate) fn get_games(env: &Env) -> Result<Vec<Game>, Error> {
    let mut games = Vec::new(env);
    for id in 0..game_count(env) {
        games.push_back(get_game(env, id)?);
    }
    Ok(games)
}

/// Ids of every game in the catalog, in creation order.
pub(crate) fn game_ids(env: &Env) -> Vec<u32> {
    let mut ids = Vec::new(env);
    for id in 0..game_count(env) {
        ids.push_back(id);
    }
    ids
}

pub(crate) fn get_juries(env: &Env) -> Vec<JuryMember> {
    env.storage()
        .persistent()
        .get(&DataKey::Juries)
        .unwrap_or(Vec::new(env))
}

pub(crate) fn is_jury_member(env: &Env, address: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Jury(address.clone()))
}

pub(crate) fn add_jury_member(
    env: &Env,
    caller: &Address,
    wallet_address: Address,
    name: String,
    picture_url: String,
) -> Result<(), Error> {
    require_admin(env, caller)?;

    if is_jury_member(env, &wallet_address) {
        return Err(Error::JuryAlreadyExists);
    }

    let mut juries = get_juries(env);
    juries.push_back(JuryMember {
        wallet_address: wallet_address.clone(),
        name: name.clone(),
        picture_url,
    });
    set_persistent(env, DataKey::Juries, &juries);
    set_persistent(env, DataKey::Jury(wallet_address.clone()), &true);

    JuryMemberAdded {
        wallet_address,
        name,
    }
    .publish(env);

    Ok(())
}

pub(crate) fn remove_jury_member(
    env: &Env,
    caller: &Address,
    wallet_address: Address,
) -> Result<(), Error> {
    require_admin(env, caller)?;

    let mut juries = get_juries(env);
    let mut index: Option<u32> = None;
    for i in 0..juries.len() {
        if juries.get_unchecked(i).wallet_address == wallet_address {
            index = Some(i);
            break;
        }
    }
    let index = index.ok_or(Error::JuryNotFound)?;

    // Vec::remove shifts the tail, so the remaining members keep their order.
    juries.remove(index);
    set_persistent(env, DataKey::Juries, &juries);
    env.storage()
        .persistent()
        .remove(&DataKey::Jury(wallet_address.clone()));

    JuryMemberRemoved { wallet_address }.publish(env);

    Ok(())
}
