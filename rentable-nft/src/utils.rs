use common::{
    nft::types::{DataKey, Error, UserInfo, ADMIN, MARKETPLACE_CONTRACT},
    storage::{get_data, get_persistent, has_persistent, remove_persistent, store_persistent},
};
use soroban_sdk::{Address, Env};

use crate::events::NftEvent;

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    get_data(env, &ADMIN).ok_or(Error::NotInitialized)
}

pub fn get_marketplace(env: &Env) -> Result<Address, Error> {
    get_data(env, &MARKETPLACE_CONTRACT).ok_or(Error::NotInitialized)
}

pub fn require_owner(env: &Env, token_id: u64) -> Result<Address, Error> {
    get_persistent(env, &DataKey::Owner(token_id)).ok_or(Error::TokenNotFound)
}

pub fn is_operator(env: &Env, owner: &Address, operator: &Address) -> bool {
    get_persistent(env, &DataKey::Operator(owner.clone(), operator.clone())).unwrap_or(false)
}

pub fn get_approved(env: &Env, token_id: u64) -> Option<Address> {
    get_persistent(env, &DataKey::Approved(token_id))
}

// Owner, single-token approval or operator of the owner.
pub fn is_approved_or_owner(env: &Env, spender: &Address, token_id: u64) -> Result<bool, Error> {
    let owner: Address = require_owner(env, token_id)?;
    if *spender == owner || is_operator(env, &owner, spender) {
        return Ok(true);
    }
    Ok(get_approved(env, token_id).as_ref() == Some(spender))
}

pub fn get_user_info(env: &Env, token_id: u64) -> Option<UserInfo> {
    get_persistent(env, &DataKey::UserInfo(token_id))
}

/// Drops the rental role, announcing it only when someone held it.
pub fn clear_user(env: &Env, token_id: u64) {
    let info: Option<UserInfo> = get_user_info(env, token_id);
    if info.is_none() {
        return;
    }
    remove_persistent(env, &DataKey::UserInfo(token_id));
    if info.and_then(|i| i.user).is_some() {
        NftEvent::UpdateUser(token_id, None, 0).publish(env);
    }
}

pub fn clear_approval(env: &Env, token_id: u64) {
    if has_persistent(env, &DataKey::Approved(token_id)) {
        remove_persistent(env, &DataKey::Approved(token_id));
    }
}

pub fn balance(env: &Env, owner: &Address) -> u32 {
    get_persistent(env, &DataKey::Balance(owner.clone())).unwrap_or(0)
}

pub fn increase_balance(env: &Env, owner: &Address) {
    let current: u32 = balance(env, owner);
    store_persistent(env, &DataKey::Balance(owner.clone()), &(current + 1));
}

pub fn decrease_balance(env: &Env, owner: &Address) {
    let current: u32 = balance(env, owner);
    if current <= 1 {
        remove_persistent(env, &DataKey::Balance(owner.clone()));
    } else {
        store_persistent(env, &DataKey::Balance(owner.clone()), &(current - 1));
    }
}
