use common::{
    nft::{interface::RentableNftClient, types::INTERFACE_ERC4907},
    storage::{get_data, get_persistent, remove_persistent, store_persistent},
};
use soroban_sdk::{log, token, Address, Env, Vec};

use crate::types::{
    DataKey, Error, Listing, ListingRef, ADMIN, LISTING_FEE, SECONDS_PER_DAY,
};

use super::contract_clients::{get_nft_client, get_payment_client};

pub fn get_admin(env: &Env) -> Result<Address, Error> {
    get_data(env, &ADMIN).ok_or(Error::NotInitialized)
}

pub fn read_listing_fee(env: &Env) -> Result<i128, Error> {
    get_data(env, &LISTING_FEE).ok_or(Error::NotInitialized)
}

/// Asks the contract whether it carries the ERC4907 rental role. Contracts
/// without `supports_interface` count as not rentable.
pub fn is_rentable_nft(env: &Env, nft_contract: &Address) -> bool {
    if *nft_contract == env.current_contract_address() {
        return false;
    }
    let nft_client: RentableNftClient<'_> = get_nft_client(env, nft_contract);
    matches!(
        nft_client.try_supports_interface(&INTERFACE_ERC4907),
        Ok(Ok(true))
    )
}

pub fn require_token_owner(
    env: &Env,
    nft_contract: &Address,
    token_id: u64,
    owner: &Address,
) -> Result<(), Error> {
    match get_nft_client(env, nft_contract).try_owner_of(&token_id) {
        Ok(Ok(current_owner)) if current_owner == *owner => Ok(()),
        _ => Err(Error::NotTokenOwner),
    }
}

// The marketplace assigns renters through `set_user`, so it must be allowed to operate the token.
pub fn require_marketplace_approval(
    env: &Env,
    nft_contract: &Address,
    token_id: u64,
    owner: &Address,
) -> Result<(), Error> {
    let nft_client: RentableNftClient<'_> = get_nft_client(env, nft_contract);
    let marketplace: Address = env.current_contract_address();

    if nft_client.is_approved_for_all(owner, &marketplace) {
        return Ok(());
    }
    match nft_client.try_get_approved(&token_id) {
        Ok(Ok(Some(approved))) if approved == marketplace => Ok(()),
        _ => Err(Error::MarketplaceNotApproved),
    }
}

/// Whole days billed for holding the rental role from `now` until `until`.
/// A started day counts in full.
pub fn billable_days(now: u64, until: u64) -> u64 {
    (until - now) / SECONDS_PER_DAY + 1
}

pub fn days_to_amount(days: u64, price_per_day: i128) -> Result<i128, Error> {
    (days as i128)
        .checked_mul(price_per_day)
        .ok_or(Error::ArithmeticOverflow)
}

pub fn rental_fee(env: &Env, listing: &Listing, expires: u64) -> Result<i128, Error> {
    let now: u64 = env.ledger().timestamp();
    if expires > listing.end_date {
        return Err(Error::RentalExceedsEndDate);
    }
    if expires <= now {
        return Err(Error::ExpiryInPast);
    }
    days_to_amount(billable_days(now, expires), listing.price_per_day)
}

/// Amount owed back to the renter when the owner pulls an active rental.
pub fn refund_due(env: &Env, listing: &Listing) -> Result<i128, Error> {
    let now: u64 = env.ledger().timestamp();
    if !listing.is_rented_at(now) {
        return Ok(0);
    }
    days_to_amount(billable_days(now, listing.expires), listing.price_per_day)
}

/// Moves `amount` of the payment token from `from` to `to`.
pub fn transfer_tokens(env: &Env, amount: i128, from: &Address, to: &Address) -> Result<(), Error> {
    if amount == 0 {
        return Ok(());
    }
    let token_client: token::Client<'_> = get_payment_client(env)?;
    let balance: i128 = token_client.balance(from);
    if balance < amount {
        return Err(Error::InsufficientBalance);
    }
    token_client.transfer(from, to, &amount);
    log!(env, "moved {} payment units", amount);
    Ok(())
}

pub fn get_listing_by_key(
    env: &Env,
    nft_contract: &Address,
    token_id: u64,
) -> Result<Listing, Error> {
    get_persistent(env, &DataKey::Listing(nft_contract.clone(), token_id))
        .ok_or(Error::ListingNotFound)
}

pub fn save_listing(env: &Env, listing: &Listing) {
    store_persistent(
        env,
        &DataKey::Listing(listing.nft_contract.clone(), listing.token_id),
        listing,
    );
}

pub fn get_index(env: &Env) -> Vec<ListingRef> {
    get_persistent(env, &DataKey::ListingIndex).unwrap_or_else(|| Vec::new(env))
}

pub fn add_to_index(env: &Env, nft_contract: &Address, token_id: u64) {
    let mut index: Vec<ListingRef> = get_index(env);
    index.push_back(ListingRef {
        nft_contract: nft_contract.clone(),
        token_id,
    });
    store_persistent(env, &DataKey::ListingIndex, &index);
}

pub fn remove_listing(env: &Env, nft_contract: &Address, token_id: u64) {
    remove_persistent(env, &DataKey::Listing(nft_contract.clone(), token_id));

    let mut index: Vec<ListingRef> = get_index(env);
    if let Some(position) = index
        .iter()
        .position(|entry| entry.token_id == token_id && entry.nft_contract == *nft_contract)
    {
        index.remove(position as u32);
        store_persistent(env, &DataKey::ListingIndex, &index);
    }
}
