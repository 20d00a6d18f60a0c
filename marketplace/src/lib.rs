#![no_std]
#![allow(clippy::unused_unit)]
#![allow(clippy::too_many_arguments)]

mod events;
mod types;
mod utils;

pub use types::{Error, Listing, ListingRef};

use common::storage::{get_data, has_data, has_persistent, store_data};
use events::MarketplaceEvent;
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Symbol, Vec};
use types::{DataKey, ADMIN, LISTING_FEE, PAYMENT_TOKEN};
use utils::{
    contract_clients::get_nft_client,
    helpers::{
        add_to_index, get_admin, get_index, get_listing_by_key, is_rentable_nft, read_listing_fee,
        refund_due, remove_listing, rental_fee, require_marketplace_approval,
        require_token_owner, save_listing, transfer_tokens,
    },
};

#[contract]
pub struct MarketplaceContract;

#[contractimpl]
impl MarketplaceContract {
    pub fn initialize(
        env: Env,
        admin: Address,
        payment_token: Address,
        listing_fee: i128,
    ) -> Result<(), Error> {
        admin.require_auth();
        if has_data(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        if listing_fee < 0 {
            return Err(Error::InvalidListingFee);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &PAYMENT_TOKEN, &payment_token);
        store_data(&env, &LISTING_FEE, &listing_fee);

        MarketplaceEvent::Initialized(admin, payment_token, listing_fee).publish(&env);
        Ok(())
    }

    pub fn version() -> u32 {
        1
    }

    pub fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        let admin: Address = get_admin(&env)?;
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        MarketplaceEvent::Upgraded(Self::version()).publish(&env);
        Ok(())
    }

    pub fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error> {
        let admin: Address = get_admin(&env)?;
        admin.require_auth();

        if state_key != ADMIN && state_key != PAYMENT_TOKEN {
            return Err(Error::StateNotAlreadySet);
        }

        store_data(&env, &state_key, &state_value);
        env.events()
            .publish((Symbol::new(&env, "state_updated"), state_key), state_value);
        Ok(())
    }

    pub fn set_listing_fee(env: Env, listing_fee: i128) -> Result<(), Error> {
        let admin: Address = get_admin(&env)?;
        admin.require_auth();
        if listing_fee < 0 {
            return Err(Error::InvalidListingFee);
        }

        let old_fee: i128 = read_listing_fee(&env)?;
        store_data(&env, &LISTING_FEE, &listing_fee);
        MarketplaceEvent::ListingFeeUpdated(old_fee, listing_fee).publish(&env);
        Ok(())
    }

    pub fn get_listing_fee(env: Env) -> Result<i128, Error> {
        read_listing_fee(&env)
    }

    pub fn get_payment_token(env: Env) -> Result<Address, Error> {
        get_data(&env, &PAYMENT_TOKEN).ok_or(Error::NotInitialized)
    }

    /// Offers `token_id` for rent between `start_date` and `end_date`.
    ///
    /// `payment` is the most the owner is willing to pay for the listing fee;
    /// exactly the configured fee goes to the marketplace admin.
    pub fn list_nft(
        env: Env,
        owner: Address,
        nft_contract: Address,
        token_id: u64,
        price_per_day: i128,
        start_date: u64,
        end_date: u64,
        payment: i128,
    ) -> Result<(), Error> {
        owner.require_auth();

        if !is_rentable_nft(&env, &nft_contract) {
            return Err(Error::NotRentableContract);
        }
        require_token_owner(&env, &nft_contract, token_id, &owner)?;

        let listing_fee: i128 = read_listing_fee(&env)?;
        if payment < listing_fee {
            return Err(Error::InsufficientListingFee);
        }
        if price_per_day <= 0 {
            return Err(Error::InvalidPrice);
        }
        if start_date < env.ledger().timestamp() {
            return Err(Error::StartDateInPast);
        }
        if end_date < start_date {
            return Err(Error::EndDateBeforeStart);
        }
        if has_persistent(&env, &DataKey::Listing(nft_contract.clone(), token_id)) {
            return Err(Error::AlreadyListed);
        }
        require_marketplace_approval(&env, &nft_contract, token_id, &owner)?;

        let admin: Address = get_admin(&env)?;
        transfer_tokens(&env, listing_fee, &owner, &admin)?;

        let listing: Listing = Listing {
            owner,
            user: None,
            nft_contract: nft_contract.clone(),
            token_id,
            price_per_day,
            start_date,
            end_date,
            expires: 0,
        };
        save_listing(&env, &listing);
        add_to_index(&env, &nft_contract, token_id);

        MarketplaceEvent::NftListed(listing).publish(&env);
        Ok(())
    }

    /// Rents a listed token until `expires` and returns the fee charged.
    pub fn rent_nft(
        env: Env,
        renter: Address,
        nft_contract: Address,
        token_id: u64,
        expires: u64,
        payment: i128,
    ) -> Result<i128, Error> {
        renter.require_auth();

        let mut listing: Listing = get_listing_by_key(&env, &nft_contract, token_id)?;
        if listing.is_rented_at(env.ledger().timestamp()) {
            return Err(Error::AlreadyRented);
        }

        let fee: i128 = rental_fee(&env, &listing, expires)?;
        if payment < fee {
            return Err(Error::InsufficientRentalFee);
        }
        // The token may have changed hands since it was listed.
        require_token_owner(&env, &nft_contract, token_id, &listing.owner)?;
        transfer_tokens(&env, fee, &renter, &listing.owner)?;

        match get_nft_client(&env, &nft_contract).try_set_user(
            &env.current_contract_address(),
            &token_id,
            &Some(renter.clone()),
            &expires,
        ) {
            Ok(Ok(())) => {}
            _ => return Err(Error::MarketplaceNotApproved),
        }

        listing.user = Some(renter);
        listing.expires = expires;
        save_listing(&env, &listing);

        log!(&env, "token {} rented until {}", token_id, expires);
        MarketplaceEvent::NftRented(listing, fee).publish(&env);
        Ok(fee)
    }

    /// Withdraws a listing and returns the refund paid to an active renter.
    pub fn unlist_nft(
        env: Env,
        owner: Address,
        nft_contract: Address,
        token_id: u64,
        payment: i128,
    ) -> Result<i128, Error> {
        owner.require_auth();

        let listing: Listing = get_listing_by_key(&env, &nft_contract, token_id)?;
        if listing.owner != owner {
            return Err(Error::NotApprovedToUnlist);
        }

        let refund: i128 = refund_due(&env, &listing)?;
        if payment < refund {
            return Err(Error::InsufficientRefund);
        }

        if let Some(user) = &listing.user {
            transfer_tokens(&env, refund, &owner, user)?;
            // A burned token or a revoked marketplace must not pin the listing.
            let cleared = get_nft_client(&env, &nft_contract).try_set_user(
                &env.current_contract_address(),
                &token_id,
                &None,
                &0u64,
            );
            if !matches!(cleared, Ok(Ok(()))) {
                log!(&env, "user of token {} left in place", token_id);
            }
        }

        remove_listing(&env, &nft_contract, token_id);

        MarketplaceEvent::NftUnlisted(owner, nft_contract, token_id, refund).publish(&env);
        Ok(refund)
    }

    pub fn get_all_listings(env: Env) -> Vec<Listing> {
        let mut listings: Vec<Listing> = Vec::new(&env);
        for entry in get_index(&env).iter() {
            if let Ok(listing) = get_listing_by_key(&env, &entry.nft_contract, entry.token_id) {
                listings.push_back(listing);
            }
        }
        listings
    }

    pub fn get_listing(env: Env, nft_contract: Address, token_id: u64) -> Result<Listing, Error> {
        get_listing_by_key(&env, &nft_contract, token_id)
    }

    pub fn is_listed(env: Env, nft_contract: Address, token_id: u64) -> bool {
        has_persistent(&env, &DataKey::Listing(nft_contract, token_id))
    }

    pub fn get_listing_count(env: Env) -> u32 {
        get_index(&env).len()
    }

    /// Fee `rent_nft` would charge right now for renting until `expires`.
    pub fn get_rental_fee(
        env: Env,
        nft_contract: Address,
        token_id: u64,
        expires: u64,
    ) -> Result<i128, Error> {
        let listing: Listing = get_listing_by_key(&env, &nft_contract, token_id)?;
        rental_fee(&env, &listing, expires)
    }

    /// Refund `unlist_nft` would require right now.
    pub fn get_refund(env: Env, nft_contract: Address, token_id: u64) -> Result<i128, Error> {
        let listing: Listing = get_listing_by_key(&env, &nft_contract, token_id)?;
        refund_due(&env, &listing)
    }
}
