#![cfg(test)]

use super::{MarketplaceTest, IN_FIVE_DAYS, ONE_TOKEN, TODAY, TODAY_2, TOMORROW};
use crate::types::{Error, Listing};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{Address, IntoVal, Symbol};

const DAY: u64 = 24 * 60 * 60;

#[test]
fn test_rent_rejects_insufficient_payment() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let token_id: u64 = test.token_ids[1];
    test.list(token_id, ONE_TOKEN, TOMORROW, IN_FIVE_DAYS);

    assert_eq!(
        test.marketplace_client.try_rent_nft(
            &test.user,
            &test.nft_client.address,
            &token_id,
            &TODAY_2,
            &0,
        ),
        Err(Ok(Error::InsufficientRentalFee))
    );
    assert_eq!(test.nft_client.user_of(&token_id), None);
}

#[test]
fn test_rent_nft() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let token_id: u64 = test.token_ids[1];
    test.list(token_id, ONE_TOKEN, TOMORROW, IN_FIVE_DAYS);
    let owner_before: i128 = test.balance(&test.token_owner);
    let user_before: i128 = test.balance(&test.user);

    // An hour of use is billed as one started day.
    let fee: i128 = test.marketplace_client.rent_nft(
        &test.user,
        &test.nft_client.address,
        &token_id,
        &TODAY_2,
        &(4 * ONE_TOKEN),
    );

    assert_eq!(fee, ONE_TOKEN);
    assert_eq!(test.balance(&test.token_owner) - owner_before, ONE_TOKEN);
    assert_eq!(user_before - test.balance(&test.user), ONE_TOKEN);

    let listing: Listing = test.find_listing(token_id).unwrap();
    assert_eq!(listing.user, Some(test.user.clone()));
    assert_eq!(listing.owner, test.token_owner);
    assert_eq!(listing.start_date, TOMORROW);
    assert_eq!(listing.end_date, IN_FIVE_DAYS);
    assert_eq!(listing.expires, TODAY_2);

    assert_eq!(test.nft_client.user_of(&token_id), Some(test.user.clone()));
    assert_eq!(test.nft_client.user_expires(&token_id), TODAY_2);

    let (name, fields) = test.last_event();
    assert_eq!(name, Symbol::new(&test.env, "NftRented"));
    let owner: Address = fields.get(0).unwrap().into_val(&test.env);
    let user: Option<Address> = fields.get(1).unwrap().into_val(&test.env);
    let event_token: u64 = fields.get(3).unwrap().into_val(&test.env);
    let start_date: u64 = fields.get(4).unwrap().into_val(&test.env);
    let end_date: u64 = fields.get(5).unwrap().into_val(&test.env);
    let expires: u64 = fields.get(6).unwrap().into_val(&test.env);
    let rental_fee: i128 = fields.get(7).unwrap().into_val(&test.env);
    assert_eq!(owner, test.token_owner);
    assert_eq!(user, Some(test.user.clone()));
    assert_eq!(event_token, token_id);
    assert_eq!(start_date, TOMORROW);
    assert_eq!(end_date, IN_FIVE_DAYS);
    assert_eq!(expires, TODAY_2);
    assert_eq!(rental_fee, ONE_TOKEN);
}

#[test]
fn test_rental_fee_counts_started_days() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let token_id: u64 = test.token_ids[0];
    let nft_contract: Address = test.nft_client.address.clone();
    test.list(token_id, ONE_TOKEN, TOMORROW, IN_FIVE_DAYS);

    let quote = |expires: u64| {
        test.marketplace_client
            .get_rental_fee(&nft_contract, &token_id, &expires)
    };
    assert_eq!(quote(TODAY + 1), ONE_TOKEN);
    assert_eq!(quote(TODAY + DAY - 1), ONE_TOKEN);
    assert_eq!(quote(TODAY + DAY), 2 * ONE_TOKEN);
    assert_eq!(quote(IN_FIVE_DAYS), 6 * ONE_TOKEN);

    let fee: i128 = test.marketplace_client.rent_nft(
        &test.user,
        &nft_contract,
        &token_id,
        &(TODAY + 2 * DAY + 5),
        &(10 * ONE_TOKEN),
    );
    assert_eq!(fee, 3 * ONE_TOKEN);
}

#[test]
fn test_rent_rejects_bad_expiry() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let token_id: u64 = test.token_ids[0];
    test.list(token_id, ONE_TOKEN, TOMORROW, IN_FIVE_DAYS);

    assert_eq!(
        test.marketplace_client.try_rent_nft(
            &test.user,
            &test.nft_client.address,
            &token_id,
            &(IN_FIVE_DAYS + 1),
            &(100 * ONE_TOKEN),
        ),
        Err(Ok(Error::RentalExceedsEndDate))
    );
    assert_eq!(
        test.marketplace_client.try_rent_nft(
            &test.user,
            &test.nft_client.address,
            &token_id,
            &TODAY,
            &(100 * ONE_TOKEN),
        ),
        Err(Ok(Error::ExpiryInPast))
    );
}

#[test]
fn test_rent_unknown_listing_fails() {
    let test: MarketplaceTest = MarketplaceTest::setup();

    assert_eq!(
        test.marketplace_client.try_rent_nft(
            &test.user,
            &test.nft_client.address,
            &test.token_ids[2],
            &TODAY_2,
            &ONE_TOKEN,
        ),
        Err(Ok(Error::ListingNotFound))
    );
}

#[test]
fn test_rented_nft_cannot_be_rented_until_expiry() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let token_id: u64 = test.token_ids[0];
    let second_user: Address = Address::generate(&test.env);
    let funds: i128 = test.token_client.balance(&test.user);
    test.token_client.transfer(&test.user, &second_user, &(funds / 2));
    test.list(token_id, ONE_TOKEN, TOMORROW, IN_FIVE_DAYS);

    test.marketplace_client.rent_nft(
        &test.user,
        &test.nft_client.address,
        &token_id,
        &TODAY_2,
        &ONE_TOKEN,
    );
    assert_eq!(
        test.marketplace_client.try_rent_nft(
            &second_user,
            &test.nft_client.address,
            &token_id,
            &TOMORROW,
            &(10 * ONE_TOKEN),
        ),
        Err(Ok(Error::AlreadyRented))
    );

    // Once the first rental lapses the token is free again.
    test.env.ledger().set_timestamp(TODAY_2 + 1);
    assert_eq!(test.nft_client.user_of(&token_id), None);

    test.marketplace_client.rent_nft(
        &second_user,
        &test.nft_client.address,
        &token_id,
        &TOMORROW,
        &(10 * ONE_TOKEN),
    );
    assert_eq!(test.nft_client.user_of(&token_id), Some(second_user.clone()));
    assert_eq!(
        test.find_listing(token_id).unwrap().user,
        Some(second_user)
    );
}

#[test]
fn test_rent_after_marketplace_revoked_fails() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let token_id: u64 = test.token_ids[0];
    test.list(token_id, ONE_TOKEN, TOMORROW, IN_FIVE_DAYS);
    test.nft_client.set_approval_for_all(
        &test.token_owner,
        &test.marketplace_client.address,
        &false,
    );
    let user_before: i128 = test.balance(&test.user);

    assert_eq!(
        test.marketplace_client.try_rent_nft(
            &test.user,
            &test.nft_client.address,
            &token_id,
            &TODAY_2,
            &ONE_TOKEN,
        ),
        Err(Ok(Error::MarketplaceNotApproved))
    );
    assert_eq!(test.balance(&test.user), user_before);
    assert_eq!(test.nft_client.user_of(&token_id), None);
}

#[test]
fn test_rent_after_transfer_fails() {
    let test: MarketplaceTest = MarketplaceTest::setup();
    let token_id: u64 = test.token_ids[0];
    test.list(token_id, ONE_TOKEN, TOMORROW, IN_FIVE_DAYS);

    // Minting once puts the marketplace on the new owner's operator list.
    let new_owner: Address = Address::generate(&test.env);
    test.nft_client
        .mint(&new_owner, &soroban_sdk::String::from_str(&test.env, "fakeURI"));
    test.nft_client
        .transfer_from(&test.token_owner, &test.token_owner, &new_owner, &token_id);

    let owner_before: i128 = test.balance(&test.token_owner);
    let user_before: i128 = test.balance(&test.user);

    assert_eq!(
        test.marketplace_client.try_rent_nft(
            &test.user,
            &test.nft_client.address,
            &token_id,
            &TODAY_2,
            &ONE_TOKEN,
        ),
        Err(Ok(Error::NotTokenOwner))
    );
    assert_eq!(test.balance(&test.token_owner), owner_before);
    assert_eq!(test.balance(&test.user), user_before);
    assert_eq!(test.balance(&new_owner), 0);
    assert_eq!(test.nft_client.user_of(&token_id), None);
}
