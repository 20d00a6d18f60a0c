use soroban_sdk::{Address, Env, IntoVal, Symbol, Val, Vec};

use crate::types::Listing;

pub enum MarketplaceEvent {
    Initialized(Address, Address, i128),
    Upgraded(u32),
    ListingFeeUpdated(i128, i128),
    NftListed(Listing),
    NftRented(Listing, i128),
    NftUnlisted(Address, Address, u64, i128),
}

impl MarketplaceEvent {
    pub fn name(&self) -> &'static str {
        match self {
            MarketplaceEvent::Initialized(..) => stringify!(Initialized),
            MarketplaceEvent::Upgraded(..) => stringify!(Upgraded),
            MarketplaceEvent::ListingFeeUpdated(..) => stringify!(ListingFeeUpdated),
            MarketplaceEvent::NftListed(..) => stringify!(NftListed),
            MarketplaceEvent::NftRented(..) => stringify!(NftRented),
            MarketplaceEvent::NftUnlisted(..) => stringify!(NftUnlisted),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            MarketplaceEvent::Initialized(admin, payment_token, listing_fee) => {
                v.push_back(admin.into_val(env));
                v.push_back(payment_token.into_val(env));
                v.push_back(listing_fee.into_val(env));
            }
            MarketplaceEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            MarketplaceEvent::ListingFeeUpdated(old_fee, new_fee) => {
                v.push_back(old_fee.into_val(env));
                v.push_back(new_fee.into_val(env));
            }
            MarketplaceEvent::NftListed(listing) => {
                v.push_back(listing.owner.into_val(env));
                v.push_back(listing.user.clone().into_val(env));
                v.push_back(listing.nft_contract.into_val(env));
                v.push_back(listing.token_id.into_val(env));
                v.push_back(listing.price_per_day.into_val(env));
                v.push_back(listing.start_date.into_val(env));
                v.push_back(listing.end_date.into_val(env));
                v.push_back(listing.expires.into_val(env));
            }
            MarketplaceEvent::NftRented(listing, rental_fee) => {
                v.push_back(listing.owner.into_val(env));
                v.push_back(listing.user.clone().into_val(env));
                v.push_back(listing.nft_contract.into_val(env));
                v.push_back(listing.token_id.into_val(env));
                v.push_back(listing.start_date.into_val(env));
                v.push_back(listing.end_date.into_val(env));
                v.push_back(listing.expires.into_val(env));
                v.push_back(rental_fee.into_val(env));
            }
            MarketplaceEvent::NftUnlisted(unlist_sender, nft_contract, token_id, refund) => {
                v.push_back(unlist_sender.into_val(env));
                v.push_back(nft_contract.into_val(env));
                v.push_back(token_id.into_val(env));
                v.push_back(refund.into_val(env));
            }
        }

        env.events().publish((Symbol::new(env, self.name()),), v)
    }
}
