use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    NotRentableContract = 3,
    NotTokenOwner = 4,
    InsufficientListingFee = 5,
    InvalidPrice = 6,
    StartDateInPast = 7,
    EndDateBeforeStart = 8,
    AlreadyListed = 9,
    MarketplaceNotApproved = 10,
    ListingNotFound = 11,
    AlreadyRented = 12,
    RentalExceedsEndDate = 13,
    ExpiryInPast = 14,
    InsufficientRentalFee = 15,
    NotApprovedToUnlist = 16,
    InsufficientRefund = 17,
    InsufficientBalance = 18,
    InvalidListingFee = 19,
    ArithmeticOverflow = 20,
    StateNotAlreadySet = 21,
}

/// A token offered for timed rental.
///
/// `user` stays `None` and `expires` stays 0 until the token is rented.
/// All dates are UNIX timestamps in seconds.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    pub owner: Address,
    pub user: Option<Address>,
    pub nft_contract: Address,
    pub token_id: u64,
    pub price_per_day: i128,
    pub start_date: u64,
    pub end_date: u64,
    pub expires: u64,
}

impl Listing {
    pub fn is_rented_at(&self, now: u64) -> bool {
        self.user.is_some() && now <= self.expires
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingRef {
    pub nft_contract: Address,
    pub token_id: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Listing(Address, u64), // (nft contract, token id)
    ListingIndex,          // Every live listing, in listing order
}

pub const SECONDS_PER_DAY: u64 = 60 * 60 * 24;

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const PAYMENT_TOKEN: Symbol = symbol_short!("PAY_TOKEN");
pub const LISTING_FEE: Symbol = symbol_short!("LIST_FEE");
