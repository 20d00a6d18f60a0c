use soroban_sdk::{contracterror, contracttype, symbol_short, Address, Symbol};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    TokenNotFound = 3,
    NotOwnerNorApproved = 4,
    IncorrectOwner = 5,
    InvalidApproval = 6,
    StateNotAlreadySet = 7,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    TokenCount,                // Last token id handed out by `mint`
    TotalSupply,               // Tokens currently in circulation
    Owner(u64),                // Owner of each token id
    TokenUri(u64),             // Metadata uri of each token id
    Balance(Address),          // Number of tokens held by an address
    Approved(u64),             // Single-token approval
    Operator(Address, Address), // (owner, operator) approval for all tokens
    UserInfo(u64),             // Rental role of each token id
}

/// Rental role of a token: who may use it and until when.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UserInfo {
    pub user: Option<Address>,
    /// UNIX timestamp (seconds) after which `user` no longer holds the role.
    pub expires: u64,
}

pub const ADMIN: Symbol = symbol_short!("ADMIN");
pub const MARKETPLACE_CONTRACT: Symbol = symbol_short!("MAR_CA");

// ERC165-style interface identifiers
pub const INTERFACE_ERC165: u32 = 0x01ff_c9a7;
pub const INTERFACE_ERC721: u32 = 0x80ac_58cd;
pub const INTERFACE_ERC721_METADATA: u32 = 0x5b5e_139f;
pub const INTERFACE_ERC4907: u32 = 0xad09_2b5c;
