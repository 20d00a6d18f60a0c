use super::types::Error;
use soroban_sdk::{contractclient, Address, BytesN, Env, String, Symbol};

/// Non-fungible token with an ERC4907-style rental role.
///
/// Ownership and the rental role (`user`) are tracked separately. The user
/// role lapses on its own once `user_expires` is in the past.
#[contractclient(name = "RentableNftClient")]
pub trait RentableNftInterface {
    fn initialize(env: Env, admin: Address, marketplace_contract_id: Address)
        -> Result<(), Error>;
    fn version() -> u32;
    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error>;
    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error>;
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn supports_interface(env: Env, interface_id: u32) -> bool;

    fn mint(env: Env, to: Address, token_uri: String) -> Result<u64, Error>;
    fn burn(env: Env, caller: Address, token_id: u64) -> Result<(), Error>;
    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error>;
    fn balance_of(env: Env, owner: Address) -> u32;
    fn total_supply(env: Env) -> u64;
    fn token_uri(env: Env, token_id: u64) -> Result<String, Error>;
    fn exists(env: Env, token_id: u64) -> bool;

    fn approve(
        env: Env,
        caller: Address,
        approved: Option<Address>,
        token_id: u64,
    ) -> Result<(), Error>;
    fn get_approved(env: Env, token_id: u64) -> Result<Option<Address>, Error>;
    fn set_approval_for_all(
        env: Env,
        owner: Address,
        operator: Address,
        approved: bool,
    ) -> Result<(), Error>;
    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool;
    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error>;

    fn set_user(
        env: Env,
        caller: Address,
        token_id: u64,
        user: Option<Address>,
        expires: u64,
    ) -> Result<(), Error>;
    fn user_of(env: Env, token_id: u64) -> Option<Address>;
    fn user_expires(env: Env, token_id: u64) -> u64;
}
