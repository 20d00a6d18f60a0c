use crate::types::{Error, PAYMENT_TOKEN};
use common::{nft::interface::RentableNftClient, storage::get_data};
use soroban_sdk::{token, Address, Env};

pub fn get_nft_client<'a>(env: &Env, nft_contract: &Address) -> RentableNftClient<'a> {
    RentableNftClient::new(env, nft_contract)
}

pub fn get_payment_client<'a>(env: &Env) -> Result<token::Client<'a>, Error> {
    let token_addr: Address = get_data(env, &PAYMENT_TOKEN).ok_or(Error::NotInitialized)?;
    Ok(token::Client::new(env, &token_addr))
}
