use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, String, Symbol};

use crate::{
    events::NftEvent,
    utils::{
        clear_approval, clear_user, decrease_balance, get_admin, get_marketplace,
        get_user_info, increase_balance, is_approved_or_owner, is_operator, require_owner,
    },
};
use common::{
    nft::{
        interface::RentableNftInterface,
        types::{
            DataKey, Error, UserInfo, ADMIN, INTERFACE_ERC165, INTERFACE_ERC4907,
            INTERFACE_ERC721, INTERFACE_ERC721_METADATA, MARKETPLACE_CONTRACT,
        },
    },
    storage::{
        get_data, get_persistent, has_data, has_persistent, remove_persistent, store_data,
        store_persistent,
    },
};

const NAME: &str = "Rentable NFTs";
const SYMBOL: &str = "RNFT";

#[contract]
pub struct RentableNftContract;

#[contractimpl]
impl RentableNftInterface for RentableNftContract {
    fn initialize(env: Env, admin: Address, marketplace_contract_id: Address) -> Result<(), Error> {
        admin.require_auth();
        if has_data(&env, &ADMIN) {
            return Err(Error::AlreadyInitialized);
        }
        store_data(&env, &ADMIN, &admin);
        store_data(&env, &MARKETPLACE_CONTRACT, &marketplace_contract_id);
        store_data(&env, &DataKey::TokenCount, &0u64);
        store_data(&env, &DataKey::TotalSupply, &0u64);
        NftEvent::Initialized(marketplace_contract_id).publish(&env);
        Ok(())
    }

    fn version() -> u32 {
        1
    }

    fn upgrade(env: Env, new_wasm_hash: BytesN<32>) -> Result<(), Error> {
        let admin: Address = get_admin(&env)?;
        admin.require_auth();
        env.deployer().update_current_contract_wasm(new_wasm_hash);
        NftEvent::Upgraded(Self::version()).publish(&env);
        Ok(())
    }

    fn update_state(env: Env, state_key: Symbol, state_value: Address) -> Result<(), Error> {
        let admin: Address = get_admin(&env)?;
        admin.require_auth();

        if state_key != ADMIN && state_key != MARKETPLACE_CONTRACT {
            return Err(Error::StateNotAlreadySet);
        }

        store_data(&env, &state_key, &state_value);
        env.events()
            .publish((Symbol::new(&env, "state_updated"), state_key), state_value);

        Ok(())
    }

    fn name(env: Env) -> String {
        String::from_str(&env, NAME)
    }

    fn symbol(env: Env) -> String {
        String::from_str(&env, SYMBOL)
    }

    fn supports_interface(_env: Env, interface_id: u32) -> bool {
        matches!(
            interface_id,
            INTERFACE_ERC165 | INTERFACE_ERC721 | INTERFACE_ERC721_METADATA | INTERFACE_ERC4907
        )
    }

    fn mint(env: Env, to: Address, token_uri: String) -> Result<u64, Error> {
        to.require_auth();
        let marketplace: Address = get_marketplace(&env)?;

        let token_id: u64 = get_data::<_, u64>(&env, &DataKey::TokenCount).unwrap_or(0) + 1;
        let supply: u64 = get_data::<_, u64>(&env, &DataKey::TotalSupply).unwrap_or(0);

        store_persistent(&env, &DataKey::Owner(token_id), &to);
        store_persistent(&env, &DataKey::TokenUri(token_id), &token_uri);
        increase_balance(&env, &to);
        store_data(&env, &DataKey::TokenCount, &token_id);
        store_data(&env, &DataKey::TotalSupply, &(supply + 1));

        NftEvent::Mint(to.clone(), token_id).publish(&env);

        // Minters hand the marketplace operator rights so it can assign renters.
        if !is_operator(&env, &to, &marketplace) {
            store_persistent(&env, &DataKey::Operator(to.clone(), marketplace.clone()), &true);
            NftEvent::ApprovalForAll(to, marketplace, true).publish(&env);
        }

        Ok(token_id)
    }

    fn burn(env: Env, caller: Address, token_id: u64) -> Result<(), Error> {
        caller.require_auth();
        let owner: Address = require_owner(&env, token_id)?;
        if !is_approved_or_owner(&env, &caller, token_id)? {
            return Err(Error::NotOwnerNorApproved);
        }

        clear_user(&env, token_id);
        clear_approval(&env, token_id);
        remove_persistent(&env, &DataKey::Owner(token_id));
        remove_persistent(&env, &DataKey::TokenUri(token_id));
        decrease_balance(&env, &owner);

        let supply: u64 = get_data::<_, u64>(&env, &DataKey::TotalSupply).unwrap_or(0);
        store_data(&env, &DataKey::TotalSupply, &supply.saturating_sub(1));

        NftEvent::Burn(owner, token_id).publish(&env);
        Ok(())
    }

    fn owner_of(env: Env, token_id: u64) -> Result<Address, Error> {
        require_owner(&env, token_id)
    }

    fn balance_of(env: Env, owner: Address) -> u32 {
        crate::utils::balance(&env, &owner)
    }

    fn total_supply(env: Env) -> u64 {
        get_data(&env, &DataKey::TotalSupply).unwrap_or(0)
    }

    fn token_uri(env: Env, token_id: u64) -> Result<String, Error> {
        get_persistent(&env, &DataKey::TokenUri(token_id)).ok_or(Error::TokenNotFound)
    }

    fn exists(env: Env, token_id: u64) -> bool {
        has_persistent(&env, &DataKey::Owner(token_id))
    }

    fn approve(
        env: Env,
        caller: Address,
        approved: Option<Address>,
        token_id: u64,
    ) -> Result<(), Error> {
        caller.require_auth();
        let owner: Address = require_owner(&env, token_id)?;
        if caller != owner && !is_operator(&env, &owner, &caller) {
            return Err(Error::NotOwnerNorApproved);
        }

        match &approved {
            Some(spender) if *spender == owner => return Err(Error::InvalidApproval),
            Some(spender) => store_persistent(&env, &DataKey::Approved(token_id), spender),
            None => clear_approval(&env, token_id),
        }

        NftEvent::Approval(owner, approved, token_id).publish(&env);
        Ok(())
    }

    fn get_approved(env: Env, token_id: u64) -> Result<Option<Address>, Error> {
        require_owner(&env, token_id)?;
        Ok(crate::utils::get_approved(&env, token_id))
    }

    fn set_approval_for_all(
        env: Env,
        owner: Address,
        operator: Address,
        approved: bool,
    ) -> Result<(), Error> {
        owner.require_auth();
        if owner == operator {
            return Err(Error::InvalidApproval);
        }

        let key: DataKey = DataKey::Operator(owner.clone(), operator.clone());
        if approved {
            store_persistent(&env, &key, &true);
        } else {
            remove_persistent(&env, &key);
        }

        NftEvent::ApprovalForAll(owner, operator, approved).publish(&env);
        Ok(())
    }

    fn is_approved_for_all(env: Env, owner: Address, operator: Address) -> bool {
        is_operator(&env, &owner, &operator)
    }

    fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        token_id: u64,
    ) -> Result<(), Error> {
        spender.require_auth();
        let owner: Address = require_owner(&env, token_id)?;
        if owner != from {
            return Err(Error::IncorrectOwner);
        }
        if !is_approved_or_owner(&env, &spender, token_id)? {
            return Err(Error::NotOwnerNorApproved);
        }

        clear_approval(&env, token_id);
        if from != to {
            // A new owner never inherits the previous owner's renter.
            clear_user(&env, token_id);
            decrease_balance(&env, &from);
            increase_balance(&env, &to);
            store_persistent(&env, &DataKey::Owner(token_id), &to);
        }

        NftEvent::Transfer(from, to, token_id).publish(&env);
        Ok(())
    }

    fn set_user(
        env: Env,
        caller: Address,
        token_id: u64,
        user: Option<Address>,
        expires: u64,
    ) -> Result<(), Error> {
        caller.require_auth();
        if !is_approved_or_owner(&env, &caller, token_id)? {
            return Err(Error::NotOwnerNorApproved);
        }

        if user.is_none() && expires == 0 {
            remove_persistent(&env, &DataKey::UserInfo(token_id));
        } else {
            let info: UserInfo = UserInfo {
                user: user.clone(),
                expires,
            };
            store_persistent(&env, &DataKey::UserInfo(token_id), &info);
        }

        log!(&env, "user of token {} set until {}", token_id, expires);
        NftEvent::UpdateUser(token_id, user, expires).publish(&env);
        Ok(())
    }

    fn user_of(env: Env, token_id: u64) -> Option<Address> {
        let info: UserInfo = get_user_info(&env, token_id)?;
        if info.expires >= env.ledger().timestamp() {
            info.user
        } else {
            None
        }
    }

    fn user_expires(env: Env, token_id: u64) -> u64 {
        get_user_info(&env, token_id)
            .map(|info| info.expires)
            .unwrap_or(0)
    }
}
