use soroban_sdk::{Address, Env, IntoVal, Symbol, Val, Vec};

pub enum NftEvent {
    Initialized(Address),
    Upgraded(u32),
    Mint(Address, u64),
    Burn(Address, u64),
    Transfer(Address, Address, u64),
    Approval(Address, Option<Address>, u64),
    ApprovalForAll(Address, Address, bool),
    UpdateUser(u64, Option<Address>, u64),
}

impl NftEvent {
    pub fn name(&self) -> &'static str {
        match self {
            NftEvent::Initialized(..) => stringify!(Initialized),
            NftEvent::Upgraded(..) => stringify!(Upgraded),
            NftEvent::Mint(..) => stringify!(Mint),
            NftEvent::Burn(..) => stringify!(Burn),
            NftEvent::Transfer(..) => stringify!(Transfer),
            NftEvent::Approval(..) => stringify!(Approval),
            NftEvent::ApprovalForAll(..) => stringify!(ApprovalForAll),
            NftEvent::UpdateUser(..) => stringify!(UpdateUser),
        }
    }

    pub fn publish(&self, env: &Env) {
        let mut v: Vec<Val> = Vec::new(env);

        match self {
            NftEvent::Initialized(marketplace) => {
                v.push_back(marketplace.into_val(env));
            }
            NftEvent::Upgraded(version) => {
                v.push_back(version.into_val(env));
            }
            NftEvent::Mint(to, token_id) => {
                v.push_back(to.into_val(env));
                v.push_back(token_id.into_val(env));
            }
            NftEvent::Burn(owner, token_id) => {
                v.push_back(owner.into_val(env));
                v.push_back(token_id.into_val(env));
            }
            NftEvent::Transfer(from, to, token_id) => {
                v.push_back(from.into_val(env));
                v.push_back(to.into_val(env));
                v.push_back(token_id.into_val(env));
            }
            NftEvent::Approval(owner, approved, token_id) => {
                v.push_back(owner.into_val(env));
                v.push_back(approved.clone().into_val(env));
                v.push_back(token_id.into_val(env));
            }
            NftEvent::ApprovalForAll(owner, operator, approved) => {
                v.push_back(owner.into_val(env));
                v.push_back(operator.into_val(env));
                v.push_back((*approved).into_val(env));
            }
            NftEvent::UpdateUser(token_id, user, expires) => {
                v.push_back(token_id.into_val(env));
                v.push_back(user.clone().into_val(env));
                v.push_back(expires.into_val(env));
            }
        }

        env.events().publish((Symbol::new(env, self.name()),), v)
    }
}
