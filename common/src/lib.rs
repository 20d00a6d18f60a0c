#![no_std]

pub mod nft {
    pub mod interface;
    pub mod types;
}

pub mod storage;
