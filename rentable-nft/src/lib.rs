#![no_std]

pub mod contract;
mod events;
mod utils;
