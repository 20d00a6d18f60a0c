pub mod contract_clients;
pub mod helpers;
