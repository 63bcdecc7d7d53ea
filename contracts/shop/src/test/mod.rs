#![cfg(test)]

pub mod catalog_test;

use crate::types::ProductInput;
use crate::{LimeShop, LimeShopClient};
use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    token, Address, Env, String,
};

pub fn setup_test() -> (
    Env,
    LimeShopClient<'static>,
    Address,
    Address,
    token::TokenClient<'static>,
    token::StellarAssetClient<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    env.ledger().set(LedgerInfo {
        timestamp: 1000,
        protocol_version: 23,
        sequence_number: 100,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 3110400,
    });

    let contract_id = env.register(LimeShop, ());
    let client = LimeShopClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let buyer = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_address = token_contract.address();
    let token_client = token::TokenClient::new(&env, &token_address);
    let token_admin_client = token::StellarAssetClient::new(&env, &token_address);

    token_admin_client.mint(&buyer, &10_000_000);

    client.initialize(&admin, &token_address);

    (env, client, admin, buyer, token_client, token_admin_client)
}

pub fn advance_ledgers(env: &Env, ledgers: u32) {
    env.ledger().set(LedgerInfo {
        timestamp: env.ledger().timestamp(),
        protocol_version: 23,
        sequence_number: env.ledger().sequence() + ledgers,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 3110400,
    });
}

pub fn lime(env: &Env, name: &str, quantity: u32, price: i128) -> ProductInput {
    ProductInput {
        name: String::from_str(env, name),
        quantity,
        price,
    }
}
