use crate::errors::Error;
use crate::test::{lime, setup_test};
use soroban_sdk::{testutils::Address as _, vec, Address, String};

#[test]
fn test_index_starts_at_one() {
    let (_env, client, _, _, _, _) = setup_test();
    assert_eq!(client.index(), 1);
}

#[test]
fn test_add_product() {
    let (env, client, admin, _, _, _) = setup_test();

    let id = client.add_product(&admin, &lime(&env, "lime", 5, 500));
    assert_eq!(id, 1);
    assert_eq!(client.index(), 2);

    let product = client.get_product_by_id(&1);
    assert_eq!(product.name, String::from_str(&env, "lime"));
    assert_eq!(product.quantity, 5);
    assert_eq!(product.price, 500);
}

#[test]
fn test_add_product_merges_by_name() {
    let (env, client, admin, _, _, _) = setup_test();

    let first = client.add_product(&admin, &lime(&env, "lime", 5, 500));
    // Same name, different price: quantity is absorbed, price is not the
    // match key and the stored one is kept.
    let second = client.add_product(&admin, &lime(&env, "lime", 3, 900));

    assert_eq!(first, second);
    assert_eq!(client.index(), 2);

    let product = client.get_product_by_id(&first);
    assert_eq!(product.quantity, 8);
    assert_eq!(product.price, 500);
}

#[test]
fn test_add_product_requires_owner() {
    let (env, client, _, _, _, _) = setup_test();

    let intruder = Address::generate(&env);
    let result = client.try_add_product(&intruder, &lime(&env, "lime", 5, 500));
    assert_eq!(result, Err(Ok(Error::NotOwner)));
    assert_eq!(client.index(), 1);
}

#[test]
fn test_add_product_zero_quantity() {
    let (env, client, admin, _, _, _) = setup_test();

    let result = client.try_add_product(&admin, &lime(&env, "lime", 0, 500));
    assert_eq!(result, Err(Ok(Error::InvalidQuantity)));
    assert_eq!(client.index(), 1);
    assert_eq!(client.get_products().len(), 0);
}

#[test]
fn test_add_product_empty_name() {
    let (env, client, admin, _, _, _) = setup_test();

    let result = client.try_add_product(&admin, &lime(&env, "", 5, 500));
    assert_eq!(result, Err(Ok(Error::InvalidName)));
    assert_eq!(client.index(), 1);
}

#[test]
fn test_add_products_batch() {
    let (env, client, admin, _, _, _) = setup_test();

    let ids = client.add_products(
        &admin,
        &vec![&env, lime(&env, "lime", 5, 500), lime(&env, "lemon", 2, 300)],
    );
    assert_eq!(ids, vec![&env, 1, 2]);
    assert_eq!(client.index(), 3);
    assert_eq!(client.get_products().len(), 2);
}

#[test]
fn test_add_products_empty_batch() {
    let (env, client, admin, _, _, _) = setup_test();

    let result = client.try_add_products(&admin, &vec![&env]);
    assert_eq!(result, Err(Ok(Error::EmptyBatch)));
    assert_eq!(client.index(), 1);
}

#[test]
fn test_add_products_all_or_nothing() {
    let (env, client, admin, _, _, _) = setup_test();

    let result = client.try_add_products(
        &admin,
        &vec![&env, lime(&env, "lime", 5, 500), lime(&env, "lemon", 0, 300)],
    );
    assert_eq!(result, Err(Ok(Error::InvalidQuantity)));

    // The valid first item must not have landed.
    assert_eq!(client.index(), 1);
    assert_eq!(client.get_products().len(), 0);
}

#[test]
fn test_add_products_merge_within_batch() {
    let (env, client, admin, _, _, _) = setup_test();

    let ids = client.add_products(
        &admin,
        &vec![&env, lime(&env, "lime", 5, 500), lime(&env, "lime", 4, 500)],
    );
    assert_eq!(ids, vec![&env, 1, 1]);
    assert_eq!(client.index(), 2);
    assert_eq!(client.get_product_by_id(&1).quantity, 9);
}

#[test]
fn test_get_product_by_id_unknown_is_placeholder() {
    let (env, client, _, _, _, _) = setup_test();

    let product = client.get_product_by_id(&42);
    assert_eq!(product.id, 42);
    assert_eq!(product.name, String::from_str(&env, ""));
    assert_eq!(product.quantity, 0);
    assert_eq!(product.price, 0);
}

#[test]
fn test_get_products_keeps_sold_out_slots() {
    let (env, client, admin, buyer, _, _) = setup_test();

    client.add_product(&admin, &lime(&env, "lime", 1, 500));
    client.add_product(&admin, &lime(&env, "lemon", 2, 300));
    client.buy_products(&buyer, &vec![&env, 1], &500);

    let products = client.get_products();
    assert_eq!(products.len(), 2);
    // Sold-out slot stays listed; callers filter it themselves.
    assert_eq!(products.get(0).unwrap().quantity, 0);
    assert_eq!(
        products.get(0).unwrap().name,
        String::from_str(&env, "lime")
    );
}

#[test]
fn test_initialize_twice() {
    let (env, client, admin, _, _, _) = setup_test();

    let token = Address::generate(&env);
    let result = client.try_initialize(&admin, &token);
    assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
}
