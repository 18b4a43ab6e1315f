use super::*;

#[test]
fn test_fresh_database_hydrates_the_default_catalog() {
    let store = create_test_storefront();

    let products = store.products();
    assert_eq!(products.len(), 7);
    assert_eq!(products[0].name, "RTX 4070 Ti");
    assert_eq!(products[6].name, "SSD Kingston NV2 2TB");
}

#[test]
fn test_corrupt_persisted_catalog_falls_back_to_defaults() {
    let storage = CatalogStorage::open_in_memory().unwrap();
    storage.save_raw(b"][ definitely not a catalog").unwrap();

    let store = Storefront::with_storage(storage.clone());
    assert_eq!(store.products().len(), 7);

    // The defaults were written back over the corrupt payload
    let reloaded = storage.load().unwrap();
    assert_eq!(reloaded.len(), 7);
    assert_eq!(reloaded[0].name, "RTX 4070 Ti");
}

#[test]
fn test_persisted_catalog_wins_over_defaults() {
    let store = seeded_storefront(&[make_product(42, "Custom GPU", 1_000_000, 1, 0)]);

    assert_eq!(store.products().len(), 1);
    assert_eq!(store.products()[0].id, 42);
}

#[test]
fn test_add_product_prepends_and_assigns_max_plus_one() {
    let mut store = create_admin_storefront();

    let products = store.add_product(valid_draft()).unwrap();
    assert_eq!(products.len(), 8);
    assert_eq!(products[0].id, 8);
    assert_eq!(products[0].name, "Ryzen 7 7800X3D");
    // Existing products keep their order behind the new one
    assert_eq!(products[1].id, 1);
}

#[test]
fn test_id_assignment_skips_over_gaps() {
    let mut store = seeded_storefront(&[
        make_product(1, "A", 100, 1, 0),
        make_product(3, "B", 100, 1, 0),
    ]);
    store.login("admin@buildify.com", "12345").unwrap();

    let products = store.add_product(valid_draft()).unwrap();
    assert_eq!(products[0].id, 4);
}

#[test]
fn test_first_product_of_an_empty_catalog_gets_id_one() {
    let mut store = seeded_storefront(&[]);
    store.login("admin@buildify.com", "12345").unwrap();

    let products = store.add_product(valid_draft()).unwrap();
    assert_eq!(products[0].id, 1);
}

#[test]
fn test_add_product_requires_every_mandatory_field() {
    let mut store = create_admin_storefront();

    let missing = [
        make_draft("", "Procesadores", Some(100), "/img/x.webp"),
        make_draft("CPU", "", Some(100), "/img/x.webp"),
        make_draft("CPU", "Procesadores", None, "/img/x.webp"),
        make_draft("CPU", "Procesadores", Some(100), ""),
    ];

    for draft in missing {
        let err = store.add_product(draft).unwrap_err();
        assert!(matches!(err, StoreError::Validation { .. }));
        assert_eq!(store.products().len(), 7, "catalog mutated by invalid draft");
    }

    // No id was consumed by the failed attempts
    let products = store.add_product(valid_draft()).unwrap();
    assert_eq!(products[0].id, 8);
}

#[test]
fn test_add_product_defaults_stock_and_discount_to_zero() {
    let mut store = create_admin_storefront();

    let draft = make_draft("Teclado K70", "Periféricos", Some(450_000), "/img/k70.webp");
    let products = store.add_product(draft).unwrap();
    assert_eq!(products[0].stock, 0);
    assert_eq!(products[0].discount, 0);
}

#[test]
fn test_zero_price_draft_is_accepted() {
    let mut store = create_admin_storefront();

    let draft = make_draft("Sticker pack", "Periféricos", Some(0), "/img/stickers.webp");
    let products = store.add_product(draft).unwrap();
    assert_eq!(products[0].price, 0);
}

#[test]
fn test_update_stock_discount_leaves_other_fields_alone() {
    let mut store = create_admin_storefront();

    store.update_stock_discount(1, 9, 15).unwrap();

    let p = store.products().iter().find(|p| p.id == 1).unwrap();
    assert_eq!(p.stock, 9);
    assert_eq!(p.discount, 15);
    assert_eq!(p.name, "RTX 4070 Ti");
    assert_eq!(p.price, 3_200_000);
    assert_eq!(p.category, "Tarjetas Gráficas");
}

#[test]
fn test_update_unknown_id_is_a_silent_noop() {
    let mut store = create_admin_storefront();
    let before: Vec<i64> = store.products().iter().map(|p| p.stock).collect();

    store.update_stock_discount(999, 1, 1).unwrap();

    let after: Vec<i64> = store.products().iter().map(|p| p.stock).collect();
    assert_eq!(before, after);
}

#[test]
fn test_mutations_survive_a_reopen() {
    let storage = CatalogStorage::open_in_memory().unwrap();

    {
        let mut store = Storefront::with_storage(storage.clone());
        store.login("admin@buildify.com", "12345").unwrap();
        store.add_product(valid_draft()).unwrap();
        store.update_stock_discount(1, 2, 20).unwrap();
    }

    let store = Storefront::with_storage(storage);
    assert_eq!(store.products().len(), 8);
    assert_eq!(store.products()[0].name, "Ryzen 7 7800X3D");
    let p1 = store.products().iter().find(|p| p.id == 1).unwrap();
    assert_eq!((p1.stock, p1.discount), (2, 20));
}

#[test]
fn test_catalog_mutation_notifies_after_reconciling() {
    let mut store = create_admin_storefront();
    store.add_to_cart(1);

    let events = record_events(&mut store);
    store.update_stock_discount(1, 0, 0).unwrap();

    // Stock hit 0, so the line was gone by the time subscribers heard
    assert!(store.cart().is_empty());
    assert_eq!(events.borrow().as_slice(), &[StoreEvent::CatalogChanged]);
}
