use super::*;
use shared::StoreError;
use std::cell::RefCell;
use std::rc::Rc;

fn create_test_storefront() -> Storefront {
    let storage = CatalogStorage::open_in_memory().unwrap();
    Storefront::with_storage(storage)
}

fn create_admin_storefront() -> Storefront {
    let mut store = create_test_storefront();
    store.login("admin@buildify.com", "12345").unwrap();
    store
}

/// Storefront hydrated from an explicitly seeded catalog
fn seeded_storefront(products: &[Product]) -> Storefront {
    let storage = CatalogStorage::open_in_memory().unwrap();
    storage.save(products).unwrap();
    Storefront::with_storage(storage)
}

fn make_product(id: i64, name: &str, price: i64, stock: i64, discount: i64) -> Product {
    Product {
        id,
        name: name.to_string(),
        price,
        stock,
        discount,
        image: format!("/img/{}.webp", id),
        desc: None,
        category: "Periféricos".to_string(),
    }
}

fn make_draft(name: &str, category: &str, price: Option<i64>, image: &str) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        category: category.to_string(),
        price,
        stock: None,
        discount: None,
        image: image.to_string(),
        desc: None,
    }
}

fn valid_draft() -> ProductDraft {
    ProductDraft {
        name: "Ryzen 7 7800X3D".to_string(),
        category: "Procesadores".to_string(),
        price: Some(2_100_000),
        stock: Some(4),
        discount: Some(5),
        image: "/img/7800x3d.webp".to_string(),
        desc: Some("CPU gaming con 3D V-Cache.".to_string()),
    }
}

/// Subscribe a recorder and return the shared event log
fn record_events(store: &mut Storefront) -> Rc<RefCell<Vec<StoreEvent>>> {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    store.subscribe(move |event| sink.borrow_mut().push(*event));
    events
}

mod test_catalog;
