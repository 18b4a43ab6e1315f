//! Built-in default catalog
//!
//! Seed data used when nothing usable is persisted: seven products, one
//! per category.

use shared::models::Product;

/// The default product list (ids 1..=7)
pub fn default_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "RTX 4070 Ti".to_string(),
            price: 3_200_000,
            stock: 5,
            discount: 0,
            image: "/img/4070ti.webp".to_string(),
            desc: Some("GPU potente para gaming y contenido 4K.".to_string()),
            category: "Tarjetas Gráficas".to_string(),
        },
        Product {
            id: 2,
            name: "Intel Core i7-13700K".to_string(),
            price: 2_500_000,
            stock: 3,
            discount: 0,
            image: "/img/corei7.webp".to_string(),
            desc: Some(
                "Procesador Intel 13ª generación, ideal para gaming y multitarea.".to_string(),
            ),
            category: "Procesadores".to_string(),
        },
        Product {
            id: 3,
            name: "Kingston Fury Beast 32GB".to_string(),
            price: 650_000,
            stock: 8,
            discount: 0,
            image: "/img/kingston-fury.webp".to_string(),
            desc: None,
            category: "Memoria RAM".to_string(),
        },
        Product {
            id: 4,
            name: "ASUS Z790 TUF Gaming".to_string(),
            price: 1_200_000,
            stock: 4,
            discount: 0,
            image: "/img/Asusz790mb.webp".to_string(),
            desc: Some("Placa base robusta para CPUs Intel de última generación.".to_string()),
            category: "Motherboards".to_string(),
        },
        Product {
            id: 5,
            name: "Logitech G Pro X Mouse".to_string(),
            price: 480_000,
            stock: 6,
            discount: 0,
            image: "/img/LogiGMouse.webp".to_string(),
            desc: Some("Mouse ultraligero y preciso para gaming profesional.".to_string()),
            category: "Periféricos".to_string(),
        },
        Product {
            id: 6,
            name: "Corsair RM850x 850W Gold".to_string(),
            price: 850_000,
            stock: 7,
            discount: 0,
            image: "/img/fuente850w.webp".to_string(),
            desc: Some("Fuente modular 80+ Gold, silenciosa y confiable.".to_string()),
            category: "Fuentes".to_string(),
        },
        Product {
            id: 7,
            name: "SSD Kingston NV2 2TB".to_string(),
            price: 700_000,
            stock: 10,
            discount: 0,
            image: "/img/ssd2tb.webp".to_string(),
            desc: Some("Unidad NVMe rápida de 2TB para almacenamiento veloz.".to_string()),
            category: "Almacenamiento".to_string(),
        },
    ]
}
