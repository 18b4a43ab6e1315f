//! Checkout Handoff
//!
//! Builds the outbound order message and the wa.me link handed to the
//! external link-opening collaborator. The handoff is one-way; nothing
//! confirms delivery.

use shared::{StoreError, StoreResult};

use crate::cart::Cart;
use crate::pricing;

/// Destination WhatsApp number
pub const WHATSAPP_NUMBER: &str = "573154054569";

/// Human-readable order summary: item list plus formatted total
///
/// Fails with [`StoreError::EmptyCart`] so the caller can surface the
/// blocking notice instead of sending an empty order.
pub fn checkout_message(cart: &Cart) -> StoreResult<String> {
    if cart.is_empty() {
        return Err(StoreError::EmptyCart);
    }

    let items = cart
        .lines()
        .iter()
        .map(|l| format!("{} x{}", l.name, l.qty))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!(
        "Hola, quiero comprar: {}. Total: COP {}",
        items,
        pricing::format_cop(cart.total())
    ))
}

/// wa.me link carrying the URL-encoded message
pub fn whatsapp_link(message: &str) -> String {
    let encoded: String = url::form_urlencoded::byte_serialize(message.as_bytes()).collect();
    format!("https://wa.me/{}?text={}", WHATSAPP_NUMBER, encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Product;

    fn product(id: i64, name: &str, price: i64, stock: i64, discount: i64) -> Product {
        Product {
            id,
            name: name.to_string(),
            price,
            stock,
            discount,
            image: "/img/test.webp".to_string(),
            desc: None,
            category: "Periféricos".to_string(),
        }
    }

    #[test]
    fn test_empty_cart_produces_no_message() {
        let cart = Cart::new();
        assert!(matches!(checkout_message(&cart), Err(StoreError::EmptyCart)));
    }

    #[test]
    fn test_single_item_message() {
        let mut cart = Cart::new();
        cart.add(&product(1, "RTX 4070 Ti", 3_200_000, 5, 0));

        assert_eq!(
            checkout_message(&cart).unwrap(),
            "Hola, quiero comprar: RTX 4070 Ti x1. Total: COP 3,200,000"
        );
    }

    #[test]
    fn test_multiple_items_keep_cart_order() {
        let mut cart = Cart::new();
        cart.add(&product(1, "RTX 4070 Ti", 3_200_000, 5, 0));
        cart.add(&product(2, "Logitech G Pro X Mouse", 480_000, 6, 0));
        cart.change_qty(2, 2);

        assert_eq!(
            checkout_message(&cart).unwrap(),
            "Hola, quiero comprar: RTX 4070 Ti x1, Logitech G Pro X Mouse x2. \
             Total: COP 4,160,000"
        );
    }

    #[test]
    fn test_message_total_uses_discounted_prices() {
        let mut cart = Cart::new();
        cart.add(&product(1, "SSD Kingston NV2 2TB", 700_000, 10, 10));

        assert_eq!(
            checkout_message(&cart).unwrap(),
            "Hola, quiero comprar: SSD Kingston NV2 2TB x1. Total: COP 630,000"
        );
    }

    #[test]
    fn test_whatsapp_link_encodes_the_message() {
        let link = whatsapp_link("Hola, quiero comprar: RTX x1. Total: COP 3,200,000");
        assert!(link.starts_with("https://wa.me/573154054569?text="));
        assert_eq!(
            link,
            "https://wa.me/573154054569?text=Hola%2C+quiero+comprar%3A+RTX+x1.+Total%3A+COP+3%2C200%2C000"
        );
    }
}
