//! Order hand-off message builders.
//!
//! Factory functions mapping the cart to the outbound WhatsApp text and its
//! `wa.me` link. The core's responsibility ends at producing the message and
//! the URL; opening the messaging app is the UI adapter's job.

use url::Url;

use magma_core::{Item, Price};

use crate::error::CartError;

/// Build the order message for the given items.
///
/// The message is a deterministic function of the items: a greeting, one
/// line per item with its formatted price, the total, the item count, and a
/// closing request for delivery/availability confirmation.
///
/// # Errors
///
/// Returns [`CartError::EmptyCart`] when there are no items; callers must
/// check this before any external hand-off.
pub fn format_order(items: &[Item]) -> Result<String, CartError> {
    if items.is_empty() {
        return Err(CartError::EmptyCart);
    }

    let mut message = String::from("¡Hola! Quiero realizar el siguiente pedido:\n\n");
    for item in items {
        message.push_str(&format!("▫️ {} - {}\n", item.name, item.unit_price));
    }

    let total: Price = items.iter().map(|item| item.unit_price).sum();
    message.push_str(&format!("\n💰 *TOTAL: {total}*"));
    message.push_str(&format!("\n📦 Total de productos: {}", items.len()));

    message.push_str("\n\n📋 Por favor, confirmen disponibilidad y forma de entrega.");
    message.push_str("\n📍 Preferencia de entrega: ________");
    message.push_str("\n\n¡Gracias! 🛍️");

    Ok(message)
}

/// Build the `wa.me` hand-off link for an order message.
///
/// # Errors
///
/// Returns [`url::ParseError`] if `phone` does not form a valid URL path
/// segment; configuration validates the phone up front, so this is not
/// expected in practice.
pub fn whatsapp_url(message: &str, phone: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!("https://wa.me/{phone}"))?;
    url.set_query(Some(&format!("text={}", urlencoding::encode(message))));
    Ok(url)
}

/// Bank transfer details shown next to the cart.
///
/// The core only produces the text; the copy-to-clipboard affordance lives
/// in the UI adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentInfo {
    /// Transfer alias.
    pub alias: &'static str,
    /// Account holder.
    pub holder: &'static str,
    /// Bank name.
    pub bank: &'static str,
}

impl PaymentInfo {
    /// The store's transfer details.
    pub const MAGMA: Self = Self {
        alias: "MF.INDUMENTARIAS",
        holder: "Mario R. Fernández",
        bank: "Lemon",
    };

    /// The transfer details as a display message.
    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Alias para transferencias: *{}*\nTitular: {}\nBanco: {}",
            self.alias, self.holder, self.bank
        )
    }
}
