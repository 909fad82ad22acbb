//! Printable receipt rendering.
//!
//! Produces a self-contained HTML document from a cart snapshot for the
//! printing collaborator. Data flows one way: nothing comes back from the
//! renderer into the core.

use anyhow::{bail, Result};
use chrono::{DateTime, FixedOffset};

use crate::domain::models::cart::Cart;

/// Renders the pre-checkout shopping list receipt.
#[derive(Debug, Clone)]
pub struct ReceiptService {
    store_name: String,
}

impl Default for ReceiptService {
    fn default() -> Self {
        Self::new()
    }
}

impl ReceiptService {
    pub fn new() -> Self {
        Self::with_store_name("SmartPOS")
    }

    pub fn with_store_name(store_name: impl Into<String>) -> Self {
        Self {
            store_name: store_name.into(),
        }
    }

    /// Render the cart as a printable HTML document. The totals shown are
    /// the cart's own derived values, so the receipt always matches what the
    /// operator sees. An empty cart is a validation failure.
    pub fn render(&self, cart: &Cart, now: DateTime<FixedOffset>) -> Result<String> {
        if cart.is_empty() {
            bail!("Cannot render a receipt for an empty cart");
        }

        let mut rows = String::new();
        for item in cart.items() {
            rows.push_str(&format!(
                "      <div class=\"item-row\">\n        <span class=\"item-name\">{}</span>\n        <span class=\"item-qty\">x{}</span>\n        <span class=\"item-price\">¥{:.2}</span>\n      </div>\n",
                escape_html(&item.product.name),
                item.quantity,
                item.line_total()
            ));
        }

        Ok(format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <title>Sales Receipt</title>
    <style>
      body {{ font-family: 'Courier New', Courier, monospace; padding: 20px; max-width: 320px; margin: 0 auto; color: #000; }}
      .header {{ text-align: center; border-bottom: 2px dashed #000; padding-bottom: 10px; margin-bottom: 15px; }}
      .store-title {{ font-size: 20px; font-weight: bold; margin-bottom: 5px; }}
      .meta {{ font-size: 12px; color: #555; }}
      .item-row {{ display: flex; justify-content: space-between; margin-bottom: 8px; font-size: 14px; }}
      .item-name {{ flex: 1; padding-right: 10px; }}
      .item-qty {{ width: 40px; text-align: center; }}
      .item-price {{ width: 70px; text-align: right; }}
      .divider {{ border-top: 1px dashed #000; margin: 15px 0; }}
      .total-row {{ display: flex; justify-content: space-between; font-weight: bold; font-size: 18px; margin-top: 5px; }}
      .footer {{ text-align: center; font-size: 12px; margin-top: 25px; color: #666; }}
      @media print {{
        @page {{ margin: 0; }}
        body {{ padding: 15px; }}
      }}
    </style>
  </head>
  <body>
    <div class="header">
      <div class="store-title">{store_name}</div>
      <div class="meta">Date: {date}</div>
    </div>

    <div class="items">
{rows}    </div>

    <div class="divider"></div>

    <div class="total-row">
      <span>Total</span>
      <span>¥{total:.2}</span>
    </div>

    <div class="footer">
      <p>--- For reference only ---</p>
      <p>Thank you, see you next time</p>
    </div>
  </body>
</html>
"#,
            store_name = escape_html(&self.store_name),
            date = now.format("%Y-%m-%d %H:%M:%S"),
            rows = rows,
            total = cart.total()
        ))
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
