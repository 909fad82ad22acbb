//! Command structs for catalog management.

/// Request to add or edit a catalog product.
///
/// `id: None` means "add": a fresh identifier is generated. `Some(id)` means
/// "edit": the existing entry is replaced in place. Absent category and
/// color fall back to the standard defaults.
#[derive(Debug, Clone, Default)]
pub struct SaveProductCommand {
    pub id: Option<String>,
    pub name: String,
    pub price: f64,
    pub cost: f64,
    pub category: Option<String>,
    pub color: Option<String>,
}
