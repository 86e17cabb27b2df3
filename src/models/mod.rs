pub mod interaction;
pub mod product;
pub mod product_type;
pub mod rating;
pub mod rating_history;
pub mod user;

pub use product::Product;
pub use product_type::ProductType;
pub use rating::Rating;

use sea_orm::EntityTrait;

/// Descriptor every catalog entity implements so the generic listing and
/// audit services can operate on it: which column is the record id, which
/// one carries the soft-delete flag, which fields callers may filter and
/// sort on.
///
/// The `name` filter is special-cased through `fuzzy_column`: catalog search
/// is a case-insensitive substring match, not exact equality.
pub trait CatalogEntity: EntityTrait {
    fn id_column() -> Self::Column;
    fn updated_at_column() -> Self::Column;
    fn updated_by_column() -> Self::Column;
    fn deleted_column() -> Self::Column;
    fn deleted_at_column() -> Self::Column;
    fn deleted_by_column() -> Self::Column;

    /// Column matched as a case-insensitive substring when the filter
    /// carries a `name` constraint. `None` for entities without one.
    fn fuzzy_column() -> Option<Self::Column> {
        None
    }

    /// Allow-list mapping an external field name (snake_case) to a column.
    /// Unknown fields resolve to `None` and are ignored by the query engine.
    fn filter_column(field: &str) -> Option<Self::Column>;
}
