//! Generic paginated, filtered, soft-deletable listing.
//!
//! One engine parameterized over the entity descriptor replaces the
//! per-entity copies of the same pagination and filter-parsing glue. The
//! query-string grammar it consumes:
//!
//! - `current=<n>&pageSize=<n>` - pagination control, stripped before the
//!   remaining pairs become data constraints
//! - `sort=-<field>` / `sort=<field>` - descending / ascending
//! - `<field>=<value>` - equality on an allow-listed column; `name` is
//!   rewritten into a case-insensitive substring match
//! - `populate=<rel>,<rel>` - relation paths to resolve inline
//! - `includeDeleted=true` - opt in to soft-deleted rows

use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, Order, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Value,
};
use serde::Serialize;

use super::audit::validate_id;
use crate::domain::ServiceError;
use crate::models::CatalogEntity;

pub const DEFAULT_PAGE_SIZE: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub descending: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub filters: Vec<(String, String)>,
    pub sort: Option<SortSpec>,
    pub populate: Vec<String>,
    pub include_deleted: bool,
}

impl ListQuery {
    /// Parse a raw query string. Control parameters (`current`, `pageSize`)
    /// are stripped here so they never become data predicates; field names
    /// arriving camelCase are normalized to snake_case.
    pub fn parse(qs: &str) -> Self {
        let mut query = ListQuery::default();

        for (key, value) in url::form_urlencoded::parse(qs.as_bytes()) {
            match key.as_ref() {
                "current" | "pageSize" | "page_size" => {}
                "sort" => {
                    let (field, descending) = match value.strip_prefix('-') {
                        Some(field) => (field, true),
                        None => (value.as_ref(), false),
                    };
                    query.sort = Some(SortSpec {
                        field: snake_case(field),
                        descending,
                    });
                }
                "populate" => {
                    query.populate.extend(
                        value
                            .split(',')
                            .map(str::trim)
                            .filter(|p| !p.is_empty())
                            .map(snake_case),
                    );
                }
                "includeDeleted" | "include_deleted" => {
                    query.include_deleted = value == "true" || value == "1";
                }
                field => query
                    .filters
                    .push((snake_case(field), value.into_owned())),
            }
        }

        query
    }

    pub fn populates(&self, relation: &str) -> bool {
        self.populate.iter().any(|p| p == relation)
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PageMeta {
    pub current: u64,
    #[serde(rename = "pageSize")]
    pub page_size: u64,
    pub pages: u64,
    pub total: u64,
}

#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub meta: PageMeta,
    pub result: Vec<T>,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            meta: self.meta,
            result: self.result.into_iter().map(f).collect(),
        }
    }
}

/// Run a list call: clamp pagination, apply the filter, count the full
/// match set, then fetch one page. The count runs over the same condition
/// (without skip/limit) so `pages = ceil(total / page_size)` is exact for
/// any page window.
pub async fn run<E>(
    db: &DatabaseConnection,
    current: i64,
    page_size: i64,
    query: &ListQuery,
) -> Result<Page<E::Model>, ServiceError>
where
    E: CatalogEntity,
    E::Model: Sync,
{
    let page = current.max(1) as u64;
    let page_size = if page_size > 0 {
        page_size as u64
    } else {
        DEFAULT_PAGE_SIZE
    };
    let offset = (page - 1) * page_size;

    let condition = build_condition::<E>(query);

    let total = E::find().filter(condition.clone()).count(db).await?;
    let pages = total.div_ceil(page_size);

    let (sort_column, sort_order) = resolve_sort::<E>(query);
    let result = E::find()
        .filter(condition)
        .order_by(sort_column, sort_order)
        .offset(offset)
        .limit(page_size)
        .all(db)
        .await?;

    Ok(Page {
        meta: PageMeta {
            current: page,
            page_size,
            pages,
            total,
        },
        result,
    })
}

/// Point lookup. A malformed id short-circuits before the store; a valid id
/// with no record is NotFound - callers can tell the two apart. Soft-deleted
/// records are invisible here, like in any default query.
pub async fn find_by_id<E>(
    db: &DatabaseConnection,
    id: &str,
    entity: &str,
) -> Result<E::Model, ServiceError>
where
    E: CatalogEntity,
    E::Model: Sync,
{
    validate_id(id, entity)?;

    E::find()
        .filter(E::id_column().eq(id))
        .filter(E::deleted_column().eq(false))
        .one(db)
        .await?
        .ok_or_else(|| ServiceError::NotFound(entity.to_string()))
}

fn build_condition<E: CatalogEntity>(query: &ListQuery) -> Condition {
    let mut condition = Condition::all();

    // Soft-delete exclusion is this engine's own predicate, not a store
    // plugin behavior the caller has to trust.
    if !query.include_deleted {
        condition = condition.add(E::deleted_column().eq(false));
    }

    for (field, raw) in &query.filters {
        if field == "name" {
            if let Some(column) = E::fuzzy_column() {
                condition = condition.add(column.contains(raw));
                continue;
            }
        }
        if let Some(column) = E::filter_column(field) {
            condition = condition.add(column.eq(coerce(raw)));
        }
        // Unknown fields are dropped: junk in the query string never
        // becomes a data predicate.
    }

    condition
}

fn resolve_sort<E: CatalogEntity>(query: &ListQuery) -> (E::Column, Order) {
    match &query.sort {
        Some(spec) => match E::filter_column(&spec.field) {
            Some(column) => (
                column,
                if spec.descending {
                    Order::Desc
                } else {
                    Order::Asc
                },
            ),
            // Unknown sort key: fall back to most-recently-updated first
            None => (E::updated_at_column(), Order::Desc),
        },
        None => (E::updated_at_column(), Order::Desc),
    }
}

// SQLite coerces text to numbers when comparing against INTEGER columns,
// but booleans need an explicit typed value.
fn coerce(raw: &str) -> Value {
    match raw {
        "true" => true.into(),
        "false" => false.into(),
        _ => match raw.parse::<i64>() {
            Ok(n) => n.into(),
            Err(_) => raw.to_owned().into(),
        },
    }
}

fn snake_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    for ch in field.chars() {
        if ch.is_ascii_uppercase() {
            out.push('_');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_pagination_control_params() {
        let query = ListQuery::parse("current=3&pageSize=20&status=PENDING");
        assert_eq!(
            query.filters,
            vec![("status".to_string(), "PENDING".to_string())]
        );
    }

    #[test]
    fn parses_descending_sort_and_normalizes_case() {
        let query = ListQuery::parse("sort=-updatedAt");
        assert_eq!(
            query.sort,
            Some(SortSpec {
                field: "updated_at".to_string(),
                descending: true,
            })
        );

        let query = ListQuery::parse("sort=name");
        assert_eq!(
            query.sort,
            Some(SortSpec {
                field: "name".to_string(),
                descending: false,
            })
        );
    }

    #[test]
    fn parses_populate_list() {
        let query = ListQuery::parse("populate=product,type");
        assert!(query.populates("product"));
        assert!(query.populates("type"));
        assert!(!query.populates("user"));
    }

    #[test]
    fn include_deleted_requires_explicit_opt_in() {
        assert!(!ListQuery::parse("name=tea").include_deleted);
        assert!(ListQuery::parse("includeDeleted=true").include_deleted);
        assert!(ListQuery::parse("includeDeleted=1").include_deleted);
        assert!(!ListQuery::parse("includeDeleted=no").include_deleted);
    }

    #[test]
    fn camel_case_filter_keys_become_snake_case() {
        let query = ListQuery::parse("typeId=abc&isActive=true");
        assert_eq!(
            query.filters,
            vec![
                ("type_id".to_string(), "abc".to_string()),
                ("is_active".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn decodes_url_encoded_values() {
        let query = ListQuery::parse("name=green%20tea");
        assert_eq!(
            query.filters,
            vec![("name".to_string(), "green tea".to_string())]
        );
    }
}
