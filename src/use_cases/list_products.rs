use serde_json::Value;

use crate::domain::entities::{Product, ProductRow};
use crate::domain::errors::CatalogError;
use crate::domain::ports::ProductCatalog;

// Product listing use case with an injected catalog.
pub struct ListProductsUseCase<'a, C: ?Sized> {
    pub catalog: &'a C,
}

impl<C> ListProductsUseCase<'_, C>
where
    C: ProductCatalog + ?Sized,
{
    pub async fn execute(&self) -> Result<Vec<Product>, CatalogError> {
        let rows = self.catalog.list_products().await?;

        // Keep the query order; the catalog already sorts by creation time.
        rows.into_iter().map(map_row).collect()
    }
}

fn map_row(row: ProductRow) -> Result<Product, CatalogError> {
    let id = row
        .get("id")
        .and_then(Value::as_i64)
        .ok_or_else(|| CatalogError::MalformedRow("id must be an integer".to_string()))?;

    Ok(Product {
        id,
        name: optional_string(&row, "name")?.unwrap_or_default(),
        headline: optional_string(&row, "headline")?,
        description: optional_string(&row, "description")?,
        price_cents: optional_integer(&row, "price_cents")?,
        image_url: optional_string(&row, "image_url")?,
    })
}

// Missing and null columns both count as absent.
fn optional_string(row: &ProductRow, column: &str) -> Result<Option<String>, CatalogError> {
    match row.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(CatalogError::MalformedRow(format!(
            "{column} must be a string"
        ))),
    }
}

fn optional_integer(row: &ProductRow, column: &str) -> Result<Option<i64>, CatalogError> {
    match row.get(column) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value.as_i64().map(Some).ok_or_else(|| {
            CatalogError::MalformedRow(format!("{column} must be an integer"))
        }),
    }
}
