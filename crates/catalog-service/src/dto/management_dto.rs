//! Management envelopes for the `POST /v1/product` and
//! `POST /v1/product_category` endpoints.
//!
//! A single request body carries an `action` (`add`, `edit` or `delete`)
//! plus the entity fields. Each envelope is checked and turned into a
//! typed command before any service call.

use crate::dto::{
    CreateProductCategoryRequest, CreateProductRequest, UpdateProductCategoryRequest,
    UpdateProductRequest,
};
use catalog_core::{CatalogError, CatalogResult, ProductCategoryId, ProductId};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

/// Management action requested by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ManagementAction {
    Add,
    Edit,
    Delete,
}

impl FromStr for ManagementAction {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(CatalogError::validation("Missing required parameter: action")),
            "add" => Ok(Self::Add),
            "edit" => Ok(Self::Edit),
            "delete" => Ok(Self::Delete),
            other => Err(CatalogError::Validation(format!(
                "Invalid action '{}': expected add, edit or delete",
                other
            ))),
        }
    }
}

impl fmt::Display for ManagementAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "add",
            Self::Edit => "edit",
            Self::Delete => "delete",
        };
        f.write_str(name)
    }
}

fn required<T>(value: Option<T>, field: &str) -> CatalogResult<T> {
    value.ok_or_else(|| CatalogError::Validation(format!("{}: is required", field)))
}

/// Checks the id rule shared by both envelopes: `add` must not carry an
/// id, `edit` and `delete` must.
fn check_id(action: ManagementAction, id_is_unset: bool) -> CatalogResult<()> {
    match (action, id_is_unset) {
        (ManagementAction::Add, false) => Err(CatalogError::validation(
            "Invalid request: id must not be set when adding",
        )),
        (ManagementAction::Edit | ManagementAction::Delete, true) => Err(CatalogError::Validation(
            format!("Invalid request: id is required to {}", action),
        )),
        _ => Ok(()),
    }
}

/// Body of `POST /v1/product`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ProductManagementRequest {
    /// One of `add`, `edit`, `delete`.
    #[serde(default)]
    pub action: String,
    /// Product ID; must be zero or absent for `add`.
    #[serde(default)]
    pub id: i64,
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub stock: Option<i32>,
    pub category_id: Option<i32>,
}

/// A checked product management request.
#[derive(Debug, Clone)]
pub enum ProductCommand {
    Add(CreateProductRequest),
    Edit(ProductId, UpdateProductRequest),
    Delete(ProductId),
}

impl ProductManagementRequest {
    /// Checks the action and id rules and builds the command.
    pub fn into_command(self) -> CatalogResult<ProductCommand> {
        let action: ManagementAction = self.action.parse()?;
        let id = ProductId::new(self.id);
        check_id(action, id.is_unset())?;

        match action {
            ManagementAction::Add => Ok(ProductCommand::Add(CreateProductRequest {
                name: required(self.name, "name")?,
                description: self.description.unwrap_or_default(),
                price: required(self.price, "price")?,
                stock: self.stock.unwrap_or_default(),
                category_id: required(self.category_id, "category_id")?,
            })),
            ManagementAction::Edit => Ok(ProductCommand::Edit(
                id,
                UpdateProductRequest {
                    name: self.name,
                    description: self.description,
                    price: self.price,
                    stock: self.stock,
                    category_id: self.category_id,
                },
            )),
            ManagementAction::Delete => Ok(ProductCommand::Delete(id)),
        }
    }
}

/// Body of `POST /v1/product_category`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct ProductCategoryManagementRequest {
    #[serde(default)]
    pub action: String,
    #[serde(default)]
    pub id: i32,
    pub name: Option<String>,
}

/// A checked product category management request.
#[derive(Debug, Clone)]
pub enum ProductCategoryCommand {
    Add(CreateProductCategoryRequest),
    Edit(ProductCategoryId, UpdateProductCategoryRequest),
    Delete(ProductCategoryId),
}

impl ProductCategoryManagementRequest {
    pub fn into_command(self) -> CatalogResult<ProductCategoryCommand> {
        let action: ManagementAction = self.action.parse()?;
        let id = ProductCategoryId::new(self.id);
        check_id(action, id.is_unset())?;

        match action {
            ManagementAction::Add => Ok(ProductCategoryCommand::Add(CreateProductCategoryRequest {
                name: required(self.name, "name")?,
            })),
            ManagementAction::Edit => Ok(ProductCategoryCommand::Edit(
                id,
                UpdateProductCategoryRequest { name: self.name },
            )),
            ManagementAction::Delete => Ok(ProductCategoryCommand::Delete(id)),
        }
    }
}

/// Response to a successful `add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: i64,
    pub message: String,
}

/// Response carrying only a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
