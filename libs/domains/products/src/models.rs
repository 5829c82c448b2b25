use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Product entity, identified by a unique string id.
///
/// Beyond the id, a product is an open mapping of field name to value
/// (name, price, etc.). The map is flattened on the wire so the JSON shape
/// is exactly `{ "id": ..., ...other fields }`, and whatever a client
/// submits is what is stored and echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique identifier; immutable once set
    pub id: String,
    /// Remaining product fields, opaque to this layer
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub attributes: Map<String, Value>,
}

/// DTO for creating a new product.
///
/// The id is optional: when omitted, the service assigns a UUIDv7 string.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[validate(length(min = 1, max = 128))]
    pub id: Option<String>,
    #[serde(flatten)]
    #[schema(value_type = Object)]
    pub attributes: Map<String, Value>,
}

impl Product {
    /// Create a new product from a CreateProduct DTO, assigning an id if
    /// the input did not carry one.
    pub fn new(input: CreateProduct) -> Self {
        let id = input
            .id
            .unwrap_or_else(|| Uuid::now_v7().to_string());
        Self {
            id,
            attributes: input.attributes,
        }
    }
}
