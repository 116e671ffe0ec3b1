use serde::{Deserialize, Serialize};

/// REST collection resource for production orders
pub const PRODUCTION_ORDERS_PATH: &str = "/api/production-orders";

// ============================================================================
// ID Type
// ============================================================================

/// Server-assigned order identifier. Opaque to the client.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductionOrderId(pub String);

impl ProductionOrderId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductionOrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Production order (a025)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductionOrder {
    pub id: ProductionOrderId,

    /// Order reference, e.g. "REF-001"
    pub reference: String,

    /// Product being manufactured
    pub product: String,

    /// Units to produce (>= 1)
    pub quantity: i64,

    /// Due date, ISO-8601 timestamp
    pub due_date: String,

    /// Server-assigned lifecycle status, e.g. "planned"
    pub status: String,

    /// Creation timestamp, ISO-8601
    pub created_at: String,
}

impl ProductionOrder {
    /// Display name of a single record
    pub fn element_name() -> &'static str {
        "Order"
    }

    /// Display name of the collection
    pub fn list_name() -> &'static str {
        "Orders"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Creation payload sent to the collection resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductionOrderDto {
    pub reference: String,
    pub product: String,
    pub quantity: i64,
    /// ISO-8601 UTC timestamp
    pub due_date: String,
}
