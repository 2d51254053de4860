//! Fixed payloads for endpoints answered without contacting PlayFab.
//!
//! Typed rather than built with `json!` so field order on the wire is fixed.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// Plaintext body for `GET /`.
pub const BANNER: &str = "PlayFab Proxy is running!";

/// PlayFab's standard success wrapper.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct Envelope<T> {
    pub code: u16,
    pub status: String,
    pub data: T,
}

impl<T> Envelope<T> {
    fn ok(data: T) -> Self {
        Self {
            code: 200,
            status: "OK".to_string(),
            data,
        }
    }
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CatalogData {
    #[serde(rename = "Catalog")]
    pub catalog: Vec<Value>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct InventoryData {
    #[serde(rename = "Inventory")]
    pub inventory: Vec<Value>,
    #[serde(rename = "VirtualCurrency")]
    pub virtual_currency: VirtualCurrency,
    #[serde(rename = "VirtualCurrencyRechargeTimes")]
    pub recharge_times: BTreeMap<String, Value>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct VirtualCurrency {
    #[serde(rename = "GD")]
    pub gd: i64,
    #[serde(rename = "KY")]
    pub ky: i64,
}

/// Empty catalog for `POST /Client/GetCatalogItems`.
#[must_use]
pub fn catalog_items() -> Envelope<CatalogData> {
    Envelope::ok(CatalogData {
        catalog: Vec::new(),
    })
}

/// Mock inventory for `POST /Client/GetUserInventory`.
#[must_use]
pub fn user_inventory() -> Envelope<InventoryData> {
    Envelope::ok(InventoryData {
        inventory: Vec::new(),
        virtual_currency: VirtualCurrency { gd: 500, ky: 3 },
        recharge_times: BTreeMap::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_serializes_exactly() {
        assert_eq!(
            serde_json::to_string(&catalog_items()).unwrap(),
            r#"{"code":200,"status":"OK","data":{"Catalog":[]}}"#
        );
    }

    #[test]
    fn inventory_serializes_exactly() {
        assert_eq!(
            serde_json::to_string(&user_inventory()).unwrap(),
            r#"{"code":200,"status":"OK","data":{"Inventory":[],"VirtualCurrency":{"GD":500,"KY":3},"VirtualCurrencyRechargeTimes":{}}}"#
        );
    }
}
