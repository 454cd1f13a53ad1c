//! Wire records mirrored from the remote API.
//!
//! These are plain data carriers: the dashboard neither derives nor persists
//! identity for any of them. Every type serializes with `camelCase` field
//! names to match the remote service.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Paginated list envelope shared by the list endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
    pub total_items: u64,
}

/// A blog post as returned by `GET /blog/:id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blog {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(rename = "type")]
    pub blog_type: String,
    pub region: String,
    pub tags: Vec<String>,
    pub thumbnail: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reduced blog shape used by the list endpoint (no `content`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogSummary {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub blog_type: String,
    pub region: String,
    pub tags: Vec<String>,
    pub thumbnail: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create/update body for blog posts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPayload {
    pub title: String,
    pub slug: String,
    pub content: String,
    #[serde(rename = "type")]
    pub blog_type: String,
    pub region: String,
    pub tags: Vec<String>,
    pub thumbnail: Option<String>,
}

/// A vehicle available for rent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub name: String,
    pub slug: String,
    pub license_plate: String,
    /// Daily rate in VNĐ.
    pub price_per_day: i64,
    pub location: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub description: String,
}

/// Create/update body for vehicles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehiclePayload {
    #[serde(rename = "type")]
    pub vehicle_type: String,
    pub name: String,
    pub slug: String,
    pub license_plate: String,
    pub price_per_day: i64,
    pub location: String,
    pub features: Vec<String>,
    pub images: Vec<String>,
    pub description: String,
}

/// A rental booking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rental {
    pub id: String,
    pub user_id: String,
    pub vehicle_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Fee components in VNĐ. `total_fee` is always their sum.
    pub rental_fee: i64,
    pub insurance_fee: i64,
    pub vat_fee: i64,
    pub total_fee: i64,
    pub images: Vec<String>,
    pub terms: Vec<String>,
}

/// Create/update body for rentals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalPayload {
    pub user_id: String,
    pub vehicle_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub rental_fee: i64,
    pub insurance_fee: i64,
    pub vat_fee: i64,
    pub total_fee: i64,
    pub images: Vec<String>,
    pub terms: Vec<String>,
}

/// Direction of a bank transaction, inferred from its amount fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionType {
    #[serde(rename = "IN")]
    In,
    #[serde(rename = "OUT")]
    Out,
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::In => "IN",
            TransactionType::Out => "OUT",
        }
    }

    /// Parse the value of the `type` filter select; `""` means no filter.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "IN" => Some(TransactionType::In),
            "OUT" => Some(TransactionType::Out),
            _ => None,
        }
    }
}

/// A bank transaction, read-only in this tier.
///
/// `amount_in` and `amount_out` are not mutually exclusive in the data
/// model; the UI assumes at most one is nonzero when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: String,
    pub code: String,
    pub gateway: String,
    pub account_number: String,
    pub amount_in: i64,
    pub amount_out: i64,
    pub content: String,
    pub transaction_date: DateTime<Utc>,
}

impl Transaction {
    /// Inferred direction: money in when `amount_in` is nonzero.
    pub fn direction(&self) -> TransactionType {
        if self.amount_in > 0 {
            TransactionType::In
        } else {
            TransactionType::Out
        }
    }

    /// Signed difference rendered in the "Chênh Lệch" column.
    pub fn net_amount(&self) -> i64 {
        self.amount_in - self.amount_out
    }
}

/// Result of a media upload.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedImage {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(amount_in: i64, amount_out: i64) -> Transaction {
        Transaction {
            id: "t1".into(),
            code: "FT24031123456".into(),
            gateway: "Vietcombank".into(),
            account_number: "0071000123456".into(),
            amount_in,
            amount_out,
            content: "thanh toan don hang".into(),
            transaction_date: "2024-03-11T08:30:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn direction_follows_nonzero_amount() {
        assert_eq!(transaction(500_000, 0).direction(), TransactionType::In);
        assert_eq!(transaction(0, 200_000).direction(), TransactionType::Out);
    }

    #[test]
    fn net_amount_is_in_minus_out() {
        assert_eq!(transaction(500_000, 0).net_amount(), 500_000);
        assert_eq!(transaction(0, 200_000).net_amount(), -200_000);
    }

    #[test]
    fn blog_round_trips_camel_case() {
        let raw = r#"{
            "id": "b1",
            "title": "Thuê xe máy tại Đà Nẵng",
            "slug": "thue-xe-may-tai-da-nang",
            "content": "...",
            "type": "guide",
            "region": "da-nang",
            "tags": ["xe-may"],
            "thumbnail": null,
            "createdAt": "2024-01-05T02:00:00Z",
            "updatedAt": "2024-01-06T02:00:00Z"
        }"#;
        let blog: Blog = serde_json::from_str(raw).unwrap();
        assert_eq!(blog.blog_type, "guide");
        let back = serde_json::to_value(&blog).unwrap();
        assert_eq!(back["type"], "guide");
        assert!(back.get("createdAt").is_some());
    }

    #[test]
    fn page_deserializes_totals() {
        let raw = r#"{"items":[],"totalPages":4,"totalItems":37}"#;
        let page: Page<Transaction> = serde_json::from_str(raw).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.total_items, 37);
    }

    #[test]
    fn transaction_type_parses_select_values() {
        assert_eq!(TransactionType::parse("IN"), Some(TransactionType::In));
        assert_eq!(TransactionType::parse("OUT"), Some(TransactionType::Out));
        assert_eq!(TransactionType::parse(""), None);
    }
}
