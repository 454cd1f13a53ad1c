//! Filtered, paginated bank-transaction listing.

use chrono::NaiveDate;

use crate::client::{self, ApiError};
use crate::models::{Page, Transaction, TransactionType};

/// Filter tuple driving `GET /transaction`.
///
/// Optional fields are omitted from the query string entirely when unset or
/// blank; only `page` and `limit` are always present.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionFilter {
    pub page: u32,
    pub limit: u32,
    pub transaction_type: Option<TransactionType>,
    pub gateway: Option<String>,
    pub code: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

impl TransactionFilter {
    pub fn new(page: u32, limit: u32) -> Self {
        Self {
            page,
            limit,
            transaction_type: None,
            gateway: None,
            code: None,
            start_date: None,
            end_date: None,
        }
    }

    /// Render the documented query parameters.
    ///
    /// The start date widens to midnight, the end date to the last
    /// millisecond of its day, both formatted as naive ISO-8601.
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("limit", self.limit.to_string()),
        ];
        if let Some(kind) = self.transaction_type {
            params.push(("type", kind.as_str().to_string()));
        }
        if let Some(gateway) = trimmed(&self.gateway) {
            params.push(("gateway", gateway));
        }
        if let Some(code) = trimmed(&self.code) {
            params.push(("code", code));
        }
        if let Some(date) = self.start_date {
            params.push(("startDate", format_timestamp(date, false)));
        }
        if let Some(date) = self.end_date {
            params.push(("endDate", format_timestamp(date, true)));
        }
        params
    }
}

fn trimmed(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

fn format_timestamp(date: NaiveDate, end_of_day: bool) -> String {
    let datetime = if end_of_day {
        date.and_hms_milli_opt(23, 59, 59, 999)
    } else {
        date.and_hms_milli_opt(0, 0, 0, 0)
    };
    // and_hms_milli_opt only fails for out-of-range components; these are fixed.
    datetime
        .map(|dt| dt.format("%Y-%m-%dT%H:%M:%S%.3f").to_string())
        .unwrap_or_default()
}

/// `GET /transaction`
pub async fn list_transactions(filter: &TransactionFilter) -> Result<Page<Transaction>, ApiError> {
    client::get("/transaction", &filter.to_params()).await
}

/// `GET /transaction/:id`
pub async fn get_transaction(id: &str) -> Result<Transaction, ApiError> {
    client::get(&format!("/transaction/{id}"), &[]).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn bare_filter_sends_only_page_and_limit() {
        let params = TransactionFilter::new(1, 10).to_params();
        assert_eq!(params.len(), 2);
        assert_eq!(param(&params, "page"), Some("1"));
        assert_eq!(param(&params, "limit"), Some("10"));
    }

    #[test]
    fn end_date_widens_to_last_millisecond() {
        let mut filter = TransactionFilter::new(1, 10);
        filter.start_date = NaiveDate::from_ymd_opt(2024, 1, 1);
        filter.end_date = NaiveDate::from_ymd_opt(2024, 1, 31);
        let params = filter.to_params();
        assert_eq!(param(&params, "startDate"), Some("2024-01-01T00:00:00.000"));
        assert_eq!(param(&params, "endDate"), Some("2024-01-31T23:59:59.999"));
    }

    #[test]
    fn blank_text_filters_are_omitted() {
        let mut filter = TransactionFilter::new(2, 10);
        filter.code = Some("  ".into());
        filter.gateway = Some(String::new());
        let params = filter.to_params();
        assert_eq!(param(&params, "code"), None);
        assert_eq!(param(&params, "gateway"), None);
    }

    #[test]
    fn populated_filters_are_trimmed_and_sent() {
        let mut filter = TransactionFilter::new(1, 10);
        filter.transaction_type = Some(TransactionType::Out);
        filter.code = Some(" FT2403 ".into());
        filter.gateway = Some("Vietcombank".into());
        let params = filter.to_params();
        assert_eq!(param(&params, "type"), Some("OUT"));
        assert_eq!(param(&params, "code"), Some("FT2403"));
        assert_eq!(param(&params, "gateway"), Some("Vietcombank"));
    }

}
