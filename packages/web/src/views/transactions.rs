//! Bank transaction browser: debounced filters, pagination, page-local
//! summary tiles, and spreadsheet export.

use api::{Transaction, TransactionFilter, TransactionType};
use chrono::NaiveDate;
use dioxus::prelude::*;
use ui::components::{use_toast, Button, ButtonVariant, Input, ToastOptions};
use ui::{format_vnd, use_debounced, ModalOverlay};

use crate::export;

const PAGE_SIZE: u32 = 10;
const EXPORT_PAGE_SIZE: u32 = 1000;
const SEARCH_SETTLE_MS: u32 = 500;

/// Raw filter inputs as entered in the toolbar.
#[derive(Clone, Debug, Default, PartialEq)]
struct FilterParts {
    code: String,
    kind: String,
    gateway: String,
    start_date: String,
    end_date: String,
}

impl FilterParts {
    fn to_filter(&self, page: u32, limit: u32) -> TransactionFilter {
        let mut filter = TransactionFilter::new(page, limit);
        filter.transaction_type = TransactionType::parse(&self.kind);
        filter.code = Some(self.code.clone());
        filter.gateway = Some(self.gateway.clone());
        filter.start_date = parse_date(&self.start_date);
        filter.end_date = parse_date(&self.end_date);
        filter
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    value.trim().parse().ok()
}

/// Page-local aggregate over the loaded records only.
fn summarize(transactions: &[Transaction]) -> (i64, i64, i64) {
    let total_in: i64 = transactions.iter().map(|t| t.amount_in).sum();
    let total_out: i64 = transactions.iter().map(|t| t.amount_out).sum();
    (total_in, total_out, total_in - total_out)
}

#[component]
pub fn Transactions() -> Element {
    let mut search_term = use_signal(String::new);
    let debounced_search = use_debounced(search_term, SEARCH_SETTLE_MS);
    let mut type_filter = use_signal(String::new);
    let mut gateway_filter = use_signal(String::new);
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut current_page = use_signal(|| 1u32);
    let mut transactions = use_signal(Vec::<Transaction>::new);
    let mut total_pages = use_signal(|| 0u32);
    let mut total_items = use_signal(|| 0u64);
    let mut loading = use_signal(|| false);
    let mut exporting = use_signal(|| false);
    let mut detail = use_signal(|| Option::<Transaction>::None);
    // Monotonic fetch sequence; a response only lands while it is newest.
    let mut fetch_seq = use_signal(|| 0u64);
    let mut last_parts = use_signal(|| Option::<FilterParts>::None);
    let toast = use_toast();

    // One fetch per (filters, page) change. A filter change restarts from
    // the first page before anything is requested.
    use_effect(move || {
        let parts = FilterParts {
            code: debounced_search(),
            kind: type_filter(),
            gateway: gateway_filter(),
            start_date: start_date(),
            end_date: end_date(),
        };
        let page = current_page();

        if last_parts.peek().as_ref() != Some(&parts) {
            last_parts.set(Some(parts.clone()));
            if page != 1 {
                current_page.set(1);
                return;
            }
        }

        let seq = fetch_seq.peek().wrapping_add(1);
        fetch_seq.set(seq);
        let filter = parts.to_filter(page, PAGE_SIZE);

        spawn(async move {
            loading.set(true);
            match api::transaction::list_transactions(&filter).await {
                Ok(result) => {
                    if *fetch_seq.peek() != seq {
                        return;
                    }
                    transactions.set(result.items);
                    total_pages.set(result.total_pages);
                    total_items.set(result.total_items);
                    loading.set(false);
                }
                Err(e) => {
                    if *fetch_seq.peek() != seq {
                        return;
                    }
                    transactions.set(Vec::new());
                    total_pages.set(0);
                    total_items.set(0);
                    loading.set(false);
                    toast.error(format!("Cannot load transactions: {e}"), ToastOptions::new());
                }
            }
        });
    });

    let summary = use_memo(move || summarize(&transactions()));

    // Re-issue the current query with a large page size and hand the rows
    // to the spreadsheet writer.
    let handle_export = move |_| {
        spawn(async move {
            exporting.set(true);
            let parts = last_parts.peek().clone().unwrap_or_default();
            let filter = parts.to_filter(1, EXPORT_PAGE_SIZE);
            match api::transaction::list_transactions(&filter).await {
                Ok(result) => match export::download_transactions(&result.items) {
                    Ok(count) => {
                        toast.success(format!("Exported {count} transactions"), ToastOptions::new());
                    }
                    Err(e) => {
                        toast.error(format!("Cannot export the file: {e}"), ToastOptions::new());
                    }
                },
                Err(e) => {
                    toast.error(format!("Cannot export the file: {e}"), ToastOptions::new());
                }
            }
            exporting.set(false);
        });
    };

    // Row click re-reads the record so the overlay shows fresh data.
    let open_detail = move |id: String| {
        spawn(async move {
            match api::transaction::get_transaction(&id).await {
                Ok(transaction) => detail.set(Some(transaction)),
                Err(e) => {
                    toast.error(format!("Cannot load the transaction: {e}"), ToastOptions::new());
                }
            }
        });
    };

    let (total_in, total_out, net) = summary();

    rsx! {
        div {
            class: "view",

            header {
                class: "view-header",
                h1 { "Transactions" }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: exporting(),
                    onclick: handle_export,
                    if exporting() { "Exporting…" } else { "Export spreadsheet" }
                }
            }

            div {
                class: "summary-tiles",
                div {
                    class: "summary-tile",
                    span { class: "summary-label", "Money in (this page)" }
                    strong { class: "summary-in", {format_vnd(total_in)} }
                }
                div {
                    class: "summary-tile",
                    span { class: "summary-label", "Money out (this page)" }
                    strong { class: "summary-out", {format_vnd(total_out)} }
                }
                div {
                    class: "summary-tile",
                    span { class: "summary-label", "Net (this page)" }
                    strong { {format_vnd(net)} }
                }
            }

            div {
                class: "filter-bar",
                Input {
                    class: "filter-search",
                    placeholder: "Search by transaction code…",
                    value: search_term(),
                    oninput: move |evt: FormEvent| search_term.set(evt.value()),
                }
                select {
                    class: "select",
                    value: type_filter(),
                    onchange: move |evt| type_filter.set(evt.value()),
                    option { value: "", "All directions" }
                    option { value: "IN", "Money in" }
                    option { value: "OUT", "Money out" }
                }
                Input {
                    placeholder: "Gateway",
                    value: gateway_filter(),
                    oninput: move |evt: FormEvent| gateway_filter.set(evt.value()),
                }
                Input {
                    r#type: "date",
                    value: start_date(),
                    oninput: move |evt: FormEvent| start_date.set(evt.value()),
                }
                Input {
                    r#type: "date",
                    value: end_date(),
                    oninput: move |evt: FormEvent| end_date.set(evt.value()),
                }
            }

            if loading() {
                div { class: "view-loading", "Loading…" }
            }

            table {
                class: "data-table",
                thead {
                    tr {
                        th { "Code" }
                        th { "Gateway" }
                        th { "Account" }
                        th { "Content" }
                        th { "In" }
                        th { "Out" }
                        th { "Time" }
                    }
                }
                tbody {
                    for transaction in transactions() {
                        tr {
                            key: "{transaction.id}",
                            class: "row-clickable",
                            onclick: {
                                let id = transaction.id.clone();
                                move |_| open_detail(id.clone())
                            },
                            td { class: "cell-strong", "{transaction.code}" }
                            td { "{transaction.gateway}" }
                            td { "{transaction.account_number}" }
                            td { class: "cell-content", "{transaction.content}" }
                            td {
                                class: "summary-in",
                                if transaction.amount_in > 0 {
                                    {format_vnd(transaction.amount_in)}
                                }
                            }
                            td {
                                class: "summary-out",
                                if transaction.amount_out > 0 {
                                    {format_vnd(transaction.amount_out)}
                                }
                            }
                            td { {transaction.transaction_date.format("%d/%m/%Y %H:%M").to_string()} }
                        }
                    }
                }
            }

            if transactions().is_empty() && !loading() {
                div { class: "view-empty", "No transactions match the filters" }
            }

            div {
                class: "pager",
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: current_page() <= 1,
                    onclick: move |_| {
                        let page = *current_page.peek();
                        if page > 1 {
                            current_page.set(page - 1);
                        }
                    },
                    "Previous"
                }
                span {
                    class: "pager-label",
                    "Page {current_page()} / {total_pages().max(1)} · {total_items()} transactions"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    disabled: current_page() >= total_pages(),
                    onclick: move |_| {
                        let page = *current_page.peek();
                        if page < *total_pages.peek() {
                            current_page.set(page + 1);
                        }
                    },
                    "Next"
                }
            }
        }

        if let Some(transaction) = detail() {
            ModalOverlay {
                title: "Transaction {transaction.code}",
                on_close: move |_| detail.set(None),
                div {
                    class: "dialog-body",
                    dl {
                        class: "detail-list",
                        dt { "Gateway" }
                        dd { "{transaction.gateway}" }
                        dt { "Account" }
                        dd { "{transaction.account_number}" }
                        dt { "Content" }
                        dd { "{transaction.content}" }
                        dt { "Money in" }
                        dd { class: "summary-in", {format_vnd(transaction.amount_in)} }
                        dt { "Money out" }
                        dd { class: "summary-out", {format_vnd(transaction.amount_out)} }
                        dt { "Net" }
                        dd { {format_vnd(transaction.net_amount())} }
                        dt { "Time" }
                        dd { {transaction.transaction_date.format("%d/%m/%Y %H:%M:%S").to_string()} }
                    }
                    div {
                        class: "form-actions",
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| detail.set(None),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(amount_in: i64, amount_out: i64) -> Transaction {
        Transaction {
            id: format!("t-{amount_in}-{amount_out}"),
            code: "FT".into(),
            gateway: "Vietcombank".into(),
            account_number: "0071".into(),
            amount_in,
            amount_out,
            content: String::new(),
            transaction_date: "2024-03-11T08:30:00Z".parse().unwrap(),
        }
    }

    #[test]
    fn summary_covers_only_the_given_page() {
        let page = vec![
            transaction(500_000, 0),
            transaction(0, 200_000),
            transaction(150_000, 0),
        ];
        let (total_in, total_out, net) = summarize(&page);
        assert_eq!(total_in, 650_000);
        assert_eq!(total_out, 200_000);
        assert_eq!(net, 450_000);
    }

    #[test]
    fn empty_page_sums_to_zero() {
        assert_eq!(summarize(&[]), (0, 0, 0));
    }

    #[test]
    fn filter_parts_feed_through_to_query_params() {
        let parts = FilterParts {
            code: "FT24".into(),
            kind: "IN".into(),
            gateway: String::new(),
            start_date: "2024-01-01".into(),
            end_date: "2024-01-31".into(),
        };
        let filter = parts.to_filter(1, PAGE_SIZE);
        let params = filter.to_params();
        let get = |key: &str| {
            params
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
        };
        assert_eq!(get("type").as_deref(), Some("IN"));
        assert_eq!(get("code").as_deref(), Some("FT24"));
        assert_eq!(get("gateway"), None);
        assert_eq!(get("endDate").as_deref(), Some("2024-01-31T23:59:59.999"));
    }

    #[test]
    fn unparseable_dates_are_dropped_from_the_filter() {
        let parts = FilterParts {
            start_date: "31/01/2024".into(),
            ..FilterParts::default()
        };
        let filter = parts.to_filter(1, PAGE_SIZE);
        assert!(filter.start_date.is_none());
    }
}
