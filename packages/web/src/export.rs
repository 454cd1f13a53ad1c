//! Spreadsheet export of the transaction table.
//!
//! Rows are written as CSV with a UTF-8 BOM so spreadsheet applications
//! render the Vietnamese headers correctly, then handed to the browser as
//! a blob download named with the current date.

use api::Transaction;

/// Fixed column set, one row per transaction, 1-based sequence number first.
pub const HEADERS: [&str; 9] = [
    "STT",
    "Mã Giao Dịch",
    "Ngân Hàng",
    "Số Tài Khoản",
    "Nội Dung",
    "Tiền Vào (VNĐ)",
    "Tiền Ra (VNĐ)",
    "Chênh Lệch (VNĐ)",
    "Thời Gian",
];

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

fn row(index: usize, transaction: &Transaction) -> [String; 9] {
    [
        (index + 1).to_string(),
        transaction.code.clone(),
        transaction.gateway.clone(),
        transaction.account_number.clone(),
        transaction.content.clone(),
        transaction.amount_in.to_string(),
        transaction.amount_out.to_string(),
        transaction.net_amount().to_string(),
        transaction
            .transaction_date
            .format("%d/%m/%Y %H:%M:%S")
            .to_string(),
    ]
}

/// Render the full spreadsheet. Zero transactions still produce the
/// header row.
pub fn spreadsheet_bytes(transactions: &[Transaction]) -> Result<Vec<u8>, String> {
    let mut writer = csv::Writer::from_writer(UTF8_BOM.to_vec());
    writer.write_record(HEADERS).map_err(|e| e.to_string())?;
    for (index, transaction) in transactions.iter().enumerate() {
        writer
            .write_record(row(index, transaction))
            .map_err(|e| e.to_string())?;
    }
    writer.into_inner().map_err(|e| e.to_string())
}

/// File name carrying the export date.
pub fn file_name(year: u32, month: u32, day: u32) -> String {
    format!("giao-dich-{year:04}-{month:02}-{day:02}.csv")
}

#[cfg(target_arch = "wasm32")]
fn today_file_name() -> String {
    let date = js_sys::Date::new_0();
    file_name(
        date.get_full_year() as u32,
        date.get_month() as u32 + 1,
        date.get_date() as u32,
    )
}

/// Build the spreadsheet and trigger a browser download for it.
/// Returns the number of exported rows.
#[cfg(target_arch = "wasm32")]
pub fn download_transactions(transactions: &[Transaction]) -> Result<usize, String> {
    use wasm_bindgen::JsCast;

    let bytes = spreadsheet_bytes(transactions)?;

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes.as_slice()));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/csv;charset=utf-8;");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(|e| format!("{e:?}"))?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(|e| format!("{e:?}"))?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| "document is not available".to_string())?;
    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(|e| format!("{e:?}"))?
        .dyn_into()
        .map_err(|_| "anchor element expected".to_string())?;
    anchor.set_href(&url);
    anchor.set_download(&today_file_name());
    anchor.click();
    let _ = web_sys::Url::revoke_object_url(&url);

    Ok(transactions.len())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn download_transactions(_transactions: &[Transaction]) -> Result<usize, String> {
    Err("export is only available in the browser".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transaction(code: &str, amount_in: i64, amount_out: i64) -> Transaction {
        Transaction {
            id: code.to_string(),
            code: code.to_string(),
            gateway: "Vietcombank".into(),
            account_number: "0071000123456".into(),
            content: "tien thue xe, thang 3".into(),
            amount_in,
            amount_out,
            transaction_date: "2024-03-11T08:30:00Z".parse().unwrap(),
        }
    }

    fn records(bytes: &[u8]) -> Vec<Vec<String>> {
        assert_eq!(&bytes[..3], &UTF8_BOM);
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(&bytes[3..]);
        reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn empty_export_is_header_row_only() {
        let bytes = spreadsheet_bytes(&[]).unwrap();
        let rows = records(&bytes);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], HEADERS.map(str::to_string).to_vec());
    }

    #[test]
    fn sequence_numbers_are_one_based() {
        let bytes =
            spreadsheet_bytes(&[transaction("A", 100, 0), transaction("B", 0, 40)]).unwrap();
        let rows = records(&bytes);
        assert_eq!(rows[1][0], "1");
        assert_eq!(rows[2][0], "2");
    }

    #[test]
    fn difference_column_is_in_minus_out() {
        let sample = transaction("FT1", 500_000, 120_000);
        let bytes = spreadsheet_bytes(std::slice::from_ref(&sample)).unwrap();
        let rows = records(&bytes);
        let exported: i64 = rows[1][7].parse().unwrap();
        assert_eq!(exported, sample.amount_in - sample.amount_out);
    }

    #[test]
    fn commas_in_content_survive_the_round_trip() {
        let bytes = spreadsheet_bytes(&[transaction("FT1", 100, 0)]).unwrap();
        let rows = records(&bytes);
        assert_eq!(rows[1][4], "tien thue xe, thang 3");
    }

    #[test]
    fn file_name_carries_the_date() {
        assert_eq!(file_name(2024, 3, 9), "giao-dich-2024-03-09.csv");
    }
}
