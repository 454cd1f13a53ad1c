//! URL slug derivation for titles.

/// Fold a lowercase Vietnamese letter onto its ASCII base.
fn fold(c: char) -> char {
    const GROUPS: &[(&str, char)] = &[
        ("àáạảãâầấậẩẫăằắặẳẵ", 'a'),
        ("èéẹẻẽêềếệểễ", 'e'),
        ("ìíịỉĩ", 'i'),
        ("òóọỏõôồốộổỗơờớợởỡ", 'o'),
        ("ùúụủũưừứựửữ", 'u'),
        ("ỳýỵỷỹ", 'y'),
        ("đ", 'd'),
    ];
    for (group, base) in GROUPS {
        if group.contains(c) {
            return *base;
        }
    }
    c
}

/// Derive a URL slug from a title: lowercase, diacritics folded to ASCII,
/// every run of non-alphanumeric characters collapsed to a single hyphen,
/// no leading or trailing hyphen. Idempotent on its own output.
pub fn slugify(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_hyphen = false;
    for c in input.chars() {
        let c = c.to_lowercase().next().unwrap_or(c);
        let c = fold(c);
        if c.is_ascii_alphanumeric() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else {
            pending_hyphen = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_vietnamese_diacritics() {
        assert_eq!(
            slugify("Thuê Xe Máy Điện Đà Nẵng"),
            "thue-xe-may-dien-da-nang"
        );
        assert_eq!(slugify("Ưu đãi tháng 7"), "uu-dai-thang-7");
    }

    #[test]
    fn collapses_non_alphanumeric_runs() {
        assert_eq!(slugify("  Hello --- World!!  "), "hello-world");
        assert_eq!(slugify("a/b\\c"), "a-b-c");
    }

    #[test]
    fn idempotent_on_normalized_input() {
        for raw in ["Thuê Xe 2024!", "đường 30/4", "already-a-slug"] {
            let once = slugify(raw);
            assert_eq!(slugify(&once), once);
        }
    }

    #[test]
    fn empty_and_symbol_only_inputs_give_empty_slug() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("!!!"), "");
    }
}
