use itertools::Itertools;

/// Format an amount of money with thousands separators, e.g. "£5,000,000".
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();

    let chunks = digits.chars().rev().chunks(3);
    let grouped: String = chunks
        .into_iter()
        .map(|chunk| chunk.collect::<String>())
        .join(",")
        .chars()
        .rev()
        .collect();

    if amount < 0 {
        format!("-£{}", grouped)
    } else {
        format!("£{}", grouped)
    }
}
