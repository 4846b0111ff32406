/// Money is represented as integer minor units (e.g. cents or dirams) to avoid
/// floating-point precision issues. 1 unit = 100 minor units, so 50.00 = 5000.
pub type Money = i64;

/// Format minor units as a human-readable amount.
/// Example: 5000 -> "50.00", -1234 -> "-12.34"
pub fn format_money(amount: Money) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let abs = amount.unsigned_abs();
    format!("{}{}.{:02}", sign, abs / 100, abs % 100)
}
