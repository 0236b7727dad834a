// src/domain/format.rs
//
// en-US display formatting for prices and distances.

/// `1234567` -> `"1,234,567"`.
pub fn thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        out.push('-');
    }

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

/// Half-up rounding, the way the page has always rounded averages.
pub fn round_half_up(x: f64) -> i64 {
    (x + 0.5).floor() as i64
}

/// Whole dollars with separators: `15000.4` -> `"$15,000"`.
pub fn currency(amount: f64) -> String {
    format!("${}", thousands(round_half_up(amount)))
}

/// `50000` -> `"50,000 km"`.
pub fn kilometres(km: i64) -> String {
    format!("{} km", thousands(km))
}
