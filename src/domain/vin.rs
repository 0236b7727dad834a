// src/domain/vin.rs

pub const VIN_LENGTH: usize = 17;

/// Letters I, O and Q never appear in a VIN.
pub fn is_vin_char(c: char) -> bool {
    match c {
        '0'..='9' => true,
        'A'..='Z' => !matches!(c, 'I' | 'O' | 'Q'),
        _ => false,
    }
}

/// Uppercase the input and drop every character outside the VIN alphabet.
/// Lossy and silent: nothing is reported for stripped characters.
pub fn sanitize_vin(raw: &str) -> String {
    raw.chars()
        .flat_map(char::to_uppercase)
        .filter(|c| is_vin_char(*c))
        .collect()
}

/// Length check only. The check digit is not verified.
pub fn has_vin_length(vin: &str) -> bool {
    vin.chars().count() == VIN_LENGTH
}
