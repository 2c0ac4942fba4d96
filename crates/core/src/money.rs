//! Currency display formatting.
//!
//! Amounts are integer pesos; there are no fractional prices anywhere in
//! the system, so display uses zero decimal digits.

/// Render an integer peso amount the es-CO way: `$ 12.500`, thousands
/// separated by `.`, no decimals. Negative amounts get a leading `-`.
#[must_use]
pub fn format_currency(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-$ {grouped}")
    } else {
        format!("$ {grouped}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_amounts_have_no_separator() {
        assert_eq!(format_currency(0), "$ 0");
        assert_eq!(format_currency(950), "$ 950");
    }

    #[test]
    fn test_thousands_are_grouped_with_dots() {
        assert_eq!(format_currency(12_500), "$ 12.500");
        assert_eq!(format_currency(1_234_567), "$ 1.234.567");
        assert_eq!(format_currency(100_000), "$ 100.000");
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(format_currency(-4_500), "-$ 4.500");
    }
}
