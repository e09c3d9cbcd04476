//! Display formatting for operands.
//!
//! The contract the (external) rendering layer consumes: the integer part
//! is grouped with thousands separators, the fractional part is appended
//! verbatim. The asymmetry is deliberate — grouping must not round away
//! or pad an in-progress entry like `"12."`.

/// Format an operand for display.
///
/// Absent operand → `None` (nothing to render). Otherwise the integer
/// part is rendered as a grouped number (en-US style `,` separators,
/// leading zeros dropped) and any fractional digits follow the decimal
/// point untouched, including an empty fractional part.
///
/// # Example
///
/// ```rust
/// use tenkey::format::format_operand;
///
/// assert_eq!(format_operand(None), None);
/// assert_eq!(format_operand(Some("1234567")).as_deref(), Some("1,234,567"));
/// assert_eq!(format_operand(Some("12.")).as_deref(), Some("12."));
/// assert_eq!(format_operand(Some("1234.5678")).as_deref(), Some("1,234.5678"));
/// ```
pub fn format_operand(operand: Option<&str>) -> Option<String> {
    let operand = operand?;

    let (integer, fraction) = match operand.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (operand, None),
    };

    let grouped = group_thousands(integer);

    Some(match fraction {
        Some(fraction) => format!("{grouped}.{fraction}"),
        None => grouped,
    })
}

/// Group an integer string in blocks of three from the right.
///
/// A leading `-` (computed results only) is kept outside the grouping.
/// Leading zeros are dropped, keeping at least one digit, matching how a
/// numeric formatter renders the same input.
fn group_thousands(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", integer),
    };

    let digits = {
        let trimmed = digits.trim_start_matches('0');
        if trimmed.is_empty() && !digits.is_empty() {
            "0"
        } else {
            trimmed
        }
    };

    let mut grouped = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
