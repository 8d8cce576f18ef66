use crate::domain::model::{FormattedRow, YearlyAggregate};

/// Brazilian numeric convention: period groups thousands, comma starts the
/// decimals, always two decimal places.
pub fn format_quantity(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let (whole, frac) = match fixed.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (fixed.as_str(), "00"),
    };
    let (sign, digits) = match whole.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", whole),
    };
    format!("{sign}{},{frac}", group_thousands(digits))
}

/// Two-decimal percentage with the pt-BR decimal comma and a trailing `%`.
pub fn format_percentage(value: f64) -> String {
    format!("{value:.2}%").replace('.', ",")
}

pub fn format_row(aggregate: &YearlyAggregate) -> FormattedRow {
    FormattedRow {
        year: aggregate.year.to_string(),
        port_cargo: format_quantity(aggregate.port_cargo),
        total_cargo: format_quantity(aggregate.total_cargo),
        percentage: format_percentage(aggregate.percentage),
    }
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}
