//! Text renderings of a [`DesignResult`].

use crate::DesignResult;

/// Column names of the CSV export, in order.
pub const CSV_HEADER: [&str; 6] = [
    "material",
    "length",
    "width",
    "cost",
    "costHistory",
    "safetyMarginHistory",
];

/// Renders a result as CSV: a header row and one data row.
///
/// Numbers use Rust's shortest round-trip formatting and histories are
/// written as `[v1, v2, ...]`. Fields containing a comma, quote or line break
/// are quoted as in RFC 4180.
#[must_use]
pub fn to_csv(result: &DesignResult) -> String {
    let row = [
        result.material.clone(),
        format!("{:?}", result.length),
        format!("{:?}", result.width),
        format!("{:?}", result.cost),
        history(&result.cost_history),
        history(&result.safety_margin_history),
    ];

    let mut csv = CSV_HEADER.join(",");
    csv.push('\n');
    csv.push_str(&row.iter().map(|field| quote(field)).collect::<Vec<_>>().join(","));
    csv.push('\n');
    csv
}

/// Renders a short human-readable summary of a result.
#[must_use]
pub fn render_summary(result: &DesignResult) -> String {
    let mut output = format!(
        "Optimal material: {}\nOptimal length: {:.2} m\nOptimal width: {:.2} m\nEstimated cost: {:.2}\n",
        result.material, result.length, result.width, result.cost
    );

    match result.safety_margin() {
        Some(margin) => output.push_str(&format!("Safety margin: {margin:.3} kN/m²\n")),
        None => output.push_str("Safety margin: not available\n"),
    }

    output
}

fn history(values: &[f64]) -> String {
    let values: Vec<_> = values.iter().map(|value| format!("{value:?}")).collect();
    format!("[{}]", values.join(", "))
}

fn quote(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_owned()
    }
}
