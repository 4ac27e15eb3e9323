use serde::{Deserialize, Deserializer};

#[derive(Debug)]
pub enum Formatter {
    Str(String),
}

pub fn formatter(mut parser: String, args: &[Formatter]) -> String {
    for (index, value) in args.iter().enumerate() {
        match value {
            Formatter::Str(n) => {
                parser = parser.replace(format!("${}", index).as_str(), n);
            },
        }
    }
    parser
}

/// Reads the first run of digits (with at most one decimal point) out of a
/// loosely typed amount such as `"123.456 HIVE"`. Anything unparsable is `0`.
pub fn extract_number(value: &str) -> f64 {
    let is_numeric = |c: char| c.is_ascii_digit() || c == '.';

    value
        .split(|c: char| !is_numeric(c))
        .find(|run| run.chars().any(|c| c.is_ascii_digit()))
        .map(|run| {
            let end = run
                .char_indices()
                .filter(|(_, c)| *c == '.')
                .nth(1)
                .map(|(index, _)| index)
                .unwrap_or(run.len());
            run[..end].parse::<f64>().unwrap_or(0.0)
        })
        .unwrap_or(0.0)
}

/// Fixed-point rendering used in replies; non-finite values become `n/a`.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_finite() {
        format!("{:.*}", decimals, value)
    } else {
        String::from("n/a")
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseValue {
    Text(String),
    Number(serde_json::Number),
    Asset { amount: String, precision: u32 },
}

/// Accepts legacy `"1.000 HIVE"` strings, bare numbers and NAI asset objects,
/// normalising all of them to a string for [`extract_number`].
pub fn loose_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match LooseValue::deserialize(deserializer)? {
        LooseValue::Text(text) => text,
        LooseValue::Number(number) => number.to_string(),
        LooseValue::Asset { amount, precision } => {
            let raw = extract_number(&amount);
            let precision = i32::try_from(precision).unwrap_or(0);
            (raw / 10f64.powi(precision)).to_string()
        },
    };

    Ok(value)
}
