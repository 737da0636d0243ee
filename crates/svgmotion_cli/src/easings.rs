//! Easing table preview

use anyhow::Result;
use serde_json::{json, Value};
use svgmotion_animation::Easing;

/// Sampled values for every curve, as JSON
pub fn table_json(samples: usize) -> Value {
    let curves: serde_json::Map<String, Value> = Easing::ALL
        .iter()
        .map(|easing| {
            let points: Vec<Value> = easing
                .sample(samples)
                .into_iter()
                .map(|(t, v)| json!({ "t": t, "value": v.is_finite().then_some(v) }))
                .collect();
            (easing.name().to_string(), Value::Array(points))
        })
        .collect();
    Value::Object(curves)
}

/// Sampled values for every curve, one row per curve
pub fn table_text(samples: usize) -> String {
    let mut out = String::new();
    for easing in Easing::ALL {
        let row: Vec<String> = easing
            .sample(samples)
            .into_iter()
            .map(|(_, v)| {
                if v.is_finite() {
                    format!("{v:>6.3}")
                } else {
                    format!("{:>6}", "NaN")
                }
            })
            .collect();
        out.push_str(&format!("{:<18}{}\n", easing.name(), row.join(" ")));
    }
    out
}

pub fn print_table(samples: usize, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&table_json(samples))?);
    } else {
        print!("{}", table_text(samples));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_has_every_curve() {
        let table = table_json(4);
        let curves = table.as_object().unwrap();
        assert_eq!(curves.len(), Easing::ALL.len());
        assert_eq!(curves["linear"][2]["value"], json!(0.5));
        // NaN has no JSON form
        assert_eq!(curves["easeInElastic"][0]["value"], Value::Null);
    }

    #[test]
    fn test_text_rows() {
        let table = table_text(2);
        assert_eq!(table.lines().count(), Easing::ALL.len());
        assert!(table.lines().next().unwrap().starts_with("linear"));
        assert!(table.contains("NaN"));
    }
}
