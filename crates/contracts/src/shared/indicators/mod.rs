use serde::{Deserialize, Serialize};

use super::number_format::{format_count, format_money, format_multiple, format_percent};

// ---------------------------------------------------------------------------
// Indicator identity & display metadata
// ---------------------------------------------------------------------------

/// Unique indicator identifier, used as key in the catalogue and API responses.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub String);

impl IndicatorId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// How to format the numeric value on the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    /// Whole currency units
    Money,
    /// Counts with up to two fraction digits
    Count,
    /// Fraction rendered as a percentage
    Percent,
    /// Ratio rendered with an `x` suffix (ROAS)
    Multiple,
}

impl ValueFormat {
    pub fn render(&self, value: f64) -> String {
        match self {
            ValueFormat::Money => format_money(value),
            ValueFormat::Count => format_count(value),
            ValueFormat::Percent => format_percent(value),
            ValueFormat::Multiple => format_multiple(value),
        }
    }
}

/// Static metadata describing one indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorMeta {
    pub id: IndicatorId,
    pub label: String,
    pub format: ValueFormat,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Computed values
// ---------------------------------------------------------------------------

/// One headline KPI card: metadata, raw value and a pre-rendered subtitle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiCard {
    pub meta: IndicatorMeta,
    /// Raw value; the frontend formats it with `meta.format`.
    pub value: f64,
    pub subtitle: Option<String>,
}

impl KpiCard {
    pub fn formatted_value(&self) -> String {
        self.meta.format.render(self.value)
    }
}

/// Full catalogue returned by the metadata endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorCatalogResponse {
    pub indicators: Vec<IndicatorMeta>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_dispatches_on_format() {
        assert_eq!(ValueFormat::Money.render(343_000.0), "$343,000");
        assert_eq!(ValueFormat::Count.render(1400.0), "1,400");
        assert_eq!(ValueFormat::Percent.render(0.6), "60.0%");
        assert_eq!(ValueFormat::Multiple.render(20.58), "20.58x");
    }

    #[test]
    fn test_format_is_tagged_on_the_wire() {
        let json = serde_json::to_string(&ValueFormat::Multiple).unwrap();
        assert_eq!(json, r#"{"kind":"Multiple"}"#);
    }
}
