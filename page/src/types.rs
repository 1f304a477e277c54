//! Data types for the insight payload.
//!
//! These types define the data model consumed by the page renderer. They're
//! designed to be:
//!
//! - **Serializable** - Easy JSON import/export via serde
//! - **Clone-friendly** - Components can share data without borrowing issues
//! - **Order-preserving** - Insights render in payload insertion order
//!
//! # Example
//!
//! ```rust
//! use page_leptos::types::{Insight, InsightSource};
//!
//! let source: InsightSource = [
//!     ("revenue".to_string(), Insight {
//!         title: "Revenue by region".into(),
//!         description: "EMEA leads with 42% of total revenue.".into(),
//!         require_chart: true,
//!         details: Some(serde_json::json!({"chart": {"type": "bar"}})),
//!     }),
//! ].into_iter().collect();
//!
//! assert_eq!(source.len(), 1);
//! ```

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Error returned when an insight payload cannot be decoded.
///
/// Covers both JSON syntax errors and schema violations, including the
/// rejected `requireChart` encodings (anything other than a boolean or the
/// literal strings `"true"`/`"false"`).
#[derive(Debug, Error)]
#[error("invalid insight payload: {0}")]
pub struct PayloadError(#[from] serde_json::Error);

/// A single displayable finding.
///
/// Produced upstream (one record per generated insight) and consumed
/// read-only by the renderer. Missing `title`/`description` fields render as
/// empty text rather than being rejected.
///
/// # Example
///
/// ```rust
/// use page_leptos::types::Insight;
///
/// let insight: Insight = serde_json::from_str(r#"{
///     "title": "Top sellers",
///     "description": "Three SKUs account for half of all orders.",
///     "requireChart": "true",
///     "details": {"chart": {"type": "pie"}}
/// }"#).unwrap();
///
/// // String-encoded flags are normalized to a canonical bool on the way in.
/// assert!(insight.require_chart);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    /// Display title
    #[serde(default)]
    pub title: String,
    /// Display description
    #[serde(default)]
    pub description: String,
    /// Whether this insight carries a chart payload.
    ///
    /// The upstream payload encodes this inconsistently as either a native
    /// boolean or the strings `"true"`/`"false"`. Normalization happens here,
    /// at the input boundary, so rendering code only ever sees a `bool`.
    /// Re-serialization always emits the canonical boolean form.
    #[serde(default, deserialize_with = "bool_or_string")]
    pub require_chart: bool,
    /// Opaque chart specification, passed verbatim to the charting library.
    ///
    /// Its shape is owned by the charting library, not by this crate. A
    /// chart-eligible insight without `details` is accepted and rendered as
    /// an empty chart spec.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// Accept `true`/`false` as well as the string literals `"true"`/`"false"`.
fn bool_or_string<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct FlagVisitor;

    impl<'de> Visitor<'de> for FlagVisitor {
        type Value = bool;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a boolean or the string \"true\"/\"false\"")
        }

        fn visit_bool<E>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_str<E>(self, value: &str) -> Result<bool, E>
        where
            E: de::Error,
        {
            match value {
                "true" => Ok(true),
                "false" => Ok(false),
                other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
            }
        }
    }

    deserializer.deserialize_any(FlagVisitor)
}

/// An ordered mapping from insight key to [`Insight`].
///
/// Deserialized from a JSON object keyed by insight id. Iteration order is
/// the payload's insertion order, which is also the order blocks appear on
/// the rendered page. Read once per render; never mutated afterwards.
///
/// # Example
///
/// ```rust
/// use page_leptos::types::InsightSource;
///
/// let source = InsightSource::from_json_str(r#"{
///     "a": {"title": "T1", "description": "D1", "requireChart": "true", "details": {"spec": 1}},
///     "b": {"title": "T2", "description": "D2", "requireChart": "false"}
/// }"#).unwrap();
///
/// let (key, first) = source.first_chart_eligible().unwrap();
/// assert_eq!(key, "a");
/// assert_eq!(first.title, "T1");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InsightSource(Vec<(String, Insight)>);

impl InsightSource {
    /// Decode a payload from a JSON object string.
    ///
    /// This is the single input boundary: `requireChart` encodings are
    /// normalized here and key order is preserved as written.
    pub fn from_json_str(payload: &str) -> Result<Self, PayloadError> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Iterate `(key, insight)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Insight)> {
        self.0.iter().map(|(key, insight)| (key.as_str(), insight))
    }

    /// Look up an insight by key.
    pub fn get(&self, key: &str) -> Option<&Insight> {
        self.0
            .iter()
            .find(|(candidate, _)| candidate == key)
            .map(|(_, insight)| insight)
    }

    /// Number of insights in the payload.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the payload holds no insights.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// First chart-eligible insight in iteration order, if any.
    ///
    /// This is the insight whose chart the page shows on load.
    pub fn first_chart_eligible(&self) -> Option<(&str, &Insight)> {
        self.iter().find(|(_, insight)| insight.require_chart)
    }
}

impl FromIterator<(String, Insight)> for InsightSource {
    fn from_iter<I: IntoIterator<Item = (String, Insight)>>(iter: I) -> Self {
        InsightSource(iter.into_iter().collect())
    }
}

impl Serialize for InsightSource {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (key, insight) in &self.0 {
            map.serialize_entry(key, insight)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for InsightSource {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SourceVisitor;

        impl<'de> Visitor<'de> for SourceVisitor {
            type Value = InsightSource;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON object keyed by insight id")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((key, insight)) = access.next_entry::<String, Insight>()? {
                    entries.push((key, insight));
                }
                Ok(InsightSource(entries))
            }
        }

        deserializer.deserialize_map(SourceVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn require_chart_accepts_both_encodings() {
        let native: Insight =
            serde_json::from_str(r#"{"title": "a", "description": "b", "requireChart": true}"#)
                .unwrap();
        assert!(native.require_chart);

        let stringly: Insight =
            serde_json::from_str(r#"{"title": "a", "description": "b", "requireChart": "true"}"#)
                .unwrap();
        assert!(stringly.require_chart);

        let negative: Insight =
            serde_json::from_str(r#"{"title": "a", "description": "b", "requireChart": "false"}"#)
                .unwrap();
        assert!(!negative.require_chart);
    }

    #[test]
    fn require_chart_rejects_other_strings() {
        let result =
            serde_json::from_str::<Insight>(r#"{"title": "a", "requireChart": "maybe"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let insight: Insight = serde_json::from_str("{}").unwrap();
        assert_eq!(insight.title, "");
        assert_eq!(insight.description, "");
        assert!(!insight.require_chart);
        assert!(insight.details.is_none());
    }

    #[test]
    fn source_preserves_insertion_order() {
        let source = InsightSource::from_json_str(
            r#"{
                "zulu": {"title": "Z"},
                "alpha": {"title": "A"},
                "mike": {"title": "M"}
            }"#,
        )
        .unwrap();

        let keys: Vec<&str> = source.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["zulu", "alpha", "mike"]);
    }

    #[test]
    fn first_chart_eligible_skips_chartless_insights() {
        let source = InsightSource::from_json_str(
            r#"{
                "a": {"title": "T1", "requireChart": false},
                "b": {"title": "T2", "requireChart": "true", "details": {"spec": 2}},
                "c": {"title": "T3", "requireChart": true, "details": {"spec": 3}}
            }"#,
        )
        .unwrap();

        let (key, insight) = source.first_chart_eligible().unwrap();
        assert_eq!(key, "b");
        assert_eq!(insight.title, "T2");
    }

    #[test]
    fn first_chart_eligible_is_none_without_charts() {
        let source =
            InsightSource::from_json_str(r#"{"a": {"title": "T1", "requireChart": "false"}}"#)
                .unwrap();
        assert!(source.first_chart_eligible().is_none());
    }

    #[test]
    fn reserializes_flag_as_canonical_bool() {
        let source = InsightSource::from_json_str(
            r#"{"a": {"title": "T1", "description": "D1", "requireChart": "true"}}"#,
        )
        .unwrap();

        let json = serde_json::to_string(&source).unwrap();
        assert!(json.contains(r#""requireChart":true"#));
        assert!(!json.contains(r#""requireChart":"true""#));
    }

    #[test]
    fn rejects_non_object_payloads() {
        assert!(InsightSource::from_json_str("[1, 2, 3]").is_err());
        assert!(InsightSource::from_json_str("not json").is_err());
    }

    #[test]
    fn get_finds_by_key() {
        let source = InsightSource::from_json_str(
            r#"{"a": {"title": "T1"}, "b": {"title": "T2"}}"#,
        )
        .unwrap();

        assert_eq!(source.get("b").unwrap().title, "T2");
        assert!(source.get("missing").is_none());
    }
}
