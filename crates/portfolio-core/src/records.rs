//! Records served by the remote document store.
//!
//! Field names follow the store's camelCase schema. Every field except the
//! document id is optional: submissions come from a loosely validated form
//! and older documents miss fields that newer ones carry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum number of stars a testimonial can show.
pub const MAX_STARS: u8 = 5;

/// An uploaded screenshot attached to a client proof.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProofImage {
    pub url: String,
    pub file_name: Option<String>,
    pub uploaded_at: Option<String>,
}

impl ProofImage {
    /// Alt text, falling back to a 1-based position label.
    pub fn alt_text(&self, position: usize) -> String {
        self.file_name
            .clone()
            .unwrap_or_else(|| format!("Client proof {}", position + 1))
    }
}

/// A client-proof entry (collection `clientProofs`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientProofRecord {
    pub id: String,
    pub client_name: Option<String>,
    pub project_type: Option<String>,
    pub payment_type: Option<String>,
    pub total_budget: Option<f64>,
    pub images: Vec<ProofImage>,
    pub image_count: Option<u32>,
    pub created_at: Option<String>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub submitted_at: Option<DateTime<Utc>>,
}

impl ClientProofRecord {
    pub fn display_name(&self) -> &str {
        self.client_name.as_deref().unwrap_or("Anonymous client")
    }

    /// Budget rendered as whole dollars, e.g. `$1,250`.
    pub fn budget_label(&self) -> Option<String> {
        self.total_budget.map(format_dollars)
    }

    pub fn cover_image(&self) -> Option<&ProofImage> {
        self.images.first()
    }
}

/// A client review (collection `reviews`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TestimonialRecord {
    pub id: String,
    pub client_name: Option<String>,
    pub country: Option<String>,
    pub project_name: Option<String>,
    pub project_type: Option<String>,
    pub rating: Option<f64>,
    pub rating_label: Option<String>,
    pub review: Option<String>,
    pub amount: Option<String>,
    #[serde(deserialize_with = "lenient_timestamp")]
    pub timestamp: Option<DateTime<Utc>>,
    pub created_at: Option<String>,
}

impl TestimonialRecord {
    pub fn display_name(&self) -> &str {
        self.client_name.as_deref().unwrap_or("Anonymous client")
    }

    /// Stars to draw: the rating rounded down and capped at 5.
    ///
    /// Missing, non-finite or sub-one ratings draw the full 5.
    pub fn star_count(&self) -> u8 {
        match self.rating {
            Some(r) if r.is_finite() && r >= 1.0 => r.floor().min(f64::from(MAX_STARS)) as u8,
            _ => MAX_STARS,
        }
    }

    /// Two-letter avatar initials from the client name.
    pub fn initials(&self) -> String {
        self.display_name()
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

/// A new client submitted through the admin path (collection `clients`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientDraft {
    pub client_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_budget: Option<f64>,
    /// Stamped by the store when the draft is written
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Aggregate figures shown above the testimonial carousel.
#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialStats {
    pub review_count: usize,
    /// Mean rating, `None` when there are no reviews
    pub average_rating: Option<f64>,
    /// Sum of the leading integer of every `amount`
    pub total_amount: i64,
}

impl TestimonialStats {
    pub fn from_records(records: &[TestimonialRecord]) -> Self {
        let review_count = records.len();
        let average_rating = if review_count == 0 {
            None
        } else {
            let sum: f64 = records
                .iter()
                .map(|r| r.rating.filter(|v| v.is_finite()).unwrap_or(0.0))
                .sum();
            Some(sum / review_count as f64)
        };
        let total_amount = records
            .iter()
            .filter_map(|r| r.amount.as_deref())
            .filter_map(leading_integer)
            .fold(0i64, i64::saturating_add);
        Self {
            review_count,
            average_rating,
            total_amount,
        }
    }

    /// e.g. `12+`
    pub fn review_label(&self) -> String {
        format!("{}+", self.review_count)
    }

    /// One decimal place; `5.0` before any review arrives.
    pub fn rating_label(&self) -> String {
        format!("{:.1}", self.average_rating.unwrap_or(5.0))
    }

    /// Project value in thousands, e.g. `$42K+`.
    pub fn value_label(&self) -> String {
        format!("${:.0}K+", self.total_amount as f64 / 1000.0)
    }
}

/// Parse the integer prefix of `s`, ignoring leading whitespace.
///
/// `"1500 USD"` gives 1500; `"$1500"` and `""` give `None`.
pub fn leading_integer(s: &str) -> Option<i64> {
    let s = s.trim_start();
    let (sign, digits) = match s.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, s.strip_prefix('+').unwrap_or(s)),
    };
    let end = digits
        .char_indices()
        .find(|(_, c)| !c.is_ascii_digit())
        .map(|(i, _)| i)
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

/// Accept RFC 3339 strings; anything else becomes `None` instead of failing
/// the whole record.
fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw
        .as_ref()
        .and_then(serde_json::Value::as_str)
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|t| t.with_timezone(&Utc)))
}

fn format_dollars(amount: f64) -> String {
    let whole = amount.round() as i64;
    let digits = whole.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if whole < 0 {
        format!("-${}", grouped)
    } else {
        format!("${}", grouped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: Option<f64>, amount: Option<&str>) -> TestimonialRecord {
        TestimonialRecord {
            id: "r".to_string(),
            rating,
            amount: amount.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn stats_for_empty_list_use_placeholders() {
        let stats = TestimonialStats::from_records(&[]);
        assert_eq!(stats.review_label(), "0+");
        assert_eq!(stats.rating_label(), "5.0");
        assert_eq!(stats.value_label(), "$0K+");
    }

    #[test]
    fn stats_average_counts_missing_ratings_as_zero() {
        let records = vec![
            review(Some(5.0), Some("1500")),
            review(Some(4.0), Some("2500 USD")),
            review(None, Some("$900")),
        ];
        let stats = TestimonialStats::from_records(&records);
        assert_eq!(stats.review_count, 3);
        assert_eq!(stats.rating_label(), "3.0");
        assert_eq!(stats.total_amount, 4000);
        assert_eq!(stats.value_label(), "$4K+");
    }

    #[test]
    fn leading_integer_parsing() {
        assert_eq!(leading_integer("  42abc"), Some(42));
        assert_eq!(leading_integer("-7"), Some(-7));
        assert_eq!(leading_integer("abc"), None);
        assert_eq!(leading_integer(""), None);
    }

    #[test]
    fn star_count_defaults_and_caps() {
        assert_eq!(review(None, None).star_count(), 5);
        assert_eq!(review(Some(4.6), None).star_count(), 4);
        assert_eq!(review(Some(9.0), None).star_count(), 5);
        assert_eq!(review(Some(0.0), None).star_count(), 5);
        assert_eq!(review(Some(0.5), None).star_count(), 5);
        assert_eq!(review(Some(-3.0), None).star_count(), 5);
    }

    #[test]
    fn total_amount_saturates_instead_of_overflowing() {
        let records = vec![
            review(Some(5.0), Some("9223372036854775807")),
            review(Some(5.0), Some("9223372036854775800 USD")),
            review(Some(5.0), Some("10")),
        ];
        let stats = TestimonialStats::from_records(&records);
        assert_eq!(stats.total_amount, i64::MAX);
        assert_eq!(stats.review_count, 3);
    }

    #[test]
    fn budget_label_groups_thousands() {
        let proof = ClientProofRecord {
            total_budget: Some(1250000.4),
            ..Default::default()
        };
        assert_eq!(proof.budget_label().as_deref(), Some("$1,250,000"));
    }

    #[test]
    fn initials_from_name() {
        let record = TestimonialRecord {
            client_name: Some("ada lovelace byron".to_string()),
            ..Default::default()
        };
        assert_eq!(record.initials(), "AL");
    }

    #[test]
    fn proof_deserializes_from_camel_case() {
        let json = serde_json::json!({
            "id": "p1",
            "clientName": "Acme",
            "totalBudget": 1200.0,
            "images": [{ "url": "https://img/1.png", "fileName": "one.png" }],
            "submittedAt": "2025-03-01T10:00:00Z"
        });
        let proof: ClientProofRecord = serde_json::from_value(json).unwrap();
        assert_eq!(proof.display_name(), "Acme");
        assert_eq!(proof.images[0].alt_text(0), "one.png");
        assert!(proof.submitted_at.is_some());
    }

    #[test]
    fn malformed_timestamp_is_dropped() {
        let json = serde_json::json!({ "id": "r1", "timestamp": "last tuesday", "rating": 4 });
        let review: TestimonialRecord = serde_json::from_value(json).unwrap();
        assert_eq!(review.timestamp, None);
        assert_eq!(review.rating, Some(4.0));
    }
}
