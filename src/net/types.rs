//! Wire DTOs for the research backend's REST responses.
//!
//! DESIGN
//! ======
//! These types mirror the backend payloads exactly and normalize the awkward
//! shapes (parallel nested arrays, string-or-list fields) at deserialization
//! time, so every downstream consumer sees one canonical form.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use super::error::ApiError;

/// Marker substring the synthesis generator emits when a decade introduced
/// nothing beyond prior coverage.
pub const NO_NEW_DISCUSSION_MARKER: &str = "No significant";

/// Accepted-upload acknowledgement from `POST /api/v1/ingestion/upload`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// Database id assigned to the stored document.
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    /// Original filename, echoed back by the server.
    pub filename: String,
    /// Initial pipeline state (`"uploaded"` on acceptance).
    pub status: String,
}

/// A stored document row from `GET /api/v1/ingestion/`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DocumentSummary {
    #[serde(deserialize_with = "deserialize_i64_from_number")]
    pub id: i64,
    pub filename: String,
    /// Pipeline state: `uploaded`, `processing`, `processed`, or `failed`.
    pub status: String,
    /// Detected publication decade once analysis has run.
    #[serde(default, deserialize_with = "deserialize_opt_string_from_scalar")]
    pub decade: Option<String>,
}

/// Response envelope for `GET /api/v1/analysis/search`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query string, echoed back.
    #[serde(default)]
    pub query: String,
    /// Vector-store style result batches; absent when the backend had
    /// nothing to search.
    #[serde(default)]
    pub results: Option<SearchBatches>,
}

/// Parallel nested arrays as produced by the backend's vector-store layer.
///
/// The outer level is one batch per submitted query (this client always
/// submits one, so only batch 0 is meaningful); the inner arrays are
/// index-aligned.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchBatches {
    #[serde(default)]
    pub ids: Vec<Vec<String>>,
    #[serde(default)]
    pub documents: Vec<Vec<String>>,
    #[serde(default)]
    pub metadatas: Vec<Vec<DocumentMeta>>,
}

/// Source metadata attached to a search hit.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DocumentMeta {
    pub title: Option<String>,
    pub author: Option<String>,
    /// Publication year or decade; tolerated as string or number on the wire.
    #[serde(default, deserialize_with = "deserialize_opt_string_from_scalar")]
    pub year: Option<String>,
}

/// One flattened, row-aligned search result.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchHit {
    pub id: String,
    /// Document excerpt matched by the query.
    pub text: String,
    pub meta: DocumentMeta,
}

impl SearchResponse {
    /// Zip the first batch of `ids`/`documents`/`metadatas` into hits.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Shape`] when the three arrays disagree on length;
    /// positional zipping would otherwise fabricate or drop rows silently.
    pub fn into_hits(self) -> Result<Vec<SearchHit>, ApiError> {
        let Some(batches) = self.results else {
            return Ok(Vec::new());
        };
        let ids = batches.ids.into_iter().next().unwrap_or_default();
        let documents = batches.documents.into_iter().next().unwrap_or_default();
        let metadatas = batches.metadatas.into_iter().next().unwrap_or_default();
        if ids.len() != documents.len() || ids.len() != metadatas.len() {
            return Err(ApiError::Shape(format!(
                "misaligned search arrays: {} ids, {} documents, {} metadatas",
                ids.len(),
                documents.len(),
                metadatas.len()
            )));
        }
        Ok(ids
            .into_iter()
            .zip(documents)
            .zip(metadatas)
            .map(|((id, text), meta)| SearchHit { id, text, meta })
            .collect())
    }
}

/// Synthesis report for one concept across the journal archive.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SynthesisReport {
    /// The analyzed concept, echoed back by the generator.
    pub concept: String,
    /// One entry per decade, in the order the report discusses them.
    #[serde(default)]
    pub decades: Vec<DecadeEntry>,
}

/// One decade's worth of synthesis output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecadeEntry {
    /// Decade label, e.g. `"1950s"`.
    pub decade: String,
    /// Topics the decade's material mentioned in passing.
    #[serde(default)]
    pub what_spoken: Vec<String>,
    /// Topics the decade's material discussed substantively.
    #[serde(default)]
    pub what_discussed: Vec<String>,
    /// Newly introduced discussion. The generator emits either a bare string
    /// or a list; normalized to a list here.
    #[serde(default, deserialize_with = "deserialize_string_or_seq")]
    pub new_discussion: Vec<String>,
}

impl DecadeEntry {
    /// True when the decade introduced nothing beyond prior coverage, per
    /// the generator's marker phrase.
    pub fn is_quiet(&self) -> bool {
        self.new_discussion
            .first()
            .is_some_and(|text| text.contains(NO_NEW_DISCUSSION_MARKER))
    }

    /// Display form of `new_discussion`.
    pub fn new_discussion_text(&self) -> String {
        self.new_discussion.join(", ")
    }
}

fn deserialize_i64_from_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => {
            if let Some(int) = number.as_i64() {
                return Ok(int);
            }
            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            if let Some(float) = number.as_f64()
                && float.is_finite()
                && float.fract() == 0.0
                && float >= i64::MIN as f64
                && float <= i64::MAX as f64
            {
                return Ok(float as i64);
            }
            Err(D::Error::custom("expected integer-compatible number"))
        }
        _ => Err(D::Error::custom("expected number")),
    }
}

fn deserialize_opt_string_from_scalar<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Null => Ok(None),
        serde_json::Value::String(text) => Ok(Some(text)),
        serde_json::Value::Number(number) => Ok(Some(number.to_string())),
        _ => Err(D::Error::custom("expected string, number, or null")),
    }
}

fn deserialize_string_or_seq<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrSeq {
        One(String),
        Many(Vec<String>),
    }
    Ok(match StringOrSeq::deserialize(deserializer)? {
        StringOrSeq::One(text) => vec![text],
        StringOrSeq::Many(items) => items,
    })
}
