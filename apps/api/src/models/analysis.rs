#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// One stored resume analysis: the raw text, the parsed section document,
/// and the precomputed per-section issue flags.
///
/// `parsed_resume` and `analysis_result` are loosely shaped JSON produced
/// upstream — no schema is enforced here. NULL columns are normal for rows
/// whose parse or analysis step has not completed.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeAnalysisRow {
    pub id: Uuid,
    pub resume_text: Option<String>,
    pub parsed_resume: Option<Value>,
    pub analysis_result: Option<Value>,
    pub created_at: DateTime<Utc>,
}
