use axum::Json;
use axum::extract::State;
use serde::{Deserialize, Serialize};

use somnus_core::models::record::RawRecord;
use somnus_core::models::report::ScoreReport;
use somnus_core::models::sort_spec::SortSpec;
use somnus_roster::NameOrder;

use crate::error::ApiError;
use crate::state::AppState;

/// A sort order given either as a list or as free text (one name per line
/// or comma separated).
#[derive(Deserialize, Default)]
pub struct SortInput {
    #[serde(default)]
    pub sort_spec: Option<SortSpec>,
    #[serde(default)]
    pub sort_text: Option<String>,
}

impl SortInput {
    fn resolve(self) -> Result<Option<SortSpec>, ApiError> {
        match (self.sort_spec, self.sort_text) {
            (Some(_), Some(_)) => Err(ApiError::BadRequest(
                "provide either sort_spec or sort_text, not both".to_string(),
            )),
            (Some(spec), None) => Ok(Some(spec)),
            (None, Some(text)) => Ok(Some(SortSpec::parse(&text))),
            (None, None) => Ok(None),
        }
    }
}

#[derive(Deserialize)]
pub struct ScoreRequest {
    pub records: Vec<RawRecord>,
    #[serde(flatten)]
    pub sort: SortInput,
}

#[derive(Serialize)]
pub struct ScoreResponse {
    pub reports: Vec<ScoreReport>,
}

/// Score extracted survey records, optionally ordered by a name list.
pub async fn score(
    State(state): State<AppState>,
    Json(req): Json<ScoreRequest>,
) -> Result<Json<ScoreResponse>, ApiError> {
    let sort_spec = req.sort.resolve()?;
    let scorer = state.scorer;
    // Scoring is CPU-bound and may fan out over rayon; keep it off the
    // async workers.
    let reports = tokio::task::spawn_blocking(move || {
        scorer.score_batch_ordered(&req.records, sort_spec.as_ref())
    })
    .await?;
    Ok(Json(ScoreResponse { reports }))
}

#[derive(Deserialize)]
pub struct ReorderRequest {
    pub reports: Vec<ScoreReport>,
    #[serde(flatten)]
    pub sort: SortInput,
}

#[derive(Serialize)]
pub struct ReorderResponse {
    pub reports: Vec<ScoreReport>,
    /// Report names that matched nothing in the sort list.
    pub unmatched: Vec<String>,
}

/// Reorder already-scored reports by a name list.
pub async fn reorder(Json(req): Json<ReorderRequest>) -> Result<Json<ReorderResponse>, ApiError> {
    let sort_spec = req.sort.resolve()?.unwrap_or_default();
    let order = NameOrder::from_spec(&sort_spec);

    let unmatched = if order.is_empty() {
        Vec::new()
    } else {
        order
            .unmatched(&req.reports)
            .into_iter()
            .map(str::to_string)
            .collect()
    };
    let reports = order.apply(req.reports);

    Ok(Json(ReorderResponse { reports, unmatched }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use somnus_batch::BatchScorer;

    fn record(id: &str, name: &str) -> RawRecord {
        RawRecord {
            id: id.to_string(),
            name: name.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn score_orders_reports_by_sort_text() {
        let state = AppState {
            scorer: BatchScorer::default(),
        };
        let req = ScoreRequest {
            records: vec![record("1", "李四"), record("2", "张三")],
            sort: SortInput {
                sort_spec: None,
                sort_text: Some("张三\n李四".to_string()),
            },
        };

        let Json(resp) = score(State(state), Json(req)).await.unwrap();
        let ids: Vec<&str> = resp.reports.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["2", "1"]);
    }

    #[test]
    fn sort_input_rejects_both_forms() {
        let input = SortInput {
            sort_spec: Some(SortSpec::from(["张三"])),
            sort_text: Some("张三".to_string()),
        };
        assert!(matches!(input.resolve(), Err(ApiError::BadRequest(_))));
    }
}
