use axum::Json;
use axum::extract::Path;
use serde::Serialize;

use somnus_instruments::breakpoints::BreakpointTable;
use somnus_instruments::error::InstrumentError;
use somnus_instruments::scoring::Domain;
use somnus_instruments::{all_instruments, get_instrument};

use crate::error::ApiError;

#[derive(Serialize)]
pub struct InstrumentSummary {
    id: String,
    name: String,
}

#[derive(Debug, Serialize)]
pub struct InstrumentDetail {
    id: String,
    name: String,
    domains: Vec<Domain>,
    /// How raw answers are bucketed into component scores.
    breakpoints: Vec<BreakpointTable>,
}

pub async fn list_instruments() -> Json<Vec<InstrumentSummary>> {
    let instruments: Vec<InstrumentSummary> = all_instruments()
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id().to_string(),
            name: i.name().to_string(),
        })
        .collect();
    Json(instruments)
}

pub async fn get_instrument_detail(
    Path(id): Path<String>,
) -> Result<Json<InstrumentDetail>, ApiError> {
    let instrument = get_instrument(&id).ok_or(InstrumentError::UnknownInstrument(id))?;

    Ok(Json(InstrumentDetail {
        id: instrument.id().to_string(),
        name: instrument.name().to_string(),
        domains: instrument.domains().to_vec(),
        breakpoints: instrument.breakpoint_tables().to_vec(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn psqi_detail_includes_breakpoint_tables() {
        let Json(detail) = get_instrument_detail(Path("psqi".to_string()))
            .await
            .unwrap();
        assert_eq!(detail.domains.len(), 1);
        assert_eq!(detail.breakpoints.len(), 6);
    }

    #[tokio::test]
    async fn unknown_instrument_is_not_found() {
        let err = get_instrument_detail(Path("ess".to_string()))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::NotFound(_)));
    }
}
