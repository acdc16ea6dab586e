//! Route handlers: one GET endpoint per number type.

use axum::Router;
use axum::extract::{Query, State};
use axum::response::Json;
use axum::routing::get;
use serde::Deserialize;
use serde_json::{Map, Value, json};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::AppState;
use crate::error::AppError;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/generate-pesel", get(generate_pesel))
        .route("/generate-idcard", get(generate_idcard))
        .route("/generate-regon9", get(generate_regon9))
        .route("/generate-regon14", get(generate_regon14))
        .route("/generate-nrb", get(generate_nrb))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> Json<Value> {
    Json(json!({"status": "ok"}))
}

#[derive(Debug, Deserialize, Default)]
pub struct PeselQuery {
    year: Option<i64>,
    month: Option<i64>,
    day: Option<i64>,
    sex: Option<String>,
}

async fn generate_pesel(
    State(state): State<AppState>,
    Query(query): Query<PeselQuery>,
) -> Result<Json<Value>, AppError> {
    let mut params = Map::new();
    if let Some(year) = query.year {
        params.insert("year".to_string(), json!(year));
    }
    if let Some(month) = query.month {
        params.insert("month".to_string(), json!(month));
    }
    if let Some(day) = query.day {
        params.insert("day".to_string(), json!(day));
    }
    if let Some(sex) = query.sex {
        params.insert("sex".to_string(), json!(sex));
    }
    let value = dispatch(&state, "pl.pesel", Some(Value::Object(params)))?;
    Ok(Json(json!({"pesel": value})))
}

async fn generate_idcard(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let value = dispatch(&state, "pl.idcard", None)?;
    Ok(Json(json!({"idcard": value})))
}

async fn generate_regon9(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let value = dispatch(&state, "pl.regon9", None)?;
    Ok(Json(json!({"regon": value})))
}

async fn generate_regon14(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let value = dispatch(&state, "pl.regon14", None)?;
    Ok(Json(json!({"regon": value})))
}

#[derive(Debug, Deserialize, Default)]
pub struct NrbQuery {
    bank: Option<String>,
    format: Option<String>,
    iban: Option<bool>,
}

async fn generate_nrb(
    State(state): State<AppState>,
    Query(query): Query<NrbQuery>,
) -> Result<Json<Value>, AppError> {
    let mut params = Map::new();
    if let Some(bank) = query.bank {
        params.insert("bank".to_string(), json!(bank));
    }
    if let Some(format) = query.format {
        params.insert("format".to_string(), json!(format));
    }
    if let Some(iban) = query.iban {
        params.insert("iban".to_string(), json!(iban));
    }
    let value = dispatch(&state, "pl.nrb", Some(Value::Object(params)))?;
    Ok(Json(json!({"nrb": value})))
}

/// Runs one generation with a per-request random stream. Generation is
/// synchronous; the RNG never lives across an await point.
fn dispatch(state: &AppState, id: &str, params: Option<Value>) -> Result<String, AppError> {
    let mut rng = rand::rng();
    let value = state.registry.generate(id, params.as_ref(), &mut rng)?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use fikcja_generate::{BankCodeTable, GeneratorRegistry};

    use super::*;

    fn test_state(codes: &[&str]) -> AppState {
        let table = BankCodeTable::new(codes.iter().copied()).expect("valid codes");
        AppState {
            registry: Arc::new(GeneratorRegistry::new(table)),
        }
    }

    #[tokio::test]
    async fn pesel_endpoint_returns_valid_number() {
        let state = test_state(&["10101010"]);
        let query = PeselQuery {
            year: Some(1990),
            month: Some(2),
            day: Some(17),
            sex: Some("female".to_string()),
        };
        let Json(body) = generate_pesel(State(state), Query(query))
            .await
            .expect("valid query");
        let value = body["pesel"].as_str().expect("pesel field");
        assert!(value.starts_with("900217"));
        fikcja_core::pesel::validate(value).expect("checksum holds");
    }

    #[tokio::test]
    async fn pesel_endpoint_rejects_unsupported_year() {
        let state = test_state(&["10101010"]);
        let query = PeselQuery {
            year: Some(1750),
            ..PeselQuery::default()
        };
        let result = generate_pesel(State(state), Query(query)).await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn nrb_endpoint_honors_format_and_prefix() {
        let state = test_state(&["11402004", "24901044"]);
        let query = NrbQuery {
            bank: Some("1140".to_string()),
            format: Some("spaced".to_string()),
            iban: Some(true),
        };
        let Json(body) = generate_nrb(State(state), Query(query))
            .await
            .expect("valid query");
        let value = body["nrb"].as_str().expect("nrb field");
        assert!(value.starts_with("PL "));
        fikcja_core::nrb::validate(&value.replace(' ', "")[2..]).expect("mod 97 holds");
    }

    #[tokio::test]
    async fn nrb_endpoint_reports_empty_table_as_unavailable() {
        let state = AppState {
            registry: Arc::new(GeneratorRegistry::new(BankCodeTable::default())),
        };
        let result = generate_nrb(State(state), Query(NrbQuery::default())).await;
        assert!(matches!(result, Err(AppError::Unavailable(_))));
    }

    #[tokio::test]
    async fn regon_endpoints_return_valid_numbers() {
        let state = test_state(&["10101010"]);
        let Json(body) = generate_regon9(State(state.clone())).await.expect("ok");
        fikcja_core::regon::validate_regon9(body["regon"].as_str().expect("regon"))
            .expect("checksum holds");
        let Json(body) = generate_regon14(State(state)).await.expect("ok");
        fikcja_core::regon::validate_regon14(body["regon"].as_str().expect("regon"))
            .expect("checksum holds");
    }
}
