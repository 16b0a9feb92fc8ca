//! This module contains the JSON adapter that exposes the engine over HTTP.
//!
//! Two routes are provided, both always answering with status 200 and a JSON
//! body, matching the original service:
//!
//! * `POST /api/solve` takes `{ "puzzle": <string> }` and answers with
//! `{ "solution": <81 digits> }` or `{ "error": <message> }`.
//! * `POST /api/check` takes `{ "puzzle", "coordinate", "value" }` (all
//! strings) and answers with `{ "valid": true }`,
//! `{ "valid": false, "conflict": [<axes>] }`, or `{ "error": <message> }`.
//!
//! The handlers validate their fields in a fixed order (missing fields,
//! puzzle length, puzzle characters, coordinate, value, solvability) and do
//! not contain any puzzle logic themselves.

use axum::routing::post;
use axum::{Json, Router};

use serde::{Deserialize, Serialize};

use crate::constraint::Axis;
use crate::error::{PuzzleError, PuzzleResult};
use crate::{parse_value, solver, Coordinate, SudokuGrid};

/// Creates the application router with the `/api/solve` and `/api/check`
/// routes. The returned router is stateless, so concurrent requests are
/// fully independent.
pub fn router() -> Router {
    Router::new()
        .route("/api/solve", post(solve))
        .route("/api/check", post(check))
}

#[derive(Debug, Deserialize)]
struct SolveRequest {
    puzzle: Option<String>
}

#[derive(Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
enum SolveResponse {
    Solution { solution: String },
    Error { error: String }
}

#[derive(Debug, Deserialize)]
struct CheckRequest {
    puzzle: Option<String>,
    coordinate: Option<String>,
    value: Option<String>
}

#[derive(Debug, Eq, PartialEq, Serialize)]
#[serde(untagged)]
enum CheckResponse {
    Valid { valid: bool },
    Conflict { valid: bool, conflict: Vec<Axis> },
    Error { error: String }
}

async fn solve(Json(request): Json<SolveRequest>) -> Json<SolveResponse> {
    Json(match solve_puzzle(&request) {
        Ok(solution) => SolveResponse::Solution { solution },
        Err(error) => {
            log::debug!("solve request rejected: {}", error);
            SolveResponse::Error { error: error.to_string() }
        }
    })
}

fn solve_puzzle(request: &SolveRequest) -> PuzzleResult<String> {
    let raw = request.puzzle.as_deref().ok_or(PuzzleError::MissingField)?;
    let grid = SudokuGrid::parse(raw)?;
    let solution = solver::solve(&grid)?;

    Ok(solution.to_string())
}

async fn check(Json(request): Json<CheckRequest>) -> Json<CheckResponse> {
    Json(match check_placement(&request) {
        Ok(conflict) if conflict.is_empty() =>
            CheckResponse::Valid { valid: true },
        Ok(conflict) => CheckResponse::Conflict {
            valid: false,
            conflict
        },
        Err(error) => {
            log::debug!("check request rejected: {}", error);
            CheckResponse::Error { error: error.to_string() }
        }
    })
}

fn check_placement(request: &CheckRequest) -> PuzzleResult<Vec<Axis>> {
    let (raw, coordinate, value) = match (&request.puzzle,
            &request.coordinate, &request.value) {
        (Some(raw), Some(coordinate), Some(value)) =>
            (raw, coordinate, value),
        _ => return Err(PuzzleError::MissingFields)
    };
    let grid = SudokuGrid::parse(raw)?;
    let coordinate = Coordinate::parse(coordinate)?;
    let value = parse_value(value)?;

    Ok(grid.conflicts(coordinate, value))
}
