use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::{Client, ClientBuilder};
use serde::Serialize;

use crate::api::models::Answer;
use crate::error::{AppError, Result};

// Shared client so connections to the query backend are pooled.
static CLIENT: Lazy<Client> = Lazy::new(|| {
    ClientBuilder::new()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(5))
        .build()
        .expect("Failed to build HTTP client")
});

#[derive(Serialize)]
struct QuestionBody<'a> {
    question: &'a str,
}

/// Forward a question to the external answering service and relay its answer.
pub async fn forward_question(backend_url: &str, question: &str) -> Result<Answer> {
    let res = CLIENT
        .post(backend_url)
        .json(&QuestionBody { question })
        .send()
        .await?;

    if !res.status().is_success() {
        return Err(AppError::QueryError(format!(
            "query backend returned status {}",
            res.status()
        )));
    }

    let answer: Answer = res
        .json()
        .await
        .map_err(|e| AppError::QueryError(format!("invalid answer payload: {}", e)))?;

    Ok(answer)
}
