mod cli;
mod evaluate;
mod infra;
mod routes;
mod server;

use risk_decision::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
