mod cli;
mod demo;
mod infra;
mod routes;
mod server;

use rice_backlog::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
