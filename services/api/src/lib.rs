mod cli;
mod infra;
mod report;
mod routes;
mod server;

use prompt_atlas::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
