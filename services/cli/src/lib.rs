mod cli;
mod render;

use loan_intake::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
