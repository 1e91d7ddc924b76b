use clap::{Args, Parser, Subcommand};
use loan_intake::config::AppConfig;
use loan_intake::error::AppError;
use loan_intake::{telemetry, ApplicationController, FormField, SubmissionClient};

use crate::render;

#[derive(Parser, Debug)]
#[command(
    name = "Loan Application Intake",
    about = "Validate a loan application and submit it to the decision service",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit a loan application and print the decision
    Apply(ApplyArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ApplyArgs {
    /// Applicant full name
    #[arg(long, default_value = "")]
    name: String,
    /// Street address
    #[arg(long, default_value = "")]
    address: String,
    /// Contact email, e.g. jane@example.com
    #[arg(long, default_value = "")]
    email: String,
    /// Phone number; punctuation is stripped before submission
    #[arg(long, default_value = "")]
    phone: String,
    /// Social security number; punctuation is stripped before submission
    #[arg(long, default_value = "")]
    ssn: String,
    /// Requested loan amount in dollars
    #[arg(long, default_value = "")]
    requested_amount: String,
    /// Employment status, e.g. EMPLOYED
    #[arg(long)]
    employment_status: Option<String>,
    /// Gross monthly income in dollars
    #[arg(long)]
    monthly_income: Option<String>,
    /// Existing monthly debt obligations in dollars
    #[arg(long)]
    existing_debt: Option<String>,
    /// Override the configured decision service base URL
    #[arg(long)]
    base_url: Option<String>,
    /// Override the configured decision endpoint path
    #[arg(long)]
    endpoint: Option<String>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Apply(args) => run_apply(args).await,
    }
}

async fn run_apply(mut args: ApplyArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(base_url) = args.base_url.take() {
        config.api.base_url = base_url;
    }
    if let Some(endpoint) = args.endpoint.take() {
        config.api.endpoint = endpoint;
    }

    telemetry::init(&config.telemetry)?;

    let client = SubmissionClient::new(&config.api.client_config())?;
    let mut controller = ApplicationController::new(client);

    controller.edit(FormField::Name, args.name);
    controller.edit(FormField::Address, args.address);
    controller.edit(FormField::Email, args.email);
    controller.edit(FormField::Phone, args.phone);
    controller.edit(FormField::Ssn, args.ssn);
    controller.edit(FormField::RequestedAmount, args.requested_amount);
    if let Some(status) = args.employment_status.take() {
        controller.edit(FormField::EmploymentStatus, status);
    }
    if let Some(income) = args.monthly_income.take() {
        controller.edit(FormField::MonthlyIncome, income);
    }
    if let Some(debt) = args.existing_debt.take() {
        controller.edit(FormField::ExistingDebt, debt);
    }

    match controller.submit().await {
        Ok(outcome) => {
            println!("{}", render::render_outcome(&outcome));
            Ok(())
        }
        Err(err) => {
            eprint!("{}", render::render_field_errors(controller.errors()));
            Err(AppError::Submit(err))
        }
    }
}
