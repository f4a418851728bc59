//! Marks a registered user as approved so they can sign in.
//!
//! Usage: `approve_user <email>`

use std::env;
use std::process::ExitCode;

use dotenvy::dotenv;

use fitflow::db::establish_connection_pool;
use fitflow::dto::user::ApprovalOutcome;
use fitflow::models::config::ServerConfig;
use fitflow::repository::DieselRepository;
use fitflow::services::{ServiceError, users};

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let Some(email) = env::args().nth(1) else {
        eprintln!("Usage: approve_user <email>");
        return ExitCode::FAILURE;
    };

    let server_config = match ServerConfig::load() {
        Ok(server_config) => server_config,
        Err(err) => {
            log::error!("Error loading server config: {err}");
            return ExitCode::FAILURE;
        }
    };

    let pool = match establish_connection_pool(&server_config.database_url) {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("Failed to establish database connection: {e}");
            return ExitCode::FAILURE;
        }
    };
    let repo = DieselRepository::new(pool);

    match users::approve_user_by_email(&repo, &email) {
        Ok(ApprovalOutcome::Approved(user)) => {
            println!("Approved {} ({}, {})", user.email, user.name, user.role);
            ExitCode::SUCCESS
        }
        Ok(ApprovalOutcome::AlreadyApproved(user)) => {
            println!("{} is already approved", user.email);
            ExitCode::SUCCESS
        }
        Err(ServiceError::NotFound) => {
            eprintln!("No user with email {}", email.trim());
            ExitCode::FAILURE
        }
        Err(err) => {
            log::error!("Failed to approve {email}: {err}");
            ExitCode::FAILURE
        }
    }
}
