//! Prints every account, newest first, followed by totals.

use std::process::ExitCode;

use dotenvy::dotenv;

use fitflow::db::establish_connection_pool;
use fitflow::dto::user::UserSummary;
use fitflow::models::config::ServerConfig;
use fitflow::repository::{DieselRepository, UserReader};

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

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

    let users = match repo.list_users() {
        Ok(users) => users,
        Err(e) => {
            log::error!("Failed to list users: {e}");
            return ExitCode::FAILURE;
        }
    };

    for user in &users {
        println!(
            "#{:<5} {:<32} {:<8} {:<9} {:<8} {}",
            user.id.get(),
            user.email.as_str(),
            user.role.as_str(),
            if user.is_approved { "approved" } else { "pending" },
            user.gender.as_ref().map_or("-", |g| g.as_str()),
            user.created_at.format("%Y-%m-%d %H:%M"),
        );
    }

    let summary = UserSummary::from_users(&users);
    println!();
    println!(
        "Total: {} (approved: {}, pending: {})",
        summary.total, summary.approved, summary.pending
    );
    println!(
        "Roles: admin {}, styler {}, partner {}",
        summary.admins, summary.stylers, summary.partners
    );

    ExitCode::SUCCESS
}
