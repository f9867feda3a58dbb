use clap::Args;
use pantry_app::{auth::PgAuthService, database, domain::users::records::UserUuid};

use crate::cli::parse_expires_at;

#[derive(Debug, Args)]
pub(crate) struct CreateTokenArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// User UUID that should own the token
    #[arg(long)]
    user_uuid: UserUuid,

    /// Optional token expiration timestamp (RFC 3339)
    #[arg(long)]
    token_expires_at: Option<String>,
}

pub(crate) async fn run(args: CreateTokenArgs) -> Result<(), String> {
    let token_expires_at = parse_expires_at(args.token_expires_at.as_deref())?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let issued = PgAuthService::new(pool)
        .issue_token(args.user_uuid, token_expires_at)
        .await
        .map_err(|error| format!("failed to create token: {error}"))?;

    println!("token_uuid: {}", issued.record.uuid);
    println!("user_uuid: {}", issued.record.owner);
    println!("token_created_at: {}", issued.record.created_at);
    if let Some(expires_at) = issued.record.expires_at {
        println!("token_expires_at: {expires_at}");
    }
    println!("access_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}
