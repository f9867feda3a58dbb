use clap::Args;
use pantry_app::{
    auth::PgAuthService,
    database::{self, Db},
    domain::users::{PgUsersService, UsersService, data::NewUser, records::UserUuid},
};

use crate::cli::parse_expires_at;

#[derive(Debug, Args)]
pub(crate) struct CreateUserArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Email address
    #[arg(long)]
    email: String,

    /// Unique username
    #[arg(long)]
    username: String,

    #[arg(long, default_value = "")]
    first_name: String,

    #[arg(long, default_value = "")]
    last_name: String,

    /// Optional expiration timestamp (RFC 3339) for the first access token
    #[arg(long)]
    token_expires_at: Option<String>,
}

pub(crate) async fn run(args: CreateUserArgs) -> Result<(), String> {
    let token_expires_at = parse_expires_at(args.token_expires_at.as_deref())?;

    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let user = PgUsersService::new(Db::new(pool.clone()))
        .create_user(NewUser {
            uuid: UserUuid::new(),
            email: args.email,
            username: args.username,
            first_name: args.first_name,
            last_name: args.last_name,
        })
        .await
        .map_err(|error| format!("failed to create user: {error}"))?;

    let issued = PgAuthService::new(pool)
        .issue_token(user.uuid, token_expires_at)
        .await
        .map_err(|error| format!("failed to create token: {error}"))?;

    println!("user_uuid: {}", user.uuid);
    println!("username: {}", user.username);
    println!("token_uuid: {}", issued.record.uuid);
    println!("access_token: {}", issued.token);
    println!("store this token now; it is only shown once");

    Ok(())
}
