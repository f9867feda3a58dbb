use clap::Args;
use jiff::Timestamp;
use pantry_app::{
    auth::{PgAuthService, TokenStatus},
    database,
    domain::users::records::UserUuid,
};

#[derive(Debug, Args)]
pub(crate) struct ListTokensArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// User UUID whose tokens should be listed
    #[arg(long)]
    user_uuid: UserUuid,
}

pub(crate) async fn run(args: ListTokensArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let tokens = PgAuthService::new(pool)
        .list_tokens(args.user_uuid)
        .await
        .map_err(|error| format!("failed to list tokens: {error}"))?;

    if tokens.is_empty() {
        println!("no tokens found for user {}", args.user_uuid);
        return Ok(());
    }

    let now = Timestamp::now();

    for token in tokens {
        let state = match (token.status(now), token.expires_at) {
            (TokenStatus::Revoked(at), _) => format!("revoked {at}"),
            (TokenStatus::Expired(at), _) => format!("expired {at}"),
            (TokenStatus::Active, Some(expires_at)) => format!("expires {expires_at}"),
            (TokenStatus::Active, None) => "active".to_string(),
        };

        let last_used = token
            .last_used_at
            .map_or_else(|| "never".to_string(), |value| value.to_string());

        println!(
            "{}  created {}  last used {last_used}  {state}",
            token.uuid, token.created_at
        );
    }

    Ok(())
}
