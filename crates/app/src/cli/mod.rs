use clap::{Parser, Subcommand};

mod db;
mod ingredient;
mod token;
mod user;

#[derive(Debug, Parser)]
#[command(name = "pantry-app", about = "Pantry CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Db(db::DbCommand),
    User(user::UserCommand),
    Token(token::TokenCommand),
    Ingredient(ingredient::IngredientCommand),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        match self.command {
            Commands::Db(command) => db::run(command).await,
            Commands::User(command) => user::run(command).await,
            Commands::Token(command) => token::run(command).await,
            Commands::Ingredient(command) => ingredient::run(command).await,
        }
    }
}

/// Parse an optional RFC 3339 expiry that must lie in the future.
pub(crate) fn parse_expires_at(raw: Option<&str>) -> Result<Option<jiff::Timestamp>, String> {
    let expires_at = raw
        .map(|value| {
            value
                .parse::<jiff::Timestamp>()
                .map_err(|error| format!("invalid token-expires-at timestamp: {error}"))
        })
        .transpose()?;

    if let Some(expires_at) = expires_at.as_ref()
        && *expires_at <= jiff::Timestamp::now()
    {
        return Err("token-expires-at must be in the future".to_string());
    }

    Ok(expires_at)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_expiry_is_none() {
        assert_eq!(parse_expires_at(None), Ok(None));
    }

    #[test]
    fn past_expiry_is_rejected() {
        assert!(parse_expires_at(Some("2000-01-01T00:00:00Z")).is_err());
    }

    #[test]
    fn garbage_expiry_is_rejected() {
        assert!(parse_expires_at(Some("tomorrow")).is_err());
    }

    #[test]
    fn future_expiry_is_accepted() {
        assert!(matches!(
            parse_expires_at(Some("2999-01-01T00:00:00Z")),
            Ok(Some(_))
        ));
    }

    #[test]
    fn parses_db_migrate_command() {
        let cli = Cli::try_parse_from([
            "pantry-app",
            "db",
            "migrate",
            "--database-url",
            "postgres://localhost/pantry",
        ]);

        assert!(cli.is_ok(), "expected db migrate to parse: {cli:?}");
    }

    #[test]
    fn parses_user_create_command() {
        let cli = Cli::try_parse_from([
            "pantry-app",
            "user",
            "create",
            "--database-url",
            "postgres://localhost/pantry",
            "--email",
            "cook@example.com",
            "--username",
            "cook",
        ]);

        assert!(cli.is_ok(), "expected user create to parse: {cli:?}");
    }
}
