use clap::Args;
use pantry_app::{
    database::{self, Db},
    domain::recipes::{
        PgRecipesService, RecipesService,
        records::{IngredientRecord, IngredientUuid},
    },
};

#[derive(Debug, Args)]
pub(crate) struct CreateIngredientArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Ingredient name, e.g. "Flour"
    #[arg(long)]
    name: String,

    /// Unit amounts are measured in, e.g. "g"
    #[arg(long)]
    measurement_unit: String,
}

pub(crate) async fn run(args: CreateIngredientArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let ingredient = PgRecipesService::new(Db::new(pool))
        .create_ingredient(IngredientRecord {
            uuid: IngredientUuid::new(),
            name: args.name,
            measurement_unit: args.measurement_unit,
        })
        .await
        .map_err(|error| format!("failed to create ingredient: {error}"))?;

    println!("ingredient_uuid: {}", ingredient.uuid);
    println!("name: {}", ingredient.name);
    println!("measurement_unit: {}", ingredient.measurement_unit);

    Ok(())
}
