use sea_orm::DatabaseConnection;

use crate::server::{
    config::{AdminSeed, Config},
    data::role::RoleRepository,
    error::AppError,
    handler,
    identity::{JwtService, UserManager},
    mediator::Mediator,
    model::{
        role::{ADMIN_ROLE, USER_ROLE},
        user::CreateUserParams,
    },
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is up-to-date
/// before any request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Makes sure the `Admin` and `User` roles exist.
pub async fn seed_roles(db: &DatabaseConnection) -> Result<(), AppError> {
    let role_repo = RoleRepository::new(db);
    for name in [ADMIN_ROLE, USER_ROLE] {
        role_repo.get_or_create(name).await?;
    }

    Ok(())
}

/// Creates the configured administrator unless a user with that name exists.
///
/// # Arguments
/// - `db` - Database connection, roles must already be seeded
/// - `config` - Application configuration, nothing happens without an `admin` seed
///
/// # Returns
/// - `Ok(())` - Administrator present or nothing configured
/// - `Err(AppError)` - Seed credentials rejected by the identity rules or database error
pub async fn seed_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let Some(seed) = &config.admin else {
        return Ok(());
    };

    let manager = UserManager::new(db);
    if manager.find_by_user_name(&seed.user_name).await?.is_some() {
        return Ok(());
    }

    let user = manager
        .create(admin_params(seed), &seed.password, &[ADMIN_ROLE, USER_ROLE])
        .await?;

    tracing::info!("Created administrator {}", user.user_name);

    Ok(())
}

fn admin_params(seed: &AdminSeed) -> CreateUserParams {
    CreateUserParams {
        full_name: seed.user_name.clone(),
        user_name: seed.user_name.clone(),
        email: seed.email.clone(),
        address: None,
        country: None,
        phone_number: None,
    }
}

/// Builds the mediator with every handler registered.
///
/// # Returns
/// - `Ok(Mediator)` - Ready to dispatch
/// - `Err(AppError::DispatchErr)` - A request type has two handlers
pub fn build_mediator(db: &DatabaseConnection, jwt: &JwtService) -> Result<Mediator, AppError> {
    let builder = handler::register_all(Mediator::builder(), db, jwt)?;

    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::config::JwtSettings;
    use test_utils::builder::TestBuilder;

    fn config(admin: Option<AdminSeed>) -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            bind_address: "127.0.0.1:0".to_string(),
            jwt: JwtSettings {
                secret: "startup-test-secret".to_string(),
                issuer: "school-api".to_string(),
                audience: "school-api-clients".to_string(),
                access_token_minutes: 60,
            },
            admin,
        }
    }

    fn seed() -> AdminSeed {
        AdminSeed {
            user_name: "admin".to_string(),
            email: "admin@school.test".to_string(),
            password: "Admin123!".to_string(),
        }
    }

    /// Expected: both roles exist once, even when seeding runs twice
    #[tokio::test]
    async fn seeds_roles_idempotently() -> Result<(), AppError> {
        let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        seed_roles(db).await?;
        seed_roles(db).await?;

        let names: Vec<String> = RoleRepository::new(db)
            .get_all()
            .await?
            .into_iter()
            .map(|role| role.name)
            .collect();

        assert_eq!(names.len(), 2);
        assert!(names.contains(&ADMIN_ROLE.to_string()));
        assert!(names.contains(&USER_ROLE.to_string()));

        Ok(())
    }

    /// Expected: administrator created with both roles, second run is a no-op
    #[tokio::test]
    async fn seeds_admin_once() -> Result<(), AppError> {
        let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let config = config(Some(seed()));

        seed_roles(db).await?;
        seed_admin(db, &config).await?;
        seed_admin(db, &config).await?;

        let manager = UserManager::new(db);
        let admin = manager.find_by_user_name("admin").await?.unwrap();
        let mut roles = manager.roles(admin.id).await?;
        roles.sort();

        assert_eq!(roles, vec![ADMIN_ROLE.to_string(), USER_ROLE.to_string()]);
        assert!(manager.check_password(&admin, "Admin123!")?);

        Ok(())
    }

    /// Expected: Ok and no users when no administrator is configured
    #[tokio::test]
    async fn skips_admin_without_seed() -> Result<(), AppError> {
        let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        seed_admin(db, &config(None)).await?;

        assert!(UserManager::new(db).find_by_user_name("admin").await?.is_none());

        Ok(())
    }

    /// Expected: Ok, every request type registered exactly once
    #[tokio::test]
    async fn builds_mediator_without_duplicates() -> Result<(), AppError> {
        let test = TestBuilder::new().with_identity_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let jwt = JwtService::new(&config(None).jwt);

        build_mediator(db, &jwt)?;

        Ok(())
    }
}
