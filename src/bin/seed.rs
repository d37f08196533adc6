use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use chrono::Utc;
use diesel::RunQueryDsl;
use jnetworks_backend::config::config_loader;
use jnetworks_backend::domain::{
    entities::{
        app_logos::{AppLogoEntity, InsertAppLogoEntity},
        users::InsertUserEntity,
    },
    repositories::{app_logos::AppLogoRepository, users::UserRepository},
    value_objects::{
        broadband_plans::InsertBroadbandPlanModel,
        enums::{app_categories::AppCategory, user_roles::UserRole},
        ott_plans::InsertOttPlanModel,
    },
};
use jnetworks_backend::infrastructure::postgres::{
    postgres_connection::{self, PgPoolSquad},
    repositories::{
        app_logos::AppLogoPostgres, broadband_plans::BroadbandPlanPostgres,
        ott_plans::OttPlanPostgres, users::UserPostgres,
    },
    schema,
};
use jnetworks_backend::usecases::broadband_plans::BroadbandPlanUseCase;
use jnetworks_backend::usecases::ott_plans::OttPlanUseCase;
use tracing::{error, info};
use uuid::Uuid;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        error!("Seeding failed: {}", error);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let dotenvy_env = config_loader::load()?;
    let db_pool = Arc::new(postgres_connection::establish_connection(
        &dotenvy_env.database.url,
    )?);

    clear_tables(&db_pool)?;
    info!("Existing records cleared");

    seed_admin_user(Arc::clone(&db_pool)).await?;
    seed_broadband_plans(Arc::clone(&db_pool)).await?;
    let logos = seed_app_logos(Arc::clone(&db_pool)).await?;
    seed_ott_plans(Arc::clone(&db_pool), &logos).await?;

    info!("Database seeding completed successfully");
    Ok(())
}

fn clear_tables(db_pool: &PgPoolSquad) -> Result<()> {
    let mut conn = db_pool.get()?;

    diesel::delete(schema::ott_plans::table).execute(&mut conn)?;
    diesel::delete(schema::app_logos::table).execute(&mut conn)?;
    diesel::delete(schema::broadband_plans::table).execute(&mut conn)?;
    diesel::delete(schema::users::table).execute(&mut conn)?;

    Ok(())
}

async fn seed_admin_user(db_pool: Arc<PgPoolSquad>) -> Result<()> {
    let email =
        std::env::var("ADMIN_EMAIL").unwrap_or_else(|_| "admin@jnetworks.com".to_string());
    let password = std::env::var("ADMIN_PASSWORD").unwrap_or_else(|_| "admin123".to_string());

    let salt = SaltString::generate(&mut OsRng);
    let password_hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|err| anyhow!("failed to hash admin password: {err}"))?
        .to_string();

    let user_repository = UserPostgres::new(db_pool);
    user_repository
        .insert(InsertUserEntity {
            id: Uuid::new_v4(),
            email: email.clone(),
            password_hash,
            role: UserRole::Admin.to_string(),
            created_at: Utc::now(),
        })
        .await?;

    info!(%email, "Admin user created");
    Ok(())
}

async fn seed_broadband_plans(db_pool: Arc<PgPoolSquad>) -> Result<()> {
    let usecase = BroadbandPlanUseCase::new(Arc::new(BroadbandPlanPostgres::new(db_pool)));

    let plans = vec![
        broadband_plan(
            "Starter",
            50,
            "Perfect for basic internet usage",
            [599, 1650, 3000, 5500],
            &["50 Mbps Speed", "Unlimited Data", "24/7 Support"],
            1,
        ),
        broadband_plan(
            "Standard",
            100,
            "Great for streaming and gaming",
            [799, 2200, 4000, 7500],
            &[
                "100 Mbps Speed",
                "Unlimited Data",
                "24/7 Support",
                "Priority Support",
            ],
            2,
        ),
        broadband_plan(
            "Premium",
            200,
            "Ultimate speed for power users",
            [999, 2750, 5000, 9500],
            &[
                "200 Mbps Speed",
                "Unlimited Data",
                "24/7 Support",
                "Priority Support",
                "Free Installation",
            ],
            3,
        ),
    ];

    for plan in plans {
        usecase
            .create(plan)
            .await
            .map_err(|err| anyhow!("failed to seed broadband plan: {err}"))?;
    }

    info!("Broadband plans created");
    Ok(())
}

fn broadband_plan(
    name: &str,
    speed: i32,
    description: &str,
    [monthly, quarterly, half_yearly, yearly]: [i32; 4],
    features: &[&str],
    sort_order: i32,
) -> InsertBroadbandPlanModel {
    InsertBroadbandPlanModel {
        name: name.to_string(),
        speed,
        description: Some(description.to_string()),
        monthly,
        quarterly,
        half_yearly,
        yearly,
        features: features.iter().map(|feature| feature.to_string()).collect(),
        is_active: true,
        sort_order,
    }
}

/// Seed logo records point at images bundled under
/// `<public_dir>/assets/images/ott-partners`, so no upload pass is needed.
async fn seed_app_logos(db_pool: Arc<PgPoolSquad>) -> Result<Vec<AppLogoEntity>> {
    let repository = AppLogoPostgres::new(db_pool);

    let logos = [
        ("Disney+ Hotstar", "disney-hotstar.png", AppCategory::Premium, 1),
        ("SonyLIV", "sony-liv.png", AppCategory::Premium, 2),
        ("Zee5", "zee5.png", AppCategory::Premium, 3),
        ("Prime Lite", "amazon-prime-lite.png", AppCategory::Premium, 4),
        ("ETV Win", "etv-win.png", AppCategory::NonPremium, 1),
        ("Discovery Plus", "discovery.png", AppCategory::NonPremium, 2),
        ("Hungama", "hungama.png", AppCategory::NonPremium, 3),
        ("Shemaroo", "shemaroo.png", AppCategory::NonPremium, 4),
    ];

    let mut created = Vec::with_capacity(logos.len());
    for (name, file_name, category, sort_order) in logos {
        let now = Utc::now();
        let entity = repository
            .insert(InsertAppLogoEntity {
                id: Uuid::new_v4(),
                name: name.to_string(),
                logo_path: format!("/assets/images/ott-partners/{file_name}"),
                category: category.to_string(),
                is_active: true,
                sort_order,
                created_at: now,
                updated_at: now,
            })
            .await
            .with_context(|| format!("failed to seed app logo {name}"))?;
        created.push(entity);
    }

    info!("App logos created");
    Ok(created)
}

async fn seed_ott_plans(db_pool: Arc<PgPoolSquad>, logos: &[AppLogoEntity]) -> Result<()> {
    use jnetworks_backend::domain::value_objects::enums::price_durations::PriceDuration;
    use jnetworks_backend::domain::value_objects::ott_plans::{
        OttApp, PriceVariant, SpeedVariant,
    };

    let usecase = OttPlanUseCase::new(Arc::new(OttPlanPostgres::new(db_pool)));

    let app_by_name = |name: &str| -> Result<OttApp> {
        logos
            .iter()
            .find(|logo| logo.name == name)
            .map(|logo| OttApp {
                name: logo.name.clone(),
                logo_path: logo.logo_path.clone(),
            })
            .ok_or_else(|| anyhow!("seeded logo {name} not found"))
    };

    let variant = |speed: &str, [one_m, three_m, six_m, one_y]: [i32; 4]| SpeedVariant {
        speed: speed.to_string(),
        prices: vec![
            PriceVariant {
                duration: PriceDuration::OneMonth,
                price: one_m,
            },
            PriceVariant {
                duration: PriceDuration::ThreeMonths,
                price: three_m,
            },
            PriceVariant {
                duration: PriceDuration::SixMonths,
                price: six_m,
            },
            PriceVariant {
                duration: PriceDuration::OneYear,
                price: one_y,
            },
        ],
    };

    let plans = vec![
        InsertOttPlanModel {
            name: "PB Basic".to_string(),
            variants: vec![
                variant("40", [620, 1850, 3400, 6200]),
                variant("100", [1020, 3000, 5600, 10200]),
            ],
            premium_apps: vec![app_by_name("SonyLIV")?, app_by_name("Zee5")?],
            non_premium_apps: vec![
                app_by_name("ETV Win")?,
                app_by_name("Discovery Plus")?,
                app_by_name("Hungama")?,
            ],
            is_active: true,
            sort_order: 1,
        },
        InsertOttPlanModel {
            name: "PB Premium".to_string(),
            variants: vec![
                variant("40", [725, 2100, 4100, 7250]),
                variant("100", [1125, 3300, 6200, 11250]),
            ],
            premium_apps: vec![
                app_by_name("Disney+ Hotstar")?,
                app_by_name("SonyLIV")?,
                app_by_name("Zee5")?,
                app_by_name("Prime Lite")?,
            ],
            non_premium_apps: vec![
                app_by_name("ETV Win")?,
                app_by_name("Discovery Plus")?,
                app_by_name("Hungama")?,
                app_by_name("Shemaroo")?,
            ],
            is_active: true,
            sort_order: 2,
        },
    ];

    for plan in plans {
        usecase
            .create(plan)
            .await
            .map_err(|err| anyhow!("failed to seed OTT plan: {err}"))?;
    }

    info!("OTT plans created");
    Ok(())
}
