use anyhow::{Context, Result};
use api::handler::event::create_event;
use api::handler::report::{administer_requests, personal_digest};
use api::handler::request::{approve_request, make_request};
use api::handler::user::{register_user, update_user_location};
use api::model::event::CreateEventRequest;
use api::model::request::{ApproveRequestRequest, MakeRequestRequest};
use api::model::user::{RegisterUserRequest, UpdateUserLocationRequest};
use chrono::{Duration, NaiveDateTime, Utc};
use registry::AppRegistry;
use shared::config::AppConfig;
use shared::env::{which, Environment};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    init_logger()?;
    bootstrap().await
}

fn init_logger() -> Result<()> {
    let log_level = match which() {
        Environment::Development => "debug",
        Environment::Production => "info",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| log_level.into());

    let subscriber = tracing_subscriber::fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(subscriber)
        .with(env_filter)
        .try_init()?;

    Ok(())
}

/// Wall-clock `hour`:00:00, `days` days from now, in the environment zone.
fn upcoming_civil(registry: &AppRegistry, days: i64, hour: u32) -> Result<NaiveDateTime> {
    let zone = registry.zone_database().current_environment_zone();
    let tz = zone.chrono_tz()?;
    (Utc::now().with_timezone(&tz) + Duration::days(days))
        .date_naive()
        .and_hms_opt(hour, 0, 0)
        .context("could not build the demo wall-clock time")
}

async fn bootstrap() -> Result<()> {
    let app_config = AppConfig::new()?;
    let registry = AppRegistry::new(app_config)?;

    tracing::info!(
        zone = %registry.zone_database().current_environment_zone(),
        "environment zone detected"
    );

    // The requestee signs up and schedules an event at local 15:00.
    let ben = register_user(
        &registry,
        RegisterUserRequest {
            first_name: "Ben".into(),
            last_name: "Miller".into(),
            location: "Honolulu".into(),
            default_response: "I'll get back to you ASAP".into(),
            is_admin: false,
        },
    )
    .await?;

    let lecture = create_event(
        &registry,
        ben.id,
        CreateEventRequest {
            title: "My New Book".into(),
            civil_instant: upcoming_civil(&registry, 7, 15)?,
        },
    )
    .await?;

    // The requestor signs up and asks to attend.
    let jane = register_user(
        &registry,
        RegisterUserRequest {
            first_name: "Jane".into(),
            last_name: "Dorothy".into(),
            location: "Buenos Aires".into(),
            default_response: "Will respond when I can".into(),
            is_admin: false,
        },
    )
    .await?;

    let jane_request = make_request(
        &registry,
        jane.id,
        MakeRequestRequest {
            event_id: lecture.id,
            comment: "I'd like to attend!".into(),
        },
    )
    .await?;

    // Jane sees Buenos Aires and pending; Ben sees Honolulu.
    println!("{}", personal_digest(&registry, jane.id).await?);
    println!("{}", personal_digest(&registry, ben.id).await?);

    approve_request(
        &registry,
        ben.id,
        jane_request.id,
        ApproveRequestRequest {
            comment: "Okay!".into(),
        },
    )
    .await?;

    println!("{}", personal_digest(&registry, jane.id).await?);

    println!("=====");

    // Same flow the other way around to check the dates still look okay.
    let meetup = create_event(
        &registry,
        jane.id,
        CreateEventRequest {
            title: "My Meetup".into(),
            civil_instant: upcoming_civil(&registry, 1, 22)?,
        },
    )
    .await?;
    let ben_request = make_request(
        &registry,
        ben.id,
        MakeRequestRequest {
            event_id: meetup.id,
            comment: "Can I go?".into(),
        },
    )
    .await?;
    println!("{}", personal_digest(&registry, ben.id).await?);
    println!("{}", personal_digest(&registry, jane.id).await?);
    approve_request(
        &registry,
        jane.id,
        ben_request.id,
        ApproveRequestRequest {
            comment: "Sure!".into(),
        },
    )
    .await?;
    println!("{}", personal_digest(&registry, ben.id).await?);
    println!("{}", personal_digest(&registry, jane.id).await?);

    println!("=====");

    // Relocating re-derives every displayed time from the stored UTC.
    update_user_location(
        &registry,
        ben.id,
        UpdateUserLocationRequest {
            location: "Buenos Aires".into(),
        },
    )
    .await?;
    println!("{}", personal_digest(&registry, ben.id).await?);

    println!("=====");

    let tomas = register_user(
        &registry,
        RegisterUserRequest {
            first_name: "Tomas".into(),
            last_name: "Hubelbauer".into(),
            location: "Prague".into(),
            default_response: String::new(),
            is_admin: true,
        },
    )
    .await?;

    update_user_location(
        &registry,
        ben.id,
        UpdateUserLocationRequest {
            location: "Honolulu".into(),
        },
    )
    .await?;

    for row in administer_requests(&registry, tomas.id).await? {
        println!("{row:?}");
    }

    Ok(())
}
