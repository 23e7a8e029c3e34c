//! Booking and time log example.
//!
//! Books a week of leave for a user and logs the matching time.
//!
//! Run with: cargo run --example bookings -- <user_id> <project_id>

use konbini::{
    BatchRequest, EntityType, KonbiniClient, KonbiniResult, SgBooking, SgGenericEntity,
    SgHumanUser, SgTimeLog,
};

#[tokio::main]
async fn main() -> KonbiniResult<()> {
    tracing_subscriber::fmt::init();

    let mut args = std::env::args().skip(1).filter_map(|arg| arg.parse::<i64>().ok());
    let user_id = args.next().unwrap_or(970);
    let project_id = args.next().unwrap_or(410);

    let client = KonbiniClient::from_env()?;

    let booking = SgBooking::new("2024-04-29", "2024-05-03")?
        .with_user(SgHumanUser::new(user_id))
        .with_vacation(true)
        .with_note("Golden Week 2024");

    let outcome = client.bookings().create(&booking).await;
    if !outcome.is_created {
        println!("Booking was not created, see the logs");
        return Ok(());
    }
    println!("Created booking {}", outcome.id());

    let mut timelogs = Vec::new();
    for day in ["2024-04-29", "2024-04-30", "2024-05-01", "2024-05-02", "2024-05-03"] {
        let mut timelog = SgTimeLog::new(day)?;
        timelog.duration = 480.0;
        timelog.description = "Golden Week 2024".to_string();
        timelog.user = Some(SgGenericEntity::new(EntityType::HumanUser, user_id));
        timelog.project = Some(SgGenericEntity::new(EntityType::Project, project_id));
        timelogs.push(timelog);
    }
    println!(
        "Batch payload: {:?}",
        timelogs.iter().map(BatchRequest::create).collect::<Vec<_>>()
    );

    let created = client.timelogs().bulk_create(&timelogs).await?;
    println!("Created {} time logs", created.len());

    for booking in client
        .bookings()
        .list_by_month_year(5, 2024, Some(user_id), None)
        .await?
    {
        println!(
            "  {} -> {} vacation={} {}",
            booking.start_date, booking.end_date, booking.vacation, booking.note
        );
    }

    Ok(())
}
