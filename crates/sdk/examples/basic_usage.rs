//! Basic SDK usage example.
//!
//! Lists active users and the shots of a project.
//!
//! Run with: cargo run --example basic_usage -- <project_id>
//! Credentials are read from KONBINI_BASE_URL, KONBINI_SCRIPT_NAME and
//! KONBINI_API_KEY.

use konbini::{KonbiniClient, KonbiniResult, SgModel};
use std::time::Duration;

#[tokio::main]
async fn main() -> KonbiniResult<()> {
    tracing_subscriber::fmt::init();

    let project_id: i64 = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(70);

    let client = KonbiniClient::builder()
        .timeout(Duration::from_secs(30))
        .build()?;

    println!("Listing active users...");
    let users = client.humanusers().list_active(Some(&["name", "groups"])).await?;
    println!("Found {} active users", users.len());
    for user in users.iter().take(5) {
        let groups: Vec<&str> = user.groups.iter().map(|g| g.name.as_str()).collect();
        println!("  {} ({}): {}", user.name, user.id, groups.join(", "));
    }

    println!("\nListing shots of project {project_id}...");
    let shots = client
        .shots()
        .list(project_id, Some(&["code", "description", "sg_sequence.Sequence.code"]))
        .await?;
    for shot in shots.iter().take(5) {
        let sequence = shot
            .extra_fields()
            .get("sg_sequence.Sequence.code")
            .and_then(|v| v.as_str())
            .unwrap_or("-");
        println!("  {} [{}] {}", shot.code, sequence, shot.description);
    }

    println!("\nShot fields on this site:");
    let fields = client.schema().entity_fields("Shot").await?;
    println!("  {}", fields.join(", "));

    Ok(())
}
