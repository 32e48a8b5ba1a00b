//! Query the status of a mount from the command line
//!
//! Usage: mount_status [base_url] [mount]
//!
//! Credentials come from ICECAST_ADMIN / ICECAST_PASSWORD.

use onaircontrol::AdminClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base_url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "http://localhost:8000".to_string());
    let mount = std::env::args().nth(2).unwrap_or_else(|| "/stream".to_string());
    let username = std::env::var("ICECAST_ADMIN").unwrap_or_else(|_| "admin".to_string());
    let password = std::env::var("ICECAST_PASSWORD").unwrap_or_else(|_| "hackme".to_string());

    let client = AdminClient::builder(base_url)
        .credentials(username, password)
        .build()?;

    let status = client.mount_status(&mount).await?;
    println!("{}: {} listeners", status.mount, status.listeners);
    if let Some(bitrate) = status.bitrate {
        println!("bitrate: {} kbps", bitrate);
    }
    if let Some(title) = status.title {
        println!("now playing: {}", title);
    }

    Ok(())
}
