#[tokio::main]
async fn main() {
    if let Err(e) = venue_directory::run().await {
        eprintln!("venue-directory failed to start: {}", e);
        std::process::exit(1);
    }
}
