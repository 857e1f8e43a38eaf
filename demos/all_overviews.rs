//! Example: fetch every region's overview and print a latency matrix.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example all_overviews
//! ```

use netint::NetintClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = NetintClient::new();

    let overviews = client.all_overviews().await?;

    for (origin, overview) in &overviews {
        println!("{}", origin);
        for (destination, sample) in overview.iter() {
            println!(
                "  -> {:8} rtt {:4} ms  loss {:3}%  jitter {:3} ms  (epoch {})",
                destination, sample.rtt, sample.loss, sample.jitter, sample.epoch
            );
        }
        println!();
    }

    Ok(())
}
