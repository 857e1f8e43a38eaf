//! Example: fetch one region's overview by name.
//!
//! # Usage
//!
//! ```bash
//! cargo run --example single_region -- dallas
//! ```

use std::env;

use netint::NetintClient;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let name = env::args().nth(1).unwrap_or_else(|| {
        eprintln!("Usage: cargo run --example single_region -- <region>");
        eprintln!();
        eprintln!("Known regions: {}", netint::regions().join(", "));
        std::process::exit(1);
    });

    let client = NetintClient::new();
    let overview = client.overview_by_name(&name).await?;

    println!("{}", overview.name);
    for (destination, sample) in overview.iter() {
        println!(
            "  -> {:8} rtt {:4} ms  loss {:3}%  jitter {:3} ms",
            destination, sample.rtt, sample.loss, sample.jitter
        );
    }

    Ok(())
}
