//! Example demonstrating the suggestion client.
//!
//! Run with: cargo run --example suggest_demo he fgh

use gridboard::{SuggestClient, SuggestEndpoint};

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: {} <prefix> <group-chars> [base-url]", args[0]);
        eprintln!("Example: {} he fgh", args[0]);
        std::process::exit(1);
    }

    let prefix = &args[1];
    let group_chars = &args[2];
    let base_url = args
        .get(3)
        .cloned()
        .unwrap_or_else(|| "http://localhost:8081".to_string());

    println!("Suggestion Demo");
    println!("===============\n");
    println!("Querying {base_url} for ({prefix:?}, {group_chars:?})\n");

    let mut client = SuggestClient::new(SuggestEndpoint::Grid(base_url));
    client.set_enabled(true);

    // Bump the timeout for the demo (default is 500ms).
    client.set_timeout(2000);

    let words = client.query(prefix, group_chars);

    if words.is_empty() {
        println!("No suggestions (is the server running?)");
        return;
    }

    println!("Got {} suggestions:\n", words.len());
    for (i, word) in words.iter().enumerate() {
        println!("  {}. {}", i + 1, word);
    }
}
