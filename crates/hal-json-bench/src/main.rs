//! Benchmark for HAL encoding using a synthetic order catalogue.
//!
//! Builds one collection resource with N embedded orders (default 10,000),
//! then times encoding, decoding and typed conversion of the orders.

use std::time::Instant;

use hal_json::{
    Curie, EncodeOptions, Link, Resource, ResourceBuilder, decode_resource, encode_resource,
    encode_resource_with_options,
};
use serde::Deserialize;
use serde_json::{Value, json};

const STATUSES: [&str; 4] = ["pending", "processing", "shipped", "delivered"];
const CURRENCIES: [&str; 3] = ["USD", "EUR", "GBP"];

/// Typed view of an order's state.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Field {
    Text(String),
    Number(f64),
}

fn make_order(id: usize) -> Resource {
    let total = (id % 9_973) as f64 * 1.25;
    ResourceBuilder::new()
        .self_link(format!("/orders/{id}"))
        .curie(Curie::new("acme", "https://docs.acme.com/relations/{rel}"))
        .link("acme:basket", Link::new(format!("/baskets/{}", id * 7 % 1_000)))
        .link("acme:customer", Link::new(format!("/customers/{}", id % 5_000)).with_title("Customer"))
        .data("currency", json!(CURRENCIES[id % CURRENCIES.len()]))
        .data("status", json!(STATUSES[id % STATUSES.len()]))
        .data("total", json!(total))
        .build()
        .expect("curies registered before links")
}

fn make_catalogue(count: usize) -> Resource {
    let mut builder = ResourceBuilder::new()
        .self_link("/orders")
        .curie(Curie::new("acme", "https://docs.acme.com/relations/{rel}"))
        .link("next", Link::new("/orders?page=2"))
        .link("acme:find", Link::new("/orders{?id}").with_templated(true))
        .data("currentlyProcessing", json!(count / STATUSES.len()))
        .data("shippedToday", json!(count / 3));
    for id in 0..count {
        builder = builder.embed("orders", make_order(id));
    }
    builder.build().expect("curies registered before links")
}

fn throughput(bytes: usize, secs: f64) -> f64 {
    (bytes as f64 / 1_000_000.0) / secs
}

fn main() {
    let count: usize = std::env::args()
        .nth(1)
        .map(|arg| arg.parse().expect("order count must be a number"))
        .unwrap_or(10_000);

    println!("Building catalogue with {} orders", count);

    let build_start = Instant::now();
    let catalogue = make_catalogue(count);
    let build_time = build_start.elapsed();

    let link_count: usize = catalogue
        .embeds
        .get("orders")
        .unwrap_or_default()
        .iter()
        .map(|order| order.links.len())
        .sum();
    println!("Built in {:?}", build_time);
    println!("  - {} embedded orders, {} embedded links", count, link_count);

    // Compact encoding
    let encode_start = Instant::now();
    let encoded = encode_resource(&catalogue).expect("Failed to encode");
    let encode_time = encode_start.elapsed();

    println!("\nCompact: {} bytes in {:?}", encoded.len(), encode_time);
    println!(
        "  Throughput: {:.2} MB/s",
        throughput(encoded.len(), encode_time.as_secs_f64())
    );

    let encoded2 = encode_resource(&catalogue).expect("Failed to encode");
    assert_eq!(encoded, encoded2, "Encoding should be deterministic");

    // Pretty encoding
    let pretty_start = Instant::now();
    let pretty = encode_resource_with_options(&catalogue, EncodeOptions::new().pretty())
        .expect("Failed to encode pretty");
    let pretty_time = pretty_start.elapsed();

    println!("\nPretty: {} bytes in {:?}", pretty.len(), pretty_time);
    println!(
        "  Size vs compact: {:.2}x",
        pretty.len() as f64 / encoded.len() as f64
    );

    // Decoding
    let decode_start = Instant::now();
    let decoded: Resource = decode_resource(&encoded).expect("Failed to decode");
    let decode_time = decode_start.elapsed();

    println!("\nDecode: {:?}", decode_time);
    println!(
        "  Throughput: {:.2} MB/s",
        throughput(encoded.len(), decode_time.as_secs_f64())
    );

    let reencoded = encode_resource(&decoded).expect("Failed to re-encode");
    assert_eq!(encoded, reencoded, "Re-encoding should be byte-identical");
    println!("  Round trip: byte-identical");

    // Typed conversion of the embedded orders
    let typed_start = Instant::now();
    let typed: Vec<Resource<Field>> = decoded
        .embeds
        .get("orders")
        .unwrap_or_default()
        .iter()
        .cloned()
        .map(|order| order.into_typed::<Field>().expect("Failed to convert order"))
        .collect();
    let typed_time = typed_start.elapsed();

    let revenue: f64 = typed
        .iter()
        .filter_map(|order| match order.get("total") {
            Some(Field::Number(n)) => Some(*n),
            _ => None,
        })
        .sum();
    let shipped = typed
        .iter()
        .filter(|order| matches!(order.get("status"), Some(Field::Text(s)) if s == "shipped"))
        .count();

    println!("\nTyped conversion: {} orders in {:?}", typed.len(), typed_time);
    println!("  - {} shipped, revenue {:.2}", shipped, revenue);

    let processing = decoded.get("currentlyProcessing").and_then(Value::as_u64);
    println!("  - currentlyProcessing = {:?}", processing);
}
