//! Simple decoder to inspect HAL documents.
//!
//! Usage: `cargo run --example inspect -- path/to/resource.json`

use std::fs;

use hal_json::{Link, Resource, decode_resource, validate_resource};
use serde_json::Value;

fn format_link(link: &Link) -> String {
    let mut out = link.href.clone();
    if link.is_templated() {
        out.push_str(" (templated)");
    }
    if let Some(title) = &link.title {
        out.push_str(&format!(" \"{}\"", title));
    }
    out
}

fn format_value(v: &Value) -> String {
    match v {
        Value::String(s) => {
            let preview: String = s.chars().take(60).collect();
            if s.chars().count() > 60 {
                format!("\"{}...\"", preview)
            } else {
                format!("\"{}\"", preview)
            }
        }
        Value::Array(items) => format!("[{} items]", items.len()),
        Value::Object(map) => format!("{{{} keys}}", map.len()),
        other => other.to_string(),
    }
}

fn print_resource(resource: &Resource, indent: usize) {
    let pad = "  ".repeat(indent);
    if let Some(link) = resource.links.self_link() {
        println!("{}self: {}", pad, format_link(link));
    }
    for curie in resource.links.curies() {
        println!("{}curie {}: {}", pad, curie.name, curie.href);
    }
    for (relation, links) in resource.links.relations() {
        let expanded = resource
            .links
            .resolve_relation(relation)
            .map(|uri| format!(" <{}>", uri))
            .unwrap_or_default();
        for link in links {
            println!("{}{}{} -> {}", pad, relation, expanded, format_link(link));
        }
    }
    for (key, value) in &resource.data {
        println!("{}{} = {}", pad, key, format_value(value));
    }
    for (relation, children) in resource.embeds.relations() {
        for (i, child) in children.iter().enumerate() {
            println!("{}_embedded.{}[{}]:", pad, relation, i);
            print_resource(child, indent + 1);
        }
    }
}

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("usage: inspect <resource.json>");

    println!("Reading: {}", path);

    let data = fs::read(&path).expect("Failed to read file");
    println!("File size: {} bytes", data.len());

    let resource: Resource = decode_resource(&data).expect("Failed to decode");

    println!("\n=== Resource ===");
    print_resource(&resource, 0);

    println!("\n=== Validation ===");
    match validate_resource(&resource) {
        Ok(()) => println!("OK"),
        Err(problem) => println!("{}", problem),
    }
}
