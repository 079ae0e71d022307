//! Human and JSON rendering for command output

use anyhow::Result;
use jadle_store::{Foodtype, Restaurant, Review};
use serde::Serialize;

/// Print a value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn restaurant_line(r: &Restaurant) -> String {
    let mut line = format!("#{} {} | {} {} | {}", r.id, r.name, r.address, r.zip, r.phone);
    if let Some(website) = &r.website {
        line.push_str(&format!(" | {}", website));
    }
    if let Some(email) = &r.email {
        line.push_str(&format!(" | {}", email));
    }
    line
}

pub fn foodtype_line(f: &Foodtype) -> String {
    format!("#{} {}", f.id, f.name)
}

pub fn review_line(r: &Review) -> String {
    format!(
        "#{} [{}] {}/5 by {} for restaurant #{}: {}",
        r.id,
        r.formatted_created_at(),
        r.rating.get(),
        r.author,
        r.restaurant_id,
        r.content
    )
}

/// Print a list, or a placeholder when it is empty.
pub fn print_lines<T>(items: &[T], empty: &str, render: fn(&T) -> String) {
    if items.is_empty() {
        println!("{}", empty);
        return;
    }
    for item in items {
        println!("{}", render(item));
    }
}
