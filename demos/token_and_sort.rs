//! Sorting an escaped key/value list and rendering it through a pattern.
//!
//! Run with: cargo run --example token_and_sort

use parser_power::escape::split_unescaped_once;
use parser_power::functions::{token, ueswitch};
use parser_power::host::Verbatim;
use parser_power::{apply_pattern, escape, sort_pairs, unescape, SortOptions};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Items may hold the list delimiters once escaped
    let cities = [
        ("120000", "Springfield"),
        ("9800", "Shelbyville|East"),
        ("120000", "Capital City"),
        ("n/a", "Ogdenville"),
    ];
    let list = cities
        .iter()
        .map(|(population, name)| format!("{}={}", escape(population), escape(name)))
        .collect::<Vec<_>>()
        .join(",");
    println!("Escaped list:\n{}\n", list);

    let mut pairs: Vec<(String, String)> = list
        .split(',')
        .filter_map(|item| {
            split_unescaped_once(item, '=')
                .map(|(key, value)| (unescape(key), unescape(value)))
        })
        .collect();

    // Largest population first, ties broken alphabetically
    let key_options: SortOptions = "numeric desc".parse()?;
    sort_pairs(&mut pairs, key_options, Some(SortOptions::new()));

    println!("Sorted:");
    for (population, name) in &pairs {
        let line = token(&Verbatim, &[name.as_str(), "@", "* @ (pop. $)"]).text;
        println!("{}", apply_pattern(population, "$", &line));
    }

    let size = ueswitch(
        &Verbatim,
        &["Ogdenville", "Springfield=large", "Ogdenville=small", "unknown"],
    );
    println!("\nOgdenville is {}", size.text);

    Ok(())
}
