//! Keyword classification with frozen lookup tables.
//!
//! Run with `cargo run --example keywords --features tracing`, optionally
//! setting `RUST_LOG=frozen_lookup=debug` to see construction events.

use frozen_lookup::prelude::*;
use std::sync::LazyLock;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Built by the compiler; no construction event is ever emitted for it.
static RESERVED: FrozenSet<&str, 10> = FrozenSet::<&str, 10>::from_array_const([
    "while", "fn", "let", "return", "if", "else", "match", "loop", "struct", "impl",
]);

/// Built on first use; emits a debug event from `frozen_lookup` when sorted.
static OPERATORS: LazyLock<FrozenSet<char, 8>> =
    LazyLock::new(|| frozen_set!['+', '-', '*', '/', '=', '<', '>', '!']);

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Keyword(&'a str),
    Identifier(&'a str),
    Operator(char),
}

// Keys of a `&'static str` table are probed with `&'static str` words.
fn classify(word: &'static str) -> Token<'static> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) if OPERATORS.contains(&symbol) => Token::Operator(symbol),
        _ if RESERVED.contains(&word) => Token::Keyword(word),
        _ => Token::Identifier(word),
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,frozen_lookup=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(reserved = RESERVED.len(), "keyword table ready");

    let source = "let total = count + 1 ; while total > 0 return total";
    let tokens: Vec<Token<'static>> = source.split_whitespace().map(classify).collect();

    for token in &tokens {
        tracing::info!(?token, "classified");
    }

    let keywords = tokens
        .iter()
        .filter(|token| matches!(token, Token::Keyword(_)))
        .count();
    tracing::info!(keywords, total = tokens.len(), "done");

    // Sorted order makes range queries over the table cheap.
    let range = RESERVED.lower_bound(&"l")..RESERVED.lower_bound(&"m");
    let starting_with_l: Vec<&str> = RESERVED.as_slice()[range].to_vec();
    tracing::info!(?starting_with_l, "keywords starting with 'l'");
}
