//! Generates resolver types for a GraphQL schema and prints them.
//!
//! Run with: `cargo run --example generate -- [schema.graphql] [config.json]`
//!
//! Without arguments a small built-in schema is used. Set `RUST_LOG=debug`
//! to see each generation stage.

use anyhow::Context;
use std::path::PathBuf;
use tsresolve::prelude::*;

const DEMO_SCHEMA: &str = r#"
type Query {
  user(id: ID!): UserPayload!
  posts(first: Int = 10): PostsPayload!
}

type StandardError {
  error: String!
}

type User {
  id: ID!
  fullName: String!
}

type UserResult {
  result: User
}

union UserPayload = UserResult | StandardError

type Post {
  author: String
  comment: String
}

type PostsResult {
  results: [Post!]!
}

union PostsPayload = PostsResult | StandardError
"#;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1).map(PathBuf::from);
    let schema_path = args.next();
    let config_path = args.next();

    let config = match &config_path {
        Some(path) => CodegenConfig::from_path(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => CodegenConfig::default().with_is_type_of_if_needed(true),
    };

    let output = match &schema_path {
        Some(path) => generate_from_file(path, &config)
            .with_context(|| format!("failed to generate from {}", path.display()))?,
        None => generate_from_sdl(DEMO_SCHEMA, &config)?,
    };

    print!("{output}");
    Ok(())
}
