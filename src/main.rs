use std::collections::HashMap;

use anyhow::{Context, Result};
use profiling_agent::{object_size, premain, ObjectRef, ShallowSizer};
use serde::Serialize;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Serialize)]
struct SizeLine {
    #[serde(rename = "type")]
    type_name: &'static str,
    shallow_size: u64,
}

#[derive(Serialize)]
struct StateLine {
    state: profiling_agent::AgentState,
}

fn report<T: ?Sized>(value: &T) -> Result<()> {
    let object = ObjectRef::new(value);
    let shallow_size = object_size(Some(object))
        .with_context(|| format!("Failed to measure {}", object.type_name()))?;
    let line = SizeLine {
        type_name: object.type_name(),
        shallow_size,
    };
    println!("{}", serde_json::to_string(&line)?);
    Ok(())
}

fn main() -> Result<()> {
    // Logging, filtered by RUST_LOG
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("Failed to install tracing subscriber")?;

    // Stand-in for the host loader: run the bootstrap callback before any query
    let agent_args = std::env::args().nth(1);
    premain(agent_args.as_deref(), ShallowSizer::new());
    tracing::info!("Profiling agent initialized");

    report(&0u8)?;
    report(&0u64)?;
    report(&[0u8; 32])?;
    report(&String::from("a string whose heap buffer is not counted"))?;
    report(&(0..1024).collect::<Vec<u32>>())?;
    report(&Box::new([0u64; 512]))?;
    report(&HashMap::<String, u64>::new())?;
    report(&Some(1i64))?;

    let owned = String::from("borrowed");
    let words: Vec<&str> = owned.split('r').collect();
    report(&words)?;
    report(owned.as_str())?;
    report(&[1u32, 2, 3][..])?;

    let state = StateLine {
        state: profiling_agent::global().state(),
    };
    println!("{}", serde_json::to_string(&state)?);
    Ok(())
}
