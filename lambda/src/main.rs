use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod repl;
mod scenario;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("Hi, this is an untyped lambda calculus REPL. :h to show help");
    println!();
    repl::Session::default().start()
}
