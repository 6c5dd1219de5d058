//! Command-line interface.

mod context;
mod flags;
mod help;
mod parse;
pub mod prompts;

pub use context::{Context, Done};
pub use flags::CliFlags;
pub use parse::{ParseError, parse};

/// Parse arguments and run one invocation. Exits non-zero on usage errors.
pub fn run(args: Vec<String>) {
    let mut ctx = match Context::new(&args) {
        Ok(ctx) => ctx,
        Err(msg) => {
            prompts::error(&msg);
            help::print_usage_hint();
            std::process::exit(2);
        }
    };
    let _ = ctx.run();
}
