//! Harness entry point used by `test_main!`

use crate::cli::Cli;
use crate::config::EnvConfig;
use crate::error::{HarnessError, HarnessResult, EXIT_FAILURE, EXIT_SUCCESS};
use crate::filter::NameFilter;
use crate::registry::Registry;
use crate::reporter::Reporter;
use crate::runner::{RunContext, Runner};
use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Run the tests declared in this binary against the process arguments
pub fn main() -> ExitCode {
    let env = EnvConfig::from_env();
    init_logging(&env);

    let registry = Registry::declared();
    let code = run_with(
        std::env::args_os(),
        &env,
        registry,
        io::stdout().lock(),
        io::stderr().lock(),
    );
    ExitCode::from(code)
}

/// Configure, run and report; returns the process exit status
///
/// Configuration and reporting errors are printed on `err`.
pub fn run_with<I, T, W, E>(args: I, env: &EnvConfig, registry: Registry, out: W, mut err: E) -> u8
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
    E: Write,
{
    match execute(args, env, registry, out, &mut err) {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = %e, "harness aborted");
            // Nothing left to report to if stderr itself is broken.
            let _ = match &e {
                HarnessError::Usage(usage) => write!(err, "{}", usage),
                other => writeln!(err, "error: {}", other),
            };
            let _ = err.flush();
            e.exit_code()
        }
    }
}

fn execute<I, T, W, E>(
    args: I,
    env: &EnvConfig,
    registry: Registry,
    out: W,
    err: &mut E,
) -> HarnessResult<u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
    W: Write,
    E: Write,
{
    let settings = Cli::parse_args(args)?.settings(env);

    let mut filter = NameFilter::accept_all();
    for pattern in &settings.filters {
        filter.install(pattern)?;
    }

    tracing::debug!(
        tests = registry.len(),
        policy = %settings.policy,
        filter = filter.pattern().unwrap_or("<none>"),
        "configured run"
    );

    let ctx = RunContext::new(registry)
        .with_filter(filter)
        .with_policy(settings.policy);
    let reporter = Reporter::new(out, err)
        .with_format(settings.format)
        .with_color(settings.color);
    let mut runner = Runner::new(ctx, reporter);

    if settings.list {
        let listed = runner.list()?;
        return Ok(if listed == 0 { EXIT_FAILURE } else { EXIT_SUCCESS });
    }

    Ok(runner.run()?.exit_code())
}

fn init_logging(env: &EnvConfig) {
    let filter = EnvFilter::try_new(&env.log).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}
