//! cellfn - Evaluate worksheet string functions from the command line

mod config;
mod error;
mod functions;
mod logging;

use std::env;
use std::path::PathBuf;

use anyhow::Context;
use cellfn_engine::BUILTINS;
use cellfn_engine::engine::{create_engine_with_functions, eval_with_functions_script, spill_lines};
use tracing::{debug, warn};

use crate::error::CliError;

fn print_usage() {
    eprintln!("Usage: cellfn [OPTIONS] [FILE]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [FILE]                    Rhai script to evaluate");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --command <FORMULA>   Evaluate a formula and print the result");
    eprintln!("  -f, --functions <FILE>    Load custom Rhai functions (can be repeated)");
    eprintln!("  --config <FILE>           Load settings from a TOML file");
    eprintln!("  --no-default-functions    Do not load default.rhai from the config dir");
    eprintln!("  -l, --list                List built-in functions");
    eprintln!("  -v, --verbose             More logging (repeat for trace)");
    eprintln!("  -V, --version             Print version");
    eprintln!("  -h, --help                Print help");
}

#[derive(Debug, Default)]
struct Options {
    command: Option<String>,
    file_path: Option<PathBuf>,
    functions_files: Vec<PathBuf>,
    config_file: Option<PathBuf>,
    no_default_functions: bool,
    verbosity: u8,
}

enum Parsed {
    Run(Options),
    Help,
    Version,
    List,
}

fn parse_args(args: &[String]) -> Result<Parsed, String> {
    let mut opts = Options::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => return Ok(Parsed::Help),
            "-V" | "--version" => return Ok(Parsed::Version),
            "-l" | "--list" => return Ok(Parsed::List),
            "-c" | "--command" => {
                i += 1;
                let Some(formula) = args.get(i) else {
                    return Err("--command requires a formula".to_string());
                };
                opts.command = Some(formula.clone());
            }
            "-f" | "--functions" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    return Err("--functions requires a file path".to_string());
                };
                opts.functions_files.push(PathBuf::from(path));
            }
            "--config" => {
                i += 1;
                let Some(path) = args.get(i) else {
                    return Err("--config requires a file path".to_string());
                };
                opts.config_file = Some(PathBuf::from(path));
            }
            "--no-default-functions" => opts.no_default_functions = true,
            "--verbose" => opts.verbosity = opts.verbosity.saturating_add(1),
            // -v, -vv, -vvv ...
            arg if arg
                .strip_prefix('-')
                .is_some_and(|flags| !flags.is_empty() && flags.bytes().all(|b| b == b'v')) =>
            {
                let count = u8::try_from(arg.len() - 1).unwrap_or(u8::MAX);
                opts.verbosity = opts.verbosity.saturating_add(count);
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option: {}", arg));
            }
            arg => {
                if opts.file_path.is_some() {
                    return Err(format!("Unexpected argument: {}", arg));
                }
                opts.file_path = Some(PathBuf::from(arg));
            }
        }
        i += 1;
    }

    if opts.command.is_some() && opts.file_path.is_some() {
        return Err("Use either --command or FILE, not both".to_string());
    }
    if opts.command.is_none() && opts.file_path.is_none() {
        return Err("Nothing to evaluate: pass --command or FILE".to_string());
    }
    Ok(Parsed::Run(opts))
}

fn print_builtins() {
    let width = BUILTINS.iter().map(|b| b.usage.len()).max().unwrap_or(0);
    for b in BUILTINS {
        println!("{:width$}  {}", b.usage, b.description, width = width);
    }
}

fn run(mut opts: Options) -> anyhow::Result<()> {
    let (config, warnings) = config::load_config(opts.config_file.as_ref());
    logging::init(opts.verbosity, config.log.level.as_deref());
    for warning in warnings {
        warn!("{}", warning);
    }
    debug!(max_table_cells = config.limits.max_table_cells, "limits");

    let formula = match (opts.command.take(), opts.file_path.as_ref()) {
        (Some(formula), _) => formula,
        (None, Some(path)) => functions::read_limited(path)
            .with_context(|| format!("Failed to load script {}", path.display()))?,
        (None, None) => anyhow::bail!("Nothing to evaluate"),
    };

    functions::prepend_default_functions_if_present(
        &mut opts.functions_files,
        opts.no_default_functions,
    );
    let custom_script = functions::read_functions(&opts.functions_files)
        .context("Failed to load functions")?;

    let (engine, _ast, error) =
        create_engine_with_functions(config.limits, custom_script.as_deref());
    if let Some(error) = error {
        return Err(CliError::Functions(error).into());
    }

    let value = eval_with_functions_script(&engine, &formula, custom_script.as_deref())
        .map_err(|e| CliError::Eval(e.to_string()))?;

    for line in spill_lines(&value) {
        println!("{}", line);
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let opts = match parse_args(&args) {
        Ok(Parsed::Run(opts)) => opts,
        Ok(Parsed::Help) => {
            print_usage();
            return;
        }
        Ok(Parsed::Version) => {
            println!("cellfn {}", env!("CARGO_PKG_VERSION"));
            return;
        }
        Ok(Parsed::List) => {
            print_builtins();
            return;
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(opts) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
