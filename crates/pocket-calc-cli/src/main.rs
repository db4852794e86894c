//! Pocket calculator CLI
//!
//! ## Usage
//!
//! ```bash
//! pocket-calc eval "12+3="            # Print 15
//! pocket-calc eval --trace "2+3*4="   # Show the display after every token
//! pocket-calc eval 5 "-3="            # Scripts may start with an operator
//! pocket-calc keys 9 - 4 Enter        # Drive it with keyboard key values
//! pocket-calc repl                    # One token string per line
//! pocket-calc tui                     # Interactive keypad
//! ```

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use clap::Parser;
use pocket_calc_cli::{
    eval_scripts, init_logging, load_calculator_config, press_keys, tui::run_tui, Cli, CliConfig,
    CliResult, ColorChoice, Commands, ConfigArgs, LogTarget, Printer, Repl, Transcript, Verbosity,
};
use tracing::debug;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    let target = if matches!(cli.command, Commands::Tui) {
        LogTarget::FileOnly
    } else {
        LogTarget::Stderr
    };
    init_logging(&config, target)?;
    debug!(?config, "configuration resolved");

    let printer = Printer::new(config.color.should_color());

    match cli.command {
        Commands::Eval(args) => {
            let transcript = eval_scripts(config.calculator, &args.input)?;
            print_transcript(&printer, &transcript, args.trace, args.json)
        }
        Commands::Keys(args) => {
            let transcript = press_keys(config.calculator, &args.keys);
            print_transcript(&printer, &transcript, args.trace, args.json)
        }
        Commands::Repl(args) => {
            let stdin = io::stdin();
            let prompt = !args.no_prompt && stdin.is_terminal();
            Repl::new(config.calculator, printer, prompt).run(stdin.lock(), io::stdout().lock())
        }
        Commands::Tui => run_tui(config.calculator),
        Commands::Config(args) => run_config(&config, &args),
    }
}

fn build_config(cli: &Cli) -> CliResult<CliConfig> {
    let verbosity = Verbosity::from_flags(cli.quiet, cli.verbose);
    let color: ColorChoice = cli.color.into();

    let mut config = CliConfig::new()
        .with_verbosity(verbosity)
        .with_color(color)
        .with_log_file(cli.log_file.clone())
        .with_log_json(cli.log_json);

    if let Some(path) = &cli.config {
        config = config.with_calculator(load_calculator_config(path)?);
    }
    Ok(config)
}

fn print_transcript(
    printer: &Printer,
    transcript: &Transcript,
    trace: bool,
    json: bool,
) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(transcript)?);
        return Ok(());
    }
    if trace {
        for step in &transcript.steps {
            println!("{}", printer.step(step));
        }
    }
    println!("{}", printer.display(&transcript.display));
    Ok(())
}

fn run_config(config: &CliConfig, args: &ConfigArgs) -> CliResult<()> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(config)?);
    } else {
        print!("{}", config.to_yaml()?);
    }
    Ok(())
}
