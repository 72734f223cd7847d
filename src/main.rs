use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use paintcalc::app::{Field, MixForm, Settings};

/// Works out how much main component, hardener and thinner to weigh out
#[derive(Parser)]
#[command(name = "paintcalc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Settings file (defaults to $PAINTCALC_SETTINGS or the user config dir)
    #[arg(long, global = true, value_name = "PATH")]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate a single mix
    Calc {
        /// Parts of main component
        #[arg(
            short,
            long,
            value_name = "RATIO",
            default_value = "",
            allow_hyphen_values = true
        )]
        main: String,

        /// Parts of hardener
        #[arg(
            short = 'r',
            long,
            value_name = "RATIO",
            default_value = "",
            allow_hyphen_values = true
        )]
        hardener: String,

        /// Dilution rate in percent
        #[arg(
            short,
            long,
            value_name = "PERCENT",
            default_value = "",
            allow_hyphen_values = true
        )]
        dilution: String,

        /// Total amount to make
        #[arg(
            short,
            long,
            value_name = "AMOUNT",
            default_value = "",
            allow_hyphen_values = true
        )]
        total: String,
    },

    /// Read `field=value` lines from stdin and recalculate after each one
    Watch,
}

fn init_logging() {
    env_logger::init();
}

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let settings = Settings::load(cli.settings.as_deref());
    let mut form = MixForm::new(settings);

    match cli.command {
        Commands::Calc {
            main,
            hardener,
            dilution,
            total,
        } => calc(
            &mut form,
            [main.as_str(), hardener.as_str(), dilution.as_str(), total.as_str()],
            &mut io::stdout().lock(),
        )?,
        Commands::Watch => watch(&mut form, io::stdin().lock(), &mut io::stdout().lock())?,
    }

    Ok(())
}

/// Fills the form from `[main, hardener, dilution, total]` and prints it once.
fn calc(form: &mut MixForm, texts: [&str; 4], out: &mut impl Write) -> Result<()> {
    for (field, text) in Field::all().into_iter().zip(texts) {
        form.set_text(field, text);
    }
    print_form(form, out)
}

fn print_form(form: &MixForm, out: &mut impl Write) -> Result<()> {
    writeln!(out, "{}", form.render()).context("writing result")?;
    if Settings::is_debug_mode() {
        if let Some(problem) = form.problem() {
            writeln!(out, "({})", problem).context("writing result")?;
        }
    }
    out.flush().context("flushing output")
}

/// Applies `field=value` lines until EOF, `quit` or `exit`.
fn watch(form: &mut MixForm, input: impl BufRead, out: &mut impl Write) -> Result<()> {
    print_form(form, out)?;

    for line in input.lines() {
        let line = line.context("reading input")?;
        let line = line.trim();
        match line {
            "" => continue,
            "clear" => {
                form.clear();
            }
            "quit" | "exit" => break,
            _ => {
                let Some((name, value)) = line.split_once('=') else {
                    eprintln!("expected field=value, got '{}'", line);
                    continue;
                };
                match name.parse::<Field>() {
                    Ok(field) => {
                        form.set_text(field, value);
                    }
                    Err(err) => {
                        eprintln!("{}", err);
                        continue;
                    }
                }
            }
        }
        print_form(form, out)?;
    }

    info!("watch session ended");
    Ok(())
}
