use clap::{Arg, ArgAction, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of `marksmith::Pass::ALL` names.
// Build scripts can't depend on the library crate being built alongside them.
const PASS_NAMES: &[&str] = &[
    "headers",
    "fenced-code",
    "inline-code",
    "bold",
    "italic",
    "links",
    "images",
    "unordered-lists",
    "ordered-lists",
    "blockquotes",
    "horizontal-rules",
    "paragraphs",
    "cleanup",
];

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("marksmith")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown into HTML")
        .arg_required_else_help(true)
        .arg(
            Arg::new("list-formats")
                .long("list-formats")
                .help("List available passes and formats")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(Arg::new("to").long("to").value_hint(ValueHint::Other))
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .arg(
                    Arg::new("input")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("pass")
                        .index(2)
                        .value_parser(clap::builder::PossibleValuesParser::new(PASS_NAMES)),
                ),
        )
        .subcommand(Command::new("generate-css"));

    generate_to(Bash, &mut cmd, "marksmith", &outdir)?;
    generate_to(Zsh, &mut cmd, "marksmith", &outdir)?;
    generate_to(Fish, &mut cmd, "marksmith", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
