// Command-line interface for marksmith
//
// This binary converts Markdown files into HTML fragments or standalone HTML
// documents, and can show how the transformer rewrote a document pass by pass.
//
// Converting:
//
// The target format can be given with --to. Without it, the format is detected from the
// extension of the -o path, and failing that the configured default (convert.format) is used.
// An input of "-" reads Markdown from stdin.
// Usage:
//  marksmith <input> [--to <format>] [-o <path>]          - Convert (default)
//  marksmith convert <input> [--to <format>] [-o <path>]  - Same as above (explicit)
//  marksmith inspect <input> [<pass>]                     - Show the text after each pass
//  marksmith generate-css                                 - Print the baseline stylesheet
//  marksmith --list-formats                               - List passes and formats
//
// Extra Parameters:
//
// Format-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix; known keys override configuration, the rest are
// handed to the format.
// Example:
//  marksmith notes.md -o notes.html --extra-theme serif --extra-title "Meeting notes"

mod inspect;

use clap::{Arg, ArgAction, Command, ValueHint};
use inspect::InspectOptions;
use marksmith::{publish, FormatRegistry, Pass, PublishArtifact, PublishSpec};
use marksmith_config::{InspectOutput, Loader, MarksmithConfig, CONFIG_FILENAME};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

const SUBCOMMANDS: &[&str] = &["convert", "inspect", "generate-css", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args.get(i + 1).is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("marksmith")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown into HTML")
        .long_about(
            "marksmith converts Markdown into HTML with a fixed chain of rewrite passes.\n\n\
            Commands:\n  \
            - convert: Render Markdown as an HTML fragment or a standalone document\n  \
            - inspect: Show the text after each rewrite pass\n  \
            - generate-css: Print the baseline stylesheet\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass format-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            marksmith notes.md                           # HTML fragment to stdout\n  \
            marksmith notes.md -o notes.html             # Standalone document\n  \
            marksmith notes.md --to html-document        # Standalone document to stdout\n  \
            cat notes.md | marksmith -                   # Read from stdin\n  \
            marksmith inspect notes.md italic            # Text right after the italic pass"
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
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
                .help("Path to a marksmith.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log progress to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert Markdown to HTML (default command)")
                .long_about(
                    "Convert a Markdown file to HTML.\n\n\
                    Formats:\n  \
                    - html:          HTML fragment, no document wrapper\n  \
                    - html-document: Complete HTML page with embedded styles (.html, .htm)\n\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\
                    A directory given to -o receives converted-markdown.html.\n\n\
                    Extra Parameters:\n  \
                    --extra-theme <modern|serif>   Document theme\n  \
                    --extra-title <text>           Document title\n  \
                    --extra-css <path>             Stylesheet appended after the theme\n\n\
                    Examples:\n  \
                    marksmith convert notes.md                   # Fragment to stdout\n  \
                    marksmith convert notes.md -o out/           # out/converted-markdown.html\n  \
                    marksmith notes.md --to html-document        # 'convert' is optional"
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target format (detected from --output, else configured)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file or directory (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the text after each rewrite pass")
                .long_about(
                    "Run the transformer and print the text as it stood after each pass.\n\n\
                    Extra Parameters:\n  \
                    --extra-skip-unchanged   Omit passes that did not change the text\n  \
                    --extra-json             Print JSON instead of text\n\n\
                    Examples:\n  \
                    marksmith inspect notes.md                  # Every pass\n  \
                    marksmith inspect notes.md links            # Only the links pass\n  \
                    marksmith inspect notes.md --extra-json     # Machine-readable"
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path, or '-' for stdin")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("pass")
                        .help("Only print the text after this pass")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            Pass::ALL.map(|pass| pass.name()),
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the baseline CSS used for standalone documents")
                .long_about(
                    "Outputs the baseline CSS embedded in every html-document.\n\n\
                    Use this as a starting point for custom styling and pass the edited\n\
                    file back with --extra-css.\n\n\
                    Examples:\n  \
                    marksmith generate-css > custom.css"
                ),
        )
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A bare input path (or "-") means the user skipped "convert"
            let injects_convert = cleaned_args.get(1).is_some_and(|first| {
                (first == "-" || !first.starts_with('-')) && !SUBCOMMANDS.contains(&first.as_str())
            });
            if injects_convert {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    init_tracing(matches.get_flag("verbose"));

    if matches.get_flag("list-formats") {
        handle_list_formats_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    let document_overridden = apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                fail("input is required");
            };
            let to = sub_matches.get_one::<String>("to").map(|s| s.as_str());
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(
                input,
                to,
                output,
                &extra_params,
                document_overridden,
                &config,
            );
        }
        Some(("inspect", sub_matches)) => {
            let Some(input) = sub_matches.get_one::<String>("input") else {
                fail("input is required");
            };
            let only = sub_matches
                .get_one::<String>("pass")
                .and_then(|name| Pass::from_name(name));
            handle_inspect_command(input, only, &config);
        }
        Some(("generate-css", _)) => {
            handle_generate_css_command();
        }
        _ => {
            fail("Unknown subcommand. Use --help for usage information.");
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Handle the convert command
fn handle_convert_command(
    input: &str,
    to: Option<&str>,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    document_overridden: bool,
    config: &MarksmithConfig,
) {
    let registry = FormatRegistry::default();
    let format = resolve_target_format(&registry, to, output, config);

    if let Err(e) = registry.get(&format) {
        fail(&format!("Error: {e}"));
    }

    let source = read_input(input);

    // configured document settings only apply to the document format
    let mut format_options = if format == "html-document" {
        config.convert.document.format_options()
    } else {
        if document_overridden {
            tracing::warn!(
                format = %format,
                "document settings only apply to html-document and were ignored"
            );
        }
        HashMap::new()
    };
    for (key, value) in extra_params {
        format_options.insert(key.clone(), value.clone());
    }

    tracing::info!(input, format = %format, "converting");

    let mut spec = PublishSpec::new(&source, &format).with_options(format_options);
    if let Some(path) = output {
        spec = spec.with_output_path(path);
    }

    match publish(spec) {
        Ok(result) => match result.artifact {
            PublishArtifact::InMemory(text) => print!("{text}"),
            PublishArtifact::File(path) => {
                tracing::info!(path = %path.display(), "wrote output");
            }
        },
        Err(e) => fail(&format!("Conversion error: {e}")),
    }
}

/// `--to` wins, then the output extension, then the configured default
fn resolve_target_format(
    registry: &FormatRegistry,
    to: Option<&str>,
    output: Option<&str>,
    config: &MarksmithConfig,
) -> String {
    if let Some(format) = to {
        return format.to_string();
    }
    output
        .and_then(|path| registry.detect_format_from_filename(path))
        .unwrap_or_else(|| config.convert.format.clone())
}

/// Handle the inspect command
fn handle_inspect_command(input: &str, only: Option<Pass>, config: &MarksmithConfig) {
    let source = read_input(input);
    let options = InspectOptions {
        only,
        skip_unchanged: config.inspect.skip_unchanged,
        output: config.inspect.output,
    };

    match inspect::inspect(&source, options) {
        Ok(report) => println!("{report}"),
        Err(e) => fail(&format!("Inspection error: {e}")),
    }
}

/// Handle the generate-css command
fn handle_generate_css_command() {
    print!("{}", marksmith::formats::default_css());
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Passes (in order):");
    for (index, pass) in Pass::ALL.iter().enumerate() {
        println!("  {:>2}. {pass}", index + 1);
    }

    println!("\nConversion formats:");
    let registry = FormatRegistry::default();
    for format_name in registry.list_formats() {
        match registry.get(&format_name) {
            Ok(format) if !format.description().is_empty() => {
                println!("  {format_name:<14} {}", format.description());
            }
            _ => println!("  {format_name}"),
        }
    }
}

fn read_input(input: &str) -> String {
    if input == "-" {
        let mut source = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut source) {
            fail(&format!("Error reading stdin: {e}"));
        }
        return source;
    }

    fs::read_to_string(input)
        .unwrap_or_else(|e| fail(&format!("Error reading file '{input}': {e}")))
}

fn load_cli_config(explicit_path: Option<&str>) -> MarksmithConfig {
    let loader = Loader::new().with_optional_file(CONFIG_FILENAME);
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader
        .build()
        .unwrap_or_else(|err| fail(&format!("Failed to load configuration: {err}")))
}

/// Moves known `--extra-*` keys into `config`.
///
/// Returns true when an `html-document` setting was overridden.
fn apply_config_overrides(
    config: &mut MarksmithConfig,
    extra_params: &mut HashMap<String, String>,
) -> bool {
    let mut document_overridden = false;
    if let Some(raw) = take_override(extra_params, &["theme"]) {
        config.convert.document.theme = raw;
        document_overridden = true;
    }
    if let Some(raw) = take_override(extra_params, &["title"]) {
        config.convert.document.title = raw;
        document_overridden = true;
    }
    if let Some(path) = take_override(extra_params, &["css", "css-path"]) {
        config.convert.document.custom_css = Some(path);
        document_overridden = true;
    }

    if let Some(raw) = take_override(extra_params, &["skip-unchanged", "skipunchanged"]) {
        config.inspect.skip_unchanged = parse_bool_arg("skip-unchanged", &raw);
    }
    if let Some(raw) = extra_params.remove("json") {
        config.inspect.output = if parse_bool_arg("json", &raw) {
            InspectOutput::Json
        } else {
            InspectOutput::Text
        };
    }
    document_overridden
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| map.remove(*key))
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => fail(&format!("Invalid boolean value '{other}' for --extra-{flag}")),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("{message}");
    std::process::exit(1);
}
