use anyhow::{Context, Result, anyhow};
use clap::{Arg, ArgAction, ArgMatches, Command};
use npp_collection::config::{DEFAULT_BASE_URL, DEFAULT_OUTPUT};
use npp_collection::{Collection, GeneratorConfig, Module, RequestDescriptor};
use serde_json::json;
use std::io::Write;
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let matches = build_cli().get_matches();
    init_tracing(matches.get_count("verbose"));

    let mut config = GeneratorConfig::default();
    if let Some(output) = matches.get_one::<String>("output") {
        config = config.with_output(output);
    }
    if let Some(base_url) = matches.get_one::<String>("base_url") {
        config = config.with_base_url(base_url);
    }
    let quiet = matches.get_flag("quiet");

    let collection =
        npp_collection::build_collection(&config).context("catalog validation failed")?;

    match matches.subcommand() {
        Some(("list", sub)) => handle_list(&collection, sub),
        Some(("describe", sub)) => handle_describe(&collection, sub),
        Some(("print", _)) => {
            write_stdout_line(&npp_collection::render(&collection)?)?;
            Ok(())
        }
        Some(("check", _)) => {
            if !quiet {
                print_summary(&collection)?;
                write_stdout_line("Catalog is consistent.")?;
            }
            Ok(())
        }
        Some((other, _)) => Err(anyhow!("unknown command {other}")),
        None => handle_generate(&collection, &config, quiet),
    }
}

fn build_cli() -> Command {
    Command::new("npp-collection")
        .about("Generate the NPP Contract Management API Postman collection")
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .global(true)
                .value_name("PATH")
                .help(format!("Output file (default: {DEFAULT_OUTPUT})")),
        )
        .arg(
            Arg::new("base_url")
                .long("base-url")
                .global(true)
                .value_name("URL")
                .help(format!("Default for the baseUrl variable (default: {DEFAULT_BASE_URL})")),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Increase log verbosity"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Suppress the progress summary"),
        )
        .subcommand(
            Command::new("list")
                .about("List modules and their requests")
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit machine-readable JSON"),
                ),
        )
        .subcommand(
            Command::new("describe")
                .about("Describe a single request")
                .arg(Arg::new("module").required(true).help("Module number or name"))
                .arg(Arg::new("request").required(true).help("Request name"))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .action(ArgAction::SetTrue)
                        .help("Emit the persisted JSON form"),
                ),
        )
        .subcommand(Command::new("check").about("Validate the catalog without writing"))
        .subcommand(Command::new("print").about("Write the collection JSON to stdout"))
}

fn init_tracing(verbose: u8) {
    let filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
        .to_string()
    });
    let filter = EnvFilter::try_new(&filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn handle_generate(collection: &Collection, config: &GeneratorConfig, quiet: bool) -> Result<()> {
    npp_collection::write_collection(collection, &config.output)
        .with_context(|| format!("write {}", config.output.display()))?;

    if !quiet {
        write_stdout_line("Generating Postman collection...")?;
        print_summary(collection)?;
        write_stdout_line("")?;
        write_stdout_line("Postman collection generated successfully!")?;
        write_stdout_line(&format!("File: {}", config.output.display()))?;
        write_stdout_line(&format!(
            "Import this file into Postman to test all {} endpoints!",
            collection.endpoint_count()
        ))?;
        write_stdout_line("Run 'Login' request first to get JWT token")?;
        write_stdout_line(&format!("Base URL: {}", config.base_url))?;
    }
    Ok(())
}

fn print_summary(collection: &Collection) -> Result<()> {
    for module in &collection.modules {
        write_stdout_line(&format!(
            "Added {} module: {} endpoints",
            module.title(),
            module.requests.len()
        ))?;
    }
    write_stdout_line(&format!("Total modules: {}", collection.modules.len()))?;
    write_stdout_line(&format!("Total endpoints: {}", collection.endpoint_count()))?;
    Ok(())
}

fn handle_list(collection: &Collection, matches: &ArgMatches) -> Result<()> {
    if matches.get_flag("json") {
        let out: Vec<_> = collection
            .modules
            .iter()
            .map(|module| {
                let requests: Vec<String> =
                    module.requests.iter().map(|r| r.name.clone()).collect();
                json!({"module": module.name, "requests": requests})
            })
            .collect();
        write_stdout_line(&serde_json::to_string_pretty(&out)?)?;
        return Ok(());
    }

    for module in &collection.modules {
        write_stdout_line(&module.name)?;
        for request in &module.requests {
            write_stdout_line(&format!(
                "  {:<6} {}  {}",
                request.method,
                request.url.relative(),
                request.name
            ))?;
        }
    }
    Ok(())
}

fn handle_describe(collection: &Collection, matches: &ArgMatches) -> Result<()> {
    let module_key = matches
        .get_one::<String>("module")
        .ok_or_else(|| anyhow!("module required"))?;
    let request_name = matches
        .get_one::<String>("request")
        .ok_or_else(|| anyhow!("request required"))?;

    let module =
        find_module(collection, module_key).ok_or_else(|| anyhow!("unknown module {module_key}"))?;
    let request = module
        .find(request_name)
        .ok_or_else(|| anyhow!("unknown request {request_name} in {}", module.name))?;

    if matches.get_flag("json") {
        write_stdout_line(&serde_json::to_string_pretty(request)?)?;
        return Ok(());
    }

    write_stdout_line(&format!("{} / {}", module.name, request.name))?;
    write_stdout_line(&format!("  method: {}", request.method))?;
    write_stdout_line(&format!("  url: {}", request.url.raw))?;
    write_stdout_line(&format!(
        "  auth: {}",
        if request.requires_auth() { "bearer (inherited)" } else { "none" }
    ))?;
    if let Some(desc) = &request.description {
        write_stdout_line(&format!("  description: {desc}"))?;
    }
    describe_body(request)?;
    for action in &request.post_actions {
        write_stdout_line(&format!(
            "  on {}: store response.{} as {{{{{}}}}}",
            action.status, action.field, action.variable
        ))?;
    }
    Ok(())
}

fn describe_body(request: &RequestDescriptor) -> Result<()> {
    use npp_collection::{Body, FormField};

    match &request.body {
        None => {}
        Some(body @ Body::Json(_)) => {
            if let Some(text) = body.json_text() {
                write_stdout_line("  body (json):")?;
                for line in text?.lines() {
                    write_stdout_line(&format!("    {line}"))?;
                }
            }
        }
        Some(Body::Form(fields)) => {
            write_stdout_line("  body (form-data):")?;
            for field in fields {
                match field {
                    FormField::Text { key, value } => {
                        write_stdout_line(&format!("    {key} = {value}"))?
                    }
                    FormField::File { key, .. } => write_stdout_line(&format!("    {key} <file>"))?,
                }
            }
        }
    }
    Ok(())
}

/// Matches a module by sequence number (`4`, `04`) or full name.
fn find_module<'a>(collection: &'a Collection, key: &str) -> Option<&'a Module> {
    if let Ok(seq) = key.trim().parse::<u32>() {
        return collection.modules.iter().find(|m| m.sequence() == Some(seq));
    }
    collection.modules.iter().find(|m| {
        m.name.eq_ignore_ascii_case(key) || m.title().eq_ignore_ascii_case(key)
    })
}

fn write_stdout_line(value: &str) -> Result<()> {
    let mut out = std::io::stdout().lock();
    if let Err(err) = out.write_all(value.as_bytes()) {
        if err.kind() == std::io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        return Err(err.into());
    }
    if let Err(err) = out.write_all(b"\n") {
        if err.kind() == std::io::ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
        return Err(err.into());
    }
    Ok(())
}
