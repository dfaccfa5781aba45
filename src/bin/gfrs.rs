//! gfrs binary - inspect finite fields and run Reed-Solomon codes from the shell

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use gfrs::{Element, Field, FieldConfig, ReedSolomon};

/// Fields up to this order get their full log table printed by `info`
const MAX_PRINTED_TABLE: u64 = 64;

fn field_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("characteristic")
            .short('p')
            .long("characteristic")
            .help("Prime characteristic p")
            .value_name("P")
            .required(true),
    )
    .arg(
        Arg::new("degree")
            .short('m')
            .long("degree")
            .help("Extension degree m")
            .value_name("M")
            .default_value("1"),
    )
    .arg(
        Arg::new("poly")
            .long("poly")
            .help("Monic reduction polynomial, lowest degree first (e.g. 1,0,1 for x^2+1)")
            .value_name("C0,C1,..."),
    )
    .arg(
        Arg::new("primitive")
            .long("primitive")
            .help("Known primitive element, lowest degree first; skips the search")
            .value_name("C0,C1,..."),
    )
    .arg(
        Arg::new("no-tables")
            .long("no-tables")
            .help("Skip the primitive element search and log tables")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("threads")
            .short('t')
            .long("threads")
            .help("Number of CPU threads for the primitive element search (0 = auto-detect)")
            .value_name("N")
            .default_value("0"),
    )
    .arg(
        Arg::new("no-parallel")
            .long("no-parallel")
            .help("Disable all parallel processing")
            .action(ArgAction::SetTrue),
    )
}

fn code_args(cmd: Command) -> Command {
    field_args(cmd)
        .arg(
            Arg::new("length")
                .short('n')
                .long("length")
                .help("Codeword length")
                .value_name("N")
                .required(true),
        )
        .arg(
            Arg::new("message_length")
                .short('k')
                .long("message-length")
                .help("Message length")
                .value_name("K")
                .required(true),
        )
        .arg(
            Arg::new("values")
                .help("Symbols: integers, or comma-separated coefficients for m > 1")
                .value_name("VALUE")
                .required(true)
                .num_args(1..),
        )
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();

    let matches = Command::new("gfrs")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Finite field arithmetic and Reed-Solomon coding over GF(p^m)")
        .arg_required_else_help(true)
        .subcommand(field_args(
            Command::new("info").about("Describe a field and its primitive element"),
        ))
        .subcommand(code_args(
            Command::new("encode")
                .visible_alias("e")
                .about("Encode a message of k symbols"),
        ))
        .subcommand(code_args(
            Command::new("decode")
                .visible_alias("d")
                .about("Decode a received word of n symbols"),
        ))
        .get_matches();

    match matches.subcommand() {
        Some(("info", sub_matches)) => handle_info(sub_matches),
        Some(("encode", sub_matches)) => handle_encode(sub_matches),
        Some(("decode", sub_matches)) => handle_decode(sub_matches),
        Some((cmd, _)) => anyhow::bail!("Unknown command: {}", cmd),
        None => anyhow::bail!("No command specified, use 'gfrs --help' for usage information"),
    }
}

fn parse_number<T: std::str::FromStr>(matches: &ArgMatches, name: &str) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let raw = matches
        .get_one::<String>(name)
        .with_context(|| format!("Missing argument {}", name))?;
    raw.trim()
        .parse()
        .with_context(|| format!("Invalid value for {}: {}", name, raw))
}

fn parse_coefficient_list(matches: &ArgMatches, name: &str) -> Result<Option<Vec<u32>>> {
    matches
        .get_one::<String>(name)
        .map(|s| {
            s.split(',')
                .map(|c| c.trim().parse::<u32>())
                .collect::<std::result::Result<Vec<_>, _>>()
                .with_context(|| format!("Invalid coefficient list for {}: {}", name, s))
        })
        .transpose()
}

fn build_field(matches: &ArgMatches) -> Result<Field> {
    let p: u32 = parse_number(matches, "characteristic")?;
    let m: usize = parse_number(matches, "degree")?;
    let poly = parse_coefficient_list(matches, "poly")?;

    let mut config = FieldConfig::from_args(matches);
    config.primitive_element = parse_coefficient_list(matches, "primitive")?;
    Field::with_config(p, m, poly.as_deref(), &config)
        .with_context(|| format!("Failed to construct GF({}^{})", p, m))
}

fn parse_value(field: &Field, raw: &str) -> Result<Element> {
    let element = if raw.contains(',') {
        let coefs = raw
            .split(',')
            .map(|c| c.trim().parse::<i64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .with_context(|| format!("Invalid coefficient list: {}", raw))?;
        field.element(coefs)
    } else {
        let value: i64 = raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid integer: {}", raw))?;
        field.element(value)
    };
    element.with_context(|| format!("Value {} is not an element of {}", raw, field))
}

fn build_code(matches: &ArgMatches) -> Result<(ReedSolomon, Vec<Element>)> {
    let field = build_field(matches)?;
    let n: usize = parse_number(matches, "length")?;
    let k: usize = parse_number(matches, "message_length")?;
    let rs = ReedSolomon::with_default_points(&field, n, k)
        .with_context(|| format!("Failed to construct a [{}, {}] code over {}", n, k, field))?;

    let values = matches
        .get_many::<String>("values")
        .into_iter()
        .flatten()
        .map(|raw| parse_value(&field, raw))
        .collect::<Result<Vec<_>>>()?;

    Ok((rs, values))
}

fn join(elements: &[Element]) -> String {
    elements
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

fn handle_info(matches: &ArgMatches) -> Result<()> {
    let field = build_field(matches)?;

    println!("Field:          {}", field);
    println!("Characteristic: {}", field.characteristic());
    println!("Degree:         {}", field.degree());
    if let Some(poly) = field.reduction_poly() {
        println!("Reduction poly: {:?}", poly);
    }

    let Some(alpha) = field.primitive_element() else {
        println!("Log tables:     not built");
        return Ok(());
    };
    println!("Primitive:      {:#}", alpha);

    if field.order() <= MAX_PRINTED_TABLE {
        println!("\n  i  alpha^i");
        for i in 0..field.order() - 1 {
            let power = field.from_log(i).context("Failed to read log table")?;
            println!("{:>3}  {}", i, power);
        }
    }
    Ok(())
}

fn handle_encode(matches: &ArgMatches) -> Result<()> {
    let (rs, message) = build_code(matches)?;
    let codeword = rs.encode(&message).context("Failed to encode message")?;
    println!("{}", join(&codeword));
    Ok(())
}

fn handle_decode(matches: &ArgMatches) -> Result<()> {
    let (rs, received) = build_code(matches)?;
    let message = rs.decode(&received).context("Failed to decode")?;
    let corrected = rs
        .error_positions(&received)
        .context("Failed to locate errors")?;

    println!("{}", join(&message));
    if corrected.is_empty() {
        println!("No errors found");
    } else {
        let positions: Vec<String> = corrected.iter().map(ToString::to_string).collect();
        println!("Corrected positions: {}", positions.join(" "));
    }
    Ok(())
}
