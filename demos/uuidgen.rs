//! Simple command that prints one or '-n count' UUID strings of a chosen version

use std::{io, io::Write, process::ExitCode};

use clap::Parser;
use rfc4122::{Configuration, Generator, Interface, NamespaceGenerator, Uuid, Version};

#[derive(Parser, Debug)]
#[command(name = "uuidgen", about = "Prints RFC 4122 UUIDs", disable_version_flag = true)]
struct Args {
    /// UUID version to generate: 1, 3, 4, or 5
    #[arg(short = 'v', long = "version", default_value_t = 4)]
    uuid_version: u8,

    /// Number of UUIDs to print
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Namespace of versions 3 and 5: dns, url, oid, x500, or a UUID string
    #[arg(long, default_value = "dns", value_parser = parse_namespace)]
    namespace: Uuid,

    /// Name to hash for versions 3 and 5
    #[arg(long)]
    name: Option<String>,

    /// Hardware address used as the node ID of version 1, e.g. 00:16:3e:01:02:03
    #[arg(long, value_parser = parse_mac)]
    mac: Option<[u8; 6]>,
}

fn main() -> io::Result<ExitCode> {
    pretty_env_logger::init();
    let args = Args::parse();
    let version = Version::from(args.uuid_version);

    let mut buf = io::BufWriter::new(io::stdout());
    match version {
        Version::NAME_BASED_MD5 | Version::NAME_BASED_SHA1 => {
            let Some(name) = args.name else {
                eprintln!("Error: option '--name' is required for version {}", version);
                return Ok(ExitCode::FAILURE);
            };
            let g = match NamespaceGenerator::new(args.namespace, version) {
                Ok(g) => g,
                Err(err) => {
                    eprintln!("Error: {}", err);
                    return Ok(ExitCode::FAILURE);
                }
            };
            for _ in 0..args.count {
                writeln!(buf, "{}", g.generate(&name))?;
            }
        }
        _ => {
            let config = Configuration::with_rand08(version, rand::rngs::OsRng).with_interfaces(
                args.mac
                    .map(|addr| Interface::new("--mac", Some(addr.to_vec()))),
            );
            let mut g = match Generator::new(config) {
                Ok(g) => g,
                Err(err) => {
                    eprintln!("Error: {}", err);
                    return Ok(ExitCode::FAILURE);
                }
            };
            for _ in 0..args.count {
                match g.generate() {
                    Ok(uuid) => writeln!(buf, "{}", uuid)?,
                    Err(err) => {
                        buf.flush()?;
                        eprintln!("Error: {}", err);
                        return Ok(ExitCode::FAILURE);
                    }
                }
            }
        }
    }

    buf.flush()?;
    Ok(ExitCode::SUCCESS)
}

fn parse_namespace(arg: &str) -> Result<Uuid, String> {
    match arg {
        "dns" => Ok(Uuid::NAMESPACE_DNS),
        "url" => Ok(Uuid::NAMESPACE_URL),
        "oid" => Ok(Uuid::NAMESPACE_OID),
        "x500" => Ok(Uuid::NAMESPACE_X500),
        _ => arg
            .parse()
            .map_err(|err| format!("invalid namespace '{}': {}", arg, err)),
    }
}

fn parse_mac(arg: &str) -> Result<[u8; 6], String> {
    let mut addr = [0u8; 6];
    let mut parts = arg.split([':', '-']);
    for e in addr.iter_mut() {
        let part = parts.next().filter(|p| p.len() == 2);
        *e = part
            .and_then(|p| u8::from_str_radix(p, 16).ok())
            .ok_or_else(|| format!("invalid hardware address '{}'", arg))?;
    }
    if parts.next().is_some() {
        return Err(format!("invalid hardware address '{}'", arg));
    }
    Ok(addr)
}
