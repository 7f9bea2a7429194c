//! binstream CLI - Tool for inspecting little-endian binary asset files.

use binstream::prelude::*;
use std::env;
use std::fmt::Display;
use std::io::SeekFrom;
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = env::args().collect();

    // Parse global flags
    let mut level = "warn";
    let mut filtered_args: Vec<&str> = Vec::new();
    for arg in &args[1..] {
        match arg.as_str() {
            "-v" | "--verbose" => level = "debug",
            "-vv" | "--trace" => level = "trace",
            "-q" | "--quiet" => level = "error",
            _ => filtered_args.push(arg),
        }
    }
    init_logging(level);

    if filtered_args.is_empty() {
        print_help();
        return;
    }

    let rest = &filtered_args[1..];
    let result = match filtered_args[0] {
        "r" | "read" => cmd_read(rest),
        "x" | "dump" => cmd_dump(rest),
        "s" | "cstr" => cmd_cstr(rest),
        "hash" => cmd_hash(rest),
        "d" | "decompose" => cmd_decompose(rest),
        "version" | "--version" => {
            println!("binstream {} (built {})", env!("CARGO_PKG_VERSION"), env!("BINSTREAM_BUILD_DATE"));
            Ok(())
        }
        "h" | "help" | "-h" | "--help" => {
            print_help();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {}", other);
            eprintln!("Run 'binstream-cli help' for usage.");
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(level: &str) {
    // RUST_LOG wins over the command-line verbosity flags
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_help() {
    println!("binstream - little-endian binary asset toolkit");
    println!();
    println!("USAGE:");
    println!("    binstream-cli [OPTIONS] <COMMAND> [ARGS]");
    println!();
    println!("COMMANDS:");
    println!("    r, read  <file> <type> [--offset N] [--count N]   Read typed values");
    println!("    x, dump  <file> [--offset N] [--len N]            Hex dump a byte range");
    println!("    s, cstr  <file> [--offset N]                      Read a null-terminated string");
    println!("    hash     <name>...                                FNV-1a field hashes");
    println!("    d, decompose <16 floats> [--json]                 Split a row-major matrix into T/R/S");
    println!("    version                                           Show version");
    println!("    h, help                                           Show this help");
    println!();
    println!("TYPES:");
    let names: Vec<&str> = Primitive::ALL.iter().map(|p| p.name()).collect();
    println!("    {}", names.join(" "));
    println!();
    println!("OPTIONS:");
    println!("    -v, --verbose    Show debug output");
    println!("    -vv, --trace     Show trace output (very verbose)");
    println!("    -q, --quiet      Only show errors");
    println!();
    println!("Offsets and lengths accept decimal or 0x-prefixed hex.");
}

/// Positional arguments plus `--key value` options.
struct Args<'a> {
    positional: Vec<&'a str>,
    options: Vec<(&'a str, &'a str)>,
    flags: Vec<&'a str>,
}

impl<'a> Args<'a> {
    fn parse(args: &[&'a str], value_keys: &[&str]) -> Result<Self> {
        let mut out = Args { positional: Vec::new(), options: Vec::new(), flags: Vec::new() };
        let mut iter = args.iter().copied();
        while let Some(arg) = iter.next() {
            if value_keys.iter().any(|k| *k == arg) {
                let value = iter
                    .next()
                    .ok_or_else(|| Error::other(format!("missing value for {}", arg)))?;
                out.options.push((arg, value));
            } else if arg.starts_with("--") {
                out.flags.push(arg);
            } else {
                out.positional.push(arg);
            }
        }
        Ok(out)
    }

    fn positional(&self, index: usize, what: &str) -> Result<&'a str> {
        self.positional
            .get(index)
            .copied()
            .ok_or_else(|| Error::other(format!("missing {} argument", what)))
    }

    fn number(&self, key: &str, default: u64) -> Result<u64> {
        match self.options.iter().rev().find(|(k, _)| *k == key) {
            Some((_, v)) => parse_number(v),
            None => Ok(default),
        }
    }

    fn flag(&self, key: &str) -> bool {
        self.flags.iter().any(|f| *f == key)
    }
}

fn parse_number(s: &str) -> Result<u64> {
    let parsed = match s.strip_prefix("0x") {
        Some(hex) => u64::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|_| Error::other(format!("invalid number: {}", s)))
}

fn print_all<T: Display>(values: impl IntoIterator<Item = T>) {
    for (i, v) in values.into_iter().enumerate() {
        println!("[{}] {}", i, v);
    }
}

fn cmd_read(args: &[&str]) -> Result<()> {
    let args = Args::parse(args, &["--offset", "--count"])?;
    let path = args.positional(0, "file")?;
    let ty: Primitive = args.positional(1, "type")?.parse()?;
    let offset = args.number("--offset", 0)?;
    let count = args.number("--count", 1)? as usize;

    let mut bs = BinStream::open(path)?;
    bs.seek(SeekFrom::Start(offset))?;
    tracing::debug!(%ty, offset, count, "reading values");

    match ty {
        Primitive::Bool => print_all(bs.read_bool(count)?),
        Primitive::I8 => print_all(bs.read_i8(count)?),
        Primitive::U8 => print_all(bs.read_u8(count)?),
        Primitive::I16 => print_all(bs.read_i16(count)?),
        Primitive::U16 => print_all(bs.read_u16(count)?),
        Primitive::I32 => print_all(bs.read_i32(count)?),
        Primitive::U32 => print_all(bs.read_u32(count)?),
        Primitive::I64 => print_all(bs.read_i64(count)?),
        Primitive::U64 => print_all(bs.read_u64(count)?),
        Primitive::F32 => print_all(bs.read_f32(count)?),
        Primitive::Vec2 => print_all(bs.read_vec2(count)?),
        Primitive::Vec3 => print_all(bs.read_vec3(count)?),
        Primitive::Vec4 => print_all(bs.read_vec4(count)?),
        Primitive::Quat => print_all(bs.read_quat(count)?),
        Primitive::Mtx4 => {
            for i in 0..count {
                println!("[{}]\n{}", i, bs.read_mtx4()?);
            }
        }
    }
    println!("-- end at 0x{:x}", bs.tell()?);
    Ok(())
}

fn cmd_dump(args: &[&str]) -> Result<()> {
    let args = Args::parse(args, &["--offset", "--len"])?;
    let path = args.positional(0, "file")?;
    let offset = args.number("--offset", 0)?;

    let mut bs = BinStream::open(path)?;
    let end = bs.end()?;
    let available = end.saturating_sub(offset);
    let len = args.number("--len", available.min(256))?.min(available) as usize;

    bs.seek(SeekFrom::Start(offset))?;
    let bytes = bs.read_bytes(len)?;
    for (row, chunk) in bytes.chunks(16).enumerate() {
        let hex: Vec<String> = chunk.iter().map(|b| format!("{:02x}", b)).collect();
        let text: String = chunk
            .iter()
            .map(|&b| if b.is_ascii_graphic() || b == b' ' { b as char } else { '.' })
            .collect();
        println!("{:08x}  {:<47}  {}", offset + row as u64 * 16, hex.join(" "), text);
    }
    Ok(())
}

fn cmd_cstr(args: &[&str]) -> Result<()> {
    let args = Args::parse(args, &["--offset"])?;
    let path = args.positional(0, "file")?;
    let offset = args.number("--offset", 0)?;

    let mut bs = BinStream::open(path)?;
    bs.seek(SeekFrom::Start(offset))?;
    let s = bs.read_ascii_until0()?;
    println!("{:?}", s);
    println!("-- end at 0x{:x}", bs.tell()?);
    Ok(())
}

fn cmd_hash(args: &[&str]) -> Result<()> {
    if args.is_empty() {
        return Err(Error::other("missing name argument"));
    }
    let mut cache = HashCache::new();
    for name in args {
        println!("{}  {}", cache.get(name)?, name);
    }
    Ok(())
}

fn cmd_decompose(args: &[&str]) -> Result<()> {
    let args = Args::parse(args, &[])?;
    let cells = args
        .positional
        .iter()
        .map(|s| s.parse::<f32>().map_err(|_| Error::other(format!("invalid float: {}", s))))
        .collect::<Result<Vec<f32>>>()?;
    let cells: [f32; 16] = cells
        .try_into()
        .map_err(|v: Vec<f32>| Error::other(format!("expected 16 floats, got {}", v.len())))?;

    let m = Matrix4::new(cells);
    let (translation, rotation, scale) = m.decompose();

    if args.flag("--json") {
        let json = serde_json::json!({
            "translation": translation,
            "rotation": rotation,
            "scale": scale,
        });
        let text = serde_json::to_string_pretty(&json).map_err(|e| Error::other(e.to_string()))?;
        println!("{}", text);
    } else {
        println!("{}", m);
        println!();
        println!("translation: {}", translation);
        println!("rotation:    {}", rotation);
        println!("scale:       {}", scale);
    }
    Ok(())
}
