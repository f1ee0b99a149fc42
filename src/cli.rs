use crate::{repair, repair_to_writer, repair_with_log};
use std::env;
use std::fs::{self, File};
use std::io::{self, BufWriter, Read, Write};

fn print_help(program: &str) {
    eprintln!(
        "Usage: {prog} [OPTIONS] [INPUT]\n\
         \n\
         INPUT: optional input file. When omitted, reads from stdin.\n\
         \n\
         Options:\n\
           -o, --output FILE   Write output to FILE (default stdout)\n\
               --in-place      Overwrite INPUT file\n\
               --log           Print applied repairs to stderr\n\
               --pretty        Pretty-print output (requires the serde feature)\n\
           -h, --help          Show this help\n",
        prog = program
    );
}

struct CliMode {
    input: Option<String>,
    output: Option<String>,
    in_place: bool,
    log: bool,
    pretty: bool,
}

fn parse_args() -> CliMode {
    let mut args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "jsonmend".to_string());
    args.remove(0);

    let mut mode = CliMode {
        input: None,
        output: None,
        in_place: false,
        log: false,
        pretty: false,
    };

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help(&program);
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Missing FILE for --output");
                    std::process::exit(2);
                }
                mode.output = Some(args[i].clone());
            }
            "--in-place" => {
                mode.in_place = true;
            }
            "--log" => {
                mode.log = true;
            }
            "--pretty" => {
                mode.pretty = true;
            }
            s if s.starts_with('-') => {
                eprintln!("Unknown option: {}", s);
                std::process::exit(2);
            }
            path => {
                mode.input = Some(path.to_string());
            }
        }
        i += 1;
    }
    mode
}

fn render(content: &str, mode: &CliMode) -> Result<String, Box<dyn std::error::Error>> {
    let s = if mode.log {
        let (s, entries) = repair_with_log(content);
        for e in &entries {
            eprintln!("repair at {}: {}", e.position, e.message);
        }
        s
    } else {
        repair(content)
    };
    if mode.pretty {
        #[cfg(feature = "serde")]
        {
            let v: serde_json::Value = serde_json::from_str(&s)
                .map_err(|e| crate::RepairError::from_serde("parse", e))?;
            return Ok(serde_json::to_string_pretty(&v)?);
        }
        #[cfg(not(feature = "serde"))]
        return Err("--pretty requires the serde feature".into());
    }
    Ok(s)
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mode = parse_args();

    if mode.in_place {
        let inp = mode
            .input
            .as_ref()
            .ok_or("--in-place requires INPUT file")?;
        let content = fs::read_to_string(inp)?;
        let s = render(&content, &mode)?;
        fs::write(inp, s)?;
        return Ok(());
    }

    let mut out_writer: Box<dyn Write> = if let Some(ref o) = mode.output {
        Box::new(BufWriter::new(File::create(o)?))
    } else {
        Box::new(BufWriter::new(io::stdout()))
    };

    let content = match mode.input {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    if mode.log || mode.pretty {
        let s = render(&content, &mode)?;
        out_writer.write_all(s.as_bytes())?;
    } else {
        repair_to_writer(&content, &mut out_writer)?;
    }
    out_writer.flush()?;
    Ok(())
}
