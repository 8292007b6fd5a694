//! CLI tool to render Java source files as x-ray images.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use javaxray::{Converter, Error};
use log::{error, info, warn};

fn usage() -> ExitCode {
    eprintln!("Usage: javaxray <command> [options] [files...]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  render  Write a PNG x-ray for each Java file");
    eprintln!("  dump    Print the classified fragments of each file");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -o, --output <path>  Output image (single input only,");
    eprintln!("                       default: <input>.png)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  javaxray render Main.java");
    eprintln!("  javaxray render Main.java -o main.png");
    eprintln!("  javaxray dump Main.java");
    eprintln!();
    eprintln!("Set RUST_LOG=debug for pipeline details.");
    ExitCode::from(2)
}

fn default_output(input: &Path) -> PathBuf {
    let mut name = input.as_os_str().to_owned();
    name.push(".png");
    PathBuf::from(name)
}

fn is_java(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "java")
}

fn render_file(converter: &Converter, input: &Path, output: &Path) -> Result<(), Error> {
    let boxes = converter.convert_file(input)?;
    javaxray::save_png(&boxes, converter.palette(), output)?;
    let (width, height) = boxes.dimension();
    info!(
        "{}: {} boxes, {width}x{height} -> {}",
        input.display(),
        boxes.len(),
        output.display()
    );
    Ok(())
}

fn dump_file(converter: &Converter, input: &Path) -> Result<(), Error> {
    let content = std::fs::read(input)?;
    let source = String::from_utf8_lossy(&content);
    let fragments = converter.fragments(&source)?;
    println!("== {}", input.display());
    for fragment in &fragments {
        println!("{fragment}");
    }
    let boxes = javaxray::layout(fragments, converter.geometry(), converter.palette());
    let (width, height) = boxes.dimension();
    println!("-- {} boxes, canvas {width}x{height}", boxes.len());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 || args[1] == "--help" || args[1] == "-h" {
        return usage();
    }

    let command = args[1].as_str();
    let mut files = Vec::new();
    let mut output: Option<PathBuf> = None;

    let mut rest = args[2..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                let Some(path) = rest.next() else {
                    eprintln!("Error: {arg} needs a path");
                    return ExitCode::from(2);
                };
                output = Some(PathBuf::from(path));
            }
            _ => files.push(PathBuf::from(arg)),
        }
    }

    if files.is_empty() {
        eprintln!("Error: no files specified");
        return ExitCode::from(2);
    }

    if output.is_some() && files.len() > 1 {
        eprintln!("Error: --output needs exactly one input file");
        return ExitCode::from(2);
    }

    let converter = Converter::new();
    let mut had_error = false;

    for path in &files {
        let result = match command {
            "render" => {
                if !is_java(path) {
                    warn!("{}: not a Java file, skipped", path.display());
                    continue;
                }
                let target = output.clone().unwrap_or_else(|| default_output(path));
                render_file(&converter, path, &target)
            }
            "dump" => dump_file(&converter, path),
            _ => {
                eprintln!("Unknown command: {command}");
                return ExitCode::from(2);
            }
        };

        if let Err(e) = result {
            error!("{}: {e}", path.display());
            had_error = true;
        }
    }

    if had_error {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
