use clap::{Parser, Subcommand};
use image::Rgb;
use rust_qrgen::tools::{encode_to_file, parse_ec_level, parse_hex_color, symbol_summary};
use rust_qrgen::utils::raster::{RenderOptions, to_ascii};
use rust_qrgen::{ECLevel, EncodeOptions, Encoder};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "qrtool", version, about = "RustQRGen CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode text and write a PNG or JPEG image
    Encode {
        #[arg(long)]
        text: String,
        #[arg(long)]
        out: PathBuf,
        #[arg(long, default_value = "H", value_parser = parse_ec_level)]
        ecl: ECLevel,
        #[arg(long, default_value_t = 300)]
        size: u32,
        #[arg(long, default_value_t = 0)]
        border: u32,
        #[arg(long, default_value = "#000000", value_parser = parse_hex_color)]
        foreground: Rgb<u8>,
        #[arg(long, default_value = "#FFFFFF", value_parser = parse_hex_color)]
        background: Rgb<u8>,
        #[arg(long, default_value_t = 1)]
        min_version: u8,
        #[arg(long, default_value_t = 40)]
        max_version: u8,
        #[arg(long)]
        mask: Option<u8>,
        #[arg(long)]
        no_boost: bool,
    },
    /// Print an ASCII preview to stdout
    Print {
        #[arg(long)]
        text: String,
        #[arg(long, default_value = "H", value_parser = parse_ec_level)]
        ecl: ECLevel,
        #[arg(long, default_value_t = 2)]
        border: usize,
    },
    /// Show version, level, mask and capacity for a text
    Info {
        #[arg(long)]
        text: String,
        #[arg(long, default_value = "H", value_parser = parse_ec_level)]
        ecl: ECLevel,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let ok = match cli.command {
        Command::Encode {
            text,
            out,
            ecl,
            size,
            border,
            foreground,
            background,
            min_version,
            max_version,
            mask,
            no_boost,
        } => {
            let options = EncodeOptions {
                min_version,
                max_version,
                mask,
                boost_ecl: !no_boost,
            };
            let render = RenderOptions {
                size_px: size,
                border,
                foreground,
                background,
            };
            encode_cmd(&text, ecl, options, &render, &out)
        }
        Command::Print { text, ecl, border } => print_cmd(&text, ecl, border),
        Command::Info { text, ecl } => info_cmd(&text, ecl),
    };

    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn encode_cmd(
    text: &str,
    ecl: ECLevel,
    options: EncodeOptions,
    render: &RenderOptions,
    out: &Path,
) -> bool {
    let start = Instant::now();
    match encode_to_file(text, ecl, options, render, out) {
        Ok(qr) => {
            println!(
                "Wrote {} ({}x{} px): version={} error_correction={:?} mask={}",
                out.display(),
                render.size_px,
                render.size_px,
                qr.version().number(),
                qr.error_correction(),
                qr.mask_pattern().index()
            );
            println!("Total time: {:.2?}", start.elapsed());
            true
        }
        Err(err) => {
            eprintln!("Failed to encode to {}: {}", out.display(), err);
            false
        }
    }
}

fn print_cmd(text: &str, ecl: ECLevel, border: usize) -> bool {
    match Encoder::new().encode_text(text, ecl) {
        Ok(qr) => {
            print!("{}", to_ascii(&qr, border));
            true
        }
        Err(err) => {
            eprintln!("Failed to encode: {}", err);
            false
        }
    }
}

fn info_cmd(text: &str, ecl: ECLevel) -> bool {
    let qr = match Encoder::new().encode_text(text, ecl) {
        Ok(qr) => qr,
        Err(err) => {
            eprintln!("Failed to encode: {}", err);
            return false;
        }
    };

    let summary = symbol_summary(&qr, text);
    println!("Text: {} chars, {} bytes", text.chars().count(), text.len());
    match summary.mode {
        Some(mode) => println!("Segment mode: {:?}", mode),
        None => println!("Segment mode: (empty)"),
    }
    println!(
        "Version: {} ({}x{} modules)",
        summary.version, summary.size, summary.size
    );
    println!(
        "Error correction: {:?} (requested {:?})",
        summary.ec_level, ecl
    );
    println!("Mask: {}", summary.mask);
    println!("Data capacity: {} codewords", summary.data_codewords);
    println!("Dark modules: {:.2}%", summary.dark_ratio * 100.0);
    true
}
