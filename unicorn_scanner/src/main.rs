use std::env;
use unicorn_scanner::{driver, logging, scanner};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize global logging system
    logging::init_global_logging()?;

    // Validate scanner configuration
    scanner::validate_scanner_limits()?;

    let args: Vec<String> = env::args().collect();

    if args.len() > 1 && args[1] == "--help" {
        print_help(&args[0]);
        return Ok(());
    }

    if args.len() > 2 {
        eprintln!("Usage: {} [input-file]", args[0]);
        eprintln!("       {} --help", args[0]);
        std::process::exit(1);
    }

    let result = match args.get(1) {
        Some(file_path) => driver::run_file(file_path),
        None => driver::run_stdin(),
    };

    if let Err(error) = result {
        eprintln!("FAILED: {}", error);
        print_detailed_error(&error);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help(program_name: &str) {
    println!("Unicorn Scanner v{}", env!("CARGO_PKG_VERSION"));
    println!("Lexical scanner emitting one numeric token category code per line");
    println!();
    println!("USAGE:");
    println!(
        "    {} <input-file>       # Scan a file",
        program_name
    );
    println!(
        "    {}                    # Scan standard input",
        program_name
    );
    println!();
    println!("OPTIONS:");
    println!("    --help    Show this help message");
    println!();
    println!("OUTPUT:");
    println!("    One code per token, one per line, ending with 0 at end of input:");
    println!("        0    EndOfInput");
    println!("        1    Symbol");
    println!("        2    Text");
    println!("        3    Number");
    println!("        4    Identifier");
    println!();
    println!("    Exit status is 0 on normal exhaustion, 1 on any input or");
    println!("    lexical error. Errors are reported on stderr.");
    println!();

    let limits = scanner::get_scanner_limits();
    println!("LIMITS:");
    println!("    Max lexeme length: {} bytes", limits.max_lexeme_length);
    println!("    Max text literal:  {} bytes", limits.max_text_size);
    println!("    Max token count:   {}", limits.max_token_count);
}

fn print_detailed_error(error: &driver::DriverError) {
    match error {
        driver::DriverError::Source(ref source_err) => {
            eprintln!("Source input stage failed:");
            eprintln!("  [{}] {}", source_err.error_code(), source_err);
        }
        driver::DriverError::Scan(ref scan_err) => {
            eprintln!("Lexical scan stage failed:");
            eprintln!("  [{}] {}", scan_err.error_code(), scan_err);
        }
        driver::DriverError::Output(ref io_err) => {
            eprintln!("Output stage failed:");
            eprintln!("  {}", io_err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unicorn_scanner::{ScanError, SourceError};

    #[test]
    fn test_print_detailed_error_does_not_panic() {
        print_detailed_error(&driver::DriverError::Scan(ScanError::UnterminatedText {
            line: 1,
        }));
        print_detailed_error(&driver::DriverError::Source(SourceError::NotFound {
            path: "missing.uni".to_string(),
        }));
    }
}
