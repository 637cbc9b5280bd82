//!
//! The Solidity compiler front end binary.
//!

pub mod arguments;

use std::io::Read;

use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    std::process::exit(match main_inner() {
        Ok(exit_code) => exit_code,
        Err(error) => {
            eprintln!("{} {}", "Error:".bright_red(), error);
            solc_cli::exit_code::FAILURE
        }
    })
}

///
/// The auxiliary `main` function to facilitate the `?` error conversion operator.
///
fn main_inner() -> anyhow::Result<i32> {
    let arguments = Arguments::new();
    arguments.validate()?;

    let search_path =
        solc_cli::SearchPath::new(arguments.base_path.clone(), arguments.include_paths.clone())?;

    let solc = match arguments.solc {
        Some(executable) => solc_cli::SolcCompiler::new(executable),
        None => solc_cli::SolcCompiler::default(),
    };
    if arguments.verbose {
        let version = solc_cli::StandardJsonCompiler::version(&solc)?;
        println!(">>> Using {} {}", solc.executable, version);
    }

    if arguments.standard_json {
        let mut input = String::with_capacity(16384);
        std::io::stdin()
            .read_to_string(&mut input)
            .map_err(|error| anyhow::anyhow!("Standard input reading error: {}", error))?;

        let import_callback: Option<&dyn solc_cli::ImportCallback> =
            if search_path.has_base_path() {
                Some(&search_path)
            } else {
                None
            };
        let output = solc_cli::standard_json(
            &solc,
            input.as_str(),
            import_callback,
            solc_cli::SmtSolver::available().as_slice(),
            arguments.pretty_json,
            arguments.verbose,
        )?;

        if arguments.verbose {
            println!(">>> Compilation result:");
        }
        println!("{}", output);
        return Ok(solc_cli::exit_code::SUCCESS);
    }

    let output = solc_cli::compile_paths(
        &solc,
        arguments.input_files.as_slice(),
        &search_path,
        arguments.optimize,
        arguments.optimize_runs,
        arguments.pretty_json,
        arguments.verbose,
    )?;
    let has_errors = output.print_diagnostics();

    solc_cli::Build::from(output).write_to_directory(
        arguments.output_directory.as_path(),
        arguments.output_binary,
        arguments.output_abi,
        arguments.pretty_json,
    )?;

    Ok(if has_errors {
        solc_cli::exit_code::FAILURE
    } else {
        solc_cli::exit_code::SUCCESS
    })
}
