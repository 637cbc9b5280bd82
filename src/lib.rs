//!
//! The Solidity compiler command-line front end library.
//!

pub mod build;
pub mod import;
pub mod json;
pub mod smt;
pub mod solc;


pub use self::build::Build;
pub use self::import::result::ImportResult;
pub use self::import::ImportCallback;
pub use self::import::SearchPath;
pub use self::smt::solver::Solver as SmtSolver;
pub use self::solc::standard_json::input::Input as StandardJsonInput;
pub use self::solc::standard_json::output::error::Error as SolidityError;
pub use self::solc::standard_json::output::Output as StandardJsonOutput;
pub use self::solc::Compiler as SolcCompiler;
pub use self::solc::StandardJsonCompiler;

use std::path::PathBuf;

///
/// The process exit codes.
///
pub mod exit_code {
    /// The successful compilation, possibly with warnings.
    pub const SUCCESS: i32 = 0;
    /// A configuration, input or compilation error.
    pub const FAILURE: i32 = 1;
}

///
/// Compiles the source files given on the command line.
///
/// The sources are keyed by their canonical names, and the imports are resolved
/// through `search_path`.
///
pub fn compile_paths<C>(
    compiler: &C,
    paths: &[PathBuf],
    search_path: &SearchPath,
    optimize: bool,
    optimize_runs: usize,
    pretty: bool,
    verbose: bool,
) -> anyhow::Result<StandardJsonOutput>
where
    C: StandardJsonCompiler + ?Sized,
{
    let input = StandardJsonInput::try_from_paths(paths, search_path, optimize, optimize_runs)?;
    if verbose {
        println!(">>> Compiling:\n{}\n", json::to_string(&input, pretty)?);
    }

    let output = compiler.standard_json(
        serde_json::to_string(&input)?.as_str(),
        Some(search_path),
    )?;
    if output.trim().is_empty() {
        anyhow::bail!("No output from compiler");
    }

    serde_json::from_str(output.as_str())
        .map_err(|error| anyhow::anyhow!("Compiler output parsing error: {}", error))
}

///
/// Compiles the `--standard-json` input text, returning the output text.
///
/// If the compiler requests SMT queries to be solved and a solver is available, the
/// compilation is repeated with the answers. A failure on that path does not abort
/// the compilation and is reported as a warning in the output instead.
///
pub fn standard_json<C>(
    compiler: &C,
    input: &str,
    import_callback: Option<&dyn ImportCallback>,
    solvers: &[SmtSolver],
    pretty: bool,
    verbose: bool,
) -> anyhow::Result<String>
where
    C: StandardJsonCompiler + ?Sized,
{
    if verbose {
        println!(">>> Compiling:\n{}\n", json::reformat(input, pretty));
    }

    let output = compiler.standard_json(input, import_callback)?;
    let output = match retry_with_smt(
        compiler,
        input,
        output.as_str(),
        import_callback,
        solvers,
        pretty,
        verbose,
    ) {
        Ok(Some(output)) => output,
        Ok(None) => output,
        Err(error) => push_warning(output.as_str(), error.to_string())?,
    };

    Ok(json::reformat(output.as_str(), pretty))
}

///
/// Repeats the compilation with the answers to the SMT queries requested in `output`.
///
/// Returns `None` if nothing has been requested or there are no solvers.
///
fn retry_with_smt<C>(
    compiler: &C,
    input: &str,
    output: &str,
    import_callback: Option<&dyn ImportCallback>,
    solvers: &[SmtSolver],
    pretty: bool,
    verbose: bool,
) -> anyhow::Result<Option<String>>
where
    C: StandardJsonCompiler + ?Sized,
{
    let output: serde_json::Value = serde_json::from_str(output)?;
    if smt::queries(&output).is_none() {
        return Ok(None);
    }

    let solver = match solvers.first() {
        Some(solver) => solver,
        None => {
            if verbose {
                eprintln!(
                    ">>> Cannot retry compilation with SMT because there are no SMT solvers available."
                );
            }
            return Ok(None);
        }
    };

    let mut input: serde_json::Value = serde_json::from_str(input)?;
    if !smt::handle_queries(&mut input, &output, |query| solver.solve(query))? {
        return Ok(None);
    }
    if verbose {
        println!(
            ">>> Retrying compilation with SMT:\n{}\n",
            json::to_string(&input, pretty)?
        );
    }

    compiler
        .standard_json(serde_json::to_string(&input)?.as_str(), import_callback)
        .map(Some)
}

///
/// Appends the general warning to the `--standard-json` output text.
///
/// The rest of the output is kept intact.
///
fn push_warning(output: &str, message: String) -> anyhow::Result<String> {
    let mut output: serde_json::Value = serde_json::from_str(output)
        .map_err(|error| anyhow::anyhow!("Compiler output parsing error: {}", error))?;
    let warning = serde_json::to_value(SolidityError::warning(message))?;

    match output
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("The compiler output is not a JSON object"))?
        .entry("errors")
        .or_insert_with(|| serde_json::Value::Array(Vec::new()))
    {
        serde_json::Value::Array(errors) => errors.push(warning),
        errors => *errors = serde_json::Value::Array(vec![warning]),
    }

    Ok(serde_json::to_string(&output)?)
}
