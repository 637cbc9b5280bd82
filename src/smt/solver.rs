//!
//! The SMT solver executable.
//!

use std::io::Write;

///
/// The SMT solver executable.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solver {
    /// The solver name.
    pub name: String,
    /// The binary executable name.
    pub executable: String,
    /// The command line parameters making the solver read the SMT-LIB2 query from stdin.
    pub parameters: Vec<String>,
}

impl Solver {
    /// The query timeout in milliseconds, enforced by the solvers themselves.
    pub const TIMEOUT_MILLIS: usize = 10_000;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: &str, executable: &str, parameters: &[&str]) -> Self {
        Self {
            name: name.to_owned(),
            executable: executable.to_owned(),
            parameters: parameters
                .iter()
                .map(|parameter| (*parameter).to_owned())
                .collect(),
        }
    }

    ///
    /// Returns the supported solvers in the order of preference.
    ///
    pub fn supported() -> Vec<Self> {
        let z3_timeout = format!("-t:{}", Self::TIMEOUT_MILLIS);
        let cvc4_timeout = format!("--tlimit={}", Self::TIMEOUT_MILLIS);

        vec![
            Self::new(
                "z3",
                "z3",
                &[
                    "-smt2",
                    "-in",
                    z3_timeout.as_str(),
                    "rlimit=20000000",
                    "rewriter.pull_cheap_ite=true",
                    "fp.spacer.q3.use_qgen=true",
                    "fp.spacer.mbqi=false",
                    "fp.spacer.ground_pobs=false",
                ],
            ),
            Self::new("cvc4", "cvc4", &["--lang=smt2", cvc4_timeout.as_str()]),
        ]
    }

    ///
    /// Returns the supported solvers found in `$PATH`.
    ///
    pub fn available() -> Vec<Self> {
        Self::supported()
            .into_iter()
            .filter(Self::is_available)
            .collect()
    }

    ///
    /// Checks whether the executable can be found in `$PATH` and can be executed.
    ///
    pub fn is_available(&self) -> bool {
        which::which(self.executable.as_str()).is_ok()
    }

    ///
    /// Solves the SMT-LIB2 query, returning the solver output.
    ///
    /// A non-zero exit status is tolerated as long as the output is an answer, since
    /// some solvers fail when asked for a model of an unsatisfiable formula.
    ///
    pub fn solve(&self, query: &str) -> anyhow::Result<String> {
        let mut command = std::process::Command::new(self.executable.as_str());
        command.args(self.parameters.iter());
        command.stdin(std::process::Stdio::piped());
        command.stdout(std::process::Stdio::piped());
        command.stderr(std::process::Stdio::piped());

        let process = command.spawn().map_err(|error| {
            anyhow::anyhow!("{} subprocess spawning error: {:?}", self.name, error)
        })?;
        process
            .stdin
            .as_ref()
            .ok_or_else(|| anyhow::anyhow!("{} stdin getting error", self.name))?
            .write_all(query.as_bytes())
            .map_err(|error| anyhow::anyhow!("{} stdin writing error: {:?}", self.name, error))?;
        let output = process.wait_with_output().map_err(|error| {
            anyhow::anyhow!("{} subprocess output error: {:?}", self.name, error)
        })?;

        let stdout = String::from_utf8_lossy(output.stdout.as_slice()).to_string();
        if output.status.success() || Self::is_answer(stdout.as_str()) {
            return Ok(stdout);
        }

        anyhow::bail!(
            "Failed to solve SMT query. {} exited with {}: {}",
            self.name,
            output.status,
            String::from_utf8_lossy(output.stderr.as_slice()).trim()
        );
    }

    ///
    /// Whether the solver output starts with an answer or a solver-reported error.
    ///
    fn is_answer(output: &str) -> bool {
        ["sat", "unsat", "unknown", "(error", "error"]
            .iter()
            .any(|prefix| output.starts_with(prefix))
    }
}
