//!
//! The Solidity project build.
//!

pub mod contract;


use std::path::Path;

use crate::solc::standard_json::output::Output as StandardJsonOutput;

use self::contract::Contract;

///
/// The Solidity project build.
///
#[derive(Debug, Default, Clone)]
pub struct Build {
    /// The contract data in the output order.
    pub contracts: Vec<Contract>,
}

impl Build {
    ///
    /// Writes all contracts to the specified directory, creating it if necessary.
    ///
    pub fn write_to_directory(
        &self,
        output_directory: &Path,
        output_binary: bool,
        output_abi: bool,
        pretty: bool,
    ) -> anyhow::Result<()> {
        std::fs::create_dir_all(output_directory).map_err(|error| {
            anyhow::anyhow!(
                "Output directory {:?} creating error: {}",
                output_directory,
                error
            )
        })?;

        for contract in self.contracts.iter() {
            contract.write_to_directory(output_directory, output_binary, output_abi, pretty)?;
        }

        Ok(())
    }
}

impl From<StandardJsonOutput> for Build {
    fn from(output: StandardJsonOutput) -> Self {
        let contracts = output
            .contracts
            .unwrap_or_default()
            .into_iter()
            .flat_map(|(path, contracts)| {
                contracts.into_iter().map(move |(name, contract)| {
                    let bytecode = contract.bytecode().map(str::to_owned);
                    Contract::new(path.clone(), name, contract.abi, bytecode)
                })
            })
            .collect();

        Self { contracts }
    }
}
