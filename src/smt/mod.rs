//!
//! The SMT-assisted compilation.
//!
//! The compiler may request the SMT-LIB2 queries of its model checker to be solved
//! externally. The answers are passed back as the auxiliary input of the next run.
//!

pub mod solver;


///
/// Returns the SMT-LIB2 queries requested by the compiler, keyed by their hashes.
///
pub fn queries(output: &serde_json::Value) -> Option<&serde_json::Map<String, serde_json::Value>> {
    output
        .get("auxiliaryInputRequested")
        .and_then(|auxiliary_input| auxiliary_input.get("smtlib2queries"))
        .and_then(serde_json::Value::as_object)
        .filter(|queries| !queries.is_empty())
}

///
/// Solves the queries requested in `output` and puts the answers into `input`.
///
/// All previously given answers are replaced. Returns `false` if nothing has been
/// requested and the input is left intact.
///
pub fn handle_queries<S>(
    input: &mut serde_json::Value,
    output: &serde_json::Value,
    mut solve: S,
) -> anyhow::Result<bool>
where
    S: FnMut(&str) -> anyhow::Result<String>,
{
    let queries = match queries(output) {
        Some(queries) => queries,
        None => return Ok(false),
    };

    let mut responses = serde_json::Map::with_capacity(queries.len());
    for (hash, query) in queries.iter() {
        let query = query
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("The SMT query `{}` is not a string", hash))?;
        responses.insert(hash.to_owned(), serde_json::Value::String(solve(query)?));
    }

    input
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("The compiler input is not a JSON object"))?
        .insert(
            "auxiliaryInput".to_owned(),
            serde_json::json!({ "smtlib2responses": responses }),
        );
    Ok(true)
}
