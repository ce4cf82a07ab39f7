use crate::output::{print_json, print_table};
use fieldcheck_core::resolve_actor;

/// Resolve every token, print the outcome for each, and fail if any token
/// was rejected.
pub fn run(tokens: &[String], json: bool) -> anyhow::Result<()> {
    let results: Vec<_> = tokens.iter().map(|t| (t, resolve_actor(t))).collect();
    let failed = results.iter().filter(|(_, r)| r.is_err()).count();

    if json {
        let items: Vec<serde_json::Value> = results
            .iter()
            .map(|(input, r)| match r {
                Ok(actor) => serde_json::json!({
                    "input": input,
                    "type": actor.kind,
                    "id": actor.id,
                    "identifier": actor.identifier(),
                }),
                Err(e) => serde_json::json!({
                    "input": input,
                    "errors": [e.to_string()],
                }),
            })
            .collect();
        print_json(&items)?;
    } else {
        let rows: Vec<Vec<String>> = results
            .iter()
            .filter_map(|(input, r)| {
                r.as_ref().ok().map(|actor| {
                    vec![
                        input.to_string(),
                        actor.kind.to_string(),
                        actor.id.to_string(),
                    ]
                })
            })
            .collect();
        if !rows.is_empty() {
            print_table(&["INPUT", "TYPE", "ID"], &rows);
        }
        for (input, r) in &results {
            if let Err(e) = r {
                eprintln!("{input}: {e}");
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{failed} of {} actor token(s) could not be resolved", tokens.len());
    }
    Ok(())
}
