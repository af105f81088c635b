//! Lineage command implementation.

use crate::cli::LineageArgs;
use crate::error::Result;
use crate::output::{Formatter, LineageRow};
use crate::session::Session;

/// Execute the lineage command.
pub fn execute_lineage(args: LineageArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let subject = session.member(&args.member)?;
    let rows = collect_lineage(session, subject.id.as_str(), args.descendants)?;
    println!("{}", formatter.lineage(subject, &rows, args.descendants)?);
    Ok(())
}

/// Ancestors (or descendants) of `subject`, nearest generation first.
pub fn collect_lineage(session: &Session, subject: &str, descendants: bool) -> Result<Vec<LineageRow>> {
    let graph = session.graph();
    let resolver = session.resolver()?;
    let distances = if descendants {
        graph.descendants(subject)
    } else {
        graph.ancestors(subject)
    };

    let rows = distances
        .iter()
        .filter(|(_, generation)| *generation > 0)
        .filter_map(|(id, generation)| {
            let member = graph.get(id.as_str())?;
            Some(LineageRow {
                id: id.to_string(),
                name: member.name.clone(),
                generation,
                relationship: resolver.resolve(subject, id.as_str()),
            })
        })
        .collect();
    Ok(rows)
}
