//! Relatives command implementation.

use crate::cli::RelativesArgs;
use crate::error::Result;
use crate::output::{Formatter, RelativeRow};
use crate::session::Session;
use tracing::debug;

/// Execute the relatives command.
pub fn execute_relatives(args: RelativesArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let subject = session.member(&args.member)?;
    let rows = collect_relatives(session, subject.id.as_str())?;
    println!("{}", formatter.relatives(subject, &rows)?);
    Ok(())
}

/// Every other member in dataset order, with the subject's phrase for them.
pub fn collect_relatives(session: &Session, subject: &str) -> Result<Vec<RelativeRow>> {
    let resolver = session.resolver()?;
    let rows: Vec<RelativeRow> = session
        .graph()
        .members()
        .filter(|m| m.id.as_str() != subject)
        .map(|m| RelativeRow {
            id: m.id.to_string(),
            name: m.name.clone(),
            relationship: resolver.resolve(subject, m.id.as_str()),
        })
        .collect();

    debug!(subject, count = rows.len(), "collected relatives");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_relatives_of_rohan() {
        let session = Session::open(None, &Config::default()).unwrap();
        let rows = collect_relatives(&session, "16").unwrap();
        assert_eq!(rows.len(), 21);
        assert!(rows.iter().all(|r| r.id != "16"));

        let find = |id: &str| rows.iter().find(|r| r.id == id).unwrap().relationship.clone();
        assert_eq!(find("8"), "father");
        assert_eq!(find("17"), "sister");
        assert_eq!(find("9"), "uncle");
        assert_eq!(find("20"), "2nd cousin");
    }
}
