//! Resolve command implementation.

use crate::cli::ResolveArgs;
use crate::error::Result;
use crate::output::Formatter;
use crate::session::Session;

/// Execute the resolve command.
pub fn execute_resolve(args: ResolveArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let from = session.member(&args.from)?;
    let to = session.member(&args.to)?;
    let label = relationship(session, &args.from, &args.to)?;

    println!("{}", formatter.relationship(from, to, &label)?);
    Ok(())
}

/// Relationship phrase for two member keys (ids or login identities).
pub fn relationship(session: &Session, from: &str, to: &str) -> Result<String> {
    let from = session.member(from)?;
    let to = session.member(to)?;
    let kinship = session.resolver()?.classify(from.id.as_str(), to.id.as_str())?;
    Ok(kinship.label())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::CliError;

    fn session() -> Session {
        Session::open(None, &Config::default()).unwrap()
    }

    #[test]
    fn test_relationship_by_id() {
        let session = session();
        assert_eq!(relationship(&session, "8", "9").unwrap(), "brother");
        assert_eq!(relationship(&session, "1", "16").unwrap(), "great-grandson");
    }

    #[test]
    fn test_relationship_by_identity() {
        let session = session();
        assert_eq!(relationship(&session, "rohan_k", "9").unwrap(), "uncle");
        assert_eq!(relationship(&session, "rohan_k", "rohan_k").unwrap(), "self");
    }

    #[test]
    fn test_unknown_member() {
        let session = session();
        assert!(matches!(
            relationship(&session, "16", "ghost"),
            Err(CliError::UnknownMember(_))
        ));
    }
}
