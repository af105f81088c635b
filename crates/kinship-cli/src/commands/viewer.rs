//! Viewer command implementation.

use crate::cli::ViewerArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use crate::session::Session;
use kinship_resolver::describe_for_viewer;

/// Execute the viewer command.
pub fn execute_viewer(args: ViewerArgs, session: &Session, formatter: &Formatter) -> Result<()> {
    let identity = args
        .identity
        .as_deref()
        .or(session.viewer())
        .ok_or_else(|| {
            CliError::InvalidInput("No viewer identity: pass --as or set one on the profile".to_string())
        })?;

    let member = session.member(&args.member)?;
    let phrase = viewer_label(session, member.id.as_str(), identity)?;
    println!("{}", formatter.viewer(member, identity, &phrase)?);
    Ok(())
}

/// Viewer phrase for `member_id` as seen by the member signed in as `identity`.
pub fn viewer_label(session: &Session, member_id: &str, identity: &str) -> Result<String> {
    if session.graph().find_by_identity(identity).is_none() {
        return Err(CliError::UnknownMember(format!("no member signed in as '{}'", identity)));
    }
    let resolver = session.resolver()?;
    Ok(describe_for_viewer(&resolver, member_id, Some(identity), session.graph()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_viewer_labels() {
        let session = Session::open(None, &Config::default()).unwrap();
        assert_eq!(viewer_label(&session, "9", "rohan_k").unwrap(), "your uncle");
        assert_eq!(viewer_label(&session, "16", "rohan_k").unwrap(), "you");
        assert_eq!(viewer_label(&session, "17", "rohan_k").unwrap(), "your sister");
    }

    #[test]
    fn test_unknown_identity() {
        let session = Session::open(None, &Config::default()).unwrap();
        assert!(viewer_label(&session, "9", "nobody").is_err());
    }
}
