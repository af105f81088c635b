//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use kinship_domain::Member;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// One line of `relatives` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelativeRow {
    /// Member id
    pub id: String,
    /// Display name
    pub name: String,
    /// Relationship phrase from the subject's point of view
    pub relationship: String,
}

/// One line of `lineage` output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineageRow {
    /// Member id
    pub id: String,
    /// Display name
    pub name: String,
    /// Generations away from the subject
    pub generation: u32,
    /// Relationship phrase from the subject's point of view
    pub relationship: String,
}

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format the relationship of `to` as seen by `from`.
    pub fn relationship(&self, from: &Member, to: &Member, label: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "from": { "id": from.id.as_str(), "name": from.name },
                "to": { "id": to.id.as_str(), "name": to.name },
                "relationship": label,
            }))?),
            OutputFormat::Quiet => Ok(label.to_string()),
            OutputFormat::Table => Ok(format!(
                "{} is {}'s {}",
                self.colorize(&to.name, "cyan"),
                from.name,
                self.colorize(label, "green")
            )),
        }
    }

    /// Format a viewer phrase for a member card.
    pub fn viewer(&self, member: &Member, identity: &str, phrase: &str) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&serde_json::json!({
                "member": { "id": member.id.as_str(), "name": member.name },
                "viewer": identity,
                "label": phrase,
            }))?),
            OutputFormat::Quiet => Ok(phrase.to_string()),
            OutputFormat::Table => Ok(format!(
                "{} ({})",
                self.colorize(&member.name, "cyan"),
                self.colorize(phrase, "green")
            )),
        }
    }

    /// Format the relatives of a member.
    pub fn relatives(&self, subject: &Member, rows: &[RelativeRow]) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
            OutputFormat::Quiet => Ok(rows
                .iter()
                .map(|r| format!("{}\t{}", r.id, r.relationship))
                .collect::<Vec<_>>()
                .join("\n")),
            OutputFormat::Table => {
                if rows.is_empty() {
                    return Ok(self.colorize(&format!("{} has no relatives.", subject.name), "yellow"));
                }

                let mut builder = Builder::default();
                builder.push_record(["ID", "Name", "Relationship"]);
                for row in rows {
                    builder.push_record([row.id.as_str(), row.name.as_str(), row.relationship.as_str()]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format a lineage listing.
    pub fn lineage(&self, subject: &Member, rows: &[LineageRow], descendants: bool) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
            OutputFormat::Quiet => Ok(rows.iter().map(|r| r.id.clone()).collect::<Vec<_>>().join("\n")),
            OutputFormat::Table => {
                if rows.is_empty() {
                    let what = if descendants { "descendants" } else { "ancestors" };
                    return Ok(self.colorize(
                        &format!("No {} recorded for {}.", what, subject.name),
                        "yellow",
                    ));
                }

                let mut builder = Builder::default();
                builder.push_record(["Generation", "ID", "Name", "Relationship"]);
                for row in rows {
                    let generation = row.generation.to_string();
                    builder.push_record([
                        generation.as_str(),
                        row.id.as_str(),
                        row.name.as_str(),
                        row.relationship.as_str(),
                    ]);
                }
                Ok(self.render(builder))
            }
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    fn render(&self, builder: Builder) -> String {
        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));
        table.to_string()
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinship_domain::Gender;

    fn members() -> (Member, Member) {
        (
            Member::new("16", "Rohan Kumar", Gender::Male),
            Member::new("9", "Kiran Kumar", Gender::Male),
        )
    }

    fn rows() -> Vec<RelativeRow> {
        vec![RelativeRow {
            id: "9".to_string(),
            name: "Kiran Kumar".to_string(),
            relationship: "uncle".to_string(),
        }]
    }

    #[test]
    fn test_relationship_table() {
        let (from, to) = members();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.relationship(&from, &to, "uncle").unwrap();
        assert_eq!(output, "Kiran Kumar is Rohan Kumar's uncle");
    }

    #[test]
    fn test_relationship_json() {
        let (from, to) = members();
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.relationship(&from, &to, "uncle").unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["relationship"], "uncle");
        assert_eq!(value["to"]["id"], "9");
    }

    #[test]
    fn test_quiet_format() {
        let (from, to) = members();
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        assert_eq!(formatter.relationship(&from, &to, "uncle").unwrap(), "uncle");
        assert_eq!(formatter.relatives(&from, &rows()).unwrap(), "9\tuncle");
    }

    #[test]
    fn test_relatives_table() {
        let (from, _) = members();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.relatives(&from, &rows()).unwrap();
        assert!(output.contains("Relationship"));
        assert!(output.contains("Kiran Kumar"));
    }

    #[test]
    fn test_empty_lineage() {
        let (from, _) = members();
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.lineage(&from, &[], false).unwrap();
        assert!(output.contains("No ancestors recorded"));
    }

    #[test]
    fn test_viewer_json() {
        let (_, to) = members();
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.viewer(&to, "rohan_k", "your uncle").unwrap();
        assert!(output.contains("your uncle"));
        assert!(output.contains("rohan_k"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
