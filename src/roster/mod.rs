mod parser;

use crate::capability::domain::{SkillEntry, TeamMember};
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum RosterImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for RosterImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterImportError::Io(err) => write!(f, "failed to read roster export: {}", err),
            RosterImportError::Csv(err) => write!(f, "invalid roster CSV data: {}", err),
        }
    }
}

impl std::error::Error for RosterImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RosterImportError::Io(err) => Some(err),
            RosterImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RosterImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for RosterImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Builds `TeamMember` records from a skill-assessment CSV export, one row
/// per (member, skill). Members keep first-seen order; the last row wins
/// when a member lists the same skill twice.
pub struct RosterImporter;

impl RosterImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<TeamMember>, RosterImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<TeamMember>, RosterImportError> {
        let mut team: Vec<TeamMember> = Vec::new();

        for record in parser::parse_records(reader)? {
            let index = match team.iter().position(|member| member.id == record.member_id) {
                Some(index) => index,
                None => {
                    team.push(TeamMember {
                        id: record.member_id.clone(),
                        name: record.member_name.clone(),
                        role: record.role.clone(),
                        skills: Vec::new(),
                    });
                    team.len() - 1
                }
            };
            let member = &mut team[index];

            let entry = SkillEntry::new(record.skill_name, record.level, record.interest);

            match member
                .skills
                .iter_mut()
                .find(|existing| existing.skill_name == entry.skill_name)
            {
                Some(existing) => *existing = entry,
                None => member.skills.push(entry),
            }
        }

        Ok(team)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "Member ID,Member Name,Role,Skill,Level,Interest\n";

    #[test]
    fn groups_rows_into_members_preserving_first_seen_order() {
        let csv = format!(
            "{HEADER}m1,Alice,Senior,Tax Planning,4,5\nm2,Bob,Director,VAT,3,2\nm1,Alice,Senior,VAT,2,1\n"
        );
        let team = RosterImporter::from_reader(Cursor::new(csv)).expect("roster imports");

        assert_eq!(team.len(), 2);
        assert_eq!(team[0].name, "Alice");
        assert_eq!(team[0].skills.len(), 2);
        assert_eq!(team[1].name, "Bob");
        assert_eq!(team[1].role, "Director");
    }

    #[test]
    fn duplicate_skill_rows_take_the_last_value() {
        let csv = format!("{HEADER}m1,Alice,Senior,Tax Planning,2,1\nm1,Alice,Senior,Tax Planning,4,3\n");
        let team = RosterImporter::from_reader(Cursor::new(csv)).expect("roster imports");

        assert_eq!(team[0].skills.len(), 1);
        assert_eq!(team[0].skills[0].level, 4);
        assert_eq!(team[0].skills[0].interest, 3);
    }

    #[test]
    fn out_of_range_levels_are_clamped_on_import() {
        let csv = format!("{HEADER}m1,Alice,Senior,Tax Planning,9,8\n");
        let team = RosterImporter::from_reader(Cursor::new(csv)).expect("roster imports");

        assert_eq!(team[0].skills[0].level, 5);
        assert_eq!(team[0].skills[0].interest, 5);
    }

    #[test]
    fn export_missing_the_skill_column_surfaces_an_error() {
        let csv = "Member ID,Member Name\nm1,Alice\n";
        let err = RosterImporter::from_reader(Cursor::new(csv)).expect_err("invalid csv rejected");
        assert!(matches!(err, RosterImportError::Csv(_)));
    }
}
