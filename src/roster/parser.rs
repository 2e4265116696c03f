use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct RosterRecord {
    pub(crate) member_id: String,
    pub(crate) member_name: String,
    pub(crate) role: String,
    pub(crate) skill_name: String,
    pub(crate) level: u8,
    pub(crate) interest: u8,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<RosterRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<RosterRow>() {
        let row = record?;
        if row.member_id.is_empty() || row.skill.is_empty() {
            continue;
        }

        records.push(RosterRecord {
            member_id: row.member_id,
            member_name: row.member_name,
            role: row.role.unwrap_or_default(),
            skill_name: row.skill,
            level: row.level.unwrap_or(0),
            interest: row.interest.unwrap_or(0),
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct RosterRow {
    #[serde(rename = "Member ID")]
    member_id: String,
    #[serde(rename = "Member Name")]
    member_name: String,
    #[serde(rename = "Role", default, deserialize_with = "empty_string_as_none")]
    role: Option<String>,
    #[serde(rename = "Skill")]
    skill: String,
    #[serde(rename = "Level", default, deserialize_with = "lenient_level")]
    level: Option<u8>,
    #[serde(rename = "Interest", default, deserialize_with = "lenient_level")]
    interest: Option<u8>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Assessment exports occasionally carry blanks or stray text in the level
/// columns; both read as an unassessed zero rather than failing the import.
fn lenient_level<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.and_then(|value| value.trim().parse::<u8>().ok()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "Member ID,Member Name,Role,Skill,Level,Interest\n";

    #[test]
    fn parses_well_formed_rows() {
        let csv = format!("{HEADER}m1,Alice,Senior,Tax Planning,4,5\n");
        let records = parse_records(Cursor::new(csv)).expect("rows parse");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].member_name, "Alice");
        assert_eq!(records[0].level, 4);
        assert_eq!(records[0].interest, 5);
    }

    #[test]
    fn blank_levels_read_as_zero() {
        let csv = format!("{HEADER}m1,Alice,Senior,Tax Planning,,\n");
        let records = parse_records(Cursor::new(csv)).expect("rows parse");
        assert_eq!(records[0].level, 0);
        assert_eq!(records[0].interest, 0);
    }

    #[test]
    fn non_numeric_levels_read_as_zero() {
        let csv = format!("{HEADER}m1,Alice,Senior,Tax Planning,n/a,high\n");
        let records = parse_records(Cursor::new(csv)).expect("rows parse");
        assert_eq!(records[0].level, 0);
        assert_eq!(records[0].interest, 0);
    }

    #[test]
    fn skips_rows_missing_identity_or_skill() {
        let csv = format!("{HEADER},Alice,Senior,Tax Planning,4,2\nm2,Bob,Senior,,3,1\n");
        let records = parse_records(Cursor::new(csv)).expect("rows parse");
        assert!(records.is_empty());
    }
}
