use practice_ai::capability::{CapabilityEngine, Readiness, ServiceCatalogue};
use practice_ai::roster::{RosterImporter, RosterImportError};
use std::io::Cursor;

const HEADER: &str = "Member ID,Member Name,Role,Skill,Level,Interest\n";

#[test]
fn imported_roster_feeds_the_engine_end_to_end() {
    let critical_skills = [
        "Tax Planning",
        "Corporate Tax",
        "Personal Tax",
        "Dividend & Remuneration Planning",
        "NICs & Payroll Tax",
        "Client Communication",
        "Tax Legislation & Compliance",
    ];

    let mut csv = String::from(HEADER);
    for skill in critical_skills {
        csv.push_str(&format!("m1,Alice,Director,{skill},5,4\n"));
        csv.push_str(&format!("m2,Bob,Senior,{skill},4,2\n"));
    }
    // Only Alice covers the two nice-to-have requirements.
    csv.push_str("m1,Alice,Director,Pension Planning,3,1\n");
    csv.push_str("m1,Alice,Director,Commercial Awareness,4,2\n");

    let team = RosterImporter::from_reader(Cursor::new(csv)).expect("roster imports");
    assert_eq!(team.len(), 2);

    let catalogue = ServiceCatalogue::standard();
    let rows = CapabilityEngine::default().service_readiness(&catalogue, &team);
    let profit_extraction = rows
        .iter()
        .find(|row| row.service.id == "profit-extraction")
        .expect("profit extraction row present");

    assert_eq!(profit_extraction.readiness, Readiness::Ready);
    assert_eq!(profit_extraction.capable_members, vec!["Alice"]);
    assert_eq!(profit_extraction.partial_capable_members, vec!["Bob"]);
    assert!(profit_extraction.gaps.is_empty());
}

#[test]
fn roster_rows_for_the_same_member_merge() {
    let csv = format!(
        "{HEADER}m1,Alice,Senior,Tax Planning,4,5\nm1,Alice,Senior,VAT,3,1\nm1,Alice,Senior,Tax Planning,5,5\n"
    );
    let team = RosterImporter::from_reader(Cursor::new(csv)).expect("roster imports");

    assert_eq!(team.len(), 1);
    assert_eq!(team[0].skills.len(), 2);
    assert_eq!(team[0].level_for("Tax Planning"), 5);
    assert_eq!(team[0].level_for("VAT"), 3);
}

#[test]
fn missing_file_surfaces_io_error() {
    let err = RosterImporter::from_path("/nonexistent/roster.csv").expect_err("missing file");
    assert!(matches!(err, RosterImportError::Io(_)));
}
