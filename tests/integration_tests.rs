// Integration tests for degreefit
//
// Exercise the library end to end the way the `score` and `questions`
// commands do: catalog → response (built or loaded from disk) → ranking →
// report text.

use std::io::Write;

use degreefit::catalog::programs_for;
use degreefit::report::{format_questions, format_recommendations, recommendation_line, to_json};
use degreefit::{
    questions_for, recommend, Program, RecommenderError, Response, StudentStatus,
    QUESTIONS_PER_PROGRAM,
};
use tempfile::NamedTempFile;

/// Response answering every statement of `status` with `score_for(program)`
fn uniform_response(status: StudentStatus, score_for: impl Fn(Program) -> u8) -> Response {
    let mut response = Response::new();
    for item in questions_for(status) {
        response.record(item.program, item.question, score_for(item.program));
    }
    response
}

fn write_temp(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Should create temp file");
    file.write_all(contents.as_bytes()).expect("Should write temp file");
    file
}

#[test]
fn test_catalog_sizes_per_status() {
    let undergrad = questions_for(StudentStatus::Undergraduate);
    let grad = questions_for(StudentStatus::Graduate);
    assert_eq!(undergrad.len(), 7 * QUESTIONS_PER_PROGRAM);
    assert_eq!(grad.len(), 3 * QUESTIONS_PER_PROGRAM);
    assert!(grad.iter().all(|i| i.program.as_ref().contains("Master of Science")));
    assert!(undergrad.iter().all(|i| !i.program.as_ref().contains("Master of Science")));
}

#[test]
fn test_invalid_status_text() {
    assert!("PhD".parse::<StudentStatus>().is_err());
    assert!(matches!(
        StudentStatus::parse("PhD"),
        Err(RecommenderError::InvalidStatus(s)) if s == "PhD"
    ));
}

#[test]
fn test_graduate_example_ranking() {
    let response = uniform_response(StudentStatus::Graduate, |p| match p {
        Program::MsDataAnalytics => 5,
        Program::MsCybersecurity => 3,
        _ => 1,
    });
    let ranked = recommend(&response, StudentStatus::Graduate).unwrap();

    let lines: Vec<String> = ranked
        .iter()
        .enumerate()
        .map(|(i, r)| recommendation_line(i + 1, r))
        .collect();
    assert_eq!(
        lines,
        vec![
            "1. Master of Science, Data Analytics - 100% fit",
            "2. Master of Science, Cybersecurity and Information Assurance - 50% fit",
            "3. Master of Science, Information Technology Management - 0% fit",
        ]
    );
}

#[test]
fn test_mixed_tiers_are_filtered() {
    let mut response = uniform_response(StudentStatus::Undergraduate, |_| 4);
    for item in questions_for(StudentStatus::Graduate) {
        response.record(item.program, item.question, 5);
    }

    let ranked = recommend(&response, StudentStatus::Undergraduate).unwrap();
    assert_eq!(ranked.len(), 7);
    assert!(ranked.iter().all(|r| r.percentage_fit == 75));
    // All tied: catalog order
    let order: Vec<Program> = ranked.iter().map(|r| r.program).collect();
    assert_eq!(order, programs_for(StudentStatus::Undergraduate));
}

#[test]
fn test_response_file_round_trip() {
    let response = uniform_response(StudentStatus::Graduate, |_| 2);
    let file = write_temp(&response.to_json().unwrap());

    let loaded = Response::load_from_file(file.path()).unwrap();
    assert_eq!(loaded, response);
    loaded.check_complete(StudentStatus::Graduate).unwrap();

    let ranked = recommend(&loaded, StudentStatus::Graduate).unwrap();
    assert!(ranked.iter().all(|r| r.percentage_fit == 25));
}

#[test]
fn test_response_file_with_unanswered_statement() {
    let program = Program::MsCybersecurity;
    let questions = program.questions();
    let json = format!(
        r#"{{ "{}": {{ "{}": 4, "{}": 0 }} }}"#,
        program, questions[0], questions[1]
    );
    let file = write_temp(&json);
    let loaded = Response::load_from_file(file.path()).unwrap();

    let err = recommend(&loaded, StudentStatus::Graduate).unwrap_err();
    assert!(err.is_missing_answer());
    assert!(err.to_string().starts_with("Please select an answer."));

    let err = loaded.check_complete(StudentStatus::Graduate).unwrap_err();
    assert!(err.is_missing_answer());
}

#[test]
fn test_response_file_errors() {
    let file = write_temp(r#"{ "Bachelor of Arts, Music": { "q": 3 } }"#);
    assert!(matches!(
        Response::load_from_file(file.path()),
        Err(RecommenderError::UnknownProgram(_))
    ));

    let file = write_temp("not json");
    assert!(matches!(
        Response::load_from_file(file.path()),
        Err(RecommenderError::Json(_))
    ));

    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Response::load_from_file(&dir.path().join("missing.json")),
        Err(RecommenderError::Io(_))
    ));
}

#[test]
fn test_out_of_range_score_rejected() {
    let mut response = uniform_response(StudentStatus::Graduate, |_| 3);
    let program = Program::MsItManagement;
    response.record(program, program.questions()[2], 6);
    assert!(matches!(
        recommend(&response, StudentStatus::Graduate),
        Err(RecommenderError::InvalidScore { score: 6, .. })
    ));
}

#[test]
fn test_reports() {
    let items = questions_for(StudentStatus::Graduate);
    let text = format_questions(&items);
    assert_eq!(text.lines().count(), 3 + 15 + 2);
    assert!(text.starts_with("Master of Science, Cybersecurity"));

    let ranked = recommend(
        &uniform_response(StudentStatus::Graduate, |_| 5),
        StudentStatus::Graduate,
    )
    .unwrap();
    let text = format_recommendations(&ranked);
    assert!(text.contains("1. Master of Science, Cybersecurity and Information Assurance - 100% fit"));

    let json: serde_json::Value = serde_json::from_str(&to_json(&ranked).unwrap()).unwrap();
    assert_eq!(json[0]["percentage_fit"], 100);
    assert_eq!(json[0]["program"], "Master of Science, Cybersecurity and Information Assurance");
}
