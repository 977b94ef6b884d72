// Unit tests for the ScholarMatch client

use chrono::NaiveDate;
use scholarmatch_client::core::validate::{
    login_input, looks_like_email, profile_input, register_input,
};
use scholarmatch_client::models::{FeedbackRating, MatchSummary, ProfileInput, ScholarshipMatch};
use scholarmatch_client::ui::render::{days_remaining, format_amount, results_lines};
use scholarmatch_client::{FlowError, MessageKind};

fn create_test_profile() -> ProfileInput {
    ProfileInput {
        age: 20,
        country: "USA".to_string(),
        education_level: "Undergraduate".to_string(),
        gpa: 3.5,
        field_of_study: "Computer Science".to_string(),
        financial_need: "High".to_string(),
    }
}

fn create_test_match(id: i64, amount: i64) -> ScholarshipMatch {
    ScholarshipMatch {
        id,
        name: format!("Scholarship {}", id),
        amount,
        confidence: 80,
        description: "Merit-based award".to_string(),
        deadline: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
        apply_url: format!("https://example.com/apply/{}", id),
    }
}

#[test]
fn test_login_validation_requires_both_fields() {
    assert!(login_input("ann@university.edu", "secret1").is_ok());

    let err = login_input("", "secret1").unwrap_err();
    assert_eq!(err.to_string(), "Please fill in all fields");
    assert_eq!(err.kind(), MessageKind::Validation);

    let err = login_input("ann@university.edu", "").unwrap_err();
    assert_eq!(err.to_string(), "Please fill in all fields");
}

#[test]
fn test_register_validation_order() {
    // Missing fields win over the password-length rule
    let err = register_input("", "ann@university.edu", "123").unwrap_err();
    assert_eq!(err.to_string(), "Please fill in all fields");

    let err = register_input("Ann", "ann@university.edu", "12345").unwrap_err();
    assert_eq!(err.to_string(), "Password must be at least 6 characters long");

    assert!(register_input("Ann", "ann@university.edu", "123456").is_ok());
}

#[test]
fn test_profile_validation_age_bounds() {
    let mut profile = create_test_profile();

    profile.age = 16;
    assert!(profile_input(&profile).is_ok());
    profile.age = 65;
    assert!(profile_input(&profile).is_ok());

    profile.age = 15;
    let err = profile_input(&profile).unwrap_err();
    assert_eq!(err.to_string(), "Please enter a valid age between 16 and 65");

    profile.age = 66;
    assert!(profile_input(&profile).is_err());
}

#[test]
fn test_profile_validation_gpa_bounds() {
    let mut profile = create_test_profile();

    profile.gpa = 0.0;
    assert!(profile_input(&profile).is_ok());
    profile.gpa = 4.0;
    assert!(profile_input(&profile).is_ok());

    profile.gpa = 4.1;
    let err = profile_input(&profile).unwrap_err();
    assert_eq!(err.to_string(), "Please enter a valid GPA between 0.0 and 4.0");

    profile.gpa = -0.5;
    assert!(profile_input(&profile).is_err());
}

#[test]
fn test_profile_validation_reports_age_before_gpa() {
    let mut profile = create_test_profile();
    profile.age = 99;
    profile.gpa = 99.0;

    let err = profile_input(&profile).unwrap_err();
    assert_eq!(err.to_string(), "Please enter a valid age between 16 and 65");
}

#[test]
fn test_email_shape_is_advisory_only() {
    assert!(looks_like_email("student@university.edu"));
    assert!(!looks_like_email("not-an-email"));

    // A wrong-shaped email still passes submission validation
    assert!(login_input("not-an-email", "secret1").is_ok());
}

#[test]
fn test_scholarship_parses_backend_json() {
    // Shape the backend returns, including fields this client ignores
    let json = r#"{
        "id": 1,
        "name": "Global Excellence Scholarship",
        "amount": 5000,
        "confidence": 87,
        "description": "Merit-based award for STEM students",
        "deadline": "2026-06-15",
        "apply_url": "https://example.com/apply/global",
        "country": "USA",
        "min_gpa": 3.0,
        "financial_criteria": "any"
    }"#;

    let scholarship: ScholarshipMatch = serde_json::from_str(json).unwrap();
    assert_eq!(scholarship.id, 1);
    assert_eq!(scholarship.amount, 5000);
    assert_eq!(scholarship.confidence, 87);
    assert_eq!(
        scholarship.deadline,
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    );
}

#[test]
fn test_scholarship_description_defaults_to_empty() {
    let json = r#"{
        "id": 2,
        "name": "Local Grant",
        "amount": 1000,
        "confidence": 45,
        "deadline": "2026-03-01",
        "apply_url": "https://example.com/apply/local"
    }"#;

    let scholarship: ScholarshipMatch = serde_json::from_str(json).unwrap();
    assert_eq!(scholarship.description, "");
}

#[test]
fn test_match_summary_totals() {
    let matches = vec![create_test_match(1, 5000), create_test_match(2, 15000)];
    let summary = MatchSummary::of(&matches);

    assert_eq!(summary.count, 2);
    assert_eq!(summary.total_value, 20000);

    let empty = MatchSummary::of(&[]);
    assert_eq!(empty.count, 0);
    assert_eq!(empty.total_value, 0);
}

#[test]
fn test_feedback_rating_signals() {
    assert_eq!(FeedbackRating::Positive.as_signal(), 1);
    assert_eq!(FeedbackRating::Negative.as_signal(), 0);
}

#[test]
fn test_amount_formatting() {
    assert_eq!(format_amount(750), "$750");
    assert_eq!(format_amount(5000), "$5,000");
    assert_eq!(format_amount(1250000), "$1,250,000");
}

#[test]
fn test_days_remaining_only_counts_future_deadlines() {
    let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();

    let future = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
    assert_eq!(days_remaining(future, today), Some(29));

    let past = NaiveDate::from_ymd_opt(2026, 5, 1).unwrap();
    assert_eq!(days_remaining(past, today), None);
}

#[test]
fn test_results_render_header_and_cards() {
    let today = NaiveDate::from_ymd_opt(2026, 6, 1).unwrap();
    let matches = vec![create_test_match(1, 5000), create_test_match(2, 15000)];

    let lines = results_lines(None, &matches, today);

    assert_eq!(lines[0], "Found 2 scholarships worth $20,000 total");
    assert!(lines.iter().any(|l| l.contains("Scholarship 1")));
    assert!(lines.iter().any(|l| l.contains("AI match score: 80%")));
}

#[test]
fn test_flow_error_user_messages() {
    let transport = FlowError::Transport {
        detail: "connection refused".to_string(),
    };
    assert_eq!(
        transport.to_string(),
        "Network error. Please check your connection."
    );
    assert_eq!(transport.kind(), MessageKind::Transport);

    let rejected = FlowError::Rejected {
        message: "Invalid credentials".to_string(),
    };
    assert_eq!(rejected.to_string(), "Invalid credentials");
    assert_eq!(rejected.kind(), MessageKind::Rejection);

    assert_eq!(FlowError::SessionRequired.to_string(), "Please log in first.");
}
