use chrono::NaiveDate;
use pretty_assertions::assert_eq;

use runapp::api::params::{parse_date, validate_id, DateRangeQuery, ListWindow, PaginationQuery};
use runapp::api::trainings::CreateTrainingRequest;
use runapp::api::training_feedback::TrainingFeedbackRequest;
use runapp::api::users::{is_valid_email, CreateUserRequest};
use runapp::models::{TrainingSport, TrainingStatus, UserType};

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn date_window_absent_bounds_resolve_to_unbounded_listing() {
    let query = DateRangeQuery::default();
    assert_eq!(query.resolve().unwrap(), ListWindow::All);
}

#[test]
fn date_window_both_bounds_resolve_to_inclusive_period() {
    let query = DateRangeQuery {
        start_date: Some("2024-03-01".to_string()),
        end_date: Some("2024-03-31".to_string()),
    };
    assert_eq!(
        query.resolve().unwrap(),
        ListWindow::Period {
            start: date("2024-03-01"),
            end: date("2024-03-31"),
        }
    );
}

#[test]
fn date_window_mixed_presence_is_rejected() {
    let start_only = DateRangeQuery {
        start_date: Some("2024-03-01".to_string()),
        end_date: None,
    };
    assert!(start_only.resolve().is_err());

    let end_only = DateRangeQuery {
        start_date: None,
        end_date: Some("2024-03-31".to_string()),
    };
    assert!(end_only.resolve().is_err());
}

#[test]
fn date_window_malformed_date_is_rejected() {
    let query = DateRangeQuery {
        start_date: Some("03/01/2024".to_string()),
        end_date: Some("2024-03-31".to_string()),
    };
    assert!(query.resolve().is_err());
}

#[test]
fn parse_date_accepts_iso_and_rejects_impossible_days() {
    assert_eq!(parse_date("2024-02-29").unwrap(), date("2024-02-29"));
    assert!(parse_date("2023-02-29").is_err());
    assert!(parse_date("2024-13-01").is_err());
    assert!(parse_date("yesterday").is_err());
}

#[test]
fn pagination_bounds_are_enforced() {
    let ok = PaginationQuery {
        page_id: 1,
        page_size: 10,
    };
    assert!(ok.validate().is_ok());

    let zero_page = PaginationQuery {
        page_id: 0,
        page_size: 10,
    };
    assert!(zero_page.validate().is_err());

    let small_page = PaginationQuery {
        page_id: 1,
        page_size: 9,
    };
    assert!(small_page.validate().is_err());

    let huge_page = PaginationQuery {
        page_id: 1,
        page_size: 1001,
    };
    assert!(huge_page.validate().is_err());
}

#[test]
fn pagination_maps_to_limit_and_offset() {
    let query = PaginationQuery {
        page_id: 3,
        page_size: 20,
    };
    assert_eq!(query.limit(), 20);
    assert_eq!(query.offset(), 40);

    let first_page = PaginationQuery {
        page_id: 1,
        page_size: 100,
    };
    assert_eq!(first_page.offset(), 0);
}

#[test]
fn borg_scale_bounds_are_inclusive() {
    assert!(TrainingFeedbackRequest { borg_scale: 5 }.validate().is_err());
    assert!(TrainingFeedbackRequest { borg_scale: 6 }.validate().is_ok());
    assert!(TrainingFeedbackRequest { borg_scale: 20 }.validate().is_ok());
    assert!(TrainingFeedbackRequest { borg_scale: 21 }.validate().is_err());
}

#[test]
fn id_must_be_positive() {
    assert!(validate_id(1).is_ok());
    assert!(validate_id(0).is_err());
    assert!(validate_id(-4).is_err());
}

#[test]
fn training_creation_defaults_status_to_new() {
    let request = CreateTrainingRequest {
        user_id: 1,
        date: "2024-06-01".to_string(),
        sport: TrainingSport::Running,
        training_type: None,
        intensity: None,
        details: "easy run".to_string(),
        status: None,
    };
    assert!(request.validate().is_ok());

    let params = request.into_params().unwrap();
    assert_eq!(params.status, TrainingStatus::New);
    assert_eq!(params.date, date("2024-06-01"));
    assert_eq!(params.training_type, None);
    assert_eq!(params.intensity, None);
}

#[test]
fn training_creation_keeps_explicit_status() {
    let request = CreateTrainingRequest {
        user_id: 1,
        date: "2024-06-01".to_string(),
        sport: TrainingSport::Cycling,
        training_type: Some("interval".to_string()),
        intensity: Some("high".to_string()),
        details: "4x8min".to_string(),
        status: Some(TrainingStatus::Notified),
    };
    let params = request.into_params().unwrap();
    assert_eq!(params.status, TrainingStatus::Notified);
    assert_eq!(params.training_type.as_deref(), Some("interval"));
}

#[test]
fn training_creation_rejects_bad_input() {
    let bad_date = CreateTrainingRequest {
        user_id: 1,
        date: "01-06-2024".to_string(),
        sport: TrainingSport::Running,
        training_type: None,
        intensity: None,
        details: "easy run".to_string(),
        status: None,
    };
    assert!(bad_date.validate().is_err());

    let empty_details = CreateTrainingRequest {
        user_id: 1,
        date: "2024-06-01".to_string(),
        sport: TrainingSport::Running,
        training_type: None,
        intensity: None,
        details: "  ".to_string(),
        status: None,
    };
    assert!(empty_details.validate().is_err());

    let bad_owner = CreateTrainingRequest {
        user_id: 0,
        date: "2024-06-01".to_string(),
        sport: TrainingSport::Running,
        training_type: None,
        intensity: None,
        details: "easy run".to_string(),
        status: None,
    };
    assert!(bad_owner.validate().is_err());
}

#[test]
fn user_creation_is_validated() {
    let valid = CreateUserRequest {
        user_type: UserType::Athlete,
        name: "Jane Runner".to_string(),
        email: "jane@example.com".to_string(),
        password: "long-enough-pass".to_string(),
        phone: None,
        birth: Some("1990-05-14".to_string()),
    };
    assert!(valid.validate().is_ok());

    let empty_name = CreateUserRequest {
        name: " ".to_string(),
        ..clone_request(&valid)
    };
    assert!(empty_name.validate().is_err());

    let bad_email = CreateUserRequest {
        email: "jane.example.com".to_string(),
        ..clone_request(&valid)
    };
    assert!(bad_email.validate().is_err());

    let short_password = CreateUserRequest {
        password: "short".to_string(),
        ..clone_request(&valid)
    };
    assert!(short_password.validate().is_err());

    let bad_birth = CreateUserRequest {
        birth: Some("14-05-1990".to_string()),
        ..clone_request(&valid)
    };
    assert!(bad_birth.validate().is_err());
}

fn clone_request(request: &CreateUserRequest) -> CreateUserRequest {
    CreateUserRequest {
        user_type: request.user_type,
        name: request.name.clone(),
        email: request.email.clone(),
        password: request.password.clone(),
        phone: request.phone.clone(),
        birth: request.birth.clone(),
    }
}

#[test]
fn email_check_matches_expected_shapes() {
    for email in ["user@example.com", "coach@training.center"] {
        assert!(is_valid_email(email), "should accept {email}");
    }
    for email in ["invalid-email", "@domain.com", "user@domain", "user@.com", ""] {
        assert!(!is_valid_email(email), "should reject {email}");
    }
}

#[test]
fn enum_wire_forms_are_snake_case() {
    assert_eq!(
        serde_json::from_str::<UserType>("\"athlete\"").unwrap(),
        UserType::Athlete
    );
    assert!(serde_json::from_str::<UserType>("\"manager\"").is_err());

    assert_eq!(
        serde_json::from_str::<TrainingStatus>("\"done_feedback\"").unwrap(),
        TrainingStatus::DoneFeedback
    );
    assert_eq!(
        serde_json::to_string(&TrainingStatus::DoneFeedback).unwrap(),
        "\"done_feedback\""
    );
    assert!(serde_json::from_str::<TrainingSport>("\"chess\"").is_err());
}
