// End to end tests for the activities API over the composed router.
//
// Every test builds its own in-memory directory from the seed, so tests never
// observe each other's signups.

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::modules::activities::core::activity::Activity;
use crate::modules::activities::core::catalog::{Catalog, mergington_catalog};
use crate::shell::http::router;
use crate::tests::fixtures::state::{make_test_state, make_test_state_with};

fn encode(raw: &str) -> String {
    raw.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{b:02X}"),
        })
        .collect()
}

struct Client {
    app: Router,
}

impl Client {
    async fn send(&self, method: Method, uri: String) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    async fn activities(&self) -> Value {
        let (status, json) = self.send(Method::GET, "/activities".into()).await;
        assert_eq!(status, StatusCode::OK);
        json
    }

    async fn participants(&self, activity: &str) -> Vec<String> {
        serde_json::from_value(self.activities().await[activity]["participants"].clone()).unwrap()
    }

    async fn sign_up(&self, activity: &str, email: &str) -> (StatusCode, Value) {
        let uri = format!("/activities/{}/signup?email={}", encode(activity), encode(email));
        self.send(Method::POST, uri).await
    }

    async fn remove(&self, activity: &str, email: &str) -> (StatusCode, Value) {
        let uri = format!("/activities/{}/remove?email={}", encode(activity), encode(email));
        self.send(Method::DELETE, uri).await
    }
}

#[fixture]
fn client() -> Client {
    Client {
        app: router(make_test_state(), "static"),
    }
}

fn assert_roster_invariants(activities: &Value) {
    for (name, activity) in activities.as_object().unwrap() {
        let participants = activity["participants"].as_array().unwrap();
        let max = activity["max_participants"].as_u64().unwrap() as usize;
        assert!(participants.len() <= max, "'{name}' is over capacity");
        let mut unique = participants.clone();
        unique.sort_by_key(|p| p.as_str().unwrap().to_string());
        unique.dedup();
        assert_eq!(unique.len(), participants.len(), "'{name}' has duplicates");
    }
}

#[rstest]
#[tokio::test]
async fn it_should_sign_up_a_student_and_list_them(client: Client) {
    let (status, json) = client
        .sign_up("Chess Club", "test.student@mergington.edu")
        .await;

    assert_eq!(status, StatusCode::OK);
    let message = json["message"].as_str().unwrap();
    assert!(message.contains("test.student@mergington.edu"));
    assert!(message.contains("Chess Club"));
    assert!(
        client
            .participants("Chess Club")
            .await
            .contains(&"test.student@mergington.edu".to_string())
    );
}

#[rstest]
#[tokio::test]
async fn it_should_follow_the_chess_club_example(client: Client) {
    for email in ["michael@mergington.edu", "daniel@mergington.edu"] {
        assert_eq!(client.remove("Chess Club", email).await.0, StatusCode::OK);
    }
    assert!(client.participants("Chess Club").await.is_empty());

    let (status, _) = client.sign_up("Chess Club", "student@school.edu").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        client.participants("Chess Club").await,
        vec!["student@school.edu"]
    );

    let (status, json) = client.sign_up("Chess Club", "student@school.edu").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"detail": "Student is already signed up"}));
    assert_eq!(
        client.participants("Chess Club").await,
        vec!["student@school.edu"]
    );

    let (status, _) = client.remove("Chess Club", "student@school.edu").await;
    assert_eq!(status, StatusCode::OK);
    assert!(client.participants("Chess Club").await.is_empty());
}

#[rstest]
#[tokio::test]
async fn it_should_reject_removing_a_student_twice(client: Client) {
    let (status, _) = client.remove("Chess Club", "michael@mergington.edu").await;
    assert_eq!(status, StatusCode::OK);

    let before = client.activities().await;
    let (status, json) = client.remove("Chess Club", "michael@mergington.edu").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({"detail": "Student is not signed up for this activity"})
    );
    assert_eq!(client.activities().await, before);
}

#[rstest]
#[tokio::test]
async fn it_should_restore_the_listing_after_signup_then_removal(client: Client) {
    let before = client.activities().await;

    let (status, _) = client
        .sign_up("Programming Class", "workflow.test@mergington.edu")
        .await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = client
        .remove("Programming Class", "workflow.test@mergington.edu")
        .await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(client.activities().await, before);
}

#[rstest]
#[tokio::test]
async fn it_should_enforce_max_participants(client: Client) {
    let chess = client.activities().await["Chess Club"].clone();
    let max = chess["max_participants"].as_u64().unwrap() as usize;
    let available = max - chess["participants"].as_array().unwrap().len();

    for i in 0..available {
        let (status, _) = client
            .sign_up("Chess Club", &format!("student{i}@mergington.edu"))
            .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, json) = client
        .sign_up("Chess Club", "extra.student@mergington.edu")
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, json!({"detail": "Activity is full"}));
    assert_eq!(client.participants("Chess Club").await.len(), max);
    assert_roster_invariants(&client.activities().await);
}

#[rstest]
#[case("chess club")]
#[case("CHESS CLUB")]
#[case("Chess Club ")]
#[tokio::test]
async fn it_should_match_activity_names_exactly(client: Client, #[case] name: &str) {
    let (status, json) = client.sign_up(name, "case.test@mergington.edu").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({"detail": "Activity not found"}));
}

#[rstest]
#[case("user+tag@mergington.edu")]
#[case("user.name@mergington.edu")]
#[case("user_name@mergington.edu")]
#[case("user-name@mergington.edu")]
#[tokio::test]
async fn it_should_accept_special_characters_in_emails(client: Client, #[case] email: &str) {
    let (status, _) = client.sign_up("Programming Class", email).await;
    assert_eq!(status, StatusCode::OK);
    assert!(
        client
            .participants("Programming Class")
            .await
            .contains(&email.to_string())
    );

    let (status, _) = client.remove("Programming Class", email).await;
    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[tokio::test]
async fn it_should_reject_an_unencoded_plus_because_it_decodes_to_a_space(client: Client) {
    let before = client.activities().await;

    let (status, json) = client
        .send(
            Method::POST,
            "/activities/Programming%20Class/signup?email=user+tag@mergington.edu".into(),
        )
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        json!({"detail": "Invalid email address: email contains whitespace or control characters"})
    );
    assert_eq!(client.activities().await, before);

    let (status, _) = client
        .send(
            Method::POST,
            "/activities/Programming%20Class/signup?email=user%2Btag@mergington.edu".into(),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[case("")]
#[case("not-an-email")]
#[case("@mergington.edu")]
#[case("student@")]
#[tokio::test]
async fn it_should_reject_malformed_emails(client: Client, #[case] email: &str) {
    let before = client.activities().await;

    let (status, json) = client.sign_up("Chess Club", email).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(
        json["detail"]
            .as_str()
            .unwrap()
            .starts_with("Invalid email address")
    );
    assert_eq!(client.activities().await, before);
}

#[rstest]
#[tokio::test]
async fn it_should_handle_long_email_addresses(client: Client) {
    let email = format!("{}@{}.edu", "a".repeat(50), "b".repeat(50));

    assert_eq!(client.sign_up("Chess Club", &email).await.0, StatusCode::OK);
    assert_eq!(client.remove("Chess Club", &email).await.0, StatusCode::OK);
}

#[rstest]
#[tokio::test]
async fn it_should_keep_an_emptied_activity_listed(client: Client) {
    for email in client.participants("Gym Class").await {
        assert_eq!(client.remove("Gym Class", &email).await.0, StatusCode::OK);
    }

    let activities = client.activities().await;
    assert_eq!(activities["Gym Class"]["participants"], json!([]));
}

#[rstest]
#[tokio::test]
async fn it_should_percent_decode_reserved_characters_in_activity_names() {
    let mut catalog = Catalog::new();
    catalog.insert(
        "Art & Design / 3D?".to_string(),
        Activity::new("Painting and modelling", "Thursdays", 5),
    );
    let client = Client {
        app: router(make_test_state_with(catalog), "static"),
    };

    let (status, json) = client
        .sign_up("Art & Design / 3D?", "encoding.test@mergington.edu")
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["message"],
        "Signed up encoding.test@mergington.edu for Art & Design / 3D?"
    );

    let (status, _) = client
        .remove("Art & Design / 3D?", "encoding.test@mergington.edu")
        .await;
    assert_eq!(status, StatusCode::OK);
}

#[rstest]
#[tokio::test]
async fn it_should_reflect_the_net_effect_of_a_sequence_of_operations(client: Client) {
    let steps = [
        ("signup", "Gym Class", "concurrent1@mergington.edu"),
        ("signup", "Gym Class", "concurrent2@mergington.edu"),
        ("signup", "Gym Class", "concurrent3@mergington.edu"),
        ("remove", "Gym Class", "concurrent2@mergington.edu"),
        ("remove", "Gym Class", "john@mergington.edu"),
        ("signup", "Chess Club", "concurrent1@mergington.edu"),
    ];
    for (op, activity, email) in steps {
        let (status, _) = match op {
            "signup" => client.sign_up(activity, email).await,
            _ => client.remove(activity, email).await,
        };
        assert_eq!(status, StatusCode::OK, "{op} {email} on {activity}");
    }

    let activities = client.activities().await;
    assert_eq!(
        activities["Gym Class"]["participants"],
        json!([
            "olivia@mergington.edu",
            "concurrent1@mergington.edu",
            "concurrent3@mergington.edu"
        ])
    );
    assert_eq!(
        activities["Chess Club"]["participants"],
        json!([
            "michael@mergington.edu",
            "daniel@mergington.edu",
            "concurrent1@mergington.edu"
        ])
    );
    assert_roster_invariants(&activities);
}

#[rstest]
#[tokio::test]
async fn it_should_keep_rosters_consistent_under_concurrent_signups() {
    let mut catalog = Catalog::new();
    catalog.insert(
        "Robotics".to_string(),
        Activity::new("Build robots", "Wednesdays", 5),
    );
    let app = router(make_test_state_with(catalog), "static");

    let handles: Vec<_> = (0..20)
        .map(|i| {
            let client = Client { app: app.clone() };
            tokio::spawn(async move {
                client
                    .sign_up("Robotics", &format!("racer{}@mergington.edu", i % 8))
                    .await
                    .0
            })
        })
        .collect();
    let mut accepted = 0;
    for handle in handles {
        match handle.await.unwrap() {
            StatusCode::OK => accepted += 1,
            status => assert_eq!(status, StatusCode::BAD_REQUEST),
        }
    }

    let client = Client { app };
    let activities = client.activities().await;
    assert_eq!(accepted, 5);
    assert_eq!(
        activities["Robotics"]["participants"].as_array().unwrap().len(),
        5
    );
    assert_roster_invariants(&activities);
}

#[rstest]
#[tokio::test]
async fn it_should_serve_the_seed_again_after_a_directory_reset() {
    let state = make_test_state();
    let client = Client {
        app: router(state.clone(), "static"),
    };
    let seeded = client.activities().await;

    assert_eq!(
        client.sign_up("Chess Club", "reset.test@mergington.edu").await.0,
        StatusCode::OK
    );
    assert_eq!(
        client.remove("Gym Class", "john@mergington.edu").await.0,
        StatusCode::OK
    );
    assert_ne!(client.activities().await, seeded);

    state.directory.reset().await;

    assert_eq!(client.activities().await, seeded);
    assert_eq!(seeded, serde_json::to_value(mergington_catalog()).unwrap());
}
