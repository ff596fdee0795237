use axum::body::to_bytes;
use axum::http::{StatusCode, header};
use axum::response::Response;
use roster_model::{Person, Team};
use roster_server::generated::{PEOPLE, TEAMS};
use roster_server::routes::{list_people, list_teams};

async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse body")
}

#[tokio::test]
async fn teams_are_served_as_indented_json() {
    let response = list_teams().await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).map(|value| value.as_bytes()),
        Some(&b"application/json"[..])
    );

    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    assert!(bytes.starts_with(b"[\n  {"));

    let teams: Vec<Team> = serde_json::from_slice(&bytes).expect("parse teams");
    assert_eq!(teams.as_slice(), TEAMS);
}

#[tokio::test]
async fn people_are_served_in_data_order() {
    let body = body_json(list_people().await).await;
    let names: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .map(|person| person["name"].as_str().expect("name"))
        .collect();
    let expected: Vec<&str> = PEOPLE.iter().map(|person| person.name.as_ref()).collect();
    assert_eq!(names, expected);

    let people: Vec<Person> = serde_json::from_value(body).expect("parse people");
    assert_eq!(people.len(), PEOPLE.len());
}

#[tokio::test]
async fn first_team_has_trimmed_fields_in_declared_order() {
    let body = to_bytes(list_teams().await.into_body(), usize::MAX)
        .await
        .expect("read body");
    let text = String::from_utf8(body.to_vec()).expect("utf-8 body");

    let name = text.find("\"name\": \"Platform Team\"").expect("name");
    let channel = text
        .find("\"internal_slack_channel\": \"#platform\"")
        .expect("channel");
    let members = text.find("\"members\": [").expect("members");
    assert!(name < channel && channel < members);
}
