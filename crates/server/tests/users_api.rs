mod support;

use axum::http::StatusCode;
use chrono::{Days, Utc};
use serde_json::json;

use support::{mock_app, send, sqlite_app};

fn poe() -> serde_json::Value {
    json!({
        "email": "edgar@poe.com",
        "firstName": "Edgar",
        "lastName": "Poe",
        "birthDate": "1809-01-19",
        "address": "Boston",
        "phoneNumber": "+380502641937"
    })
}

#[tokio::test]
async fn health_is_ok() -> anyhow::Result<()> {
    let app = mock_app();
    let (status, body) = send(&app, "GET", "/health", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
    Ok(())
}

#[tokio::test]
async fn create_then_get_roundtrip() -> anyhow::Result<()> {
    let app = mock_app();
    let (status, created) = send(&app, "POST", "/api/users", Some(poe())).await?;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().expect("id");
    for field in ["email", "firstName", "lastName", "birthDate", "address", "phoneNumber"] {
        assert_eq!(created[field], poe()[field], "{field}");
    }

    let (status, fetched) = send(&app, "GET", &format!("/api/users/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    Ok(())
}

#[tokio::test]
async fn create_rejects_bad_fields_with_camel_case_names() -> anyhow::Result<()> {
    let app = mock_app();
    let mut body = poe();
    body["email"] = json!("wrong@email@com");
    body["phoneNumber"] = json!("+38061A326598");
    let (status, err) = send(&app, "POST", "/api/users", Some(body)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["status"], 400);
    assert!(err["fields"]["email"].is_array());
    assert!(err["fields"]["phoneNumber"].is_array());

    let (_, list) = send(&app, "GET", "/api/users", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn create_rejects_future_birth_date() -> anyhow::Result<()> {
    let app = mock_app();
    let mut body = poe();
    let tomorrow = Utc::now().date_naive() + Days::new(1);
    body["birthDate"] = json!(tomorrow.to_string());
    let (status, err) = send(&app, "POST", "/api/users", Some(body)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(err["fields"]["birthDate"].is_array());
    Ok(())
}

#[tokio::test]
async fn create_underage_is_forbidden() -> anyhow::Result<()> {
    let app = mock_app();
    let mut body = poe();
    let yesterday = Utc::now().date_naive() - Days::new(1);
    body["birthDate"] = json!(yesterday.to_string());
    let (status, err) = send(&app, "POST", "/api/users", Some(body)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["message"], "Age is forbidden. Come back to us later");

    let (_, list) = send(&app, "GET", "/api/users", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn malformed_json_is_bad_request() -> anyhow::Result<()> {
    let app = mock_app();
    let (status, _) = send(&app, "POST", "/api/users", Some(json!({"email": "a@b.co"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut body = poe();
    body["birthDate"] = json!("19-01-1809");
    let (status, _) = send(&app, "POST", "/api/users", Some(body)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn get_missing_and_non_numeric_id() -> anyhow::Result<()> {
    let app = mock_app();
    let (status, err) = send(&app, "GET", "/api/users/1994", None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["message"], "Can't find user with id 1994");

    let (status, _) = send(&app, "GET", "/api/users/abc", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn partial_update_changes_only_given_fields() -> anyhow::Result<()> {
    let app = mock_app();
    let (_, created) = send(&app, "POST", "/api/users", Some(poe())).await?;
    let id = created["id"].as_i64().expect("id");

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/api/users/{id}"),
        Some(json!({"phoneNumber": "+380969609696"})),
    )
    .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["phoneNumber"], "+380969609696");
    assert_eq!(updated["firstName"], created["firstName"]);
    assert_eq!(updated["birthDate"], created["birthDate"]);

    let (status, _) = send(&app, "PUT", "/api/users/777", Some(json!({"firstName": "Nobody"}))).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn update_to_underage_birth_date_changes_nothing() -> anyhow::Result<()> {
    let app = mock_app();
    let (_, created) = send(&app, "POST", "/api/users", Some(poe())).await?;
    let id = created["id"].as_i64().expect("id");

    let yesterday = Utc::now().date_naive() - Days::new(1);
    let patch = json!({"firstName": "Allan", "birthDate": yesterday.to_string()});
    let (status, _) = send(&app, "PUT", &format!("/api/users/{id}"), Some(patch)).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, fetched) = send(&app, "GET", &format!("/api/users/{id}"), None).await?;
    assert_eq!(fetched, created);
    Ok(())
}

#[tokio::test]
async fn delete_twice_and_unknown_are_ok() -> anyhow::Result<()> {
    let app = mock_app();
    let (_, created) = send(&app, "POST", "/api/users", Some(poe())).await?;
    let id = created["id"].as_i64().expect("id");

    for uri in [format!("/api/users/{id}"), format!("/api/users/{id}"), "/api/users/100".to_string()] {
        let (status, body) = send(&app, "DELETE", &uri, None).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::Value::Null);
    }

    let (status, _) = send(&app, "GET", &format!("/api/users/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (_, list) = send(&app, "GET", "/api/users", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn search_by_birth_date() -> anyhow::Result<()> {
    let app = mock_app();
    let seeds = [("tolkien@mail.com", "1890-08-20"), ("poe@mail.com", "1809-01-19"), ("gogol@mail.com", "1806-01-22")];
    for (email, birth) in seeds {
        let mut body = poe();
        body["email"] = json!(email);
        body["birthDate"] = json!(birth);
        let (status, _) = send(&app, "POST", "/api/users", Some(body)).await?;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, found) = send(&app, "GET", "/api/users/search?fromDate=1805-12-12&toDate=1810-12-12", None).await?;
    assert_eq!(status, StatusCode::OK);
    let births: Vec<&str> = found.as_array().expect("array").iter().filter_map(|u| u["birthDate"].as_str()).collect();
    assert_eq!(births, vec!["1809-01-19", "1806-01-22"]);

    let (status, err) = send(&app, "GET", "/api/users/search?fromDate=1810-12-12&toDate=1805-12-12", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(err["message"], "The second date is after the first. Change it!");

    let (status, _) = send(&app, "GET", "/api/users/search?fromDate=1805-12-12", None).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn duplicate_email_is_conflict() -> anyhow::Result<()> {
    let app = mock_app();
    send(&app, "POST", "/api/users", Some(poe())).await?;
    let (status, err) = send(&app, "POST", "/api/users", Some(poe())).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(err["status"], 409);
    Ok(())
}

#[tokio::test]
async fn sqlite_backed_lifecycle() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = sqlite_app().await?;

    let (status, created) = send(&app, "POST", "/api/users", Some(poe())).await?;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().expect("id");

    let (status, _) = send(&app, "POST", "/api/users", Some(poe())).await?;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, updated) = send(&app, "PUT", &format!("/api/users/{id}"), Some(json!({"address": "Baltimore"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["address"], "Baltimore");

    let (_, found) = send(&app, "GET", "/api/users/search?fromDate=1809-01-19&toDate=1809-01-19", None).await?;
    assert_eq!(found.as_array().map(Vec::len), Some(1));

    let mut other = poe();
    other["email"] = json!("virginia@poe.com");
    let (status, second) = send(&app, "POST", "/api/users", Some(other)).await?;
    assert_eq!(status, StatusCode::OK);
    let second_id = second["id"].as_i64().expect("id");
    let (status, err) = send(
        &app,
        "PUT",
        &format!("/api/users/{second_id}"),
        Some(json!({"email": "edgar@poe.com"})),
    )
    .await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(err["status"], 409);
    let (_, unchanged) = send(&app, "GET", &format!("/api/users/{second_id}"), None).await?;
    assert_eq!(unchanged["email"], "virginia@poe.com");

    let (status, _) = send(&app, "DELETE", &format!("/api/users/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "GET", &format!("/api/users/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // a deleted user's email is free again
    let (status, recreated) = send(&app, "POST", "/api/users", Some(poe())).await?;
    assert_eq!(status, StatusCode::OK);
    assert_ne!(recreated["id"].as_i64(), Some(id));
    Ok(())
}

#[tokio::test]
async fn openapi_document_is_served() -> anyhow::Result<()> {
    let app = mock_app();
    let (status, doc) = send(&app, "GET", "/api-docs/openapi.json", None).await?;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/api/users/search"].is_object());
    assert!(doc["paths"]["/api/customers/{id}"].is_object());
    Ok(())
}
