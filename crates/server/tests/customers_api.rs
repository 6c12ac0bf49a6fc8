mod support;

use axum::http::StatusCode;
use serde_json::json;

use support::{mock_app, send, sqlite_app};

fn turing() -> serde_json::Value {
    json!({"email": "alan@bletchley.uk", "fullName": "Alan Turing", "phone": "+441234567"})
}

#[tokio::test]
async fn create_get_update_delete() -> anyhow::Result<()> {
    let app = mock_app();
    let (status, created) = send(&app, "POST", "/api/customers", Some(turing())).await?;
    assert_eq!(status, StatusCode::OK);
    let id = created["id"].as_i64().expect("id");
    assert_eq!(created["fullName"], "Alan Turing");

    let (status, fetched) = send(&app, "GET", &format!("/api/customers/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(&app, "PUT", &format!("/api/customers/{id}"), Some(json!({"fullName": "A. M. Turing"}))).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["fullName"], "A. M. Turing");
    assert_eq!(updated["phone"], "+441234567");
    assert_eq!(updated["email"], "alan@bletchley.uk");

    let (status, _) = send(&app, "DELETE", &format!("/api/customers/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "DELETE", &format!("/api/customers/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);

    let (status, err) = send(&app, "GET", &format!("/api/customers/{id}"), None).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(err["message"], format!("Can't find customer with id {id}"));
    Ok(())
}

#[tokio::test]
async fn invalid_phone_and_email_rejected() -> anyhow::Result<()> {
    let app = mock_app();
    for phone in ["3805612384569", "+38061A326598"] {
        let mut body = turing();
        body["phone"] = json!(phone);
        let (status, err) = send(&app, "POST", "/api/customers", Some(body)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{phone}");
        assert!(err["fields"]["phone"].is_array());
    }
    for email in ["wrong_email.com", "wrong@email@com"] {
        let mut body = turing();
        body["email"] = json!(email);
        let (status, err) = send(&app, "POST", "/api/customers", Some(body)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{email}");
        assert!(err["fields"]["email"].is_array());
    }
    let (_, list) = send(&app, "GET", "/api/customers", None).await?;
    assert_eq!(list, json!([]));
    Ok(())
}

#[tokio::test]
async fn update_rejects_long_phone() -> anyhow::Result<()> {
    let app = mock_app();
    let (_, created) = send(&app, "POST", "/api/customers", Some(turing())).await?;
    let id = created["id"].as_i64().expect("id");
    let (status, _) = send(&app, "PUT", &format!("/api/customers/{id}"), Some(json!({"phone": "+12345678901234"}))).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn sqlite_backed_email_uniqueness() -> anyhow::Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() { return Ok(()); }
    let app = sqlite_app().await?;
    let (status, _) = send(&app, "POST", "/api/customers", Some(turing())).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, err) = send(&app, "POST", "/api/customers", Some(turing())).await?;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(err["error"], "Conflict");

    let (_, list) = send(&app, "GET", "/api/customers", None).await?;
    assert_eq!(list.as_array().map(Vec::len), Some(1));

    let id = list[0]["id"].as_i64().expect("id");
    let (status, _) = send(&app, "DELETE", &format!("/api/customers/{id}"), None).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, "POST", "/api/customers", Some(turing())).await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}
