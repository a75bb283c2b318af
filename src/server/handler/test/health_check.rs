use super::*;

/// Tests the health report with a working database and no explicit configuration.
///
/// Expected: 200 with status "healthy", defaults reported and a live database
#[tokio::test]
async fn reports_healthy_with_database() {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let config = config(&[]);
    let adapter = adapter(&config, test.db.clone());

    let response = call(&adapter, "health-check", Method::GET, "").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.headers["access-control-allow-origin"], "*");
    let body = body_json(&response);
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    assert_eq!(body["environment"]["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["environment"]["platform"], std::env::consts::OS);
    assert_eq!(body["api"]["imageApiKeyPresent"], false);
    assert_eq!(body["api"]["providerModel"], "provider-4/imagen-3.5");
    assert_eq!(
        body["api"]["imageEndpoint"],
        "https://api.a4f.co/v1/images/generations"
    );
    assert_eq!(body["database"]["databaseUrl"], "missing");
    assert_eq!(body["database"]["connected"], true);
}

/// Tests the health report when startup could not reach the database.
///
/// Expected: 200 with databaseUrl "configured" and connected false
#[tokio::test]
async fn reports_disconnected_database() {
    let config = config(&[
        ("DATABASE_URL", "sqlite:///nonexistent/db.sqlite"),
        ("NEW_API_KEY", "secret"),
    ]);
    let adapter = adapter(&config, None);

    let response = call(&adapter, "health-check", Method::GET, "").await;

    assert_eq!(response.status, StatusCode::OK);
    let body = body_json(&response);
    assert_eq!(body["api"]["imageApiKeyPresent"], true);
    assert_eq!(body["database"]["databaseUrl"], "configured");
    assert_eq!(body["database"]["connected"], false);
    assert!(!response.body.contains("secret"));
}

/// Tests a CORS preflight.
///
/// Expected: 200 with an empty body and the GET/OPTIONS method list
#[tokio::test]
async fn answers_preflight() {
    let adapter = adapter(&config(&[]), None);

    let response = call(&adapter, "health-check", Method::OPTIONS, "").await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body.is_empty());
    assert_eq!(response.headers["access-control-allow-methods"], "GET,OPTIONS");
    assert_eq!(response.headers["access-control-allow-credentials"], "true");
}

/// Tests a method the endpoint does not serve.
///
/// Expected: 405 with "Method Not Allowed"
#[tokio::test]
async fn rejects_post() {
    let adapter = adapter(&config(&[]), None);

    let response = call(&adapter, "health-check", Method::POST, "{}").await;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body_json(&response), json!({ "message": "Method Not Allowed" }));
}
