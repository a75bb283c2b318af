use super::*;

/// Tests serving a file from the frontend directory.
///
/// Expected: 200 with the file contents, allowing any origin
#[tokio::test]
async fn serves_static_assets() {
    let server = spawn_app("assets").await;

    let response = reqwest::get(server.url("/assets/app.js")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
    assert_eq!(response.text().await.unwrap(), "console.log('app');");
}

/// Tests a client-side route that matches no file.
///
/// Expected: index.html
#[tokio::test]
async fn falls_back_to_index_for_client_routes() {
    let server = spawn_app("spa").await;

    let response = reqwest::get(server.url("/gallery/recent")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), INDEX_HTML);
}
