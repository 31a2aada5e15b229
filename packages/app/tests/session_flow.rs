use std::path::PathBuf;

use api::{ApiConfig, Credentials, Id, Role};
use app::{resolve, Navigation, Route, SessionError, SessionStore, SESSION_KEYS, TOKEN_KEY};
use httpmock::prelude::*;
use serde_json::json;
use store::{FileStore, KeyValueStore};

fn temp_base(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("app-session-{}-{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    dir
}

fn mock_directory(server: &MockServer) {
    server.mock(|when, then| {
        when.method(GET).path("/users");
        then.status(200).json_body(json!({
            "success": true,
            "data": [
                {"id": 5, "nombre": "Rosa", "email": "rosa@d.com", "password": "pw", "rol": "repartidor"},
                {"id": 6, "nombre": "Marta", "email": "marta@v.com", "password": "pw", "rol": "vendedor"}
            ]
        }));
    });
}

#[tokio::test]
async fn session_survives_restart() {
    let server = MockServer::start();
    mock_directory(&server);
    let config = ApiConfig::new(server.base_url());
    let base = temp_base("restart");

    let mut first = SessionStore::from_config(&config, FileStore::new(base.clone())).unwrap();
    first
        .login(&Credentials::new("rosa@d.com", "pw"))
        .await
        .unwrap();
    let token = first.state().token.clone();
    drop(first);

    let mut second = SessionStore::from_config(&config, FileStore::new(base.clone())).unwrap();
    assert!(!second.is_authenticated());
    assert!(second.check_auth());
    assert_eq!(second.state().token, token);
    assert_eq!(second.role(), Some(Role::Driver));
    assert_eq!(second.user_id(), Some(&Id::from(5)));

    assert_eq!(
        resolve("/home-repartidor", second.state()),
        Navigation::Allow(Route::DriverHome)
    );
    assert!(matches!(
        resolve("/carrito", second.state()),
        Navigation::Redirect { to: Route::Home, notice: Some(_) }
    ));

    second.logout();
    let storage = FileStore::new(base.clone());
    for key in SESSION_KEYS {
        assert!(storage.get(key).is_none());
    }
    assert_eq!(
        resolve("/home-repartidor", second.state()),
        Navigation::Redirect {
            to: Route::Login,
            notice: None
        }
    );

    let _ = std::fs::remove_dir_all(&base);
}

#[tokio::test]
async fn vendor_restaurant_is_restored() {
    let server = MockServer::start();
    mock_directory(&server);
    server.mock(|when, then| {
        when.method(GET).path("/users/6/restaurant");
        then.status(200)
            .json_body(json!({"success": true, "data": {"id": 3, "nombre": "La Esquina"}}));
    });
    let config = ApiConfig::new(server.base_url());
    let base = temp_base("vendor");

    let mut first = SessionStore::from_config(&config, FileStore::new(base.clone())).unwrap();
    first
        .login(&Credentials::new("marta@v.com", "pw"))
        .await
        .unwrap();

    let mut second = SessionStore::from_config(&config, FileStore::new(base.clone())).unwrap();
    assert!(second.check_auth());
    let restaurant = second.state().restaurant.as_ref().unwrap();
    assert_eq!(restaurant.name.as_deref(), Some("La Esquina"));

    let _ = std::fs::remove_dir_all(&base);
}

#[tokio::test]
async fn driver_workflow_through_session_client() {
    let server = MockServer::start();
    mock_directory(&server);
    let orders = server.mock(|when, then| {
        when.method(GET)
            .path("/orders")
            .query_param("repartidorId", "5");
        then.status(200).json_body(json!({
            "success": true,
            "data": [{"id": 40, "estado": "en_camino", "repartidorId": 5}]
        }));
    });
    let config = ApiConfig::new(server.base_url());
    let base = temp_base("driver");

    let mut session = SessionStore::from_config(&config, FileStore::new(base.clone())).unwrap();
    session
        .login(&Credentials::new("rosa@d.com", "pw"))
        .await
        .unwrap();

    let driver_id = session.user_id().cloned().unwrap();
    let assigned = session.api().drivers().orders(&driver_id).await.unwrap();
    orders.assert();
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].driver_id, Some(Id::from(5)));

    let _ = std::fs::remove_dir_all(&base);
}

#[tokio::test]
async fn transport_and_server_failures_stay_distinct() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/users");
        then.status(503).json_body(json!({"message": "Down for maintenance"}));
    });
    let base = temp_base("errors");

    let mut session = SessionStore::from_config(
        &ApiConfig::new(server.base_url()),
        FileStore::new(base.clone()),
    )
    .unwrap();
    let err = session
        .login(&Credentials::new("rosa@d.com", "pw"))
        .await
        .unwrap_err();
    let api_err = match err {
        SessionError::Api(e) => e,
        other => panic!("expected an API error, got {other:?}"),
    };
    assert!(api_err.is_server_failure());
    assert_eq!(api_err.to_string(), "Down for maintenance");

    let mut offline = SessionStore::from_config(
        &ApiConfig::new("http://127.0.0.1:9"),
        FileStore::new(base.clone()),
    )
    .unwrap();
    let err = offline
        .login(&Credentials::new("rosa@d.com", "pw"))
        .await
        .unwrap_err();
    assert!(matches!(err, SessionError::Api(ref e) if e.is_unreachable()));
    assert!(FileStore::new(base.clone()).get(TOKEN_KEY).is_none());

    let _ = std::fs::remove_dir_all(&base);
}
