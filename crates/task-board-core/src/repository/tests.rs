//! Parse REST client tests against a mock server.

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::config::StoreConfig;
    use crate::domain::{NewTask, ObjectId};
    use crate::repository::{ParseTaskStore, StoreError, TaskStore};

    fn config_for(server: &MockServer) -> StoreConfig {
        let mut config = StoreConfig::new(server.uri(), "app-id");
        config.javascript_key = Some("js-key".to_string());
        config
    }

    async fn setup() -> (MockServer, ParseTaskStore) {
        let server = MockServer::start().await;
        let store = ParseTaskStore::new(&config_for(&server)).expect("Failed to build store");
        (server, store)
    }

    #[tokio::test]
    async fn test_find_all_sends_keys_and_keeps_order() {
        let (server, store) = setup().await;
        Mock::given(method("GET"))
            .and(path("/classes/Task"))
            .and(header("x-parse-application-id", "app-id"))
            .and(header("x-parse-javascript-key", "js-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [
                    { "objectId": "b2", "description": "Walk dog", "createdAt": "2024-03-01T09:31:00.000Z" },
                    { "objectId": "a1", "description": "Buy milk", "createdAt": "2024-03-01T09:30:00.000Z" }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let tasks = store.find_all().await.expect("find_all failed");
        let descriptions: Vec<&str> = tasks.iter().map(|t| t.description.as_str()).collect();
        assert_eq!(descriptions, vec!["Walk dog", "Buy milk"]);
        assert_eq!(tasks[0].id, ObjectId::new("b2"));
    }

    #[tokio::test]
    async fn test_rest_key_header_only_when_set() {
        let (server, store) = setup().await;
        Mock::given(method("GET"))
            .and(path("/classes/Task"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .mount(&server)
            .await;

        store.find_all().await.expect("find_all failed");

        let requests = server.received_requests().await.expect("recording enabled");
        assert_eq!(requests.len(), 1);
        assert!(requests[0].headers.get("x-parse-rest-api-key").is_none());
    }

    #[tokio::test]
    async fn test_find_first_uses_equality_filter() {
        let (server, store) = setup().await;
        Mock::given(method("GET"))
            .and(path("/classes/Task"))
            .and(query_param("where", r#"{"description":"Buy milk"}"#))
            .and(query_param("limit", "1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "results": [{ "objectId": "a1", "description": "Buy milk" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let found = store.find_first("description", "Buy milk").await.expect("query failed");
        assert_eq!(found.map(|t| t.id), Some(ObjectId::new("a1")));
    }

    #[tokio::test]
    async fn test_find_first_without_match() {
        let (server, store) = setup().await;
        Mock::given(method("GET"))
            .and(path("/classes/Task"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "results": [] })))
            .mount(&server)
            .await;

        let found = store.find_first("description", "Nothing").await.expect("query failed");
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_create_posts_description() {
        let (server, store) = setup().await;
        Mock::given(method("POST"))
            .and(path("/classes/Task"))
            .and(body_json(json!({ "description": "Buy milk" })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "objectId": "n3w",
                "createdAt": "2024-03-01T09:30:00.000Z"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let task = store.create(&NewTask::new("Buy milk")).await.expect("create failed");
        assert_eq!(task.id, ObjectId::new("n3w"));
        assert_eq!(task.description, "Buy milk");
        assert!(task.created_at.is_some());
    }

    #[tokio::test]
    async fn test_destroy_by_object_id() {
        let (server, store) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/classes/Task/a1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .expect(1)
            .mount(&server)
            .await;

        store.destroy(&ObjectId::new("a1")).await.expect("destroy failed");
    }

    #[tokio::test]
    async fn test_destroy_missing_object_is_not_found() {
        let (server, store) = setup().await;
        Mock::given(method("DELETE"))
            .and(path("/classes/Task/gone"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "code": 101,
                "error": "Object not found."
            })))
            .mount(&server)
            .await;

        let err = store.destroy(&ObjectId::new("gone")).await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Object not found.");
    }

    #[tokio::test]
    async fn test_service_error_message_is_surfaced() {
        let (server, store) = setup().await;
        Mock::given(method("POST"))
            .and(path("/classes/Task"))
            .respond_with(ResponseTemplate::new(403).set_body_json(json!({
                "code": 119,
                "error": "Permission denied for action create on class Task."
            })))
            .mount(&server)
            .await;

        let err = store.create(&NewTask::new("x")).await.unwrap_err();
        match err {
            StoreError::Service { code, message } => {
                assert_eq!(code, 119);
                assert_eq!(message, "Permission denied for action create on class Task.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_error_uses_status() {
        let (server, store) = setup().await;
        Mock::given(method("GET"))
            .and(path("/classes/Task"))
            .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
            .mount(&server)
            .await;

        let err = store.find_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Service { code: 502, .. }));
    }

    #[tokio::test]
    async fn test_malformed_success_body() {
        let (server, store) = setup().await;
        Mock::given(method("GET"))
            .and(path("/classes/Task"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = store.find_all().await.unwrap_err();
        assert!(matches!(err, StoreError::InvalidResponse { .. }));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_transport_error() {
        let store = ParseTaskStore::new(&StoreConfig::new("http://127.0.0.1:1/", "app-id"))
            .expect("Failed to build store");

        let err = store.find_all().await.unwrap_err();
        assert!(matches!(err, StoreError::Transport(_)));
    }

    #[test]
    fn test_mounted_server_path() {
        let config = StoreConfig::new("https://example.com/parse", "app-id");
        let store = ParseTaskStore::new(&config).expect("Failed to build store");
        assert_eq!(store.collection_url().as_str(), "https://example.com/parse/classes/Task");
    }
}
