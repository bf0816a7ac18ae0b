#[cfg(test)]
mod tests {
    use crate::helpers::{body_json, make_test_app, make_test_app_with_model};
    use api::routes::app;
    use api::state::AppState;
    use async_trait::async_trait;
    use axum::{
        Router,
        body::Body as AxumBody,
        http::{Request, StatusCode, header},
    };
    use chrono::{Duration, SecondsFormat, Utc};
    use mentor::MentorError;
    use mentor::prompt::DEFAULT_FEEDBACK;
    use mentor::traits::model::GenerativeModel;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use tower::ServiceExt;
    use util::config::AppConfig;

    struct FixedModel(&'static str);

    #[async_trait]
    impl GenerativeModel for FixedModel {
        async fn generate(&self, prompt: &str) -> Result<String, MentorError> {
            assert!(prompt.contains("학생 코드:"));
            Ok(self.0.to_string())
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct BrokenModel;

    #[async_trait]
    impl GenerativeModel for BrokenModel {
        async fn generate(&self, _prompt: &str) -> Result<String, MentorError> {
            Err(MentorError::Upstream("Gemini returned 503 Service Unavailable: overloaded".into()))
        }

        fn name(&self) -> &str {
            "broken"
        }
    }

    async fn post_json(app: Router, body: Value) -> (StatusCode, Value) {
        let req = Request::builder()
            .method("POST")
            .uri("/api/ai-feedback")
            .header(header::CONTENT_TYPE, "application/json")
            .body(AxumBody::from(body.to_string()))
            .unwrap();

        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        (status, body_json(response).await)
    }

    fn seconds_ago(secs: i64) -> String {
        (Utc::now() - Duration::seconds(secs)).to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    #[tokio::test]
    async fn non_post_methods_are_rejected() {
        for method in ["GET", "PUT", "DELETE", "PATCH", "HEAD"] {
            let req = Request::builder()
                .method(method)
                .uri("/api/ai-feedback")
                .body(AxumBody::empty())
                .unwrap();

            let response = make_test_app().oneshot(req).await.unwrap();
            assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED, "{method}");

            if method != "HEAD" {
                assert_eq!(body_json(response).await, json!({ "error": "Method Not Allowed" }));
            }
        }
    }

    #[tokio::test]
    async fn bare_options_is_empty_no_content() {
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/api/ai-feedback")
            .body(AxumBody::from(r#"{"code":123}"#))
            .unwrap();

        let response = make_test_app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(body_json(response).await, Value::Null);
    }

    #[tokio::test]
    async fn cors_preflight_is_answered_permissively() {
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/api/ai-feedback")
            .header(header::ORIGIN, "https://student.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type,authorization")
            .body(AxumBody::empty())
            .unwrap();

        let response = make_test_app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
            .to_str()
            .unwrap()
            .to_ascii_lowercase();
        assert!(allowed.contains("content-type"));
        assert!(allowed.contains("authorization"));
        assert_eq!(body_json(response).await, Value::Null);
    }

    #[tokio::test]
    async fn post_response_carries_cors_origin() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/ai-feedback")
            .header(header::ORIGIN, "https://student.example")
            .body(AxumBody::from(json!({ "code": "x = 1" }).to_string()))
            .unwrap();

        let response = make_test_app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    }

    #[tokio::test]
    async fn missing_or_invalid_code_is_bad_request() {
        for body in [json!({}), json!({ "code": "" }), json!({ "code": 123 })] {
            let (status, json) = post_json(make_test_app(), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(json, json!({ "error": "No code submitted" }));
        }
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let req = Request::builder()
            .method("POST")
            .uri("/api/ai-feedback")
            .header(header::CONTENT_TYPE, "application/json")
            .body(AxumBody::from("{ code: "))
            .unwrap();

        let response = make_test_app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({ "error": "No code submitted" }));
    }

    #[tokio::test]
    async fn quick_long_submission_is_suspicious() {
        let code = "a".repeat(250);
        let (status, json) = post_json(
            make_test_app(),
            json!({ "code": code, "submittedAt": seconds_ago(2) }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        let suspicion = json["suspicion"].as_str().unwrap();
        // allow one second of slack for a slow test runner
        assert!(suspicion.contains("2s") || suspicion.contains("3s"), "{suspicion}");
        assert!(suspicion.contains("250자"));
        assert_eq!(json["feedback"], DEFAULT_FEEDBACK);
    }

    #[tokio::test]
    async fn slow_submission_is_not_suspicious() {
        let (status, json) = post_json(
            make_test_app(),
            json!({ "code": "a".repeat(250), "submittedAt": seconds_ago(30) }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["suspicion"], "");
    }

    #[tokio::test]
    async fn absent_timestamp_counts_as_instant() {
        let (status, json) = post_json(make_test_app(), json!({ "code": "a".repeat(201) })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["suspicion"], "⚠️ 제출 0s / 201자 → 복붙 의심");
    }

    #[tokio::test]
    async fn unparseable_timestamp_counts_as_instant() {
        let (status, json) = post_json(
            make_test_app(),
            json!({ "code": "a".repeat(201), "submittedAt": "yesterday-ish" }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["suspicion"], "⚠️ 제출 0s / 201자 → 복붙 의심");
    }

    #[tokio::test]
    async fn default_feedback_without_credential() {
        let (status, json) = post_json(make_test_app(), json!({ "code": "print(1)" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json,
            json!({ "success": true, "suspicion": "", "feedback": DEFAULT_FEEDBACK })
        );
    }

    #[tokio::test]
    async fn model_feedback_is_returned() {
        let app = make_test_app_with_model(Arc::new(FixedModel("잘했어요.\n테스트를 추가하세요.")));
        let (status, json) = post_json(app, json!({ "code": "print(1)" })).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["feedback"], "잘했어요.\n테스트를 추가하세요.");
        assert_eq!(json["success"], true);
    }

    #[tokio::test]
    async fn model_failure_is_internal_error() {
        let app = make_test_app_with_model(Arc::new(BrokenModel));
        let (status, json) = post_json(app, json!({ "code": "print(1)" })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "INTERNAL");
        let detail = json["detail"].as_str().unwrap();
        assert!(!detail.is_empty());
        assert!(detail.contains("503"));
    }

    #[tokio::test]
    async fn identical_requests_give_identical_responses() {
        let app = make_test_app_with_model(Arc::new(FixedModel("same answer")));
        let body = json!({ "code": "x".repeat(50), "submittedAt": seconds_ago(120) });

        let (_, first) = post_json(app.clone(), body.clone()).await;
        let (_, second) = post_json(app, body).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn bare_options_on_health_is_no_content() {
        let req = Request::builder()
            .method("OPTIONS")
            .uri("/api/health")
            .body(AxumBody::empty())
            .unwrap();

        let response = make_test_app().oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(body_json(response).await, Value::Null);
    }

    #[tokio::test]
    async fn upstream_failure_does_not_leak_credential() {
        let config = AppConfig {
            gemini_base_url: "http://127.0.0.1:1".into(),
            ..AppConfig::default()
        }
        .with_gemini_api_key("SUPERSECRETKEY123");
        let app = app(AppState::from_config(config));

        let (status, json) = post_json(app, json!({ "code": "x=1" })).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["error"], "INTERNAL");
        let detail = json["detail"].as_str().unwrap();
        assert!(!detail.is_empty());
        assert!(!detail.contains("SUPERSECRETKEY123"), "{detail}");
        assert!(!json.to_string().contains("SUPERSECRETKEY123"));
    }

    #[tokio::test]
    async fn epoch_millis_timestamp_is_honoured() {
        let submitted_at = (Utc::now() - Duration::seconds(60)).timestamp_millis();
        let (status, json) = post_json(
            make_test_app(),
            json!({ "code": "a".repeat(250), "submittedAt": submitted_at }),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["suspicion"], "");
    }
}
