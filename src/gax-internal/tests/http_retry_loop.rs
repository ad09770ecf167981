// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! These tests verify the HTTP client uses the retry policy and backoff policy
//! as expected. They do not test the policy implementations, that is done in
//! the unit tests.
//!
//! The tests use an HTTP server that returns a sequence of responses. The
//! sequence is specific to each test, intended to drive the retry loop as
//! needed for that test.

#[cfg(test)]
mod tests {
    use datacatalog_gax_internal::http::ReqwestClient;
    use datacatalog_gax_internal::options::ClientConfig;
    use gax::backoff_policy::BackoffPolicy;
    use gax::exponential_backoff::ExponentialBackoffBuilder;
    use gax::options::*;
    use gax::error::Error;
    use gax::retry_policy::{DefaultRetryPolicy, NeverRetry, RetryPolicy, RetryPolicyExt};
    use gax::retry_result::RetryResult;
    use gax::retry_state::RetryState;
    use http::StatusCode;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use serde_json::json;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;
    use tracing_subscriber::util::SubscriberInitExt;

    type Result<T> = anyhow::Result<T>;

    mockall::mock! {
        #[derive(Debug)]
        Policy {}
        impl RetryPolicy for Policy {
            fn on_error(&self, state: &RetryState, error: Error) -> RetryResult;
            fn remaining_time(&self, state: &RetryState) -> Option<Duration>;
            fn may_retry(&self) -> bool;
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_no_retry_immediate_success() -> Result<()> {
        let server = start(vec![success()]);
        let client = ReqwestClient::new(test_config(&server)).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry");

        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, idempotent())
            .await;
        let response = response?.into_body();
        assert_eq!(response, json!({"lifecycleState": "ACTIVE"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_no_policy_single_attempt() -> Result<()> {
        let server = start(vec![transient()]);
        let client = ReqwestClient::new(test_config(&server)).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry");

        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, idempotent())
            .await;
        let err = response.expect_err("a transient error without a policy is returned");
        assert_eq!(err.http_status_code(), Some(transient().0.as_u16()));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_immediate_failure() -> Result<()> {
        let server = start(vec![permanent()]);
        let mut config = test_config(&server);
        config.retry_policy = Some(std::sync::Arc::new(DefaultRetryPolicy.with_attempt_limit(5)));
        let client = ReqwestClient::new(config).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry");

        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, idempotent())
            .await;
        let err = response.expect_err("permanent errors are not retried");
        assert_eq!(err.http_status_code(), Some(permanent().0.as_u16()));
        assert_eq!(
            err.service_error().map(|e| e.code.as_str()),
            Some("InvalidParameter")
        );
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_retry_success() -> Result<()> {
        // We create a server that will return two transient errors and then succeed.
        let server = start(vec![transient(), transient(), success()]);
        let client = ReqwestClient::new(test_config(&server)).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry");

        let options = {
            let mut options = idempotent();
            options.set_retry_policy(DefaultRetryPolicy.with_attempt_limit(5));
            options
        };
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, options)
            .await;
        let response = response?.into_body();
        assert_eq!(response, json!({"lifecycleState": "ACTIVE"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_sets_client_retries_header() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20190325/retry"),
                request::headers(contains(("opc-client-retries", "true"))),
            ])
            .times(2)
            .respond_with(cycle(vec![
                to_responder(conflict().0, conflict().1),
                to_responder(success().0, success().1),
            ])),
        );
        let client = ReqwestClient::new(test_config(&server)).await?;
        let builder = client.builder(reqwest::Method::POST, "/retry");
        let options = {
            let mut options = idempotent();
            options.set_retry_policy(DefaultRetryPolicy.with_attempt_limit(5));
            options
        };
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, Some(json!({})), options)
            .await?;
        assert_eq!(response.into_body(), json!({"lifecycleState": "ACTIVE"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_not_idempotent() -> Result<()> {
        let server = start(vec![transient()]);
        let client = ReqwestClient::new(test_config(&server)).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry");

        let options = {
            let mut options = RequestOptions::default();
            options.set_backoff_policy(test_backoff());
            options.set_retry_policy(DefaultRetryPolicy.with_attempt_limit(5));
            options.set_idempotency(false);
            options
        };
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, options)
            .await;
        let err = response.expect_err("non-idempotent requests are not retried");
        assert_eq!(err.http_status_code(), Some(transient().0.as_u16()));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_too_many_transients() -> Result<()> {
        let server = start(vec![transient(), transient(), transient()]);
        let client = ReqwestClient::new(test_config(&server)).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry");

        let options = {
            let mut options = idempotent();
            options.set_retry_policy(DefaultRetryPolicy.with_attempt_limit(3));
            options
        };
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, options)
            .await;
        let err = response.expect_err("the attempt limit is reached");
        assert_eq!(err.http_status_code(), Some(transient().0.as_u16()));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_never_retry() -> Result<()> {
        let server = start(vec![transient()]);
        let client = ReqwestClient::new(test_config(&server)).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry");

        let options = {
            let mut options = idempotent();
            options.set_retry_policy(NeverRetry);
            options
        };
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, options)
            .await;
        let err = response.expect_err("NeverRetry makes a single attempt");
        assert_eq!(err.http_status_code(), Some(transient().0.as_u16()));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_never_retry_omits_client_retries_header() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("POST", "/20190325/retry"),
                request::headers(not(contains(key("opc-client-retries")))),
            ])
            .times(1)
            .respond_with(cycle(vec![to_responder(conflict().0, conflict().1)])),
        );
        let client = ReqwestClient::new(test_config(&server)).await?;
        let builder = client.builder(reqwest::Method::POST, "/retry");
        let options = {
            let mut options = idempotent();
            options.set_retry_policy(NeverRetry);
            options
        };
        assert!(!client.retries_enabled(&options));
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, Some(json!({})), options)
            .await;
        let err = response.expect_err("the conflict is returned without retrying");
        assert_eq!(err.http_status_code(), Some(conflict().0.as_u16()));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_custom_policy() -> Result<()> {
        let server = start(vec![transient(), success()]);
        let client = ReqwestClient::new(test_config(&server)).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry");

        let mut policy = MockPolicy::new();
        policy.expect_may_retry().return_const(true);
        policy.expect_remaining_time().returning(|_| None);
        policy
            .expect_on_error()
            .times(1)
            .withf(|state, error| {
                state.attempt_count == 1
                    && state.idempotent
                    && error.http_status_code() == Some(500)
            })
            .returning(|_, e| RetryResult::Continue(e));
        let options = {
            let mut options = idempotent();
            options.set_retry_policy(policy);
            options
        };
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, options)
            .await?;
        assert_eq!(response.into_body(), json!({"lifecycleState": "ACTIVE"}));
        Ok(())
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn retry_loop_custom_policy_without_retries() -> Result<()> {
        let server = start(vec![transient()]);
        let client = ReqwestClient::new(test_config(&server)).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry");

        let mut policy = MockPolicy::new();
        policy.expect_may_retry().return_const(false);
        policy.expect_remaining_time().returning(|_| None);
        policy.expect_on_error().never();
        let options = {
            let mut options = idempotent();
            options.set_retry_policy(policy);
            options
        };
        let response = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, options)
            .await;
        let err = response.expect_err("a single attempt is made");
        assert_eq!(err.http_status_code(), Some(transient().0.as_u16()));
        Ok(())
    }

    #[tokio::test]
    async fn retry_loop_logs_each_attempt() -> Result<()> {
        let capture = Capture::default();
        let writer = capture.clone();
        let _guard = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .set_default();

        let server = start(vec![transient(), transient(), success()]);
        let client = ReqwestClient::new(test_config(&server)).await?;
        let builder = client.builder(reqwest::Method::GET, "/retry");
        let options = {
            let mut options = idempotent();
            options.set_retry_policy(DefaultRetryPolicy.with_attempt_limit(5));
            options
        };
        let _ = client
            .execute::<serde_json::Value, serde_json::Value>(builder, None, options)
            .await?;

        let contents = capture.contents();
        assert_eq!(str::matches(contents.as_str(), "sending request").count(), 3, "{contents}");
        assert!(contents.contains("/20190325/retry"), "{contents}");
        Ok(())
    }

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Capture {
        fn contents(&self) -> String {
            let buffer = self.0.lock().expect("buffer lock is never poisoned");
            String::from_utf8_lossy(&buffer).into_owned()
        }
    }

    impl std::io::Write for Capture {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let mut buffer = self.0.lock().expect("buffer lock is never poisoned");
            buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    fn idempotent() -> RequestOptions {
        let mut options = RequestOptions::default();
        options.set_backoff_policy(test_backoff());
        options.set_idempotency(true);
        options
    }

    fn success() -> (StatusCode, String) {
        let response = json!({
            "lifecycleState": "ACTIVE"
        });
        (StatusCode::OK, response.to_string())
    }

    fn transient() -> (StatusCode, String) {
        let error = json!({
            "code": "InternalServerError",
            "message": "try-again",
        });
        (StatusCode::INTERNAL_SERVER_ERROR, error.to_string())
    }

    fn conflict() -> (StatusCode, String) {
        let error = json!({
            "code": "IncorrectState",
            "message": "the resource is being updated",
        });
        (StatusCode::CONFLICT, error.to_string())
    }

    fn permanent() -> (StatusCode, String) {
        let error = json!({
            "code": "InvalidParameter",
            "message": "uh-oh",
        });
        (StatusCode::BAD_REQUEST, error.to_string())
    }

    fn test_config(server: &Server) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.endpoint = Some(format!("http://{}/20190325", server.addr()));
        config.signer = Some(gax::signer::anonymous::new());
        config
    }

    fn test_backoff() -> impl BackoffPolicy {
        ExponentialBackoffBuilder::new()
            .with_initial_delay(Duration::from_millis(1))
            .with_maximum_delay(Duration::from_millis(1))
            .clamp()
    }

    fn start(responses: Vec<(StatusCode, String)>) -> Server {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/20190325/retry"))
                .times(responses.len())
                .respond_with(cycle(
                    responses
                        .into_iter()
                        .map(|(status, body)| to_responder(status, body))
                        .collect(),
                )),
        );
        server
    }

    fn to_responder(status: StatusCode, response: String) -> Box<dyn Responder> {
        Box::new(
            status_code(status.as_u16())
                .insert_header("Content-Type", "application/json")
                .body(response),
        )
    }
}
