// Copyright 2025 Google LLC
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

//! Verify the client emits tracing spans when enabled.
//!
//! These tests run serially because they change the environment.

#[cfg(test)]
mod tests {
    use datacatalog::client::DataCatalog;
    use gax::signer::anonymous;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use scoped_env::ScopedEnv;
    use serde_json::{Value, json};
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::util::SubscriberInitExt;

    type Result<T> = anyhow::Result<T>;

    const LOGGING_VAR: &str = "DATACATALOG_RUST_LOGGING";

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

    fn start() -> Server {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path("GET", "/20190325/catalogs/c1"))
                .respond_with(
                    status_code(200)
                        .insert_header("opc-request-id", "req-traced")
                        .body(json!({"id": "c1"}).to_string()),
                ),
        );
        server
    }

    async fn get_catalog(client: &DataCatalog) -> Result<()> {
        let _ = client
            .get_catalog()
            .set_path_parameter("catalogId", "c1")
            .send::<Value>()
            .await?;
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn enabled_by_environment() -> Result<()> {
        let _e = ScopedEnv::set(LOGGING_VAR, "true");
        let capture = Capture::default();
        let writer = capture.clone();
        let _guard = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .set_default();

        let server = start();
        let client = DataCatalog::builder()
            .with_endpoint(format!("http://{}/20190325", server.addr()))
            .with_signer(anonymous::new())
            .build()
            .await?;
        get_catalog(&client).await?;

        let contents = capture.contents();
        assert!(contents.contains("datacatalog_request"), "{contents}");
        assert!(contents.contains("GetCatalog"), "{contents}");
        assert!(contents.contains("req-traced"), "{contents}");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn enabled_by_builder() -> Result<()> {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let capture = Capture::default();
        let writer = capture.clone();
        let _guard = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .set_default();

        let server = start();
        let client = DataCatalog::builder()
            .with_endpoint(format!("http://{}/20190325", server.addr()))
            .with_signer(anonymous::new())
            .with_tracing()
            .build()
            .await?;
        get_catalog(&client).await?;

        let contents = capture.contents();
        assert!(contents.contains("datacatalog_request"), "{contents}");
        Ok(())
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn disabled_by_default() -> Result<()> {
        let _e = ScopedEnv::remove(LOGGING_VAR);
        let capture = Capture::default();
        let writer = capture.clone();
        let _guard = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(move || writer.clone())
            .set_default();

        let server = start();
        let client = DataCatalog::builder()
            .with_endpoint(format!("http://{}/20190325", server.addr()))
            .with_signer(anonymous::new())
            .build()
            .await?;
        get_catalog(&client).await?;

        let contents = capture.contents();
        assert!(!contents.contains("datacatalog_request"), "{contents}");
        Ok(())
    }
}
