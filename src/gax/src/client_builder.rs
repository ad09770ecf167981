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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to override the endpoint, the region, or the request
//! signer. The client library uses a generic builder type to provide such
//! functionality. The types in this module implement the client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client for a region.
//!
//! ```
//! # use datacatalog_gax::client_builder::examples;
//! # use datacatalog_gax::client_builder::Result;
//! # use datacatalog_gax::signer::anonymous;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_region("us-ashburn-1")
//!     .with_signer(anonymous::new())
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use datacatalog_gax::client_builder::examples;
//! # use datacatalog_gax::client_builder::Result;
//! # use datacatalog_gax::signer::anonymous;
//! # tokio_test::block_on(async {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("http://localhost:8080/20190325")
//!     .with_signer(anonymous::new())
//!     .build().await?;
//! # Result::<()>::Ok(()) });
//! ```

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use datacatalog_gax::client_builder::examples;
/// use datacatalog_gax::client_builder::Error as Error;
/// use examples::Client; // Placeholder for examples
/// # tokio_test::block_on(async {
/// let client = match Client::builder().with_region("us-ashburn-1").build().await {
///     Ok(c) => c,
///     Err(e) if e.is_signer() => {
///         println!("configure a request signer: {e}");
///         return Err(e);
///     }
///     Err(e) => {
///         println!("error during client initialization {e}");
///         return Err(e);
///     }
/// };
/// # Ok::<(), Error>(()) });
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client has no usable request signer.
    pub fn is_signer(&self) -> bool {
        matches!(&self.0, ErrorKind::Signer(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// If true, the client has neither an endpoint nor a region.
    pub fn is_endpoint(&self) -> bool {
        matches!(&self.0, ErrorKind::Endpoint(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn signer<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Signer(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn endpoint<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Endpoint(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("could not configure the request signer")]
    Signer(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
    #[error("could not determine the service endpoint")]
    Endpoint(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A generic builder for clients.
///
/// Applications obtain a builder with the correct generic types using the
/// `builder()` method on each client:
/// ```
/// # use datacatalog_gax::client_builder::examples;
/// use examples::Client; // Placeholder for examples
/// let builder = Client::builder();
/// ```
///
/// The builder offers several methods to configure the client, and a
/// `.build()` method to construct the client:
/// ```
/// # use datacatalog_gax::client_builder::examples;
/// # use datacatalog_gax::client_builder::Result;
/// # use datacatalog_gax::signer::anonymous;
/// # tokio_test::block_on(async {
/// use examples::Client; // Placeholder for examples
/// let client = Client::builder()
///     .with_region("eu-frankfurt-1")
///     .with_signer(anonymous::new())
///     .with_tracing()
///     .build().await?;
/// # Result::<()>::Ok(()) });
/// ```
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, Sg> {
    config: internal::ClientConfig<Sg>,
    factory: F,
}

impl<F, Sg> ClientBuilder<F, Sg> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Signer = Sg>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// The endpoint must include the API version path, e.g.
    /// `https://datacatalog.us-ashburn-1.oci.oraclecloud.com/20190325`. An
    /// explicit endpoint takes precedence over the region.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Sets the region.
    ///
    /// The client computes the default endpoint for the region.
    pub fn with_region<V: Into<String>>(mut self, v: V) -> Self {
        self.config.region = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client library can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the request signer.
    ///
    /// The service authenticates each request using a set of signing headers.
    /// The client calls the signer before each attempt.
    ///
    /// ```
    /// # use datacatalog_gax::client_builder::examples;
    /// # use datacatalog_gax::client_builder::Result;
    /// # use datacatalog_gax::signer::static_headers;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// let signer = static_headers::Builder::new()
    ///     .with_header("authorization", "Bearer test-only")
    ///     .build()
    ///     .map_err(datacatalog_gax::client_builder::Error::signer)?;
    /// let client = Client::builder()
    ///     .with_endpoint("http://localhost:8080/20190325")
    ///     .with_signer(signer)
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_signer<T: Into<Sg>>(mut self, v: T) -> Self {
        self.config.signer = Some(v.into());
        self
    }

    /// Configure the retry policy.
    ///
    /// The client library can automatically retry operations that fail. The
    /// retry policy controls what errors are considered retryable, sets limits
    /// on the number of attempts or the time trying to make attempts.
    ///
    /// ```
    /// # use datacatalog_gax::client_builder::examples;
    /// # use datacatalog_gax::client_builder::Result;
    /// # use datacatalog_gax::signer::anonymous;
    /// # tokio_test::block_on(async {
    /// use examples::Client; // Placeholder for examples
    /// use datacatalog_gax::retry_policy::{DefaultRetryPolicy, RetryPolicyExt};
    /// let client = Client::builder()
    ///     .with_region("us-ashburn-1")
    ///     .with_signer(anonymous::new())
    ///     .with_retry_policy(DefaultRetryPolicy.with_attempt_limit(3))
    ///     .build().await?;
    /// # Result::<()>::Ok(()) });
    /// ```
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.config.retry_policy = Some(v.into().into());
        self
    }

    /// Configure the retry backoff policy.
    ///
    /// The backoff policy controls how long to wait in between retry attempts.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.backoff_policy = Some(v.into().into());
        self
    }

    /// Prepends a prefix to the `user-agent` header of every request.
    pub fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.config.user_agent = Some(v.into());
        self
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        type Signer;
        fn build(
            self,
            config: internal::ClientConfig<Self::Signer>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, Sg, C>(factory: F) -> super::ClientBuilder<F, Sg>
    where
        F: ClientFactory<Client = C, Signer = Sg>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// The default configuration works for most applications, once they set
    /// a region and a signer. Some applications may need to override the
    /// default endpoint, the retry policies, and/or other behaviors of the
    /// client.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<Sg> {
        pub endpoint: Option<String>,
        pub region: Option<String>,
        pub signer: Option<Sg>,
        pub tracing: bool,
        pub user_agent: Option<String>,
        pub retry_policy: Option<Arc<dyn RetryPolicy>>,
        pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    }

    impl<Sg> std::default::Default for ClientConfig<Sg> {
        fn default() -> Self {
            Self {
                endpoint: None,
                region: None,
                signer: None,
                tracing: false,
                user_agent: None,
                retry_policy: None,
                backoff_policy: None,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.

    type Config = super::internal::ClientConfig<crate::signer::Signer>;
    use super::Result;

    /// A client type for use in examples.
    ///
    /// This type is used in examples as a placeholder for a real client. It
    /// does not work, but illustrates how to use `ClientBuilder`.
    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        /// Create a builder to initialize new instances of this client.
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: Config) -> Result<Self> {
            if config.signer.is_none() {
                return Err(super::Error::signer("no signer configured"));
            }
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, crate::signer::Signer>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Signer = crate::signer::Signer;
            type Client = super::Client;
            async fn build(self, config: super::Config) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

}
