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

use super::ServiceError;
use crate::response::OPC_REQUEST_ID;
use crate::signer::SigningError;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The core error returned by the client library.
///
/// The client reports errors from multiple sources. For example, the service
/// may return an error, the transport may be unable to create the necessary
/// connection to make a request, the request may timeout before a response is
/// received, the retry policy may be exhausted, or the library may be unable
/// to format the request due to invalid or missing application inputs.
///
/// Most applications will just return the error or log it, without any further
/// action. However, some applications may need to interrogate the error
/// details. This type offers a series of predicates to determine the error
/// kind. The type also offers accessors to query the most common error details.
/// Applications can query the error [source][std::error::Error::source] for
/// deeper information.
///
/// # Example
/// ```
/// use datacatalog_gax::error::Error;
/// match example_function() {
///     Err(e) if e.http_status_code() == Some(404) => {
///         println!("not found {e}, request id {:?}", e.opc_request_id());
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     // ... details omitted ...
///     # use datacatalog_gax::error::ServiceError;
///     # Err(Error::service_with_http_metadata(
///     #     ServiceError::default().set_code("NotAuthorizedOrNotFound"), Some(404), None))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by the service.
    ///
    /// # Example
    /// ```
    /// use datacatalog_gax::error::{Error, ServiceError};
    /// let details = ServiceError::default().set_code("IncorrectState").set_message("busy");
    /// let error = Error::service(details.clone());
    /// assert_eq!(error.service_error(), Some(&details));
    /// ```
    pub fn service(error: ServiceError) -> Self {
        Self::service_with_http_metadata(error, None, None)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Create service errors including transport metadata.
    #[doc(hidden)]
    pub fn service_with_http_metadata(
        error: ServiceError,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status_code,
            headers,
            error,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// The error document returned by the service, if any.
    pub fn service_error(&self) -> Option<&ServiceError> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.error),
            _ => None,
        }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use datacatalog_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// This is always a client-side generated error. Note that the request may
    /// or may not have started, and it may or may not complete in the service.
    /// If the request mutates any state in the service, it may or may not be
    /// safe to attempt the request again.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing an exhausted policy.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use datacatalog_gax::error::Error;
    /// let error = Error::exhausted("too many retry attempts");
    /// assert!(error.is_exhausted());
    /// assert!(error.source().is_some());
    /// ```
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Exhausted,
            source: Some(source.into()),
        }
    }

    /// The request could not complete before the retry policy expired.
    ///
    /// This is always a client-side generated error, but it may be the result
    /// of multiple errors received from the service.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a deserialization problem.
    #[doc(hidden)]
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// This is always a client-side generated error. The request completed in
    /// the service, but the response does not match the type requested by the
    /// application.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Creates an error representing a serialization problem.
    #[doc(hidden)]
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always a client-side generated error, generated before the
    /// request is made. The request body, a query parameter, or a header value
    /// cannot be represented on the wire.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot bind the request to the operation.
    ///
    /// This indicates the request is missing required parameters, the
    /// parameters do not have a valid value, or the request sets parameters
    /// not supported by the operation.
    #[doc(hidden)]
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// If true, the request was not sent because it does not match the
    /// operation declaration.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a problem in the application. A required
    /// parameter in the request builder was not initialized, it was set to a
    /// value outside the allowed set, or the parameter is not supported by the
    /// operation. The [source][std::error::Error::source] is a
    /// [BindingError][crate::error::binding::BindingError] with the details.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// Cannot create the signing headers.
    #[doc(hidden)]
    pub fn authentication(source: SigningError) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// Could not sign the request before sending it.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a misconfigured signer. Consult the
    /// documentation for the [RequestSigner][crate::signer::RequestSigner]
    /// implementation configured in the client.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A non-2xx HTTP response that does not contain a service error document.
    #[doc(hidden)]
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: None,
        }
    }

    /// Not part of the public API, subject to change without notice.
    ///
    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include: a broken connection after the request is sent, or
    /// any HTTP error that did not include a status code or other headers.
    #[doc(hidden)]
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// A problem in the transport layer without a full HTTP response.
    ///
    /// # Troubleshooting
    ///
    /// This indicates a problem completing the request, such as a broken
    /// connection or a proxy restart. Most often, the solution is to use the
    /// right retry policy.
    pub fn is_io(&self) -> bool {
        matches!(
            &self.kind,
            ErrorKind::Transport(d) if matches!(**d, TransportDetails {
                status_code: None,
                headers: None,
                payload: None,
            })
        )
    }

    /// A problem reported by the transport layer.
    ///
    /// This includes any non-2xx response, with or without a service error
    /// document, and any I/O problem.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport(_))
    }

    /// The HTTP status code, if any, associated with this error.
    ///
    /// # Example
    /// ```
    /// use datacatalog_gax::error::{Error, ServiceError};
    /// let e = Error::service_with_http_metadata(ServiceError::default(), Some(404), None);
    /// assert_eq!(e.http_status_code(), Some(404));
    /// ```
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.status_code,
            ErrorKind::Service(d) => d.status_code,
            _ => None,
        }
    }

    /// The headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.headers.as_ref(),
            ErrorKind::Service(d) => d.headers.as_ref(),
            _ => None,
        }
    }

    /// The payload, if any, associated with this error.
    ///
    /// Only non-2xx responses without a service error document retain the
    /// raw payload.
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// The service-assigned request id, if the response included one.
    ///
    /// Include this value when contacting support about a failed request.
    pub fn opc_request_id(&self) -> Option<&str> {
        self.http_headers()
            .and_then(|h| h.get(OPC_REQUEST_ID))
            .and_then(|v| v.to_str().ok())
    }

    /// The error was generated before the request was sent and is transient.
    pub(crate) fn is_transient_and_before_send(&self) -> bool {
        if !matches!(&self.kind, ErrorKind::Authentication) {
            return false;
        }
        self.source
            .as_ref()
            .and_then(|e| e.downcast_ref::<SigningError>())
            .map(|e| e.is_transient())
            .unwrap_or(false)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot bind the request to the operation: {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Authentication, Some(e)) => {
                write!(f, "cannot create the signing headers {e}")
            }
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the request exceeded the request deadline {e}")
            }
            (ErrorKind::Exhausted, Some(e)) => {
                write!(f, "{e}")
            }
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => {
                write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.error.code, d.error.message
                )?;
                if let Some(id) = self.opc_request_id() {
                    write!(f, " (opc-request-id: {id})")?;
                }
                Ok(())
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Authentication,
    Timeout,
    Exhausted,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, &self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => {
                write!(f, "the transport reports an error: {source}")
            }
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    error: ServiceError,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::binding::BindingError;
    use http::HeaderValue;
    use std::error::Error as StdError;

    #[test]
    fn service() {
        let details = ServiceError::default()
            .set_code("NotAuthorizedOrNotFound")
            .set_message("not there");
        let error = Error::service(details.clone());
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.service_error(), Some(&details));
        assert!(error.to_string().contains("not there"), "{error}");
        assert!(
            error.to_string().contains("NotAuthorizedOrNotFound"),
            "{error}"
        );
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.opc_request_id().is_none(), "{error:?}");
        assert!(!error.is_transient_and_before_send(), "{error:?}");
    }

    #[test]
    fn service_with_metadata() {
        let mut headers = HeaderMap::new();
        headers.insert(OPC_REQUEST_ID, HeaderValue::from_static("req-123"));
        let details = ServiceError::default().set_code("IncorrectState");
        let error = Error::service_with_http_metadata(details, Some(409), Some(headers.clone()));
        assert_eq!(error.http_status_code(), Some(409));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(error.opc_request_id(), Some("req-123"));
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.to_string().contains("req-123"), "{error}");
    }

    #[test]
    fn timeout() {
        let error = Error::timeout("simulated");
        assert!(error.is_timeout(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("simulated"), "{error}");
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.service_error().is_none(), "{error:?}");
    }

    #[test]
    fn exhausted() {
        let inner = Error::timeout("attempt timeout");
        let error = Error::exhausted(inner);
        assert!(error.is_exhausted(), "{error:?}");
        let got = error.source().and_then(|e| e.downcast_ref::<Error>());
        assert!(matches!(got, Some(e) if e.is_timeout()), "{error:?}");
    }

    #[test]
    fn binding() {
        let error = Error::binding(BindingError::MissingBody {
            operation: "CreateCatalog",
        });
        assert!(error.is_binding(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<BindingError>());
        assert!(
            matches!(got, Some(BindingError::MissingBody { operation }) if *operation == "CreateCatalog"),
            "{error:?}"
        );
        assert!(error.to_string().contains("CreateCatalog"), "{error}");
    }

    #[test]
    fn ser_and_deser() {
        let error = Error::ser("bad body");
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        let error = Error::deser("bad response");
        assert!(error.is_deserialization(), "{error:?}");
        assert!(!error.is_serialization(), "{error:?}");
    }

    #[test]
    fn authentication() {
        let error = Error::authentication(SigningError::from_msg(true, "try again"));
        assert!(error.is_authentication(), "{error:?}");
        assert!(error.is_transient_and_before_send(), "{error:?}");

        let error = Error::authentication(SigningError::from_msg(false, "bad key"));
        assert!(error.is_authentication(), "{error:?}");
        assert!(!error.is_transient_and_before_send(), "{error:?}");
    }

    #[test]
    fn http() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", HeaderValue::from_static("text/plain"));
        let error = Error::http(502, headers.clone(), bytes::Bytes::from_static(b"bad gateway"));
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(502));
        assert_eq!(error.http_headers(), Some(&headers));
        assert_eq!(
            error.http_payload(),
            Some(&bytes::Bytes::from_static(b"bad gateway"))
        );
        assert!(error.to_string().contains("[502]"), "{error}");
        assert!(error.to_string().contains("bad gateway"), "{error}");
    }

    #[test]
    fn io() {
        let error = Error::io("connection reset");
        assert!(error.is_io(), "{error:?}");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.to_string().contains("connection reset"), "{error}");
    }
}
