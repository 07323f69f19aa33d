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

//! Errors created while validating, configuring, or applying the provider.

pub(crate) type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for the Google provider [Options].
///
/// All errors are returned as values. Whether they are fatal is up to the
/// caller, typically the startup code of the webhook or the installer.
///
/// [Options]: crate::Options
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// A required setting was empty.
    pub fn is_missing_field(&self) -> bool {
        matches!(self.0, ErrorKind::MissingField(_))
    }

    /// A problem finding or reading the service account key file.
    pub fn is_loading(&self) -> bool {
        matches!(self.0, ErrorKind::Loading { .. })
    }

    /// The service account key could not be turned into a delegated
    /// credential.
    pub fn is_parsing(&self) -> bool {
        matches!(self.0, ErrorKind::Parsing { .. })
    }

    /// The deployment cannot receive the provider patch.
    pub fn is_invalid_deployment(&self) -> bool {
        matches!(self.0, ErrorKind::InvalidDeployment(_))
    }

    /// The flag name of the missing setting, if this is a missing field error.
    pub fn field(&self) -> Option<&'static str> {
        match self.0 {
            ErrorKind::MissingField(field) => Some(field),
            _ => None,
        }
    }

    /// A required setting was empty.
    pub(crate) fn missing_field(field: &'static str) -> Error {
        Error(ErrorKind::MissingField(field))
    }

    /// Create an error representing problems reading the service account key
    /// file at `path`.
    pub(crate) fn loading<T>(path: &str, source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Loading {
            path: path.to_string(),
            source: source.into(),
        })
    }

    /// A problem parsing the service account key file at `path`.
    pub(crate) fn parsing<T>(path: &str, source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error(ErrorKind::Parsing {
            path: path.to_string(),
            source: source.into(),
        })
    }

    pub(crate) fn invalid_deployment(reason: &'static str) -> Error {
        Error(ErrorKind::InvalidDeployment(reason))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("{0} must be non-empty")]
    MissingField(&'static str),
    #[error("failed to load service account json file {path}: {source}")]
    Loading {
        path: String,
        #[source]
        source: BoxError,
    },
    #[error("failed to create JWT config from service account json file {path}: {source}")]
    Parsing {
        path: String,
        #[source]
        source: BoxError,
    },
    #[error("invalid deployment: {0}")]
    InvalidDeployment(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn constructors() {
        let error = Error::missing_field("google.admin-email");
        assert!(error.is_missing_field(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert_eq!(error.field(), Some("google.admin-email"));
        assert_eq!(error.to_string(), "google.admin-email must be non-empty");

        let error = Error::loading("/tmp/sa.json", "test message");
        assert!(error.is_loading(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("/tmp/sa.json"), "{error}");
        assert!(error.to_string().contains("test message"), "{error}");
        assert_eq!(error.field(), None);

        let error = Error::parsing("/tmp/sa.json", "test message");
        assert!(error.is_parsing(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("/tmp/sa.json"), "{error}");
        assert!(error.to_string().contains("test message"), "{error}");

        let error = Error::invalid_deployment("no containers");
        assert!(error.is_invalid_deployment(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(error.to_string().contains("no containers"), "{error}");
    }

    #[test]
    fn loading_preserves_io_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let error = Error::loading("missing.json", io);
        let source = error.source().expect("loading errors have a source");
        let io = source
            .downcast_ref::<std::io::Error>()
            .expect("the source is the original I/O error");
        assert_eq!(io.kind(), std::io::ErrorKind::NotFound);
    }
}
