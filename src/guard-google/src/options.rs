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

//! Settings for the Google identity provider.

use crate::Result;
use crate::constants::{
    ADMIN_EMAIL_FLAG, CLIENT_ID_FLAG, CLIENT_ID_VAR, CLIENT_SECRET_FLAG, CLIENT_SECRET_VAR,
    DIRECTORY_GROUP_READONLY_SCOPE, SA_JSON_FILE_FLAG,
};
use crate::credentials::read_key_file;
use crate::credentials::service_account::DelegatedCredential;
use crate::errors::Error;
use crate::flags::{FlagSet, FlagValues};

/// The Google identity provider settings.
///
/// The lifecycle is: create with [new][Options::new], register and load the
/// command-line flags, [validate][Options::validate], then
/// [configure][Options::configure] before using the
/// [credential][Options::credential].
///
/// `validate()` and `configure()` are independent, neither requires the other
/// to run first.
#[derive(Clone, Default)]
pub struct Options {
    /// Path to the Google service account json file.
    pub service_account_json_file: String,
    /// Email of the G Suite administrator the service account impersonates.
    pub admin_email: String,
    /// OAuth2 application client ID.
    pub client_id: String,
    /// OAuth2 application client secret.
    pub client_secret: String,
    credential: Option<DelegatedCredential>,
}

impl Options {
    /// Creates options with the OAuth2 client seeded from the
    /// `GOOGLE_CLIENT_ID` and `GOOGLE_CLIENT_SECRET` environment variables.
    ///
    /// Unset variables, or values that are not valid unicode, leave the field
    /// empty.
    pub fn new() -> Self {
        Self {
            client_id: std::env::var(CLIENT_ID_VAR).unwrap_or_default(),
            client_secret: std::env::var(CLIENT_SECRET_VAR).unwrap_or_default(),
            ..Default::default()
        }
    }

    /// Registers the provider flags, using the current values as defaults.
    pub fn add_flags<F: FlagSet>(&self, fs: F) -> F {
        fs.string_flag(
            SA_JSON_FILE_FLAG,
            &self.service_account_json_file,
            "Path to Google service account json file",
        )
        .string_flag(
            ADMIN_EMAIL_FLAG,
            &self.admin_email,
            "Email of G Suite administrator",
        )
        .string_flag(
            CLIENT_ID_FLAG,
            &self.client_id,
            "OAuth2 application client ID to use",
        )
        .secret_flag(
            CLIENT_SECRET_FLAG,
            &self.client_secret,
            "OAuth2 application client secret to use",
        )
    }

    /// Copies the parsed flag values into the options.
    ///
    /// Fields whose flag has no value keep their current value.
    pub fn load_flags<V: FlagValues>(&mut self, values: &V) {
        let fields = [
            (SA_JSON_FILE_FLAG, &mut self.service_account_json_file),
            (ADMIN_EMAIL_FLAG, &mut self.admin_email),
            (CLIENT_ID_FLAG, &mut self.client_id),
            (CLIENT_SECRET_FLAG, &mut self.client_secret),
        ];
        for (name, field) in fields {
            if let Some(v) = values.string_value(name) {
                *field = v;
            }
        }
    }

    /// Returns one error per empty setting.
    ///
    /// The errors are in declaration order, and the result is empty if and
    /// only if all the settings are present.
    pub fn validate(&self) -> Vec<Error> {
        [
            (SA_JSON_FILE_FLAG, &self.service_account_json_file),
            (ADMIN_EMAIL_FLAG, &self.admin_email),
            (CLIENT_SECRET_FLAG, &self.client_secret),
            (CLIENT_ID_FLAG, &self.client_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_empty())
        .map(|(name, _)| Error::missing_field(name))
        .collect()
    }

    /// Loads the service account key and derives the delegated credential.
    ///
    /// Does nothing if no service account key is set, delegation is
    /// optional. The credential impersonates `admin_email`, even when it is
    /// empty. Such a credential fails when it is used to get a token.
    pub fn configure(&mut self) -> Result<()> {
        if self.service_account_json_file.is_empty() {
            tracing::debug!("no service account key, skipping delegation");
            return Ok(());
        }
        let path = self.service_account_json_file.as_str();
        let sa = read_key_file(path)?;
        let credential = DelegatedCredential::from_json(&sa, &[DIRECTORY_GROUP_READONLY_SCOPE])
            .map_err(|e| Error::parsing(path, e))?
            .with_subject(self.admin_email.as_str());
        tracing::info!(
            email = credential.email(),
            subject = credential.subject(),
            "configured delegated credential"
        );
        self.credential = Some(credential);
        Ok(())
    }

    /// The delegated credential, available after a successful
    /// [configure][Options::configure] with a service account key.
    pub fn credential(&self) -> Option<&DelegatedCredential> {
        self.credential.as_ref()
    }
}

impl std::fmt::Debug for Options {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let secret = if self.client_secret.is_empty() {
            ""
        } else {
            "[censored]"
        };
        f.debug_struct("Options")
            .field("service_account_json_file", &self.service_account_json_file)
            .field("admin_email", &self.admin_email)
            .field("client_id", &self.client_id)
            .field("client_secret", &secret)
            .field("credential", &self.credential)
            .finish()
    }
}
