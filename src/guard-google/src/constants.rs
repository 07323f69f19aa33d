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

/// Path to the service account key file.
pub const SA_JSON_FILE_FLAG: &str = "google.sa-json-file";
/// Email of the G Suite administrator to impersonate.
pub const ADMIN_EMAIL_FLAG: &str = "google.admin-email";
/// OAuth2 application client ID.
pub const CLIENT_ID_FLAG: &str = "google.client-id";
/// OAuth2 application client secret.
pub const CLIENT_SECRET_FLAG: &str = "google.client-secret";

// https://developers.google.com/identity/protocols/OAuth2InstalledApp
pub const CLIENT_ID_VAR: &str = "GOOGLE_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "GOOGLE_CLIENT_SECRET";

/// View groups on your domain.
pub const DIRECTORY_GROUP_READONLY_SCOPE: &str =
    "https://www.googleapis.com/auth/admin.directory.group.readonly";
/// Used when the service account key does not name a token endpoint.
pub(crate) const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
/// The only key `type` accepted for delegation.
pub(crate) const SERVICE_ACCOUNT_KEY_TYPE: &str = "service_account";

/// Name of the generated secret, and of the volume and mount using it.
pub const AUTH_SECRET_NAME: &str = "guard-google-auth";
/// Data key of the service account key in [AUTH_SECRET_NAME].
pub const SA_JSON_KEY: &str = "sa.json";
pub const AUTH_MOUNT_PATH: &str = "/etc/guard/auth/google";
/// Where the webhook finds the key once [AUTH_SECRET_NAME] is mounted.
pub const MOUNTED_SA_JSON_FILE: &str = "/etc/guard/auth/google/sa.json";
/// `r-xr-xr-x`
pub(crate) const AUTH_VOLUME_MODE: i32 = 0o555;

/// Pre-provisioned secret holding the OAuth2 client secret. The installer
/// never creates it.
pub const OIDC_SECRET_NAME: &str = "google-oidc-credentials";
pub const OIDC_SECRET_KEY: &str = "client-secret";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mounted_file_is_inside_mount() {
        assert_eq!(
            MOUNTED_SA_JSON_FILE,
            format!("{AUTH_MOUNT_PATH}/{SA_JSON_KEY}")
        );
    }
}
