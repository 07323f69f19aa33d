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

//! Wire the provider credentials into the Guard deployment.
//!
//! The installer renders a `Deployment` for the webhook, and then gives each
//! configured identity provider a chance to patch it. The Google provider:
//!
//! * creates a `Secret` with the service account key,
//! * mounts that secret in the first container,
//! * exposes the OAuth2 client secret, from the pre-provisioned
//!   `google-oidc-credentials` secret, as `GOOGLE_CLIENT_SECRET`,
//! * and passes the matching `--google.*` flags to the webhook.

use crate::Result;
use crate::constants::{
    ADMIN_EMAIL_FLAG, AUTH_MOUNT_PATH, AUTH_SECRET_NAME, AUTH_VOLUME_MODE, CLIENT_ID_FLAG,
    CLIENT_SECRET_VAR, MOUNTED_SA_JSON_FILE, OIDC_SECRET_KEY, OIDC_SECRET_NAME, SA_JSON_FILE_FLAG,
    SA_JSON_KEY,
};
use crate::credentials::read_key_file;
use crate::errors::Error;
use crate::options::Options;
use k8s_openapi::ByteString;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{
    EnvVar, EnvVarSource, Secret, SecretKeySelector, SecretVolumeSource, Volume, VolumeMount,
};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use std::collections::BTreeMap;

/// An object created alongside the patched deployment.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
#[non_exhaustive]
pub enum ExtraObject {
    Secret(Secret),
}

impl ExtraObject {
    /// Returns the secret, if this object is a secret.
    pub fn as_secret(&self) -> Option<&Secret> {
        match self {
            Self::Secret(s) => Some(s),
        }
    }
}

/// The result of patching a deployment.
#[derive(Clone, Debug, PartialEq)]
pub struct Patch {
    /// The patched deployment.
    pub deployment: Deployment,
    /// Objects that must be applied together with `deployment`.
    pub objects: Vec<ExtraObject>,
}

/// Patches the webhook deployment for an identity provider.
pub trait DeploymentPatcher {
    /// Returns a patched copy of `deployment`, and the objects it needs.
    ///
    /// The input is not modified. Its pod template must have at least one
    /// container; the first container is the webhook.
    fn apply(&self, deployment: &Deployment) -> Result<Patch>;
}

impl DeploymentPatcher for Options {
    fn apply(&self, deployment: &Deployment) -> Result<Patch> {
        // Read the key again, the options may have never been configured.
        let sa = read_key_file(&self.service_account_json_file)?;

        let auth_secret = Secret {
            metadata: ObjectMeta {
                name: Some(AUTH_SECRET_NAME.to_string()),
                namespace: deployment.metadata.namespace.clone(),
                labels: deployment.metadata.labels.clone(),
                ..Default::default()
            },
            data: Some(BTreeMap::from([(SA_JSON_KEY.to_string(), ByteString(sa))])),
            ..Default::default()
        };

        let mut deployment = deployment.clone();
        let pod_spec = deployment
            .spec
            .as_mut()
            .and_then(|s| s.template.spec.as_mut())
            .ok_or_else(|| Error::invalid_deployment("the deployment has no pod template spec"))?;
        let Some(container) = pod_spec.containers.first_mut() else {
            return Err(Error::invalid_deployment(
                "the pod template must have at least one container",
            ));
        };

        container
            .volume_mounts
            .get_or_insert_with(Vec::new)
            .push(VolumeMount {
                name: AUTH_SECRET_NAME.to_string(),
                mount_path: AUTH_MOUNT_PATH.to_string(),
                ..Default::default()
            });

        container.env.get_or_insert_with(Vec::new).push(EnvVar {
            name: CLIENT_SECRET_VAR.to_string(),
            value_from: Some(EnvVarSource {
                secret_key_ref: Some(SecretKeySelector {
                    name: Some(OIDC_SECRET_NAME.to_string()),
                    key: OIDC_SECRET_KEY.to_string(),
                    ..Default::default()
                }),
                ..Default::default()
            }),
            ..Default::default()
        });

        let args = container.args.get_or_insert_with(Vec::new);
        if !self.client_id.is_empty() {
            args.push(format!("--{CLIENT_ID_FLAG}={}", self.client_id));
        }
        if !self.service_account_json_file.is_empty() {
            args.push(format!("--{SA_JSON_FILE_FLAG}={MOUNTED_SA_JSON_FILE}"));
        }
        if !self.admin_email.is_empty() {
            args.push(format!("--{ADMIN_EMAIL_FLAG}={}", self.admin_email));
        }

        pod_spec.volumes.get_or_insert_with(Vec::new).push(Volume {
            name: AUTH_SECRET_NAME.to_string(),
            secret: Some(SecretVolumeSource {
                secret_name: Some(AUTH_SECRET_NAME.to_string()),
                default_mode: Some(AUTH_VOLUME_MODE),
                ..Default::default()
            }),
            ..Default::default()
        });

        tracing::debug!(
            deployment = deployment.metadata.name.as_deref().unwrap_or_default(),
            secret = AUTH_SECRET_NAME,
            "patched deployment for the Google provider"
        );
        Ok(Patch {
            deployment,
            objects: vec![ExtraObject::Secret(auth_secret)],
        })
    }
}
