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

//! Guard authentication webhook - Google identity provider
//!
//! This crate turns the settings an administrator supplies for the Google
//! identity provider into two things:
//!
//! * A validated [Options] value. Once [configured][Options::configure], it
//!   holds a [DelegatedCredential] that impersonates a G Suite administrator
//!   using [domain-wide delegation], so the webhook can list the groups of a
//!   user through the Admin SDK Directory API.
//! * A [DeploymentPatcher] that rewrites the Guard `Deployment` so the running
//!   webhook finds the service account key, the OAuth2 client secret, and the
//!   matching command-line flags.
//!
//! Typical usage, at installation time:
//!
//! ```no_run
//! # use guard_google::{DeploymentPatcher, Options};
//! # use k8s_openapi::api::apps::v1::Deployment;
//! # fn sample(deployment: &Deployment) -> anyhow::Result<()> {
//! let command = Options::new().add_flags(clap::Command::new("installer"));
//! let matches = command.get_matches();
//! let mut options = Options::new();
//! options.load_flags(&matches);
//! if let Some(e) = options.validate().into_iter().next() {
//!     return Err(e.into());
//! }
//! options.configure()?;
//! let patch = options.apply(deployment)?;
//! println!("{} extra objects", patch.objects.len());
//! # Ok(()) }
//! ```
//!
//! [domain-wide delegation]: https://developers.google.com/admin-sdk/directory/v1/guides/delegation

pub mod errors;

/// Names shared between the flags, the environment, and the generated
/// Kubernetes objects.
pub mod constants;

/// Types to work with Google [Credentials].
///
/// [Credentials]: https://cloud.google.com/docs/authentication#credentials
pub mod credentials;

pub mod deployment;
pub mod flags;
pub mod options;

pub use credentials::service_account::DelegatedCredential;
pub use deployment::{DeploymentPatcher, ExtraObject, Patch};
pub use flags::{FlagSet, FlagValues};
pub use options::Options;

/// A `Result` alias where the `Err` case is `guard_google::errors::Error`.
pub type Result<T> = std::result::Result<T, crate::errors::Error>;
