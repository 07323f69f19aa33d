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

use anyhow::bail;
use clap::Parser;
use std::path::PathBuf;

/// Configuration options for the installer.
///
/// The `--google.*` flags are not listed here, they are registered by the
/// provider itself.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = super::DESCRIPTION)]
pub struct Args {
    /// The Guard deployment manifest, in JSON format.
    #[arg(long)]
    pub deployment: PathBuf,

    /// The maximum level for log messages, written to stderr.
    #[arg(long, default_value_t = tracing::Level::INFO)]
    pub log_level: tracing::Level,
}

impl Args {
    /// Validates the arguments after parsing.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.deployment.is_file() {
            bail!(
                "the deployment manifest {} is not a file",
                self.deployment.display()
            )
        }
        Ok(())
    }
}
