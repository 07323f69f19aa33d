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

//! Patch a Guard deployment to use the Google identity provider.

mod args;

use anyhow::{Context, bail};
use args::Args;
use clap::{CommandFactory, FromArgMatches};
use guard_google::{DeploymentPatcher, Options};
use k8s_openapi::api::apps::v1::Deployment;
use serde_json::json;

const DESCRIPTION: &str = concat!(
    "This program reads a Guard deployment manifest and prints the objects",
    " needed to run it with the Google identity provider: the service account",
    " secret and the patched deployment, as a Kubernetes List.",
);

fn main() -> anyhow::Result<()> {
    let provider = Options::new();
    let matches = provider.add_flags(Args::command()).get_matches();
    let args = Args::from_arg_matches(&matches)?;
    args.validate()?;
    enable_tracing(&args);

    let mut options = provider;
    options.load_flags(&matches);
    tracing::info!("Configuration: {args:?} {options:?}");

    let list = run(&args, options)?;
    println!("{}", serde_json::to_string_pretty(&list)?);
    Ok(())
}

fn run(args: &Args, mut options: Options) -> anyhow::Result<serde_json::Value> {
    let errors = options.validate();
    if !errors.is_empty() {
        for e in &errors {
            tracing::error!("{e}");
        }
        let errors = errors.iter().map(|e| e.to_string()).collect::<Vec<_>>();
        bail!("invalid Google provider options: {}", errors.join(", "));
    }
    options.configure()?;

    let contents = std::fs::read(&args.deployment)
        .with_context(|| format!("cannot read {}", args.deployment.display()))?;
    let deployment = serde_json::from_slice::<Deployment>(&contents)
        .with_context(|| format!("cannot parse {}", args.deployment.display()))?;
    let patch = options.apply(&deployment)?;
    tracing::info!(
        "patched deployment with {} extra object(s)",
        patch.objects.len()
    );

    let mut items = patch
        .objects
        .iter()
        .map(serde_json::to_value)
        .collect::<Result<Vec<_>, _>>()?;
    items.push(serde_json::to_value(&patch.deployment)?);
    Ok(json!({
        "apiVersion": "v1",
        "kind": "List",
        "items": items,
    }))
}

fn enable_tracing(args: &Args) {
    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_writer(std::io::stderr)
        .with_max_level(args.log_level)
        .finish();

    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("cannot install the tracing subscriber: {e}");
    }
}
