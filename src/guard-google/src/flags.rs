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

//! Command-line flag registration.
//!
//! The provider does not depend on a particular flag parser. It registers its
//! flags through [FlagSet] and reads the parsed values back through
//! [FlagValues]. Both traits are implemented for [clap], which is what the
//! installer uses.

/// A collection of command-line flags that accepts string options.
///
/// Implementations consume and return `self` to fit builder-style parsers.
pub trait FlagSet: Sized {
    /// Registers a string flag named `name`.
    ///
    /// An empty `default` means the flag has no default value.
    fn string_flag(self, name: &'static str, default: &str, help: &'static str) -> Self;

    /// Registers a string flag whose default value is never displayed.
    ///
    /// Used for flags seeded from secrets, such as the OAuth2 client secret.
    fn secret_flag(self, name: &'static str, default: &str, help: &'static str) -> Self;
}

/// The parsed values of the flags registered through a [FlagSet].
pub trait FlagValues {
    /// Returns the value of `name`, or `None` if the flag is unknown or was
    /// not set and has no default.
    fn string_value(&self, name: &str) -> Option<String>;
}

impl FlagSet for clap::Command {
    fn string_flag(self, name: &'static str, default: &str, help: &'static str) -> Self {
        self.arg(clap_arg(name, default, help))
    }

    fn secret_flag(self, name: &'static str, default: &str, help: &'static str) -> Self {
        self.arg(clap_arg(name, default, help).hide_default_value(true))
    }
}

// Repeated flags keep the last value.
fn clap_arg(name: &'static str, default: &str, help: &'static str) -> clap::Arg {
    let arg = clap::Arg::new(name)
        .long(name)
        .value_name("STRING")
        .action(clap::ArgAction::Set)
        .overrides_with(name)
        .help(help);
    if default.is_empty() {
        arg
    } else {
        arg.default_value(default.to_string())
    }
}

impl FlagValues for clap::ArgMatches {
    fn string_value(&self, name: &str) -> Option<String> {
        self.try_get_one::<String>(name).ok().flatten().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Command;

    fn command() -> Command {
        Command::new("test")
            .string_flag("google.client-id", "", "client id")
            .string_flag("google.admin-email", "root@example.com", "admin email")
            .secret_flag("google.client-secret", "s3cr3t-value", "client secret")
    }

    #[test]
    fn clap_parses_registered_flags() -> anyhow::Result<()> {
        let matches = command().try_get_matches_from([
            "test",
            "--google.client-id=my-client",
            "--google.admin-email",
            "admin@example.com",
        ])?;
        assert_eq!(
            matches.string_value("google.client-id").as_deref(),
            Some("my-client")
        );
        assert_eq!(
            matches.string_value("google.admin-email").as_deref(),
            Some("admin@example.com")
        );
        Ok(())
    }

    #[test]
    fn clap_uses_defaults() -> anyhow::Result<()> {
        let matches = command().try_get_matches_from(["test"])?;
        assert_eq!(matches.string_value("google.client-id"), None);
        assert_eq!(
            matches.string_value("google.admin-email").as_deref(),
            Some("root@example.com")
        );
        Ok(())
    }

    #[test]
    fn clap_unknown_flag_is_none() -> anyhow::Result<()> {
        let matches = command().try_get_matches_from(["test"])?;
        assert_eq!(matches.string_value("google.not-registered"), None);
        Ok(())
    }

    #[test]
    fn clap_help_lists_flags() {
        let help = command().render_long_help().to_string();
        assert!(help.contains("--google.client-id"), "{help}");
        assert!(help.contains("--google.admin-email"), "{help}");
        assert!(help.contains("--google.client-secret"), "{help}");
        assert!(help.contains("root@example.com"), "{help}");
    }

    #[test]
    fn clap_help_hides_secret_defaults() -> anyhow::Result<()> {
        let help = command().render_long_help().to_string();
        assert!(!help.contains("s3cr3t-value"), "{help}");

        let matches = command().try_get_matches_from(["test"])?;
        assert_eq!(
            matches.string_value("google.client-secret").as_deref(),
            Some("s3cr3t-value")
        );
        Ok(())
    }

    #[test]
    fn clap_repeated_flag_keeps_last_value() -> anyhow::Result<()> {
        let matches = command().try_get_matches_from([
            "test",
            "--google.client-id=first",
            "--google.client-id=second",
        ])?;
        assert_eq!(
            matches.string_value("google.client-id").as_deref(),
            Some("second")
        );
        Ok(())
    }
}
