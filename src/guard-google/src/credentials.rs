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

pub mod service_account;

use crate::errors::Error;

/// Reads the raw service account key.
///
/// Both activating the options and patching a deployment read the key file,
/// each with its own error reporting. They share this helper so the failure
/// is always a [loading][Error::is_loading] error naming the path.
pub(crate) fn read_key_file(path: &str) -> crate::Result<Vec<u8>> {
    if path.is_empty() {
        return Err(Error::loading(path, "the path is empty"));
    }
    std::fs::read(path).map_err(|e| Error::loading(path, e))
}
