// This file is part of the terraform-provider-backuprecovery project
//
// Copyright (C) ANEO, 2024-2024. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License")
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::env;

use anyhow::Result;
use backup_recovery::BackupRecoveryProvider;
use tf_provider::serve;
use tracing_subscriber::EnvFilter;

/// Log to stderr unless Terraform asked for a log file, which `serve` handles itself
fn init_logging() {
    if env::var_os("PLUGIN_LOG_FILE").is_some() {
        return;
    }

    let filter = EnvFilter::try_from_env("BACKUP_RECOVERY_LOG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false);

    let result = match env::var("BACKUP_RECOVERY_LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().try_init(),
        _ => builder.try_init(),
    };
    if let Err(err) = result {
        eprintln!("Could not install the log subscriber: {err}");
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();
    serve("backuprecovery", BackupRecoveryProvider::new()).await
}
