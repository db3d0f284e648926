#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use gcswitch::config::Config;
use tempfile::TempDir;

const SCRIPT: &str = r##"#!/bin/sh
dir="$(cd "$(dirname "$0")" && pwd)"
echo "$*" >> "$dir/calls"
case "$3" in
  list)
@LIST@
    ;;
  activate)
    name="$4"
    if ! grep -qx "$name" "$dir/names"; then
      echo "ERROR: (gcloud.config.configurations.activate) Cannot activate configuration [$name], it does not exist." >&2
      exit 1
    fi
    echo "$name" > "$dir/active"
    echo "Activated [$name]." >&2
    ;;
  *)
    echo "unexpected arguments: $*" >&2
    exit 2
    ;;
esac
"##;

const LIST_FROM_STATE: &str = r##"    active="$(cat "$dir/active" 2>/dev/null)"
    printf '['
    sep=''
    while read -r name; do
      if [ "$name" = "$active" ]; then a=true; else a=false; fi
      printf '%s{"is_active": %s, "name": "%s", "properties": {"core": {"account": "%s@example.com", "project": "%s-project"}}}' "$sep" "$a" "$name" "$name" "$name"
      sep=','
    done < "$dir/names"
    printf ']\n'"##;

/// A stand-in `gcloud` executable living in its own temp directory
pub struct FakeGcloud {
    dir: TempDir,
    pub path: PathBuf,
}

impl FakeGcloud {
    /// Configurations named `names`, with `active` marked active
    pub fn with_profiles(names: &[&str], active: Option<&str>) -> Self {
        let fake = Self::with_list_body(LIST_FROM_STATE);
        let mut listing = names.join("\n");
        if !listing.is_empty() {
            listing.push('\n');
        }
        fs::write(fake.dir.path().join("names"), listing).unwrap();
        if let Some(active) = active {
            fs::write(fake.dir.path().join("active"), format!("{}\n", active)).unwrap();
        }
        fake
    }

    /// Listing exits with `code` after printing `message` on stderr
    pub fn failing_list(message: &str, code: i32) -> Self {
        let fake = Self::with_list_body(&format!(
            "    echo '{}' >&2\n    exit {}",
            message, code
        ));
        fs::write(fake.dir.path().join("names"), "").unwrap();
        fake
    }

    /// Listing succeeds but prints `stdout` verbatim
    pub fn raw_list(stdout: &str) -> Self {
        let fake = Self::with_list_body(&format!("    echo '{}'", stdout));
        fs::write(fake.dir.path().join("names"), "").unwrap();
        fake
    }

    /// Valid listing on stdout with a warning on stderr, as gcloud prints
    /// when a component update is available
    pub fn noisy_list(names: &[&str], active: Option<&str>, warning: &str) -> Self {
        let body = format!("{}\n    echo '{}' >&2", LIST_FROM_STATE, warning);
        let fake = Self::with_list_body(&body);
        fs::write(fake.dir.path().join("names"), format!("{}\n", names.join("\n"))).unwrap();
        if let Some(active) = active {
            fs::write(fake.dir.path().join("active"), format!("{}\n", active)).unwrap();
        }
        fake
    }

    fn with_list_body(body: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("gcloud");
        fs::write(&path, SCRIPT.replace("@LIST@", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        Self { dir, path }
    }

    pub fn config(&self) -> Config {
        Config {
            gcloud: self.path.display().to_string(),
        }
    }

    /// Argument lists gcloud was invoked with, oldest first
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("calls"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn activations(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with("config configurations activate"))
            .collect()
    }
}
