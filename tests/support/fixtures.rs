//! Test fixtures and constants.

/// Default template file name.
pub const TEMPLATE_FILE: &str = "secrets.yaml.tpl";

/// Key printed by the fake `openssl rand -base64 32`.
pub const FAKE_KEY: &str = "S2V5S2V5S2V5S2V5S2V5S2V5S2V5S2V5S2V5S2V5S2U=";

/// Password printed by the fake `openssl rand -hex 16`.
pub const FAKE_PASSWORD: &str = "00112233445566778899aabbccddeeff";

/// Fake 1Password CLI.
///
/// Logs each call as `op [arg] [arg] ...`. Behaviour is steered by env vars:
/// - `FAKE_OP_SIGNED_OUT`: `account get` fails
/// - `FAKE_OP_EXISTING`: field path that `item get --field` reports as present
/// - `FAKE_OP_EDIT_FAIL`: `item edit` fails
pub const FAKE_OP: &str = r#"#!/bin/sh
printf 'op' >> "$FAKE_LOG"
for arg in "$@"; do printf ' [%s]' "$arg" >> "$FAKE_LOG"; done
printf '\n' >> "$FAKE_LOG"

case "$1 $2" in
  "account get")
    if [ -n "$FAKE_OP_SIGNED_OUT" ]; then
      echo "[ERROR] account is not signed in" >&2
      exit 1
    fi
    echo "URL: my.1password.com"
    exit 0
    ;;
  "item get")
    field=""
    while [ $# -gt 0 ]; do
      if [ "$1" = "--field" ]; then field="$2"; fi
      shift
    done
    if [ -n "$FAKE_OP_EXISTING" ] && [ "$field" = "$FAKE_OP_EXISTING" ]; then
      echo "existing"
      exit 0
    fi
    echo "[ERROR] field not found" >&2
    exit 1
    ;;
  "item edit")
    if [ -n "$FAKE_OP_EDIT_FAIL" ]; then
      echo "[ERROR] item edit failed" >&2
      exit 1
    fi
    exit 0
    ;;
esac
exit 2
"#;

/// Fake `openssl rand`.
pub const FAKE_OPENSSL: &str = r#"#!/bin/sh
echo "openssl $*" >> "$FAKE_LOG"
case "$2" in
  -base64) echo "S2V5S2V5S2V5S2V5S2V5S2V5S2V5S2V5S2V5S2V5S2U=" ;;
  -hex) echo "00112233445566778899aabbccddeeff" ;;
  *) exit 1 ;;
esac
"#;
