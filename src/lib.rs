//! homecfg - Scaffold ESPHome device configs and provision their secrets.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── create        # create-device command
//! │   ├── completions   # Shell completions
//! │   └── output        # Terminal styling helpers
//! └── core/             # Core library components
//!     ├── config        # .homecfg.toml and resolved settings
//!     ├── validation    # Name normalization and slugs
//!     ├── domain/       # Identity, layout and secret types
//!     ├── conflicts     # Pre-write conflict checks
//!     ├── exec          # CommandRunner seam for external tools
//!     ├── secrets       # 1Password CLI client
//!     ├── rng           # openssl-backed secret generation
//!     ├── render        # Template, device and package text
//!     └── workflow      # create-device orchestration
//! ```
//!
//! # Workflow
//!
//! normalize → derive → check conflicts (local + remote) → generate →
//! render → confirm → apply → summarize. Nothing is written until every
//! check has passed.

pub mod cli;
pub mod core;
pub mod error;
