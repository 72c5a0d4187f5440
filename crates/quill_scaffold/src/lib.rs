//! Quill Android Project Scaffolder
//!
//! Writes the fixed set of Gradle/CMake/manifest files needed to build the
//! Quill toolkit and its demo application with Android Studio. One invocation
//! deterministically writes the same tree under the chosen project root:
//!
//! ```no_run
//! use quill_scaffold::{scaffold, ScaffoldRequest};
//!
//! let report = scaffold(&ScaffoldRequest {
//!     toolkit_root: "/opt/quill".into(),
//!     project_root: "/opt/quill/build/AndroidStudio".into(),
//!     overwrite: true,
//! })?;
//! println!("wrote {} files", report.files.len());
//! # Ok::<(), quill_scaffold::ScaffoldError>(())
//! ```
//!
//! The writer is sequential and fail-fast: the first directory or file that
//! cannot be written aborts the run with that path in the error, leaving the
//! destination incomplete but inspectable.

pub mod error;
pub mod icons;
pub mod templates;

pub use error::{Result, ScaffoldError};
pub use templates::{template_paths, Contents, TemplateFile};

use std::fs;
use std::path::{Path, PathBuf};

/// One scaffold invocation
#[derive(Clone, Debug)]
pub struct ScaffoldRequest {
    /// Root of the toolkit source tree, interpolated into the native-build
    /// descriptors
    pub toolkit_root: PathBuf,
    /// Destination root the project tree is written under
    pub project_root: PathBuf,
    /// Overwrite files left by a previous run instead of failing
    pub overwrite: bool,
}

/// What a successful run wrote
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    /// Absolute paths of every file written, in write order
    pub files: Vec<PathBuf>,
}

/// Write the full project tree described by `request`.
pub fn scaffold(request: &ScaffoldRequest) -> Result<ScaffoldReport> {
    create_dir(&request.project_root)?;

    let mut report = ScaffoldReport::default();
    for template in templates::project_files(&request.toolkit_root) {
        let target = request.project_root.join(template.path);
        if let Some(parent) = target.parent() {
            create_dir(parent)?;
        }
        if !request.overwrite && target.exists() {
            return Err(ScaffoldError::Exists(target));
        }
        fs::write(&target, template.contents.as_bytes()).map_err(|source| {
            ScaffoldError::Write {
                path: target.clone(),
                source,
            }
        })?;
        tracing::debug!(path = %target.display(), "wrote project file");
        report.files.push(target);
    }
    Ok(report)
}

fn create_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| ScaffoldError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
