// src/mirror/context.rs

use std::path::{Path, PathBuf};

/// Recursion state threaded through a walk.
///
/// Holds the stack of local directories mirroring the remote path being
/// listed, rooted at the directory the walk started from, and the number of
/// levels entered so far. The process working directory is never touched.
#[derive(Debug, Clone)]
pub struct WalkContext {
    dirs: Vec<PathBuf>,
}

impl WalkContext {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            dirs: vec![root.into()],
        }
    }

    /// Local directory that corresponds to the listing being processed.
    pub fn current_dir(&self) -> &Path {
        // The root is never popped.
        self.dirs.last().map(PathBuf::as_path).unwrap_or(Path::new("."))
    }

    /// Number of directory levels entered below the root.
    pub fn depth(&self) -> u32 {
        (self.dirs.len() - 1) as u32
    }

    /// Runs `f` with `name` pushed as the current directory, and pops it
    /// afterwards whatever `f` returns.
    pub fn descend<T>(&mut self, name: &str, f: impl FnOnce(&mut Self) -> T) -> T {
        let next = self.current_dir().join(name);
        self.dirs.push(next);
        let result = f(self);
        self.dirs.pop();
        result
    }
}
