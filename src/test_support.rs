use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

pub(crate) const EN_RELEASE: &str = r#"{
  "hello": "Hi",
  "nav": {
    "home": "Home",
    "about": "About"
  },
  "bye": "Bye"
}
"#;

pub(crate) const EN_CANDIDATE: &str = r#"{
  "hello": "Hello",
  "nav": {
    "home": "Start",
    "about": "About"
  },
  "bye": "Bye"
}
"#;

pub(crate) const FR_RELEASE: &str = r#"{
  "hello": "Salut",
  "nav": {
    "home": "Accueil",
    "about": "A propos"
  },
  "bye": "Au revoir"
}
"#;

pub(crate) const FR_CANDIDATE: &str = r#"{
  "hello": "Bonjour",
  "nav": {
    "home": "Accueil",
    "about": "A propos"
  },
  "bye": "Au revoir"
}
"#;

/// Create a repository with `release` and `release-candidate` branches
/// whose `public/locales/{en,fr}/common.json` files differ.
pub(crate) fn create_locale_repo() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path();

    git(path, &["init"]);
    // Ensure the repo uses a deterministic default branch name across environments.
    git(path, &["symbolic-ref", "HEAD", "refs/heads/main"]);

    // Configure git user for commits
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "user.name", "Test User"]);

    std::fs::write(path.join("README.md"), "# Test\n").unwrap();
    write_locale(path, "en", EN_RELEASE);
    write_locale(path, "fr", FR_RELEASE);
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Release translations"]);
    git(path, &["branch", "release"]);

    // Changes outside the locales directory must not show up in reports
    std::fs::write(path.join("README.md"), "# Test\n\nUpdated.\n").unwrap();
    write_locale(path, "en", EN_CANDIDATE);
    write_locale(path, "fr", FR_CANDIDATE);
    git(path, &["add", "."]);
    git(path, &["commit", "-m", "Candidate translations"]);
    git(path, &["branch", "release-candidate"]);

    temp_dir
}

fn write_locale(repo_dir: &Path, language: &str, content: &str) {
    let dir = repo_dir.join("public").join("locales").join(language);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join("common.json"), content).unwrap();
}

fn git(repo_dir: &Path, args: &[&str]) {
    let output = Command::new("git")
        .current_dir(repo_dir)
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("failed to execute git {}: {}", args.join(" "), e));

    if !output.status.success() {
        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!(
            "git {} failed (exit code {:?})\nstdout:\n{}\nstderr:\n{}",
            args.join(" "),
            output.status.code(),
            stdout,
            stderr
        );
    }
}
