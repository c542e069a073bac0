use path_slash::PathExt;
use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

#[macro_export]
macro_rules! S {
    ($x: expr) => {
        String::from($x)
    };
}

pub trait PathSanitizer {
    fn sanitize(&self) -> String;
}

impl PathSanitizer for PathBuf {
    fn sanitize(&self) -> String {
        self.as_path().sanitize()
    }
}

impl PathSanitizer for Path {
    fn sanitize(&self) -> String {
        #[cfg(windows)]
        {
            let mut path = self.to_slash_lossy().to_string();
            // check if path begins with //?/ if yes remove it
            // to handle extended-length path prefix
            // https://learn.microsoft.com/en-us/windows/win32/fileio/maximum-file-path-limitation
            if path.starts_with("\\\\?\\") {
                path = path[4..].to_string();
            }
            // Check if path begin with a letter + ':'
            if path.len() > 2 && path.chars().nth(1) == Some(':') {
                let disk_letter = path.chars().next().unwrap().to_ascii_lowercase();
                path.replace_range(0..1, &disk_letter.to_string());
            }
            return path;
        }

        #[cfg(not(windows))]
        return self.to_slash_lossy().to_string();
    }
}

/// Write `contents` to `path`, creating missing parent directories first.
pub fn write_file(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, contents)
}

/// A missing path, a file, or an empty directory all count as "not non-empty".
pub fn is_dir_nonempty(path: &Path) -> io::Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    if !path.is_dir() {
        return Ok(false);
    }
    let mut entries = fs::read_dir(path)?;
    Ok(entries.next().is_some())
}

pub fn find_executable(name: &str) -> Option<PathBuf> {
    env::var_os("PATH").and_then(|paths| {
        env::split_paths(&paths)
            .map(|dir| dir.join(name))
            .find(|candidate| candidate.is_file())
    })
}
