use std::fs;

use tracing::error;

/// Resolves a secret either from a file named by `file_var` or directly from `value_var`.
///
/// The file variant wins when both are set, which is how docker/k8s secrets are mounted.
/// `lookup` abstracts the environment so callers can inject values in tests.
pub fn get_secret<F>(lookup: &F, file_var: &str, value_var: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(secret_file_path) = lookup(file_var) {
        // Found a file path, try to read the file
        match fs::read_to_string(&secret_file_path) {
            Ok(content) => Some(content.trim().to_string()),
            Err(e) => {
                error!(%secret_file_path, ?e, "Error reading secret file");
                None
            }
        }
    } else {
        lookup(value_var)
    }
}
