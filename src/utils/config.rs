/******************************************************************************
   Author: Checkout Tech
   Email: dev@checkout.tech
   Date: 16/10/26
******************************************************************************/
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Gets an environment variable or returns a default value if not found or cannot be parsed
///
/// # Arguments
///
/// * `env_var` - The name of the environment variable
/// * `default` - The default value to use if the environment variable is not found or cannot be parsed
///
/// # Returns
///
/// The parsed value of the environment variable or the default value
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Gets an environment variable and parses it, returning None if not found or invalid
///
/// Blank values are treated as unset.
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) if !val.trim().is_empty() => val.trim().parse::<T>().ok(),
        _ => None,
    }
}

/// Reads an origin URL from the environment, dropping any trailing slash
///
/// Paths are joined with a single `/`, so `http://host/` and `http://host`
/// must behave the same.
pub fn get_env_origin(env_var: &str, default: &str) -> String {
    let value: String = get_env_or_default(env_var, default.to_string());
    let trimmed = value.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        error!("{} is blank, using {}", env_var, default);
        return default.trim_end_matches('/').to_string();
    }
    trimmed.to_string()
}
