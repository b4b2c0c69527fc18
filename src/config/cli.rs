use std::ffi::OsString;

/// Long flags that may also be spelled with a single dash (`-chaos-key`, `-count`).
const LONG_FLAGS: &[&str] = &["chaos-key", "count", "domain", "file", "api-url", "verbose"];

/// Switches that also take an explicit value (`-count=false`).
const BOOL_FLAGS: &[&str] = &["count", "verbose"];

/// Rewrites `-name` and `-name=value` into `--name` / `--name=value` for known long
/// flags so clap accepts both spellings. `--count=true` becomes `--count` and
/// `--count=false` is dropped. Everything after `--` is left untouched.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut passthrough = false;

    args.into_iter()
        .map(Into::into)
        .filter_map(|arg| {
            if passthrough {
                return Some(arg);
            }
            let Some(text) = arg.to_str() else {
                return Some(arg);
            };
            if text == "--" {
                passthrough = true;
                return Some(arg);
            }
            let rest = match text.strip_prefix("--") {
                Some(rest) => rest,
                None => match text.strip_prefix('-') {
                    Some(rest) if is_long_flag(rest) => rest,
                    _ => return Some(arg),
                },
            };
            match explicit_bool(rest) {
                Some((name, true)) => Some(OsString::from(format!("--{}", name))),
                Some((_, false)) => None,
                None if text.starts_with("--") => Some(arg),
                None => Some(OsString::from(format!("--{}", rest))),
            }
        })
        .collect()
}

/// `count=true` -> `("count", true)`. Unparseable values are left for clap to reject.
fn explicit_bool(rest: &str) -> Option<(&str, bool)> {
    let (name, value) = rest.split_once('=')?;
    if !BOOL_FLAGS.contains(&name) {
        return None;
    }
    match value {
        "true" | "1" | "t" | "T" | "TRUE" | "True" => Some((name, true)),
        "false" | "0" | "f" | "F" | "FALSE" | "False" => Some((name, false)),
        _ => None,
    }
}

fn is_long_flag(rest: &str) -> bool {
    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
    LONG_FLAGS.contains(&name)
}
