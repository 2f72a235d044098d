//! Identifier transformations shared by the generator.

/// Suffix stripped from service names to get the client base name.
const SERVICE_SUFFIX: &str = "Service";

/// Shorten a service name to the base used for client type and file names.
///
/// A trailing `V<digits>` version marker is removed first, then a trailing
/// `Service`. `FooServiceV2` becomes `Foo`.
pub fn reduce_serv_name(name: &str) -> &str {
    let mut s = name;

    if let Some(p) = s.rfind('V') {
        // An empty digit run still counts, matching a bare trailing `V`.
        if s[p + 1..].chars().all(|c| c.is_ascii_digit()) {
            s = &s[..p];
        }
    }

    s.strip_suffix(SERVICE_SUFFIX).unwrap_or(s)
}

/// Lowercase the first code point, leaving the rest untouched.
pub fn lower_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Convert `CamelCase` to `snake_case`. Used only for output file names.
pub fn camel_to_snake(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.char_indices() {
        if c.is_uppercase() && i != 0 {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// File name of the client generated for `service_name`, joined under
/// `out_dir` when it is non-empty.
pub fn client_file_name(out_dir: &str, service_name: &str) -> String {
    let base = format!("{}_client.go", camel_to_snake(reduce_serv_name(service_name)));
    let dir = out_dir.trim_end_matches('/');
    if dir.is_empty() {
        base
    } else {
        format!("{}/{}", dir, base)
    }
}
