use std::collections::HashMap;

use super::ssl_mode::SslMode;

const KV_SEPARATOR: &str = "=";

/// Keys recognised in a postgres connection string, in the order the raw
/// string is parsed back into fields.
pub const CONNECTION_KEYS: [&str; 6] =
    ["host", "port", "dbname", "user", "password", "sslmode"];

/// Individual connection parameters of a postgres notification target
/// (e.g. "host=localhost port=5432 dbname=minio_events user=postgres
/// password=password sslmode=disable").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionFieldSet {
    pub host: String,
    pub port: String,
    pub dbname: String,
    pub user: String,
    pub password: String,
    pub sslmode: String,
}

impl Default for ConnectionFieldSet {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: String::new(),
            dbname: String::new(),
            user: String::new(),
            password: String::new(),
            sslmode: SslMode::default().as_str().to_string(),
        }
    }
}

impl ConnectionFieldSet {
    /// Rebuild the fields from a hand-typed connection string. Missing
    /// tokens become empty, a missing sslmode falls back to "require".
    pub fn from_connection_string(input: &str) -> Self {
        let mut kv = parse(input, &CONNECTION_KEYS);
        let mut take = |key: &str| kv.remove(key).unwrap_or_default();

        let host = take("host");
        let port = take("port");
        let dbname = take("dbname");
        let user = take("user");
        let password = take("password");
        let sslmode = match take("sslmode") {
            mode if mode.is_empty() => SslMode::default().as_str().to_string(),
            mode => mode,
        };
        Self {
            host,
            port,
            dbname,
            user,
            password,
            sslmode,
        }
    }
}

/// Render the fields as `key=value` tokens separated by a single space.
/// Empty fields are left out, sslmode is always written and always last.
/// Values are not quoted or escaped.
pub fn serialize(fields: &ConnectionFieldSet) -> String {
    let mut output = String::new();
    for (key, value) in [
        ("host", &fields.host),
        ("dbname", &fields.dbname),
        ("user", &fields.user),
        ("password", &fields.password),
        ("port", &fields.port),
    ] {
        if !value.is_empty() {
            output.push_str(&format!(" {}{}{}", key, KV_SEPARATOR, value));
        }
    }
    output.push_str(&format!(" sslmode{}{}", KV_SEPARATOR, fields.sslmode));
    output.trim().to_string()
}

/// Extract `key=value` pairs from a connection string.
///
/// The first occurrence of each `<key>=` token marks the start of a segment;
/// segments run up to the next marked offset in the input, whatever key it
/// belongs to. A value that itself contains another key's token therefore
/// gets cut at that token. Keys that never occur are absent from the result.
/// A key passed twice marks the same offset twice; the empty segment between
/// the two marks ends up under the key `""`.
pub fn parse(input: &str, keys: &[&str]) -> HashMap<String, String> {
    let mut offsets: Vec<usize> = keys
        .iter()
        .filter_map(|key| input.find(&format!("{}{}", key, KV_SEPARATOR)))
        .collect();
    offsets.sort_unstable();

    let mut kv_fields = HashMap::new();
    for (i, start) in offsets.iter().enumerate() {
        let field = match offsets.get(i + 1) {
            Some(end) => &input[*start..*end],
            None => &input[*start..],
        };
        let (key, value) =
            field.split_once(KV_SEPARATOR).unwrap_or(("", field));
        kv_fields.insert(key.to_string(), value.trim().to_string());
    }
    kv_fields
}
