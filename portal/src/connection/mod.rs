mod connection_string;
mod ssl_mode;

pub use connection_string::{
    parse, serialize, ConnectionFieldSet, CONNECTION_KEYS,
};
pub use ssl_mode::SslMode;
