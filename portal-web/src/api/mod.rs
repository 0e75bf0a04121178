mod fetch;

pub use fetch::FetchApi;
