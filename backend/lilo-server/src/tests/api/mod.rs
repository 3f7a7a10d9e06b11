mod error;
mod extractors;
mod query;
