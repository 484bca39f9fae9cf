pub mod client;

pub use client::ClientRow;
