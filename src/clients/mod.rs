pub mod credibility_client;

pub use credibility_client::CredibilityClient;
