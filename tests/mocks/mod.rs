pub mod mock_archive;
pub mod mock_contact_endpoint;
pub mod mock_email_provider;

#[allow(unused_imports)]
pub use mock_archive::MockArchive;
#[allow(unused_imports)]
pub use mock_contact_endpoint::MockContactEndpoint;
#[allow(unused_imports)]
pub use mock_email_provider::{MockEmailProvider, ProviderBehavior};
