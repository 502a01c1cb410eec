use aws_config::default_provider::region;
use aws_config::ecs::EcsCredentialsProvider;
use aws_config::environment::EnvironmentVariableCredentialsProvider;
use aws_config::imds::credentials::ImdsCredentialsProvider;
use aws_config::meta::credentials::CredentialsProviderChain;
use aws_config::meta::region::ProvideRegion;
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_config::provider_config::ProviderConfig;
use aws_config::web_identity_token::WebIdentityTokenCredentialsProvider;
use aws_credential_types::provider::error::CredentialsError;
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_credential_types::Credentials;

#[allow(unused_imports)]
use mockall::automock;

pub struct CredentialsResolverImpl {
    inner: SharedCredentialsProvider,
}

#[cfg(test)]
pub use MockCredentialsResolverImpl as CredentialsResolver;
#[cfg(not(test))]
pub use CredentialsResolverImpl as CredentialsResolver;

#[cfg_attr(test, automock)]
impl CredentialsResolverImpl {
    pub fn new(inner: SharedCredentialsProvider) -> Self {
        Self { inner }
    }

    pub async fn resolve(&self) -> Result<Credentials, CredentialsError> {
        self.inner.provide_credentials().await
    }
}

/// The provider chain consulted when nothing else is injected.
///
/// Sources are tried in this order, first hit wins:
///
/// 1. `AWS_ACCESS_KEY_ID`, `AWS_SECRET_ACCESS_KEY` and `AWS_SESSION_TOKEN`
/// 2. the shared config and credentials files, honouring `AWS_PROFILE`
/// 3. `AWS_WEB_IDENTITY_TOKEN_FILE` and `AWS_ROLE_ARN`, exchanged through STS
/// 4. the ECS task metadata endpoint
/// 5. the EC2 instance metadata service
///
/// The region is resolved up front since the web identity exchange and
/// role-assuming profiles call STS themselves.
pub async fn default_chain() -> SharedCredentialsProvider {
    let conf = ProviderConfig::default().with_region(region::default_provider().region().await);

    let chain = CredentialsProviderChain::first_try(
        "Environment",
        EnvironmentVariableCredentialsProvider::new(),
    )
    .or_else(
        "Profile",
        ProfileFileCredentialsProvider::builder()
            .configure(&conf)
            .build(),
    )
    .or_else(
        "WebIdentityToken",
        WebIdentityTokenCredentialsProvider::builder()
            .configure(&conf)
            .build(),
    )
    .or_else(
        "EcsContainer",
        EcsCredentialsProvider::builder().configure(&conf).build(),
    )
    .or_else(
        "Ec2InstanceMetadata",
        ImdsCredentialsProvider::builder().configure(&conf).build(),
    );

    SharedCredentialsProvider::new(chain)
}
