use anyhow::{Context, Result};
use aws_sdk_sts as sts;
use aws_sdk_sts::operation::get_caller_identity::{
    GetCallerIdentityError, GetCallerIdentityOutput,
};

#[allow(unused_imports)]
use mockall::automock;

use crate::types::CallerIdentity;

pub struct StsImpl {
    inner: sts::Client,
}

#[cfg(test)]
pub use MockStsImpl as Sts;
#[cfg(not(test))]
pub use StsImpl as Sts;

#[cfg_attr(test, automock)]
impl StsImpl {
    pub fn new(inner: sts::Client) -> Self {
        Self { inner }
    }

    pub async fn get_caller_identity(
        &self,
    ) -> Result<GetCallerIdentityOutput, sts::error::SdkError<GetCallerIdentityError>> {
        self.inner.get_caller_identity().send().await
    }
}

/// Builds an STS client bound to already resolved credentials.
///
/// Region and every other setting come from the default `aws-config` chain.
#[cfg(not(test))]
pub async fn connect(credentials: aws_credential_types::Credentials) -> Sts {
    use aws_config::BehaviorVersion;

    let aws_config = aws_config::defaults(BehaviorVersion::latest())
        .credentials_provider(credentials)
        .load()
        .await;

    match aws_config.region() {
        Some(region) => tracing::debug!(%region, "built sts client"),
        None => tracing::debug!("built sts client without a region"),
    }

    Sts::new(sts::Client::new(&aws_config))
}

pub async fn fetch_caller_identity(client: &Sts) -> Result<CallerIdentity> {
    let output = client
        .get_caller_identity()
        .await
        .context("failed to get caller identity")?;

    CallerIdentity::try_from(output)
}

#[cfg(test)]
mod test {
    use super::*;

    use aws_sdk_sts::error::SdkError;
    use aws_smithy_runtime_api::http::{Response, StatusCode};
    use aws_smithy_types::body::SdkBody;
    use aws_smithy_types::error::ErrorMetadata;

    #[tokio::test]
    async fn test_fetch_caller_identity() {
        let mut mock = MockStsImpl::default();
        mock.expect_get_caller_identity().times(1).return_once(|| {
            Ok(GetCallerIdentityOutput::builder()
                .account("123456789012")
                .arn("arn:aws:iam::123456789012:user/alice")
                .user_id("AIDAALICE")
                .build())
        });

        let identity = fetch_caller_identity(&mock).await.unwrap();
        assert_eq!(identity.account, "123456789012");
        assert_eq!(identity.arn, "arn:aws:iam::123456789012:user/alice");
        assert_eq!(identity.user_id, "AIDAALICE");
    }

    #[tokio::test]
    async fn test_fetch_caller_identity_access_denied() {
        let mut mock = MockStsImpl::default();
        mock.expect_get_caller_identity().return_once(|| {
            let error = GetCallerIdentityError::generic(
                ErrorMetadata::builder()
                    .code("AccessDenied")
                    .message("User is not authorized to perform: sts:GetCallerIdentity")
                    .build(),
            );
            let raw = Response::new(StatusCode::try_from(403).unwrap(), SdkBody::empty());
            Err(SdkError::service_error(error, raw))
        });

        let err = fetch_caller_identity(&mock).await.unwrap_err();
        assert_eq!(err.to_string(), "failed to get caller identity");
    }

    #[tokio::test]
    async fn test_fetch_caller_identity_incomplete_response() {
        let mut mock = MockStsImpl::default();
        mock.expect_get_caller_identity().return_once(|| {
            Ok(GetCallerIdentityOutput::builder()
                .account("123456789012")
                .build())
        });

        let err = fetch_caller_identity(&mock).await.unwrap_err();
        assert_eq!(err.to_string(), "GetCallerIdentity response is missing Arn");
    }
}
