use std::future::Future;
use std::io::Write;

use anyhow::{Context, Result};
use aws_credential_types::Credentials;

use crate::credentials::CredentialsResolver;
use crate::sts::{fetch_caller_identity, Sts};
use crate::types::CallerIdentity;

pub struct IdentityReporter;

impl IdentityReporter {
    /// Resolves credentials, asks STS who they belong to and writes the answer to `out`.
    ///
    /// `connect` is only called once credentials have been resolved. Nothing is
    /// written unless every step succeeds.
    pub async fn run<C, F, W>(
        resolver: &CredentialsResolver,
        connect: C,
        out: &mut W,
    ) -> Result<CallerIdentity>
    where
        C: FnOnce(Credentials) -> F,
        F: Future<Output = Sts>,
        W: Write,
    {
        tracing::debug!("resolving credentials");
        let credentials = resolver
            .resolve()
            .await
            .context("failed to resolve AWS credentials")?;
        tracing::debug!(expiry = ?credentials.expiry(), "resolved credentials");

        let client = connect(credentials).await;

        tracing::debug!("calling sts:GetCallerIdentity");
        let identity = fetch_caller_identity(&client).await?;

        out.write_all(identity.to_string().as_bytes())
            .and_then(|_| out.flush())
            .context("failed to write caller identity")?;

        Ok(identity)
    }
}
