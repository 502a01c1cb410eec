use std::fmt;

use anyhow::{anyhow, Result};
use aws_sdk_sts::operation::get_caller_identity::GetCallerIdentityOutput;

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CallerIdentity {
    pub account: String,
    pub arn: String,
    pub user_id: String,
}

fn required(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(value) if !value.is_empty() => Ok(value),
        _ => Err(anyhow!("GetCallerIdentity response is missing {}", field)),
    }
}

impl TryFrom<GetCallerIdentityOutput> for CallerIdentity {
    type Error = anyhow::Error;

    fn try_from(output: GetCallerIdentityOutput) -> Result<Self> {
        Ok(Self {
            account: required(output.account, "Account")?,
            arn: required(output.arn, "Arn")?,
            user_id: required(output.user_id, "UserId")?,
        })
    }
}

impl fmt::Display for CallerIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Account ID: {}", self.account)?;
        writeln!(f, "User ARN: {}", self.arn)?;
        writeln!(f, "User ID: {}", self.user_id)
    }
}
