// agri-bootstrap-core/src/core/arn.rs
// ============================================================================
// Module: ARN Composition
// Description: Pure composition of fully-qualified resource references.
// Purpose: Build role, policy, and function ARNs from resolved identifiers.
// Dependencies: crate::core::identifiers
// ============================================================================

//! ## Overview
//! Fully-qualified resource references are composed from the account
//! identifier resolved at run time plus configured names. Composition is pure
//! string formatting; no network access happens here, which is what lets the
//! provisioners defer every control-plane call until after preconditions pass.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::identifiers::AccountId;
use crate::core::identifiers::FunctionName;
use crate::core::identifiers::PolicyName;
use crate::core::identifiers::RegionCode;
use crate::core::identifiers::RoleName;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Managed baseline policy granting basic execution permissions.
pub const MANAGED_BASELINE_POLICY_ARN: &str =
    "arn:aws:iam::aws:policy/service-role/AWSLambdaBasicExecutionRole";

// ============================================================================
// SECTION: Composition
// ============================================================================

/// Composes the fully-qualified reference for an execution role.
#[must_use]
pub fn role_arn(account: &AccountId, role: &RoleName) -> String {
    format!("arn:aws:iam::{account}:role/{role}")
}

/// Composes the fully-qualified reference for a customer-managed policy.
#[must_use]
pub fn policy_arn(account: &AccountId, policy: &PolicyName) -> String {
    format!("arn:aws:iam::{account}:policy/{policy}")
}

/// Composes the fully-qualified reference for a compute function.
#[must_use]
pub fn function_arn(region: &RegionCode, account: &AccountId, function: &FunctionName) -> String {
    format!("arn:aws:lambda:{region}:{account}:function:{function}")
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::function_arn;
    use super::policy_arn;
    use super::role_arn;
    use crate::core::identifiers::AccountId;
    use crate::core::identifiers::FunctionName;
    use crate::core::identifiers::PolicyName;
    use crate::core::identifiers::RegionCode;
    use crate::core::identifiers::RoleName;

    #[test]
    fn role_arn_composes_account_and_name() {
        let arn = role_arn(
            &AccountId::new("123456789012"),
            &RoleName::new("lambda-agriculture-role"),
        );
        assert_eq!(arn, "arn:aws:iam::123456789012:role/lambda-agriculture-role");
    }

    #[test]
    fn policy_arn_composes_account_and_name() {
        let arn = policy_arn(
            &AccountId::new("123456789012"),
            &PolicyName::new("UAE-Agriculture-S3-Policy"),
        );
        assert_eq!(arn, "arn:aws:iam::123456789012:policy/UAE-Agriculture-S3-Policy");
    }

    #[test]
    fn function_arn_composes_region_account_and_name() {
        let arn = function_arn(
            &RegionCode::new("us-east-1"),
            &AccountId::new("123456789012"),
            &FunctionName::new("uae-satellite-processor"),
        );
        assert_eq!(
            arn,
            "arn:aws:lambda:us-east-1:123456789012:function:uae-satellite-processor"
        );
    }
}
