// agri-bootstrap-core/tests/common/mod.rs
// ============================================================================
// Module: Provisioner Test Doubles
// Description: Recording fakes for the provisioning interfaces.
// Purpose: Support call-count and convergence assertions without a cloud.
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use agri_bootstrap_core::AccountId;
use agri_bootstrap_core::BucketClient;
use agri_bootstrap_core::BucketName;
use agri_bootstrap_core::BucketStoreError;
use agri_bootstrap_core::IdentityClient;
use agri_bootstrap_core::IdentityError;
use agri_bootstrap_core::PolicyDocument;
use agri_bootstrap_core::PolicyName;
use agri_bootstrap_core::ProgressSink;
use agri_bootstrap_core::RegionCode;
use agri_bootstrap_core::RoleClient;
use agri_bootstrap_core::RoleName;
use agri_bootstrap_core::RoleStoreError;
use agri_bootstrap_core::RuleName;
use agri_bootstrap_core::ScheduleClient;
use agri_bootstrap_core::ScheduleStoreError;
use agri_bootstrap_core::StepEvent;
use async_trait::async_trait;

/// Test account identifier used across suites.
pub const TEST_ACCOUNT: &str = "123456789012";

/// Identity fake that counts lookups and optionally fails.
#[derive(Default)]
pub struct FakeIdentity {
    /// Whether resolution should fail with a credentials error.
    pub fail: bool,
    /// Number of resolution calls observed.
    pub calls: AtomicUsize,
}

impl FakeIdentity {
    /// Returns the number of resolution calls observed.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IdentityClient for FakeIdentity {
    async fn resolve_account(&self) -> Result<AccountId, IdentityError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(IdentityError::Credentials("no credentials configured".to_string()));
        }
        Ok(AccountId::new(TEST_ACCOUNT))
    }
}

/// Role store fake backed by in-memory name sets.
#[derive(Default)]
pub struct FakeRoleStore {
    /// Existing role names.
    pub roles: Mutex<BTreeSet<String>>,
    /// Existing policy ARNs.
    pub policies: Mutex<BTreeSet<String>>,
    /// Observed (role, policy ARN) attachments, in call order.
    pub attachments: Mutex<Vec<(String, String)>>,
    /// Number of role creation calls observed.
    pub role_creates: AtomicUsize,
    /// Number of policy creation calls observed.
    pub policy_creates: AtomicUsize,
    /// Total client calls observed.
    pub calls: AtomicUsize,
    /// Force a conflict on role creation (simulates a probe/create race).
    pub conflict_on_role_create: bool,
    /// Force a conflict on policy creation (simulates a probe/create race).
    pub conflict_on_policy_create: bool,
    /// Force an access-denied failure on role creation.
    pub deny_role_create: bool,
}

impl FakeRoleStore {
    /// Returns the total number of client calls observed.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Locks a mutex, mapping poison to a test-readable error.
    fn lock<T>(mutex: &Mutex<T>) -> Result<std::sync::MutexGuard<'_, T>, RoleStoreError> {
        mutex.lock().map_err(|err| RoleStoreError::Api(err.to_string()))
    }
}

#[async_trait]
impl RoleClient for FakeRoleStore {
    async fn role_exists(&self, name: &RoleName) -> Result<bool, RoleStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Self::lock(&self.roles)?.contains(name.as_str()))
    }

    async fn create_role(
        &self,
        name: &RoleName,
        _trust_document: &PolicyDocument,
    ) -> Result<(), RoleStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.role_creates.fetch_add(1, Ordering::SeqCst);
        if self.deny_role_create {
            return Err(RoleStoreError::Denied(format!("not authorized to create {name}")));
        }
        if self.conflict_on_role_create {
            return Err(RoleStoreError::Conflict(format!("role {name} already exists")));
        }
        let mut roles = Self::lock(&self.roles)?;
        if !roles.insert(name.as_str().to_string()) {
            return Err(RoleStoreError::Conflict(format!("role {name} already exists")));
        }
        Ok(())
    }

    async fn attach_policy(
        &self,
        name: &RoleName,
        policy_arn: &str,
    ) -> Result<(), RoleStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Self::lock(&self.attachments)?
            .push((name.as_str().to_string(), policy_arn.to_string()));
        Ok(())
    }

    async fn policy_exists(&self, policy_arn: &str) -> Result<bool, RoleStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Self::lock(&self.policies)?.contains(policy_arn))
    }

    async fn create_policy(
        &self,
        name: &PolicyName,
        _document: &PolicyDocument,
    ) -> Result<(), RoleStoreError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.policy_creates.fetch_add(1, Ordering::SeqCst);
        if self.conflict_on_policy_create {
            return Err(RoleStoreError::Conflict(format!("policy {name} already exists")));
        }
        let arn = format!("arn:aws:iam::{TEST_ACCOUNT}:policy/{name}");
        let mut policies = Self::lock(&self.policies)?;
        if !policies.insert(arn) {
            return Err(RoleStoreError::Conflict(format!("policy {name} already exists")));
        }
        Ok(())
    }
}

/// Bucket store fake backed by an in-memory bucket/object map.
#[derive(Default)]
pub struct FakeBucketStore {
    /// Existing buckets mapped to their object keys.
    pub buckets: Mutex<BTreeMap<String, BTreeSet<String>>>,
    /// Number of bucket creation calls observed.
    pub bucket_creates: AtomicUsize,
    /// Number of marker put calls observed.
    pub marker_puts: AtomicUsize,
    /// Force a conflict on bucket creation (simulates a probe/create race).
    pub conflict_on_create: bool,
    /// Report the bucket name as taken by another account.
    pub name_taken: bool,
}

impl FakeBucketStore {
    /// Locks the bucket map, mapping poison to a test-readable error.
    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, BTreeSet<String>>>, BucketStoreError>
    {
        self.buckets.lock().map_err(|err| BucketStoreError::Api(err.to_string()))
    }
}

#[async_trait]
impl BucketClient for FakeBucketStore {
    async fn bucket_exists(&self, name: &BucketName) -> Result<bool, BucketStoreError> {
        Ok(self.lock()?.contains_key(name.as_str()))
    }

    async fn create_bucket(
        &self,
        name: &BucketName,
        _region: &RegionCode,
    ) -> Result<(), BucketStoreError> {
        self.bucket_creates.fetch_add(1, Ordering::SeqCst);
        if self.name_taken {
            return Err(BucketStoreError::NameTaken(format!("bucket {name} is taken")));
        }
        if self.conflict_on_create {
            // The racing writer won; the bucket exists by the time we lose.
            self.lock()?.entry(name.as_str().to_string()).or_default();
            return Err(BucketStoreError::Conflict(format!("bucket {name} already owned")));
        }
        let mut buckets = self.lock()?;
        if buckets.contains_key(name.as_str()) {
            return Err(BucketStoreError::Conflict(format!("bucket {name} already owned")));
        }
        buckets.insert(name.as_str().to_string(), BTreeSet::new());
        Ok(())
    }

    async fn put_marker(&self, bucket: &BucketName, key: &str) -> Result<(), BucketStoreError> {
        self.marker_puts.fetch_add(1, Ordering::SeqCst);
        let mut buckets = self.lock()?;
        let Some(objects) = buckets.get_mut(bucket.as_str()) else {
            return Err(BucketStoreError::Api(format!("bucket {bucket} does not exist")));
        };
        objects.insert(key.to_string());
        Ok(())
    }
}

/// Schedule store fake recording upserted rules and targets.
#[derive(Default)]
pub struct FakeScheduleStore {
    /// Upserted (rule, expression, description) triples, in call order.
    pub rules: Mutex<Vec<(String, String, String)>>,
    /// Upserted (rule, target ARN, input) triples, in call order.
    pub targets: Mutex<Vec<(String, String, String)>>,
}

#[async_trait]
impl ScheduleClient for FakeScheduleStore {
    async fn put_rule(
        &self,
        name: &RuleName,
        schedule_expression: &str,
        description: &str,
    ) -> Result<(), ScheduleStoreError> {
        self.rules
            .lock()
            .map_err(|err| ScheduleStoreError::Api(err.to_string()))?
            .push((
                name.as_str().to_string(),
                schedule_expression.to_string(),
                description.to_string(),
            ));
        Ok(())
    }

    async fn put_target(
        &self,
        rule: &RuleName,
        target_arn: &str,
        input: &str,
    ) -> Result<(), ScheduleStoreError> {
        self.targets
            .lock()
            .map_err(|err| ScheduleStoreError::Api(err.to_string()))?
            .push((rule.as_str().to_string(), target_arn.to_string(), input.to_string()));
        Ok(())
    }
}

/// Progress sink recording every step event.
#[derive(Default)]
pub struct RecordingSink {
    /// Events in emission order.
    pub events: Vec<StepEvent>,
}

impl ProgressSink for RecordingSink {
    fn record(&mut self, event: &StepEvent) {
        self.events.push(event.clone());
    }
}
