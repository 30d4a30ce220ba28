//! Policy domain services
//!
//! [`PremiumService`] is the synchronous pricing engine: validate, compute the
//! base premium, apply the policy-type strategy. [`PolicyLifecycleService`]
//! wraps it with the storage collaborators to create and amend policies.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use core_kernel::{ClientId, Clock, PolicyId, SystemClock};
use domain_client::{Client, ClientPort};

use crate::error::PolicyError;
use crate::policy::{NewPolicy, Policy, PolicyAmendment, PolicyApplication, PolicyTerms};
use crate::ports::PolicyPort;
use crate::premium::PremiumFactors;
use crate::strategy::{PricingError, PricingStrategy};
use crate::validation::PolicyValidator;

/// A priced policy together with the values that produced the price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PremiumQuote {
    pub factors: PremiumFactors,
    pub strategy: PricingStrategy,
    pub premium: f64,
}

/// The premium calculation engine
///
/// Stateless apart from its clock; two calls with the same inputs on the same
/// day return the same premium.
#[derive(Debug, Clone)]
pub struct PremiumService {
    clock: Arc<dyn Clock>,
}

impl Default for PremiumService {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl PremiumService {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Validates an application and returns its premium for the client
    ///
    /// # Errors
    ///
    /// - [`PolicyError::Validation`] if the application breaks a rule
    /// - [`PolicyError::InternalFault`] if pricing cannot produce a number
    pub fn calculate_premium(
        &self,
        client: &Client,
        application: &PolicyApplication,
    ) -> Result<f64, PolicyError> {
        let terms = PolicyValidator::validate(application)?;
        Ok(self.quote(client, &terms)?.premium)
    }

    /// Prices terms without validating them
    pub fn quote(&self, client: &Client, terms: &PolicyTerms) -> Result<PremiumQuote, PricingError> {
        let factors =
            PremiumFactors::for_client(client, terms.coverage_amount, self.clock.today());
        let strategy = PricingStrategy::for_terms(terms)?;
        let premium = strategy.price(factors.base_premium)?;

        debug!(
            client_id = %client.id,
            policy_type = %terms.policy_type,
            age = factors.age,
            base_premium = factors.base_premium,
            premium,
            "Premium calculated"
        );

        Ok(PremiumQuote {
            factors,
            strategy,
            premium,
        })
    }
}

/// Creates and amends stored policies
#[derive(Clone)]
pub struct PolicyLifecycleService {
    clients: Arc<dyn ClientPort>,
    policies: Arc<dyn PolicyPort>,
    pricing: PremiumService,
}

impl PolicyLifecycleService {
    pub fn new(
        clients: Arc<dyn ClientPort>,
        policies: Arc<dyn PolicyPort>,
        pricing: PremiumService,
    ) -> Self {
        Self {
            clients,
            policies,
            pricing,
        }
    }

    pub fn pricing(&self) -> &PremiumService {
        &self.pricing
    }

    /// Issues a new policy for a client
    ///
    /// Nothing is stored unless the application validates and prices.
    #[instrument(skip(self, application), fields(client_id = %client_id))]
    pub async fn create(
        &self,
        client_id: ClientId,
        application: PolicyApplication,
    ) -> Result<Policy, PolicyError> {
        let client = self.clients.get_client(client_id).await?;
        let terms = PolicyValidator::validate(&application)?;

        let quote = self.pricing.quote(&client, &terms)?;
        let end_date = terms.end_date()?;

        let policy = self
            .policies
            .insert_policy(NewPolicy {
                client_id: client.id,
                terms,
                premium_amount: quote.premium,
                end_date,
            })
            .await?;

        info!(
            policy_id = %policy.id,
            policy_type = %policy.policy_type(),
            premium = policy.premium_amount,
            "Policy created"
        );
        Ok(policy)
    }

    /// Amends a stored policy and reprices it
    ///
    /// The merged terms are not validated again, and the end date is left as
    /// it was even when the term changes.
    #[instrument(skip(self, amendment), fields(policy_id = %policy_id))]
    pub async fn update(
        &self,
        policy_id: PolicyId,
        amendment: PolicyAmendment,
    ) -> Result<Policy, PolicyError> {
        let mut policy = self.policies.get_policy(policy_id).await?;
        amendment.apply_to(&mut policy.terms);

        let client = self.clients.get_client(policy.client_id).await?;
        let quote = self.pricing.quote(&client, &policy.terms).map_err(|e| {
            warn!(error = %e, "Amended policy could not be priced");
            e
        })?;
        policy.premium_amount = quote.premium;

        let policy = self.policies.update_policy(&policy).await?;
        info!(premium = policy.premium_amount, "Policy updated");
        Ok(policy)
    }

    /// Prices an application for a stored client without issuing it
    pub async fn calculate_premium(
        &self,
        client_id: ClientId,
        application: &PolicyApplication,
    ) -> Result<f64, PolicyError> {
        let client = self.clients.get_client(client_id).await?;
        self.pricing.calculate_premium(&client, application)
    }

    pub async fn get(&self, policy_id: PolicyId) -> Result<Policy, PolicyError> {
        Ok(self.policies.get_policy(policy_id).await?)
    }

    /// Lists a client's policies
    ///
    /// Fails with NotFound for an unknown client rather than returning an
    /// empty list.
    pub async fn policies_for_client(&self, client_id: ClientId) -> Result<Vec<Policy>, PolicyError> {
        if !self.clients.exists(client_id).await? {
            return Err(PolicyError::not_found("Client", client_id));
        }
        Ok(self.policies.find_by_client(client_id).await?)
    }
}
