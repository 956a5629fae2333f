//! Donor registration service.
//!
//! Registration runs the checks in a fixed order: name, phone format, blood
//! type, then the duplicate gate. Nothing is written unless every check passes.

use chrono::Utc;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::instrument;

use blood_donation_core::{
    BloodType, BloodTypeError, DonorId, DonorName, NameError, PhoneError, PhoneNumber,
};

use crate::db::{DonorRepository, RepositoryError};
use crate::messages;
use crate::models::{DashboardSummary, Donor, NewDonor};

/// Errors that can occur during donor operations.
#[derive(Debug, Error)]
pub enum DonorError {
    /// Name failed validation.
    #[error("invalid name: {0}")]
    InvalidName(#[from] NameError),

    /// Phone failed validation.
    #[error("invalid phone: {0}")]
    InvalidPhone(#[from] PhoneError),

    /// Blood type is not one of the eight known types.
    #[error("{0}")]
    InvalidBloodType(#[from] BloodTypeError),

    /// Another donor already registered this normalized phone number.
    #[error("phone number already registered")]
    DuplicatePhone,

    /// No donor with the requested ID.
    #[error("donor not found")]
    NotFound,

    /// Repository/database error.
    #[error("database error: {0}")]
    Repository(#[source] RepositoryError),
}

impl DonorError {
    /// Localized notice for validation and lookup failures.
    ///
    /// Returns `None` for repository errors, which must not be shown to visitors.
    #[must_use]
    pub const fn user_message(&self) -> Option<&'static str> {
        match self {
            Self::InvalidName(_) => Some(messages::INVALID_NAME),
            Self::InvalidPhone(_) => Some(messages::INVALID_PHONE),
            Self::InvalidBloodType(_) => Some(messages::INVALID_BLOOD_TYPE),
            Self::DuplicatePhone => Some(messages::DUPLICATE_PHONE),
            Self::NotFound => Some(messages::DONOR_NOT_FOUND),
            Self::Repository(_) => None,
        }
    }
}

impl From<RepositoryError> for DonorError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Conflict(_) => Self::DuplicatePhone,
            RepositoryError::NotFound => Self::NotFound,
            other => Self::Repository(other),
        }
    }
}

/// Donor service.
pub struct DonorService<'a> {
    donors: DonorRepository<'a>,
}

impl<'a> DonorService<'a> {
    /// Create a new donor service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            donors: DonorRepository::new(pool),
        }
    }

    /// Validate raw form input and register a donor.
    ///
    /// # Errors
    ///
    /// Returns the first failing validation (`InvalidName`, `InvalidPhone`,
    /// `InvalidBloodType`), `DuplicatePhone` if the normalized phone is already
    /// registered, or `Repository` for database failures.
    #[instrument(skip_all)]
    pub async fn register(
        &self,
        name: &str,
        phone: &str,
        blood_type: &str,
    ) -> Result<Donor, DonorError> {
        let new_donor = validate(name, phone, blood_type)?;

        if self.donors.find_by_phone(&new_donor.phone).await?.is_some() {
            return Err(DonorError::DuplicatePhone);
        }

        // A concurrent insert of the same phone still trips UNIQUE(phone),
        // which the repository reports as Conflict.
        let donor = self.donors.create(&new_donor, Utc::now()).await?;

        tracing::info!(donor_id = %donor.id, blood_type = %donor.blood_type, "Donor registered");
        Ok(donor)
    }

    /// List all donors, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DonorError::Repository` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Donor>, DonorError> {
        Ok(self.donors.list_all().await?)
    }

    /// List all donors together with the dashboard aggregates.
    ///
    /// # Errors
    ///
    /// Returns `DonorError::Repository` if the query fails.
    pub async fn dashboard(&self) -> Result<(Vec<Donor>, DashboardSummary), DonorError> {
        let donors = self.donors.list_all().await?;
        let summary = DashboardSummary::from_donors(&donors);
        Ok((donors, summary))
    }

    /// Delete a donor.
    ///
    /// # Errors
    ///
    /// Returns `DonorError::NotFound` if no donor has this ID.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: DonorId) -> Result<(), DonorError> {
        self.donors.delete(id).await?;
        tracing::info!(donor_id = %id, "Donor deleted");
        Ok(())
    }
}

/// Run the field validators in order and build a storable donor.
fn validate(name: &str, phone: &str, blood_type: &str) -> Result<NewDonor, DonorError> {
    let name = DonorName::parse(name)?;
    let phone = PhoneNumber::parse(phone)?;
    let blood_type = blood_type.parse::<BloodType>()?;
    Ok(NewDonor {
        name,
        phone,
        blood_type,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, migrate};

    async fn test_pool() -> SqlitePool {
        let pool = create_memory_pool().await.unwrap();
        migrate(&pool).await.unwrap();
        pool
    }

    #[test]
    fn test_validation_order_reports_name_first() {
        let err = validate("John3", "555-CALL", "Z").unwrap_err();
        assert!(matches!(err, DonorError::InvalidName(_)));

        let err = validate("John", "555-CALL", "Z").unwrap_err();
        assert!(matches!(err, DonorError::InvalidPhone(_)));

        let err = validate("John", "555", "Z").unwrap_err();
        assert!(matches!(err, DonorError::InvalidBloodType(_)));
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            DonorError::DuplicatePhone.user_message(),
            Some(messages::DUPLICATE_PHONE)
        );
        assert_eq!(
            DonorError::Repository(RepositoryError::NotFound).user_message(),
            None
        );
    }

    #[tokio::test]
    async fn test_register_normalizes_phone() {
        let pool = test_pool().await;
        let service = DonorService::new(&pool);

        let donor = service
            .register("  John Smith ", "+1 555-123-4567", "O+")
            .await
            .unwrap();

        assert_eq!(donor.name.as_str(), "John Smith");
        assert_eq!(donor.phone.as_str(), "+15551234567");
        assert_eq!(donor.blood_type, BloodType::OPositive);
    }

    #[tokio::test]
    async fn test_duplicate_after_normalization_is_rejected() {
        let pool = test_pool().await;
        let service = DonorService::new(&pool);

        service.register("John", "+1 555-123-4567", "A+").await.unwrap();
        let err = service
            .register("Jane", "+1555 1234567", "B+")
            .await
            .unwrap_err();

        assert!(matches!(err, DonorError::DuplicatePhone));
        assert_eq!(service.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_invalid_input_writes_nothing() {
        let pool = test_pool().await;
        let service = DonorService::new(&pool);

        assert!(service.register("John3", "0100", "A+").await.is_err());
        assert!(service.register("John", "555-CALL", "A+").await.is_err());
        assert!(service.register("John", "0100", "C+").await.is_err());
        assert!(service.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_and_dashboard() {
        let pool = test_pool().await;
        let service = DonorService::new(&pool);

        let a = service.register("Alice", "0100", "A+").await.unwrap();
        service.register("Bob", "0101", "AB-").await.unwrap();

        let (donors, summary) = service.dashboard().await.unwrap();
        assert_eq!(donors.len(), 2);
        assert_eq!(summary.total_donors, 2);
        assert_eq!(summary.blood_type_count, 2);

        service.delete(a.id).await.unwrap();
        assert!(matches!(
            service.delete(a.id).await,
            Err(DonorError::NotFound)
        ));

        let (_, summary) = service.dashboard().await.unwrap();
        assert_eq!(summary.total_donors, 1);
    }
}
