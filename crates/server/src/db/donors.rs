//! Donor repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use blood_donation_core::{BloodType, DonorId, DonorName, PhoneNumber};

use super::RepositoryError;
use crate::models::{Donor, NewDonor};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for `SQLite` donor queries.
#[derive(Debug, sqlx::FromRow)]
struct DonorRow {
    id: i64,
    name: String,
    phone: String,
    blood_type: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<DonorRow> for Donor {
    type Error = RepositoryError;

    fn try_from(row: DonorRow) -> Result<Self, Self::Error> {
        let name = DonorName::parse(&row.name).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid name in database: {e}"))
        })?;
        let phone = PhoneNumber::parse(&row.phone).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid phone in database: {e}"))
        })?;
        let blood_type = row.blood_type.parse::<BloodType>().map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid blood type in database: {e}"))
        })?;

        Ok(Self {
            id: DonorId::new(row.id),
            name,
            phone,
            blood_type,
            created_at: row.created_at,
        })
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for donor database operations.
pub struct DonorRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> DonorRepository<'a> {
    /// Create a new donor repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a validated donor stamped with `created_at`.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the phone number is already registered.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        donor: &NewDonor,
        created_at: DateTime<Utc>,
    ) -> Result<Donor, RepositoryError> {
        let row = sqlx::query_as::<_, DonorRow>(
            r"
            INSERT INTO donor (name, phone, blood_type, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id, name, phone, blood_type, created_at
            ",
        )
        .bind(donor.name.as_str())
        .bind(donor.phone.as_str())
        .bind(donor.blood_type.as_str())
        .bind(created_at)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("phone already registered".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        row.try_into()
    }

    /// Find the donor registered with a normalized phone number.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn find_by_phone(
        &self,
        phone: &PhoneNumber,
    ) -> Result<Option<Donor>, RepositoryError> {
        let row = sqlx::query_as::<_, DonorRow>(
            r"
            SELECT id, name, phone, blood_type, created_at
            FROM donor
            WHERE phone = ?
            ",
        )
        .bind(phone.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// List all donors, newest first.
    ///
    /// Donors registered at the same instant are ordered by descending ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_all(&self) -> Result<Vec<Donor>, RepositoryError> {
        let rows = sqlx::query_as::<_, DonorRow>(
            r"
            SELECT id, name, phone, blood_type, created_at
            FROM donor
            ORDER BY created_at DESC, id DESC
            ",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Count registered donors.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM donor")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Delete a donor by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no donor has this ID.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: DonorId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM donor WHERE id = ?")
            .bind(id.as_i64())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::db::{create_memory_pool, migrate};

    async fn test_pool() -> SqlitePool {
        let pool = create_memory_pool().await.unwrap();
        migrate(&pool).await.unwrap();
        pool
    }

    fn new_donor(name: &str, phone: &str, blood_type: BloodType) -> NewDonor {
        NewDonor {
            name: DonorName::parse(name).unwrap(),
            phone: PhoneNumber::parse(phone).unwrap(),
            blood_type,
        }
    }

    fn at(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + secs, 0).unwrap()
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let pool = test_pool().await;
        let repo = DonorRepository::new(&pool);

        let a = repo
            .create(&new_donor("Alice", "0100", BloodType::APositive), at(1))
            .await
            .unwrap();
        let b = repo
            .create(&new_donor("Bob", "0101", BloodType::BNegative), at(2))
            .await
            .unwrap();

        assert!(b.id > a.id);
        assert_eq!(a.name.as_str(), "Alice");
        assert_eq!(a.created_at, at(1));
        assert_eq!(b.blood_type, BloodType::BNegative);
    }

    #[tokio::test]
    async fn test_unique_phone_is_enforced_by_the_table() {
        let pool = test_pool().await;
        let repo = DonorRepository::new(&pool);

        repo.create(&new_donor("Alice", "+1 555-123-4567", BloodType::APositive), at(1))
            .await
            .unwrap();
        let err = repo
            .create(&new_donor("Bob", "+15551234567", BloodType::OPositive), at(2))
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::Conflict(_)));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_by_phone() {
        let pool = test_pool().await;
        let repo = DonorRepository::new(&pool);

        let created = repo
            .create(&new_donor("محمد علي", "0612345678", BloodType::AbPositive), at(1))
            .await
            .unwrap();

        let found = repo
            .find_by_phone(&PhoneNumber::parse("06 12 34 56 78").unwrap())
            .await
            .unwrap();
        assert_eq!(found, Some(created));

        let missing = repo
            .find_by_phone(&PhoneNumber::parse("0700").unwrap())
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_all_newest_first() {
        let pool = test_pool().await;
        let repo = DonorRepository::new(&pool);

        repo.create(&new_donor("Alice", "0100", BloodType::APositive), at(1))
            .await
            .unwrap();
        repo.create(&new_donor("Bob", "0101", BloodType::APositive), at(2))
            .await
            .unwrap();

        let names: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name.into_inner())
            .collect();
        assert_eq!(names, ["Bob", "Alice"]);
    }

    #[tokio::test]
    async fn test_list_all_breaks_timestamp_ties_by_id() {
        let pool = test_pool().await;
        let repo = DonorRepository::new(&pool);

        let first = repo
            .create(&new_donor("Alice", "0100", BloodType::APositive), at(5))
            .await
            .unwrap();
        let second = repo
            .create(&new_donor("Bob", "0101", BloodType::APositive), at(5))
            .await
            .unwrap();

        let ids: Vec<DonorId> = repo.list_all().await.unwrap().iter().map(|d| d.id).collect();
        assert_eq!(ids, [second.id, first.id]);
    }

    #[tokio::test]
    async fn test_delete_removes_only_that_donor() {
        let pool = test_pool().await;
        let repo = DonorRepository::new(&pool);

        let keep = repo
            .create(&new_donor("Alice", "0100", BloodType::APositive), at(1))
            .await
            .unwrap();
        let gone = repo
            .create(&new_donor("Bob", "0101", BloodType::APositive), at(2))
            .await
            .unwrap();

        repo.delete(gone.id).await.unwrap();

        let remaining = repo.list_all().await.unwrap();
        assert_eq!(remaining, vec![keep]);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let pool = test_pool().await;
        let repo = DonorRepository::new(&pool);

        repo.create(&new_donor("Alice", "0100", BloodType::APositive), at(1))
            .await
            .unwrap();

        let err = repo.delete(DonorId::new(999)).await.unwrap_err();
        assert!(matches!(err, RepositoryError::NotFound));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_corrupt_row_is_reported() {
        let pool = test_pool().await;
        sqlx::query(
            "INSERT INTO donor (name, phone, blood_type, created_at) VALUES ('Bad1', '0100', 'A+', ?)",
        )
        .bind(at(1))
        .execute(&pool)
        .await
        .unwrap();

        let err = DonorRepository::new(&pool).list_all().await.unwrap_err();
        assert!(matches!(err, RepositoryError::DataCorruption(_)));
    }
}
