use std::mem;

use sqlx::{postgres::PgPool, Postgres, Transaction};

use crate::services::response::ServiceError;

/// Unit of work over the shared pool. A write goes through
/// `begin` -> `transaction` -> `commit` | `rollback`.
pub struct DatabaseExecutor {
	pool: PgPool,
	transaction: Option<Transaction<'static, Postgres>>,
}

impl DatabaseExecutor {
	pub fn new(pool: PgPool) -> Self {
		Self { pool, transaction: None }
	}
	pub fn transaction(&mut self) -> Result<&mut Transaction<'static, Postgres>, ServiceError> {
		self.transaction
			.as_mut()
			.ok_or_else(|| ServiceError::DatabaseError("Transaction Has Not Begun!".into()))
	}

	pub(crate) async fn begin(&mut self) -> Result<(), ServiceError> {
		match self.transaction.as_mut() {
			None => {
				self.transaction = Some(self.pool.begin().await?);
				Ok(())
			}
			Some(_trx) => {
				tracing::error!("Transaction Begun Already!");
				Err(ServiceError::DatabaseError("Transaction Begun Already!".into()))
			}
		}
	}

	pub(crate) async fn commit(&mut self) -> Result<(), ServiceError> {
		let trx = mem::take(&mut self.transaction).ok_or_else(|| ServiceError::DatabaseError("Transaction Has Not Begun!".into()))?;
		trx.commit().await.map_err(|err| {
			tracing::error!("Error occurred during commit operation : {:?}", err);
			ServiceError::from(err)
		})
	}
	pub(crate) async fn rollback(&mut self) -> Result<(), ServiceError> {
		let trx = mem::take(&mut self.transaction).ok_or_else(|| ServiceError::DatabaseError("Transaction Has Not Begun!".into()))?;
		trx.rollback().await.map_err(ServiceError::from)
	}
}
