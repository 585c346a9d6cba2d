use crate::error::StoreError;
use crate::framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
use crate::model::{Customer, Invoice, InvoiceItem, Product};
use async_trait::async_trait;

/// Client for the plain CRUD kinds.
///
/// Customers, products, invoices and invoice items need nothing beyond the store operations
/// provided by [`ActorClient`], so one generic wrapper serves all four.
#[derive(Clone)]
pub struct CatalogClient<T: ActorEntity> {
    inner: ResourceClient<T>,
}

pub type CustomerClient = CatalogClient<Customer>;
pub type ProductClient = CatalogClient<Product>;
pub type InvoiceClient = CatalogClient<Invoice>;
pub type InvoiceItemClient = CatalogClient<InvoiceItem>;

impl<T: ActorEntity> CatalogClient<T> {
    pub fn new(inner: ResourceClient<T>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<T: ActorEntity> ActorClient<T> for CatalogClient<T> {
    type Error = StoreError;

    fn inner(&self) -> &ResourceClient<T> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        StoreError::from(e)
    }
}

impl<T: ActorEntity> CatalogClient<T> {
    /// Succeeds when a row with `id` exists, otherwise [`StoreError::MissingReference`].
    ///
    /// Used by the hooks of kinds that reference this one.
    pub async fn ensure_exists(&self, id: T::Id) -> Result<(), StoreError> {
        match self.get(id.clone()).await? {
            Some(_) => Ok(()),
            None => Err(StoreError::MissingReference(id.to_string())),
        }
    }
}
