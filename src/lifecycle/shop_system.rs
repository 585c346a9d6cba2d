use crate::clients::{
    CartClient, CustomerClient, InvoiceClient, InvoiceItemClient, ProductClient, UserClient,
};
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Channel capacity used by [`ShopSystem::new`].
pub const DEFAULT_BUFFER_SIZE: usize = 32;

/// The runtime orchestrator for the back office.
///
/// `ShopSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping every actor
/// - **Dependency Wiring**: handing each actor the clients its hooks need
///
/// # Architecture
///
/// | Actor | Context |
/// |---|---|
/// | Customer, Product, User | none |
/// | Invoice | `CustomerClient` |
/// | InvoiceItem | `(InvoiceClient, ProductClient)` |
/// | ShoppingCart | `(CustomerClient, ProductClient)` |
///
/// Dependencies only point towards parents, so no actor ever waits on one that is waiting on it.
///
/// # Example
///
/// ```ignore
/// let system = ShopSystem::new();
/// let alice = system.customer_client.create(fields).await?;
/// system.shutdown().await?;
/// ```
pub struct ShopSystem {
    pub customer_client: CustomerClient,
    pub product_client: ProductClient,
    pub invoice_client: InvoiceClient,
    pub invoice_item_client: InvoiceItemClient,
    pub cart_client: CartClient,
    pub user_client: UserClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl Default for ShopSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ShopSystem {
    /// Starts every actor with [`DEFAULT_BUFFER_SIZE`]. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        Self::with_buffer_size(DEFAULT_BUFFER_SIZE)
    }

    /// Starts every actor with request channels of `buffer_size`.
    pub fn with_buffer_size(buffer_size: usize) -> Self {
        // 1. Create actors (no dependencies yet)
        let (customer_actor, customer_client) = crate::customer_actor::new(buffer_size);
        let (product_actor, product_client) = crate::product_actor::new(buffer_size);
        let (invoice_actor, invoice_client) = crate::invoice_actor::new(buffer_size);
        let (invoice_item_actor, invoice_item_client) = crate::invoice_item_actor::new(buffer_size);
        let (cart_actor, cart_client) = crate::cart_actor::new(buffer_size);
        let (user_actor, user_client) = crate::user_actor::new(buffer_size);

        // 2. Start actors with injected context
        let handles = vec![
            tokio::spawn(customer_actor.run(())),
            tokio::spawn(product_actor.run(())),
            tokio::spawn(user_actor.run(())),
            tokio::spawn(invoice_actor.run(customer_client.clone())),
            tokio::spawn(
                invoice_item_actor.run((invoice_client.clone(), product_client.clone())),
            ),
            tokio::spawn(cart_actor.run((customer_client.clone(), product_client.clone()))),
        ];

        info!(actors = handles.len(), buffer_size, "Shop system started");
        Self {
            customer_client,
            product_client,
            invoice_client,
            invoice_item_client,
            cart_client,
            user_client,
            handles,
        }
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes the channels. Actors whose clients are also held as another
    /// actor's context stop once that actor has stopped, so every handle is awaited.
    ///
    /// Any clone still held elsewhere (for example by the HTTP state) keeps its actor alive;
    /// drop those first.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down system...");

        let Self {
            customer_client,
            product_client,
            invoice_client,
            invoice_item_client,
            cart_client,
            user_client,
            handles,
        } = self;
        drop((
            customer_client,
            product_client,
            invoice_client,
            invoice_item_client,
            cart_client,
            user_client,
        ));

        for handle in handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(e);
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
