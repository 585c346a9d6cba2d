//! # Generic Messages
//!
//! Message types exchanged between a `ResourceClient` and its `ResourceActor`.

use crate::framework::entity::ActorEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// One-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Request sent to an actor.
///
/// The variants are the store operations every kind supports, plus `Action` for kind-specific
/// logic such as the shopping-cart guard.
///
/// - **Create**: assigns id and creation timestamp, builds the row from [`ActorEntity::Create`].
/// - **Get**: one row by id, `None` when absent.
/// - **List**: every row of the kind, in id order.
/// - **Replace**: overwrites the mutable fields from [`ActorEntity::Replace`].
/// - **Delete**: removes the row.
/// - **Action**: runs a custom [`ActorEntity::Action`] against one row.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Replace {
        id: T::Id,
        params: T::Replace,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}
