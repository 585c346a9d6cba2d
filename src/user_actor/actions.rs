//! Custom actions for the User actor.

/// Custom actions for User entities.
#[derive(Debug, Clone)]
pub enum UserAction {
    /// Returns the account's token, minting and storing one on first use.
    ///
    /// Credentials are checked by the caller before this is sent.
    IssueToken,
}
