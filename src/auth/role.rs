use crate::models::domain::KeyRole;

/// Access level a request path+method demands before a handler may run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequiredRole {
    None,
    User,
    Admin,
    KeyManager,
}

/// Decides whether a held role satisfies a required level.
///
/// User-level access is open to every role. Admin and KeyManager each demand
/// an exact match; neither satisfies the other. `RequiredRole::None` permits
/// unconditionally.
pub fn permits(required: RequiredRole, held: KeyRole) -> bool {
    match required {
        RequiredRole::None => true,
        RequiredRole::User => matches!(
            held,
            KeyRole::User | KeyRole::Admin | KeyRole::KeyManager
        ),
        RequiredRole::Admin => held == KeyRole::Admin,
        RequiredRole::KeyManager => held == KeyRole::KeyManager,
    }
}
