//! Ownership Policy
//!
//! 所有権チェックは純粋な述語として実装する。I/O を伴わず、
//! 認証済み Identity の id と保存済みの所有者 id の一致のみで判定する。
//! ユーザー名など表示用の属性は一切関与しない。

use auth::domain::entity::Identity;
use kernel::id::UserId;

/// Whether `identity` may mutate a resource owned by `owner_id`
///
/// True iff the ids are equal. Callers must resolve NotFound before
/// consulting this policy so a missing resource never reports
/// Forbidden.
pub fn can_mutate(identity: &Identity, owner_id: UserId) -> bool {
    identity.id == owner_id
}
