//! Role to capability mapping
//!
//! A static lookup table answering point capability queries. `Visitor`
//! has no mutation capabilities, `User` can create, edit, and delete
//! their own contacts, and `Admin` has everything.

use rolodex_domain::{Capability, Role, RolePermissions};

const ADMIN_PERMISSIONS: RolePermissions = RolePermissions {
    can_create: true,
    can_edit: true,
    can_delete: true,
    can_view_all: true,
    can_manage_users: true,
};

const USER_PERMISSIONS: RolePermissions = RolePermissions {
    can_create: true,
    can_edit: true,
    can_delete: true,
    can_view_all: false,
    can_manage_users: false,
};

const VISITOR_PERMISSIONS: RolePermissions = RolePermissions {
    can_create: false,
    can_edit: false,
    can_delete: false,
    can_view_all: false,
    can_manage_users: false,
};

/// Static authorization table
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionGate;

impl PermissionGate {
    /// Full capability set for a role
    pub fn permissions_for(role: Role) -> RolePermissions {
        match role {
            Role::Admin => ADMIN_PERMISSIONS,
            Role::User => USER_PERMISSIONS,
            Role::Visitor => VISITOR_PERMISSIONS,
        }
    }

    /// Point capability query against the table
    pub fn allows(role: Role, capability: Capability) -> bool {
        Self::permissions_for(role).allows(capability)
    }
}
