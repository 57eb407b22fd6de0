//! Sidebar navigation manifest, filtered per role.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::net::types::Role;
use crate::util::auth::{ADMIN_ROLES, COMPLIANCE_ROLES, STUDENT_ROLES, TEACHER_ROLES};

/// One sidebar entry with its role allow-set.
#[derive(Clone, Copy, Debug)]
pub struct NavItem {
    pub label: &'static str,
    pub path: &'static str,
    pub roles: &'static [Role],
}

/// Full navigation manifest. Items render only for sessions whose role is in
/// the item's allow-set.
pub const NAV_ITEMS: &[NavItem] = &[
    // Admin module
    NavItem { label: "Overview", path: "/app/admin", roles: ADMIN_ROLES },
    NavItem { label: "Teachers", path: "/app/admin/teachers", roles: ADMIN_ROLES },
    NavItem { label: "Students", path: "/app/admin/students", roles: ADMIN_ROLES },
    NavItem { label: "Classes", path: "/app/admin/classes", roles: ADMIN_ROLES },
    NavItem { label: "Rooms", path: "/app/admin/rooms", roles: ADMIN_ROLES },
    // Teacher module
    NavItem { label: "My Dashboard", path: "/app/teacher", roles: TEACHER_ROLES },
    // Student/Parent module
    NavItem { label: "My Dashboard", path: "/app/student", roles: STUDENT_ROLES },
    // Compliance module
    NavItem { label: "Compliance", path: "/app/compliance", roles: COMPLIANCE_ROLES },
];

/// Items visible to the given role. No role (or an unknown one) sees nothing.
pub fn items_for_role(role: Option<Role>) -> Vec<&'static NavItem> {
    let Some(role) = role else {
        return Vec::new();
    };
    NAV_ITEMS.iter().filter(|item| item.roles.contains(&role)).collect()
}

/// Landing route of a role's module, used by the `/app` index redirect.
/// An unknown role lands on the forbidden page, a missing one on login.
pub fn module_home(role: Option<Role>) -> &'static str {
    match role {
        Some(Role::Admin | Role::SuperAdmin) => "/app/admin",
        Some(Role::Teacher) => "/app/teacher",
        Some(Role::Student | Role::Parent) => "/app/student",
        Some(Role::Compliance) => "/app/compliance",
        Some(Role::Unknown) => "/403",
        None => "/login",
    }
}
