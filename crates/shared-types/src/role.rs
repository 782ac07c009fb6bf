use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse access level of a signed-in session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Role {
    #[serde(rename = "hod")]
    HeadOfDepartment,
    #[serde(rename = "sub-department-admin")]
    SubDepartmentAdmin,
    #[serde(rename = "team-member")]
    TeamMember,
}

impl Role {
    pub const ALL: [Role; 3] = [
        Role::HeadOfDepartment,
        Role::SubDepartmentAdmin,
        Role::TeamMember,
    ];

    /// Parse a stored role value. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "hod" => Some(Role::HeadOfDepartment),
            "sub-department-admin" => Some(Role::SubDepartmentAdmin),
            "team-member" => Some(Role::TeamMember),
            _ => None,
        }
    }

    /// Value written to session storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::HeadOfDepartment => "hod",
            Role::SubDepartmentAdmin => "sub-department-admin",
            Role::TeamMember => "team-member",
        }
    }

    /// Human-readable label used in greetings and headers.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::HeadOfDepartment => "Department Head",
            Role::SubDepartmentAdmin => "Sub-Department Admin",
            Role::TeamMember => "Team Member",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
